use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

use crate::settings::Appearance;

/// Resolve the iced Theme from appearance + high_contrast settings.
pub fn resolve_theme(appearance: Appearance, high_contrast: bool) -> Theme {
    let is_dark = match appearance {
        Appearance::Dark => true,
        Appearance::Light => false,
        Appearance::System => detect_system_dark_mode(),
    };

    let palette = match (is_dark, high_contrast) {
        (true, false) => dark_palette(),
        (false, false) => light_palette(),
        (true, true) => high_contrast_dark_palette(),
        (false, true) => high_contrast_light_palette(),
    };

    Theme::custom("Facelog", palette)
}

/// Card background: white on light themes, lifted slightly on dark ones.
pub fn surface_color(theme: &Theme) -> Color {
    let p = theme.palette();
    if luma(p.background) > 0.5 {
        Color::WHITE
    } else {
        Color {
            r: (p.background.r + 0.06).min(1.0),
            g: (p.background.g + 0.06).min(1.0),
            b: (p.background.b + 0.06).min(1.0),
            a: 1.0,
        }
    }
}

/// Table header and hovered-row tint.
pub fn surface_alt_color(theme: &Theme) -> Color {
    let p = theme.palette();
    if luma(p.background) > 0.5 {
        color!(0xf9, 0xfa, 0xfb)
    } else {
        Color {
            r: (p.background.r + 0.12).min(1.0),
            g: (p.background.g + 0.12).min(1.0),
            b: (p.background.b + 0.12).min(1.0),
            a: 1.0,
        }
    }
}

/// Secondary text (column headings, the "Recognized" status).
pub fn muted_color(theme: &Theme) -> Color {
    Color {
        a: 0.65,
        ..theme.palette().text
    }
}

/// Least prominent text (timestamps, empty-state body).
pub fn tertiary_color(theme: &Theme) -> Color {
    Color {
        a: 0.5,
        ..theme.palette().text
    }
}

pub fn border_color(theme: &Theme) -> Color {
    Color {
        a: 0.12,
        ..theme.palette().text
    }
}

fn luma(c: Color) -> f32 {
    c.r * 0.299 + c.g * 0.587 + c.b * 0.114
}

fn dark_palette() -> Palette {
    Palette {
        background: color!(0x1c, 0x1c, 0x1e),
        text: color!(0xe5, 0xe7, 0xeb),
        primary: color!(0x60, 0xa5, 0xfa),
        success: color!(0x4a, 0xde, 0x80),
        warning: color!(0xfb, 0xbf, 0x24),
        danger: color!(0xf8, 0x71, 0x71),
    }
}

fn light_palette() -> Palette {
    Palette {
        background: color!(0xf3, 0xf4, 0xf6),
        text: color!(0x11, 0x18, 0x27),
        primary: color!(0x25, 0x64, 0xeb),
        success: color!(0x16, 0xa3, 0x4a),
        warning: color!(0xd9, 0x77, 0x06),
        danger: color!(0xdc, 0x26, 0x26),
    }
}

fn high_contrast_dark_palette() -> Palette {
    Palette {
        background: color!(0x00, 0x00, 0x00),
        text: color!(0xff, 0xff, 0xff),
        primary: color!(0x93, 0xc5, 0xfd),
        success: color!(0x86, 0xef, 0xac),
        warning: color!(0xfd, 0xe0, 0x47),
        danger: color!(0xfc, 0xa5, 0xa5),
    }
}

fn high_contrast_light_palette() -> Palette {
    Palette {
        background: color!(0xff, 0xff, 0xff),
        text: color!(0x00, 0x00, 0x00),
        primary: color!(0x1e, 0x3a, 0x8a),
        success: color!(0x14, 0x53, 0x2d),
        warning: color!(0x78, 0x35, 0x0f),
        danger: color!(0x7f, 0x1d, 0x1d),
    }
}

fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|o| {
                String::from_utf8_lossy(&o.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
            })
            .unwrap_or(false)
    }
    #[cfg(not(target_os = "macos"))]
    {
        false
    }
}
