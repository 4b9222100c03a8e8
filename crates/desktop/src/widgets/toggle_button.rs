use std::time::Duration;

use iced::border::Border;
use iced::widget::{button, mouse_area, text};
use iced::{Color, Element, Theme};
use iced_anim::transition::Easing;
use iced_anim::AnimationBuilder;

const CORNER_RADIUS: f32 = 6.0;
const HOVER_TINT_ALPHA: f32 = 0.10;
const ANIMATION_DURATION: Duration = Duration::from_millis(150);

/// Borderless text button in the primary color, used for the
/// "Show timestamps" / "Hide timestamps" row action.
///
/// Hovering fades in a light primary tint behind the caption.
pub fn toggle_button<'a, Message: Clone + 'a>(
    caption: &'static str,
    size: f32,
    on_press: Message,
    hovered: bool,
    on_hover: impl Fn(bool) -> Message + 'a,
) -> Element<'a, Message> {
    let target = if hovered { 1.0_f32 } else { 0.0 };

    let animated: Element<'a, Message> = AnimationBuilder::new(target, move |t: f32| {
        let t = t.clamp(0.0, 1.0);
        build_button(caption, size, &on_press, t)
    })
    .animation(Easing::EASE_OUT.with_duration(ANIMATION_DURATION))
    .into();

    mouse_area(animated)
        .on_enter(on_hover(true))
        .on_exit(on_hover(false))
        .into()
}

fn build_button<'a, Message: Clone + 'a>(
    caption: &'static str,
    size: f32,
    on_press: &Message,
    hover_amount: f32,
) -> Element<'a, Message> {
    button(text(caption).size(size).font(iced::Font {
        weight: iced::font::Weight::Medium,
        ..iced::Font::DEFAULT
    }))
    .on_press(on_press.clone())
    .padding([2, 6])
    .style(move |theme: &Theme, status: button::Status| {
        let amount = if status == button::Status::Pressed {
            1.0
        } else {
            hover_amount
        };
        styled(theme, amount)
    })
    .into()
}

fn styled(theme: &Theme, hover_amount: f32) -> button::Style {
    let primary = theme.palette().primary;
    let tint = Color {
        a: HOVER_TINT_ALPHA * hover_amount,
        ..primary
    };

    button::Style {
        background: Some(tint.into()),
        text_color: primary,
        border: Border {
            radius: CORNER_RADIUS.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_style_has_transparent_tint() {
        let style = styled(&Theme::Light, 0.0);
        match style.background {
            Some(iced::Background::Color(c)) => assert_eq!(c.a, 0.0),
            other => panic!("unexpected background {other:?}"),
        }
        assert_eq!(style.text_color, Theme::Light.palette().primary);
    }

    #[test]
    fn test_hovered_style_is_tinted() {
        let style = styled(&Theme::Light, 1.0);
        match style.background {
            Some(iced::Background::Color(c)) => {
                assert!((c.a - HOVER_TINT_ALPHA).abs() < f32::EPSILON)
            }
            other => panic!("unexpected background {other:?}"),
        }
    }
}
