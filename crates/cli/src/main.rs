use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use facelog_core::presentation::results_table::ResultsTable;
use facelog_core::presentation::text_renderer::render_table;
use facelog_core::recognition::domain::expansion_state::ExpansionState;
use facelog_core::recognition::domain::recognition_result::RecognitionResult;
use facelog_core::recognition::domain::result_reader::ResultReader;
use facelog_core::recognition::infrastructure::json_result_reader::JsonResultReader;
use facelog_core::shared::constants::STDIN_PATH;

/// Show face recognition results grouped by identity.
#[derive(Parser)]
#[command(name = "facelog")]
struct Cli {
    /// Recognition results JSON file, or "-" for stdin.
    input: PathBuf,

    /// Expand these identities to list their timestamps (comma-separated).
    #[arg(long, value_delimiter = ',')]
    expand: Option<Vec<String>>,

    /// Expand every identity.
    #[arg(long)]
    expand_all: bool,

    /// Output format: table or json.
    #[arg(long, default_value = "table")]
    format: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let result = read_result(&cli.input)?;

    if cli.format == "json" {
        println!("{}", serde_json::to_string_pretty(&result.grouped())?);
        return Ok(());
    }

    let expansion = build_expansion(&cli, &result);
    if let Some(table) = ResultsTable::build(Some(&result), true, &expansion) {
        print!("{}", render_table(&table));
    }
    Ok(())
}

fn read_result(input: &Path) -> Result<RecognitionResult, Box<dyn std::error::Error>> {
    let reader = JsonResultReader::new();
    if is_stdin(input) {
        let mut json = String::new();
        io::stdin().read_to_string(&mut json)?;
        Ok(reader.parse(&json, Path::new("<stdin>"))?)
    } else {
        Ok(reader.read(input)?)
    }
}

fn build_expansion(cli: &Cli, result: &RecognitionResult) -> ExpansionState {
    let mut expansion = ExpansionState::new();
    if cli.expand_all {
        for label in result.grouped().labels() {
            expansion.toggle(label);
        }
    } else if let Some(labels) = &cli.expand {
        for label in labels {
            if !expansion.is_expanded(label) {
                expansion.toggle(label);
            }
        }
        let grouped = result.grouped();
        for label in labels.iter().filter(|l| !grouped.contains(l.as_str())) {
            log::warn!("No detections for identity '{label}'");
        }
    }
    expansion
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !is_stdin(&cli.input) && !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.expand.is_some() && cli.expand_all {
        return Err("--expand and --expand-all are mutually exclusive".into());
    }
    if cli.format != "table" && cli.format != "json" {
        return Err(format!("Format must be 'table' or 'json', got '{}'", cli.format).into());
    }
    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}
