use anyhow::{Context, Result};
use casefmt::cli::output::OutputFormat;
use casefmt::{cli, convert, numeric, samples, Config, Conversion};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "casefmt")]
#[command(version, about = "Convert identifiers between kebab-case and camelCase", long_about = None)]
struct Cli {
    /// Values to convert
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target case (kebab, camel)
    #[arg(short, long)]
    case: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<String>,

    /// Parse inputs as JSON literals; non-text values are rejected
    #[arg(long)]
    json_input: bool,

    /// Read additional inputs from a file, one per line
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Run the built-in conversion samples
    Samples,
    /// Validate two numeric inputs and print their sum
    Sum {
        /// Values to add
        #[arg(value_name = "VALUES", num_args = 0..=2)]
        values: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "casefmt", &mut io::stdout());
        return Ok(());
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command, !cli.no_color);
    }

    // Load configuration
    let config = Config::load(cli.case.clone(), cli.format.clone(), cli.json_input)?;
    let case: convert::Case = config.case.parse().map_err(anyhow::Error::msg)?;
    let format: OutputFormat = config.format.parse().map_err(anyhow::Error::msg)?;

    // Gather inputs
    let mut inputs = cli.inputs.clone();
    if let Some(path) = &cli.file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        inputs.extend(content.lines().map(|line| line.to_string()));
    }

    if inputs.is_empty() {
        anyhow::bail!("No inputs specified. Use --help for usage information.");
    }

    // Convert
    let mut conversions = Vec::with_capacity(inputs.len());
    for raw in &inputs {
        let text = if config.json_input {
            let value: Value = serde_json::from_str(raw)
                .with_context(|| format!("Invalid JSON input: {}", raw))?;
            convert::expect_text(&value)?.to_string()
        } else {
            raw.clone()
        };

        conversions.push(Conversion {
            output: case.apply(&text),
            input: text,
        });
    }

    cli::output::print_conversions(&conversions, case, &format);

    Ok(())
}

fn handle_command(command: Commands, colored: bool) -> Result<()> {
    match command {
        Commands::Samples => {
            let results = samples::verify_all();
            let failed = cli::output::print_samples_report(&results, colored);
            if failed > 0 {
                std::process::exit(1);
            }
        }
        Commands::Sum { values } => {
            let a = values.first().map(|raw| parse_value(raw));
            let b = values.get(1).map(|raw| parse_value(raw));
            let sum = numeric::add_validated(a.as_ref(), b.as_ref())?;
            println!("{}", sum);
        }
    }
    Ok(())
}

/// Arguments that are not valid JSON are treated as plain strings, so
/// the validator rejects them as non-numeric rather than as a parse error
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
