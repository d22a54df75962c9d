use crate::convert::Case;
use crate::samples::SampleResult;
use crate::Conversion;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    output: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    case: String,
    total: usize,
    conversions: Vec<JsonConversion>,
}

pub fn print_conversions(conversions: &[Conversion], case: Case, format: &OutputFormat) {
    match format {
        OutputFormat::Text => {
            // Result lines only, so output stays pipeable
            for conversion in conversions {
                println!("{}", conversion.output);
            }
        }
        OutputFormat::Json => print_json_conversions(conversions, case),
    }
}

fn print_json_conversions(conversions: &[Conversion], case: Case) {
    let json_conversions: Vec<JsonConversion> = conversions
        .iter()
        .map(|c| JsonConversion {
            input: c.input.clone(),
            output: c.output.clone(),
        })
        .collect();

    let output = JsonOutput {
        case: case.to_string(),
        total: json_conversions.len(),
        conversions: json_conversions,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

/// Print a row per sample plus a summary line; returns the failure count
pub fn print_samples_report(results: &[SampleResult], colored: bool) -> usize {
    let mut failed = 0;
    let mut last_case = None;

    for result in results {
        if last_case != Some(result.case) {
            let heading = result.case.to_string();
            if colored {
                println!("\n{}", heading.bold().underline());
            } else {
                println!("\n{}", heading);
            }
            last_case = Some(result.case);
        }

        if result.passed() {
            if colored {
                println!(
                    "  {} {:?} {} {:?}",
                    "✓".green(),
                    result.input,
                    "→".dimmed(),
                    result.actual
                );
            } else {
                println!("  ✓ {:?} → {:?}", result.input, result.actual);
            }
        } else {
            failed += 1;
            if colored {
                println!(
                    "  {} {:?} {} {:?} (expected {:?})",
                    "✗".red().bold(),
                    result.input,
                    "→".dimmed(),
                    result.actual,
                    result.expected
                );
            } else {
                println!(
                    "  ✗ {:?} → {:?} (expected {:?})",
                    result.input, result.actual, result.expected
                );
            }
        }
    }

    println!();
    if failed == 0 {
        let message = format!("✓ All {} samples passed!", results.len());
        if colored {
            println!("{}", message.green().bold());
        } else {
            println!("{}", message);
        }
    } else {
        let sample_word = if failed == 1 { "sample" } else { "samples" };
        if colored {
            println!(
                "{} {} {} of {} failed",
                "✗".red().bold(),
                failed.to_string().red().bold(),
                sample_word,
                results.len()
            );
        } else {
            println!("✗ {} {} of {} failed", failed, sample_word, results.len());
        }
    }

    failed
}
