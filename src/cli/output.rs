use crate::cases::Case;
use crate::text::SeparatorCount;
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

#[derive(Debug, Clone, Serialize)]
pub struct TokensReport {
    pub input: String,
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeparatorReport {
    pub input: String,
    pub separator: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequencies: Option<Vec<SeparatorCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub input: String,
    pub case: Case,
    pub output: String,
}

/// Render a separator the way it would be written in a char literal
pub fn describe_separator(separator: Option<char>) -> String {
    match separator {
        Some(c) => format!("{:?}", c),
        None => "none".to_string(),
    }
}

fn print_json<T: Serialize>(reports: &[T]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

pub fn print_tokens(reports: &[TokensReport], colored_output: bool, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(reports),
        OutputFormat::Text => {
            for report in reports {
                if colored_output {
                    let tokens = report
                        .tokens
                        .iter()
                        .map(|t| t.green().to_string())
                        .collect::<Vec<_>>()
                        .join(" ");
                    println!("{}", tokens);
                } else {
                    println!("{}", report.tokens.join(" "));
                }
            }
            Ok(())
        }
    }
}

pub fn print_separators(
    reports: &[SeparatorReport],
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    if *format == OutputFormat::Json {
        return print_json(reports);
    }

    for report in reports {
        let separator = describe_separator(report.separator);
        if colored_output {
            if report.separator.is_some() {
                println!("{}", separator.cyan().bold());
            } else {
                println!("{}", separator.dimmed());
            }
        } else {
            println!("{}", separator);
        }

        if let Some(frequencies) = &report.frequencies {
            for entry in frequencies {
                let name = describe_separator(Some(entry.separator));
                if colored_output {
                    println!("  {} {}", name.blue(), entry.count.to_string().yellow());
                } else {
                    println!("  {} {}", name, entry.count);
                }
            }
        }

        if let Some(fields) = &report.fields {
            for (i, field) in fields.iter().enumerate() {
                if colored_output {
                    println!("  {} {}", format!("[{}]", i).dimmed(), field);
                } else {
                    println!("  [{}] {}", i, field);
                }
            }
        }
    }

    Ok(())
}

pub fn print_conversions(
    reports: &[ConversionReport],
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(reports),
        OutputFormat::Text => {
            for report in reports {
                if colored_output {
                    println!("{}", report.output.green().bold());
                } else {
                    println!("{}", report.output);
                }
            }
            Ok(())
        }
    }
}
