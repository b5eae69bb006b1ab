pub mod output;

use crate::cases::Case;
use crate::text::{most_frequent_separator, separator_frequencies, split_fields, tokenize};
use anyhow::{Context, Result};
use output::{ConversionReport, SeparatorReport, TokensReport};
use rayon::prelude::*;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Gather inputs from positional args, then `file` (one input per line).
/// Falls back to stdin when neither supplied anything.
pub fn collect_inputs(texts: Vec<String>, file: Option<&Path>) -> Result<Vec<String>> {
    let mut inputs = texts;

    if let Some(path) = file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        inputs.extend(content.lines().map(str::to_string));
    } else if inputs.is_empty() {
        log::debug!("no inputs given, reading stdin");
        for line in io::stdin().lock().lines() {
            inputs.push(line.context("Failed to read stdin")?);
        }
    }

    Ok(inputs)
}

pub fn tokens_reports(inputs: &[String]) -> Vec<TokensReport> {
    inputs
        .par_iter()
        .map(|input| TokensReport {
            input: input.clone(),
            tokens: tokenize(input),
        })
        .collect()
}

pub fn separator_reports(
    inputs: &[String],
    priority: Option<&[char]>,
    counts: bool,
    split: bool,
) -> Vec<SeparatorReport> {
    inputs
        .par_iter()
        .map(|input| SeparatorReport {
            input: input.clone(),
            separator: most_frequent_separator(input, priority),
            frequencies: counts.then(|| separator_frequencies(input, priority)),
            fields: split.then(|| {
                split_fields(input, priority)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            }),
        })
        .collect()
}

pub fn conversion_reports(inputs: &[String], case: Case) -> Vec<ConversionReport> {
    inputs
        .par_iter()
        .map(|input| ConversionReport {
            input: input.clone(),
            case,
            output: case.apply(input),
        })
        .collect()
}
