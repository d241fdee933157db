use casekit_core::{Case, CaseError};
use colored::Colorize;

use super::Conversion;
use crate::prelude::{eprintln, println, *};

#[derive(Debug, serde::Serialize)]
struct ConversionJson<'a> {
    input: &'a str,
    case: Case,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a CaseError>,
}

impl<'a> From<&'a Conversion> for ConversionJson<'a> {
    fn from(conversion: &'a Conversion) -> Self {
        let (output, error, reason) = match &conversion.result {
            Ok(output) => (Some(output.as_str()), None, None),
            Err(err) => (None, Some(err.to_string()), Some(err)),
        };

        Self {
            input: &conversion.input,
            case: conversion.case,
            output,
            error,
            reason,
        }
    }
}

pub fn to_json(conversions: &[Conversion]) -> serde_json::Result<String> {
    let view: Vec<ConversionJson> = conversions.iter().map(ConversionJson::from).collect();
    serde_json::to_string_pretty(&view)
}

pub fn print_json(conversions: &[Conversion]) -> Result<()> {
    println!("{}", to_json(conversions)?);
    Ok(())
}

/// Successful line for plain output.
fn format_success(conversion: &Conversion, output: &str, verbose: bool) -> String {
    if verbose {
        format!(
            "{} {} {}",
            conversion.input.bright_black(),
            "=>".bright_black(),
            output.green()
        )
    } else {
        output.to_string()
    }
}

/// Converted text to stdout, one line per input.
///
/// Failures go to stderr only when there is more than one input; a single
/// failure is reported through the process exit error instead.
pub fn print_plain(conversions: &[Conversion], verbose: bool) {
    let report_errors = conversions.len() > 1;

    for conversion in conversions {
        match &conversion.result {
            Ok(output) => println!("{}", format_success(conversion, output, verbose)),
            Err(err) if report_errors => eprintln!(
                "{}: {:?}: {}",
                "error".red().bold(),
                conversion.input,
                err
            ),
            Err(_) => {}
        }
    }
}

fn table_cell(conversion: &Conversion) -> String {
    match &conversion.result {
        Ok(output) => output.green().to_string(),
        Err(err) => format!("error: {err}").red().to_string(),
    }
}

/// One row per input, one column per case.
pub fn print_table(conversions: &[Conversion]) {
    let mut table = new_table();

    let mut titles = vec![prettytable::Cell::new(&"Input".bold().cyan().to_string())];
    titles.extend(
        Case::ALL
            .iter()
            .map(|case| prettytable::Cell::new(&case.name().bold().cyan().to_string())),
    );
    table.add_row(prettytable::Row::new(titles));

    for row in conversions.chunks(Case::ALL.len()) {
        let Some(first) = row.first() else {
            continue;
        };

        let mut cells = vec![prettytable::Cell::new(&first.input.bright_white().to_string())];
        cells.extend(row.iter().map(|c| prettytable::Cell::new(&table_cell(c))));
        table.add_row(prettytable::Row::new(cells));
    }

    table.printstd();
}
