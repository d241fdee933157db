pub mod all;
mod input;
mod output;

use casekit_core::{convert, to_kebab_case_with, Case, CaseError, HardBreak};
use std::io::IsTerminal;

use crate::prelude::*;

#[derive(Debug, Clone, clap::Args)]
pub struct ConvertOptions {
    /// Text to convert, words joined with spaces. Reads one sentence per stdin line when omitted or "-"
    pub text: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct KebabOptions {
    #[clap(flatten)]
    pub convert: ConvertOptions,

    /// Keep `--` between sentences instead of collapsing it into `-`
    #[arg(long, env = "CASEKIT_PRESERVE_BREAKS")]
    pub preserve_breaks: bool,
}

impl KebabOptions {
    pub fn hard_break(&self) -> HardBreak {
        if self.preserve_breaks {
            HardBreak::Preserve
        } else {
            HardBreak::Collapse
        }
    }
}

/// One input run through one conversion
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub input: String,
    pub case: Case,
    pub result: Result<String, CaseError>,
}

impl Conversion {
    pub fn new(input: &str, case: Case, hard_break: HardBreak) -> Self {
        let result = match case {
            Case::Kebab => to_kebab_case_with(input, hard_break),
            case => convert(case, input),
        };

        Self {
            input: input.to_string(),
            case,
            result,
        }
    }
}

pub fn convert_inputs(inputs: &[String], case: Case, hard_break: HardBreak) -> Vec<Conversion> {
    inputs
        .iter()
        .map(|input| Conversion::new(input, case, hard_break))
        .collect()
}

/// Map failed conversions to the error the process exits with.
///
/// A lone failed input surfaces its own error; batches report a count since
/// the individual failures were already printed line by line.
pub fn check_failures(conversions: &[Conversion]) -> Result<(), Error> {
    let failures: Vec<&CaseError> = conversions
        .iter()
        .filter_map(|c| c.result.as_ref().err())
        .collect();

    match failures.as_slice() {
        [] => Ok(()),
        [only] if conversions.len() == 1 => Err(Error::Conversion((*only).clone())),
        _ => Err(Error::PartialFailure {
            failed: failures.len(),
            total: conversions.len(),
        }),
    }
}

/// Read inputs from the command line or stdin.
fn read_inputs(options: &ConvertOptions) -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    input::collect(&options.text, stdin.lock(), interactive)
}

/// Module entry point for the single-case subcommands
pub fn run(
    case: Case,
    hard_break: HardBreak,
    options: ConvertOptions,
    global: &crate::Global,
) -> Result<()> {
    let inputs = read_inputs(&options)?;
    log::debug!("Converting {} input(s) to {}", inputs.len(), case);

    let conversions = convert_inputs(&inputs, case, hard_break);

    if global.json {
        output::print_json(&conversions)?;
    } else {
        output::print_plain(&conversions, global.verbose);
    }

    check_failures(&conversions)?;
    Ok(())
}
