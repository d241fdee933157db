use casekit_core::{Case, HardBreak};

use super::{check_failures, output, read_inputs, Conversion, ConvertOptions};
use crate::prelude::*;

/// Every input converted to every case, grouped by input.
pub fn convert_all(inputs: &[String]) -> Vec<Conversion> {
    inputs
        .iter()
        .flat_map(|input| {
            Case::ALL
                .into_iter()
                .map(move |case| Conversion::new(input, case, HardBreak::Collapse))
        })
        .collect()
}

/// Module entry point for `all`
pub fn run(options: ConvertOptions, global: &crate::Global) -> Result<()> {
    let inputs = read_inputs(&options)?;
    log::debug!("Converting {} input(s) to every case", inputs.len());

    let conversions = convert_all(&inputs);

    if global.json {
        output::print_json(&conversions)?;
    } else {
        output::print_table(&conversions);
    }

    check_failures(&conversions)?;
    Ok(())
}
