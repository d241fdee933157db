use casekit_core::CaseError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Conversion failed: {0}")]
    Conversion(#[from] CaseError),

    #[error("No input: pass TEXT arguments or pipe sentences through stdin")]
    NoInput,

    #[error("{failed} of {total} conversions failed")]
    PartialFailure { failed: usize, total: usize },
}
