//! Casing conventions
//!
//! Each convention lives in its own submodule and follows the same shape:
//! validate with the convention's [`ValidationPolicy`], then render. All of
//! them return [`CaseError`] on failure; none of them keep state between calls.

mod camel;
mod dot;
mod kebab;

use serde::{Deserialize, Serialize};

use crate::error::CaseError;
use crate::policy::ValidationPolicy;

pub use camel::to_camel_case;
pub use dot::to_dot_case;
pub use kebab::{to_kebab_case, to_kebab_case_with, HardBreak};

/// Target casing convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Camel,
    Kebab,
    Dot,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Camel, Case::Kebab, Case::Dot];

    /// The convention's name written in the convention itself.
    pub fn name(self) -> &'static str {
        match self {
            Case::Camel => "camelCase",
            Case::Kebab => "kebab-case",
            Case::Dot => "dot.case",
        }
    }

    /// The validation checks applied before converting to this case.
    pub fn policy(self) -> ValidationPolicy {
        match self {
            Case::Camel | Case::Dot => ValidationPolicy::sentence(),
            Case::Kebab => ValidationPolicy::strict(),
        }
    }
}

impl std::fmt::Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert `sentence` to the given case.
pub fn convert(case: Case, sentence: &str) -> Result<String, CaseError> {
    match case {
        Case::Camel => to_camel_case(sentence),
        Case::Kebab => to_kebab_case(sentence),
        Case::Dot => to_dot_case(sentence),
    }
}
