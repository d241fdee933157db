//! Core library for casekit
//!
//! This crate implements the **Functional Core** of the casekit application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`casekit_core`** (this crate): Pure text transformations with zero I/O
//! - **`casekit`**: argument parsing, stdin handling and output (the Imperative Shell)
//!
//! Every function here is deterministic and side-effect free, so it can be
//! called concurrently from any number of callers without coordination.
//!
//! # Module Organization
//!
//! - [`case`]: The casing conventions (camelCase, kebab-case, dot.case)
//! - [`policy`]: Input validation shared by every convention
//! - [`token`]: Character-class segmentation used by camelCase
//! - [`error`]: The single error type returned by every conversion
//!
//! # Example Usage
//!
//! ```rust
//! use casekit_core::{convert, Case};
//!
//! assert_eq!(convert(Case::Camel, "hello world").unwrap(), "helloWorld");
//! assert_eq!(convert(Case::Kebab, "Hello, World!").unwrap(), "hello-world");
//! assert_eq!(convert(Case::Dot, "My Name is John!").unwrap(), "my.name.is.john");
//! ```

pub mod case;
pub mod error;
pub mod policy;
pub mod token;

pub use case::{
    convert, to_camel_case, to_dot_case, to_kebab_case, to_kebab_case_with, Case, HardBreak,
};
pub use error::{CaseError, InvalidInputReason};
pub use policy::ValidationPolicy;
pub use token::{tokenize, Token, TokenKind};
