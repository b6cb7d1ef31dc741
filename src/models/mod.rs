pub mod enums;
pub mod lab;

pub use enums::{PatternType, RiskDomain, Severity};
pub use lab::LabValue;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
