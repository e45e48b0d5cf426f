use thiserror::Error;

pub type VmResult<T> = Result<T, VmError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VmError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
