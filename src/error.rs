//! The error type shared by every calendrical operation.

use thiserror::Error;


/// Everything that can go wrong when building or converting a calendrical
/// value.
///
/// The variants are split the same way callers usually want to react to
/// them: bad input (`InvalidFieldValue`, `InvalidArgument`), numbers that
/// don’t fit (`Arithmetic`), lookups that have no answer (`Conversion`,
/// `UnsupportedRule`), and capabilities that a particular value simply
/// doesn’t have (`Unsupported`).
#[derive(Error, PartialEq, Debug, Clone)]
pub enum Error {

    /// A field value fell outside the range its rule allows.
    #[error("invalid value for {rule}: {value} (valid values are {min} - {max})")]
    InvalidFieldValue {
        rule: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// An argument other than a field value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A calculation overflowed, or divided by zero.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// There is no equivalence path from one period unit to any of the
    /// requested ones.
    #[error("unable to convert {from} to any of [{}]", .to.join(", "))]
    Conversion {
        from: String,
        to: Vec<String>,
    },

    /// A rule had no value, directly or by derivation.
    #[error("rule {rule} is not supported by {target}")]
    UnsupportedRule {
        rule: &'static str,
        target: String,
    },

    /// The operation is intentionally not implemented by this variant.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// A zone resolver refused to map a local date-time onto the
    /// time-line.
    #[error("unable to resolve local date-time: {0}")]
    Resolution(String),

    /// Text could not be parsed as an ISO-8601 value.
    #[cfg(feature = "parse")]
    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
