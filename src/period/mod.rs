//! Units of time, and amounts of them.

mod field;
mod unit;

pub use self::field::PeriodField;
pub use self::unit::PeriodUnit;
