#[cfg(feature = "python")]
pub mod convert;
#[cfg(feature = "python")]
pub mod evaluation;
pub mod quantile;
