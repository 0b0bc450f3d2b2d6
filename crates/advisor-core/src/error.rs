use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Out-of-domain numeric input: non-positive price, NaN/infinite score.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reserved for callers that treat a short series as fatal at their own
    /// boundary; the indicator calculators themselves degrade to sentinels
    /// instead of returning this.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}
