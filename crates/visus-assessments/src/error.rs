use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    /// A Snellen denominator of zero or less has no decimal or LogMAR form.
    #[error("snellen denominator must be positive, got {0}")]
    InvalidDenominator(f64),
}
