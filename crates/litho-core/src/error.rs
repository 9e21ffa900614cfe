use thiserror::Error;

#[derive(Error, Debug)]
pub enum LithoError {
    #[error("bossung sweep requires focusSteps >= 1 (got {0})")]
    InvalidFocusSteps(usize),

    #[error("bossung sweep requires doseSteps >= 1 (got {0})")]
    InvalidDoseSteps(usize),
}

pub type Result<T> = std::result::Result<T, LithoError>;
