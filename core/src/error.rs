use thiserror::Error;

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown board type code '{code}' (expected FB, HB or NB)")]
    UnknownBoardType { code: String },

    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("Wizard step {step} does not exist (steps are 1..=3)")]
    StepOutOfRange { step: u8 },

    #[error("{command} is a navigation command; use next, back or start over")]
    NavigationCommand { command: &'static str },
}

pub type WizardResult<T> = Result<T, WizardError>;
