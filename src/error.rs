use thiserror::Error;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command '{0}' failed with exit code {1}")]
    CommandFailed(String, i32),

    #[error("Command '{0}' not found — is it installed?")]
    CommandNotFound(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
