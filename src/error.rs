use crate::io::load::LoadError;
use crate::model::ModelError;

/// Exit code for configuration and file I/O failures.
pub const EXIT_IO: u8 = 2;
/// Exit code for runtime failures (a prediction that could not complete).
pub const EXIT_RUNTIME: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Startup-loading failures are fatal and must stop the session from starting.
impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        AppError::new(EXIT_IO, err.to_string())
    }
}

/// Model failures are per-request: the caller reports them and carries on.
impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        AppError::new(EXIT_RUNTIME, format!("Prediction failed: {err}"))
    }
}
