use thiserror::Error;

pub type BitwaveTuiResult<T> = Result<T, BitwaveTuiError>;

#[derive(Error, Debug)]
pub enum BitwaveTuiError {
    #[error("bitwave_tui: IO error: {}", _0)]
    Io(std::io::Error),
    #[error("bitwave_tui: {}", _0)]
    Core(bitwave_rs::BitwaveError),
}

impl From<std::io::Error> for BitwaveTuiError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<bitwave_rs::BitwaveError> for BitwaveTuiError {
    fn from(error: bitwave_rs::BitwaveError) -> Self {
        Self::Core(error)
    }
}

impl From<bitwave_rs::plot::Error> for BitwaveTuiError {
    fn from(error: bitwave_rs::plot::Error) -> Self {
        Self::Core(error.into())
    }
}
