use crate::{plot, signal};

pub type BitwaveResult<T> = Result<T, BitwaveError>;

#[derive(Debug, thiserror::Error)]
pub enum BitwaveError {
    #[error("bitwave_rs: signal: {}", _0)]
    Signal(signal::Error),
    #[error("bitwave_rs: plot: {}", _0)]
    Plot(plot::Error),
}
