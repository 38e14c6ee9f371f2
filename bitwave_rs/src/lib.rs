pub mod error;
pub mod plot;
pub mod signal;
pub mod waveform;

pub use error::{BitwaveError, BitwaveResult};
pub use plot::PlotSurface;
pub use signal::Signal;
pub use waveform::WaveformPath;
