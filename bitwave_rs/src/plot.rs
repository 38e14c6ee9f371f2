use thiserror::Error;

use crate::error::{BitwaveError, BitwaveResult};
use crate::signal::Signal;
use crate::waveform::WaveformPath;

/// Capability set of a 2D line-plot backend.
///
/// The setters accumulate plot state; `show` draws the accumulated plot.
/// Only `show` can fail, with whatever the backend surfaces.
pub trait PlotSurface {
    fn draw_polyline(&mut self, points: &[(f64, f64)]);

    fn set_x_ticks(&mut self, ticks: &[f64]);

    fn set_y_ticks(&mut self, ticks: &[f64]);

    fn set_y_limits(&mut self, min: f64, max: f64);

    fn set_title(&mut self, title: &str);

    fn enable_grid(&mut self, weight: f64);

    fn show(&mut self) -> Result<(), Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("backend: {}", _0)]
    Backend(String),
}

impl From<Error> for BitwaveError {
    fn from(value: Error) -> Self {
        BitwaveError::Plot(value)
    }
}

const Y_TICKS: [f64; 3] = [-1.0, 0.0, 1.0];
const Y_MARGIN: f64 = 0.1;

/// Draws `signal` as a step waveform on `surface`.
///
/// X ticks sit at every unit boundary 0..=N, y ticks at the logic levels
/// plus -1 for symmetric framing, and the y range extends slightly past
/// the levels so the flat segments do not touch the plot edge. The plot
/// is titled with the original signal text.
pub fn render<S: PlotSurface>(signal: &Signal, surface: &mut S) -> BitwaveResult<()> {
    let path = WaveformPath::from_signal(signal);
    let x_ticks: Vec<f64> = (0..=signal.len()).map(|i| i as f64).collect();

    surface.set_x_ticks(&x_ticks);
    surface.set_y_ticks(&Y_TICKS);
    surface.set_y_limits(-1.0 - Y_MARGIN, 1.0 + Y_MARGIN);
    surface.draw_polyline(&path.points());
    surface.enable_grid(0.5);
    surface.set_title(signal.text());
    surface.show()?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::{render, Error, PlotSurface};
    use crate::signal::Signal;

    #[derive(Debug, PartialEq)]
    enum Call {
        Polyline(Vec<(f64, f64)>),
        XTicks(Vec<f64>),
        YTicks(Vec<f64>),
        YLimits(f64, f64),
        Title(String),
        Grid(f64),
        Show,
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
    }

    impl PlotSurface for RecordingSurface {
        fn draw_polyline(&mut self, points: &[(f64, f64)]) {
            self.calls.push(Call::Polyline(points.to_vec()));
        }

        fn set_x_ticks(&mut self, ticks: &[f64]) {
            self.calls.push(Call::XTicks(ticks.to_vec()));
        }

        fn set_y_ticks(&mut self, ticks: &[f64]) {
            self.calls.push(Call::YTicks(ticks.to_vec()));
        }

        fn set_y_limits(&mut self, min: f64, max: f64) {
            self.calls.push(Call::YLimits(min, max));
        }

        fn set_title(&mut self, title: &str) {
            self.calls.push(Call::Title(title.to_string()));
        }

        fn enable_grid(&mut self, weight: f64) {
            self.calls.push(Call::Grid(weight));
        }

        fn show(&mut self) -> Result<(), Error> {
            self.calls.push(Call::Show);
            Ok(())
        }
    }

    #[test]
    fn test_render_issues_full_call_sequence() {
        let signal = Signal::parse("0101").unwrap();
        let mut surface = RecordingSurface::default();

        render(&signal, &mut surface).unwrap();

        assert_eq!(
            surface.calls,
            vec![
                Call::XTicks(vec![0.0, 1.0, 2.0, 3.0, 4.0]),
                Call::YTicks(vec![-1.0, 0.0, 1.0]),
                Call::YLimits(-1.1, 1.1),
                Call::Polyline(vec![
                    (0.0, 0.0),
                    (1.0, 0.0),
                    (1.0, 1.0),
                    (2.0, 1.0),
                    (2.0, 0.0),
                    (3.0, 0.0),
                    (3.0, 1.0),
                    (4.0, 1.0),
                ]),
                Call::Grid(0.5),
                Call::Title("0101".to_string()),
                Call::Show,
            ]
        );
    }

    #[test]
    fn test_render_propagates_backend_failure() {
        struct FailingSurface;

        impl PlotSurface for FailingSurface {
            fn draw_polyline(&mut self, _points: &[(f64, f64)]) {}
            fn set_x_ticks(&mut self, _ticks: &[f64]) {}
            fn set_y_ticks(&mut self, _ticks: &[f64]) {}
            fn set_y_limits(&mut self, _min: f64, _max: f64) {}
            fn set_title(&mut self, _title: &str) {}
            fn enable_grid(&mut self, _weight: f64) {}

            fn show(&mut self) -> Result<(), Error> {
                Err(Error::Backend("display unavailable".to_string()))
            }
        }

        let signal = Signal::parse("1").unwrap();

        assert!(render(&signal, &mut FailingSurface).is_err());
    }
}
