use bitwave_rs::plot::{self, PlotSurface};
use ratatui::{backend::Backend, Terminal};

use crate::widgets::WaveformChart;

/// Terminal-backed plot surface.
///
/// Setter calls accumulate chart state; `show` draws one frame with the
/// accumulated state. The surface owns its terminal handle for its whole
/// lifetime.
pub struct ChartSurface<B: Backend> {
    terminal: Terminal<B>,
    title: String,
    x_ticks: Vec<f64>,
    y_ticks: Vec<f64>,
    y_limits: (f64, f64),
    grid_weight: Option<f64>,
    polylines: Vec<Vec<(f64, f64)>>,
}

impl<B: Backend> ChartSurface<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            title: String::new(),
            x_ticks: vec![],
            y_ticks: vec![],
            y_limits: (-1.0, 1.0),
            grid_weight: None,
            polylines: vec![],
        }
    }

    /// Draws the accumulated chart again, e.g. after a terminal resize.
    pub fn redraw(&mut self) -> Result<(), plot::Error> {
        let chart = self.chart();
        self.terminal
            .draw(|frame| frame.render_widget(chart, frame.area()))
            .map(|_| ())
            .map_err(|e| plot::Error::Backend(e.to_string()))
    }

    fn chart(&self) -> WaveformChart {
        let mut chart = WaveformChart::default()
            .title(self.title.clone())
            .x_ticks(self.x_ticks.clone())
            .y_ticks(self.y_ticks.clone())
            .y_limits(self.y_limits.0, self.y_limits.1);
        if let Some(weight) = self.grid_weight {
            chart = chart.grid_weight(weight);
        }
        for points in &self.polylines {
            chart = chart.polyline(points.clone());
        }
        chart
    }
}

impl<B: Backend> PlotSurface for ChartSurface<B> {
    fn draw_polyline(&mut self, points: &[(f64, f64)]) {
        self.polylines.push(points.to_vec());
    }

    fn set_x_ticks(&mut self, ticks: &[f64]) {
        self.x_ticks = ticks.to_vec();
    }

    fn set_y_ticks(&mut self, ticks: &[f64]) {
        self.y_ticks = ticks.to_vec();
    }

    fn set_y_limits(&mut self, min: f64, max: f64) {
        self.y_limits = (min, max);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn enable_grid(&mut self, weight: f64) {
        self.grid_weight = Some(weight);
    }

    fn show(&mut self) -> Result<(), plot::Error> {
        self.redraw()
    }
}

#[cfg(test)]
mod test {
    use bitwave_rs::{plot, Signal};
    use ratatui::{backend::TestBackend, Terminal};

    use super::ChartSurface;

    #[test]
    fn test_render_draws_titled_chart() {
        let mut surface = setup();
        let signal = Signal::parse("0101").unwrap();

        plot::render(&signal, &mut surface).unwrap();

        let text = backend_text(&surface);
        assert!(text.contains("0101"));
        assert!(text.contains("-1"));
    }

    #[test]
    fn test_redraw_repeats_the_same_frame() {
        let mut surface = setup();
        let signal = Signal::parse("1101").unwrap();

        plot::render(&signal, &mut surface).unwrap();
        let first = surface.terminal.backend().buffer().clone();
        surface.redraw().unwrap();

        assert_eq!(surface.terminal.backend().buffer(), &first);
    }

    fn setup() -> ChartSurface<TestBackend> {
        ChartSurface::new(Terminal::new(TestBackend::new(60, 16)).unwrap())
    }

    fn backend_text(surface: &ChartSurface<TestBackend>) -> String {
        let buf = surface.terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.cell((x, y)).unwrap().symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
