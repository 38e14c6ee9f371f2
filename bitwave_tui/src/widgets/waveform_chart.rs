use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Widget},
};

/// Line-plot frame for step waveforms.
///
/// Holds everything a plot surface accumulates (polylines, ticks, limits,
/// title, grid) and renders it as a braille `Chart`. Gridlines are drawn
/// as dim dotted datasets at the tick positions, since `Chart` has no
/// native grid.
#[derive(Debug, Clone)]
pub struct WaveformChart {
    title: String,
    x_ticks: Vec<f64>,
    y_ticks: Vec<f64>,
    y_limits: (f64, f64),
    grid_weight: Option<f64>,
    polylines: Vec<Vec<(f64, f64)>>,
}

const WAVE_STYLE: Style = Style::new().fg(Color::Cyan);
const GRID_STYLE: Style = Style::new().fg(Color::DarkGray);
const AXIS_STYLE: Style = Style::new().fg(Color::Gray);

impl Default for WaveformChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_ticks: vec![],
            y_ticks: vec![],
            y_limits: (-1.0, 1.0),
            grid_weight: None,
            polylines: vec![],
        }
    }
}

impl WaveformChart {
    pub fn title(mut self, title: String) -> Self {
        self.title = title;
        self
    }

    pub fn x_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.x_ticks = ticks;
        self
    }

    pub fn y_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.y_ticks = ticks;
        self
    }

    pub fn y_limits(mut self, min: f64, max: f64) -> Self {
        self.y_limits = (min, max);
        self
    }

    pub fn grid_weight(mut self, weight: f64) -> Self {
        self.grid_weight = Some(weight);
        self
    }

    pub fn polyline(mut self, points: Vec<(f64, f64)>) -> Self {
        self.polylines.push(points);
        self
    }

    fn x_bounds(&self) -> [f64; 2] {
        match (self.x_ticks.first(), self.x_ticks.last()) {
            (Some(first), Some(last)) if first < last => [*first, *last],
            _ => self.data_x_extent(),
        }
    }

    fn data_x_extent(&self) -> [f64; 2] {
        let xs = self.polylines.iter().flatten().map(|(x, _)| *x);
        let min = xs.clone().fold(f64::INFINITY, f64::min);
        let max = xs.fold(f64::NEG_INFINITY, f64::max);
        if min < max {
            [min, max]
        } else {
            [0.0, 1.0]
        }
    }

    fn grid_lines(&self, x_bounds: [f64; 2], y_bounds: [f64; 2]) -> Vec<Vec<(f64, f64)>> {
        if self.grid_weight.is_none() {
            return vec![];
        }
        let verticals = self
            .x_ticks
            .iter()
            .map(|&t| vec![(t, y_bounds[0]), (t, y_bounds[1])]);
        let horizontals = self
            .y_ticks
            .iter()
            .map(|&t| vec![(x_bounds[0], t), (x_bounds[1], t)]);
        verticals.chain(horizontals).collect()
    }

    fn grid_marker(&self) -> Marker {
        match self.grid_weight {
            Some(weight) if weight >= 1.0 => Marker::HalfBlock,
            _ => Marker::Dot,
        }
    }

    fn tick_labels(ticks: &[f64]) -> Vec<Line<'static>> {
        ticks.iter().map(|t| Line::from(format!("{t:.0}"))).collect()
    }
}

impl Widget for WaveformChart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        let x_bounds = self.x_bounds();
        let y_bounds = [self.y_limits.0, self.y_limits.1];
        let grid_lines = self.grid_lines(x_bounds, y_bounds);

        let mut datasets: Vec<Dataset> = grid_lines
            .iter()
            .map(|points| {
                Dataset::default()
                    .marker(self.grid_marker())
                    .graph_type(GraphType::Line)
                    .style(GRID_STYLE)
                    .data(points)
            })
            .collect();
        datasets.extend(self.polylines.iter().map(|points| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(WAVE_STYLE)
                .data(points)
        }));

        let x_axis = Axis::default()
            .style(AXIS_STYLE)
            .bounds(x_bounds)
            .labels(Self::tick_labels(&self.x_ticks));
        let y_axis = Axis::default()
            .style(AXIS_STYLE)
            .bounds(y_bounds)
            .labels(Self::tick_labels(&self.y_ticks));

        Chart::new(datasets)
            .block(Block::bordered().title(self.title.clone()))
            .x_axis(x_axis)
            .y_axis(y_axis)
            .render(area, buf);
    }
}
