mod waveform_chart;

pub use waveform_chart::WaveformChart;
