use crate::signal::Signal;

/// Step-plot coordinates for a signal.
///
/// Each bit holds its level across one unit of x; equal-x point pairs are
/// the vertical jump edges between differing neighbors. For N bits the
/// path has exactly 2N points and its final x equals N, so the last bit
/// is drawn as wide as the others.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformPath {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl WaveformPath {
    pub fn from_signal(signal: &Signal) -> Self {
        let levels = signal.levels();
        let n = levels.len();

        // Double every index and level, then offset the two sequences by
        // one position: dropping the leading x and the trailing y turns
        // index-wise pairs into flat segments joined by vertical edges.
        let mut xs: Vec<f64> = (0..n).flat_map(|i| [i as f64; 2]).skip(1).collect();
        let mut ys: Vec<f64> = levels
            .iter()
            .flat_map(|&level| [f64::from(level); 2])
            .take(2 * n - 1)
            .collect();

        // Trailing hold segment: one more unit at the last level.
        xs.push(n as f64);
        ys.push(f64::from(levels[n - 1]));

        Self { xs, ys }
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// The path as (x, y) pairs, the shape line-plot backends consume.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.xs.iter().copied().zip(self.ys.iter().copied()).collect()
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}
