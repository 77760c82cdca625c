//! Forecast chart slot
//!
//! The canvas holds at most one chart instance. Mounting a new forecast
//! destroys the previous instance before the replacement is created.

use crate::render::ForecastSeries;

/// Headroom above the highest value so the line never touches the frame.
const Y_HEADROOM: f64 = 1.1;

/// Upper bound used when every value is zero or the series is empty.
const MIN_Y_MAX: f64 = 50.0;

/// A line chart of one city's forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastChart {
    pub id: u64,
    pub city: String,
    pub series: ForecastSeries,
}

impl ForecastChart {
    /// `(index, value)` pairs in label order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.series
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect()
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.series.len().saturating_sub(1).max(1) as f64]
    }

    /// Value-axis bounds. The axis always starts at zero.
    pub fn y_bounds(&self) -> [f64; 2] {
        let min = self
            .series
            .values
            .iter()
            .copied()
            .fold(0.0_f64, f64::min);
        let max = self
            .series
            .values
            .iter()
            .copied()
            .fold(0.0_f64, f64::max);
        [min, (max * Y_HEADROOM).max(MIN_Y_MAX)]
    }

    /// First, middle and last labels, for the category axis.
    pub fn axis_labels(&self) -> Vec<&str> {
        let labels = &self.series.labels;
        match labels.len() {
            0 => Vec::new(),
            1 | 2 => labels.iter().map(String::as_str).collect(),
            n => vec![
                labels[0].as_str(),
                labels[n / 2].as_str(),
                labels[n - 1].as_str(),
            ],
        }
    }
}

#[derive(Debug, Default)]
pub struct ChartCanvas {
    slot: Option<ForecastChart>,
    created: u64,
    destroyed: u64,
}

impl ChartCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever chart is mounted with a chart of `series`.
    pub fn mount(&mut self, city: String, series: ForecastSeries) -> &ForecastChart {
        if let Some(previous) = self.slot.take() {
            self.destroy(previous);
        }
        log::debug!(
            "mounting forecast chart #{} for {} ({} on canvas)",
            self.created + 1,
            city,
            self.instance_count()
        );
        self.created += 1;
        self.slot.insert(ForecastChart {
            id: self.created,
            city,
            series,
        })
    }

    fn destroy(&mut self, chart: ForecastChart) {
        log::debug!("destroying forecast chart #{} for {}", chart.id, chart.city);
        self.destroyed += 1;
    }

    pub fn chart(&self) -> Option<&ForecastChart> {
        self.slot.as_ref()
    }

    /// Charts currently attached to the canvas, zero or one.
    pub fn instance_count(&self) -> u64 {
        self.created - self.destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> ForecastSeries {
        ForecastSeries {
            labels: (1..=values.len()).map(|h| format!("H{}", h)).collect(),
            values: values.to_vec(),
        }
    }

    #[test]
    fn mounting_twice_leaves_one_instance() {
        let mut canvas = ChartCanvas::new();
        assert_eq!(canvas.instance_count(), 0);

        canvas.mount("Delhi".to_string(), series(&[80.0, 95.0]));
        canvas.mount("Delhi".to_string(), series(&[80.0, 95.0]));

        assert_eq!(canvas.instance_count(), 1);
        let chart = canvas.chart().unwrap();
        assert_eq!(chart.id, 2);
        assert_eq!(chart.series.labels, vec!["H1", "H2"]);
        assert_eq!(chart.series.values, vec![80.0, 95.0]);
    }

    #[test]
    fn value_axis_starts_at_zero() {
        let mut canvas = ChartCanvas::new();
        let chart = canvas.mount("Delhi".to_string(), series(&[180.0, 200.0]));
        let [low, high] = chart.y_bounds();
        assert_eq!(low, 0.0);
        assert!(high >= 200.0);
    }

    #[test]
    fn empty_series_still_has_usable_bounds() {
        let mut canvas = ChartCanvas::new();
        let chart = canvas.mount("Delhi".to_string(), ForecastSeries::default());
        assert_eq!(chart.x_bounds(), [0.0, 1.0]);
        assert_eq!(chart.y_bounds(), [0.0, MIN_Y_MAX]);
        assert!(chart.axis_labels().is_empty());
    }

    #[test]
    fn axis_labels_pick_ends_and_middle() {
        let mut canvas = ChartCanvas::new();
        let chart = canvas.mount("Delhi".to_string(), series(&[1.0; 48]));
        assert_eq!(chart.axis_labels(), vec!["H1", "H25", "H48"]);
        assert_eq!(chart.points().len(), 48);
    }
}
