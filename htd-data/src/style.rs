//! Display styling for projected series.
//!
//! Colors carry no meaning. They are assigned after projection through a
//! [`ColorSource`] so tests can use a fixed palette while the dashboard
//! picks random ones.

use crate::projection::{ChartProjection, Labels};
use htd_core::{Reading, ViewMode};
use serde::Serialize;

pub const BORDER_WIDTH: f64 = 0.5;
pub const HOVER_BORDER_WIDTH: f64 = 2.0;
pub const Y_AXIS_LABEL: &str = "Temperature (°C)";

/// Supplies one color per rendered series.
pub trait ColorSource {
    fn next_color(&mut self) -> String;
}

/// CSS color with the dashboard's fixed 0.7 alpha.
pub fn rgba(r: u8, g: u8, b: u8) -> String {
    format!("rgba({}, {}, {}, 0.7)", r, g, b)
}

/// Cycles through a fixed list of colors.
#[derive(Debug, Clone)]
pub struct FixedPalette {
    colors: Vec<String>,
    next: usize,
}

impl FixedPalette {
    pub fn new(colors: Vec<String>) -> Self {
        Self { colors, next: 0 }
    }
}

impl Default for FixedPalette {
    fn default() -> Self {
        Self::new(vec![
            rgba(33, 150, 243),
            rgba(255, 87, 34),
            rgba(76, 175, 80),
            rgba(156, 39, 176),
            rgba(255, 193, 7),
        ])
    }
}

impl ColorSource for FixedPalette {
    fn next_color(&mut self) -> String {
        if self.colors.is_empty() {
            return rgba(0, 0, 0);
        }
        let color = self.colors[self.next % self.colors.len()].clone();
        self.next += 1;
        color
    }
}

/// Uniformly random channels in `0..255`.
#[cfg(feature = "random")]
pub struct RandomColors<R> {
    rng: R,
}

#[cfg(feature = "random")]
impl RandomColors<rand::rngs::ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

#[cfg(feature = "random")]
impl Default for RandomColors<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "random")]
impl<R: rand::Rng> RandomColors<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

#[cfg(feature = "random")]
impl<R: rand::Rng> ColorSource for RandomColors<R> {
    fn next_color(&mut self) -> String {
        let r = self.rng.gen_range(0..255);
        let g = self.rng.gen_range(0..255);
        let b = self.rng.gen_range(0..255);
        rgba(r, g, b)
    }
}

/// A series with its display attributes, in the shape the chart script reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<Reading>,
    pub border_color: String,
    pub background_color: String,
    pub border_width: f64,
    pub hover_border_width: f64,
}

/// Title and axis captions for the current mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub title: &'static str,
    pub x_axis_label: &'static str,
    pub y_axis_label: &'static str,
}

impl ChartMeta {
    pub fn for_mode(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Monthly => ChartMeta {
                title: "Monthly Temperatures",
                x_axis_label: "Months",
                y_axis_label: Y_AXIS_LABEL,
            },
            ViewMode::Yearly => ChartMeta {
                title: "Yearly Average Temperatures",
                x_axis_label: "Years",
                y_axis_label: Y_AXIS_LABEL,
            },
        }
    }
}

/// Everything the chart script needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Labels,
    pub datasets: Vec<ChartDataset>,
    pub meta: ChartMeta,
}

/// Attach colors and captions to a projection.
pub fn style(projection: ChartProjection, mode: ViewMode, colors: &mut impl ColorSource) -> ChartData {
    let datasets = projection
        .series
        .into_iter()
        .map(|series| {
            let color = colors.next_color();
            ChartDataset {
                label: series.name,
                data: series.values,
                border_color: color.clone(),
                background_color: color,
                border_width: BORDER_WIDTH,
                hover_border_width: HOVER_BORDER_WIDTH,
            }
        })
        .collect();
    ChartData {
        labels: projection.labels,
        datasets,
        meta: ChartMeta::for_mode(mode),
    }
}
