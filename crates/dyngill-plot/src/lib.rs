//! Error-bar plots for DynGill ensemble summaries.
//!
//! [`ErrorBarSeries`] holds the geometry (mean points and vertical bar
//! segments) and is usable without a display. [`ErrorBarPlot`] collects
//! series and opens a blocking egui window with [`ErrorBarPlot::run`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use dyngill_obs::EnsembleSummary;
use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

/// Default x-axis label.
pub const TIME_LABEL: &str = "time t/Δt";
/// Default y-axis label.
pub const COUNT_LABEL: &str = "total number";

const PALETTE: [Color32; 6] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(44, 160, 44),
    Color32::from_rgb(214, 39, 40),
    Color32::from_rgb(148, 103, 189),
    Color32::from_rgb(140, 86, 75),
];

/// One named curve with a symmetric error bar at every point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorBarSeries {
    name: String,
    x: Vec<f64>,
    y: Vec<f64>,
    error: Vec<f64>,
}

impl ErrorBarSeries {
    /// An empty series called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Series of `summary` means with standard-error bars, frame `f`
    /// placed at `x = f * resolution`.
    pub fn from_summary(
        name: impl Into<String>,
        summary: &EnsembleSummary,
        resolution: usize,
    ) -> Self {
        let mut series = Self::new(name);
        for (frame, (mean, sem)) in summary.iter().enumerate() {
            series.push((frame * resolution) as f64, mean, sem);
        }
        series
    }

    /// Append a point at `(x, y)` with half-width `error`.
    pub fn push(&mut self, x: f64, y: f64, error: f64) {
        self.x.push(x);
        self.y.push(y);
        self.error.push(error.abs());
    }

    /// Legend name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Centre points `[x, y]`.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y]).collect()
    }

    /// Vertical bar segments from `y - error` to `y + error`.
    pub fn bars(&self) -> Vec<[[f64; 2]; 2]> {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.error)
            .map(|((&x, &y), &e)| [[x, y - e], [x, y + e]])
            .collect()
    }
}

/// A runnable egui application drawing [`ErrorBarSeries`].
pub struct ErrorBarPlot {
    series: Vec<ErrorBarSeries>,
    x_label: String,
    y_label: String,
}

impl Default for ErrorBarPlot {
    fn default() -> Self {
        Self {
            series: Vec::new(),
            x_label: TIME_LABEL.to_string(),
            y_label: COUNT_LABEL.to_string(),
        }
    }
}

impl ErrorBarPlot {
    /// An empty plot with the default axis labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the x-axis label.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    /// Replace the y-axis label.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Add a series; colours are assigned in insertion order.
    #[must_use]
    pub fn add_series(mut self, series: ErrorBarSeries) -> Self {
        self.series.push(series);
        self
    }

    /// Series added so far.
    pub fn series(&self) -> &[ErrorBarSeries] {
        &self.series
    }

    /// Open a window titled `title` and block until it is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn run(self, title: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            title,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for ErrorBarPlot {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("dyngill-error-bars")
                .legend(Legend::default())
                .x_axis_label(self.x_label.as_str())
                .y_axis_label(self.y_label.as_str())
                .show(ui, |plot_ui| {
                    for (idx, series) in self.series.iter().enumerate() {
                        let color = PALETTE[idx % PALETTE.len()];
                        for [lo, hi] in series.bars() {
                            plot_ui.line(Line::new(PlotPoints::from(vec![lo, hi])).color(color));
                        }
                        let points = series.points();
                        plot_ui.line(
                            Line::new(PlotPoints::from(points.clone()))
                                .color(color)
                                .name(series.name()),
                        );
                        plot_ui.points(
                            Points::new(PlotPoints::from(points))
                                .color(color)
                                .radius(2.5),
                        );
                    }
                });
        });
    }
}
