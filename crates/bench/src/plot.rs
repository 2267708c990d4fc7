//! Interactive plots of benchmark series and solver convergence.
//!
//! [`show`] renders any set of [`Series`], such as the evaluation counts of a
//! sweep. [`PlotObserver`] records solver events as they happen and renders
//! them the same way.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use rootfinder_core::{Observer, Real};
use rootfinder_solvers::equation::Event;

use crate::Series;

/// Configuration for rendering a plot window.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// ```ignore
/// plot::show(series(&rows), ShowConfig::new().title("Bisection").legend().log_x())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_x: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Creates a config with no title, no legend and linear axes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each series by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots `log₁₀ x` instead of `x`. Non-positive x values are skipped.
    #[must_use]
    pub fn log_x(mut self) -> Self {
        self.log_x = true;
        self
    }

    /// Plots `log₁₀ y` instead of `y`. Non-positive y values are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

/// Extracts plottable values from a solver event.
///
/// Returning `None` from [`x`][Plottable::x] skips the event; `None` in a
/// trace slot skips only that trace.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event.
    fn x(&self) -> Option<f64>;

    /// The y-axis value of each trace.
    fn traces(&self) -> [Option<f64>; N];
}

/// Plots the residual magnitude and, for bracketing methods, the bracket
/// width against the iteration number.
impl<T: Real> Plottable<2> for Event<T> {
    fn x(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [
            self.residual.abs().to_f64(),
            self.width().and_then(|width| width.to_f64()),
        ]
    }
}

/// An observer that records one point per trace for every event.
///
/// Pass `&mut PlotObserver` to a solver's `solve` so the observer can be shown
/// after the call returns:
///
/// ```ignore
/// let mut obs = PlotObserver::new(["|f(x)|", "bracket width"]);
/// bisection::solve(&f, [0.0, 2.0], &config, &mut obs)?;
/// obs.show(ShowConfig::new().title("Bisection").legend().log_y())?;
/// ```
#[derive(Debug, Clone)]
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates an observer with the given trace names.
    #[must_use]
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records one point per trace at `x`, skipping `None` slots.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                points.push([x, y]);
            }
        }
    }

    /// Converts the recorded traces into named series.
    #[must_use]
    pub fn into_series(self) -> Vec<Series> {
        self.names
            .into_iter()
            .zip(self.data)
            .map(|(name, points)| Series { name, points })
            .collect()
    }

    /// Opens a blocking window with the recorded traces. See [`show`].
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        show(self.into_series(), config)
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// Opens a blocking egui window plotting each series as a line.
///
/// Blocks until the window is closed.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show(series: Vec<Series>, config: ShowConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    let title = config.title.clone().unwrap_or_default();
    let series = series
        .into_iter()
        .map(|Series { name, points }| Series {
            name,
            points: transform(&points, config.log_x, config.log_y),
        })
        .collect();

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PlotApp { series, config }))),
    )
}

/// Applies the axis scaling, dropping points a log axis cannot show.
fn transform(points: &[[f64; 2]], log_x: bool, log_y: bool) -> Vec<[f64; 2]> {
    let scale = |value: f64, log: bool| {
        if !log {
            Some(value)
        } else if value > 0.0 {
            Some(value.log10())
        } else {
            None
        }
    };
    points
        .iter()
        .filter_map(|&[x, y]| Some([scale(x, log_x)?, scale(y, log_y)?]))
        .collect()
}

/// The egui [`eframe::App`] that renders the series.
struct PlotApp {
    series: Vec<Series>,
    config: ShowConfig,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("rootfinder_plot");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            if self.config.log_x {
                plot = plot.x_axis_label("log₁₀ x");
            }
            if self.config.log_y {
                plot = plot.y_axis_label("log₁₀ y");
            }
            plot.show(ui, |plot_ui| {
                for Series { name, points } in &self.series {
                    let points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(points).name(name));
                }
            });
        });
    }
}
