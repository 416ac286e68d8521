//! Convergence plots in a native egui window.
//!
//! Hand `&mut PlotObserver` to either solver, then call
//! [`PlotObserver::show`] once the solve returns.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use rootlab_core::Observer;
use rootlab_solvers::{false_position, newton};

use crate::traits::{HasIteration, HasRelativeError, HasResidual};

/// Window options for [`PlotObserver::show`].
///
/// ```ignore
/// obs.show(PlotOptions::titled("Newton-Raphson").with_legend().log_scale())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlotOptions {
    title: String,
    legend: bool,
    log_scale: bool,
}

impl PlotOptions {
    /// Options for an untitled window with a linear y-axis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots `log10(y)`. Points with `y <= 0` are dropped.
    #[must_use]
    pub fn log_scale(mut self) -> Self {
        self.log_scale = true;
        self
    }
}

/// Maps a solver event onto plot coordinates.
///
/// Both solver events plot the iteration number against `|f(x)|` and the
/// relative error in percent, leaving the second slot empty on iterations
/// where the error is not applicable.
pub trait Plottable<const N: usize> {
    /// Horizontal coordinate, or `None` to leave the event out.
    fn x(&self) -> Option<f64>;

    /// One vertical coordinate per series; `None` leaves a gap.
    fn traces(&self) -> [Option<f64>; N];
}

#[allow(clippy::cast_precision_loss)]
fn iteration_axis<E: HasIteration>(event: &E) -> f64 {
    event.iteration() as f64
}

fn convergence_traces<E: HasResidual + HasRelativeError>(event: &E) -> [Option<f64>; 2] {
    [Some(event.residual().abs()), event.relative_error().value()]
}

impl Plottable<2> for newton::Event<'_> {
    fn x(&self) -> Option<f64> {
        Some(iteration_axis(self))
    }

    fn traces(&self) -> [Option<f64>; 2] {
        convergence_traces(self)
    }
}

impl Plottable<2> for false_position::Event<'_> {
    fn x(&self) -> Option<f64> {
        Some(iteration_axis(self))
    }

    fn traces(&self) -> [Option<f64>; 2] {
        convergence_traces(self)
    }
}

/// A named line of `[x, y]` points.
#[derive(Debug, Clone)]
struct Series {
    name: String,
    points: Vec<[f64; 2]>,
}

impl Series {
    /// Points as they should be drawn on the chosen y-axis.
    fn scaled(&self, log_scale: bool) -> Vec<[f64; 2]> {
        if !log_scale {
            return self.points.clone();
        }
        self.points
            .iter()
            .filter(|[_, y]| *y > 0.0)
            .map(|&[x, y]| [x, y.log10()])
            .collect()
    }
}

/// Collects `N` series while a solver runs.
///
/// Solver events that implement [`Plottable<N>`][Plottable] are recorded
/// automatically. Anything else can be fed in by hand with
/// [`push`][PlotObserver::push], typically from inside a closure observer.
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["|f(x)|", "Relative error (%)"]);
/// newton::solve(&f, &df, 3.0, &newton::Config::default(), &mut obs)?;
/// obs.show(PlotOptions::titled("Newton-Raphson").with_legend().log_scale())?;
/// ```
pub struct PlotObserver<const N: usize> {
    series: [Series; N],
}

impl<const N: usize> PlotObserver<N> {
    pub fn new(names: [&str; N]) -> Self {
        Self {
            series: names.map(|name| Series {
                name: name.to_owned(),
                points: Vec::new(),
            }),
        }
    }

    /// Appends `[x, y]` to every series whose `y` is present.
    pub fn push(&mut self, x: f64, ys: [Option<f64>; N]) {
        for (series, y) in self.series.iter_mut().zip(ys) {
            if let Some(y) = y {
                series.points.push([x, y]);
            }
        }
    }

    /// Opens the plot window and blocks until it is closed.
    ///
    /// # Errors
    ///
    /// Fails if no native window can be created, for example without a display.
    pub fn show(self, options: PlotOptions) -> Result<(), eframe::Error> {
        let title = options.title.clone();
        let window = ConvergenceWindow {
            series: self.series.into(),
            options,
        };
        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(window))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.push(x, event.traces());
        }
        None
    }
}

// Solvers take the observer by value; borrowing keeps the data for `show`.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

struct ConvergenceWindow {
    series: Vec<Series>,
    options: PlotOptions,
}

impl eframe::App for ConvergenceWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut plot = Plot::new("convergence").x_axis_label("iteration");
        if self.options.legend {
            plot = plot.legend(Legend::default());
        }
        if self.options.log_scale {
            plot = plot.y_axis_label("log10");
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            plot.show(ui, |plot_ui| {
                for series in &self.series {
                    let points = PlotPoints::from(series.scaled(self.options.log_scale));
                    plot_ui.line(Line::new(points).name(&series.name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootlab_expr::parse;

    fn points(obs: &PlotObserver<2>, series: usize) -> &[[f64; 2]] {
        &obs.series[series].points
    }

    #[test]
    fn records_newton_iterations() {
        let f = parse("x^2 - 4").unwrap();
        let df = f.derivative();
        let mut obs = PlotObserver::<2>::new(["|f(x)|", "Relative error"]);

        let solution = newton::solve(&f, &df, 3.0, &newton::Config::default(), &mut obs).unwrap();

        assert_eq!(points(&obs, 0).len(), solution.iters());
        assert_eq!(points(&obs, 0)[0], [1.0, 5.0]);
        assert_eq!(points(&obs, 1).len(), solution.iters());
    }

    #[test]
    fn skips_undefined_relative_error() {
        let f = parse("x^2 - 4").unwrap();
        let mut obs = PlotObserver::<2>::new(["|f(x)|", "Relative error"]);

        let solution = false_position::solve(
            &f,
            [0.0, 3.0],
            &false_position::Config::default(),
            &mut obs,
        )
        .unwrap();

        // Iteration 1 has nothing to compare against.
        assert_eq!(points(&obs, 0).len(), solution.iters());
        assert_eq!(points(&obs, 1).len(), solution.iters() - 1);
        assert_eq!(points(&obs, 1)[0][0], 2.0);
    }

    #[test]
    fn push_fills_only_present_slots() {
        let mut obs: PlotObserver<2> = PlotObserver::new(["a", "b"]);
        obs.push(1.0, [Some(10.0), None]);
        obs.push(2.0, [None, Some(20.0)]);
        assert_eq!(points(&obs, 0), [[1.0, 10.0]]);
        assert_eq!(points(&obs, 1), [[2.0, 20.0]]);
    }

    #[test]
    fn log_scale_drops_non_positive_points() {
        let series = Series {
            name: "residual".into(),
            points: vec![[1.0, 100.0], [2.0, 0.0], [3.0, -1.0], [4.0, 1000.0]],
        };

        assert_eq!(series.scaled(false).len(), 4);
        assert_eq!(series.scaled(true), [[1.0, 2.0], [4.0, 3.0]]);
    }

    #[test]
    fn never_returns_an_action() {
        let f = parse("x - 1").unwrap();
        let df = f.derivative();
        let mut obs = PlotObserver::<2>::new(["a", "b"]);

        let solution = newton::solve(&f, &df, 5.0, &newton::Config::default(), &mut obs).unwrap();

        assert_eq!(solution.status, newton::Status::Converged);
    }

    #[test]
    fn options_start_linear_and_untitled() {
        let options = PlotOptions::new();
        assert!(options.title.is_empty());
        assert!(!options.legend && !options.log_scale);

        let options = PlotOptions::titled("Newton").with_legend().log_scale();
        assert_eq!(options.title, "Newton");
        assert!(options.legend && options.log_scale);
    }
}
