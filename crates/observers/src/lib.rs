//! Reusable observers for the rootlab solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across both root finders.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasResidual`], [`HasRelativeError`], [`CanStopEarly`])
//! - [`TraceObserver`]: logs every iteration through `tracing`
//!
//! # Features
//!
//! - `plot`: Enables [`PlotObserver`] for visualizing convergence via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: rootlab_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasResidual`]: traits::HasResidual
//! [`HasRelativeError`]: traits::HasRelativeError
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod trace;

pub use trace::TraceObserver;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, PlotOptions, Plottable};
