//! Core traits and types for the rootlab workspace.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! expressions build on:
//!
//! - [`Function`]: a real function of one real variable whose evaluation may fail
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::Function;
pub use observer::Observer;
