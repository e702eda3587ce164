//! `asset-returns` library crate.
//!
//! The binary (`fetch-returns`) is a thin wrapper around this library so the
//! fetch/clean/aggregate/scale/serialize steps are testable without the network
//! or spawning processes.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;
pub mod scenario;
