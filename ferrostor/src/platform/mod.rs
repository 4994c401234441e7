//! Storage platforms: the driver registry and the built-in vendor drivers.

mod registry;
pub mod vendors;

pub use registry::{DriverFactory, DriverKey, DriverRegistry};
