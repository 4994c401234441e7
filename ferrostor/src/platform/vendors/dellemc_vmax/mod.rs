//! Dell EMC VMAX support.

pub mod alert;
mod driver;

pub use driver::{MODEL, VENDOR, VmaxDriver};
