//! Huawei OceanStor support.

pub mod alert;
mod driver;

pub use driver::{MODEL, OceanStorDriver, VENDOR};
