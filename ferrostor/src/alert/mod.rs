//! Alert normalization.
//!
//! Every vendor reports faults in its own trap layout. This module defines the
//! canonical [`AlertModel`] they are translated into, and the declarative
//! [`VendorFieldMap`] that drives the translation for each alert format.

mod field_map;
mod model;
mod normalizer;

pub use field_map::{FieldSource, VendorFieldMap};
pub use model::{AlertDraft, AlertField, AlertModel, ME_CATEGORY};
pub use normalizer::{AlertNormalizer, MappedNormalizer, RawAlert};
