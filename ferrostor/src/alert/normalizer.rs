//! Translation of vendor trap payloads into [`AlertModel`].

use std::collections::HashMap;

use log::{debug, warn};

use super::field_map::VendorFieldMap;
use super::model::{AlertDraft, AlertModel};
use crate::error::{AlertError, Result};

/// Flat key/value payload of a trap or event as received from a device.
pub type RawAlert = HashMap<String, String>;

/// Trait for vendor alert translators.
pub trait AlertNormalizer: Send + Sync {
    /// Name of the alert format handled.
    fn format(&self) -> &str;

    /// Translate a raw payload into the canonical model.
    ///
    /// Fails with [`AlertError::InvalidResults`] when a mandatory vendor field
    /// is absent. Never returns a partially filled alert.
    fn parse_alert(&self, raw: &RawAlert) -> Result<AlertModel>;
}

/// Normalizer driven entirely by a [`VendorFieldMap`].
///
/// Values are copied verbatim; timestamps and free text are not reformatted.
#[derive(Debug, Clone)]
pub struct MappedNormalizer {
    map: VendorFieldMap,
}

impl MappedNormalizer {
    /// Create a normalizer for the given field map.
    ///
    /// Fails with [`AlertError::IncompleteFieldMap`] when a required canonical
    /// field is not mapped from a mandatory vendor field.
    pub fn new(map: VendorFieldMap) -> Result<Self> {
        let uncovered = map.uncovered_required();
        if !uncovered.is_empty() {
            return Err(AlertError::IncompleteFieldMap {
                format: map.name,
                fields: uncovered.iter().map(|f| f.name().to_string()).collect(),
            }
            .into());
        }
        Ok(Self { map })
    }

    /// The field map in use.
    pub fn field_map(&self) -> &VendorFieldMap {
        &self.map
    }

    /// Mandatory vendor fields absent from `raw`.
    pub fn missing_fields(&self, raw: &RawAlert) -> Vec<String> {
        self.map
            .mandatory_fields()
            .filter(|f| !raw.contains_key(*f))
            .map(str::to_string)
            .collect()
    }
}

impl AlertNormalizer for MappedNormalizer {
    fn format(&self) -> &str {
        &self.map.name
    }

    fn parse_alert(&self, raw: &RawAlert) -> Result<AlertModel> {
        let missing = self.missing_fields(raw);
        if !missing.is_empty() {
            warn!(
                "Rejecting {} alert, missing attributes: {}",
                self.map.name,
                missing.join(", ")
            );
            return Err(AlertError::InvalidResults { missing }.into());
        }

        let mut draft = AlertDraft::new();
        for (canonical, source) in &self.map.mappings {
            if let Some(value) = raw.get(&source.field) {
                draft.set(*canonical, value.as_str());
            } else if !canonical.is_required() {
                draft.set(*canonical, "");
            }
        }

        let model = draft.build().map_err(|fields| AlertError::InvalidResults {
            missing: fields.iter().map(|f| f.name().to_string()).collect(),
        })?;

        debug!(
            "Normalized {} alert {} from {}",
            self.map.name, model.alarm_id, model.me_dn
        );
        Ok(model)
    }
}
