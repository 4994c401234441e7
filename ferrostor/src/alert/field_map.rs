//! Declarative mapping from vendor trap fields to canonical alert fields.

use indexmap::IndexMap;

use super::model::AlertField;

/// Where a canonical field is read from in a vendor payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSource {
    /// Vendor-native field name.
    pub field: String,

    /// Whether the alert is rejected when the field is absent.
    pub mandatory: bool,
}

/// Field mapping for one vendor alert format.
///
/// A format declares, for each canonical field it carries, the vendor field
/// it is copied from and whether that vendor field is mandatory. Canonical
/// fields the format does not carry are left empty when optional.
///
/// # Example
///
/// ```rust
/// use ferrostor::alert::{AlertField, VendorFieldMap};
///
/// let map = VendorFieldMap::new("acme_trap")
///     .with_required(AlertField::MeDn, "storage_id")
///     .with_optional(AlertField::MatchKey, "acmeEventKey");
///
/// assert_eq!(map.mandatory_fields().collect::<Vec<_>>(), vec!["storage_id"]);
/// ```
#[derive(Debug, Clone)]
pub struct VendorFieldMap {
    /// Format name (e.g. "huawei_oceanstor").
    pub name: String,

    /// Canonical field to vendor field, in declaration order.
    pub mappings: IndexMap<AlertField, FieldSource>,
}

impl VendorFieldMap {
    /// Create an empty field map.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mappings: IndexMap::new(),
        }
    }

    /// Map a canonical field from a vendor field that must be present.
    pub fn with_required(mut self, canonical: AlertField, vendor_field: impl Into<String>) -> Self {
        self.mappings.insert(
            canonical,
            FieldSource {
                field: vendor_field.into(),
                mandatory: true,
            },
        );
        self
    }

    /// Map a canonical field from a vendor field that may be absent.
    pub fn with_optional(mut self, canonical: AlertField, vendor_field: impl Into<String>) -> Self {
        self.mappings.insert(
            canonical,
            FieldSource {
                field: vendor_field.into(),
                mandatory: false,
            },
        );
        self
    }

    /// Vendor fields whose absence fails normalization, in declaration order.
    pub fn mandatory_fields(&self) -> impl Iterator<Item = &str> {
        self.mappings
            .values()
            .filter(|s| s.mandatory)
            .map(|s| s.field.as_str())
    }

    /// Source of a canonical field, if the format carries it.
    pub fn source(&self, canonical: AlertField) -> Option<&FieldSource> {
        self.mappings.get(&canonical)
    }

    /// Required canonical fields this map cannot always produce.
    ///
    /// A required field is covered only when it is mapped from a mandatory
    /// vendor field. Built-in formats return an empty list.
    pub fn uncovered_required(&self) -> Vec<AlertField> {
        AlertField::REQUIRED
            .iter()
            .copied()
            .filter(|f| !self.source(*f).is_some_and(|s| s.mandatory))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandatory_fields_in_order() {
        let map = VendorFieldMap::new("test")
            .with_required(AlertField::MeDn, "id")
            .with_optional(AlertField::NativeMeDn, "component")
            .with_required(AlertField::Severity, "level");
        let mandatory: Vec<&str> = map.mandatory_fields().collect();
        assert_eq!(mandatory, vec!["id", "level"]);
    }

    #[test]
    fn test_remap_replaces_source() {
        let map = VendorFieldMap::new("test")
            .with_required(AlertField::MeDn, "id")
            .with_optional(AlertField::MeDn, "other_id");
        let source = map.source(AlertField::MeDn).unwrap();
        assert_eq!(source.field, "other_id");
        assert!(!source.mandatory);
        assert_eq!(map.mandatory_fields().count(), 0);
    }

    #[test]
    fn test_uncovered_required() {
        let map = VendorFieldMap::new("test")
            .with_required(AlertField::MeDn, "id")
            .with_optional(AlertField::MeName, "name");
        let uncovered = map.uncovered_required();
        assert!(!uncovered.contains(&AlertField::MeDn));
        assert!(uncovered.contains(&AlertField::MeName));
        assert!(uncovered.contains(&AlertField::OccurTime));
    }
}
