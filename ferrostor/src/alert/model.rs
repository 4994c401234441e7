//! Canonical alert model shared by every vendor.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Managed element category of every device handled here.
pub const ME_CATEGORY: &str = "storage-subsystem";

/// Fields of [`AlertModel`] that can be populated from a vendor payload.
///
/// `me_category` is not listed: it is always [`ME_CATEGORY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AlertField {
    MeDn,
    MeName,
    Manufacturer,
    ProductName,
    Category,
    Location,
    EventType,
    Severity,
    ProbableCause,
    AlarmId,
    AlarmName,
    DeviceAlertSn,
    OccurTime,
    ClearType,
    MatchKey,
    NativeMeDn,
}

impl AlertField {
    /// Fields that must be present in every normalized alert.
    pub const REQUIRED: [AlertField; 13] = [
        AlertField::MeDn,
        AlertField::MeName,
        AlertField::Manufacturer,
        AlertField::ProductName,
        AlertField::Category,
        AlertField::Location,
        AlertField::EventType,
        AlertField::Severity,
        AlertField::ProbableCause,
        AlertField::AlarmId,
        AlertField::AlarmName,
        AlertField::DeviceAlertSn,
        AlertField::OccurTime,
    ];

    /// Fields that fall back to an empty string.
    pub const OPTIONAL: [AlertField; 3] = [
        AlertField::ClearType,
        AlertField::MatchKey,
        AlertField::NativeMeDn,
    ];

    /// Canonical attribute name.
    pub fn name(&self) -> &'static str {
        match self {
            AlertField::MeDn => "me_dn",
            AlertField::MeName => "me_name",
            AlertField::Manufacturer => "manufacturer",
            AlertField::ProductName => "product_name",
            AlertField::Category => "category",
            AlertField::Location => "location",
            AlertField::EventType => "event_type",
            AlertField::Severity => "severity",
            AlertField::ProbableCause => "probable_cause",
            AlertField::AlarmId => "alarm_id",
            AlertField::AlarmName => "alarm_name",
            AlertField::DeviceAlertSn => "device_alert_sn",
            AlertField::OccurTime => "occur_time",
            AlertField::ClearType => "clear_type",
            AlertField::MatchKey => "match_key",
            AlertField::NativeMeDn => "native_me_dn",
        }
    }

    /// Whether the field has to be present after normalization.
    pub fn is_required(&self) -> bool {
        !Self::OPTIONAL.contains(self)
    }
}

impl fmt::Display for AlertField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized alert produced from any vendor's trap or event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertModel {
    pub me_dn: String,
    pub me_name: String,
    pub manufacturer: String,
    pub product_name: String,
    pub category: String,
    pub location: String,
    pub event_type: String,
    pub severity: String,
    pub probable_cause: String,
    pub me_category: String,
    pub alarm_id: String,
    pub alarm_name: String,
    pub device_alert_sn: String,
    pub occur_time: String,
    pub clear_type: String,
    pub match_key: String,
    pub native_me_dn: String,
}

/// Partially filled alert, checked by [`AlertDraft::build`].
#[derive(Debug, Clone, Default)]
pub struct AlertDraft {
    values: HashMap<AlertField, String>,
}

impl AlertDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value.
    pub fn set(&mut self, field: AlertField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Set a field value, builder style.
    pub fn with(mut self, field: AlertField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Check that every required field is set.
    ///
    /// Returns the missing required fields in canonical order.
    pub fn validate(&self) -> Result<(), Vec<AlertField>> {
        let missing: Vec<AlertField> = AlertField::REQUIRED
            .iter()
            .copied()
            .filter(|f| !self.values.contains_key(f))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    /// Validate and turn the draft into an [`AlertModel`].
    pub fn build(mut self) -> Result<AlertModel, Vec<AlertField>> {
        self.validate()?;

        let mut take = |field: AlertField| self.values.remove(&field).unwrap_or_default();

        Ok(AlertModel {
            me_dn: take(AlertField::MeDn),
            me_name: take(AlertField::MeName),
            manufacturer: take(AlertField::Manufacturer),
            product_name: take(AlertField::ProductName),
            category: take(AlertField::Category),
            location: take(AlertField::Location),
            event_type: take(AlertField::EventType),
            severity: take(AlertField::Severity),
            probable_cause: take(AlertField::ProbableCause),
            me_category: ME_CATEGORY.to_string(),
            alarm_id: take(AlertField::AlarmId),
            alarm_name: take(AlertField::AlarmName),
            device_alert_sn: take(AlertField::DeviceAlertSn),
            occur_time: take(AlertField::OccurTime),
            clear_type: take(AlertField::ClearType),
            match_key: take(AlertField::MatchKey),
            native_me_dn: take(AlertField::NativeMeDn),
        })
    }
}
