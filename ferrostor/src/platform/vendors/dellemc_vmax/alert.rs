//! Dell EMC VMAX trap format.
//!
//! Unisphere forwards array events as `emcAsyncEvent*` objects together with
//! the FC management `connUnitEvent*` objects. Unlike OceanStor, the format
//! names the affected component and a correlation id, which fill the optional
//! `native_me_dn` and `match_key` fields when the array sends them.

use crate::alert::{AlertField, VendorFieldMap};

/// Alert format name.
pub const ALERT_FORMAT: &str = "dellemc_vmax";

pub const STORAGE_ID: &str = "storage_id";
pub const STORAGE_NAME: &str = "storage_name";
pub const VENDOR_FIELD: &str = "vendor";
pub const MODEL_FIELD: &str = "model";
pub const EVENT_CODE: &str = "emcAsyncEventCode";
pub const EVENT_NAME: &str = "emcAsyncEventName";
pub const EVENT_CATEGORY: &str = "emcAsyncEventCategory";
pub const COMPONENT_TYPE: &str = "emcAsyncEventComponentType";
pub const COMPONENT_NAME: &str = "emcAsyncEventComponentName";
pub const EVENT_DATE: &str = "emcAsyncEventDate";
pub const UNIT_EVENT_TYPE: &str = "connUnitEventType";
pub const UNIT_EVENT_SEVERITY: &str = "connUnitEventSeverity";
pub const UNIT_EVENT_DESCR: &str = "connUnitEventDescr";
pub const UNIT_EVENT_INDEX: &str = "connUnitEventIndex";
pub const UNIT_EVENT_ID: &str = "connUnitEventId";

/// Create the VMAX field map.
///
/// Component name and event id are optional; everything else is mandatory.
pub fn field_map() -> VendorFieldMap {
    VendorFieldMap::new(ALERT_FORMAT)
        .with_required(AlertField::MeDn, STORAGE_ID)
        .with_required(AlertField::MeName, STORAGE_NAME)
        .with_required(AlertField::Manufacturer, VENDOR_FIELD)
        .with_required(AlertField::ProductName, MODEL_FIELD)
        .with_required(AlertField::Category, EVENT_CATEGORY)
        .with_required(AlertField::Location, COMPONENT_TYPE)
        .with_required(AlertField::EventType, UNIT_EVENT_TYPE)
        .with_required(AlertField::Severity, UNIT_EVENT_SEVERITY)
        .with_required(AlertField::ProbableCause, UNIT_EVENT_DESCR)
        .with_required(AlertField::AlarmId, EVENT_CODE)
        .with_required(AlertField::AlarmName, EVENT_NAME)
        .with_required(AlertField::DeviceAlertSn, UNIT_EVENT_INDEX)
        .with_required(AlertField::OccurTime, EVENT_DATE)
        .with_optional(AlertField::NativeMeDn, COMPONENT_NAME)
        .with_optional(AlertField::MatchKey, UNIT_EVENT_ID)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::Error;
    use crate::alert::{AlertNormalizer, MappedNormalizer, RawAlert};

    pub(crate) fn fake_vmax_alert() -> RawAlert {
        [
            ("storage_id", "0001-vmax"),
            ("storage_name", "vmax250f"),
            ("vendor", "Dell EMC"),
            ("model", "VMAX250F"),
            ("emcAsyncEventCode", "1050"),
            ("emcAsyncEventName", "Disk failure"),
            ("emcAsyncEventCategory", "Fault"),
            ("emcAsyncEventComponentType", "DiskGroup"),
            ("emcAsyncEventComponentName", "DG-01/Disk-7"),
            ("emcAsyncEventDate", "Mon Jun 29 10:01:44 2020"),
            ("connUnitEventType", "status"),
            ("connUnitEventSeverity", "critical"),
            ("connUnitEventDescr", "Drive 7 in disk group 1 failed"),
            ("connUnitEventIndex", "88431"),
            ("connUnitEventId", "7f3a-1050"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_field_map_is_complete() {
        let map = field_map();
        assert!(map.uncovered_required().is_empty());
        let mandatory: Vec<&str> = map.mandatory_fields().collect();
        assert_eq!(mandatory.len(), 13);
        assert!(!mandatory.contains(&COMPONENT_NAME));
        assert!(!mandatory.contains(&UNIT_EVENT_ID));
        assert!(mandatory.contains(&VENDOR_FIELD));
        assert!(mandatory.contains(&MODEL_FIELD));
    }

    #[test]
    fn test_mandatory_set_differs_from_oceanstor() {
        let vmax: Vec<String> = field_map().mandatory_fields().map(String::from).collect();
        let oceanstor: Vec<String> =
            crate::platform::vendors::huawei_oceanstor::alert::field_map()
                .mandatory_fields()
                .map(String::from)
                .collect();
        assert_ne!(vmax, oceanstor);
    }

    #[test]
    fn test_parse_alert_fills_optional_fields() {
        let model = MappedNormalizer::new(field_map())
            .unwrap()
            .parse_alert(&fake_vmax_alert())
            .unwrap();
        assert_eq!(model.me_dn, "0001-vmax");
        assert_eq!(model.alarm_id, "1050");
        assert_eq!(model.severity, "critical");
        assert_eq!(model.occur_time, "Mon Jun 29 10:01:44 2020");
        assert_eq!(model.native_me_dn, "DG-01/Disk-7");
        assert_eq!(model.match_key, "7f3a-1050");
        assert_eq!(model.clear_type, "");
        assert_eq!(model.me_category, "storage-subsystem");
    }

    #[test]
    fn test_parse_alert_without_optional_fields() {
        let mut raw = fake_vmax_alert();
        raw.remove(COMPONENT_NAME);
        raw.remove(UNIT_EVENT_ID);
        let model = MappedNormalizer::new(field_map())
            .unwrap()
            .parse_alert(&raw)
            .unwrap();
        assert_eq!(model.native_me_dn, "");
        assert_eq!(model.match_key, "");
    }

    #[test]
    fn test_parse_alert_missing_severity() {
        let mut raw = fake_vmax_alert();
        raw.remove(UNIT_EVENT_SEVERITY);
        raw.remove(EVENT_DATE);
        let normalizer = MappedNormalizer::new(field_map()).unwrap();
        match normalizer.parse_alert(&raw) {
            Err(Error::Alert(e)) => {
                assert_eq!(e.missing_fields().to_vec(), vec![UNIT_EVENT_SEVERITY, EVENT_DATE]);
            }
            other => panic!("expected InvalidResults, got {other:?}"),
        }
    }
}
