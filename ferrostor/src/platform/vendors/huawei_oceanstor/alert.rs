//! Huawei OceanStor trap format.
//!
//! OceanStor reports faults through the `hwIsmReportingAlarm*` trap objects.
//! The trap receiver adds `storage_id`, `storage_name`, `vendor` and `model`
//! before the payload reaches the driver. The format carries no clear type,
//! match key or native element DN.

use crate::alert::{AlertField, VendorFieldMap};

/// Alert format name.
pub const ALERT_FORMAT: &str = "huawei_oceanstor";

pub const STORAGE_ID: &str = "storage_id";
pub const STORAGE_NAME: &str = "storage_name";
pub const VENDOR_FIELD: &str = "vendor";
pub const MODEL_FIELD: &str = "model";
pub const FAULT_CATEGORY: &str = "hwIsmReportingAlarmFaultCategory";
pub const LOCATION_INFO: &str = "hwIsmReportingAlarmLocationInfo";
pub const FAULT_TYPE: &str = "hwIsmReportingAlarmFaultType";
pub const FAULT_LEVEL: &str = "hwIsmReportingAlarmFaultLevel";
pub const ADDITION_INFO: &str = "hwIsmReportingAlarmAdditionInfo";
pub const ALARM_ID: &str = "hwIsmReportingAlarmAlarmID";
pub const FAULT_TITLE: &str = "hwIsmReportingAlarmFaultTitle";
pub const SERIAL_NO: &str = "hwIsmReportingAlarmSerialNo";
pub const FAULT_TIME: &str = "hwIsmReportingAlarmFaultTime";

/// Create the OceanStor field map. Every mapped field is mandatory.
pub fn field_map() -> VendorFieldMap {
    VendorFieldMap::new(ALERT_FORMAT)
        .with_required(AlertField::MeDn, STORAGE_ID)
        .with_required(AlertField::MeName, STORAGE_NAME)
        .with_required(AlertField::Manufacturer, VENDOR_FIELD)
        .with_required(AlertField::ProductName, MODEL_FIELD)
        .with_required(AlertField::Category, FAULT_CATEGORY)
        .with_required(AlertField::Location, LOCATION_INFO)
        .with_required(AlertField::EventType, FAULT_TYPE)
        .with_required(AlertField::Severity, FAULT_LEVEL)
        .with_required(AlertField::ProbableCause, ADDITION_INFO)
        .with_required(AlertField::AlarmId, ALARM_ID)
        .with_required(AlertField::AlarmName, FAULT_TITLE)
        .with_required(AlertField::DeviceAlertSn, SERIAL_NO)
        .with_required(AlertField::OccurTime, FAULT_TIME)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::Error;
    use crate::alert::{AlertModel, AlertNormalizer, MappedNormalizer, RawAlert};
    use crate::error::AlertError;

    pub(crate) fn fake_alert_info() -> RawAlert {
        [
            ("storage_id", "abcd-1234-56789"),
            ("storage_name", "storage1"),
            ("vendor", "fake vendor"),
            ("model", "fake model"),
            ("hwIsmReportingAlarmLocationInfo", "location1"),
            ("hwIsmReportingAlarmFaultTitle", "Trap Test Alarm"),
            ("hwIsmReportingAlarmFaultType", "equipmentFault"),
            ("hwIsmReportingAlarmFaultLevel", "criticalAlarm"),
            ("hwIsmReportingAlarmAlarmID", "4294967294"),
            ("hwIsmReportingAlarmSerialNo", "4294967295"),
            (
                "hwIsmReportingAlarmAdditionInfo",
                "This is just for testing.Please ignore it",
            ),
            ("hwIsmReportingAlarmFaultCategory", "faultAlarm"),
            ("hwIsmReportingAlarmLocationAlarmID", "230584300921369"),
            ("hwIsmReportingAlarmFaultTime", "2020-6-25,1:42:26.0"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_field_map_is_complete() {
        let map = field_map();
        assert!(map.uncovered_required().is_empty());
        assert_eq!(map.mandatory_fields().count(), 13);
        assert!(map.source(AlertField::MatchKey).is_none());
        assert_eq!(
            map.source(AlertField::Manufacturer).unwrap().field,
            VENDOR_FIELD
        );
        assert_eq!(map.source(AlertField::ProductName).unwrap().field, MODEL_FIELD);
    }

    #[test]
    fn test_parse_alert_with_all_necessary_info() {
        let alert = fake_alert_info();
        let model = MappedNormalizer::new(field_map())
            .unwrap()
            .parse_alert(&alert)
            .unwrap();

        let expected = AlertModel {
            me_dn: alert["storage_id"].clone(),
            me_name: alert["storage_name"].clone(),
            manufacturer: alert["vendor"].clone(),
            product_name: alert["model"].clone(),
            category: alert[FAULT_CATEGORY].clone(),
            location: alert[LOCATION_INFO].clone(),
            event_type: alert[FAULT_TYPE].clone(),
            severity: alert[FAULT_LEVEL].clone(),
            probable_cause: alert[ADDITION_INFO].clone(),
            me_category: "storage-subsystem".to_string(),
            alarm_id: alert[ALARM_ID].clone(),
            alarm_name: alert[FAULT_TITLE].clone(),
            device_alert_sn: alert[SERIAL_NO].clone(),
            occur_time: alert[FAULT_TIME].clone(),
            clear_type: String::new(),
            match_key: String::new(),
            native_me_dn: String::new(),
        };
        assert_eq!(model, expected);
        assert_eq!(model.category, "faultAlarm");
    }

    #[test]
    fn test_parse_alert_without_mandatory_info() {
        let mut alert = fake_alert_info();
        alert.remove(FAULT_CATEGORY);

        let err = MappedNormalizer::new(field_map())
            .unwrap()
            .parse_alert(&alert)
            .unwrap_err();
        assert!(
            err.to_string()
                .contains("Failed to build alert model as some attributes missing in alert message")
        );
        match err {
            Error::Alert(AlertError::InvalidResults { missing }) => {
                assert_eq!(missing, vec![FAULT_CATEGORY.to_string()]);
            }
            other => panic!("expected InvalidResults, got {other:?}"),
        }
    }

    #[test]
    fn test_each_mandatory_field_is_enforced() {
        let normalizer = MappedNormalizer::new(field_map()).unwrap();
        for field in field_map().mandatory_fields() {
            let mut alert = fake_alert_info();
            alert.remove(field);
            let err = normalizer.parse_alert(&alert).unwrap_err();
            match err {
                Error::Alert(e) => assert_eq!(e.missing_fields().to_vec(), vec![field.to_string()]),
                other => panic!("unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn test_extra_fields_are_not_required() {
        let mut alert = fake_alert_info();
        alert.remove("hwIsmReportingAlarmLocationAlarmID");
        let normalizer = MappedNormalizer::new(field_map()).unwrap();
        assert!(normalizer.parse_alert(&alert).is_ok());
    }
}
