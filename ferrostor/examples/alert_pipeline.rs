//! Normalize a sample trap through the driver dispatcher.
//!
//! Registers an OceanStor array in an in-memory access info store, then
//! feeds one complete and one incomplete trap payload through `parse_alert`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example alert_pipeline
//! ```

use std::sync::Arc;

use ferrostor::access::InMemoryAccessInfoRepository;
use ferrostor::{AccessInfo, Context, DriverApi, DriverRegistry, RawAlert};

const STORAGE_ID: &str = "abcd-1234-56789";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let repo = InMemoryAccessInfoRepository::with_records([AccessInfo::new(
        STORAGE_ID,
        "huawei",
        "oceanstor",
    )]);
    let api = DriverApi::new(
        Arc::new(DriverRegistry::with_builtin_drivers()),
        Arc::new(repo),
    );
    let ctx = Context::new("demo-1");

    let mut trap: RawAlert = [
        ("storage_id", STORAGE_ID),
        ("storage_name", "storage1"),
        ("vendor", "huawei"),
        ("model", "oceanstor"),
        ("hwIsmReportingAlarmLocationInfo", "controller A"),
        ("hwIsmReportingAlarmFaultTitle", "Power supply failure"),
        ("hwIsmReportingAlarmFaultType", "equipmentFault"),
        ("hwIsmReportingAlarmFaultLevel", "criticalAlarm"),
        ("hwIsmReportingAlarmAlarmID", "4294967294"),
        ("hwIsmReportingAlarmSerialNo", "4294967295"),
        ("hwIsmReportingAlarmAdditionInfo", "PSU 1 lost input power"),
        ("hwIsmReportingAlarmFaultCategory", "faultAlarm"),
        ("hwIsmReportingAlarmFaultTime", "2020-6-25,1:42:26.0"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let alert = api.parse_alert(&ctx, STORAGE_ID, &trap).await?;
    println!("{alert:#?}");

    trap.remove("hwIsmReportingAlarmFaultCategory");
    match api.parse_alert(&ctx, STORAGE_ID, &trap).await {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("rejected: {e}"),
    }

    Ok(())
}
