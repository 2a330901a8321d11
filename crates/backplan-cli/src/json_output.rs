//! JSON output structures for the backplan CLI

use backplan_config::Config;
use backplan_types::{BackupPlan, DeviceKind, DevicePlan};
use serde::{Deserialize, Serialize};

/// Complete JSON document for a plan run
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanReportJson {
    /// Run metadata
    pub metadata: ReportMetadata,
    /// Job sizing the plan was computed for
    pub job: JobJson,
    /// Per-device results in plan order
    pub devices: Vec<DevicePlanJson>,
    /// Aggregate figures
    pub totals: PlanTotalsJson,
}

/// Run metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// backplan version
    pub version: String,
    /// Operation name
    pub operation: String,
    /// Timestamp when the plan was computed
    pub timestamp: String,
}

/// Job sizing in JSON format
#[derive(Debug, Serialize, Deserialize)]
pub struct JobJson {
    /// Total data to back up in GB
    pub total_data_size_gb: f64,
    /// Sample file size in GB
    pub file_size_gb: f64,
}

/// Device family in JSON format
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceKindJson {
    /// USB flash drive
    Flash,
    /// Optical disc
    OpticalDisc,
    /// Hard disk drive
    HardDisk,
}

impl From<DeviceKind> for DeviceKindJson {
    fn from(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::Flash => DeviceKindJson::Flash,
            DeviceKind::OpticalDisc => DeviceKindJson::OpticalDisc,
            DeviceKind::HardDisk => DeviceKindJson::HardDisk,
        }
    }
}

/// One device's plan result in JSON format.
///
/// Non-finite counts (a zero-capacity device) serialize as JSON `null`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DevicePlanJson {
    /// Device family
    pub kind: DeviceKindJson,
    /// Device family description
    pub kind_description: String,
    /// The device's info line after the sample copy
    pub info: String,
    /// Devices of this kind needed for the whole job
    pub devices_needed: f64,
    /// Time to copy the sample file once, in hours
    pub copy_time_hours: f64,
    /// Copy time multiplied by the device count, in hours
    pub total_time_hours: f64,
}

impl DevicePlanJson {
    fn from_plan(device: &DevicePlan) -> Self {
        Self {
            kind: device.kind.into(),
            kind_description: device.kind.description().to_string(),
            info: device.info.clone(),
            devices_needed: device.devices_needed,
            copy_time_hours: device.copy_time,
            total_time_hours: device.total_time,
        }
    }
}

/// Aggregate figures in JSON format
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanTotalsJson {
    /// Sum of the free capacities read during planning, in GB
    pub total_capacity_gb: f64,
    /// Sum of per-device counts
    pub total_devices_needed: f64,
    /// Sum of per-device total times, in hours
    pub total_time_hours: f64,
    /// Whether every aggregate figure is a finite number
    pub finite: bool,
}

impl PlanReportJson {
    /// Build the JSON document for a computed plan
    pub fn new(config: &Config, plan: &BackupPlan) -> Self {
        Self {
            metadata: ReportMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                operation: "plan".to_string(),
                timestamp: chrono::Utc::now().to_rfc3339(),
            },
            job: JobJson {
                total_data_size_gb: config.job.total_data_size_gb,
                file_size_gb: config.job.file_size_gb,
            },
            devices: plan.devices.iter().map(DevicePlanJson::from_plan).collect(),
            totals: PlanTotalsJson {
                total_capacity_gb: plan.total_capacity,
                total_devices_needed: plan.total_devices,
                total_time_hours: plan.total_time,
                finite: plan.is_finite(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backplan_engine::plan_for_config;

    #[test]
    fn test_report_document_mirrors_plan() {
        let config = Config::default();
        let plan = plan_for_config(&config);
        let document = PlanReportJson::new(&config, &plan);

        assert_eq!(document.metadata.operation, "plan");
        assert_eq!(document.devices.len(), 3);
        assert_eq!(document.devices[0].kind, DeviceKindJson::Flash);
        assert_eq!(document.totals.total_devices_needed, 69.0);
        assert!(document.totals.finite);
    }

    #[test]
    fn test_report_document_serializes() {
        let config = Config::default();
        let plan = plan_for_config(&config);
        let document = PlanReportJson::new(&config, &plan);

        let rendered = serde_json::to_string_pretty(&document).unwrap();
        assert!(rendered.contains("\"total_devices_needed\": 69.0"));
        assert!(rendered.contains("\"kind\": \"flash\""));
    }
}
