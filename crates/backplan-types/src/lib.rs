//! Core type system and error handling for backplan
//!
//! This crate provides the foundational types and shared data structures
//! used throughout the backplan ecosystem. It includes:
//!
//! - **Core types**: unit aliases, device profiles, job sizing, and the
//!   structured backup plan
//! - **Traits**: the polymorphic [`StorageDevice`] interface
//! - **Error handling**: shared error type with severity levels
//!
//! # Features
//!
//! - `serde`: Enable serialization support for profiles and plans
//!
//! # Examples
//!
//! ```rust
//! use backplan_types::{BackupJob, BackupPlan};
//!
//! let job = BackupJob::new(565.0, 780.0 / 1024.0);
//! let plan = BackupPlan::new();
//! assert_eq!(plan.device_count(), 0);
//! assert!(job.total_data_size > job.file_size);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod result;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Error, ErrorSeverity};
pub use result::Result;
pub use traits::StorageDevice;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_starts_empty() {
        let plan = BackupPlan::new();
        assert_eq!(plan.device_count(), 0);
        assert_eq!(plan.total_capacity, 0.0);
        assert_eq!(plan.total_devices, 0.0);
        assert_eq!(plan.total_time, 0.0);
        assert!(plan.is_finite());
    }

    #[test]
    fn test_plan_record_accumulates() {
        let mut plan = BackupPlan::new();
        plan.record(
            128.0,
            DevicePlan {
                kind: DeviceKind::Flash,
                info: "Flash: 128 GB, Speed: 100 MB/s".to_string(),
                devices_needed: 5.0,
                copy_time: 0.5,
                total_time: 2.5,
            },
        );
        plan.record(
            9.0,
            DevicePlan {
                kind: DeviceKind::OpticalDisc,
                info: "DVD Double-Sided: 9 GB, Speed: 56 MB/h".to_string(),
                devices_needed: 63.0,
                copy_time: 0.1,
                total_time: 6.3,
            },
        );

        assert_eq!(plan.device_count(), 2);
        assert_eq!(plan.total_capacity, 137.0);
        assert_eq!(plan.total_devices, 68.0);
        assert!((plan.total_time - 8.8).abs() < 1e-12);
    }

    #[test]
    fn test_plan_nonfinite_detection() {
        let mut plan = BackupPlan::new();
        plan.record(
            0.0,
            DevicePlan {
                kind: DeviceKind::Flash,
                info: "Flash: 0 GB, Speed: 100 MB/s".to_string(),
                devices_needed: f64::INFINITY,
                copy_time: 0.0,
                total_time: f64::INFINITY,
            },
        );
        assert!(!plan.is_finite());
    }

    #[test]
    fn test_error_severity() {
        let io_error = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "test"));
        assert_eq!(io_error.severity(), ErrorSeverity::Medium);
        assert!(io_error.is_recoverable());

        let config_error = Error::config("invalid config");
        assert_eq!(config_error.severity(), ErrorSeverity::High);
        assert!(!config_error.is_recoverable());
    }

    #[test]
    fn test_profile_kind() {
        let profile = DeviceProfile::OpticalDisc {
            name: None,
            model: None,
            speed_mb_per_hour: 56.0,
            double_sided: true,
        };
        assert_eq!(profile.kind(), DeviceKind::OpticalDisc);
        assert_eq!(profile.kind().description(), "Optical disc (DVD)");
    }
}
