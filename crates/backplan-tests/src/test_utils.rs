//! Shared helpers for backplan integration tests

use backplan_device::{FlashDrive, HardDisk, OpticalDisc};
use backplan_types::{BackupJob, Gigabytes, StorageDevice};

/// Sample file size used throughout the reference scenarios: 780 MB in GB
pub const REFERENCE_FILE_SIZE: Gigabytes = 780.0 / 1024.0;

/// Total data size of the reference job in GB
pub const REFERENCE_TOTAL_SIZE: Gigabytes = 565.0;

/// The reference fleet: a 128 GB flash drive at 100 MB/s, a double-sided
/// DVD at 56 MB/h, and a hard disk with four 500 GB partitions at 60 MB/s
pub fn reference_fleet() -> Vec<Box<dyn StorageDevice>> {
    vec![
        Box::new(FlashDrive::new(100.0, 128.0)),
        Box::new(OpticalDisc::new(56.0, true)),
        Box::new(HardDisk::new(60.0, 4, 500.0)),
    ]
}

/// The reference job: 565 GB total, sampled with a 780 MB file
pub fn reference_job() -> BackupJob {
    BackupJob::new(REFERENCE_TOTAL_SIZE, REFERENCE_FILE_SIZE)
}
