//! Core data types for backplan
//!
//! This module provides the fundamental data types used throughout the
//! backplan ecosystem: unit aliases, device descriptions, job sizing, and
//! the structured plan produced by the planner.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Storage volume in gigabytes
pub type Gigabytes = f64;

/// Elapsed time in hours
pub type Hours = f64;

/// Transfer speed in megabytes per second
pub type MegabytesPerSec = f64;

/// Transfer speed in megabytes per hour
pub type MegabytesPerHour = f64;

/// Device family, used for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeviceKind {
    /// USB flash drive
    Flash,
    /// Optical disc (DVD)
    OpticalDisc,
    /// Hard disk drive
    HardDisk,
}

impl DeviceKind {
    /// Get a human-readable description of the device family
    pub fn description(&self) -> &'static str {
        match self {
            DeviceKind::Flash => "Flash drive",
            DeviceKind::OpticalDisc => "Optical disc (DVD)",
            DeviceKind::HardDisk => "Hard disk drive",
        }
    }
}

/// Declarative description of a device to model, as it appears in
/// configuration. The factory in `backplan-device` turns profiles into
/// live [`StorageDevice`](crate::StorageDevice) instances.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum DeviceProfile {
    /// USB flash drive
    Flash {
        /// Informational device name, not used in arithmetic
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        name: Option<String>,
        /// Informational model string, not used in arithmetic
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        model: Option<String>,
        /// Transfer speed in MB/s
        speed_mbps: MegabytesPerSec,
        /// Initial free capacity in GB
        capacity_gb: Gigabytes,
    },
    /// Optical disc; capacity follows from sidedness
    OpticalDisc {
        /// Informational device name, not used in arithmetic
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        name: Option<String>,
        /// Informational model string, not used in arithmetic
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        model: Option<String>,
        /// Transfer speed in MB/hour
        speed_mb_per_hour: MegabytesPerHour,
        /// Double-sided discs hold 9 GB, single-sided 4.7 GB
        double_sided: bool,
    },
    /// Hard disk drive partitioned into equal slices
    HardDisk {
        /// Informational device name, not used in arithmetic
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        name: Option<String>,
        /// Informational model string, not used in arithmetic
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        model: Option<String>,
        /// Transfer speed in MB/s
        speed_mbps: MegabytesPerSec,
        /// Number of partitions
        partitions: u32,
        /// Size of each partition in GB
        partition_size_gb: Gigabytes,
    },
}

impl DeviceProfile {
    /// The device family this profile describes
    pub fn kind(&self) -> DeviceKind {
        match self {
            DeviceProfile::Flash { .. } => DeviceKind::Flash,
            DeviceProfile::OpticalDisc { .. } => DeviceKind::OpticalDisc,
            DeviceProfile::HardDisk { .. } => DeviceKind::HardDisk,
        }
    }

    /// Informational device name, if configured
    pub fn name(&self) -> Option<&str> {
        match self {
            DeviceProfile::Flash { name, .. }
            | DeviceProfile::OpticalDisc { name, .. }
            | DeviceProfile::HardDisk { name, .. } => name.as_deref(),
        }
    }

    /// Informational model string, if configured
    pub fn model(&self) -> Option<&str> {
        match self {
            DeviceProfile::Flash { model, .. }
            | DeviceProfile::OpticalDisc { model, .. }
            | DeviceProfile::HardDisk { model, .. } => model.as_deref(),
        }
    }
}

/// Sizing of a backup job
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BackupJob {
    /// Total amount of data to back up, in gigabytes
    pub total_data_size: Gigabytes,
    /// Size of the single file whose copy samples each device's speed,
    /// in gigabytes
    pub file_size: Gigabytes,
}

impl BackupJob {
    /// Create a new job description
    pub fn new(total_data_size: Gigabytes, file_size: Gigabytes) -> Self {
        Self {
            total_data_size,
            file_size,
        }
    }
}

/// Outcome of planning one device
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DevicePlan {
    /// Device family
    pub kind: DeviceKind,
    /// The device's info line, captured after the sample copy ran
    pub info: String,
    /// Number of devices of this kind needed to hold the whole job.
    /// Kept as `f64`: a zero-capacity device divides to infinity, which
    /// must flow into the report rather than panic.
    pub devices_needed: f64,
    /// Time to copy the sample file once, in hours
    pub copy_time: Hours,
    /// `copy_time * devices_needed`, in hours
    pub total_time: Hours,
}

/// Aggregate result of a backup plan
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BackupPlan {
    /// Per-device outcomes in plan order
    pub devices: Vec<DevicePlan>,
    /// Sum of the free capacities read when each device was planned, in GB
    pub total_capacity: Gigabytes,
    /// Sum of per-device counts
    pub total_devices: f64,
    /// Sum of per-device total times, in hours
    pub total_time: Hours,
}

impl BackupPlan {
    /// Create a new empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one device's outcome into the aggregate.
    ///
    /// `capacity` is the free capacity read before the sample copy ran;
    /// the capacity total sums those pre-copy readings.
    pub fn record(&mut self, capacity: Gigabytes, device: DevicePlan) {
        self.total_capacity += capacity;
        self.total_devices += device.devices_needed;
        self.total_time += device.total_time;
        self.devices.push(device);
    }

    /// Number of devices the plan covered
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Whether every aggregate figure is a finite number.
    ///
    /// A device with zero free capacity yields an infinite count; the plan
    /// still completes, and callers can use this to flag the report.
    pub fn is_finite(&self) -> bool {
        self.total_capacity.is_finite()
            && self.total_devices.is_finite()
            && self.total_time.is_finite()
    }
}
