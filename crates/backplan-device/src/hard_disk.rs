//! Hard disk drive model

use backplan_types::{DeviceKind, Gigabytes, Hours, MegabytesPerSec, StorageDevice};

/// Hard disk drive partitioned into equal slices; total free capacity is
/// the product of partition count and partition size.
#[derive(Debug, Clone)]
pub struct HardDisk {
    /// Informational device name, not used in arithmetic
    pub name: Option<String>,
    /// Informational model string, not used in arithmetic
    pub model: Option<String>,
    speed: MegabytesPerSec,
    partitions: u32,
    partition_size: Gigabytes,
    total_capacity: Gigabytes,
}

impl HardDisk {
    /// Create a disk with the given speed (MB/s), partition count, and
    /// per-partition size (GB)
    pub fn new(speed: MegabytesPerSec, partitions: u32, partition_size: Gigabytes) -> Self {
        Self {
            name: None,
            model: None,
            speed,
            partitions,
            partition_size,
            total_capacity: f64::from(partitions) * partition_size,
        }
    }

    /// Transfer speed in MB/s
    pub fn speed(&self) -> MegabytesPerSec {
        self.speed
    }

    /// Number of partitions
    pub fn partitions(&self) -> u32 {
        self.partitions
    }

    /// Size of each partition in GB
    pub fn partition_size(&self) -> Gigabytes {
        self.partition_size
    }
}

impl StorageDevice for HardDisk {
    fn kind(&self) -> DeviceKind {
        DeviceKind::HardDisk
    }

    fn memory_capacity(&self) -> Gigabytes {
        self.total_capacity
    }

    fn copy_data(&mut self, data_size: Gigabytes) -> Hours {
        let time = data_size / self.speed / 3600.0;
        self.total_capacity -= data_size / 1024.0;
        time
    }

    fn free_memory(&self) -> Gigabytes {
        self.total_capacity
    }

    fn device_info(&self) -> String {
        format!(
            "HDD: {} GB, {} partitions, Speed: {} MB/s",
            self.total_capacity, self.partitions, self.speed
        )
    }
}
