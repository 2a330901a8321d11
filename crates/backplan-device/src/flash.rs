//! USB flash drive model

use backplan_types::{DeviceKind, Gigabytes, Hours, MegabytesPerSec, StorageDevice};

/// USB flash drive with an immutable transfer speed and a mutable free
/// capacity.
#[derive(Debug, Clone)]
pub struct FlashDrive {
    /// Informational device name, not used in arithmetic
    pub name: Option<String>,
    /// Informational model string, not used in arithmetic
    pub model: Option<String>,
    speed: MegabytesPerSec,
    capacity: Gigabytes,
}

impl FlashDrive {
    /// Create a flash drive with the given speed (MB/s) and initial free
    /// capacity (GB)
    pub fn new(speed: MegabytesPerSec, capacity: Gigabytes) -> Self {
        Self {
            name: None,
            model: None,
            speed,
            capacity,
        }
    }

    /// Transfer speed in MB/s
    pub fn speed(&self) -> MegabytesPerSec {
        self.speed
    }
}

impl StorageDevice for FlashDrive {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Flash
    }

    fn memory_capacity(&self) -> Gigabytes {
        self.capacity
    }

    fn copy_data(&mut self, data_size: Gigabytes) -> Hours {
        let time = data_size / self.speed / 3600.0;
        self.capacity -= data_size / 1024.0;
        time
    }

    fn free_memory(&self) -> Gigabytes {
        self.capacity
    }

    fn device_info(&self) -> String {
        format!("Flash: {} GB, Speed: {} MB/s", self.capacity, self.speed)
    }
}
