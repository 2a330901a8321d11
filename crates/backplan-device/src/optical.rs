//! Optical disc (DVD) model

use backplan_types::{DeviceKind, Gigabytes, Hours, MegabytesPerHour, StorageDevice};

/// Capacity of a single-sided disc in GB
pub const SINGLE_SIDED_CAPACITY: Gigabytes = 4.7;

/// Capacity of a double-sided disc in GB
pub const DOUBLE_SIDED_CAPACITY: Gigabytes = 9.0;

/// Optical disc whose initial capacity follows from its sidedness.
///
/// Disc speed is expressed in MB per hour, unlike the other device
/// families which use MB per second.
#[derive(Debug, Clone)]
pub struct OpticalDisc {
    /// Informational device name, not used in arithmetic
    pub name: Option<String>,
    /// Informational model string, not used in arithmetic
    pub model: Option<String>,
    speed: MegabytesPerHour,
    double_sided: bool,
    capacity: Gigabytes,
}

impl OpticalDisc {
    /// Create a disc with the given speed (MB/hour); a double-sided disc
    /// starts with 9 GB free, a single-sided one with 4.7 GB.
    pub fn new(speed: MegabytesPerHour, double_sided: bool) -> Self {
        let capacity = if double_sided {
            DOUBLE_SIDED_CAPACITY
        } else {
            SINGLE_SIDED_CAPACITY
        };
        Self {
            name: None,
            model: None,
            speed,
            double_sided,
            capacity,
        }
    }

    /// Transfer speed in MB/hour
    pub fn speed(&self) -> MegabytesPerHour {
        self.speed
    }

    /// Whether the disc is double-sided
    pub fn is_double_sided(&self) -> bool {
        self.double_sided
    }
}

impl StorageDevice for OpticalDisc {
    fn kind(&self) -> DeviceKind {
        DeviceKind::OpticalDisc
    }

    fn memory_capacity(&self) -> Gigabytes {
        self.capacity
    }

    fn copy_data(&mut self, data_size: Gigabytes) -> Hours {
        // Speed is already per hour, so no seconds conversion here.
        let time = data_size / self.speed;
        self.capacity -= data_size / 1024.0;
        time
    }

    fn free_memory(&self) -> Gigabytes {
        self.capacity
    }

    fn device_info(&self) -> String {
        let sides = if self.double_sided {
            "Double-Sided"
        } else {
            "Single-Sided"
        };
        format!(
            "DVD {}: {} GB, Speed: {} MB/h",
            sides, self.capacity, self.speed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, DOUBLE_SIDED_CAPACITY)]
    #[case(false, SINGLE_SIDED_CAPACITY)]
    fn test_initial_capacity_follows_sidedness(
        #[case] double_sided: bool,
        #[case] expected: Gigabytes,
    ) {
        let disc = OpticalDisc::new(56.0, double_sided);
        assert_eq!(disc.memory_capacity(), expected);
        assert_eq!(disc.free_memory(), expected);
    }

    #[test]
    fn test_copy_data_uses_hourly_speed() {
        let mut disc = OpticalDisc::new(56.0, true);
        let file_size = 780.0 / 1024.0;

        let time = disc.copy_data(file_size);
        assert!((time - file_size / 56.0).abs() < 1e-15);
        assert!((disc.free_memory() - (9.0 - file_size / 1024.0)).abs() < 1e-12);
    }

    #[test]
    fn test_device_info_line() {
        let double = OpticalDisc::new(56.0, true);
        assert_eq!(double.device_info(), "DVD Double-Sided: 9 GB, Speed: 56 MB/h");

        let single = OpticalDisc::new(56.0, false);
        assert_eq!(
            single.device_info(),
            "DVD Single-Sided: 4.7 GB, Speed: 56 MB/h"
        );
    }
}
