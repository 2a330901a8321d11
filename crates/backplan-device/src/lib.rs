//! Storage device models for backplan
//!
//! This crate provides the three modeled storage media and the factory that
//! builds them from configuration profiles:
//!
//! - **Flash drive**: MB/s speed, configured free capacity
//! - **Optical disc**: MB/hour speed, capacity fixed by sidedness
//! - **Hard disk**: MB/s speed, capacity from partition count and size
//!
//! Every device implements [`StorageDevice`](backplan_types::StorageDevice):
//! copying data reports the elapsed time for that device's speed model and
//! decrements the device's free capacity by the copied amount in GB/1024.
//!
//! # Examples
//!
//! ```rust
//! use backplan_device::FlashDrive;
//! use backplan_types::StorageDevice;
//!
//! let mut drive = FlashDrive::new(100.0, 128.0);
//! let hours = drive.copy_data(780.0 / 1024.0);
//! assert!(hours > 0.0);
//! assert!(drive.free_memory() < 128.0);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod factory;
pub mod flash;
pub mod hard_disk;
pub mod optical;

// Re-export main types
pub use factory::{build_device, build_devices};
pub use flash::FlashDrive;
pub use hard_disk::HardDisk;
pub use optical::{OpticalDisc, DOUBLE_SIDED_CAPACITY, SINGLE_SIDED_CAPACITY};

#[cfg(test)]
mod tests {
    use super::*;
    use backplan_types::StorageDevice;
    use proptest::prelude::*;

    fn all_variants() -> Vec<Box<dyn StorageDevice>> {
        vec![
            Box::new(FlashDrive::new(100.0, 128.0)),
            Box::new(OpticalDisc::new(56.0, true)),
            Box::new(HardDisk::new(60.0, 4, 500.0)),
        ]
    }

    #[test]
    fn test_capacity_accessors_agree_on_every_variant() {
        for device in all_variants() {
            assert_eq!(device.memory_capacity(), device.free_memory());
        }
    }

    proptest! {
        #[test]
        fn prop_copy_subtracts_exactly(data_size in 0.001f64..10_000.0) {
            for mut device in all_variants() {
                let before = device.free_memory();
                let time = device.copy_data(data_size);
                prop_assert!(time >= 0.0);
                prop_assert!((before - device.free_memory() - data_size / 1024.0).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_two_copies_subtract_twice(data_size in 0.001f64..1_000.0) {
            for mut device in all_variants() {
                let before = device.free_memory();
                device.copy_data(data_size);
                device.copy_data(data_size);
                let expected = before - 2.0 * data_size / 1024.0;
                prop_assert!((device.free_memory() - expected).abs() < 1e-9);
            }
        }
    }
}
