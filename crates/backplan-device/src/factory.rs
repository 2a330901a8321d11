//! Build live devices from declarative profiles

use crate::{FlashDrive, HardDisk, OpticalDisc};
use backplan_types::{DeviceProfile, StorageDevice};
use tracing::debug;

/// Build a boxed device from a configuration profile
pub fn build_device(profile: &DeviceProfile) -> Box<dyn StorageDevice> {
    debug!("Building device from profile: {:?}", profile);
    match profile {
        DeviceProfile::Flash {
            name,
            model,
            speed_mbps,
            capacity_gb,
        } => {
            let mut device = FlashDrive::new(*speed_mbps, *capacity_gb);
            device.name = name.clone();
            device.model = model.clone();
            Box::new(device)
        }
        DeviceProfile::OpticalDisc {
            name,
            model,
            speed_mb_per_hour,
            double_sided,
        } => {
            let mut device = OpticalDisc::new(*speed_mb_per_hour, *double_sided);
            device.name = name.clone();
            device.model = model.clone();
            Box::new(device)
        }
        DeviceProfile::HardDisk {
            name,
            model,
            speed_mbps,
            partitions,
            partition_size_gb,
        } => {
            let mut device = HardDisk::new(*speed_mbps, *partitions, *partition_size_gb);
            device.name = name.clone();
            device.model = model.clone();
            Box::new(device)
        }
    }
}

/// Build every profile in sequence order
pub fn build_devices(profiles: &[DeviceProfile]) -> Vec<Box<dyn StorageDevice>> {
    profiles.iter().map(build_device).collect()
}
