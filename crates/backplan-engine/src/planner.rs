//! The backup planning routine

use backplan_config::Config;
use backplan_device::build_devices;
use backplan_types::{BackupJob, BackupPlan, DevicePlan, StorageDevice};
use tracing::debug;

/// Plan a backup job across a device sequence.
///
/// For each device in order: read the current free capacity, derive how
/// many devices of that kind the whole job needs, sample the copy time by
/// copying the job's file once (which consumes capacity on the device),
/// and fold the results into the aggregate. The sample copy runs exactly
/// once per device regardless of the derived count.
pub fn plan_backup(devices: &mut [Box<dyn StorageDevice>], job: &BackupJob) -> BackupPlan {
    let mut plan = BackupPlan::new();

    for device in devices.iter_mut() {
        let capacity = device.memory_capacity();
        // A zero-capacity device divides to infinity; the figure flows
        // into the report unguarded.
        let devices_needed = (job.total_data_size / capacity).ceil();
        let copy_time = device.copy_data(job.file_size);
        let total_time = copy_time * devices_needed;

        debug!(
            capacity,
            devices_needed,
            copy_time,
            "planned {}",
            device.device_info()
        );

        plan.record(
            capacity,
            DevicePlan {
                kind: device.kind(),
                info: device.device_info(),
                devices_needed,
                copy_time,
                total_time,
            },
        );
    }

    plan
}

/// Build the configured fleet and plan the configured job
pub fn plan_for_config(config: &Config) -> BackupPlan {
    let mut devices = build_devices(&config.devices);
    plan_backup(&mut devices, &config.job.to_job())
}
