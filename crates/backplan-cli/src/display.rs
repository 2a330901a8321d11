//! Console rendering for backup plans

use backplan_device::build_device;
use backplan_types::{BackupPlan, DevicePlan, DeviceProfile};
use console::style;

/// Render one device's report block: the info line plus the count/time
/// line.
pub fn device_block(device: &DevicePlan) -> String {
    format!(
        "{}\nDevices needed: {}, Total time (hours): {}",
        device.info, device.devices_needed, device.total_time
    )
}

/// Render the three aggregate lines of the report
pub fn totals_block(plan: &BackupPlan) -> String {
    format!(
        "Total Memory Capacity of All Devices: {} GB\n\
         Total Devices Needed: {}\n\
         Total Time for Backup (hours): {}",
        plan.total_capacity, plan.total_devices, plan.total_time
    )
}

/// Print the full plan report
pub fn print_backup_plan(plan: &BackupPlan) {
    for device in &plan.devices {
        println!("{}", device_block(device));
        println!();
    }

    println!("{}", totals_block(plan));

    if !plan.is_finite() {
        display_warning("a device reported zero free capacity; the totals are not finite");
    }
}

/// Print the configured device fleet without running a plan
pub fn display_device_list(profiles: &[DeviceProfile]) {
    for profile in profiles {
        let device = build_device(profile);
        println!("{}", style(device.device_info()).bold());
        println!("  Kind: {}", profile.kind().description());
        if let Some(name) = profile.name() {
            println!("  Name: {}", name);
        }
        if let Some(model) = profile.model() {
            println!("  Model: {}", model);
        }
        println!(
            "  Free capacity: {} GB",
            style(device.free_memory()).green()
        );
        println!();
    }
}

/// Display a warning message with proper formatting
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), style(message).yellow());
}
