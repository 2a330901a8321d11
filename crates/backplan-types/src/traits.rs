//! Core traits for backplan device modeling
//!
//! This module defines the polymorphic interface implemented by every
//! modeled storage medium. Devices are used as trait objects
//! (`Box<dyn StorageDevice>`) so a plan can walk a heterogeneous sequence.

use crate::{DeviceKind, Gigabytes, Hours};

/// Polymorphic capability set of a modeled storage medium.
///
/// Implementations own their mutable free-space state exclusively;
/// `copy_data` both reports elapsed time and consumes capacity.
pub trait StorageDevice {
    /// The device family this medium belongs to
    fn kind(&self) -> DeviceKind;

    /// Current free capacity in gigabytes.
    ///
    /// Reads the same field `copy_data` decrements, so after any copy this
    /// reflects remaining free space rather than the configured size.
    fn memory_capacity(&self) -> Gigabytes;

    /// Copy `data_size` gigabytes onto the device.
    ///
    /// Returns the elapsed time in hours and subtracts `data_size / 1024`
    /// from the free capacity. The subtraction is not clamped and capacity
    /// may go negative; repeated calls keep subtracting.
    fn copy_data(&mut self, data_size: Gigabytes) -> Hours;

    /// Current free capacity in gigabytes.
    ///
    /// Returns the same value as [`StorageDevice::memory_capacity`]; both
    /// accessors expose the one mutable free-space field.
    fn free_memory(&self) -> Gigabytes;

    /// One-line human readable description of the device
    fn device_info(&self) -> String;
}
