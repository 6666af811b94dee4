//! Logitech USB vendor and product ID constants.

use flightstick_hid_common::UsbDeviceId;

/// Logitech USB Vendor ID.
pub const VENDOR_ID: u16 = 0x046D;

/// Extreme 3D Pro joystick.
pub const PID_EXTREME_3D_PRO: u16 = 0xC215;

pub const EXTREME_3D_PRO: UsbDeviceId = UsbDeviceId::new(VENDOR_ID, PID_EXTREME_3D_PRO);

/// Returns `true` if the VID/PID pair identifies an Extreme 3D Pro.
pub fn is_extreme_3d_pro(vid: u16, pid: u16) -> bool {
    EXTREME_3D_PRO.matches(vid, pid)
}
