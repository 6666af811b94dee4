//! Cross-checks the Extreme 3D Pro identifiers against the values reported
//! by the device in `lsusb` (`046d:c215 Logitech, Inc. Extreme 3D Pro`).

use flightstick_hid_extreme3d_protocol as e3d;

#[test]
fn vendor_id_is_logitech() {
    assert_eq!(e3d::VENDOR_ID, 0x046D);
}

#[test]
fn product_id_is_extreme_3d_pro() {
    assert_eq!(e3d::PID_EXTREME_3D_PRO, 0xC215);
}

#[test]
fn device_id_formats_like_lsusb() {
    assert_eq!(e3d::EXTREME_3D_PRO.to_string(), "046d:c215");
    assert!(e3d::is_extreme_3d_pro(
        e3d::EXTREME_3D_PRO.vendor_id,
        e3d::EXTREME_3D_PRO.product_id
    ));
}
