use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn centre_of_viewport_is_flat() {
    let tilt = Tilt::from_pointer(500.0, 400.0, 1000.0, 800.0, 20.0).unwrap();
    assert!(approx(tilt.rotate_x_deg, 0.0));
    assert!(approx(tilt.rotate_y_deg, 0.0));
}

#[test]
fn top_left_corner_tilts_negative() {
    let tilt = Tilt::from_pointer(0.0, 0.0, 1000.0, 800.0, 20.0).unwrap();
    assert!(approx(tilt.rotate_x_deg, -10.0));
    assert!(approx(tilt.rotate_y_deg, -10.0));
}

#[test]
fn horizontal_pointer_drives_rotate_y() {
    let tilt = Tilt::from_pointer(750.0, 400.0, 1000.0, 800.0, 20.0).unwrap();
    assert!(approx(tilt.rotate_y_deg, 5.0));
    assert!(approx(tilt.rotate_x_deg, 0.0));
}

#[test]
fn empty_viewport_yields_no_tilt() {
    assert_eq!(Tilt::from_pointer(10.0, 10.0, 0.0, 800.0, 20.0), None);
    assert_eq!(Tilt::from_pointer(10.0, 10.0, 800.0, 0.0, 20.0), None);
}

#[test]
fn css_transform_format() {
    let tilt = Tilt { rotate_x_deg: -10.0, rotate_y_deg: 2.5 };
    assert_eq!(tilt.to_css(), "perspective(1000px) rotateX(-10.00deg) rotateY(2.50deg)");
}

#[test]
fn css_rounds_to_hundredths() {
    let tilt = Tilt { rotate_x_deg: 1.234_56, rotate_y_deg: 0.004 };
    assert_eq!(tilt.to_css(), "perspective(1000px) rotateX(1.23deg) rotateY(0.00deg)");
}
