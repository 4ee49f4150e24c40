use super::*;
use crate::foundation::core::Rgba;

fn params(ex1: Rgba) -> KeyingParameters {
    KeyingParameters {
        screen: ScreenSize::new(100, 100),
        exception_color1: ex1,
        exception_color2: Rgb::new(0.0, 0.0, 1.0),
        ..KeyingParameters::default()
    }
    .sanitized()
}

#[test]
fn unset_color_disables_the_pass() {
    assert!(ExceptionKey::new(&params(Rgba::new(1.0, 0.0, 0.0, 0.0))).is_none());
    assert!(ExceptionKey::new(&params(Rgba::new(1.0, 0.0, 0.0, 1.0))).is_some());
}

#[test]
fn matching_color_is_fully_protected() {
    let ex = ExceptionKey::new(&params(Rgba::new(1.0, 0.0, 0.0, 1.0))).unwrap();
    assert_eq!(ex.protection(Rgb::new(1.0, 0.0, 0.0), 10, 10), 1.0);
    assert_eq!(ex.protection(Rgb::new(0.0, 1.0, 0.0), 10, 10), 0.0);
}

#[test]
fn gradient_runs_along_the_angle() {
    let p = KeyingParameters {
        exception_gradient_strength: 1.0,
        exception_gradient_angle: std::f32::consts::FRAC_PI_2,
        ..params(Rgba::new(1.0, 0.0, 0.0, 1.0))
    };
    let ex = ExceptionKey::new(&p).unwrap();
    let top = ex.spatial_t(50, 0);
    let bottom = ex.spatial_t(50, 99);
    assert!(top < 0.5 && bottom > 0.5);
    assert!((ex.spatial_t(0, 49) - ex.spatial_t(99, 49)).abs() < 1e-6);

    let near_top = ex.reference_at(50, 0);
    let near_bottom = ex.reference_at(50, 99);
    assert!(near_top.r > near_bottom.r);
    assert!(near_top.b < near_bottom.b);
}

#[test]
fn zero_strength_keeps_a_single_reference() {
    let ex = ExceptionKey::new(&params(Rgba::new(1.0, 0.0, 0.0, 1.0))).unwrap();
    assert_eq!(ex.reference_at(0, 0), ex.reference_at(99, 99));
}

#[test]
fn protect_only_raises_alpha() {
    assert_eq!(protect(0.0, 1.0), 1.0);
    assert_eq!(protect(0.3, 0.0), 0.3);
    assert!((protect(0.5, 0.5) - 0.75).abs() < 1e-6);
}
