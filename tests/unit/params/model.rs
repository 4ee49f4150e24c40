use super::*;

#[test]
fn inverted_clip_levels_fall_back_below_white() {
    let p = KeyingParameters {
        clip_black: 0.8,
        clip_white: 0.4,
        ..KeyingParameters::default()
    };
    assert!(p.has_inverted_clip());
    let s = p.sanitized();
    assert!((s.clip_white - 0.4).abs() < 1e-6);
    assert!((s.clip_black - (0.4 - CLIP_EPS)).abs() < 1e-6);

    let p = KeyingParameters {
        clip_black: 0.0,
        clip_white: 0.0,
        ..KeyingParameters::default()
    };
    let s = p.sanitized();
    assert!(s.clip_black < s.clip_white);
}

#[test]
fn non_finite_values_collapse_to_neutral() {
    let p = KeyingParameters {
        tolerance: f32::NAN,
        erode: f32::INFINITY,
        gradient_angle: f32::NAN,
        foreground_contrast: f32::NEG_INFINITY,
        ..KeyingParameters::default()
    };
    let s = p.sanitized();
    assert_eq!(s.tolerance, 0.0);
    assert_eq!(s.erode, 0.0);
    assert_eq!(s.gradient_angle, 0.0);
    assert_eq!(s.foreground_contrast, 0.0);
}

#[test]
fn presets_override_base_color_and_space() {
    let p = KeyingParameters {
        main_key_color: MainKeyColor::Blue,
        base_color: Rgba::new(1.0, 0.0, 0.0, 1.0),
        color_space: ColorSpace::Hsv,
        gradient_strength: 1.0,
        end_color: Rgb::WHITE,
        ..KeyingParameters::default()
    };
    let r = p.key_reference();
    assert_eq!(r.base, Rgb::new(0.0, 0.0, 1.0));
    assert_eq!(r.end, r.base);
    assert_eq!(r.space, ColorSpace::Yuv);
}

#[test]
fn zero_gradient_strength_collapses_end_onto_base() {
    let p = KeyingParameters {
        base_color: Rgba::new(0.1, 0.8, 0.2, 1.0),
        end_color: Rgb::new(0.9, 0.1, 0.9),
        gradient_strength: 0.0,
        ..KeyingParameters::default()
    };
    let r = p.key_reference();
    assert_eq!(r.end, r.base);

    let half = KeyingParameters {
        gradient_strength: 0.5,
        ..p
    };
    let r = half.key_reference();
    assert!((r.end.r - 0.5).abs() < 1e-6);
}

#[test]
fn partial_json_uses_defaults() {
    let p: KeyingParameters =
        serde_json::from_str(r#"{ "tolerance": 0.4, "main_key_color": "green" }"#).unwrap();
    assert_eq!(p.tolerance, 0.4);
    assert_eq!(p.main_key_color, MainKeyColor::Green);
    assert_eq!(p.clip_white, 1.0);
    assert_eq!(p.quality_preset, QualityPreset::Balanced);
}

#[test]
fn pointwise_detection_tracks_neighborhood_stages() {
    let mut p = KeyingParameters {
        edge_desaturation: 0.0,
        transparency_quality: 0.0,
        ..KeyingParameters::default()
    };
    assert!(p.is_pointwise());
    p.edge_blur = 1.0;
    assert!(!p.is_pointwise());
}

#[test]
fn transparent_custom_base_disables_the_main_key() {
    assert!(!KeyingParameters::default().has_main_key());
    let picked = KeyingParameters {
        base_color: Rgba::new(0.0, 0.0, 0.0, 1.0),
        ..KeyingParameters::default()
    };
    assert!(picked.has_main_key());
    let preset = KeyingParameters {
        main_key_color: MainKeyColor::Blue,
        ..KeyingParameters::default()
    };
    assert!(preset.has_main_key());
}
