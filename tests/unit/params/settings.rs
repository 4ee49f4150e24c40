use super::*;

#[test]
fn defaults_resolve_to_kernel_defaults() {
    let screen = ScreenSize::new(1920, 1080);
    let resolved = KeySettings::default().resolve(screen);
    let kernel = KeyingParameters {
        screen,
        ..KeyingParameters::default()
    };

    assert!((resolved.tolerance - kernel.tolerance).abs() < 1e-6);
    assert!((resolved.preserve_luminance - kernel.preserve_luminance).abs() < 1e-6);
    assert!((resolved.gradient_angle - kernel.gradient_angle).abs() < 1e-6);
    assert!((resolved.transparency_quality - kernel.transparency_quality).abs() < 1e-6);
    assert_eq!(resolved.color_space, kernel.color_space);
    assert_eq!(resolved.quality_preset, kernel.quality_preset);
}

#[test]
fn units_convert_percent_degrees_and_pass_pixels() {
    let s = KeySettings {
        tolerance: 35.0,
        gradient_angle: 180.0,
        erode: -3.0,
        edge_balance: -50.0,
        ..KeySettings::default()
    };
    let p = s.resolve(ScreenSize::new(64, 64));
    assert!((p.tolerance - 0.35).abs() < 1e-6);
    assert!((p.gradient_angle - std::f32::consts::PI).abs() < 1e-6);
    assert_eq!(p.erode, -3.0);
    assert!((p.edge_balance + 0.5).abs() < 1e-6);
    assert_eq!(p.screen, ScreenSize::new(64, 64));
}

#[test]
fn picking_base_color_moves_end_color() {
    let s = KeySettings::default().with_base_color([0, 255, 0, 255]);
    assert_eq!(s.end_color, [0, 255, 0, 255]);
    let s = KeySettings::default().with_exception_color([200, 150, 120, 255]);
    assert_eq!(s.exception_color2, [200, 150, 120, 255]);
}

#[test]
fn parses_partial_documents() {
    let s = KeySettings::from_json_str(
        r#"{ "base_color": [0, 255, 0, 255], "color_space": "hsv", "debug_mode": "matte" }"#,
    )
    .unwrap();
    assert_eq!(s.base_color, [0, 255, 0, 255]);
    assert_eq!(s.color_space, ColorSpace::Hsv);
    assert_eq!(s.debug_mode, DebugMode::Matte);
    assert_eq!(s.tolerance, 20.0);
}

#[test]
fn malformed_documents_are_serde_errors() {
    let err = KeySettings::from_json_str(r#"{ "tolerance": "lots" }"#).unwrap_err();
    assert!(matches!(err, KeyError::Serde(_)));
}

#[test]
fn from_path_reports_parse_and_io_failures() {
    let dir = std::env::temp_dir().join(format!("gradient-key-settings-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.json");
    std::fs::write(&good, r#"{ "tolerance": 35.0 }"#).unwrap();
    assert_eq!(KeySettings::from_path(&good).unwrap().tolerance, 35.0);

    let bad = dir.join("bad.json");
    std::fs::write(&bad, "{ \"tolerance\": ").unwrap();
    let err = KeySettings::from_path(&bad).unwrap_err();
    assert!(matches!(err, KeyError::Serde(_)), "{err}");

    let missing = dir.join("missing.json");
    let err = KeySettings::from_path(&missing).unwrap_err();
    assert!(matches!(err, KeyError::Other(_)));
    assert!(err.to_string().contains("missing.json"));

    let _ = std::fs::remove_dir_all(&dir);
}
