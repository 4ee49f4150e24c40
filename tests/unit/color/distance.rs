use super::*;

const ALL_SPACES: [ColorSpace; 6] = [
    ColorSpace::Rgb,
    ColorSpace::Hsv,
    ColorSpace::Lab,
    ColorSpace::Yuv,
    ColorSpace::Xyz,
    ColorSpace::Lch,
];

#[test]
fn identical_colors_have_zero_distance_in_every_space() {
    let p = DistanceParams::default();
    for c in [
        Rgb::new(0.0, 1.0, 0.0),
        Rgb::new(0.2, 0.3, 0.9),
        Rgb::BLACK,
        Rgb::WHITE,
        Rgb::new(0.5, 0.5, 0.5),
    ] {
        for space in ALL_SPACES {
            let d = color_distance(c, c, space, &p);
            assert!(d.abs() < 1e-5, "{space:?} {c:?} -> {d}");
        }
    }
}

#[test]
fn distances_are_finite_and_non_negative_for_degenerate_inputs() {
    let p = DistanceParams {
        hue_range: 0.0,
        saturation_threshold: 0.0,
        luminance_range: 0.0,
        luminance_mix: 1.0,
    };
    let samples = [Rgb::BLACK, Rgb::WHITE, Rgb::new(0.5, 0.5, 0.5)];
    for a in samples {
        for b in samples {
            for space in ALL_SPACES {
                let d = color_distance(a, b, space, &p);
                assert!(d.is_finite() && d >= 0.0, "{space:?} {a:?} {b:?} -> {d}");
            }
        }
    }
}

#[test]
fn gray_reference_ignores_candidate_hue_in_cylindrical_spaces() {
    let p = DistanceParams {
        saturation_threshold: 0.0,
        ..DistanceParams::default()
    };
    let gray = Rgb::new(0.5, 0.5, 0.5);
    // Same saturation and value, different hues.
    let candidates = [
        Rgb::new(0.8, 0.4, 0.4),
        Rgb::new(0.4, 0.8, 0.4),
        Rgb::new(0.4, 0.4, 0.8),
        Rgb::new(0.8, 0.8, 0.4),
    ];
    for space in [ColorSpace::Hsv, ColorSpace::Lch] {
        if space == ColorSpace::Hsv {
            let ds: Vec<f32> = candidates
                .iter()
                .map(|c| color_distance(*c, gray, space, &p))
                .collect();
            for d in &ds {
                assert!((d - ds[0]).abs() < 1e-6, "{ds:?}");
            }
        } else {
            // LCH lightness differs per hue, so compare against a lightness-only distance.
            for c in candidates {
                let d = color_distance(c, gray, space, &p);
                let lc = crate::color::space::rgb_to_lch(c)[0];
                let lr = crate::color::space::rgb_to_lch(gray)[0];
                assert!((d - (lc - lr).abs() / 100.0).abs() < 1e-5);
            }
        }
    }
}

#[test]
fn hue_inside_hue_range_costs_nothing() {
    let p = DistanceParams {
        hue_range: 0.1,
        luminance_mix: 0.0,
        ..DistanceParams::default()
    };
    // Pure green vs a slightly yellower green with identical s and v.
    let reference = Rgb::new(0.0, 1.0, 0.0);
    let near = Rgb::new(0.2, 1.0, 0.0);
    let far = Rgb::new(1.0, 0.0, 1.0);
    assert!(color_distance(near, reference, ColorSpace::Hsv, &p) < 1e-6);
    assert!(color_distance(far, reference, ColorSpace::Hsv, &p) > 0.5);
}

#[test]
fn luminance_mix_only_increases_separation() {
    let reference = Rgb::new(0.0, 0.6, 0.0);
    let brighter = Rgb::new(0.6, 1.0, 0.6);
    let without = DistanceParams {
        luminance_mix: 0.0,
        luminance_range: 0.0,
        ..DistanceParams::default()
    };
    let with = DistanceParams {
        luminance_mix: 1.0,
        ..without
    };
    for space in ALL_SPACES {
        let a = color_distance(brighter, reference, space, &without);
        let b = color_distance(brighter, reference, space, &with);
        assert!(b + 1e-6 >= a, "{space:?}: {a} vs {b}");
    }
}

#[test]
fn luminance_range_absorbs_small_luma_differences() {
    let reference = Rgb::new(0.3, 0.3, 0.3);
    let lighter = Rgb::new(0.5, 0.5, 0.5);
    let p = DistanceParams {
        luminance_mix: 1.0,
        luminance_range: 0.5,
        ..DistanceParams::default()
    };
    // YUV chroma is zero for grays; a luma gap of 0.2 sits inside the 0.5 range.
    assert!(color_distance(lighter, reference, ColorSpace::Yuv, &p) < 1e-6);
}

#[test]
fn yuv_separates_green_from_red() {
    let p = DistanceParams::default();
    let green = Rgb::new(0.0, 1.0, 0.0);
    let red = Rgb::new(1.0, 0.0, 0.0);
    assert!(color_distance(red, green, ColorSpace::Yuv, &p) > 0.9);
}
