use super::*;

fn fix() -> ResidualCorrection {
    ResidualCorrection {
        target: Rgb::new(0.5, 0.6, 0.5),
        corrected: Rgb::new(0.5, 0.5, 0.5),
        strength: 1.0,
        tolerance: 0.2,
    }
}

#[test]
fn exact_target_is_fully_remapped() {
    assert_eq!(fix().apply(Rgb::new(0.5, 0.6, 0.5)), Rgb::new(0.5, 0.5, 0.5));
}

#[test]
fn distant_colors_are_untouched() {
    let c = Rgb::new(0.9, 0.1, 0.1);
    assert_eq!(fix().apply(c), c);
}

#[test]
fn zero_strength_ignores_colors() {
    let c = Rgb::new(0.5, 0.6, 0.5);
    let off = ResidualCorrection {
        strength: 0.0,
        ..fix()
    };
    assert_eq!(off.apply(c), c);
}

#[test]
fn weight_fades_inside_tolerance() {
    let f = fix();
    let near = f.weight(Rgb::new(0.52, 0.6, 0.5));
    let farther = f.weight(Rgb::new(0.6, 0.6, 0.5));
    assert!(near > farther && farther > 0.0 && near < 1.0);
}
