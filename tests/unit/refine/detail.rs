use super::*;

fn edge_plane() -> MattePlane {
    MattePlane::generate(12, 6, RowExec::SERIAL, |_, row| {
        for (x, v) in row.iter_mut().enumerate() {
            *v = if x < 6 { 0.0 } else { 1.0 };
        }
    })
}

#[test]
fn zero_amounts_are_identity() {
    let p = edge_plane();
    let screen = ScreenSize::new(12, 6);
    assert_eq!(feather(&p, 0.0, screen, QualityPreset::Balanced, RowExec::SERIAL), p);
    assert_eq!(denoise(&p, 0.0, 1, RowExec::SERIAL), p);
    assert_eq!(sharpen_edges(&p, 0.0, RowExec::SERIAL), p);
}

#[test]
fn median_removes_salt_noise() {
    let mut data = vec![0.0; 25];
    data[12] = 1.0;
    let p = MattePlane::from_vec(5, 5, data);
    let out = denoise(&p, 1.0, 1, RowExec::SERIAL);
    assert_eq!(out.at(2, 2), 0.0);

    let half = denoise(&p, 0.5, 1, RowExec::SERIAL);
    assert!((half.at(2, 2) - 0.5).abs() < 1e-6);
}

#[test]
fn feathering_softens_the_edge() {
    let p = edge_plane();
    let out = feather(&p, 1.0, ScreenSize::new(300, 300), QualityPreset::Balanced, RowExec::SERIAL);
    assert!(out.at(5, 2) > 0.0);
    assert!(out.at(6, 2) < 1.0);
}

#[test]
fn sharpening_keeps_flat_areas_and_stays_in_range() {
    let out = sharpen_edges(&edge_plane(), 1.0, RowExec::SERIAL);
    assert_eq!(out.at(0, 0), 0.0);
    assert_eq!(out.at(11, 0), 1.0);
    assert!(out.data().iter().all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn gradient_peaks_on_the_edge() {
    let g = gradient_magnitude(&edge_plane(), RowExec::SERIAL);
    assert_eq!(g.at(0, 3), 0.0);
    assert!((g.at(5, 3) - 0.5).abs() < 1e-6);
    assert!((g.at(6, 3) - 0.5).abs() < 1e-6);
}

#[test]
fn neighborhood_mean_depends_on_taps() {
    let p = edge_plane();
    assert!(neighborhood_mean(&p, TransparencyTaps::None, RowExec::SERIAL).is_none());
    let cross = neighborhood_mean(&p, TransparencyTaps::Cross, RowExec::SERIAL).unwrap();
    assert!((cross.at(5, 3) - 0.2).abs() < 1e-6);
    let boxed = neighborhood_mean(&p, TransparencyTaps::Box3, RowExec::SERIAL).unwrap();
    assert!((boxed.at(5, 3) - 1.0 / 3.0).abs() < 1e-5);
}
