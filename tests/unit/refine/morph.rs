use super::*;

/// 9x9 transparent plane with a single opaque pixel in the middle.
fn dot() -> MattePlane {
    let mut data = vec![0.0; 81];
    data[4 * 9 + 4] = 1.0;
    MattePlane::from_vec(9, 9, data)
}

fn opaque_count(p: &MattePlane) -> usize {
    p.data().iter().filter(|v| **v > 0.5).count()
}

#[test]
fn square_dilate_grows_a_box() {
    let out = morph(&dot(), 1, MorphOp::Dilate, MorphShape::Square, RowExec::SERIAL);
    assert_eq!(opaque_count(&out), 9);
}

#[test]
fn diamond_dilate_grows_an_l1_ball() {
    let out = morph(&dot(), 2, MorphOp::Dilate, MorphShape::Diamond, RowExec::SERIAL);
    // 1 + 4 + 8 pixels within Manhattan distance 2.
    assert_eq!(opaque_count(&out), 13);
    assert_eq!(out.at(6, 4), 1.0);
    assert_eq!(out.at(6, 6), 0.0);
}

#[test]
fn negative_amount_erodes() {
    let out = morph_signed(&dot(), -1.0, MorphShape::Square, RowExec::SERIAL);
    assert_eq!(opaque_count(&out), 0);
}

#[test]
fn fractional_radius_interpolates() {
    let out = morph_signed(&dot(), 0.5, MorphShape::Square, RowExec::SERIAL);
    assert_eq!(out.at(4, 4), 1.0);
    assert!((out.at(5, 4) - 0.5).abs() < 1e-6);
    assert_eq!(out.at(6, 4), 0.0);
}

#[test]
fn zero_amount_is_identity() {
    let p = dot();
    assert_eq!(morph_signed(&p, 0.0, MorphShape::Diamond, RowExec::SERIAL), p);
    assert_eq!(despeckle(&p, 0.0, SpeckleOrder::OpenClose, RowExec::SERIAL), p);
}

#[test]
fn despeckle_removes_isolated_dot_and_fills_pinhole() {
    let order = SpeckleOrder::OpenClose;
    assert_eq!(
        opaque_count(&despeckle(&dot(), 1.0, order, RowExec::SERIAL)),
        0
    );

    let mut data = vec![1.0; 81];
    data[4 * 9 + 4] = 0.0;
    let hole = MattePlane::from_vec(9, 9, data);
    assert_eq!(opaque_count(&despeckle(&hole, 1.0, order, RowExec::SERIAL)), 81);
}

#[test]
fn close_open_mirrors_open_close_on_the_complement() {
    let m = MattePlane::generate(12, 12, RowExec::SERIAL, |y, row| {
        for (x, v) in row.iter_mut().enumerate() {
            *v = if (x + 2 * y) % 7 < 3 || x == 6 { 1.0 } else { 0.0 };
        }
    });
    let inv = MattePlane::from_vec(12, 12, m.data().iter().map(|v| 1.0 - v).collect());
    let plain = despeckle(&m, 1.0, SpeckleOrder::OpenClose, RowExec::SERIAL);
    let mirrored = despeckle(&inv, 1.0, SpeckleOrder::CloseOpen, RowExec::SERIAL);
    for (a, b) in plain.data().iter().zip(mirrored.data()) {
        assert_eq!(a + b, 1.0);
    }
    let same_order = despeckle(&inv, 1.0, SpeckleOrder::OpenClose, RowExec::SERIAL);
    assert_ne!(same_order, mirrored);
}
