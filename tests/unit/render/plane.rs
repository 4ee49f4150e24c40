use super::*;

#[test]
fn get_clamps_to_edges() {
    let p = MattePlane::from_vec(2, 2, vec![0.1, 0.2, 0.3, 0.4]);
    assert_eq!(p.get(-5, -5), 0.1);
    assert_eq!(p.get(9, 0), 0.2);
    assert_eq!(p.get(0, 9), 0.3);
    assert_eq!(p.get(1, 1), 0.4);
}

#[test]
fn serial_and_parallel_rows_agree() {
    let build = |exec| {
        MattePlane::generate(7, 5, exec, |y, row| {
            for (x, v) in row.iter_mut().enumerate() {
                *v = (x * 10 + y) as f32;
            }
        })
    };
    assert_eq!(build(RowExec::SERIAL), build(RowExec::PARALLEL));
}

#[test]
fn lerp_endpoints() {
    let a = MattePlane::new(3, 1, 0.0);
    let b = MattePlane::new(3, 1, 1.0);
    assert_eq!(a.lerp(&b, 0.0, RowExec::SERIAL), a);
    assert_eq!(a.lerp(&b, 1.0, RowExec::SERIAL), b);
}
