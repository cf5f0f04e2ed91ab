//! PixelGrid regression test
//!
//! Tests creation, pixel access, ownership transitions and comparison.

use upscale_core::{Error, PixelGrid, PixelGridMut, Rgba};
use upscale_test::{RegParams, pattern_grid};

#[test]
fn grid_reg_creation() {
    let mut rp = RegParams::new("grid_creation");

    let grid = PixelGrid::new(640, 480).unwrap();
    rp.compare_values(640.0, grid.width() as f64, 0.0);
    rp.compare_values(480.0, grid.height() as f64, 0.0);
    rp.compare_values((640 * 480) as f64, grid.len() as f64, 0.0);
    rp.compare_values(480.0, grid.rows().len() as f64, 0.0);

    let filled = PixelGrid::new_filled(5, 5, Rgba::WHITE).unwrap();
    rp.check(
        filled.data().iter().all(|&p| Rgba::unpack(p) == Rgba::WHITE),
        "filled grid is white",
    );

    let empty = PixelGrid::new(0, 0).unwrap();
    rp.check(empty.is_empty(), "0x0 grid is empty");

    let bad = PixelGrid::from_raw(3, 3, vec![0; 8]);
    rp.check(
        matches!(bad, Err(Error::DimensionMismatch { .. })),
        "short buffer rejected",
    );

    let huge = PixelGrid::new(u32::MAX, u32::MAX);
    rp.check(
        matches!(huge, Err(Error::AllocationFailed { .. })),
        "impossible allocation reported",
    );

    assert!(rp.cleanup(), "grid creation regression test failed");
}

#[test]
fn grid_reg_ownership() {
    let mut rp = RegParams::new("grid_ownership");

    let grid = pattern_grid(6, 4);
    let shared = grid.clone();
    rp.compare_values(2.0, grid.ref_count() as f64, 0.0);

    // A shared grid cannot be mutated in place
    let grid = match grid.try_into_mut() {
        Ok(_) => panic!("shared grid must not become mutable"),
        Err(g) => g,
    };

    // to_mut copies, leaving the original untouched
    let mut copy = grid.to_mut();
    copy.set_rgba(0, 0, Rgba::new(1, 2, 3, 4)).unwrap();
    let copy: PixelGrid = copy.into();
    rp.check(grid == shared, "original unchanged after to_mut write");
    rp.check(
        copy.get_rgba(0, 0) == Some(Rgba::new(1, 2, 3, 4)),
        "copy holds the written pixel",
    );
    rp.compare_values(1.0, grid.count_diffs(&copy).unwrap() as f64, 0.0);

    drop(shared);
    let mut unique: PixelGridMut = grid.try_into_mut().expect("unique grid");
    for row in unique.rows_mut() {
        row.fill(Rgba::WHITE.pack());
    }
    let unique: PixelGrid = unique.into();
    rp.check(
        unique.get_rgba(5, 3) == Some(Rgba::WHITE),
        "rows_mut writes every row",
    );

    assert!(rp.cleanup(), "grid ownership regression test failed");
}

#[test]
fn grid_reg_access() {
    let mut rp = RegParams::new("grid_access");

    let mut grid = PixelGridMut::new(4, 3).unwrap();
    grid.set_rgba(3, 2, Rgba::new(1, 2, 3, 4)).unwrap();
    rp.check(
        grid.set_pixel(4, 0, 0).is_err(),
        "write past right edge rejected",
    );
    rp.check(
        grid.set_pixel(0, 3, 0).is_err(),
        "write past bottom edge rejected",
    );
    let grid: PixelGrid = grid.into();

    rp.check(
        grid.get_rgba(3, 2) == Some(Rgba::new(1, 2, 3, 4)),
        "pixel read back",
    );
    rp.check(grid.row(2)[3] == Rgba::new(1, 2, 3, 4).pack(), "row view");
    rp.check(grid.get_pixel(4, 2).is_none(), "read past edge is None");

    let bytes = grid.to_rgba_bytes();
    rp.compare_values(48.0, bytes.len() as f64, 0.0);
    let back = PixelGrid::from_rgba_bytes(4, 3, &bytes).unwrap();
    rp.compare_grid(&grid, &back);

    assert!(rp.cleanup(), "grid access regression test failed");
}
