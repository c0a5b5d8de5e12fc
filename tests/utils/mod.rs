#![allow(dead_code)]

use cm1_sounding::MemorySource;
use ndarray::{ArrayD, IxDyn};
use std::path::Path;

pub const PRESSURE: [f64; 3] = [100_000.0, 90_000.0, 80_000.0];
pub const THETA: [f64; 3] = [300.0, 305.0, 310.0];
pub const QV: [f64; 3] = [0.01, 0.008, 0.006];
pub const U: [f64; 3] = [5.0, 6.0, 7.0];
pub const V: [f64; 3] = [0.0, 0.0, 0.0];
pub const UINTERP: [f64; 3] = [-3.0, 0.0, 3.0];
pub const VINTERP: [f64; 3] = [-4.0, -4.0, -4.0];
pub const Z: [f64; 3] = [0.0, 1.0, 2.0];

/// The three level column from the documented example run, at a single grid point.
pub fn three_level_source() -> MemorySource {
    MemorySource::new()
        .with_column_variable("prs", PRESSURE.to_vec())
        .with_column_variable("th", THETA.to_vec())
        .with_column_variable("qv", QV.to_vec())
        .with_column_variable("u", U.to_vec())
        .with_column_variable("v", V.to_vec())
        .with_column_variable("uinterp", UINTERP.to_vec())
        .with_column_variable("vinterp", VINTERP.to_vec())
        .with_coordinate("z", Z.to_vec())
}

/// Pressure offset (Pa) applied to the column at `ix` in `grid_source`.
pub fn grid_offset(t: usize, y: usize, x: usize) -> f64 {
    (t * 100 + y * 20 + x * 10) as f64
}

/// A (time, level, y, x) = (2, 3, 2, 3) grid where every column has a different pressure.
pub fn grid_source() -> MemorySource {
    let shape = vec![2, 3, 2, 3];
    let field = |vals: [f64; 3]| ArrayD::from_shape_fn(shape.clone(), |ix: IxDyn| vals[ix[1]]);

    let prs = ArrayD::from_shape_fn(shape.clone(), |ix: IxDyn| {
        PRESSURE[ix[1]] - grid_offset(ix[0], ix[2], ix[3])
    });

    MemorySource::new()
        .with_array("prs", prs)
        .with_array("th", field(THETA))
        .with_array("qv", field(QV))
        .with_array("u", field(U))
        .with_array("v", field(V))
        .with_coordinate("z", Z.to_vec())
}

/// Read a sounding file and return its data rows split into columns.
pub fn read_rows(path: &Path) -> Vec<Vec<f64>> {
    let text = std::fs::read_to_string(path).expect("error reading sounding");

    text.lines()
        .skip_while(|line| *line != "%RAW%")
        .skip(1)
        .take_while(|line| *line != "%END%")
        .map(|line| {
            line.split(", ")
                .map(|val| val.trim().parse::<f64>().expect("bad value in row"))
                .collect()
        })
        .collect()
}

pub fn approx_equal(val1: f64, val2: f64, eps: f64) -> bool {
    assert!(eps > 0.0);

    (val1 - val2).abs() < eps
}
