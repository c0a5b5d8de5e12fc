use cm1_sounding::RawFieldSet;
use metfor::{Kelvin, MetersPSec};

/// A column shaped like a typical CM1 run, 40 levels every 500 m.
pub fn synthetic_column() -> RawFieldSet {
    const NZ: usize = 40;

    let height: Vec<f64> = (0..NZ).map(|k| 0.25 + 0.5 * k as f64).collect();
    let pressure = height
        .iter()
        .map(|z| 100_000.0 * (-z / 8.0).exp())
        .collect();
    let theta = height.iter().map(|z| Kelvin(300.0 + 3.5 * z)).collect();
    let mixing_ratio = height.iter().map(|z| 14.0 * (-z / 2.5).exp() + 0.001).collect();
    let u = height.iter().map(|z| MetersPSec(2.0 * z - 5.0)).collect();
    let v = height.iter().map(|z| MetersPSec(10.0 - z)).collect();

    RawFieldSet {
        pressure,
        theta,
        mixing_ratio,
        u,
        v,
        height,
    }
}
