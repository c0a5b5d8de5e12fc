//! Meteorological formulas not covered by `metfor`, or where the SHARPpy output needs a
//! specific formulation.

use metfor::{Celsius, HectoPascal, Knots, MetersPSec, Quantity, WindSpdDir};

/// Ratio of the molecular weight of water to that of dry air.
pub const EPSILON: f64 = 0.621_956_9;

/// Knots per meter per second, as used by SHARPpy.
pub const MPS_TO_KNOTS: f64 = 1.943_84;

/// Vapor pressure from the pressure and mixing ratio.
///
/// `mw` is in kg/kg. Returns `None` if the pressure is not positive or the mixing ratio is
/// negative.
pub fn vapor_pressure(pressure: HectoPascal, mw: f64) -> Option<HectoPascal> {
    let p = pressure.unpack();
    if !(p > 0.0) || !(mw >= 0.0) {
        return None;
    }

    Some(HectoPascal(p * mw / (EPSILON + mw)))
}

/// Dew point from the vapor pressure using the Bolton (1980) form of the Magnus formula.
///
/// Returns `None` if the vapor pressure is not positive.
pub fn dew_point_from_vapor_pressure(vapor_pressure: HectoPascal) -> Option<Celsius> {
    let e = vapor_pressure.unpack();
    if !(e > 0.0) {
        return None;
    }

    let val = (e / 6.112).ln();
    Some(Celsius(243.5 * val / (17.67 - val)))
}

/// The direction the wind is blowing from in degrees.
///
/// North is 360, not 0; a calm wind has a direction of 0.
pub fn wind_direction(u: MetersPSec, v: MetersPSec) -> f64 {
    let (u, v) = (u.unpack(), v.unpack());
    if u == 0.0 && v == 0.0 {
        return 0.0;
    }

    let dir = 90.0 - (-v).atan2(-u).to_degrees();
    if dir <= 0.0 {
        dir + 360.0
    } else {
        dir
    }
}

/// Wind speed in knots.
pub fn wind_speed(u: MetersPSec, v: MetersPSec) -> Knots {
    Knots(u.unpack().hypot(v.unpack()) * MPS_TO_KNOTS)
}

/// Convert u-v components to a speed and direction.
pub fn wind_spd_dir(u: MetersPSec, v: MetersPSec) -> WindSpdDir<Knots> {
    WindSpdDir {
        speed: wind_speed(u, v),
        direction: wind_direction(u, v),
    }
}
