//! Create the sounding profiles from raw model columns.
//!
//! Every function here is pure. Values that are physically undefined, such as a dew point for
//! a level with no vapor, are errors rather than missing values because SHARPpy has no way to
//! represent them.

use crate::{
    config::MixingRatioUnits,
    error::{Result, SoundingError},
    extract::RawFieldSet,
    met_formulas,
    sounding::Sounding,
};
use itertools::izip;
use metfor::{Celsius, HectoPascal, Kelvin, Knots, Meters, MetersPSec, Quantity, WindSpdDir};

/// Pascals to hectopascals (millibars).
pub fn pressure(pressure_pa: &[f64]) -> Vec<HectoPascal> {
    pressure_pa.iter().map(|&p| HectoPascal(p / 100.0)).collect()
}

/// Kilometers to meters.
pub fn height(height_km: &[f64]) -> Vec<Meters> {
    height_km.iter().map(|&z| Meters(z * 1000.0)).collect()
}

/// Temperature from pressure and potential temperature.
pub fn temperature(pressure: &[HectoPascal], theta: &[Kelvin]) -> Result<Vec<Celsius>> {
    izip!(pressure, theta)
        .enumerate()
        .map(|(level, (&p, &theta))| {
            if !(p.unpack() > 0.0) {
                return Err(domain_error(level, "temperature", format!("pressure is {:?}", p)));
            }

            let t = Celsius::from(metfor::temperature_from_pot_temp(theta, p));
            check_finite(level, "temperature", t)
        })
        .collect()
}

/// Dew point from pressure and the mixing ratio given in `units`.
pub fn dew_point(
    pressure: &[HectoPascal],
    mixing_ratio: &[f64],
    units: MixingRatioUnits,
) -> Result<Vec<Celsius>> {
    izip!(pressure, mixing_ratio)
        .enumerate()
        .map(|(level, (&p, &mw))| {
            let mw = units.to_kg_per_kg(mw);

            let e = met_formulas::vapor_pressure(p, mw).ok_or_else(|| {
                domain_error(
                    level,
                    "vapor pressure",
                    format!("pressure {:?} and mixing ratio {} kg/kg", p, mw),
                )
            })?;

            let dp = met_formulas::dew_point_from_vapor_pressure(e).ok_or_else(|| {
                domain_error(level, "dew point", format!("vapor pressure is {:?}", e))
            })?;

            check_finite(level, "dew point", dp)
        })
        .collect()
}

/// Wind speed in knots and direction from the u and v components.
pub fn wind(u: &[MetersPSec], v: &[MetersPSec]) -> Result<Vec<WindSpdDir<Knots>>> {
    izip!(u, v)
        .enumerate()
        .map(|(level, (&u, &v))| {
            if !(u.unpack().is_finite() && v.unpack().is_finite()) {
                return Err(domain_error(
                    level,
                    "wind",
                    format!("components are {:?}, {:?}", u, v),
                ));
            }

            Ok(met_formulas::wind_spd_dir(u, v))
        })
        .collect()
}

/// Build a complete sounding from the raw model columns.
///
/// The location and valid time are left at their defaults, see `Sounding::with_location`.
pub fn derive_sounding(raw: &RawFieldSet, units: MixingRatioUnits) -> Result<Sounding> {
    raw.check_aligned()?;

    let pres = pressure(&raw.pressure);
    let temp = temperature(&pres, &raw.theta)?;
    let dp = dew_point(&pres, &raw.mixing_ratio, units)?;
    let wnd = wind(&raw.u, &raw.v)?;
    let hgt = height(&raw.height);

    let snd = Sounding::new()
        .with_pressure_profile(pres)
        .with_height_profile(hgt)
        .with_temperature_profile(temp)
        .with_dew_point_profile(dp)
        .with_wind_profile(wnd);
    snd.validate()?;

    Ok(snd)
}

fn domain_error(level: usize, quantity: &'static str, reason: String) -> SoundingError {
    SoundingError::NumericDomain {
        level,
        quantity,
        reason,
    }
}

fn check_finite<Q: Quantity>(level: usize, quantity: &'static str, val: Q) -> Result<Q> {
    if val.unpack().is_finite() {
        Ok(val)
    } else {
        Err(domain_error(level, quantity, "result is not finite".to_owned()))
    }
}
