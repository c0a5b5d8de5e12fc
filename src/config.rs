//! The options for a single run of the tool.

use crate::error::{Result, SoundingError};
use chrono::NaiveDateTime;
use metfor::MetersPSec;
use std::{convert::TryFrom, path::PathBuf};
use strum_macros::{Display, EnumIter, EnumString};

/// Which pair of wind component variables to read from the model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum WindSource {
    /// The staggered `u` and `v` variables.
    #[strum(serialize = "native")]
    Native,
    /// The `uinterp` and `vinterp` variables, interpolated to scalar points.
    #[strum(serialize = "interpolated")]
    Interpolated,
}

impl WindSource {
    /// Names of the (u, v) variables in the model output.
    pub fn variable_names(self) -> (&'static str, &'static str) {
        match self {
            WindSource::Native => ("u", "v"),
            WindSource::Interpolated => ("uinterp", "vinterp"),
        }
    }

    /// The value of the `-windinterp` flag that selects this source.
    pub fn flag_value(self) -> i64 {
        match self {
            WindSource::Native => 0,
            WindSource::Interpolated => 1,
        }
    }
}

impl Default for WindSource {
    fn default() -> Self {
        WindSource::Native
    }
}

impl TryFrom<i64> for WindSource {
    type Error = SoundingError;

    fn try_from(val: i64) -> Result<Self> {
        match val {
            0 => Ok(WindSource::Native),
            1 => Ok(WindSource::Interpolated),
            _ => Err(SoundingError::Argument(format!(
                "windinterp must be 0 or 1, got {}",
                val
            ))),
        }
    }
}

/// Units the raw `qv` values are stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
pub enum MixingRatioUnits {
    /// Grams of vapor per kilogram of dry air.
    #[strum(serialize = "gkg")]
    GramsPerKilogram,
    /// Kilograms of vapor per kilogram of dry air.
    #[strum(serialize = "kgkg")]
    KilogramsPerKilogram,
}

impl MixingRatioUnits {
    /// Convert a raw value in these units to kg/kg.
    #[inline]
    pub fn to_kg_per_kg(self, val: f64) -> f64 {
        match self {
            MixingRatioUnits::GramsPerKilogram => val / 1000.0,
            MixingRatioUnits::KilogramsPerKilogram => val,
        }
    }
}

impl Default for MixingRatioUnits {
    fn default() -> Self {
        MixingRatioUnits::GramsPerKilogram
    }
}

/// Everything needed for one run, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationConfig {
    /// The CM1 netCDF output file.
    pub input: PathBuf,
    /// Where to write the sounding.
    pub output: PathBuf,
    /// Horizontal index along the x axis.
    pub x: f64,
    /// Horizontal index along the y axis.
    pub y: f64,
    /// Time index.
    pub t: f64,
    /// Eastward domain translation speed, added to the raw u component.
    pub u_offset: MetersPSec,
    /// Northward domain translation speed, added to the raw v component.
    pub v_offset: MetersPSec,
    /// Which wind variables to read.
    pub wind_source: WindSource,
    /// Units of the raw mixing ratio.
    pub qv_units: MixingRatioUnits,
    /// Valid time for the header, `None` keeps the `010101/0000` placeholder.
    pub valid_time: Option<NaiveDateTime>,
}

impl InvocationConfig {
    /// Create a configuration with all options at their defaults.
    pub fn new<P, Q>(input: P, output: Q) -> Self
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        InvocationConfig {
            input: input.into(),
            output: output.into(),
            x: 0.0,
            y: 0.0,
            t: 0.0,
            u_offset: MetersPSec(0.0),
            v_offset: MetersPSec(0.0),
            wind_source: WindSource::default(),
            qv_units: MixingRatioUnits::default(),
            valid_time: None,
        }
    }

    /// Builder method for the grid location.
    pub fn with_location(self, x: f64, y: f64, t: f64) -> Self {
        Self { x, y, t, ..self }
    }

    /// Builder method for the domain translation speed.
    pub fn with_translation(self, u: MetersPSec, v: MetersPSec) -> Self {
        Self {
            u_offset: u,
            v_offset: v,
            ..self
        }
    }

    /// Builder method for the wind source.
    pub fn with_wind_source(self, wind_source: WindSource) -> Self {
        Self {
            wind_source,
            ..self
        }
    }

    /// Builder method for the mixing ratio units.
    pub fn with_qv_units(self, qv_units: MixingRatioUnits) -> Self {
        Self { qv_units, ..self }
    }

    /// Builder method for the header valid time.
    pub fn with_valid_time<T>(self, valid_time: T) -> Self
    where
        Option<NaiveDateTime>: From<T>,
    {
        Self {
            valid_time: Option::from(valid_time),
            ..self
        }
    }

    /// The requested location as array indexes.
    pub fn grid_index(&self) -> Result<GridIndex> {
        GridIndex::from_coords(self.t, self.y, self.x)
    }
}

/// A validated (time, y, x) location in the model grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridIndex {
    /// Time index.
    pub t: usize,
    /// Index along the y axis.
    pub y: usize,
    /// Index along the x axis.
    pub x: usize,
}

impl GridIndex {
    /// Create an index from integer components.
    pub fn new(t: usize, y: usize, x: usize) -> Self {
        GridIndex { t, y, x }
    }

    /// Convert floating point coordinates to indexes, truncating toward zero.
    ///
    /// Negative and non-finite values are out of range, they never wrap around.
    pub fn from_coords(t: f64, y: f64, x: f64) -> Result<Self> {
        Ok(GridIndex {
            t: coord_to_index("t", t)?,
            y: coord_to_index("y", y)?,
            x: coord_to_index("x", x)?,
        })
    }
}

fn coord_to_index(axis: &str, val: f64) -> Result<usize> {
    if !val.is_finite() || val <= -1.0 || val.trunc() > usize::MAX as f64 {
        return Err(SoundingError::index_out_of_range(
            "grid",
            format!("{} = {} is not a valid index", axis, val),
        ));
    }

    Ok(val.trunc() as usize)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_wind_source_flag_round_trip() {
        for source in WindSource::iter() {
            assert_eq!(WindSource::try_from(source.flag_value()).unwrap(), source);
        }

        assert!(WindSource::try_from(2).is_err());
        assert!(WindSource::try_from(-1).is_err());
    }

    #[test]
    fn test_wind_source_variables() {
        assert_eq!(WindSource::Native.variable_names(), ("u", "v"));
        assert_eq!(
            WindSource::Interpolated.variable_names(),
            ("uinterp", "vinterp")
        );
    }

    #[test]
    fn test_mixing_ratio_units() {
        assert_eq!(
            MixingRatioUnits::from_str("gkg").unwrap(),
            MixingRatioUnits::GramsPerKilogram
        );
        assert_eq!(
            MixingRatioUnits::from_str("kgkg").unwrap(),
            MixingRatioUnits::KilogramsPerKilogram
        );
        assert!(MixingRatioUnits::from_str("ppm").is_err());

        assert_eq!(MixingRatioUnits::GramsPerKilogram.to_kg_per_kg(10.0), 0.01);
        assert_eq!(MixingRatioUnits::KilogramsPerKilogram.to_kg_per_kg(0.01), 0.01);
    }

    #[test]
    fn test_grid_index_truncates() {
        assert_eq!(
            GridIndex::from_coords(52.9, 1.5, 0.0).unwrap(),
            GridIndex::new(52, 1, 0)
        );
        // Truncation toward zero, like int() on a float.
        assert_eq!(
            GridIndex::from_coords(-0.5, 0.0, 0.0).unwrap(),
            GridIndex::new(0, 0, 0)
        );
    }

    #[test]
    fn test_grid_index_rejects_negative_and_non_finite() {
        for &bad in &[-1.0, -3.0, std::f64::NAN, std::f64::INFINITY] {
            match GridIndex::from_coords(bad, 0.0, 0.0) {
                Err(SoundingError::IndexOutOfRange { .. }) => {}
                other => panic!("expected IndexOutOfRange, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_builder() {
        let cfg = InvocationConfig::new("in.nc", "out.snd")
            .with_location(3.0, 4.0, 5.0)
            .with_translation(MetersPSec(12.4), MetersPSec(1.9))
            .with_wind_source(WindSource::Interpolated);

        assert_eq!(cfg.grid_index().unwrap(), GridIndex::new(5, 4, 3));
        assert_eq!(cfg.u_offset, MetersPSec(12.4));
        assert_eq!(cfg.v_offset, MetersPSec(1.9));
        assert_eq!(cfg.wind_source, WindSource::Interpolated);
        assert_eq!(cfg.qv_units, MixingRatioUnits::GramsPerKilogram);
        assert!(cfg.valid_time.is_none());
    }
}
