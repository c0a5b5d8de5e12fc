//! Pull the raw model columns needed for a sounding out of a [`FieldSource`].

use crate::{
    config::{GridIndex, InvocationConfig},
    error::{Result, SoundingError},
    source::FieldSource,
};
use log::debug;
use metfor::{Kelvin, MetersPSec, Quantity};

/// Model pressure, Pa.
pub const PRESSURE_VAR: &str = "prs";
/// Model potential temperature, K.
pub const THETA_VAR: &str = "th";
/// Model water vapor mixing ratio.
pub const MIXING_RATIO_VAR: &str = "qv";
/// Model height coordinate of the scalar levels, km.
pub const HEIGHT_VAR: &str = "z";

/// The raw columns at one time and location, aligned by vertical level.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFieldSet {
    /// Pressure in Pa.
    pub pressure: Vec<f64>,
    /// Potential temperature.
    pub theta: Vec<Kelvin>,
    /// Water vapor mixing ratio as stored in the file, see `MixingRatioUnits`.
    pub mixing_ratio: Vec<f64>,
    /// Ground relative u component.
    pub u: Vec<MetersPSec>,
    /// Ground relative v component.
    pub v: Vec<MetersPSec>,
    /// Height of each level in km.
    pub height: Vec<f64>,
}

impl RawFieldSet {
    /// The number of vertical levels.
    #[inline]
    pub fn num_levels(&self) -> usize {
        self.pressure.len()
    }

    /// Verify every column has the same number of levels as the pressure column.
    pub fn check_aligned(&self) -> Result<()> {
        let expected = self.pressure.len();
        let lens = [
            ("theta", self.theta.len()),
            ("mixing ratio", self.mixing_ratio.len()),
            ("u wind", self.u.len()),
            ("v wind", self.v.len()),
            ("height", self.height.len()),
        ];

        match lens.iter().find(|&&(_, len)| len != expected) {
            Some(&(name, found)) => Err(SoundingError::MismatchedProfiles {
                name,
                expected,
                found,
            }),
            None => Ok(()),
        }
    }
}

/// Read every column needed for a sounding at `index`.
///
/// The wind pair is chosen by `config.wind_source` and the domain translation speeds in
/// `config` are added so the winds are ground relative.
///
/// # Examples
///
/// ```rust
/// use cm1_sounding::{extract_profile, GridIndex, InvocationConfig, MemorySource};
/// use metfor::MetersPSec;
///
/// let src = MemorySource::new()
///     .with_column_variable("prs", vec![100_000.0, 90_000.0])
///     .with_column_variable("th", vec![300.0, 305.0])
///     .with_column_variable("qv", vec![10.0, 8.0])
///     .with_column_variable("u", vec![5.0, 6.0])
///     .with_column_variable("v", vec![0.0, 0.0])
///     .with_coordinate("z", vec![0.0, 1.0]);
///
/// let cfg = InvocationConfig::new("in.nc", "out.snd")
///     .with_translation(MetersPSec(1.0), MetersPSec(-1.0));
///
/// let raw = extract_profile(&src, GridIndex::new(0, 0, 0), &cfg).unwrap();
/// assert_eq!(raw.u, vec![MetersPSec(6.0), MetersPSec(7.0)]);
/// assert_eq!(raw.v, vec![MetersPSec(-1.0), MetersPSec(-1.0)]);
/// ```
pub fn extract_profile<S>(source: &S, index: GridIndex, config: &InvocationConfig) -> Result<RawFieldSet>
where
    S: FieldSource + ?Sized,
{
    let pressure = source.read_variable(PRESSURE_VAR, index)?;
    let theta = source
        .read_variable(THETA_VAR, index)?
        .into_iter()
        .map(Kelvin)
        .collect();
    let mixing_ratio = source.read_variable(MIXING_RATIO_VAR, index)?;

    let (u_name, v_name) = config.wind_source.variable_names();
    debug!("using {} winds ({}, {})", config.wind_source, u_name, v_name);
    let u = translate(source.read_variable(u_name, index)?, config.u_offset);
    let v = translate(source.read_variable(v_name, index)?, config.v_offset);

    let height = source.read_coordinate(HEIGHT_VAR)?;

    let raw = RawFieldSet {
        pressure,
        theta,
        mixing_ratio,
        u,
        v,
        height,
    };
    raw.check_aligned()?;

    Ok(raw)
}

fn translate(component: Vec<f64>, offset: MetersPSec) -> Vec<MetersPSec> {
    component
        .into_iter()
        .map(|val| MetersPSec(val + offset.unpack()))
        .collect()
}
