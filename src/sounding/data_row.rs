use metfor::{Celsius, HectoPascal, Knots, Meters, WindSpdDir};

/// A copy of a row of the sounding data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataRow {
    /// Pressure in hPa
    pub pressure: HectoPascal,
    /// Height above the model surface in meters
    pub height: Meters,
    /// Temperature in C
    pub temperature: Celsius,
    /// Dew point in C
    pub dew_point: Celsius,
    /// Wind
    pub wind: WindSpdDir<Knots>,
}
