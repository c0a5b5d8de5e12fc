//! Data type and methods to store a model sounding.

use crate::error::{Result, SoundingError};
use chrono::NaiveDateTime;
use metfor::{Celsius, HectoPascal, Knots, Meters, WindSpdDir};

pub use self::{data_row::DataRow, grid_location::GridLocation};

/// All the variables written to a SHARPpy sounding.
///
/// The profiles are stored in parallel vectors ordered from the lowest model level up. Element
/// `i` of every profile describes the same level, see [`Sounding::validate`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sounding {
    // Description of the source of the sounding.
    source: Option<String>,

    // Where in the model grid the sounding was taken.
    location: GridLocation,

    // Valid time of sounding
    valid_time: Option<NaiveDateTime>,

    // Profiles
    pressure: Vec<HectoPascal>,
    height: Vec<Meters>,
    temperature: Vec<Celsius>,
    dew_point: Vec<Celsius>,
    wind: Vec<WindSpdDir<Knots>>,
}

macro_rules! make_profile_setter {
    ($(#[$attr:meta])* => $name:tt, $inner_type:ty, $p_var:ident) => {
        $(#[$attr])*
        pub fn $name(self, profile: Vec<$inner_type>) -> Self {
            Self {$p_var: profile, ..self}
        }
    };
}

impl Sounding {
    /// Create a new sounding with default values. This is a proxy for default with a clearer name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cm1_sounding::Sounding;
    ///
    /// let snd = Sounding::new();
    /// assert_eq!(snd.num_levels(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Sounding::default()
    }

    /// Add a source description to this sounding.
    #[inline]
    pub fn with_source_description<S>(mut self, desc: S) -> Self
    where
        Option<String>: From<S>,
    {
        self.source = Option::from(desc);
        self
    }

    /// Retrieve a source description for this sounding.
    #[inline]
    pub fn source_description(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Builder function for setting the grid location.
    #[inline]
    pub fn with_location(mut self, location: GridLocation) -> Self {
        self.location = location;
        self
    }

    /// Get the grid location.
    #[inline]
    pub fn location(&self) -> &GridLocation {
        &self.location
    }

    /// Builder method for the valid time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cm1_sounding::Sounding;
    /// use chrono::NaiveDate;
    ///
    /// let vt = NaiveDate::from_ymd_opt(2011, 5, 24)
    ///     .and_then(|d| d.and_hms_opt(20, 30, 0))
    ///     .unwrap();
    /// let snd = Sounding::new().with_valid_time(vt);
    /// assert_eq!(snd.valid_time(), Some(vt));
    ///
    /// let snd = snd.with_valid_time(None);
    /// assert!(snd.valid_time().is_none());
    /// ```
    #[inline]
    pub fn with_valid_time<T>(mut self, valid_time: T) -> Self
    where
        Option<NaiveDateTime>: From<T>,
    {
        self.valid_time = Option::from(valid_time);
        self
    }

    /// Get the valid time, if known.
    #[inline]
    pub fn valid_time(&self) -> Option<NaiveDateTime> {
        self.valid_time
    }

    make_profile_setter!(
        /// Builder method for the pressure profile.
        ///
        /// # Examples
        /// ```rust
        /// use cm1_sounding::Sounding;
        /// use metfor::HectoPascal;
        ///
        /// let data = vec![1000.0, 925.0, 850.0, 700.0, 500.0, 300.0];
        /// let pressure_data: Vec<HectoPascal> = data.into_iter().map(HectoPascal).collect();
        ///
        /// let snd = Sounding::new().with_pressure_profile(pressure_data);
        /// assert_eq!(snd.num_levels(), 6);
        /// ```
        #[inline]
        => with_pressure_profile, HectoPascal, pressure
    );

    /// Get the pressure profile.
    #[inline]
    pub fn pressure_profile(&self) -> &[HectoPascal] {
        &self.pressure
    }

    make_profile_setter!(
        /// Builder method for the height profile.
        ///
        /// See `with_pressure_profile` for an example of usage, keeping in mind the units type may
        /// be different.
        #[inline]
        => with_height_profile, Meters, height
    );

    /// Get the height profile.
    #[inline]
    pub fn height_profile(&self) -> &[Meters] {
        &self.height
    }

    make_profile_setter!(
        /// Builder method for the temperature profile.
        ///
        /// See `with_pressure_profile` for an example of usage, keeping in mind the units type may
        /// be different.
        #[inline]
        => with_temperature_profile, Celsius, temperature
    );

    /// Get the temperature profile.
    #[inline]
    pub fn temperature_profile(&self) -> &[Celsius] {
        &self.temperature
    }

    make_profile_setter!(
        /// Builder method for the dew point profile.
        ///
        /// See `with_pressure_profile` for an example of usage, keeping in mind the units type may
        /// be different.
        #[inline]
        => with_dew_point_profile, Celsius, dew_point
    );

    /// Get the dew point profile.
    #[inline]
    pub fn dew_point_profile(&self) -> &[Celsius] {
        &self.dew_point
    }

    make_profile_setter!(
        /// Builder method for the wind profile.
        ///
        /// # Examples
        /// ```rust
        /// use cm1_sounding::Sounding;
        /// use metfor::{Knots, WindSpdDir};
        ///
        /// let wind = vec![
        ///     WindSpdDir{speed: Knots(10.0), direction: 270.0},
        ///     WindSpdDir{speed: Knots(25.0), direction: 280.0},
        /// ];
        /// let _snd = Sounding::new().with_wind_profile(wind);
        /// ```
        #[inline]
        => with_wind_profile, WindSpdDir<Knots>, wind
    );

    /// Get the wind profile.
    #[inline]
    pub fn wind_profile(&self) -> &[WindSpdDir<Knots>] {
        &self.wind
    }

    /// The number of vertical levels, taken from the pressure profile.
    #[inline]
    pub fn num_levels(&self) -> usize {
        self.pressure.len()
    }

    /// Check that every profile has one value per level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cm1_sounding::Sounding;
    /// use metfor::{HectoPascal, Meters};
    ///
    /// let snd = Sounding::new()
    ///     .with_pressure_profile(vec![HectoPascal(1000.0), HectoPascal(900.0)])
    ///     .with_height_profile(vec![Meters(0.0)]);
    ///
    /// assert!(snd.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let expected = self.pressure.len();
        let lens = [
            ("height", self.height.len()),
            ("temperature", self.temperature.len()),
            ("dew point", self.dew_point.len()),
            ("wind", self.wind.len()),
        ];

        for &(name, found) in lens.iter() {
            if found != expected {
                return Err(SoundingError::MismatchedProfiles {
                    name,
                    expected,
                    found,
                });
            }
        }

        Ok(())
    }

    /// Get a row of data values from this sounding, `None` if `idx` is past the top or any
    /// profile is too short.
    #[inline]
    pub fn data_row(&self, idx: usize) -> Option<DataRow> {
        Some(DataRow {
            pressure: *self.pressure.get(idx)?,
            height: *self.height.get(idx)?,
            temperature: *self.temperature.get(idx)?,
            dew_point: *self.dew_point.get(idx)?,
            wind: *self.wind.get(idx)?,
        })
    }

    /// Get a bottom up iterator over the data rows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cm1_sounding::Sounding;
    /// use metfor::{Celsius, HectoPascal, Knots, Meters, WindSpdDir};
    ///
    /// let calm = WindSpdDir{speed: Knots(0.0), direction: 0.0};
    /// let snd = Sounding::new()
    ///     .with_pressure_profile(vec![HectoPascal(1000.0), HectoPascal(900.0)])
    ///     .with_height_profile(vec![Meters(0.0), Meters(1000.0)])
    ///     .with_temperature_profile(vec![Celsius(20.0), Celsius(14.0)])
    ///     .with_dew_point_profile(vec![Celsius(15.0), Celsius(10.0)])
    ///     .with_wind_profile(vec![calm, calm]);
    ///
    /// let mut iter = snd.bottom_up();
    /// assert_eq!(iter.next().unwrap().pressure, HectoPascal(1000.0));
    /// assert_eq!(iter.next().unwrap().height, Meters(1000.0));
    /// assert!(iter.next().is_none());
    /// ```
    #[inline]
    pub fn bottom_up<'a>(&'a self) -> impl Iterator<Item = DataRow> + 'a {
        (0..self.num_levels()).map_while(move |idx| self.data_row(idx))
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_profile() {
        let snd = doctest::make_test_sounding();

        assert!(snd.validate().is_ok());
        assert_eq!(snd.num_levels(), 3);
        assert_eq!(snd.bottom_up().count(), 3);

        let row = snd.data_row(2).unwrap();
        assert_eq!(row.pressure, HectoPascal(800.0));
        assert_eq!(row.height, Meters(2000.0));
        assert!(snd.data_row(3).is_none());
    }

    #[test]
    fn test_validate_reports_short_profile() {
        let snd = doctest::make_test_sounding()
            .with_dew_point_profile(vec![Celsius(0.0), Celsius(0.0)]);

        match snd.validate() {
            Err(SoundingError::MismatchedProfiles {
                name,
                expected,
                found,
            }) => {
                assert_eq!(name, "dew point");
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected MismatchedProfiles, got {:?}", other),
        }

        // Iteration stops at the shortest profile.
        assert_eq!(snd.bottom_up().count(), 2);
    }

    #[test]
    fn test_source_description() {
        let snd = Sounding::new().with_source_description("CM1 run 4".to_owned());
        assert_eq!(snd.source_description(), Some("CM1 run 4"));

        let snd = snd.with_source_description(None);
        assert!(snd.source_description().is_none());
    }
}

mod data_row;
mod grid_location;
