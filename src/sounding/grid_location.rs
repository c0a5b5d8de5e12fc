/// The model grid location a sounding was taken from, as given on the command line.
///
/// The values are kept as floats because they are echoed into the sounding header exactly as
/// they were requested.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridLocation {
    x: f64,
    y: f64,
    t: f64,
}

impl GridLocation {
    /// Create a new `GridLocation`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cm1_sounding::GridLocation;
    ///
    /// let loc = GridLocation::new(10.0, 20.0, 52.7);
    /// assert_eq!(loc.x(), 10.0);
    /// assert_eq!(loc.y(), 20.0);
    /// assert_eq!(loc.time_index(), 52);
    /// ```
    #[inline]
    pub fn new(x: f64, y: f64, t: f64) -> Self {
        GridLocation { x, y, t }
    }

    /// Position along the x axis.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Position along the y axis.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Time, as requested.
    #[inline]
    pub fn t(&self) -> f64 {
        self.t
    }

    /// The time truncated toward zero, as shown in the header.
    #[inline]
    pub fn time_index(&self) -> i64 {
        self.t.trunc() as i64
    }
}
