use super::{check_column_index, FieldSource};
use crate::{
    config::GridIndex,
    error::{Result, SoundingError},
};
use ndarray::{Array1, ArrayD, Axis};
use std::collections::HashMap;

/// Named arrays held in memory.
///
/// # Examples
///
/// ```rust
/// use cm1_sounding::{FieldSource, GridIndex, MemorySource};
///
/// let src = MemorySource::new()
///     .with_column_variable("th", vec![300.0, 305.0, 310.0])
///     .with_coordinate("z", vec![0.0, 1.0, 2.0]);
///
/// let th = src.read_variable("th", GridIndex::new(0, 0, 0)).unwrap();
/// assert_eq!(th, vec![300.0, 305.0, 310.0]);
/// assert!(src.read_variable("th", GridIndex::new(1, 0, 0)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    vars: HashMap<String, ArrayD<f64>>,
}

impl MemorySource {
    /// Create an empty source.
    #[inline]
    pub fn new() -> Self {
        MemorySource::default()
    }

    /// Add an array of any dimensionality.
    pub fn with_array<S: Into<String>>(mut self, name: S, arr: ArrayD<f64>) -> Self {
        self.vars.insert(name.into(), arr);
        self
    }

    /// Add a (time, level, y, x) variable with a single time and horizontal point.
    pub fn with_column_variable<S: Into<String>>(self, name: S, column: Vec<f64>) -> Self {
        let nz = column.len();
        let arr = ArrayD::from_shape_fn(vec![1, nz, 1, 1], |ix| column[ix[1]]);
        self.with_array(name, arr)
    }

    /// Add a one dimensional variable.
    pub fn with_coordinate<S: Into<String>>(self, name: S, values: Vec<f64>) -> Self {
        self.with_array(name, Array1::from(values).into_dyn())
    }

    fn get(&self, name: &str) -> Result<&ArrayD<f64>> {
        self.vars
            .get(name)
            .ok_or_else(|| SoundingError::MissingVariable(name.to_owned()))
    }
}

impl FieldSource for MemorySource {
    fn read_variable(&self, name: &str, index: GridIndex) -> Result<Vec<f64>> {
        let arr = self.get(name)?;
        check_column_index(name, arr.shape(), index)?;

        // (t, z, y, x) -> (z, y, x) -> (z, x) -> (z)
        let column = arr
            .index_axis(Axis(0), index.t)
            .index_axis_move(Axis(1), index.y)
            .index_axis_move(Axis(1), index.x);

        Ok(column.iter().cloned().collect())
    }

    fn read_coordinate(&self, name: &str) -> Result<Vec<f64>> {
        let arr = self.get(name)?;
        if arr.ndim() != 1 {
            return Err(SoundingError::index_out_of_range(
                name,
                format!("expected 1 dimension, found {}", arr.ndim()),
            ));
        }

        Ok(arr.iter().cloned().collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn grid() -> MemorySource {
        // Two times, three levels, two rows, two columns. Value encodes its own index.
        let arr = ArrayD::from_shape_fn(vec![2, 3, 2, 2], |ix| {
            (ix[0] * 1000 + ix[1] * 100 + ix[2] * 10 + ix[3]) as f64
        });
        MemorySource::new().with_array("prs", arr)
    }

    #[test]
    fn test_read_variable_picks_the_column() {
        let src = grid();

        let col = src.read_variable("prs", GridIndex::new(1, 0, 1)).unwrap();
        assert_eq!(col, vec![1001.0, 1101.0, 1201.0]);

        let col = src.read_variable("prs", GridIndex::new(0, 1, 0)).unwrap();
        assert_eq!(col, vec![10.0, 110.0, 210.0]);
    }

    #[test]
    fn test_read_variable_errors() {
        let src = grid();

        match src.read_variable("th", GridIndex::new(0, 0, 0)) {
            Err(SoundingError::MissingVariable(name)) => assert_eq!(name, "th"),
            other => panic!("expected MissingVariable, got {:?}", other),
        }

        match src.read_variable("prs", GridIndex::new(2, 0, 0)) {
            Err(SoundingError::IndexOutOfRange { .. }) => {}
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_read_coordinate() {
        let src = grid().with_coordinate("z", vec![0.0, 0.5, 1.0]);

        assert_eq!(src.read_coordinate("z").unwrap(), vec![0.0, 0.5, 1.0]);
        assert!(src.read_coordinate("prs").is_err());
        assert!(src.read_coordinate("zh").is_err());
    }
}
