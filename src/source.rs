//! Sources of gridded model fields.
//!
//! A [`FieldSource`] is anything that can hand back a vertical column of a named 4-D
//! (time, level, y, x) variable, or an entire 1-D variable. The file backed implementation
//! reads CM1 netCDF output, the in-memory implementation is useful for tests or when the
//! arrays already live in memory.

use crate::{config::GridIndex, error::Result};

mod memory;
mod netcdf_source;

pub use self::{memory::MemorySource, netcdf_source::NetCdfSource};

/// The minimal capability needed to build a sounding.
pub trait FieldSource {
    /// Read the vertical profile of a (time, level, y, x) variable at `index`.
    ///
    /// Fails with `MissingVariable` if there is no such variable and with `IndexOutOfRange`
    /// if the variable does not have four dimensions or `index` lies outside them.
    fn read_variable(&self, name: &str, index: GridIndex) -> Result<Vec<f64>>;

    /// Read every value of a one dimensional variable.
    fn read_coordinate(&self, name: &str) -> Result<Vec<f64>>;
}

impl<'a, S: FieldSource + ?Sized> FieldSource for &'a S {
    fn read_variable(&self, name: &str, index: GridIndex) -> Result<Vec<f64>> {
        (**self).read_variable(name, index)
    }

    fn read_coordinate(&self, name: &str) -> Result<Vec<f64>> {
        (**self).read_coordinate(name)
    }
}

/// Check a 4-D shape against an index, shared by the implementations.
pub(crate) fn check_column_index(name: &str, shape: &[usize], index: GridIndex) -> Result<()> {
    use crate::error::SoundingError;

    if shape.len() != 4 {
        return Err(SoundingError::index_out_of_range(
            name,
            format!(
                "expected 4 dimensions (time, level, y, x), found {}",
                shape.len()
            ),
        ));
    }

    let checks = [("t", index.t, shape[0]), ("y", index.y, shape[2]), ("x", index.x, shape[3])];
    for &(axis, idx, len) in checks.iter() {
        if idx >= len {
            return Err(SoundingError::index_out_of_range(
                name,
                format!("{} = {} but the dimension has size {}", axis, idx, len),
            ));
        }
    }

    Ok(())
}
