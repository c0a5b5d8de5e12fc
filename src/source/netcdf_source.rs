use super::{check_column_index, FieldSource};
use crate::{
    config::GridIndex,
    error::{Result, SoundingError},
};
use log::debug;
use std::path::{Path, PathBuf};

/// A CM1 output file opened read-only with the netCDF library.
///
/// The underlying handle is closed when this value is dropped.
pub struct NetCdfSource {
    path: PathBuf,
    file: netcdf::File,
}

impl NetCdfSource {
    /// Open a file, failing with `FileAccess` if it does not exist or is not netCDF.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = netcdf::open(path).map_err(|err| SoundingError::file_access(path, err))?;
        debug!("opened {}", path.display());

        Ok(NetCdfSource {
            path: path.to_path_buf(),
            file,
        })
    }

    /// The path this source was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn variable(&self, name: &str) -> Result<netcdf::Variable<'_>> {
        self.file
            .variable(name)
            .ok_or_else(|| SoundingError::MissingVariable(name.to_owned()))
    }
}

impl FieldSource for NetCdfSource {
    fn read_variable(&self, name: &str, index: GridIndex) -> Result<Vec<f64>> {
        let var = self.variable(name)?;
        let shape: Vec<usize> = var.dimensions().iter().map(|dim| dim.len()).collect();
        check_column_index(name, &shape, index)?;

        let values: Vec<f64> = var.get_values((index.t, .., index.y, index.x))?;
        debug!(
            "read {} levels of '{}' at t={} y={} x={}",
            values.len(),
            name,
            index.t,
            index.y,
            index.x
        );

        Ok(values)
    }

    fn read_coordinate(&self, name: &str) -> Result<Vec<f64>> {
        let var = self.variable(name)?;
        let ndim = var.dimensions().len();
        if ndim != 1 {
            return Err(SoundingError::index_out_of_range(
                name,
                format!("expected 1 dimension, found {}", ndim),
            ));
        }

        let values: Vec<f64> = var.get_values(..)?;
        debug!("read {} values of '{}'", values.len(), name);

        Ok(values)
    }
}

impl std::fmt::Debug for NetCdfSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetCdfSource")
            .field("path", &self.path)
            .finish()
    }
}
