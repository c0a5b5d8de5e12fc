#![warn(missing_docs)]
//! Extract a vertical profile from [CM1](https://www2.mmm.ucar.edu/people/bryan/cm1/) model
//! output and write it as a [SHARPpy](https://github.com/sharppy/SHARPpy) sounding.
//!
//! The work is a straight pipeline:
//!
//!  1. [`Cli`] turns the command line into an [`InvocationConfig`].
//!  2. [`extract_profile`] reads the raw columns from a [`FieldSource`] at one grid point.
//!  3. [`derive_sounding`] converts them into temperature, dew point and wind.
//!  4. [`write_sounding_file`] writes the SHARPpy text file.
//!
//! [`run`] performs all of these steps for a netCDF file on disk, [`run_with_source`] does the
//! same for any other source.
//!
//! # Examples
//!
//! ```rust
//! use cm1_sounding::{run_with_source, InvocationConfig, MemorySource};
//!
//! let src = MemorySource::new()
//!     .with_column_variable("prs", vec![100_000.0, 90_000.0, 80_000.0])
//!     .with_column_variable("th", vec![300.0, 305.0, 310.0])
//!     .with_column_variable("qv", vec![0.01, 0.008, 0.006])
//!     .with_column_variable("u", vec![5.0, 6.0, 7.0])
//!     .with_column_variable("v", vec![0.0, 0.0, 0.0])
//!     .with_coordinate("z", vec![0.0, 1.0, 2.0]);
//!
//! let dir = std::env::temp_dir();
//! let cfg = InvocationConfig::new("cm1out.nc", dir.join("cm1_sounding_doc.snd"));
//!
//! let snd = run_with_source(&src, &cfg).unwrap();
//! assert_eq!(snd.num_levels(), 3);
//! # std::fs::remove_file(&cfg.output).ok();
//! ```

//
// API
//
pub use crate::{
    cli::Cli,
    config::{GridIndex, InvocationConfig, MixingRatioUnits, WindSource},
    error::{Result, SoundingError},
    extract::{extract_profile, RawFieldSet},
    profile::derive_sounding,
    sounding::{DataRow, GridLocation, Sounding},
    source::{FieldSource, MemorySource, NetCdfSource},
    writer::{write_sounding, write_sounding_file},
};

pub mod met_formulas;
pub mod profile;
pub mod writer;

//
// Internal use only
//
mod cli;
mod config;
mod error;
mod extract;
mod sounding;
mod source;

use log::info;

/// Build the sounding described by `config` from `source` and write it to `config.output`.
pub fn run_with_source<S>(source: &S, config: &InvocationConfig) -> Result<Sounding>
where
    S: FieldSource + ?Sized,
{
    let index = config.grid_index()?;
    let raw = extract_profile(source, index, config)?;
    info!("extracted {} levels at {:?}", raw.num_levels(), index);

    let snd = build_sounding(&raw, config)?;
    write_sounding_file(&snd, &config.output)?;

    Ok(snd)
}

/// Run the whole pipeline against the netCDF file named in `config`.
///
/// The input file is closed before the sounding is derived and written.
pub fn run(config: &InvocationConfig) -> Result<Sounding> {
    let index = config.grid_index()?;

    let raw = {
        let source = NetCdfSource::open(&config.input)?;
        extract_profile(&source, index, config)?
    };
    info!(
        "extracted {} levels from {} at {:?}",
        raw.num_levels(),
        config.input.display(),
        index
    );

    let snd = build_sounding(&raw, config)?;
    write_sounding_file(&snd, &config.output)?;

    Ok(snd)
}

fn build_sounding(raw: &RawFieldSet, config: &InvocationConfig) -> Result<Sounding> {
    let snd = derive_sounding(raw, config.qv_units)?
        .with_source_description(format!("CM1 output {}", config.input.display()))
        .with_location(GridLocation::new(config.x, config.y, config.t))
        .with_valid_time(config.valid_time);

    Ok(snd)
}
