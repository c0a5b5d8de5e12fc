//! Command line parsing.
//!
//! The tool has always been invoked with single dash long options such as `-windinterp 1`,
//! which clap reads as a cluster of short flags. [`normalize_args`] rewrites those to the
//! double dash form before parsing so old scripts keep working.

use crate::{
    config::{InvocationConfig, MixingRatioUnits, WindSource},
    error::{Result, SoundingError},
};
use chrono::NaiveDateTime;
use clap::Parser;
use metfor::MetersPSec;
use std::{convert::TryFrom, ffi::OsString, path::PathBuf};

const LONG_FLAGS: &[&str] = &["windinterp", "qvunits", "validtime"];

const USAGE_EXAMPLE: &str = "\
Example:
  cm1-sounding cm1out.nc CM1SHARP.out -x 0 -y 0 -t 52 -u 12.4 -v 1.9 -windinterp 1";

/// Generate a SHARPpy sounding from CM1 data.
#[derive(Debug, Clone, Parser)]
#[command(name = "cm1-sounding", version, about, after_help = USAGE_EXAMPLE)]
pub struct Cli {
    /// Input netCDF file
    pub inputfile: PathBuf,

    /// Output sounding file name
    pub outputfile: PathBuf,

    /// x position to generate sounding data from dataset
    #[arg(short = 'x', default_value_t = 0.0, allow_negative_numbers = true)]
    pub x: f64,

    /// y position to generate sounding data from dataset
    #[arg(short = 'y', default_value_t = 0.0, allow_negative_numbers = true)]
    pub y: f64,

    /// time to generate sounding data from in dataset
    #[arg(short = 't', default_value_t = 0.0, allow_negative_numbers = true)]
    pub t: f64,

    /// X movement speed of domain in m/s
    #[arg(short = 'u', default_value_t = 0.0, allow_negative_numbers = true)]
    pub u: f64,

    /// Y movement speed of domain in m/s
    #[arg(short = 'v', default_value_t = 0.0, allow_negative_numbers = true)]
    pub v: f64,

    /// Use wind vectors interpolated to scalar points? (0 or 1)
    #[arg(
        long = "windinterp",
        default_value_t = 0,
        value_parser = clap::value_parser!(i64).range(0..=1)
    )]
    pub windinterp: i64,

    /// Units of the qv variable in the input file
    #[arg(long = "qvunits", default_value = "gkg", value_parser = ["gkg", "kgkg"])]
    pub qvunits: String,

    /// Valid time for the sounding header, e.g. 2011-05-24T20:00
    #[arg(long = "validtime", value_parser = parse_valid_time)]
    pub validtime: Option<NaiveDateTime>,

    /// Print progress messages, repeat for more detail
    #[arg(long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse the process arguments, exiting with a usage message on failure.
    pub fn parse_normalized() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }

    /// Parse an explicit argument list, the first item being the program name.
    pub fn try_parse_normalized<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::try_parse_from(normalize_args(args))
    }

    /// Convert to the configuration used by the pipeline.
    pub fn into_config(self) -> Result<InvocationConfig> {
        let wind_source = WindSource::try_from(self.windinterp)?;
        let qv_units: MixingRatioUnits = self
            .qvunits
            .parse()
            .map_err(|_| SoundingError::Argument(format!("unknown qv units '{}'", self.qvunits)))?;

        Ok(InvocationConfig::new(self.inputfile, self.outputfile)
            .with_location(self.x, self.y, self.t)
            .with_translation(MetersPSec(self.u), MetersPSec(self.v))
            .with_wind_source(wind_source)
            .with_qv_units(qv_units)
            .with_valid_time(self.validtime))
    }
}

/// Rewrite `-windinterp` style options to `--windinterp`, leaving everything else alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let rewritten = arg.to_str().and_then(|s| {
                let flag = s.strip_prefix('-')?;
                if flag.starts_with('-') {
                    return None;
                }

                let name = flag.split('=').next().unwrap_or(flag);
                if LONG_FLAGS.contains(&name) {
                    Some(OsString::from(format!("-{}", s)))
                } else {
                    None
                }
            });

            rewritten.unwrap_or(arg)
        })
        .collect()
}

fn parse_valid_time(s: &str) -> std::result::Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
}
