//! Write a sounding in the SHARPpy text format.
//!
//! The layout is:
//!
//! ```text
//! %TITLE%
//! Xaxis_0.0_Yaxis_0.0_Time_0   010101/0000
//!
//!    LEVEL       HGHT       TEMP       DWPT       WDIR       WSPD
//! -------------------------------------------------------------------
//! %RAW%
//! 1000.00000000000000000000, 0.00000000000000000000, ...
//! %END%
//! ```
//!
//! Each row holds pressure (hPa), height (m), temperature (C), dew point (C), wind direction
//! (degrees) and wind speed (knots), each printed with 20 fractional digits.

use crate::{
    error::{Result, SoundingError},
    sounding::{DataRow, Sounding},
};
use log::info;
use metfor::Quantity;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Date stamp used in the header when the valid time is unknown.
pub const DEFAULT_DATE_STAMP: &str = "010101/0000";

const COLUMN_HEADER: &str = "   LEVEL       HGHT       TEMP       DWPT       WDIR       WSPD";
const DELIMITER: &str = ", ";

/// The header lines, up to and including the `%RAW%` marker.
///
/// # Examples
///
/// ```rust
/// use cm1_sounding::{writer::header, GridLocation, Sounding};
///
/// let snd = Sounding::new().with_location(GridLocation::new(10.0, 2.5, 52.9));
/// let hdr = header(&snd);
///
/// assert_eq!(hdr.lines().nth(1), Some("Xaxis_10.0_Yaxis_2.5_Time_52   010101/0000"));
/// ```
pub fn header(snd: &Sounding) -> String {
    let loc = snd.location();
    let stamp = snd
        .valid_time()
        .map(|vt| vt.format("%y%m%d/%H%M").to_string())
        .unwrap_or_else(|| DEFAULT_DATE_STAMP.to_owned());

    format!(
        "%TITLE%\nXaxis_{:?}_Yaxis_{:?}_Time_{}   {}\n\n{}\n{}\n%RAW%\n",
        loc.x(),
        loc.y(),
        loc.time_index(),
        stamp,
        COLUMN_HEADER,
        "-".repeat(67),
    )
}

/// Format one data row, without the trailing newline.
pub fn format_row(row: &DataRow) -> String {
    let vals = [
        row.pressure.unpack(),
        row.height.unpack(),
        row.temperature.unpack(),
        row.dew_point.unpack(),
        row.wind.direction,
        row.wind.speed.unpack(),
    ];

    vals.iter()
        .map(|val| format!("{:10.20}", val))
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

/// Write `snd` to any writer.
pub fn write_sounding<W: Write>(snd: &Sounding, mut out: W) -> Result<()> {
    snd.validate()?;

    out.write_all(header(snd).as_bytes())?;
    for row in snd.bottom_up() {
        writeln!(out, "{}", format_row(&row))?;
    }
    writeln!(out, "%END%")?;
    out.flush()?;

    Ok(())
}

/// Write `snd` to a file, replacing anything already at `path`.
///
/// A failure after the file is created leaves a partial file behind.
pub fn write_sounding_file<P: AsRef<Path>>(snd: &Sounding, path: P) -> Result<()> {
    let path = path.as_ref();
    snd.validate()?;

    let f = File::create(path).map_err(|err| SoundingError::file_access(path, err))?;
    write_sounding(snd, BufWriter::new(f))?;
    info!("wrote {} levels to {}", snd.num_levels(), path.display());

    Ok(())
}
