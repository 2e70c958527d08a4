//! JSON and CSV serialization of consolidated holidays.

use crate::error::OutputError;
use crate::holiday::Holiday;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(OutputError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Pretty-printed JSON array with two-space indentation.
pub fn to_json(holidays: &[Holiday]) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(holidays)?)
}

/// Write `Date,Day,Name,States` rows, states joined by `;`.
pub fn write_csv<W: Write>(writer: W, holidays: &[Holiday]) -> Result<(), OutputError> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(["Date", "Day", "Name", "States"])?;
    for h in holidays {
        let states = h.states.join(";");
        w.write_record([h.date.as_str(), h.day.as_str(), h.name.as_str(), states.as_str()])?;
    }
    w.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// CSV document as a string.
pub fn to_csv(holidays: &[Holiday]) -> Result<String, OutputError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, holidays)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `holidays` to `<base>.<ext>` and return the path written.
pub fn write_holidays(
    base: &Path,
    format: OutputFormat,
    holidays: &[Holiday],
) -> Result<PathBuf, OutputError> {
    let mut name = base.as_os_str().to_owned();
    name.push(".");
    name.push(format.extension());
    let path = PathBuf::from(name);

    let contents = match format {
        OutputFormat::Json => to_json(holidays)?,
        OutputFormat::Csv => to_csv(holidays)?,
    };

    std::fs::write(&path, contents).map_err(|source| OutputError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
