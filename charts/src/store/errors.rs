use std::{error::Error, fmt, io};

use crate::enum_trivial_from_impl;

/// Fatal problems while reading a chart's source tables.
///
/// Any of these aborts the construction of the chart context; per-query
/// misses are expressed as absent results instead, never through here.
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    // rows are counted from 1, including the header
    InvalidReferenceData { line: usize },
    InvalidAltitudeData { line: usize },
}

enum_trivial_from_impl!(io::Error => LoadError:Io);

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(inner) => write!(f, "Cannot read chart data: {inner}"),
            Self::InvalidReferenceData { line } => {
                write!(f, "Invalid coordinate map: row {line} is malformed")
            }
            Self::InvalidAltitudeData { line } => {
                write!(f, "Invalid altitude map: row {line} is malformed")
            }
        }
    }
}

impl Error for LoadError {}
