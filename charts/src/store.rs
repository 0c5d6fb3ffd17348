//! Reading chart bundles off the disk.
//!
//! A data root holds one directory per chart, each with the fixed file
//! layout `map.csv` (degree-to-pixel reference table), `altitudes.csv`
//! (optional half-degree altitude table) and `map.jpg` (the raster
//! image). Everything is read eagerly; the loaded tables are never
//! touched again.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    altitude::{AltitudeIndex, BucketKey},
    coord::PixelPoint,
    grid::ReferenceGrid,
};

mod errors;

pub use errors::LoadError;

const REFERENCE_TABLE: &str = "map.csv";
const ALTITUDE_TABLE: &str = "altitudes.csv";
const IMAGERY: &str = "map.jpg";

/// The directory holding one subdirectory per chart.
///
/// The root is handed to every load function explicitly; there is no
/// process-wide base path.
#[derive(Debug, Clone)]
pub struct DataRoot {
    root: PathBuf,
}

impl DataRoot {
    /// Use the given directory as the chart data root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory itself.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Path of a chart's degree-to-pixel reference table.
    pub fn reference_table(&self, chart: &str) -> PathBuf {
        self.root.join(chart).join(REFERENCE_TABLE)
    }

    /// Path of a chart's altitude table.
    pub fn altitude_table(&self, chart: &str) -> PathBuf {
        self.root.join(chart).join(ALTITUDE_TABLE)
    }

    /// Path of a chart's raster image.
    pub fn imagery(&self, chart: &str) -> PathBuf {
        self.root.join(chart).join(IMAGERY)
    }

    /// Names of the chart bundles under the root, in directory order.
    ///
    /// Entries without a reference table (route archives, legend imagery
    /// and the like) are not charts and are skipped. The order is whatever
    /// the filesystem reports, so it is not stable across machines.
    ///
    /// # Errors
    /// `Io` when the root itself cannot be listed.
    pub fn chart_names(&self) -> Result<Vec<String>, LoadError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().join(REFERENCE_TABLE).is_file() {
                debug!(entry = %entry.path().display(), "skipping non-chart entry");
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }

        Ok(names)
    }
}

/// Read a chart's degree-to-pixel reference table.
///
/// Rows are `latitude degree, longitude degree, pixel x, pixel y` after a
/// header row; fields are trimmed before parsing and extra trailing fields
/// are tolerated.
///
/// # Errors
/// - `Io` when the table cannot be read — the reference table is
///   mandatory for a chart;
/// - `InvalidReferenceData` on any row with fewer than four fields or a
///   field that does not parse as an integer.
pub fn load_reference_grid(root: &DataRoot, chart: &str) -> Result<ReferenceGrid, LoadError> {
    let raw = fs::read_to_string(root.reference_table(chart))?;

    let mut cells = HashMap::new();
    for (index, line) in raw.lines().enumerate().skip(1) {
        let row = index + 1;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 4 {
            return Err(LoadError::InvalidReferenceData { line: row });
        }

        let invalid = |_| LoadError::InvalidReferenceData { line: row };
        let lat: i16 = fields[0].parse().map_err(invalid)?;
        let long: i16 = fields[1].parse().map_err(invalid)?;
        let x: i32 = fields[2].parse().map_err(invalid)?;
        let y: i32 = fields[3].parse().map_err(invalid)?;

        let _ = cells.insert((lat, long), PixelPoint::new(x, y));
    }

    debug!(chart, cells = cells.len(), "loaded reference grid");
    Ok(ReferenceGrid::new(cells))
}

/// Read a chart's half-degree altitude table.
///
/// Rows are `lat degree, lat minutes, long degree, long minutes, altitude`
/// after a header row. A missing table is not an error: such a chart
/// simply answers every altitude lookup with `None`.
///
/// # Errors
/// `InvalidAltitudeData` on any row of a present table that does not hold
/// exactly five integer fields; `Io` when the table exists but cannot be
/// read.
pub fn load_altitude_index(root: &DataRoot, chart: &str) -> Result<AltitudeIndex, LoadError> {
    let raw = match fs::read_to_string(root.altitude_table(chart)) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(chart, "no altitude table");
            return Ok(AltitudeIndex::empty());
        }
        Err(err) => return Err(err.into()),
    };

    let mut buckets: HashMap<BucketKey, i32> = HashMap::new();
    for (index, line) in raw.lines().enumerate().skip(1) {
        let row = index + 1;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 5 {
            return Err(LoadError::InvalidAltitudeData { line: row });
        }

        let invalid = |_| LoadError::InvalidAltitudeData { line: row };
        let lat: i16 = fields[0].parse().map_err(invalid)?;
        let lat_minutes: u8 = fields[1].parse().map_err(invalid)?;
        let long: i16 = fields[2].parse().map_err(invalid)?;
        let long_minutes: u8 = fields[3].parse().map_err(invalid)?;
        let altitude: i32 = fields[4].parse().map_err(invalid)?;

        let _ = buckets.insert(((lat, lat_minutes), (long, long_minutes)), altitude);
    }

    debug!(chart, buckets = buckets.len(), "loaded altitude index");
    Ok(AltitudeIndex::new(buckets))
}
