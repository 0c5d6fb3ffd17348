//! One named chart: the reference grid, the altitude index and the raster
//! image path, bundled and loaded together.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    altitude::AltitudeIndex,
    angle::Dms,
    coord::{PixelPoint, Waypoint},
    grid::{GridBounds, GridError, ReferenceGrid},
    route,
    store::{load_altitude_index, load_reference_grid, DataRoot, LoadError},
};

/// A loaded chart. Immutable once constructed; a shared reference can be
/// queried from any number of threads.
#[derive(Debug, Clone)]
pub struct Chart {
    name: String,
    grid: ReferenceGrid,
    altitudes: AltitudeIndex,
    imagery: PathBuf,
}

impl Chart {
    /// Load the named chart bundle from the data root.
    ///
    /// The reference table is mandatory, the altitude table optional; the
    /// raster image is only located here, not decoded.
    ///
    /// # Errors
    /// Any `LoadError` of the underlying tables aborts the whole chart.
    pub fn load(root: &DataRoot, name: &str) -> Result<Self, LoadError> {
        let grid = load_reference_grid(root, name)?;
        let altitudes = load_altitude_index(root, name)?;
        debug!(chart = name, "chart ready");

        Ok(Self {
            name: name.to_string(),
            grid,
            altitudes,
            imagery: root.imagery(name),
        })
    }

    /// The chart's name, as its directory under the data root.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The chart's degree-to-pixel control points.
    pub fn grid(&self) -> &ReferenceGrid {
        &self.grid
    }

    /// The chart's altitude buckets; empty when the chart ships none.
    pub fn altitudes(&self) -> &AltitudeIndex {
        &self.altitudes
    }

    /// Where the chart's raster image lives.
    pub fn imagery_path(&self) -> &Path {
        &self.imagery
    }

    /// The whole-degree bounding box of the chart.
    pub fn bounds(&self) -> Option<GridBounds> {
        self.grid.bounds()
    }

    /// The pixel position of a DMS latitude/longitude on this chart.
    ///
    /// # Errors
    /// See [`ReferenceGrid::pixel_for`].
    pub fn pixel_for(&self, lat: Dms, long: Dms) -> Result<PixelPoint, GridError> {
        self.grid.pixel_for(lat, long)
    }

    /// The highest known terrain altitude around the given point.
    pub fn altitude_at(&self, lat: Dms, long: Dms) -> Option<i32> {
        self.altitudes.altitude_at(lat, long)
    }

    /// The highest known terrain altitude along the straight line between
    /// two waypoints.
    pub fn max_altitude_between(&self, wp1: Waypoint, wp2: Waypoint) -> Option<i32> {
        route::max_altitude_between(&self.altitudes, wp1, wp2)
    }

    /// The chart's rotation relative to true north around the given
    /// position, in degrees.
    ///
    /// Derived from the pixel segment between the position's whole-degree
    /// corner and the corner one degree further north: a chart drawn with
    /// north straight up answers 0.
    ///
    /// # Errors
    /// See [`ReferenceGrid::pixel_for`]; the two corners must both be
    /// resolvable.
    pub fn angle_off_north(&self, lat: Dms, long: Dms) -> Result<f64, GridError> {
        let base = self.pixel_for(Dms::whole(lat.degrees()), Dms::whole(long.degrees()))?;
        let north = self.pixel_for(Dms::whole(lat.degrees() + 1), Dms::whole(long.degrees()))?;

        let delta_x = f64::from(north.x - base.x);
        let delta_y = f64::from(north.y - base.y);
        Ok((delta_x / delta_y).atan().to_degrees())
    }

    /// Decode the chart's raster image.
    ///
    /// # Errors
    /// Whatever the decoder reports when the file is missing or is not a
    /// readable image.
    #[cfg(feature = "image")]
    pub fn open_image(&self) -> image::ImageResult<image::DynamicImage> {
        image::open(&self.imagery)
    }
}
