//! The sparse lattice of degree-to-pixel control points of one chart and
//! the interpolation over it.
//!
//! Every chart ships a table of whole-degree latitude/longitude
//! intersections with their known pixel positions. A query is answered by
//! bracketing the target between its nearest control points, deriving how
//! many pixels one degree moves on each axis, and walking the minute and
//! second parts of the angle along those two axes independently. The two
//! axes never correct each other, so the scheme is *not* bilinear
//! interpolation; chart rotation shows up only through the per-axis pixel
//! rates.

use std::{
    collections::{BTreeSet, HashMap},
    error::Error,
    fmt,
};

use crate::{angle::Dms, coord::PixelPoint};

/// Failure modes of grid queries.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GridError {
    /// The target cannot be bracketed by the loaded control points:
    /// the grid is empty, the target sits on the only row/column of the
    /// lattice, or a bracketing corner is missing from the table.
    OutOfCoverage,
    /// The bracketing corners collapse onto one degree value, so no
    /// per-degree pixel rate exists on that axis.
    ZeroAxisSpan,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::OutOfCoverage => "the point is outside the loaded reference grid",
            Self::ZeroAxisSpan => "the reference grid spans a single degree on one axis",
        };

        write!(f, "{msg}")
    }
}

impl Error for GridError {}

/// Whole-degree bounding box of a grid, derived from its keys.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridBounds {
    pub min_lat: i16,
    pub max_lat: i16,
    pub min_long: i16,
    pub max_long: i16,
}

impl GridBounds {
    /// Whether the whole-degree position falls inside the box.
    ///
    /// Lower bounds are closed, upper bounds are open: a point sitting on
    /// the last degree row of a chart belongs to the neighbouring chart.
    pub fn contains(&self, lat_degree: i16, long_degree: i16) -> bool {
        (self.min_lat..self.max_lat).contains(&lat_degree)
            && (self.min_long..self.max_long).contains(&long_degree)
    }
}

/// The control points of one chart: whole-degree (latitude, longitude)
/// intersections mapped to their known pixel positions.
///
/// The keys form a rectangular but not necessarily dense lattice. The grid
/// is never mutated after loading.
#[derive(Debug, Clone, Default)]
pub struct ReferenceGrid {
    cells: HashMap<(i16, i16), PixelPoint>,
}

impl ReferenceGrid {
    /// Wrap a loaded control-point table.
    pub fn new(cells: HashMap<(i16, i16), PixelPoint>) -> Self {
        Self { cells }
    }

    /// The number of control points.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no control points at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The stored pixel of an exact whole-degree intersection.
    pub fn pixel_at(&self, lat_degree: i16, long_degree: i16) -> Option<PixelPoint> {
        self.cells.get(&(lat_degree, long_degree)).copied()
    }

    /// The whole-degree bounding box of the control points, `None` for an
    /// empty grid.
    pub fn bounds(&self) -> Option<GridBounds> {
        let mut keys = self.cells.keys();
        let &(first_lat, first_long) = keys.next()?;

        let mut bounds = GridBounds {
            min_lat: first_lat,
            max_lat: first_lat,
            min_long: first_long,
            max_long: first_long,
        };
        for &(lat, long) in keys {
            bounds.min_lat = bounds.min_lat.min(lat);
            bounds.max_lat = bounds.max_lat.max(lat);
            bounds.min_long = bounds.min_long.min(long);
            bounds.max_long = bounds.max_long.max(long);
        }

        Some(bounds)
    }

    /// The control-point degrees nearest to the target, chosen per axis
    /// independently.
    ///
    /// With `inclusive` unset, the degree value equal to the target's own
    /// is ruled out on each axis, which is how the far side of the
    /// bracketing cell is found. With `reversed` set, the candidate order
    /// is flipped before the stable distance sort; that only changes the
    /// winner between two equidistant candidates, and which one wins is
    /// not part of the contract.
    ///
    /// # Errors
    /// `OutOfCoverage` when the grid is empty or the exclusion leaves an
    /// axis without candidates; the target is outside the loaded chart.
    pub fn nearest_lat_long(
        &self,
        lat: Dms,
        long: Dms,
        inclusive: bool,
        reversed: bool,
    ) -> Result<(i16, i16), GridError> {
        let lats = self.cells.keys().map(|&(lat, _)| lat);
        let longs = self.cells.keys().map(|&(_, long)| long);

        let nearest_lat = nearest_on_axis(lats, lat.degrees(), inclusive, reversed)
            .ok_or(GridError::OutOfCoverage)?;
        let nearest_long = nearest_on_axis(longs, long.degrees(), inclusive, reversed)
            .ok_or(GridError::OutOfCoverage)?;

        Ok((nearest_lat, nearest_long))
    }

    /// The interpolated pixel position of a DMS latitude/longitude.
    ///
    /// The anchor corner supplies the whole-degree position; the minute
    /// and second parts then move along the per-degree pixel rate of each
    /// geographic axis, and the result is floored toward negative
    /// infinity on both pixel axes.
    ///
    /// # Errors
    /// - `OutOfCoverage` when the target cannot be bracketed or a
    ///   bracketing corner is absent from the sparse lattice;
    /// - `ZeroAxisSpan` when the grid degenerates to a single row or
    ///   column under the target.
    pub fn pixel_for(&self, lat: Dms, long: Dms) -> Result<PixelPoint, GridError> {
        let (lat1, long1) = self.nearest_lat_long(lat, long, true, false)?;
        let (lat2, long2) = self.nearest_lat_long(lat, long, false, true)?;

        let delta_lat = i32::from(lat2) - i32::from(lat1);
        let delta_long = i32::from(long2) - i32::from(long1);
        if delta_lat == 0 || delta_long == 0 {
            return Err(GridError::ZeroAxisSpan);
        }

        let anchor = self.pixel_at(lat1, long1).ok_or(GridError::OutOfCoverage)?;
        let lat_corner = self.pixel_at(lat2, long1).ok_or(GridError::OutOfCoverage)?;
        let long_corner = self.pixel_at(lat1, long2).ok_or(GridError::OutOfCoverage)?;

        let lat_rate = pixel_rate(anchor, lat_corner, delta_lat);
        let long_rate = pixel_rate(anchor, long_corner, delta_long);

        let lat_minutes = f64::from(lat.minutes());
        let long_minutes = f64::from(long.minutes());

        let x_offset = lat_minutes * lat_rate.0 / 60.0
            + long_minutes * long_rate.0 / 60.0
            + lat.seconds() * lat_rate.0 / 3600.0
            + long.seconds() * long_rate.0 / 3600.0;
        let y_offset = lat_minutes * lat_rate.1 / 60.0
            + long_minutes * long_rate.1 / 60.0
            + lat.seconds() * lat_rate.1 / 3600.0
            + long.seconds() * long_rate.1 / 3600.0;

        Ok(PixelPoint::new(
            (f64::from(anchor.x) + x_offset).floor() as i32,
            (f64::from(anchor.y) + y_offset).floor() as i32,
        ))
    }
}

/// The nearest distinct degree value on one axis.
///
/// Candidates are collected in ascending order, optionally reversed, then
/// stable-sorted by absolute distance to the target, so an equidistant tie
/// is broken by the pre-sort order.
fn nearest_on_axis(
    values: impl Iterator<Item = i16>,
    target: i16,
    inclusive: bool,
    reversed: bool,
) -> Option<i16> {
    let distinct: BTreeSet<i16> = values.collect();
    let mut candidates: Vec<i16> = distinct
        .into_iter()
        .filter(|&value| inclusive || value != target)
        .collect();

    if reversed {
        candidates.reverse();
    }

    candidates.sort_by_key(|&value| (i32::from(target) - i32::from(value)).abs());
    candidates.first().copied()
}

/// How many pixels one whole degree moves, floored componentwise.
fn pixel_rate(from: PixelPoint, to: PixelPoint, delta_degrees: i32) -> (f64, f64) {
    let delta = f64::from(delta_degrees);
    (
        (f64::from(to.x - from.x) / delta).floor(),
        (f64::from(to.y - from.y) / delta).floor(),
    )
}
