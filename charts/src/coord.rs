//! Points in the two spaces the crate translates between: geographic
//! waypoints and chart image pixels.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::Dms;

/// A position on a chart image, in whole pixels.
///
/// The origin is the top-left corner of the image and `y` grows downward,
/// so moving north decreases `y`.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    /// Construct a point from its pixel coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from(value: (i32, i32)) -> Self {
        let (x, y) = value;
        Self { x, y }
    }
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// One point of a route: latitude and longitude in DMS form.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    lat: Dms,
    long: Dms,
}

impl Waypoint {
    /// Construct a waypoint from the given latitude and longitude.
    pub const fn new(lat: Dms, long: Dms) -> Self {
        Self { lat, long }
    }

    /// The waypoint's latitude.
    pub const fn lat(self) -> Dms {
        self.lat
    }

    /// The waypoint's longitude.
    pub const fn long(self) -> Dms {
        self.long
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Lat: {}, Long: {}", self.lat, self.long)
        } else {
            write!(f, "({},{})", self.lat, self.long)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_point_from_pair() {
        let point = PixelPoint::from((150, 100));
        assert_eq!(point, PixelPoint::new(150, 100));
        assert_eq!(format!("{}", point), "(150,100)");
    }

    #[test]
    fn waypoint_parts() {
        let wp = Waypoint::new(
            Dms::new(44, 30, 0.0).unwrap(),
            Dms::new(39, 0, 15.0).unwrap(),
        );
        assert_eq!(wp.lat().degrees(), 44);
        assert_eq!(wp.long().degrees(), 39);
    }

    #[test]
    fn waypoint_display() {
        let wp = Waypoint::new(Dms::whole(44), Dms::whole(39));
        assert_eq!(format!("{}", wp), "(44°,39°)");
        assert_eq!(format!("{:#}", wp), "Lat: 44°, Long: 39°");
    }
}
