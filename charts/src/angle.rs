//! The degrees-minutes-seconds angle the chart tables are written in.
//!
//! The reference tables key everything by whole degrees and express the
//! position inside a cell with arc minutes and seconds, so the angle type
//! keeps the three parts separate instead of collapsing them into one
//! number. Conversion to decimal degrees is only done where the route
//! sampler needs to walk in degree space.

use std::{convert::TryFrom, fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod consts;
mod errors;

pub use errors::{OutOfRange, ParseDmsError};

use consts::{
    ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE, SECONDS_IN_DEGREE,
    SECONDS_IN_MINUTE,
};

/// An angle in degrees-minutes-seconds notation.
///
/// Degrees carry the sign of the whole angle; minutes and seconds are
/// non-negative magnitudes added to the whole-degree magnitude.
/// The decimal value is `sign(deg) * (|deg| + min/60 + sec/3600)`,
/// with zero degrees counting as positive.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dms {
    degrees: i16,
    minutes: u8,
    seconds: f64,
}

impl Dms {
    /// Construct an angle from its three parts.
    ///
    /// # Errors
    /// `OutOfRange` when minutes or seconds fall outside `[0, 60)`.
    pub fn new(degrees: i16, minutes: u8, seconds: f64) -> Result<Self, OutOfRange> {
        if minutes >= MINUTES_IN_DEGREE {
            return Err(OutOfRange::ArcMinutes);
        }

        if !(0.0..f64::from(SECONDS_IN_MINUTE)).contains(&seconds) {
            return Err(OutOfRange::ArcSeconds);
        }

        Ok(Self {
            degrees,
            minutes,
            seconds,
        })
    }

    /// A whole-degree angle with zero minutes and seconds.
    pub const fn whole(degrees: i16) -> Self {
        Self {
            degrees,
            minutes: 0,
            seconds: 0.0,
        }
    }

    /// The signed whole-degree part.
    pub const fn degrees(self) -> i16 {
        self.degrees
    }

    /// The arc minutes magnitude, always below 60.
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// The arc seconds magnitude, always in `[0, 60)`.
    pub const fn seconds(self) -> f64 {
        self.seconds
    }

    /// The angle as signed decimal degrees.
    pub fn to_decimal(self) -> f64 {
        let fraction = f64::from(self.minutes) / f64::from(MINUTES_IN_DEGREE)
            + self.seconds / f64::from(SECONDS_IN_DEGREE);
        let magnitude = f64::from(self.degrees.unsigned_abs()) + fraction;

        if self.degrees < 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Decompose signed decimal degrees back into DMS parts.
    ///
    /// The sign lands on the degrees; minutes and seconds are magnitudes.
    pub fn from_decimal(value: f64) -> Self {
        let negative = value < 0.0;
        let magnitude = value.abs();

        let mut degrees = magnitude.floor();
        let total_minutes = (magnitude - degrees) * f64::from(MINUTES_IN_DEGREE);
        let mut minutes = total_minutes.floor();
        let mut seconds = (total_minutes - minutes) * f64::from(SECONDS_IN_MINUTE);

        // binary fractions can push a remainder right up to the next unit
        if seconds >= f64::from(SECONDS_IN_MINUTE) {
            seconds = 0.0;
            minutes += 1.0;
        }
        if minutes >= f64::from(MINUTES_IN_DEGREE) {
            minutes = 0.0;
            degrees += 1.0;
        }

        let degrees = degrees as i16;
        Self {
            degrees: if negative { -degrees } else { degrees },
            minutes: minutes as u8,
            seconds,
        }
    }
}

impl TryFrom<(i16, u8, f64)> for Dms {
    type Error = OutOfRange;

    fn try_from(value: (i16, u8, f64)) -> Result<Self, Self::Error> {
        let (deg, min, sec) = value;
        Self::new(deg, min, sec)
    }
}

lazy_static! {
    static ref RE_UNICODE: Regex = Regex::new(
        "^(?P<sign>[-+])?(?P<deg>\\d{1,3})°\
         (?:\\s?(?P<min>\\d{1,2})′\
         (?:\\s?(?P<sec>\\d{1,2}(?:\\.\\d+)?)″)?)?$"
    )
    .expect("Unicode regex is valid");
    static ref RE_COLON: Regex = Regex::new(
        "^(?P<sign>[-+])?(?P<deg>\\d{1,3})\
         (?::(?P<min>\\d{1,2})\
         (?::(?P<sec>\\d{1,2}(?:\\.\\d+)?))?)?$"
    )
    .expect("Colon regex is valid");
}

impl Dms {
    fn parse_dms(s: &str) -> Result<Self, ParseDmsError> {
        let capture = RE_UNICODE
            .captures(s)
            .or_else(|| RE_COLON.captures(s))
            .ok_or(ParseDmsError::DmsNotation)?;

        let deg = capture.name("deg").ok_or(ParseDmsError::DmsNotation)?;
        let deg: i16 = deg.as_str().parse()?;
        let negative = capture.name("sign").map_or(false, |m| m.as_str() == "-");

        let min = capture.name("min").map_or("0", |m| m.as_str()).parse()?;
        let sec = capture.name("sec").map_or("0", |m| m.as_str()).parse()?;

        let good = Self::new(if negative { -deg } else { deg }, min, sec)?;
        Ok(good)
    }
}

impl FromStr for Dms {
    type Err = ParseDmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(number) = s.parse::<f64>() {
            Ok(Self::from_decimal(number))
        } else {
            Self::parse_dms(s)
        }
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.degrees, DEGREE_SIGN)?;

        if (self.minutes != 0) || (self.seconds != 0.0) {
            write!(f, "{}{}", self.minutes, ARC_MINUTE_SIGN)?;
        }

        if self.seconds != 0.0 {
            write!(f, "{}{}", self.seconds, ARC_SECOND_SIGN)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_is_zero() {
        let zero = Dms::default();
        assert_eq!(zero.degrees(), 0);
        assert_eq!(zero.minutes(), 0);
        assert_eq!(zero.seconds(), 0.0);
        assert_eq!(zero.to_decimal(), 0.0);
    }

    #[test]
    fn parts_survive_construction() {
        let angle = Dms::new(44, 30, 15.5).unwrap();
        assert_eq!(angle.degrees(), 44);
        assert_eq!(angle.minutes(), 30);
        assert_eq!(angle.seconds(), 15.5);
    }

    #[test]
    #[should_panic(expected = "ArcMinutes")]
    fn bad_minutes() {
        let _a = Dms::new(44, 60, 0.0).unwrap();
    }

    #[test]
    #[should_panic(expected = "ArcSeconds")]
    fn bad_seconds() {
        let _a = Dms::new(44, 59, 60.0).unwrap();
    }

    #[test]
    #[should_panic(expected = "ArcSeconds")]
    fn negative_seconds() {
        let _a = Dms::new(44, 59, -0.5).unwrap();
    }

    #[test]
    fn whole_degree() {
        let angle = Dms::whole(-43);
        assert_eq!(angle, Dms::new(-43, 0, 0.0).unwrap());
        assert_eq!(angle.to_decimal(), -43.0);
    }

    #[test]
    fn decimal_of_northern_angle() {
        let angle = Dms::new(44, 30, 0.0).unwrap();
        assert_eq!(angle.to_decimal(), 44.5);
    }

    #[test]
    fn decimal_of_southern_angle() {
        let angle = Dms::new(-44, 30, 0.0).unwrap();
        assert_eq!(angle.to_decimal(), -44.5);
    }

    #[test]
    fn decimal_includes_seconds() {
        let angle = Dms::new(44, 0, 36.0).unwrap();
        assert_relative_eq!(angle.to_decimal(), 44.01, epsilon = 1e-12);
    }

    #[test]
    fn from_decimal_half_degree() {
        let angle = Dms::from_decimal(44.5);
        assert_eq!(angle.degrees(), 44);
        assert_eq!(angle.minutes(), 30);
        assert_relative_eq!(angle.seconds(), 0.0);
    }

    #[test]
    fn from_decimal_keeps_sign_on_degrees() {
        let angle = Dms::from_decimal(-43.5);
        assert_eq!(angle.degrees(), -43);
        assert_eq!(angle.minutes(), 30);
    }

    #[test]
    fn decimal_round_trip() {
        let angle = Dms::new(44, 30, 15.5).unwrap();
        let restored = Dms::from_decimal(angle.to_decimal());

        assert_eq!(restored.degrees(), 44);
        assert_eq!(restored.minutes(), 30);
        assert_relative_eq!(restored.seconds(), 15.5, epsilon = 1e-6);
    }

    #[test]
    fn from_decimal_near_whole_degree_stays_in_range() {
        let angle = Dms::from_decimal(44.999_999_999_999_99);
        assert!(angle.minutes() < 60);
        assert!(angle.seconds() < 60.0);
    }

    #[test]
    fn parse_unicode_notation() {
        let angle: Dms = "44°30′15.5″".parse().unwrap();
        assert_eq!(angle, Dms::new(44, 30, 15.5).unwrap());
    }

    #[test]
    fn parse_unicode_degrees_only() {
        let angle: Dms = "12°".parse().unwrap();
        assert_eq!(angle, Dms::whole(12));
    }

    #[test]
    fn parse_colon_notation() {
        let angle: Dms = "44:30:15.5".parse().unwrap();
        assert_eq!(angle, Dms::new(44, 30, 15.5).unwrap());
    }

    #[test]
    fn parse_signed_colon_notation() {
        let angle: Dms = "-43:30".parse().unwrap();
        assert_eq!(angle, Dms::new(-43, 30, 0.0).unwrap());
    }

    #[test]
    fn parse_decimal_degrees() {
        let angle: Dms = "44.5".parse().unwrap();
        assert_eq!(angle, Dms::new(44, 30, 0.0).unwrap());
    }

    #[test]
    #[should_panic(expected = "DmsNotation")]
    fn parse_garbage() {
        let _a: Dms = "forty-four degrees".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "ArcMinutes")]
    fn parse_overflowing_minutes() {
        let _a: Dms = "44:75".parse().unwrap();
    }

    #[test]
    fn display_full() {
        let angle = Dms::new(44, 30, 15.5).unwrap();
        assert_eq!(angle.to_string(), "44°30′15.5″");
    }

    #[test]
    fn display_omits_zero_tail() {
        assert_eq!(Dms::whole(44).to_string(), "44°");
        assert_eq!(Dms::new(-43, 30, 0.0).unwrap().to_string(), "-43°30′");
    }
}
