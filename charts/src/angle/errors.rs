use std::{
    error::Error,
    fmt,
    num::{ParseFloatError, ParseIntError},
};

use crate::enum_trivial_from_impl;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OutOfRange {
    ArcMinutes, // min >= 60
    ArcSeconds, // sec outside [0, 60)
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ArcMinutes => "Angle's arc minute value not in range [0..60)",
            Self::ArcSeconds => "Angle's arc second value not in range [0..60)",
        };

        write!(f, "{msg}")
    }
}

impl Error for OutOfRange {}

#[derive(Debug)]
pub enum ParseDmsError {
    Range(OutOfRange),
    Float(ParseFloatError),
    // this variant is practically impossible due to regex digits limitations
    Int(ParseIntError),
    DmsNotation,
}

enum_trivial_from_impl!(OutOfRange => ParseDmsError:Range);
enum_trivial_from_impl!(ParseFloatError => ParseDmsError:Float);
enum_trivial_from_impl!(ParseIntError => ParseDmsError:Int);

impl fmt::Display for ParseDmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse angle: ")?;
        match self {
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::Int(inner) => write!(f, "{inner}"),
            Self::DmsNotation => write!(f, "not a Degree-Minute-Second notation"),
        }
    }
}

impl Error for ParseDmsError {}
