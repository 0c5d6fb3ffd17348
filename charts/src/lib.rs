//! Chart-grid coordinate transforms and terrain altitude lookups for
//! rasterized flight maps.
//!
//! A *chart* is a named bundle of a raster map image, a table of known
//! degree-to-pixel control points and an optional table of half-degree
//! terrain altitudes. The crate turns a DMS latitude/longitude into an
//! image pixel by bracketing the target between control points, answers
//! coarse terrain-altitude lookups, estimates the highest terrain along a
//! straight route and picks the chart covering a given position.

// The list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]
// the interpolator floors into integer pixels on purpose
#![allow(clippy::cast_possible_truncation)]

pub use altitude::{AltitudeIndex, BucketKey};
pub use angle::{Dms, OutOfRange, ParseDmsError};
pub use chart::Chart;
pub use coord::{PixelPoint, Waypoint};
pub use grid::{GridBounds, GridError, ReferenceGrid};
pub use locate::find_chart;
pub use route::max_altitude_between;
pub use store::{load_altitude_index, load_reference_grid, DataRoot, LoadError};

mod altitude;
mod angle;
mod chart;
mod coord;
mod grid;
mod locate;
mod route;
mod store;
mod utils;
