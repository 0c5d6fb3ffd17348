//! Resolve a latitude/longitude against a directory of chart bundles:
//! pick the covering chart, interpolate the pixel position and report the
//! terrain altitude around the point.
//!
//! Usage: locate_pixel <data-root> <lat> <long>
//!
//! Angles accept decimal degrees (`44.5`), colon notation (`44:30:15`) or
//! unicode DMS (`44°30′15″`).

use std::{env, error::Error, process};

use kneeboard_charts::{find_chart, Chart, DataRoot, Dms};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: locate_pixel <data-root> <lat> <long>");
        process::exit(2);
    }

    let root = DataRoot::new(&args[1]);
    let lat: Dms = args[2].parse()?;
    let long: Dms = args[3].parse()?;

    let Some(name) = find_chart(&root, lat, long)? else {
        println!("({lat}, {long}) is not on any chart under {}", root.path().display());
        return Ok(());
    };

    let chart = Chart::load(&root, &name)?;
    let pixel = chart.pixel_for(lat, long)?;
    println!("chart {name}: ({lat}, {long}) -> pixel {pixel}");

    match chart.altitude_at(lat, long) {
        Some(altitude) => println!("highest terrain around the point: {altitude}"),
        None => println!("no altitude data around the point"),
    }

    Ok(())
}
