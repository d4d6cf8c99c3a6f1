extern crate bounding_coords;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate serde_json;

use std::process;
use std::str::FromStr;

use bounding_coords::{Coordinate, DistanceQuery};

const USAGE: &str = "usage: bounding-coords <lat> <lon> <distance> [radius] [--geojson]";

fn parse_arg(args: &[String], idx: usize, name: &str) -> Option<f64> {
    let raw = args.get(idx)?;
    match f64::from_str(raw) {
        Ok(v) => Some(v),
        Err(e) => {
            eprintln!("could not parse {} {:?}: {}", name, raw, e);
            None
        }
    }
}

/// Read a query from the command line, ignoring the `--geojson` flag.
fn parse_query(args: &[String]) -> Option<DistanceQuery> {
    let args: Vec<String> = args.iter().filter(|a| a.as_str() != "--geojson").cloned().collect();
    if args.len() < 3 || args.len() > 4 {
        return None;
    }
    let lat = parse_arg(&args, 0, "latitude")?;
    let lon = parse_arg(&args, 1, "longitude")?;
    let distance = parse_arg(&args, 2, "distance")?;
    let query = DistanceQuery::new(Coordinate::new(lat, lon), distance);
    if args.len() == 4 {
        Some(query.with_radius(parse_arg(&args, 3, "radius")?))
    } else {
        Some(query)
    }
}

fn main() {
    env_logger::try_init().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let geojson = args.iter().any(|a| a == "--geojson");
    let query = match parse_query(&args) {
        Some(q) => q,
        None => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };
    debug!("{:?}", query);

    let bounds = query.bounds();
    let out = match bounds {
        Some(b) if geojson => serde_json::to_string_pretty(&b.to_geometry()),
        _ => serde_json::to_string_pretty(&bounds),
    };
    match out {
        Ok(s) => println!("{}", s),
        Err(e) => {
            error!("could not serialize bounds: {}", e);
            process::exit(1);
        }
    }
    if bounds.is_none() {
        process::exit(1);
    }
}
