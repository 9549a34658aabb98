// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
extern crate failure;
extern crate image;
extern crate itertools;
extern crate log;
extern crate newtonfractal;

use clap::{App, Arg, ArgMatches};
use failure::{err_msg, format_err};
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use itertools::Itertools;
use log::info;
use newtonfractal::{
    Complex, ComplexPlane, EngineConfig, Fractal, NewtonEngine, Producer, Request,
    RootedPolynomial,
};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

/// Splits `s` once on `separator` and parses both halves.
fn split_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let mut halves = s.splitn(2, separator);
    let first = halves.next()?.trim().parse().ok()?;
    let second = halves.next()?.trim().parse().ok()?;
    Some((first, second))
}

/// `WIDTHxHEIGHT`, both at least 2.
fn parse_size(s: &str) -> Result<(usize, usize), String> {
    match split_pair::<usize>(s, 'x') {
        Some((w, h)) if w >= 2 && h >= 2 => Ok((w, h)),
        Some((w, h)) => Err(format!("Image must be at least 2x2, got {}x{}", w, h)),
        None => Err(format!("Could not parse image size '{}'", s)),
    }
}

/// `RE,IM` for a corner of the window.
fn parse_corner(s: &str) -> Result<Complex, String> {
    split_pair(s, ',')
        .map(|(re, im)| Complex::new(re, im))
        .ok_or_else(|| format!("Could not parse corner '{}'", s))
}

/// A thread or band count no smaller than `least`.
fn parse_count(s: &str, least: usize, what: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= least => Ok(n),
        Ok(n) => Err(format!("{} count must be at least {}, got {}", what, least, n)),
        Err(_) => Err(format!("Could not parse {} count '{}'", what.to_lowercase(), s)),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const WORKERS: &str = "workers";
const TRACKS: &str = "tracks";

/// Track counts below one fall back to this.
const FALLBACK_TRACKS: usize = 16;

fn args<'a>() -> ArgMatches<'a> {
    App::new("newton")
        .version("0.1.0")
        .about("Newton-Raphson fractal renderer; reads roots from stdin")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x600")
                .validator(|s| parse_size(&s).map(drop))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2,-2")
                .validator(|s| parse_corner(&s).map(drop))
                .help("Left lower corner of the complex window"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("2,2")
                .validator(|s| parse_corner(&s).map(drop))
                .help("Right upper corner of the complex window"),
        )
        .arg(
            Arg::with_name(WORKERS)
                .required(false)
                .long(WORKERS)
                .short("w")
                .takes_value(true)
                .validator(|s| parse_count(&s, 1, "Worker").map(drop))
                .help("Number of worker threads (default: one per CPU)"),
        )
        .arg(
            Arg::with_name(TRACKS)
                .required(false)
                .long(TRACKS)
                .short("t")
                .takes_value(true)
                .validator(|s| parse_count(&s, 0, "Track").map(drop))
                .help("Number of row bands (default: four per CPU)"),
        )
        .get_matches()
}

/// Reads one root per line until `done` or end of input.
fn read_roots<R: BufRead>(input: R) -> Result<Vec<Complex>, failure::Error> {
    let mut roots = vec![];
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.eq_ignore_ascii_case("done") {
            break;
        }
        if line.is_empty() {
            continue;
        }
        roots.push(line.parse::<Complex>()?);
        eprint!("Root {}> ", roots.len() + 1);
        io::stderr().flush()?;
    }
    Ok(roots)
}

/// An evenly spaced, fully saturated hue for each root; unclassified
/// pixels are black.
fn palette(root_count: usize) -> Vec<[u8; 3]> {
    let hues = (0..root_count).map(|k| {
        let h = 6.0 * (k as f64) / (root_count as f64);
        let x = 1.0 - ((h % 2.0) - 1.0).abs();
        let (r, g, b) = match h as usize {
            0 => (1.0, x, 0.0),
            1 => (x, 1.0, 0.0),
            2 => (0.0, 1.0, x),
            3 => (0.0, x, 1.0),
            4 => (x, 0.0, 1.0),
            _ => (1.0, 0.0, x),
        };
        [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
    });
    std::iter::once([0, 0, 0]).chain(hues).collect()
}

/// Colours each pixel by its root and writes a binary PPM.
fn write_ppm(
    path: &Path,
    fractal: &Fractal,
    width: usize,
    height: usize,
) -> Result<(), failure::Error> {
    let colours = palette(fractal.root_count);
    let rgb: Vec<u8> = fractal
        .data
        .iter()
        .flat_map(|v| colours[usize::from(*v)].iter().cloned())
        .collect();
    let output = File::create(path)?;
    PNMEncoder::new(output)
        .with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary))
        .encode(&rgb[..], width as u32, height as u32, ColorType::RGB(8))?;
    info!("wrote {}x{} image to {}", width, height, path.display());
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let (width, height) = parse_size(matches.value_of(SIZE).unwrap_or_default()).map_err(err_msg)?;
    let leftlower = parse_corner(matches.value_of(LEFTLOWER).unwrap_or_default()).map_err(err_msg)?;
    let rightupper = parse_corner(matches.value_of(RIGHTUPPER).unwrap_or_default()).map_err(err_msg)?;

    let mut config = EngineConfig::default();
    if let Some(workers) = matches.value_of(WORKERS) {
        config = config.with_workers(parse_count(workers, 1, "Worker").map_err(err_msg)?);
    }
    if let Some(tracks) = matches.value_of(TRACKS) {
        let tracks = parse_count(tracks, 0, "Track").map_err(err_msg)?;
        config = config.with_tracks(if tracks < 1 { FALLBACK_TRACKS } else { tracks });
    }

    eprintln!("Please enter at least two roots, one root per line. Enter 'done' when done.");
    eprint!("Root 1> ");
    let stdin = io::stdin();
    let roots = read_roots(stdin.lock())?;
    eprintln!();
    info!("roots: {}", roots.iter().join(", "));

    let rooted = RootedPolynomial::new(Complex::ONE, roots);
    let engine = NewtonEngine::new(rooted, config)?;
    info!("polynomial: {}", engine.polynomial());

    let request = Request {
        plane: ComplexPlane::from_corners(leftlower, rightupper),
        width,
        height,
        id: 0,
    };
    let fractal = engine.produce(&request, &Default::default())?;

    let outfile = matches
        .value_of(OUTPUT)
        .ok_or_else(|| format_err!("No output file given"))?;
    write_ppm(Path::new(outfile), &fractal, width, height)
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
