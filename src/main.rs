#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use ridelog::{cli, geo::TrackBounds, store::TrackStore, types::LocationSample, utils};

#[macro_use]
extern crate ridelog;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    match cli.cmd {
        Some(cli::Cmd::Show { name, dir }) => {
            let store = TrackStore::open(dir)?;
            dlog!("mode=show name={name}");

            let record = store.load(&name)?;

            println!("name:     {}", record.name);
            println!("duration: {}", record.duration_text);
            println!("distance: {} mi", record.distance_miles);
            println!("climbed:  {} ft", record.feet_climbed);
            for (i, segment) in record.segments.iter().enumerate() {
                println!("segment {}: {} samples", i + 1, segment.coords.len());
            }

            let coords: Vec<LocationSample> = record
                .segments
                .iter()
                .flat_map(|s| s.coords.iter().cloned())
                .collect();

            if coords.is_empty() {
                println!("track:    empty");
                return Ok(());
            }

            let bounds = TrackBounds::of(&coords)?;
            let region = bounds.display_region();
            println!(
                "bounds:   lat [{:.5}, {:.5}] lon [{:.5}, {:.5}]",
                bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon
            );
            println!(
                "region:   center ({:.5}, {:.5}) span ({:.5}, {:.5})",
                region.center_lat, region.center_lon, region.lat_span, region.lon_span
            );

            Ok(())
        }
        None => {
            let store = TrackStore::open(&cli.dir)?;
            let names = store.list()?;
            dlog!(
                "mode=list dir={} records={}",
                store.dir().display(),
                names.len()
            );

            if names.is_empty() {
                anyhow::bail!(
                    "No track records found in {}. Finish a workout first.",
                    store.dir().display()
                );
            }

            for (i, name) in names.into_iter().take(cli.count).enumerate() {
                let record = store.load(&name)?;

                if cli.details {
                    println!(
                        "{}\t{}\t{}\t{} mi\t{} samples",
                        i + 1,
                        record.name,
                        record.duration_text,
                        record.distance_miles,
                        record.sample_count()
                    );
                } else {
                    println!(
                        "{}\t{}\t{} mi",
                        record.name, record.duration_text, record.distance_miles
                    );
                }
            }

            Ok(())
        }
    }
}
