// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::fmt::Display;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use songdb::config::DriverConfig;
use songdb::song::duration::format_seconds;
use songdb::{
    ArrayDatabase, DatabaseKernel, DatabaseKind, DatabaseSecondary, HashDatabase, SearchField,
    Song, SongOrder,
};
use tracing::{debug, info};

fn print_usage() {
    println!("songdb - Tab-delimited song database");
    println!();
    println!("Usage: songdb [--kind array|hashed] COMMAND");
    println!();
    println!("Commands:");
    println!("  --demo [CONFIG]                   Run the walk-through (CONFIG is .yaml or .toml)");
    println!("  --show FILE                       Print every song in FILE");
    println!("  --search FILE FIELD VALUE         Print songs whose FIELD equals VALUE");
    println!("  --sort FILE ORDER [OUT]           Sort by title|artist|album|length");
    println!("  --split FILE FIELD VALUE OUT      Move matching songs from FILE into OUT");
    println!("  --merge A B OUT                   Write A followed by the songs of B not in A");
    println!("  --help                            Show this help message");
}

fn init_logging(default_filter: &str) {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn print_song(song: &Song) {
    let album = if song.album().is_empty() {
        "-"
    } else {
        song.album()
    };
    println!(
        "{} | {} | {} | {}",
        song.title(),
        song.artist(),
        album,
        song.duration()
    );
}

fn print_songs<'a>(songs: impl IntoIterator<Item = &'a Song>) {
    for song in songs {
        print_song(song);
    }
}

fn parse_field(name: &str) -> Result<SearchField> {
    SearchField::parse(name)
        .ok_or_else(|| anyhow!("Invalid field: {} (title, artist, album)", name))
}

fn load<D: DatabaseKernel>(mut db: D, path: &str) -> Result<D> {
    db.read_from_file(path)
        .with_context(|| format!("Failed to load songs from {}", path))?;
    Ok(db)
}

/// The walk-through: seed, load, write, copy, filter and regroup
fn run_demo<D, F>(config: &DriverConfig, make: F) -> Result<()>
where
    D: DatabaseKernel + Display,
    F: Fn(usize) -> D,
{
    let mut db1 = make(config.capacity);
    info!("Demo using {} database", db1.kind());

    for song in &config.seed {
        db1.add_entry(song.clone());
        print_song(song);
    }

    if let Some(input) = &config.input {
        let added = db1
            .read_from_file(input)
            .with_context(|| format!("Failed to read {:?}", input))?;
        println!("Read {} new songs from {:?}", added, input);
    }

    if let Some(output) = &config.output {
        db1.write_to_file(output)
            .with_context(|| format!("Failed to write {:?}", output))?;
        println!("Wrote {} songs to {:?}", db1.size(), output);
    }

    let mut db2 = db1.new_instance();
    db2.append(&db1);
    debug!("Copy equals original: {}", db2.same_entries(&db1));

    let entries = db2.remove_entries(SearchField::Artist, &config.artist_filter);
    println!(
        "Removed {} songs by {} from the copy",
        entries.len(),
        config.artist_filter
    );

    let mut db3 = make(entries.len());
    db3.add_entries(entries);
    print_songs(db3.entries());

    println!();
    print!("{}", db2);
    Ok(())
}

fn run_command<D, F>(args: &[String], make: F) -> Result<()>
where
    D: DatabaseKernel + Display,
    F: Fn(usize) -> D,
{
    match args[0].as_str() {
        "--show" => {
            let db = load(make(0), arg(args, 1, "FILE")?)?;
            print_songs(db.entries());
            let total: u32 = db.entries().map(Song::seconds).sum::<std::result::Result<u32, _>>()?;
            println!("{} songs, {} total", db.size(), format_seconds(total));
        }
        "--search" => {
            let db = load(make(0), arg(args, 1, "FILE")?)?;
            let field = parse_field(arg(args, 2, "FIELD")?)?;
            let matches = db.get_entries(field, arg(args, 3, "VALUE")?);
            print_songs(&matches);
            println!("{} matching songs", matches.len());
        }
        "--sort" => {
            let mut db = load(make(0), arg(args, 1, "FILE")?)?;
            let name = arg(args, 2, "ORDER")?;
            let order = SongOrder::parse(name)
                .ok_or_else(|| anyhow!("Invalid order: {} (title, artist, album, length)", name))?;
            db.sort(order)?;
            match args.get(3) {
                Some(out) => db.write_to_file(out)?,
                None => print!("{}", db),
            }
        }
        "--split" => {
            let file = arg(args, 1, "FILE")?;
            let mut db = load(make(0), file)?;
            let field = parse_field(arg(args, 2, "FIELD")?)?;
            let split = db.split(field, arg(args, 3, "VALUE")?);
            split.write_to_file(arg(args, 4, "OUT")?)?;
            db.write_to_file(file)?;
            println!("Moved {} songs, {} remain", split.size(), db.size());
        }
        "--merge" => {
            let mut db = load(make(0), arg(args, 1, "A")?)?;
            let other = load(make(0), arg(args, 2, "B")?)?;
            let added = db.append(&other);
            db.write_to_file(arg(args, 3, "OUT")?)?;
            println!("Merged {} new songs, {} total", added, db.size());
        }
        other => {
            eprintln!("Unknown option: {}", other);
            print_usage();
            std::process::exit(1);
        }
    }
    Ok(())
}

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} requires {}", args[0], name))
}

fn dispatch(kind: DatabaseKind, args: &[String], config: &DriverConfig) -> Result<()> {
    let demo = args[0] == "--demo";
    match (kind, demo) {
        (DatabaseKind::Array, true) => run_demo(config, ArrayDatabase::with_capacity),
        (DatabaseKind::Hashed, true) => run_demo(config, HashDatabase::with_capacity),
        (DatabaseKind::Array, false) => run_command(args, ArrayDatabase::with_capacity),
        (DatabaseKind::Hashed, false) => run_command(args, HashDatabase::with_capacity),
    }
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut kind = None;
    if let Some(pos) = args.iter().position(|a| a == "--kind") {
        let name = args
            .get(pos + 1)
            .ok_or_else(|| anyhow!("--kind requires array or hashed"))?;
        kind = Some(DatabaseKind::parse(name).ok_or_else(|| anyhow!("Invalid kind: {}", name))?);
        args.remove(pos + 1);
        args.remove(pos);
    }

    if args.is_empty() {
        println!("songdb - Tab-delimited song database");
        println!("Run with --help for usage information");
        return Ok(());
    }

    if args[0] == "--help" || args[0] == "-h" {
        print_usage();
        return Ok(());
    }

    let config = match (args[0].as_str(), args.get(1)) {
        ("--demo", Some(path)) => DriverConfig::load(Path::new(path))?,
        _ => DriverConfig::default(),
    };
    init_logging(&config.log_filter);

    dispatch(kind.unwrap_or(config.kind), &args, &config)
}
