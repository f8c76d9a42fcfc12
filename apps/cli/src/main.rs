// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! PlanLite CLI - inspect and edit floor-plan project files.
//!
//! # Commands
//!
//! - `diagram <file>` - ASCII diagram of every floor
//! - `report <file> [-o out]` - full text report
//! - `adjacency <file> --room <id>` - walls a room shares with others
//! - `open <file> --room <id> --neighbor <id>` - open the shared wall
//! - `move <file> --room <id> --dx <px> --dy <px>` - drop a room at an offset
//! - `resize <file> --room <id> --handle <grip> --dx <px> --dy <px>` - drag a resize grip
//! - `sunlight <file> [--azimuth <deg>] [--floor <n>]` - light wedges as JSON
//! - `resave <file>` - reformat and refresh the diagram cache

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use planlite_core::Vector2;
use planlite_geometry::Handle;

mod commands;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "planlite")]
#[command(version, about = "Floor-plan project tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ASCII diagram for all floors
    Diagram { file: PathBuf },
    /// Print the text report, or write it with -o
    Report {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the rooms sharing a wall with a room
    Adjacency {
        file: PathBuf,
        #[arg(long)]
        room: String,
    },
    /// Add a matched opening between two adjacent rooms
    Open {
        file: PathBuf,
        #[arg(long)]
        room: String,
        #[arg(long)]
        neighbor: String,
        /// Write here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Move a room by a pixel offset and drop it
    Move {
        file: PathBuf,
        #[arg(long)]
        room: String,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        dx: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        dy: f64,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Drag one of a room's eight resize grips by a pixel offset
    Resize {
        file: PathBuf,
        #[arg(long)]
        room: String,
        /// top-left, top, top-right, left, right, bottom-left, bottom or bottom-right
        #[arg(long)]
        handle: Handle,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        dx: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        dy: f64,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print light wedges for a sun azimuth as JSON
    Sunlight {
        file: PathBuf,
        /// Degrees clockwise from north (defaults to PLANLITE_AZIMUTH)
        #[arg(long, allow_hyphen_values = true)]
        azimuth: Option<f64>,
        #[arg(long)]
        floor: Option<u32>,
    },
    /// Rewrite a project with a fresh diagram cache
    Resave {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.clone())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = config.transform_options();

    let output = match cli.command {
        Commands::Diagram { file } => commands::diagram(&file)?,
        Commands::Report { file, output } => commands::report(&file, output.as_deref())?,
        Commands::Adjacency { file, room } => commands::adjacency(&file, &room)?,
        Commands::Open {
            file,
            room,
            neighbor,
            output,
        } => commands::open(&file, &room, &neighbor, output.as_deref())?,
        Commands::Move {
            file,
            room,
            dx,
            dy,
            output,
        } => commands::transform(
            &file,
            &room,
            None,
            Vector2::new(dx, dy),
            &options,
            output.as_deref(),
        )?,
        Commands::Resize {
            file,
            room,
            handle,
            dx,
            dy,
            output,
        } => commands::transform(
            &file,
            &room,
            Some(handle),
            Vector2::new(dx, dy),
            &options,
            output.as_deref(),
        )?,
        Commands::Sunlight {
            file,
            azimuth,
            floor,
        } => commands::sunlight(&file, azimuth.unwrap_or(config.azimuth), floor)?,
        Commands::Resave { file, output } => commands::resave(&file, output.as_deref())?,
    };

    println!("{output}");
    Ok(())
}
