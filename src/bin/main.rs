//! Brickquest CLI
//!
//! Compile adventure-game maps into build manifests and mesh archives.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;

use brickquest::catalog::piece;
use brickquest::{compile, export_archive, instances, ColorSystem, MapSelection};

#[derive(Parser)]
#[command(name = "brickquest")]
#[command(author, version, about = "Compile tile maps into brick build manifests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a map and write its placement manifest as JSON
    Compile {
        /// Map to compile
        #[arg(short, long, value_enum, default_value = "overworld")]
        map: MapArg,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Extra world units inserted between screens
        #[arg(long, default_value = "0")]
        gap: f32,

        /// Leave out enemy and character overlays
        #[arg(long)]
        no_sprites: bool,

        /// Flatten terrain elevation to ground level
        #[arg(long)]
        no_elevation: bool,
    },

    /// Compile a map and export it as a tar.gz of OBJ/MTL files
    Export {
        /// Map to export
        #[arg(short, long, value_enum, default_value = "overworld")]
        map: MapArg,

        /// Output archive path
        #[arg(short, long)]
        output: PathBuf,

        /// Extra world units inserted between screens
        #[arg(long, default_value = "0")]
        gap: f32,

        /// Leave out enemy and character overlays
        #[arg(long)]
        no_sprites: bool,

        /// Flatten terrain elevation to ground level
        #[arg(long)]
        no_elevation: bool,

        /// Palette system colors are resolved in
        #[arg(long, value_enum, default_value = "ldraw")]
        colors: ColorArg,
    },

    /// Show part usage statistics for a map
    Info {
        /// Map to inspect
        #[arg(short, long, value_enum, default_value = "overworld")]
        map: MapArg,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum MapArg {
    Overworld,
    Caves,
    Underworld,
    Samples,
}

impl From<MapArg> for MapSelection {
    fn from(arg: MapArg) -> Self {
        match arg {
            MapArg::Overworld => MapSelection::Overworld,
            MapArg::Caves => MapSelection::Caves,
            MapArg::Underworld => MapSelection::Underworld,
            MapArg::Samples => MapSelection::Samples,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    /// Source console palette
    Nes,
    /// Brick part-color palette
    Ldraw,
}

impl From<ColorArg> for ColorSystem {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Nes => ColorSystem::Nes,
            ColorArg::Ldraw => ColorSystem::Ldraw,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            map,
            output,
            gap,
            no_sprites,
            no_elevation,
        } => {
            let map = MapSelection::from(map);
            let manifest = compile(map, gap, !no_sprites, !no_elevation)?;
            fs::write(&output, manifest.to_json()?)?;
            println!(
                "Wrote {} placements for {} to {}",
                manifest.len(),
                map,
                output.display()
            );
        }

        Commands::Export {
            map,
            output,
            gap,
            no_sprites,
            no_elevation,
            colors,
        } => {
            let map = MapSelection::from(map);
            let manifest = compile(map, gap, !no_sprites, !no_elevation)?;
            let records = instances(&manifest, colors.into())?;
            let file = fs::File::create(&output)?;
            export_archive(&records, map.name(), file, |screen| {
                println!("Exporting screen {}", screen);
            })?;
            println!(
                "Wrote {} instances across the archive to {}",
                records.len(),
                output.display()
            );
        }

        Commands::Info { map } => {
            let map = MapSelection::from(map);
            let manifest = compile(map, 0.0, true, true)?;
            println!("Map: {}", map);
            println!("Placements: {}", manifest.len());
            for (part_id, buckets) in manifest.parts() {
                let count: usize = buckets.values().map(Vec::len).sum();
                let name = piece::by_part(*part_id)
                    .map(|piece| piece.name)
                    .unwrap_or("unknown");
                println!("  {:>8} {:<28} x{}", part_id.to_string(), name, count);
            }
        }
    }

    Ok(())
}
