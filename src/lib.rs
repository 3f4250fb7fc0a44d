//! # Brickquest
//!
//! A Rust library that compiles tile-based adventure-game maps into brick
//! build manifests, and serializes the rendered result as a gzip-compressed
//! tar of Wavefront OBJ/MTL files.
//!
//! ## Overview
//!
//! Authored screen data (overworld terrain, caves, dungeon rooms, sample
//! sheets) flows through the tile resolver into a part-indexed manifest of
//! placements (position, rotation, scale, color, opacity) which can be
//! serialized as JSON or expanded into geometry instances and exported.
//!
//! ## Quick Start
//!
//! ```ignore
//! use brickquest::{compile, export_archive, instances, ColorSystem, MapSelection};
//!
//! // Compile a map into a placement manifest.
//! let manifest = compile(MapSelection::Overworld, 0.0, true, true)?;
//!
//! // Expand to geometry instances and archive them.
//! let records = instances(&manifest, ColorSystem::Ldraw)?;
//! let file = std::fs::File::create("overworld.tar.gz")?;
//! export_archive(&records, "overworld", file, |screen| {
//!     eprintln!("exporting {screen}");
//! })?;
//! ```

pub mod catalog;
pub mod error;
pub mod export;
pub mod map;
pub mod render;
pub mod tile;
pub mod types;

// Re-export main types for convenience
pub use catalog::color::ColorSystem;
pub use error::{BuilderError, Result};
pub use export::{export_archive, EXPORT_SCALE};
pub use map::{compile, Manifest, MapSelection, Placement};
pub use render::{instances, BoxGeometry, Instance};
pub use types::{Screen, ScreenGrid, TileData, TileGrid};
