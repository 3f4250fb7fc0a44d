//! Shared types used throughout the library.
//!
//! A map is a grid of screens; a screen is a 16x11 grid of optional tile
//! cells; a tile cell names an authored elevation, a base tile stack and an
//! optional sprite overlay.

use serde::Serialize;

use crate::catalog::palette::Palette;
use crate::tile::TileRef;

/// Tiles per screen, horizontally.
pub const SCREEN_COLS: usize = 16;
/// Tiles per screen, vertically.
pub const SCREEN_ROWS: usize = 11;
/// World units per tile (one brick footprint).
pub const BRICK_WIDTH: f32 = 20.0;
/// World units per stacking plate.
pub const PLATE_HEIGHT: f32 = 8.0;

/// Sparse per-piece placement adjustments authored on a tile stack entry.
///
/// All fields default to "not authored"; the compiler substitutes the
/// documented defaults (translate 0, rotate 0, scale 1, opacity 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PlacementOptions {
    /// Extra map-plane offset, in tile units.
    pub translate_x: Option<f32>,
    /// Extra map-plane offset, in tile units.
    pub translate_y: Option<f32>,
    /// Extra vertical offset, in plate levels.
    pub translate_z: Option<f32>,
    /// Rotation around world X, degrees.
    pub rotate_x: Option<f32>,
    /// Rotation around world up, degrees.
    pub rotate_y: Option<f32>,
    /// Rotation around world Z, degrees.
    pub rotate_z: Option<f32>,
    pub scale_x: Option<f32>,
    pub scale_y: Option<f32>,
    pub scale_z: Option<f32>,
    /// Material dissolve; 1.0 when not authored.
    pub opacity: Option<f32>,
}

impl PlacementOptions {
    pub const NONE: PlacementOptions = PlacementOptions {
        translate_x: None,
        translate_y: None,
        translate_z: None,
        rotate_x: None,
        rotate_y: None,
        rotate_z: None,
        scale_x: None,
        scale_y: None,
        scale_z: None,
        opacity: None,
    };

    /// Rotation around the vertical axis only.
    pub const fn spin(degrees: f32) -> Self {
        PlacementOptions {
            rotate_y: Some(degrees),
            ..Self::NONE
        }
    }

    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub const fn opaque(opacity: f32) -> Self {
        PlacementOptions {
            opacity: Some(opacity),
            ..Self::NONE
        }
    }
}

/// One authored cell of a screen's tile grid.
#[derive(Debug, Clone, Copy)]
pub struct TileData {
    /// Terrain height in plate levels, independent of piece stacking.
    pub elevation: i32,
    /// Base tile stack.
    pub base: TileRef,
    /// Optional sprite overlay stack, concatenated above the base.
    pub sprite: Option<TileRef>,
}

impl TileData {
    pub const fn new(elevation: i32, base: TileRef) -> Self {
        Self {
            elevation,
            base,
            sprite: None,
        }
    }

    pub const fn with_sprite(elevation: i32, base: TileRef, sprite: TileRef) -> Self {
        Self {
            elevation,
            base,
            sprite: Some(sprite),
        }
    }
}

/// Rows x columns of optional tile cells. Absent cells produce no output.
pub type TileGrid = Vec<Vec<Option<TileData>>>;

/// One screen of the map: its palettes and its tile grid.
///
/// Most screens use a single palette. Screens with a distinct interior style
/// add a second palette used for tiles strictly inside the 2-tile border.
#[derive(Debug, Clone)]
pub struct Screen {
    pub palettes: Vec<Palette>,
    pub tiles: TileGrid,
}

impl Screen {
    pub fn new(palettes: Vec<Palette>, tiles: TileGrid) -> Self {
        Self { palettes, tiles }
    }

    /// The palette used for the 2-tile border ring.
    pub fn border_palette(&self) -> Palette {
        self.palettes[0]
    }

    /// The palette used strictly inside the border, falling back to the
    /// border palette when no interior palette is authored.
    pub fn interior_palette(&self) -> Palette {
        self.palettes.get(1).copied().unwrap_or(self.palettes[0])
    }
}

/// A full map: a grid of screens, row-major. Empty cells are unused rooms.
pub type ScreenGrid = Vec<Vec<Option<Screen>>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_unauthored() {
        let options = PlacementOptions::default();
        assert_eq!(options, PlacementOptions::NONE);
        assert!(options.opacity.is_none());
    }

    #[test]
    fn spin_sets_only_vertical_rotation() {
        let options = PlacementOptions::spin(90.0);
        assert_eq!(options.rotate_y, Some(90.0));
        assert!(options.rotate_x.is_none());
        assert!(options.rotate_z.is_none());
    }
}
