//! The map compiler: folds a mode's screen grid into a placement manifest.
//!
//! Compilation is a pure, synchronous pass over static authored data. For a
//! fixed input the manifest content and per-bucket placement order are
//! exactly reproducible: screens are visited grid-row-major, tiles
//! screen-row-major, and each tile's resolved stack in stacking order.

pub mod caves;
pub mod overworld;
pub mod samples;
pub mod underworld;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::Serializer;
use serde::Serialize;

use crate::catalog::color::NesColor;
use crate::catalog::piece::PartId;
use crate::error::{BuilderError, Result};
use crate::tile;
use crate::types::{Screen, ScreenGrid, BRICK_WIDTH, PLATE_HEIGHT, SCREEN_COLS, SCREEN_ROWS};

/// Which map to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapSelection {
    Overworld,
    Caves,
    Underworld,
    /// Palette, sprite and tile-variant sample screens.
    Samples,
}

impl MapSelection {
    pub fn name(self) -> &'static str {
        match self {
            MapSelection::Overworld => "overworld",
            MapSelection::Caves => "caves",
            MapSelection::Underworld => "underworld",
            MapSelection::Samples => "samples",
        }
    }

    /// Build this mode's full screen grid.
    pub fn screen_grid(self) -> Result<ScreenGrid> {
        match self {
            MapSelection::Overworld => Ok(overworld::screen_grid()),
            MapSelection::Caves => Ok(caves::screen_grid()),
            MapSelection::Underworld => underworld::screen_grid(),
            MapSelection::Samples => Ok(samples::screen_grid()),
        }
    }
}

impl FromStr for MapSelection {
    type Err = BuilderError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "overworld" => Ok(MapSelection::Overworld),
            "caves" => Ok(MapSelection::Caves),
            "underworld" => Ok(MapSelection::Underworld),
            "samples" => Ok(MapSelection::Samples),
            other => Err(BuilderError::UnknownMap(other.to_string())),
        }
    }
}

impl fmt::Display for MapSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One resolved piece placement, ready for instancing or archival.
#[derive(Debug, Clone, Serialize)]
pub struct Placement {
    pub position_x: f32,
    pub position_y: f32,
    pub position_z: f32,
    /// Radians. X carries the authored value plus the half-turn that flips
    /// pieces right side up; they are authored upside-down.
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub rotation_z: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub scale_z: f32,
    #[serde(serialize_with = "serialize_rgb")]
    pub color: &'static NesColor,
    pub opacity: f32,
    pub screen_name: String,
    pub piece_name: String,
}

fn serialize_rgb<S: Serializer>(
    color: &&'static NesColor,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{:06x}", color.rgb))
}

/// Opacity bucket key in permille, so buckets order and compare exactly.
pub type OpacityKey = u16;

pub fn opacity_key(opacity: f32) -> OpacityKey {
    (opacity * 1000.0).round() as OpacityKey
}

pub type OpacityBuckets = BTreeMap<OpacityKey, Vec<Placement>>;

/// Placements bucketed by physical part, then by opacity. One bucket maps
/// to one instanced draw batch downstream.
#[derive(Debug, Default, Serialize)]
pub struct Manifest(BTreeMap<PartId, OpacityBuckets>);

impl Manifest {
    fn push(&mut self, part: PartId, opacity: f32, placement: Placement) {
        self.0
            .entry(part)
            .or_default()
            .entry(opacity_key(opacity))
            .or_default()
            .push(placement);
    }

    pub fn parts(&self) -> impl Iterator<Item = (&PartId, &OpacityBuckets)> {
        self.0.iter()
    }

    /// Every placement, in part-then-opacity-then-insertion order.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.0
            .values()
            .flat_map(|buckets| buckets.values())
            .flatten()
    }

    /// Placements regrouped per screen, ordered by screen label.
    pub fn by_screen(&self) -> BTreeMap<&str, Vec<&Placement>> {
        let mut screens: BTreeMap<&str, Vec<&Placement>> = BTreeMap::new();
        for placement in self.placements() {
            screens
                .entry(placement.screen_name.as_str())
                .or_default()
                .push(placement);
        }
        screens
    }

    pub fn len(&self) -> usize {
        self.placements().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compile a map into a placement manifest.
///
/// `gap_size` inserts extra world units between screens for a cutaway look.
/// `show_sprites` includes sprite overlays; `show_elevation` honors authored
/// terrain elevation instead of flattening everything to level zero.
pub fn compile(
    map: MapSelection,
    gap_size: f32,
    show_sprites: bool,
    show_elevation: bool,
) -> Result<Manifest> {
    let grid = map.screen_grid()?;
    let grid_cols = grid.iter().map(Vec::len).max().unwrap_or(0);
    let world_cols = (grid_cols * SCREEN_COLS) as f32;
    let world_rows = (grid.len() * SCREEN_ROWS) as f32;

    let mut manifest = Manifest::default();
    for (grid_y, row) in grid.iter().enumerate() {
        for (grid_x, screen) in row.iter().enumerate() {
            if let Some(screen) = screen {
                add_screen(
                    &mut manifest,
                    screen,
                    grid_x,
                    grid_y,
                    world_cols,
                    world_rows,
                    gap_size,
                    show_sprites,
                    show_elevation,
                );
            }
        }
    }
    Ok(manifest)
}

/// Screen label: column letter plus 1-based row, "A1" for the origin.
pub fn screen_label(grid_x: usize, grid_y: usize) -> String {
    format!("{}{}", (b'A' + grid_x as u8) as char, grid_y + 1)
}

/// Map a tile coordinate to a world position along one axis.
///
/// Screens lay out edge to edge in tile units centered on the world origin;
/// the gap term then spreads whole screens apart, also centered.
fn to_position(
    coord: f32,
    translate: Option<f32>,
    world_size: f32,
    screen_size: f32,
    gap_size: f32,
) -> f32 {
    let centered = coord + translate.unwrap_or(0.0) - world_size / 2.0;
    centered * BRICK_WIDTH
        + BRICK_WIDTH / 2.0
        + ((coord / screen_size).floor() + 0.5) * gap_size
}

#[allow(clippy::too_many_arguments)]
fn add_screen(
    manifest: &mut Manifest,
    screen: &Screen,
    grid_x: usize,
    grid_y: usize,
    world_cols: f32,
    world_rows: f32,
    gap_size: f32,
    show_sprites: bool,
    show_elevation: bool,
) {
    let screen_name = screen_label(grid_x, grid_y);
    for (screen_y, tile_row) in screen.tiles.iter().enumerate() {
        for (screen_x, cell) in tile_row.iter().enumerate() {
            let Some(cell) = cell else { continue };

            let interior = screen_x > 1
                && screen_x < SCREEN_COLS - 2
                && screen_y > 1
                && screen_y < SCREEN_ROWS - 2;
            let palette = if interior {
                screen.interior_palette()
            } else {
                screen.border_palette()
            };

            let map_x = (grid_x * SCREEN_COLS + screen_x) as f32;
            let map_y = (grid_y * SCREEN_ROWS + screen_y) as f32;
            let elevation = if show_elevation { cell.elevation } else { 0 };
            let sprite = if show_sprites { cell.sprite } else { None };

            for (level, tile_piece) in tile::resolve(cell.base, sprite, elevation) {
                // Identity-null pieces raise the stack but place nothing.
                let Some(part) = tile_piece.piece.part else {
                    continue;
                };
                let options = tile_piece.options;
                let opacity = options.opacity.unwrap_or(1.0);
                let piece_name = format!(
                    "{}_{:02},{:02},{:02}_{}_{}",
                    screen_name,
                    screen_x + 1,
                    screen_y + 1,
                    level,
                    part,
                    tile_piece.piece.name,
                )
                .replace(' ', "_");

                let placement = Placement {
                    position_x: to_position(
                        map_x,
                        options.translate_x,
                        world_cols,
                        SCREEN_COLS as f32,
                        gap_size,
                    ),
                    position_y: PLATE_HEIGHT
                        * (level as f32 + options.translate_z.unwrap_or(0.0)),
                    position_z: to_position(
                        map_y,
                        options.translate_y,
                        world_rows,
                        SCREEN_ROWS as f32,
                        gap_size,
                    ),
                    rotation_x: (options.rotate_x.unwrap_or(0.0) + 180.0).to_radians(),
                    rotation_y: options.rotate_y.unwrap_or(0.0).to_radians(),
                    rotation_z: options.rotate_z.unwrap_or(0.0).to_radians(),
                    scale_x: options.scale_x.unwrap_or(1.0),
                    scale_y: options.scale_y.unwrap_or(1.0),
                    scale_z: options.scale_z.unwrap_or(1.0),
                    color: palette.resolve(tile_piece.color),
                    opacity,
                    screen_name: screen_name.clone(),
                    piece_name,
                };
                manifest.push(part, opacity, placement);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::palette;
    use crate::tile::tiles;
    use crate::types::TileData;

    #[test]
    fn origin_tile_position_with_gap() {
        // Tile 0 on a 256-tile axis with a 4-unit gap.
        let position = to_position(0.0, None, 256.0, 16.0, 4.0);
        assert_eq!(position, -2548.0);
    }

    #[test]
    fn gap_advances_once_per_screen_boundary() {
        let near = to_position(15.0, None, 256.0, 16.0, 4.0);
        let far = to_position(16.0, None, 256.0, 16.0, 4.0);
        // One tile step plus one whole gap.
        assert_eq!(far - near, BRICK_WIDTH + 4.0);
    }

    #[test]
    fn screen_labels_run_letter_then_row() {
        assert_eq!(screen_label(0, 0), "A1");
        assert_eq!(screen_label(6, 9), "G10");
        assert_eq!(screen_label(15, 7), "P8");
    }

    #[test]
    fn unknown_map_names_are_rejected() {
        assert!(MapSelection::from_str("overworld").is_ok());
        assert!(matches!(
            MapSelection::from_str("dark_world"),
            Err(BuilderError::UnknownMap(_))
        ));
    }

    fn one_tile_screen(tile: crate::tile::TileRef) -> Screen {
        let mut tiles: crate::types::TileGrid =
            (0..SCREEN_ROWS).map(|_| vec![None; SCREEN_COLS]).collect();
        tiles[0][0] = Some(TileData::new(0, tile));
        tiles[5][5] = Some(TileData::new(0, tile));
        Screen::new(vec![palette::CAVE, palette::TEXT], tiles)
    }

    #[test]
    fn interior_tiles_use_the_second_palette() {
        let screen = one_tile_screen(&tiles::GROUND);
        let mut manifest = Manifest::default();
        add_screen(&mut manifest, &screen, 0, 0, 16.0, 11.0, 0.0, true, true);

        let placements: Vec<&Placement> = manifest.placements().collect();
        let border = placements
            .iter()
            .find(|p| p.piece_name.contains("01,01"))
            .unwrap();
        let interior = placements
            .iter()
            .find(|p| p.piece_name.contains("06,06"))
            .unwrap();
        // GROUND's first piece colors with the primary role.
        assert_eq!(border.color, palette::CAVE.primary);
        assert_eq!(interior.color, palette::TEXT.primary);
    }

    #[test]
    fn piece_names_carry_screen_tile_level_and_part() {
        let screen = one_tile_screen(&tiles::GROUND);
        let mut manifest = Manifest::default();
        add_screen(&mut manifest, &screen, 2, 4, 16.0, 11.0, 0.0, true, true);

        let names: Vec<&str> = manifest
            .placements()
            .map(|p| p.piece_name.as_str())
            .collect();
        assert!(names.contains(&"C5_01,01,02_86996_brick_2_3rd"));
        assert!(names.contains(&"C5_01,01,03_3070_tile"));
    }

    #[test]
    fn compile_output_is_reproducible() {
        let first = compile(MapSelection::Overworld, 4.0, true, true).unwrap();
        let second = compile(MapSelection::Overworld, 4.0, true, true).unwrap();
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
        assert!(!first.is_empty());
    }

    #[test]
    fn flattening_elevation_drops_the_filler_boxes() {
        let raised = compile(MapSelection::Caves, 0.0, false, true).unwrap();
        let flat = compile(MapSelection::Caves, 0.0, false, false).unwrap();
        let boxes = |manifest: &Manifest| {
            manifest
                .parts()
                .filter(|(part, _)| matches!(part, PartId::Shape("box")))
                .count()
        };
        assert_eq!(boxes(&raised), 1);
        assert_eq!(boxes(&flat), 0);
    }
}
