//! Tile resolution: turning an authored stack-of-pieces into leveled pieces.
//!
//! A tile is an ordered stack of [`TilePiece`] entries. Resolving a tile
//! walks the stack bottom-up, tracking the cumulative plate level, applies
//! the stud-replacement substitution when a sprite overlay is present, and
//! inserts a filler box under elevated tiles so no void is visible.

pub mod text;
pub mod text_floor;
pub mod tiles;

use crate::catalog::palette::ColorRef;
use crate::catalog::piece::{self, Piece};
use crate::types::{PlacementOptions, BRICK_WIDTH, PLATE_HEIGHT};

/// One entry in a tile stack: a piece, its color (role or literal), and its
/// sparse placement adjustments.
#[derive(Debug, Clone, Copy)]
pub struct TilePiece {
    pub piece: &'static Piece,
    pub color: ColorRef,
    pub options: PlacementOptions,
}

impl TilePiece {
    pub const fn new(piece: &'static Piece, color: ColorRef, options: PlacementOptions) -> Self {
        Self {
            piece,
            color,
            options,
        }
    }
}

/// A handle to an authored tile stack.
pub type TileRef = &'static [TilePiece];

/// A resolved stack entry: the plate level the piece seats at, and the piece.
pub type LevelEntry = (i32, TilePiece);

/// Resolve a tile into its ordered (level, piece) sequence.
///
/// When a sprite overlay is present and the top base piece declares a stud
/// replacement, that one piece is substituted before the overlay is
/// concatenated; the substitution is applied exactly once and never
/// recursively. An empty base under a sprite overlay is legal.
///
/// `elevation` is the tile's terrain height in plate levels. A positive
/// elevation first yields a box scaled to fill the space below the tile,
/// then seats the stack on top of it.
pub fn resolve(base: TileRef, sprite: Option<TileRef>, elevation: i32) -> Vec<LevelEntry> {
    let mut stack: Vec<TilePiece> = Vec::with_capacity(base.len() + sprite.map_or(0, |s| s.len()));
    stack.extend_from_slice(base);

    if let Some(sprite) = sprite {
        if let Some(top) = stack.last_mut() {
            if let Some(replacement) = top.piece.stud_replacement {
                top.piece = replacement;
            }
        }
        stack.extend_from_slice(sprite);
    }

    let mut entries = Vec::with_capacity(stack.len() + 1);
    let mut level = elevation;

    if elevation > 0 {
        entries.push((
            elevation,
            TilePiece::new(
                &piece::BOX,
                ColorRef::Primary,
                PlacementOptions {
                    scale_x: Some(BRICK_WIDTH / 2.0),
                    scale_y: Some(PLATE_HEIGHT * elevation as f32),
                    scale_z: Some(BRICK_WIDTH / 2.0),
                    ..PlacementOptions::NONE
                },
            ),
        ));
    }

    for tile_piece in stack {
        entries.push((level + tile_piece.piece.plate_level, tile_piece));
        level += tile_piece.piece.plate_height;
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::color;

    fn heights(entries: &[LevelEntry]) -> Vec<i32> {
        entries.iter().map(|(level, _)| *level).collect()
    }

    // A tall smooth piece that seats at its own base, for exercising the
    // accumulator with heights [2,1,3] and seating levels [0,1,0].
    static TALL_SMOOTH: Piece = Piece {
        part: Some(crate::catalog::piece::PartId::Part(99999)),
        plate_height: 3,
        plate_level: 0,
        stud_replacement: None,
        name: "tall_smooth",
    };

    static STACK: [TilePiece; 3] = [
        TilePiece::new(
            &piece::BRICK_2_3RD_SLOPE,
            ColorRef::Primary,
            PlacementOptions::NONE,
        ),
        TilePiece::new(&piece::PLATE, ColorRef::Secondary, PlacementOptions::NONE),
        TilePiece::new(&TALL_SMOOTH, ColorRef::Background, PlacementOptions::NONE),
    ];

    #[test]
    fn levels_accumulate_piece_heights() {
        let entries = resolve(&STACK, None, 0);
        assert_eq!(entries.len(), 3);
        // Slope seats at 0, the plate a level above the slope's 2-plate
        // height, the tall piece at the 3-plate running total.
        assert_eq!(heights(&entries), vec![0, 3, 3]);
    }

    #[test]
    fn elevation_shifts_stack_and_inserts_filler() {
        let entries = resolve(&STACK, None, 5);
        assert_eq!(entries.len(), 4);
        let (filler_level, filler) = &entries[0];
        assert_eq!(*filler_level, 5);
        assert!(filler.piece.part == Some(crate::catalog::piece::PartId::Shape("box")));
        assert_eq!(filler.options.scale_y, Some(PLATE_HEIGHT * 5.0));
        assert_eq!(heights(&entries[1..]), vec![5, 8, 8]);
    }

    #[test]
    fn zero_elevation_emits_no_filler() {
        let entries = resolve(&STACK, None, 0);
        assert!(entries
            .iter()
            .all(|(_, tile_piece)| tile_piece.piece.part != Some(
                crate::catalog::piece::PartId::Shape("box")
            )));
    }

    static SMOOTH_TOP: [TilePiece; 2] = [
        TilePiece::new(&piece::PLATE, ColorRef::Primary, PlacementOptions::NONE),
        TilePiece::new(
            &piece::TILE,
            ColorRef::Background,
            PlacementOptions::spin(90.0),
        ),
    ];

    static SPRITE: [TilePiece; 1] = [TilePiece::new(
        &piece::PLATE_ROUND_DOT,
        ColorRef::Literal(&color::RED),
        PlacementOptions::NONE,
    )];

    #[test]
    fn sprite_overlay_swaps_top_for_stud_replacement() {
        let entries = resolve(&SMOOTH_TOP, Some(&SPRITE), 0);
        assert_eq!(entries.len(), 3);
        // The smooth tile reverts to its studded plate, keeping its color
        // and authored options.
        let (_, swapped) = &entries[1];
        assert_eq!(swapped.piece.name, "plate");
        assert_eq!(swapped.options.rotate_y, Some(90.0));
        let (sprite_level, sprite_piece) = &entries[2];
        assert_eq!(sprite_piece.piece.name, "plate_round_dot");
        assert_eq!(*sprite_level, 3);
    }

    #[test]
    fn no_sprite_means_no_substitution() {
        let entries = resolve(&SMOOTH_TOP, None, 0);
        let (_, top) = &entries[1];
        assert_eq!(top.piece.name, "tile");
    }

    #[test]
    fn empty_base_with_sprite_is_legal() {
        let entries = resolve(&[], Some(&SPRITE), 0);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, 1);
    }
}
