//! The piece catalog: every buildable unit type.
//!
//! A piece knows its stacking height, the level within that height where it
//! seats, and optionally the studded piece to substitute when a sprite sits
//! on top of it. Pieces with no part identity are geometry-only fillers that
//! never reach the output manifest.

use std::fmt;

use serde::{Serialize, Serializer};

/// Physical identity of a piece, used to group the manifest.
///
/// Most pieces are numbered catalog parts; procedural shapes (the elevation
/// filler box) carry a shape name instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartId {
    Part(u32),
    Shape(&'static str),
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartId::Part(number) => write!(f, "{}", number),
            PartId::Shape(name) => write!(f, "{}", name),
        }
    }
}

impl Serialize for PartId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One buildable unit type. Immutable, defined once below.
#[derive(Debug)]
pub struct Piece {
    /// Part identity, absent for non-physical fillers.
    pub part: Option<PartId>,
    /// Height in stacking plates.
    pub plate_height: i32,
    /// Vertical seating offset within the piece's own height.
    pub plate_level: i32,
    /// Studded substitute used when a sprite overlays this piece.
    pub stud_replacement: Option<&'static Piece>,
    /// Display name, used in piece instance names.
    pub name: &'static str,
}

impl Piece {
    const fn new(
        part: Option<PartId>,
        plate_height: i32,
        plate_level: i32,
        stud_replacement: Option<&'static Piece>,
        name: &'static str,
    ) -> Self {
        Self {
            part,
            plate_height,
            plate_level,
            stud_replacement,
            name,
        }
    }
}

const fn part(number: u32) -> Option<PartId> {
    Some(PartId::Part(number))
}

// Full-height bricks.
pub static BRICK: Piece = Piece::new(part(3005), 3, 3, None, "brick");
pub static BRICK_HEADLIGHT: Piece = Piece::new(part(4070), 3, 3, None, "brick_headlight");
pub static INVERTED_CONE: Piece = Piece::new(part(11610), 3, 3, None, "inverted_cone");

// Two-thirds bricks.
pub static BRICK_2_3RD: Piece = Piece::new(part(86996), 2, 2, None, "brick_2_3rd");
pub static BRICK_2_3RD_ROUND_TABS: Piece =
    Piece::new(part(33286), 2, 2, None, "brick_2_3rd_round_tabs");
pub static BRICK_2_3RD_SLOPE: Piece = Piece::new(part(54200), 2, 0, None, "brick_2_3rd_slope");
pub static BRICK_2_3RD_SLOPE_CURVED: Piece =
    Piece::new(part(49307), 2, 0, None, "brick_2_3rd_slope_curved");
pub static BRICK_2_3RD_SLOPE_PYRAMID: Piece =
    Piece::new(part(22388), 2, 0, None, "brick_2_3rd_slope_pyramid");
pub static BRICK_2_3RD_SLOPE_TRIANGLE: Piece =
    Piece::new(part(35464), 2, 0, None, "brick_2_3rd_slope_triangle");

// Plates.
pub static PLATE: Piece = Piece::new(part(3024), 1, 1, None, "plate");
pub static PLATE_CLIP_TOP: Piece = Piece::new(part(15712), 1, 1, None, "plate_clip_top");
pub static PLATE_ROUND_DOT: Piece = Piece::new(part(6141), 1, 1, None, "plate_round_dot");
pub static PLATE_ROUND_TABS: Piece = Piece::new(part(33291), 1, 1, None, "plate_round_tabs");
pub static PLATE_SWIRL: Piece = Piece::new(part(15470), 2, 0, None, "plate_swirl");
pub static PLATE_LIGHT_ATTACHMENT: Piece =
    Piece::new(part(4081), 1, 1, None, "plate_light_attachment");
pub static PLATE_BAR_SIDE: Piece = Piece::new(part(26047), 1, 1, None, "plate_bar_side");
pub static PLATE_CLIP_VERTICAL_SIDE: Piece =
    Piece::new(part(4085), 1, 1, None, "plate_clip_vertical_side");
pub static PLATE_CLIP_HORIZONTAL_SIDE: Piece =
    Piece::new(part(61252), 1, 1, None, "plate_clip_horizontal_side");

// Smooth tiles. Each declares the studded plate it reverts to when a sprite
// must sit on top of it. 3070b would add a groove.
pub static TILE: Piece = Piece::new(part(3070), 1, 1, Some(&PLATE), "tile");
pub static TILE_HALF_CIRCLE: Piece =
    Piece::new(part(24246), 1, 1, Some(&PLATE_ROUND_DOT), "tile_half_circle");
pub static TILE_HEART: Piece = Piece::new(part(39739), 1, 1, None, "tile_heart");
pub static TILE_QUARTER_CIRCLE: Piece =
    Piece::new(part(25269), 1, 1, Some(&PLATE_ROUND_DOT), "tile_quarter_circle");
pub static TILE_ROUND_DOT: Piece =
    Piece::new(part(35381), 1, 1, Some(&PLATE_ROUND_DOT), "tile_round_dot");

/// Scalable unit box used to fill the void under elevated screens. Carries a
/// shape identity so the filler reaches the manifest like any other piece.
pub static BOX: Piece = Piece::new(Some(PartId::Shape("box")), 1, 1, None, "box");

/// Geometry-less spacer that raises a wall stack by two plates. No part
/// identity, so the compiler resolves it for height but never emits it.
pub static RAISER_2: Piece = Piece::new(None, 2, 2, None, "raiser2");

// Role aliases used by the water and ground tile stacks.
pub static WATER_PIECE_UNDER: &Piece = &PLATE_ROUND_DOT;
pub static WATER_PIECE_TOP: &Piece = &PLATE_ROUND_DOT;
pub static GROUND_PIECE_UNDER: &Piece = &PLATE;
pub static GROUND_PIECE_TOP: &Piece = &TILE;

/// Every declared piece, for part lookups and inventory reporting.
pub static CATALOG: &[&Piece] = &[
    &BRICK,
    &BRICK_HEADLIGHT,
    &INVERTED_CONE,
    &BRICK_2_3RD,
    &BRICK_2_3RD_ROUND_TABS,
    &BRICK_2_3RD_SLOPE,
    &BRICK_2_3RD_SLOPE_CURVED,
    &BRICK_2_3RD_SLOPE_PYRAMID,
    &BRICK_2_3RD_SLOPE_TRIANGLE,
    &PLATE,
    &PLATE_CLIP_TOP,
    &PLATE_ROUND_DOT,
    &PLATE_ROUND_TABS,
    &PLATE_SWIRL,
    &PLATE_LIGHT_ATTACHMENT,
    &PLATE_BAR_SIDE,
    &PLATE_CLIP_VERTICAL_SIDE,
    &PLATE_CLIP_HORIZONTAL_SIDE,
    &TILE,
    &TILE_HALF_CIRCLE,
    &TILE_HEART,
    &TILE_QUARTER_CIRCLE,
    &TILE_ROUND_DOT,
    &BOX,
    &RAISER_2,
];

pub fn by_part(part_id: PartId) -> Option<&'static Piece> {
    CATALOG
        .iter()
        .copied()
        .find(|piece| piece.part == Some(part_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_tiles_declare_stud_replacements() {
        assert_eq!(TILE.stud_replacement.unwrap().part, part(3024));
        assert_eq!(TILE_ROUND_DOT.stud_replacement.unwrap().part, part(6141));
        assert!(TILE_HEART.stud_replacement.is_none());
    }

    #[test]
    fn fillers_have_expected_identity() {
        assert_eq!(BOX.part, Some(PartId::Shape("box")));
        assert!(RAISER_2.part.is_none());
        assert_eq!(RAISER_2.plate_height, 2);
    }

    #[test]
    fn catalog_lookup_by_part() {
        assert_eq!(by_part(PartId::Part(3005)).unwrap().name, "brick");
        assert_eq!(by_part(PartId::Shape("box")).unwrap().name, "box");
        assert!(by_part(PartId::Part(1)).is_none());
    }

    #[test]
    fn part_id_display() {
        assert_eq!(PartId::Part(3005).to_string(), "3005");
        assert_eq!(PartId::Shape("box").to_string(), "box");
    }
}
