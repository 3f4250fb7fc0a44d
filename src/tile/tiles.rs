//! The authored tile catalog: every named stack-of-pieces the screen
//! compilers place.
//!
//! Stacks read bottom-up. Colors are usually roles so one tile definition
//! serves every region palette; literal colors pin sprite details that never
//! restyle. All stacks are plain statics built in the piece catalog's
//! dependency order.

use crate::catalog::color;
use crate::catalog::palette::ColorRef;
use crate::catalog::piece as p;
use crate::tile::{TilePiece, TileRef};
use crate::types::PlacementOptions;

use ColorRef::{Background, Primary, Secondary};

/// Opacity used for water surfaces. Raise above 1.0 is meaningless; lower
/// for see-through water.
pub const WATER_OPACITY: f32 = 1.0;
/// Opacity for ghostly or glassy sprite bases.
pub const CLEAR_OPACITY: f32 = 0.5;

const NONE: PlacementOptions = PlacementOptions::NONE;

const fn lit(color: &'static color::NesColor) -> ColorRef {
    ColorRef::Literal(color)
}

const fn spin(degrees: f32) -> PlacementOptions {
    PlacementOptions::spin(degrees)
}

const fn water() -> PlacementOptions {
    PlacementOptions::opaque(WATER_OPACITY)
}

const fn piece(
    piece: &'static p::Piece,
    color: ColorRef,
    options: PlacementOptions,
) -> TilePiece {
    TilePiece::new(piece, color, options)
}

// ---------------------------------------------------------------------------
// Overworld terrain
// ---------------------------------------------------------------------------

pub static GROUND: [TilePiece; 2] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(p::GROUND_PIECE_TOP, Background, NONE),
];

pub static GROUND_SAND: [TilePiece; 2] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::TILE_ROUND_DOT, Background, NONE),
];

pub static BUSH: [TilePiece; 4] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(p::GROUND_PIECE_UNDER, Background, NONE),
    piece(&p::PLATE_ROUND_DOT, Secondary, NONE),
    piece(&p::TILE_ROUND_DOT, Primary, NONE),
];

pub static ENTRANCE_E: [TilePiece; 2] = [
    piece(&p::PLATE, Primary, NONE),
    piece(&p::BRICK_2_3RD_SLOPE, lit(&color::BLACK), spin(90.0)),
];

pub static ENTRANCE_W: [TilePiece; 2] = [
    piece(&p::PLATE, Primary, NONE),
    piece(&p::BRICK_2_3RD_SLOPE, lit(&color::BLACK), spin(270.0)),
];

pub static ARMOS_STATUE: [TilePiece; 5] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(p::GROUND_PIECE_UNDER, Background, NONE),
    piece(&p::PLATE, Primary, NONE),
    piece(&p::PLATE, Secondary, NONE),
    piece(&p::PLATE_CLIP_TOP, Primary, NONE),
];

pub static ARMOS_STATUE_EMPTY: [TilePiece; 2] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(p::GROUND_PIECE_TOP, Background, NONE),
];

pub static ROCK_BOULDER: [TilePiece; 3] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(p::GROUND_PIECE_UNDER, Background, NONE),
    piece(&p::BRICK_2_3RD_SLOPE_CURVED, Primary, spin(90.0)),
];

pub static STEPS: [TilePiece; 2] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::TILE_ROUND_DOT, Secondary, NONE),
];

pub static TOMB: [TilePiece; 4] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(p::GROUND_PIECE_UNDER, Background, NONE),
    piece(&p::PLATE, Secondary, NONE),
    piece(&p::TILE_HALF_CIRCLE, Primary, spin(180.0)),
];

// Rock edges: a full brick raises the edge, then the named top.
pub static ROCK_N: [TilePiece; 3] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::TILE_HALF_CIRCLE, Primary, spin(180.0)),
];

pub static ROCK_S: [TilePiece; 2] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK, Primary, NONE),
];

// Rock corners should never raise the elevation more than one level from any
// adjacent top level, otherwise the bare side is exposed.
pub static ROCK_NE: [TilePiece; 3] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE_QUARTER_CIRCLE, Primary, spin(270.0)),
];

pub static ROCK_NW: [TilePiece; 3] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE_QUARTER_CIRCLE, Primary, spin(180.0)),
];

pub static ROCK_SE: [TilePiece; 3] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE_QUARTER_CIRCLE, Primary, NONE),
];

pub static ROCK_SW: [TilePiece; 3] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE_QUARTER_CIRCLE, Primary, spin(90.0)),
];

// ---------------------------------------------------------------------------
// Trees
// ---------------------------------------------------------------------------

pub static TREE_N: [TilePiece; 5] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(p::GROUND_PIECE_UNDER, Background, NONE),
    piece(&p::BRICK_2_3RD_ROUND_TABS, Primary, spin(45.0)),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE_ROUND_TABS, Primary, spin(45.0)),
];

pub static TREE_NE: [TilePiece; 6] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(p::GROUND_PIECE_UNDER, Background, NONE),
    piece(&p::BRICK_2_3RD_ROUND_TABS, Primary, spin(45.0)),
    piece(&p::PLATE, Secondary, NONE),
    piece(&p::PLATE, Primary, NONE),
    piece(&p::PLATE_ROUND_TABS, Primary, spin(45.0)),
];

pub static TREE_NW: [TilePiece; 5] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(p::GROUND_PIECE_UNDER, Background, NONE),
    piece(&p::BRICK_HEADLIGHT, Primary, spin(90.0)),
    piece(&p::PLATE, Primary, NONE),
    piece(&p::PLATE_ROUND_TABS, Primary, spin(45.0)),
];

pub static TREE_SE: [TilePiece; 5] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(p::GROUND_PIECE_UNDER, Background, NONE),
    piece(&p::BRICK_HEADLIGHT, Primary, spin(270.0)),
    piece(&p::PLATE, Primary, NONE),
    piece(&p::PLATE_ROUND_TABS, Primary, spin(45.0)),
];

// The southwest canopy corner mirrors the northeast one.
pub static TREE_SW: &[TilePiece] = &TREE_NE;

// ---------------------------------------------------------------------------
// Water
// ---------------------------------------------------------------------------

pub static WATER_C: [TilePiece; 2] = [
    piece(p::GROUND_PIECE_UNDER, Primary, NONE),
    piece(p::WATER_PIECE_TOP, Secondary, water()),
];

pub static WATER_NE: [TilePiece; 3] = [
    piece(p::GROUND_PIECE_UNDER, Primary, NONE),
    piece(p::WATER_PIECE_UNDER, Secondary, water()),
    piece(&p::TILE_QUARTER_CIRCLE, Background, spin(90.0)),
];

pub static WATER_NW: [TilePiece; 3] = [
    piece(p::GROUND_PIECE_UNDER, Primary, NONE),
    piece(p::WATER_PIECE_UNDER, Secondary, water()),
    piece(&p::TILE_QUARTER_CIRCLE, Background, NONE),
];

pub static WATER_SE: [TilePiece; 3] = [
    piece(p::GROUND_PIECE_UNDER, Primary, NONE),
    piece(p::WATER_PIECE_UNDER, Secondary, water()),
    piece(&p::TILE_QUARTER_CIRCLE, Background, spin(180.0)),
];

pub static WATER_SW: [TilePiece; 3] = [
    piece(p::GROUND_PIECE_UNDER, Primary, NONE),
    piece(p::WATER_PIECE_UNDER, Secondary, water()),
    piece(&p::TILE_QUARTER_CIRCLE, Background, spin(270.0)),
];

pub static GROUND_WATER_NE: [TilePiece; 3] = [
    piece(p::GROUND_PIECE_UNDER, Primary, NONE),
    piece(p::WATER_PIECE_UNDER, Secondary, water()),
    piece(&p::TILE_QUARTER_CIRCLE, Background, spin(270.0)),
];

pub static GROUND_WATER_NW: [TilePiece; 3] = [
    piece(p::GROUND_PIECE_UNDER, Primary, NONE),
    piece(p::WATER_PIECE_UNDER, Secondary, water()),
    piece(&p::TILE_QUARTER_CIRCLE, Background, spin(180.0)),
];

pub static GROUND_WATER_SE: [TilePiece; 3] = [
    piece(p::GROUND_PIECE_UNDER, Primary, NONE),
    piece(p::WATER_PIECE_UNDER, Secondary, water()),
    piece(&p::TILE_QUARTER_CIRCLE, Background, NONE),
];

pub static GROUND_WATER_SW: [TilePiece; 3] = [
    piece(p::GROUND_PIECE_UNDER, Primary, NONE),
    piece(p::WATER_PIECE_UNDER, Secondary, water()),
    piece(&p::TILE_QUARTER_CIRCLE, Background, spin(90.0)),
];

pub static WATERFALL: [TilePiece; 2] = [
    piece(p::GROUND_PIECE_UNDER, Background, NONE),
    piece(p::WATER_PIECE_TOP, Secondary, water()),
];

pub static BRIDGE: [TilePiece; 3] = [
    piece(p::GROUND_PIECE_UNDER, Primary, NONE),
    piece(p::WATER_PIECE_UNDER, Secondary, water()),
    piece(&p::TILE, Primary, NONE),
];

pub static BRIDGE_HEART: [TilePiece; 4] = [
    piece(p::GROUND_PIECE_UNDER, Primary, NONE),
    piece(p::WATER_PIECE_UNDER, Secondary, water()),
    piece(&p::PLATE, Primary, NONE),
    piece(&p::TILE_HEART, lit(&color::RED), spin(45.0)),
];

pub static TILE_HEART: [TilePiece; 2] = [
    piece(&p::PLATE_ROUND_DOT, lit(&color::WHITE), PlacementOptions::opaque(CLEAR_OPACITY)),
    piece(&p::TILE_HEART, lit(&color::RED), spin(45.0)),
];

// ---------------------------------------------------------------------------
// Overworld dungeon entrances
// ---------------------------------------------------------------------------

pub static DUNGEON_N1: [TilePiece; 4] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Secondary, NONE),
    piece(&p::BRICK_2_3RD_SLOPE_CURVED, Primary, spin(90.0)),
];

pub static DUNGEON_N2: [TilePiece; 4] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Secondary, NONE),
    piece(&p::PLATE_CLIP_TOP, Primary, NONE),
];

pub static DUNGEON_NE: [TilePiece; 4] = [
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::INVERTED_CONE, Secondary, NONE),
    piece(&p::TILE_ROUND_DOT, Primary, NONE),
];

pub static DUNGEON_NW: &[TilePiece] = &DUNGEON_NE;

pub static DUNGEON_SE: [TilePiece; 4] = [
    piece(&p::PLATE, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::INVERTED_CONE, Secondary, NONE),
    piece(&p::TILE_ROUND_DOT, Primary, NONE),
];

pub static DUNGEON_SW: &[TilePiece] = &DUNGEON_SE;

// Alternate entrance tops, each a complete entrance stack. Enumerable so the
// samples map can show every variant side by side.
pub static DUNGEON_TOP_CURVED: &[TilePiece] = &DUNGEON_N1;
pub static DUNGEON_TOP_CLIP: &[TilePiece] = &DUNGEON_N2;

pub static DUNGEON_TOP_TRIANGLE: [TilePiece; 4] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Secondary, NONE),
    piece(&p::BRICK_2_3RD_SLOPE_TRIANGLE, Primary, spin(90.0)),
];

pub static DUNGEON_TOP_SLOPE: [TilePiece; 4] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Secondary, NONE),
    piece(&p::BRICK_2_3RD_SLOPE, Primary, NONE),
];

pub static DUNGEON_TOP_PYRAMID: [TilePiece; 4] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Secondary, NONE),
    piece(&p::BRICK_2_3RD_SLOPE_PYRAMID, Primary, NONE),
];

pub static DUNGEON_TOP_SWIRL: [TilePiece; 4] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Secondary, NONE),
    piece(&p::PLATE_SWIRL, Primary, NONE),
];

pub static DUNGEON_TOP_PLATE_DOT_STUD: [TilePiece; 5] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Secondary, NONE),
    piece(&p::PLATE, Primary, NONE),
    piece(&p::PLATE_ROUND_DOT, Primary, NONE),
];

pub static DUNGEON_TOP_PLATE_DOT_SMOOTH: [TilePiece; 5] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Secondary, NONE),
    piece(&p::PLATE, Primary, NONE),
    piece(&p::TILE_ROUND_DOT, Primary, NONE),
];

pub static DUNGEON_TOP_PLATE_DOT_TABS: [TilePiece; 5] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Secondary, NONE),
    piece(&p::PLATE, Primary, NONE),
    piece(&p::PLATE_ROUND_TABS, Primary, spin(45.0)),
];

pub static DUNGEON_TOP_DOT_DOT_STUD: [TilePiece; 5] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Secondary, NONE),
    piece(&p::PLATE_ROUND_DOT, Primary, NONE),
    piece(&p::PLATE_ROUND_DOT, Primary, NONE),
];

pub static DUNGEON_TOP_DOT_DOT_SMOOTH: [TilePiece; 5] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Secondary, NONE),
    piece(&p::PLATE_ROUND_DOT, Primary, NONE),
    piece(&p::TILE_ROUND_DOT, Primary, NONE),
];

pub static DUNGEON_TOP_DOT_DOT_TABS: [TilePiece; 5] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE, Secondary, NONE),
    piece(&p::PLATE_ROUND_DOT, Primary, NONE),
    piece(&p::PLATE_ROUND_TABS, Primary, spin(45.0)),
];

pub static DUNGEON_TOP_OVERHANG_HOLE: [TilePiece; 4] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::BRICK_2_3RD, Secondary, NONE),
    piece(&p::PLATE_LIGHT_ATTACHMENT, Primary, NONE),
];

pub static DUNGEON_TOP_OVERHANG_BAR: [TilePiece; 4] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::BRICK_2_3RD, Secondary, NONE),
    piece(&p::PLATE_BAR_SIDE, Primary, NONE),
];

pub static DUNGEON_TOP_OVERHANG_CLIP_V: [TilePiece; 4] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::BRICK_2_3RD, Secondary, NONE),
    piece(&p::PLATE_CLIP_VERTICAL_SIDE, Primary, NONE),
];

pub static DUNGEON_TOP_OVERHANG_CLIP_H: [TilePiece; 4] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::BRICK_2_3RD, Secondary, NONE),
    piece(&p::PLATE_CLIP_HORIZONTAL_SIDE, Primary, NONE),
];

/// Every alternate dungeon-entrance top, in catalog order.
pub static DUNGEON_TOPS: &[(&str, TileRef)] = &[
    ("curved_top", DUNGEON_TOP_CURVED),
    ("triangle", &DUNGEON_TOP_TRIANGLE),
    ("slope", &DUNGEON_TOP_SLOPE),
    ("pyramid", &DUNGEON_TOP_PYRAMID),
    ("swirl", &DUNGEON_TOP_SWIRL),
    ("clip_top", DUNGEON_TOP_CLIP),
    ("plate_dot_stud", &DUNGEON_TOP_PLATE_DOT_STUD),
    ("plate_dot_smooth", &DUNGEON_TOP_PLATE_DOT_SMOOTH),
    ("plate_dot_tabs", &DUNGEON_TOP_PLATE_DOT_TABS),
    ("dot_dot_stud", &DUNGEON_TOP_DOT_DOT_STUD),
    ("dot_dot_smooth", &DUNGEON_TOP_DOT_DOT_SMOOTH),
    ("dot_dot_tabs", &DUNGEON_TOP_DOT_DOT_TABS),
    ("overhang_hole", &DUNGEON_TOP_OVERHANG_HOLE),
    ("overhang_bar", &DUNGEON_TOP_OVERHANG_BAR),
    ("overhang_clip_v", &DUNGEON_TOP_OVERHANG_CLIP_V),
    ("overhang_clip_h", &DUNGEON_TOP_OVERHANG_CLIP_H),
];

// ---------------------------------------------------------------------------
// Sprites
// ---------------------------------------------------------------------------

pub static OCTOROK_RED_E: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::WHITE), NONE),
    piece(&p::TILE_HALF_CIRCLE, lit(&color::RED), spin(270.0)),
];
pub static OCTOROK_RED_W: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::WHITE), NONE),
    piece(&p::TILE_HALF_CIRCLE, lit(&color::RED), spin(90.0)),
];
pub static OCTOROK_RED_N: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::WHITE), NONE),
    piece(&p::TILE_HALF_CIRCLE, lit(&color::RED), spin(180.0)),
];
pub static OCTOROK_RED_S: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::WHITE), NONE),
    piece(&p::TILE_HALF_CIRCLE, lit(&color::RED), spin(0.0)),
];
pub static OCTOROK_BLUE_E: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::WHITE), NONE),
    piece(&p::TILE_HALF_CIRCLE, lit(&color::BLUE), spin(270.0)),
];
pub static OCTOROK_BLUE_W: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::WHITE), NONE),
    piece(&p::TILE_HALF_CIRCLE, lit(&color::BLUE), spin(90.0)),
];
pub static OCTOROK_BLUE_N: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::WHITE), NONE),
    piece(&p::TILE_HALF_CIRCLE, lit(&color::BLUE), spin(180.0)),
];
pub static OCTOROK_BLUE_S: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::WHITE), NONE),
    piece(&p::TILE_HALF_CIRCLE, lit(&color::BLUE), spin(0.0)),
];

pub static MOBLIN_RED: [TilePiece; 3] = [
    piece(&p::PLATE, lit(&color::WHITE), NONE),
    piece(&p::PLATE, lit(&color::RED), NONE),
    piece(&p::TILE_ROUND_DOT, lit(&color::ORANGE), NONE),
];
pub static MOBLIN_BLUE: [TilePiece; 3] = [
    piece(&p::PLATE, lit(&color::RED), NONE),
    piece(&p::PLATE, lit(&color::BLACK), NONE),
    piece(&p::TILE_ROUND_DOT, lit(&color::TEAL), NONE),
];

pub static LEEVER_RED: [TilePiece; 3] = [
    piece(&p::PLATE, lit(&color::RED), spin(45.0)),
    piece(&p::PLATE_ROUND_TABS, lit(&color::WHITE), spin(45.0)),
    piece(&p::TILE_ROUND_DOT, lit(&color::RED), NONE),
];
pub static LEEVER_RED_SLIM: [TilePiece; 3] = [
    piece(&p::PLATE, lit(&color::RED), spin(0.0)),
    piece(&p::PLATE_ROUND_TABS, lit(&color::WHITE), spin(45.0)),
    piece(&p::TILE_ROUND_DOT, lit(&color::RED), NONE),
];
pub static LEEVER_RED_SUNK1: &[TilePiece] = &[
    piece(&p::PLATE_ROUND_TABS, lit(&color::WHITE), spin(45.0)),
    piece(&p::TILE_ROUND_DOT, lit(&color::RED), NONE),
];
pub static LEEVER_RED_SUNK2: &[TilePiece] =
    &[piece(&p::TILE_ROUND_DOT, lit(&color::RED), NONE)];

pub static LEEVER_BLUE: [TilePiece; 3] = [
    piece(&p::PLATE, lit(&color::BLUE), spin(45.0)),
    piece(&p::PLATE_ROUND_TABS, lit(&color::WHITE), spin(45.0)),
    piece(&p::TILE_ROUND_DOT, lit(&color::BLUE), NONE),
];
pub static LEEVER_BLUE_SLIM: [TilePiece; 3] = [
    piece(&p::PLATE, lit(&color::BLUE), spin(0.0)),
    piece(&p::PLATE_ROUND_TABS, lit(&color::WHITE), spin(45.0)),
    piece(&p::TILE_ROUND_DOT, lit(&color::BLUE), NONE),
];
pub static LEEVER_BLUE_SUNK1: &[TilePiece] = &[
    piece(&p::PLATE_ROUND_TABS, lit(&color::WHITE), spin(45.0)),
    piece(&p::TILE_ROUND_DOT, lit(&color::BLUE), NONE),
];
pub static LEEVER_BLUE_SUNK2: &[TilePiece] =
    &[piece(&p::TILE_ROUND_DOT, lit(&color::BLUE), NONE)];

pub static LYNEL_RED: [TilePiece; 3] = [
    piece(&p::PLATE, lit(&color::RED), NONE),
    piece(&p::PLATE, lit(&color::WHITE), NONE),
    piece(&p::PLATE_ROUND_DOT, lit(&color::ORANGE), NONE),
];
pub static LYNEL_BLUE: [TilePiece; 3] = [
    piece(&p::PLATE, lit(&color::BLUE), NONE),
    piece(&p::PLATE, lit(&color::WHITE), NONE),
    piece(&p::PLATE_ROUND_DOT, lit(&color::STEEL_BLUE), NONE),
];

pub static TEKTITE_RED: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::WHITE), NONE),
    piece(&p::BRICK_2_3RD_SLOPE_CURVED, lit(&color::RED), spin(90.0)),
];
pub static TEKTITE_BLUE: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::WHITE), NONE),
    piece(&p::BRICK_2_3RD_SLOPE_CURVED, lit(&color::STEEL_BLUE), spin(90.0)),
];

pub static PEAHAT: [TilePiece; 3] = [
    piece(&p::PLATE, lit(&color::RED), spin(45.0)),
    piece(&p::PLATE, lit(&color::ORANGE), NONE),
    piece(&p::PLATE_ROUND_TABS, lit(&color::WHITE), spin(0.0)),
];
pub static PEAHAT_SLIM: [TilePiece; 3] = [
    piece(&p::PLATE, lit(&color::RED), spin(0.0)),
    piece(&p::PLATE, lit(&color::ORANGE), NONE),
    piece(&p::PLATE_ROUND_TABS, lit(&color::WHITE), spin(45.0)),
];
pub static PEAHAT_WATER: [TilePiece; 4] = [
    piece(&p::PLATE_ROUND_DOT, lit(&color::WHITE), PlacementOptions::opaque(CLEAR_OPACITY)),
    piece(&p::PLATE, lit(&color::RED), spin(45.0)),
    piece(&p::PLATE, lit(&color::ORANGE), NONE),
    piece(&p::PLATE_ROUND_TABS, lit(&color::WHITE), spin(0.0)),
];
pub static PEAHAT_WATER_SLIM: [TilePiece; 4] = [
    piece(&p::PLATE_ROUND_DOT, lit(&color::WHITE), PlacementOptions::opaque(CLEAR_OPACITY)),
    piece(&p::PLATE, lit(&color::RED), spin(0.0)),
    piece(&p::PLATE, lit(&color::ORANGE), NONE),
    piece(&p::PLATE_ROUND_TABS, lit(&color::WHITE), spin(45.0)),
];

pub static LINK: [TilePiece; 3] = [
    piece(&p::PLATE, lit(&color::BROWN), NONE),
    piece(&p::PLATE, lit(&color::ORANGE), NONE),
    piece(&p::TILE, lit(&color::CHARTREUSE), NONE),
];

pub static FAIRY: [TilePiece; 3] = [
    piece(
        &p::PLATE_ROUND_DOT,
        lit(&color::ORANGE),
        PlacementOptions {
            translate_x: Some(0.5),
            translate_y: Some(0.5),
            ..PlacementOptions::NONE
        },
    ),
    piece(
        &p::PLATE_ROUND_TABS,
        lit(&color::WHITE),
        PlacementOptions {
            translate_x: Some(0.5),
            translate_y: Some(0.5),
            rotate_y: Some(45.0),
            ..PlacementOptions::NONE
        },
    ),
    piece(
        &p::TILE_ROUND_DOT,
        lit(&color::RED),
        PlacementOptions {
            translate_x: Some(0.5),
            translate_y: Some(0.5),
            ..PlacementOptions::NONE
        },
    ),
];

pub static ZORA: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::TEAL), NONE),
    piece(&p::PLATE_ROUND_DOT, lit(&color::RED), NONE),
];

pub static FALLING_ROCK: [TilePiece; 2] = [
    piece(&p::PLATE_ROUND_DOT, lit(&color::RED), NONE),
    piece(&p::PLATE_ROUND_DOT, lit(&color::ORANGE), NONE),
];

pub static GHINI: [TilePiece; 2] = [
    piece(&p::PLATE_ROUND_DOT, lit(&color::BLUE), NONE),
    piece(&p::PLATE_ROUND_DOT, lit(&color::WHITE), NONE),
];

pub static ARMOS_RED_AWAKE: [TilePiece; 3] = [
    piece(&p::PLATE, lit(&color::ORANGE), NONE),
    piece(&p::PLATE, lit(&color::RED), NONE),
    piece(&p::PLATE_CLIP_TOP, lit(&color::ORANGE), NONE),
];

// ---------------------------------------------------------------------------
// Caves
// ---------------------------------------------------------------------------

pub static CAVE_WALL_OUTER: [TilePiece; 2] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK, Primary, NONE),
];

pub static CAVE_WALL_INNER: [TilePiece; 3] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::TILE, Primary, NONE),
];

/// The walkable gap in a cave's south wall.
pub static CAVE_ENTRANCE: [TilePiece; 1] = [piece(&p::TILE, lit(&color::BLACK), NONE)];

// ---------------------------------------------------------------------------
// Text floors
// ---------------------------------------------------------------------------

// One tile per displayable glyph class. The text palette keeps the floor
// dark and the glyph light.

pub static TEXT_FLOOR: [TilePiece; 1] = [piece(&p::PLATE, Background, NONE)];
pub static TEXT_GLYPH: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE, Primary, NONE),
];
pub static TEXT_TIMES: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE_ROUND_TABS, Primary, spin(45.0)),
];
pub static TEXT_DASH: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE, Primary, spin(90.0)),
];
pub static TEXT_PERIOD: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE_ROUND_DOT, Primary, NONE),
];
pub static TEXT_COMMA: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE_QUARTER_CIRCLE, Primary, NONE),
];
pub static TEXT_EXCLAIM: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE_ROUND_DOT, Primary, NONE),
];
pub static TEXT_APOSTROPHE: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE_QUARTER_CIRCLE, Primary, spin(180.0)),
];
pub static TEXT_QUESTION: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE_HALF_CIRCLE, Primary, NONE),
];

/// Decorative flame flanking a text floor's NPC row.
pub static CANDLE: [TilePiece; 3] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE, lit(&color::RED), NONE),
    piece(&p::PLATE_ROUND_DOT, lit(&color::ORANGE), NONE),
];

/// Decorative wedge flanking a centered sword item.
pub static TRIANGLE: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::BRICK_2_3RD_SLOPE_TRIANGLE, Primary, NONE),
];

// ---------------------------------------------------------------------------
// Text floor NPCs
// ---------------------------------------------------------------------------

pub static OLD_MAN: [TilePiece; 3] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE, lit(&color::RED), NONE),
    piece(&p::TILE_ROUND_DOT, lit(&color::WHITE), NONE),
];
pub static OLD_WOMAN: [TilePiece; 3] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE, lit(&color::BLUE), NONE),
    piece(&p::TILE_ROUND_DOT, lit(&color::WHITE), NONE),
];
pub static KEEPER: [TilePiece; 3] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE, lit(&color::BROWN), NONE),
    piece(&p::TILE_ROUND_DOT, lit(&color::ORANGE), NONE),
];
/// The grumbling moblin, seated on a text floor instead of open ground.
pub static MOBLIN_RED_CENTER: [TilePiece; 4] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE, lit(&color::WHITE), NONE),
    piece(&p::PLATE, lit(&color::RED), NONE),
    piece(&p::TILE_ROUND_DOT, lit(&color::ORANGE), NONE),
];

// ---------------------------------------------------------------------------
// Items for sale (or on offer) on text floors
// ---------------------------------------------------------------------------

pub static ITEM_SWORD: [TilePiece; 3] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE, lit(&color::PEACH), NONE),
    piece(&p::TILE, lit(&color::LIGHT_GRAY), spin(45.0)),
];
pub static ITEM_WHITE_SWORD: [TilePiece; 3] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE, lit(&color::PEACH), NONE),
    piece(&p::TILE, lit(&color::WHITE), spin(45.0)),
];
pub static ITEM_MAGICAL_SWORD: [TilePiece; 3] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE, lit(&color::PEACH), NONE),
    piece(&p::TILE, lit(&color::RED), spin(45.0)),
];
pub static ITEM_LETTER: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE, lit(&color::PEACH), NONE),
];
pub static ITEM_LIFE_POTION_RED: [TilePiece; 3] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE_ROUND_DOT, lit(&color::RED), NONE),
    piece(&p::TILE_ROUND_DOT, lit(&color::BLUE), NONE),
];
pub static ITEM_LIFE_POTION_BLUE: [TilePiece; 3] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE_ROUND_DOT, lit(&color::STEEL_BLUE), NONE),
    piece(&p::TILE_ROUND_DOT, lit(&color::BLUE), NONE),
];
pub static ITEM_HEART_CONTAINER: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE_HEART, lit(&color::RED), spin(45.0)),
];
pub static ITEM_HEART: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE_HEART, lit(&color::RED), NONE),
];
/// The pay-to-pass road charge marker.
pub static ITEM_ROAD: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE_ROUND_DOT, lit(&color::STEEL_BLUE), NONE),
];
pub static ITEM_RUPEE_ORANGE: [TilePiece; 3] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE_ROUND_DOT, lit(&color::ORANGE), spin(45.0)),
    piece(&p::TILE_ROUND_DOT, lit(&color::GOLD), NONE),
];
pub static ITEM_KEY: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE, lit(&color::GOLD), NONE),
];
pub static ITEM_RING_BLUE: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE_ROUND_DOT, lit(&color::STEEL_BLUE), NONE),
];
pub static ITEM_BAIT: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE_HALF_CIRCLE, lit(&color::BROWN), NONE),
];
pub static ITEM_MAGICAL_SHIELD: [TilePiece; 3] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE, lit(&color::STEEL_BLUE), NONE),
    piece(&p::TILE, lit(&color::WHITE), NONE),
];
pub static ITEM_BOMB: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE_ROUND_DOT, lit(&color::SKY_BLUE), NONE),
];
pub static ITEM_ARROW: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE, lit(&color::BROWN), spin(90.0)),
];
pub static ITEM_CANDLE_BLUE: [TilePiece; 3] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE, lit(&color::STEEL_BLUE), NONE),
    piece(&p::PLATE_ROUND_DOT, lit(&color::ORANGE), NONE),
];

// ---------------------------------------------------------------------------
// Dungeon rooms
// ---------------------------------------------------------------------------

pub static DUNGEON_FLOOR: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE, Background, NONE),
];
pub static DUNGEON_SAND: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE_ROUND_DOT, Background, NONE),
];
/// Stairwell cell within a floor template.
pub static DUNGEON_ENTRANCE: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::TILE_ROUND_DOT, Secondary, NONE),
];
pub static DUNGEON_WATER: [TilePiece; 2] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::PLATE_ROUND_DOT, Secondary, water()),
];
pub static DUNGEON_BLOCK: [TilePiece; 3] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::TILE_ROUND_DOT, Primary, NONE),
];
pub static DUNGEON_STATUE_LOOKING_RIGHT: [TilePiece; 3] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::TILE_HALF_CIRCLE, Primary, spin(270.0)),
];
pub static DUNGEON_STATUE_LOOKING_LEFT: [TilePiece; 3] = [
    piece(&p::PLATE, Background, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::TILE_HALF_CIRCLE, Primary, spin(90.0)),
];
pub static DUNGEON_HOLE: [TilePiece; 1] = [piece(&p::TILE, lit(&color::BLACK), NONE)];

// East/west room walls, double thickness.
pub static WALL_OUTER_EW: [TilePiece; 2] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
];
pub static WALL_INNER_EW: [TilePiece; 2] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::TILE, Primary, NONE),
];

// North/south walls are built as 13-long strips. The span tile leads with a
// riser so the wall seats one level above the floor without authoring a
// vertical translate on every span piece.
pub static WALL_OUTER_NS: [TilePiece; 2] = [
    piece(&p::RAISER_2, Primary, NONE),
    piece(&p::BRICK, Primary, NONE),
];
pub static WALL_INNER_NS: [TilePiece; 3] = [
    piece(&p::RAISER_2, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::TILE, Primary, NONE),
];

pub static WALL_OUTER_CAP_W: [TilePiece; 3] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::TILE_QUARTER_CIRCLE, Primary, spin(180.0)),
];
pub static WALL_OUTER_CAP_E: [TilePiece; 3] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::TILE_QUARTER_CIRCLE, Primary, spin(270.0)),
];
pub static WALL_INNER_CAP_W: [TilePiece; 3] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::TILE_QUARTER_CIRCLE, Primary, spin(90.0)),
];
pub static WALL_INNER_CAP_E: [TilePiece; 3] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::TILE_QUARTER_CIRCLE, Primary, NONE),
];

// Outer door openings per compass direction.
pub static WALL_OUTER_DOOR_N: [TilePiece; 2] = [
    piece(&p::PLATE, Primary, NONE),
    piece(&p::BRICK_2_3RD_SLOPE, lit(&color::BLACK), spin(180.0)),
];
pub static WALL_OUTER_DOOR_S: [TilePiece; 2] = [
    piece(&p::PLATE, Primary, NONE),
    piece(&p::BRICK_2_3RD_SLOPE, lit(&color::BLACK), spin(0.0)),
];
pub static WALL_OUTER_DOOR_E: [TilePiece; 2] = [
    piece(&p::PLATE, Primary, NONE),
    piece(&p::BRICK_2_3RD_SLOPE, lit(&color::BLACK), spin(90.0)),
];
pub static WALL_OUTER_DOOR_W: [TilePiece; 2] = [
    piece(&p::PLATE, Primary, NONE),
    piece(&p::BRICK_2_3RD_SLOPE, lit(&color::BLACK), spin(270.0)),
];

// Inner door leaves, one tile per door type. Solid and open doors look the
// same from either side of an axis; locked, bomb and shut doors carry a
// facing detail per direction.
pub static WALL_INNER_DOOR_SOLID_NS: [TilePiece; 2] = [
    piece(&p::RAISER_2, Primary, NONE),
    piece(&p::BRICK, Primary, NONE),
];
pub static WALL_INNER_DOOR_SOLID_EW: [TilePiece; 2] = [
    piece(&p::BRICK, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, NONE),
];
pub static WALL_INNER_DOOR_OPEN_NS: [TilePiece; 1] =
    [piece(&p::TILE, lit(&color::BLACK), NONE)];
pub static WALL_INNER_DOOR_OPEN_EW: [TilePiece; 1] =
    [piece(&p::TILE, lit(&color::BLACK), NONE)];

pub static WALL_INNER_DOOR_LOCKED_N: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::BLACK), NONE),
    piece(&p::TILE_ROUND_DOT, lit(&color::GOLD), spin(180.0)),
];
pub static WALL_INNER_DOOR_LOCKED_S: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::BLACK), NONE),
    piece(&p::TILE_ROUND_DOT, lit(&color::GOLD), spin(0.0)),
];
pub static WALL_INNER_DOOR_LOCKED_E: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::BLACK), NONE),
    piece(&p::TILE_ROUND_DOT, lit(&color::GOLD), spin(90.0)),
];
pub static WALL_INNER_DOOR_LOCKED_W: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::BLACK), NONE),
    piece(&p::TILE_ROUND_DOT, lit(&color::GOLD), spin(270.0)),
];

pub static WALL_INNER_DOOR_BOMB_N: [TilePiece; 3] = [
    piece(&p::RAISER_2, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, spin(180.0)),
    piece(&p::PLATE_ROUND_DOT, lit(&color::BLACK), NONE),
];
pub static WALL_INNER_DOOR_BOMB_S: [TilePiece; 3] = [
    piece(&p::RAISER_2, Primary, NONE),
    piece(&p::BRICK_2_3RD, Primary, spin(0.0)),
    piece(&p::PLATE_ROUND_DOT, lit(&color::BLACK), NONE),
];
pub static WALL_INNER_DOOR_BOMB_E: [TilePiece; 3] = [
    piece(&p::BRICK, Primary, spin(90.0)),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE_ROUND_DOT, lit(&color::BLACK), NONE),
];
pub static WALL_INNER_DOOR_BOMB_W: [TilePiece; 3] = [
    piece(&p::BRICK, Primary, spin(270.0)),
    piece(&p::BRICK_2_3RD, Primary, NONE),
    piece(&p::PLATE_ROUND_DOT, lit(&color::BLACK), NONE),
];

pub static WALL_INNER_DOOR_SHUT_N: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::BLACK), NONE),
    piece(&p::TILE, lit(&color::DARK_GRAY), spin(180.0)),
];
pub static WALL_INNER_DOOR_SHUT_S: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::BLACK), NONE),
    piece(&p::TILE, lit(&color::DARK_GRAY), spin(0.0)),
];
pub static WALL_INNER_DOOR_SHUT_E: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::BLACK), NONE),
    piece(&p::TILE, lit(&color::DARK_GRAY), spin(90.0)),
];
pub static WALL_INNER_DOOR_SHUT_W: [TilePiece; 2] = [
    piece(&p::PLATE, lit(&color::BLACK), NONE),
    piece(&p::TILE, lit(&color::DARK_GRAY), spin(270.0)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_seats_a_smooth_tile_on_a_brick() {
        assert_eq!(GROUND.len(), 2);
        assert_eq!(GROUND[1].piece.name, "tile");
        assert_eq!(GROUND[0].color, Primary);
    }

    #[test]
    fn water_surfaces_carry_the_water_opacity() {
        assert_eq!(WATER_C[1].options.opacity, Some(WATER_OPACITY));
        assert_eq!(BRIDGE[1].options.opacity, Some(WATER_OPACITY));
    }

    #[test]
    fn dungeon_tops_are_complete_entrance_stacks() {
        for (name, stack) in DUNGEON_TOPS {
            assert!(stack.len() >= 4, "variant {} too short", name);
            assert_eq!(stack[0].piece.name, "brick");
        }
    }

    #[test]
    fn polar_wall_spans_lead_with_the_riser() {
        assert!(WALL_OUTER_NS[0].piece.part.is_none());
        assert!(WALL_INNER_NS[0].piece.part.is_none());
    }
}
