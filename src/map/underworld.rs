//! Dungeon rooms: a 16x16 grid of authored room definitions expanded
//! from shared floor templates, with double-thickness walls and per-door
//! tile insertions.

use crate::catalog::color;
use crate::catalog::palette::{self, Palette};
use crate::error::{BuilderError, Result};
use crate::tile::text;
use crate::tile::text_floor::{make_text_floor, PriceItem};
use crate::tile::{tiles, TileRef};
use crate::types::{Screen, ScreenGrid, TileData, TileGrid};

pub const GRID_ROWS: usize = 16;
pub const GRID_COLS: usize = 16;

/// Floor templates, 7 rows by 12 columns of floor codes.
///
/// Codes: `.` floor, `s` sand, `e` stairwell, `w` water, `B` block,
/// `R`/`L` statue looking right/left, `H` hole.
static TEMPLATES: &[(u8, [&str; 7])] = &[
    (0x00, [
        "............",
        "............",
        "............",
        "............",
        "............",
        "............",
        "............",
    ]),
    (0x01, [
        "............",
        "............",
        "..B......B..",
        ".B........B.",
        "..B......B..",
        "............",
        "............",
    ]),
    (0x02, [
        "............",
        "............",
        "..B......B..",
        "............",
        "..B......B..",
        "............",
        "............",
    ]),
    (0x03, [
        "............",
        "..B......B..",
        "............",
        "............",
        "............",
        "..B......B..",
        "............",
    ]),
    (0x04, [
        ".......BBBBB",
        ".........BBB",
        "..........BB",
        "............",
        "..........BB",
        ".........BBB",
        ".......BBBBB",
    ]),
    (0x05, [
        "BBBBB..BBBBB",
        "BBBB....BBBB",
        "BB........BB",
        "............",
        "............",
        "..B......B..",
        "............",
    ]),
    (0x06, [
        "............",
        "............",
        "............",
        ".B........B.",
        "............",
        "...B....B...",
        "R..........L",
    ]),
    (0x07, [
        "............",
        ".BBBBBBBBBB.",
        "............",
        ".BBBBBBBBBB.",
        "............",
        ".BBBBBBBBBB.",
        "............",
    ]),
    (0x08, [
        "............",
        ".BBBBBBBBBB.",
        "..........B.",
        "..........B.",
        "..........B.",
        ".BBBBBBBBBB.",
        "............",
    ]),
    (0x09, [
        "............",
        "..BBBBBBBB..",
        "..B......B..",
        "..B......B..",
        "..B......B..",
        "..BBBBBBBB..",
        "............",
    ]),
    (0x0A, [
        "............",
        "............",
        "............",
        "....B..B....",
        "............",
        "............",
        "............",
    ]),
    (0x0B, [
        ".ww.........",
        ".wwwwwwwwww.",
        ".wwwwwwwwww.",
        ".w.......ww.",
        ".ww......ww.",
        ".ww......ww.",
        ".ww......ww.",
    ]),
    (0x0C, [
        ".B.B........",
        ".B.BBB.BBB..",
        ".B...B...BBB",
        ".B.B.B...B..",
        ".BBB.B...B..",
        ".....B.B.B.B",
        "..B....B...B",
    ]),
    (0x0D, [
        "............",
        ".B.B.BB.B.B.",
        "............",
        ".B.B.BB.B.B.",
        "............",
        ".B.B.BB.B.B.",
        "............",
    ]),
    (0x0E, [
        "....B..B....",
        "....B..B....",
        "....B..B....",
        "....B..B....",
        "....B..B....",
        "....B..B....",
        "....B..B....",
    ]),
    (0x0F, [
        "............",
        "............",
        "BBBBBBBBBBBB",
        "............",
        "BBBBBBBBBBBB",
        "............",
        "............",
    ]),
    (0x10, [
        "............",
        ".B.B.BB.B.B.",
        ".B.B.BB.B.B.",
        ".B.B.BB.B.B.",
        ".B.B.BB.B.B.",
        ".B.B.BB.B.B.",
        "............",
    ]),
    (0x11, [
        "..B........B",
        ".B........B.",
        "....B....B..",
        "...B....B...",
        "..B....B....",
        ".B....B...B.",
        "B........B..",
    ]),
    (0x12, [
        "............",
        ".wwwwwwwwww.",
        ".wwwwwwwwww.",
        ".ww......ww.",
        ".ww......ww.",
        ".wwww..wwww.",
        ".wwww..wwww.",
    ]),
    (0x13, [
        "........w...",
        "........w...",
        "........w...",
        "........w...",
        "........w...",
        "........w...",
        "........w...",
    ]),
    (0x14, [
        "............",
        ".wwwwwwwwww.",
        ".w........w.",
        ".w........w.",
        ".w........w.",
        ".wwwwwwwwww.",
        "............",
    ]),
    (0x15, [
        "............",
        ".www....www.",
        ".w........w.",
        ".w.wwwwww.w.",
        ".w........w.",
        ".www....www.",
        "............",
    ]),
    (0x16, [
        "wwwww..wwwww",
        "w...wwww...w",
        "w.www..www.w",
        "..w......w..",
        "w.www..www.w",
        "w...wwww...w",
        "wwwww..wwwww",
    ]),
    (0x17, [
        "wwwww..wwwww",
        "w...w....w.w",
        "w.w.w.ww.w.w",
        "..w.w..w.w..",
        "w.w.ww.w.w.w",
        "w.w....w...w",
        "wwwww..wwwww",
    ]),
    (0x18, [
        "............",
        "............",
        "wwwwwwwwwwww",
        "............",
        "............",
        "............",
        "............",
    ]),
    (0x19, [
        "............",
        "wwwwwwwwwwww",
        "............",
        "............",
        "............",
        "wwwwwwwwwwww",
        "............",
    ]),
    (0x1A, [
        "............",
        "......B.....",
        ".....B.B....",
        "....B.e.B...",
        ".....B.B....",
        "......B.....",
        "............",
    ]),
    (0x1B, [
        "........BBBB",
        "........BBBB",
        ".........BBB",
        "...........e",
        ".........BBB",
        "........BBBB",
        "........BBBB",
    ]),
    (0x1C, [
        "..........B.",
        ".BBBBBBBB.B.",
        ".B.....eB.B.",
        ".B...BBBB.B.",
        ".B........B.",
        ".BBBBBBBBBB.",
        "............",
    ]),
    (0x1D, [
        "............",
        "............",
        "..BB....BB..",
        "..BB....BB..",
        "..BB....BB..",
        "............",
        "............",
    ]),
    (0x1E, [
        "............",
        "............",
        ".....BB.....",
        ".....BB.....",
        ".....BB.....",
        "............",
        "............",
    ]),
    (0x1F, [
        "............",
        ".BB......BB.",
        "............",
        ".....BB.....",
        "............",
        ".BB......BB.",
        "............",
    ]),
    (0x20, [
        "BBBBB..BBBBB",
        "BBBBBB.BBBBB",
        "BBBBBB.BBBBB",
        "......B.....",
        "BBBBBB.BBBBB",
        "BBBBBB.BBBBB",
        "BBBBB..BBBBB",
    ]),
    (0x21, [
        "............",
        ".R..R..L..L.",
        "............",
        ".R..R..L..L.",
        ".....ss.....",
        ".R.sRssLs.L.",
        "...ssssss...",
    ]),
    (0x22, [
        "............",
        "............",
        "............",
        ".....B......",
        "............",
        "............",
        "............",
    ]),
    (0x23, [
        "............",
        "............",
        "............",
        "....R..L....",
        "............",
        "............",
        "............",
    ]),
    (0x24, [
        "R..........L",
        "............",
        "............",
        "............",
        "............",
        "............",
        "R..........L",
    ]),
    (0x25, [
        "ssssssssssss",
        "ssssssssssss",
        "ssssssssssss",
        "ssssssssssss",
        "ssssssssssss",
        "ssssssssssss",
        "ssssssssssss",
    ]),
    (0x26, [
        "HHHHHHHHHHHH",
        "HHHHHHHHHHHH",
        "HHHHHHHHHHHH",
        "HHHHHHHHHHHH",
        "HHHHHHHHHHHH",
        "HHHHHHHHHHHH",
        "HHHHHHHHHHHH",
    ]),
    (0x27, [
        "BBBBBBBBBBBB",
        "B...BHHB...B",
        "B.BBHHHHBB.B",
        "B.BBHHHHBB.B",
        "B...R..L...B",
        "B..........B",
        "B.R......L.B",
    ]),
    (0x28, [
        "RHH......HHL",
        "HH..H..H..HH",
        "HH.HH..HH.HH",
        "HH.HH..HH.HH",
        "HH...HH...HH",
        "HHHH....HHHH",
        "RHHH....HHHL",
    ]),
    (0x29, [
        "............",
        ".BBBBBBBBBB.",
        ".B..R..L..B.",
        ".B.R....L.B.",
        ".B........B.",
        ".BBBB..BBBB.",
        "............",
    ]),
    // Sample room used by the samples map.
    (0x30, [
        ".wwwwwwwwww.",
        ".R..R..L..L.",
        "............",
        ".R..R..L..L.",
        ".....ss.....",
        ".R.sRssLs.L.",
        "...ssssss...",
    ]),
];

pub(crate) fn template(index: u8) -> Result<&'static [&'static str; 7]> {
    TEMPLATES
        .iter()
        .find(|(template_index, _)| *template_index == index)
        .map(|(_, rows)| rows)
        .ok_or(BuilderError::UnknownRoomTemplate(index))
}

fn floor_tile(code: u8) -> Result<TileRef> {
    Ok(match code {
        b'.' => &tiles::DUNGEON_FLOOR,
        b's' => &tiles::DUNGEON_SAND,
        b'e' => &tiles::DUNGEON_ENTRANCE,
        b'w' => &tiles::DUNGEON_WATER,
        b'B' => &tiles::DUNGEON_BLOCK,
        b'R' => &tiles::DUNGEON_STATUE_LOOKING_RIGHT,
        b'L' => &tiles::DUNGEON_STATUE_LOOKING_LEFT,
        b'H' => &tiles::DUNGEON_HOLE,
        other => {
            return Err(BuilderError::CatalogLookup(format!(
                "floor code {:?}",
                other as char
            )))
        }
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Door {
    Solid,
    Open,
    Locked,
    Bomb,
    Shut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dir {
    N,
    S,
    E,
    W,
}

impl Door {
    /// Outer wall leaf; the opening looks the same whatever is behind it.
    fn outer(self, dir: Dir) -> TileRef {
        match dir {
            Dir::N => &tiles::WALL_OUTER_DOOR_N,
            Dir::S => &tiles::WALL_OUTER_DOOR_S,
            Dir::E => &tiles::WALL_OUTER_DOOR_E,
            Dir::W => &tiles::WALL_OUTER_DOOR_W,
        }
    }

    fn inner(self, dir: Dir) -> TileRef {
        use Dir::*;
        match (self, dir) {
            (Door::Solid, N | S) => &tiles::WALL_INNER_DOOR_SOLID_NS,
            (Door::Solid, E | W) => &tiles::WALL_INNER_DOOR_SOLID_EW,
            (Door::Open, N | S) => &tiles::WALL_INNER_DOOR_OPEN_NS,
            (Door::Open, E | W) => &tiles::WALL_INNER_DOOR_OPEN_EW,
            (Door::Locked, N) => &tiles::WALL_INNER_DOOR_LOCKED_N,
            (Door::Locked, S) => &tiles::WALL_INNER_DOOR_LOCKED_S,
            (Door::Locked, E) => &tiles::WALL_INNER_DOOR_LOCKED_E,
            (Door::Locked, W) => &tiles::WALL_INNER_DOOR_LOCKED_W,
            (Door::Bomb, N) => &tiles::WALL_INNER_DOOR_BOMB_N,
            (Door::Bomb, S) => &tiles::WALL_INNER_DOOR_BOMB_S,
            (Door::Bomb, E) => &tiles::WALL_INNER_DOOR_BOMB_E,
            (Door::Bomb, W) => &tiles::WALL_INNER_DOOR_BOMB_W,
            (Door::Shut, N) => &tiles::WALL_INNER_DOOR_SHUT_N,
            (Door::Shut, S) => &tiles::WALL_INNER_DOOR_SHUT_S,
            (Door::Shut, E) => &tiles::WALL_INNER_DOOR_SHUT_E,
            (Door::Shut, W) => &tiles::WALL_INNER_DOOR_SHUT_W,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Dark,
    Dim,
    Sand,
    Text,
}

/// Per-dungeon-level color scheme and base elevation.
struct Level {
    elevation: i32,
    light: &'static color::NesColor,
    medium: &'static color::NesColor,
    dark: &'static color::NesColor,
    water: &'static color::NesColor,
    #[allow(dead_code)]
    name: &'static str,
}

impl Level {
    fn default_palette(&self) -> Palette {
        Palette::new(self.medium, self.water, self.light)
    }

    fn palettes(&self, style: Option<Style>) -> Vec<Palette> {
        match style {
            None => vec![self.default_palette()],
            Some(Style::Dark) => vec![
                Palette::new(self.dark, self.water, self.medium),
                Palette::new(self.dark, self.medium, self.water),
            ],
            Some(Style::Dim) => vec![
                self.default_palette(),
                Palette::new(self.medium, self.dark, self.light),
            ],
            Some(Style::Sand) => vec![
                self.default_palette(),
                Palette::new(&color::ORANGE, &color::BUBBLEGUM, &color::RED),
            ],
            Some(Style::Text) => vec![self.default_palette(), palette::TEXT],
        }
    }
}

const fn level(
    elevation: i32,
    light: &'static color::NesColor,
    medium: &'static color::NesColor,
    dark: &'static color::NesColor,
    water: &'static color::NesColor,
    name: &'static str,
) -> Level {
    Level {
        elevation,
        light,
        medium,
        dark,
        water,
        name,
    }
}

/// Indexed by dungeon level number minus one.
static LEVELS: [Level; 9] = [
    level(0, &color::CYAN, &color::TEAL, &color::DARK_SLATE, &color::BLUE, "Eagle"),
    level(0, &color::STEEL_BLUE, &color::BLUE, &color::NAVY, &color::RED, "Crescent"),
    level(3, &color::SEAFOAM, &color::FOREST_GREEN, &color::EVERGREEN, &color::RED, "Manji"),
    level(3, &color::GOLD, &color::OLIVE, &color::DARK_BROWN, &color::BLUE, "Snake"),
    level(3, &color::LIME, &color::GREEN, &color::DARK_GREEN, &color::RED, "Lizard"),
    level(0, &color::GOLD, &color::OLIVE, &color::DARK_BROWN, &color::RED, "Dragon"),
    level(3, &color::LIME, &color::GREEN, &color::DARK_GREEN, &color::BLUE, "Demon"),
    level(0, &color::WHITE, &color::LIGHT_GRAY, &color::DEEP_GRAY, &color::STEEL_BLUE, "Lion"),
    level(0, &color::WHITE, &color::LIGHT_GRAY, &color::DEEP_GRAY, &color::RED, "Death Mountain"),
];

#[derive(Debug, Clone, Copy)]
pub struct Room {
    pub level: u8,
    pub template: u8,
    /// North, east, south, west.
    pub doors: [Door; 4],
    pub style: Option<Style>,
}

const fn r(
    level: u8,
    template: u8,
    n: Door,
    e: Door,
    s: Door,
    w: Door,
    style: Option<Style>,
) -> Option<Room> {
    Some(Room {
        level,
        template,
        doors: [n, e, s, w],
        style,
    })
}

/// Text overlays for message rooms, keyed by 1-based (row, column).
struct RoomText {
    row: usize,
    col: usize,
    messages: &'static [text::Message],
    npcs: &'static [TileRef],
    items: &'static [PriceItem],
}

const fn room_text(
    row: usize,
    col: usize,
    messages: &'static [text::Message],
    npcs: &'static [TileRef],
    items: &'static [PriceItem],
) -> RoomText {
    RoomText {
        row,
        col,
        messages,
        npcs,
        items,
    }
}

static OLD_MAN: &[TileRef] = &[&tiles::OLD_MAN];
static MOBLIN: &[TileRef] = &[&tiles::MOBLIN_RED_CENTER];
static BOMB_CHARGE: &[PriceItem] = &[PriceItem::priced(&tiles::ITEM_RUPEE_ORANGE, -100)];

static ROOM_TEXTS: &[RoomText] = &[
    room_text(1, 1, &[text::DUNGEON_WALK_WATERFALL], OLD_MAN, &[]),
    room_text(1, 12, &[text::DUNGEON_FAIRIES_DONT], OLD_MAN, &[]),
    room_text(2, 6, &[text::DUNGEON_SECRET_ARROW], OLD_MAN, &[]),
    room_text(2, 8, &[text::DUNGEON_MORE_BOMBS], OLD_MAN, BOMB_CHARGE),
    room_text(2, 16, &[text::DUNGEON_DODONGO_SMOKE], OLD_MAN, &[]),
    room_text(3, 12, &[text::DUNGEON_SWORD_WATERFALL], OLD_MAN, &[]),
    room_text(5, 2, &[text::DUNGEON_EASTMOST_SECRET], OLD_MAN, &[]),
    room_text(7, 8, &[text::DUNGEON_DIGDOGGER_HATES], OLD_MAN, &[]),
    room_text(7, 11, &[text::DUNGEON_GOHMA_EYES], OLD_MAN, &[]),
    room_text(9, 3, &[text::DUNGEON_SKULL_SECRET], OLD_MAN, &[]),
    room_text(9, 7, &[text::DUNGEON_NEXT_ROOM], OLD_MAN, &[]),
    room_text(11, 9, &[text::DUNGEON_GRUMBLE], MOBLIN, &[]),
    room_text(12, 12, &[text::DUNGEON_10TH_ENEMY], OLD_MAN, &[]),
    room_text(12, 14, &[text::DUNGEON_SPECTACLE_ROCK], OLD_MAN, &[]),
    room_text(13, 4, &[text::DUNGEON_PATRA_MAP], OLD_MAN, &[]),
    room_text(13, 9, &[text::DUNGEON_MORE_BOMBS], OLD_MAN, BOMB_CHARGE),
    room_text(14, 12, &[text::DUNGEON_TIP_NOSE], OLD_MAN, &[]),
    room_text(15, 7, &[text::DUNGEON_HAVE_TRIFORCE], OLD_MAN, &[]),
];

#[rustfmt::skip]
static ROOMS: [[Option<Room>; GRID_COLS]; GRID_ROWS] = {
    use Door::{Bomb, Locked, Open, Shut, Solid};
    use Style::{Dark, Dim, Sand, Text};
    [
        [
            r(4, 0x26, Solid,  Locked, Open,   Solid,  Some(Text)),
            r(4, 0x16, Solid,  Open,   Bomb,   Locked, Some(Dark)),
            r(4, 0x01, Solid,  Solid,  Open,   Open,   Some(Dark)),
            r(4, 0x29, Solid,  Solid,  Open,   Solid,  Some(Dim)),
            None,
            r(5, 0x22, Solid,  Locked, Solid,  Solid,  None),
            r(5, 0x1A, Solid,  Solid,  Locked, Locked, None),
            None,
            None,
            r(6, 0x0A, Solid,  Bomb,   Locked, Solid,  None),
            r(6, 0x0A, Solid,  Bomb,   Shut,   Bomb,   None),
            r(6, 0x26, Solid,  Solid,  Open,   Bomb,   Some(Text)),
            r(6, 0x29, Solid,  Solid,  Open,   Solid,  Some(Dim)),
            r(2, 0x29, Solid,  Open,   Solid,  Solid,  Some(Dim)),
            r(2, 0x25, Solid,  Solid,  Open,   Shut,   None),
            None,
        ],
        [
            r(4, 0x06, Shut,   Bomb,   Shut,   Solid,  Some(Dim)),
            r(4, 0x26, Bomb,   Bomb,   Bomb,   Bomb,   None),
            r(4, 0x0A, Open,   Shut,   Solid,  Bomb,   None),
            r(4, 0x05, Shut,   Solid,  Solid,  Shut,   None),
            r(5, 0x29, Solid,  Solid,  Open,   Solid,  Some(Dim)),
            r(5, 0x26, Solid,  Solid,  Bomb,   Solid,  Some(Text)),
            r(5, 0x18, Locked, Bomb,   Solid,  Solid,  None),
            r(5, 0x26, Solid,  Solid,  Solid,  Bomb,   Some(Text)),
            r(6, 0x05, Solid,  Shut,   Shut,   Solid,  None),
            r(6, 0x13, Locked, Open,   Locked, Open,   None),
            r(6, 0x18, Open,   Open,   Solid,  Open,   Some(Dark)),
            r(6, 0x03, Shut,   Solid,  Solid,  Open,   None),
            r(6, 0x06, Shut,   Solid,  Open,   Solid,  Some(Dim)),
            r(6, 0x1B, Solid,  Solid,  Open,   Solid,  None),
            r(2, 0x0D, Shut,   Bomb,   Shut,   Solid,  None),
            r(2, 0x26, Solid,  Solid,  Open,   Bomb,   Some(Text)),
        ],
        [
            r(4, 0x15, Open,   Open,   Locked, Solid,  None),
            r(4, 0x12, Bomb,   Solid,  Locked, Open,   Some(Dark)),
            r(1, 0x1A, Solid,  Locked, Solid,  Solid,  None),
            r(1, 0x15, Solid,  Solid,  Locked, Locked, None),
            r(5, 0x24, Shut,   Locked, Open,   Solid,  Some(Dim)),
            r(5, 0x07, Bomb,   Open,   Solid,  Locked, None),
            r(5, 0x14, Solid,  Locked, Solid,  Open,   None),
            r(5, 0x15, Solid,  Solid,  Open,   Locked, Some(Dark)),
            r(6, 0x0D, Open,   Bomb,   Shut,   Solid,  None),
            r(6, 0x14, Locked, Solid,  Open,   Bomb,   Some(Dark)),
            r(3, 0x1D, Solid,  Shut,   Solid,  Solid,  None),
            r(3, 0x26, Solid,  Solid,  Open,   Open,   Some(Text)),
            r(6, 0x00, Locked, Open,   Open,   Solid,  None),
            r(6, 0x13, Open,   Solid,  Solid,  Open,   Some(Dark)),
            r(2, 0x1D, Shut,   Locked, Open,   Solid,  None),
            r(2, 0x00, Open,   Solid,  Bomb,   Locked, None),
        ],
        [
            r(4, 0x18, Locked, Locked, Open,   Solid,  Some(Dark)),
            r(4, 0x17, Locked, Shut,   Solid,  Locked, None),
            r(4, 0x0A, Solid,  Solid,  Solid,  Open,   None),
            r(1, 0x17, Locked, Solid,  Open,   Solid,  None),
            r(5, 0x1E, Shut,   Solid,  Solid,  Solid,  None),
            r(1, 0x04, Solid,  Shut,   Locked, Solid,  None),
            r(1, 0x29, Solid,  Solid,  Solid,  Open,   Some(Dim)),
            r(5, 0x17, Open,   Solid,  Open,   Solid,  Some(Dark)),
            r(6, 0x0A, Shut,   Solid,  Shut,   Solid,  None),
            r(6, 0x13, Shut,   Shut,   Solid,  Solid,  Some(Dark)),
            r(6, 0x22, Solid,  Solid,  Solid,  Open,   None),
            r(3, 0x0A, Shut,   Solid,  Locked, Solid,  None),
            r(6, 0x17, Shut,   Solid,  Solid,  Solid,  Some(Dark)),
            r(3, 0x29, Solid,  Solid,  Open,   Solid,  Some(Dim)),
            r(2, 0x25, Open,   Open,   Open,   Solid,  Some(Sand)),
            r(2, 0x00, Bomb,   Solid,  Bomb,   Open,   None),
        ],
        [
            r(4, 0x15, Open,   Solid,  Open,   Solid,  Some(Dark)),
            r(1, 0x26, Solid,  Open,   Solid,  Solid,  Some(Text)),
            r(1, 0x22, Solid,  Open,   Locked, Shut,   None),
            r(1, 0x1F, Open,   Locked, Bomb,   Open,   None),
            r(1, 0x02, Solid,  Open,   Bomb,   Locked, None),
            r(1, 0x0D, Locked, Solid,  Solid,  Open,   None),
            r(5, 0x12, Solid,  Open,   Locked, Solid,  Some(Dark)),
            r(5, 0x15, Open,   Solid,  Open,   Open,   None),
            r(6, 0x01, Open,   Solid,  Open,   Solid,  None),
            r(3, 0x00, Solid,  Open,   Open,   Solid,  None),
            r(3, 0x0F, Solid,  Locked, Open,   Open,   None),
            r(3, 0x08, Locked, Locked, Open,   Locked, None),
            r(3, 0x00, Solid,  Bomb,   Open,   Locked, None),
            r(3, 0x25, Shut,   Solid,  Shut,   Bomb,   Some(Sand)),
            r(2, 0x02, Open,   Open,   Shut,   Solid,  None),
            r(2, 0x24, Bomb,   Solid,  Bomb,   Open,   Some(Dim)),
        ],
        [
            r(4, 0x11, Open,   Open,   Solid,  Solid,  Some(Dark)),
            r(4, 0x03, Solid,  Solid,  Open,   Open,   None),
            r(1, 0x1E, Locked, Shut,   Solid,  Solid,  None),
            r(1, 0x02, Bomb,   Open,   Open,   Open,   None),
            r(1, 0x03, Bomb,   Solid,  Solid,  Open,   None),
            r(5, 0x13, Solid,  Shut,   Open,   Solid,  None),
            r(5, 0x00, Locked, Open,   Open,   Shut,   None),
            r(5, 0x17, Open,   Solid,  Solid,  Open,   Some(Dark)),
            r(6, 0x24, Shut,   Solid,  Open,   Solid,  None),
            r(3, 0x1D, Open,   Locked, Shut,   Solid,  None),
            r(3, 0x00, Open,   Open,   Solid,  Locked, None),
            r(3, 0x00, Open,   Bomb,   Open,   Open,   None),
            r(3, 0x1F, Open,   Shut,   Solid,  Bomb,   None),
            r(3, 0x1E, Shut,   Solid,  Solid,  Shut,   None),
            r(2, 0x1F, Open,   Locked, Open,   Solid,  None),
            r(2, 0x03, Bomb,   Solid,  Bomb,   Locked, None),
        ],
        [
            None,
            r(4, 0x02, Open,   Locked, Open,   Solid,  None),
            r(4, 0x0C, Solid,  Solid,  Solid,  Locked, Some(Dark)),
            r(1, 0x1E, Open,   Solid,  Locked, Solid,  None),
            r(5, 0x1A, Solid,  Bomb,   Solid,  Solid,  None),
            r(5, 0x02, Shut,   Bomb,   Solid,  Bomb,   None),
            r(5, 0x18, Shut,   Locked, Open,   Bomb,   Some(Dark)),
            r(5, 0x26, Solid,  Solid,  Bomb,   Locked, Some(Text)),
            r(6, 0x1D, Open,   Solid,  Open,   Solid,  None),
            r(3, 0x1B, Open,   Solid,  Solid,  Solid,  None),
            r(6, 0x26, Solid,  Solid,  Locked, Solid,  Some(Text)),
            r(3, 0x11, Open,   Solid,  Open,   Solid,  None),
            r(2, 0x00, Solid,  Open,   Solid,  Solid,  None),
            r(2, 0x03, Solid,  Open,   Open,   Shut,   None),
            r(2, 0x0D, Open,   Locked, Open,   Open,   None),
            r(2, 0x1E, Bomb,   Solid,  Solid,  Locked, None),
        ],
        [
            r(4, 0x00, Solid,  Open,   Solid,  Solid,  None),
            r(4, 0x21, Open,   Solid,  Open,   Open,   None),
            r(1, 0x00, Solid,  Open,   Solid,  Solid,  None),
            r(1, 0x21, Locked, Open,   Open,   Open,   None),
            r(1, 0x1D, Solid,  Solid,  Solid,  Open,   None),
            None,
            r(5, 0x21, Open,   Open,   Open,   Solid,  None),
            r(5, 0x1D, Bomb,   Solid,  Solid,  Open,   None),
            r(6, 0x1F, Open,   Locked, Solid,  Solid,  None),
            r(6, 0x21, Solid,  Open,   Open,   Locked, None),
            r(6, 0x03, Locked, Solid,  Solid,  Open,   Some(Dark)),
            r(3, 0x03, Open,   Open,   Solid,  Solid,  None),
            r(3, 0x21, Solid,  Solid,  Open,   Open,   None),
            r(2, 0x21, Open,   Open,   Open,   Solid,  None),
            r(2, 0x00, Open,   Solid,  Solid,  Open,   None),
            None,
        ],
        [
            None,
            r(9, 0x13, Solid,  Locked, Shut,   Solid,  Some(Dark)),
            r(9, 0x26, Solid,  Solid,  Open,   Locked, Some(Text)),
            r(9, 0x1A, Solid,  Bomb,   Solid,  Solid,  None),
            r(9, 0x1A, Solid,  Solid,  Solid,  Bomb,   None),
            r(9, 0x0A, Solid,  Bomb,   Solid,  Solid,  None),
            r(9, 0x26, Solid,  Solid,  Locked, Bomb,   Some(Text)),
            r(9, 0x1A, Solid,  Solid,  Bomb,   Solid,  None),
            r(7, 0x26, Solid,  Bomb,   Bomb,   Solid,  None),
            r(7, 0x0A, Solid,  Shut,   Shut,   Bomb,   None),
            r(7, 0x24, Solid,  Solid,  Solid,  Shut,   Some(Dim)),
            r(7, 0x25, Solid,  Solid,  Locked, Solid,  Some(Sand)),
            r(7, 0x23, Solid,  Bomb,   Open,   Solid,  None),
            r(7, 0x08, Solid,  Solid,  Solid,  Bomb,   None),
            r(8, 0x00, Solid,  Solid,  Shut,   Solid,  None),
            None,
        ],
        [
            r(9, 0x08, Solid,  Solid,  Bomb,   Solid,  None),
            r(9, 0x25, Open,   Solid,  Shut,   Solid,  None),
            r(9, 0x26, Shut,   Locked, Locked, Solid,  None),
            r(9, 0x00, Solid,  Solid,  Locked, Locked, Some(Dark)),
            r(9, 0x1C, Solid,  Locked, Open,   Solid,  None),
            r(9, 0x14, Solid,  Open,   Bomb,   Locked, Some(Dark)),
            r(9, 0x0A, Locked, Solid,  Open,   Open,   None),
            r(9, 0x1F, Bomb,   Solid,  Bomb,   Solid,  None),
            r(7, 0x16, Bomb,   Locked, Open,   Solid,  Some(Dark)),
            r(7, 0x1F, Shut,   Bomb,   Solid,  Locked, None),
            r(7, 0x1A, Solid,  Bomb,   Solid,  Bomb,   None),
            r(7, 0x00, Locked, Locked, Solid,  Bomb,   None),
            r(7, 0x24, Shut,   Solid,  Solid,  Locked, Some(Dim)),
            r(8, 0x11, Solid,  Bomb,   Open,   Solid,  None),
            r(8, 0x24, Shut,   Shut,   Locked, Bomb,   None),
            r(8, 0x1A, Solid,  Solid,  Solid,  Open,   None),
        ],
        [
            r(9, 0x1A, Bomb,   Solid,  Solid,  Solid,  None),
            r(9, 0x25, Open,   Bomb,   Shut,   Solid,  None),
            r(9, 0x1D, Locked, Locked, Solid,  Bomb,   None),
            r(9, 0x12, Locked, Bomb,   Locked, Locked, None),
            r(9, 0x17, Open,   Solid,  Open,   Bomb,   Some(Dark)),
            r(9, 0x0E, Bomb,   Locked, Bomb,   Solid,  None),
            r(9, 0x03, Open,   Bomb,   Locked, Locked, None),
            r(9, 0x0A, Bomb,   Solid,  Bomb,   Bomb,   None),
            r(7, 0x26, Open,   Solid,  Locked, Solid,  Some(Text)),
            r(7, 0x1A, Solid,  Bomb,   Solid,  Solid,  None),
            r(7, 0x04, Solid,  Shut,   Solid,  Bomb,   None),
            r(7, 0x29, Solid,  Solid,  Solid,  Open,   Some(Dim)),
            r(8, 0x29, Solid,  Solid,  Open,   Solid,  Some(Dim)),
            r(8, 0x26, Open,   Bomb,   Solid,  Solid,  None),
            r(8, 0x00, Locked, Solid,  Bomb,   Bomb,   None),
            None,
        ],
        [
            r(9, 0x0A, Solid,  Bomb,   Locked, Solid,  None),
            r(9, 0x25, Open,   Solid,  Shut,   Bomb,   None),
            r(9, 0x27, Solid,  Solid,  Shut,   Solid,  Some(Dim)),
            r(9, 0x19, Locked, Bomb,   Solid,  Solid,  Some(Dark)),
            r(9, 0x14, Open,   Solid,  Solid,  Bomb,   None),
            r(9, 0x26, Bomb,   Solid,  Solid,  Solid,  None),
            r(9, 0x00, Locked, Bomb,   Solid,  Solid,  None),
            r(9, 0x23, Bomb,   Solid,  Open,   Bomb,   Some(Dim)),
            r(7, 0x0D, Locked, Shut,   Solid,  Solid,  None),
            r(7, 0x24, Solid,  Bomb,   Open,   Open,   None),
            r(7, 0x25, Solid,  Solid,  Solid,  Bomb,   None),
            r(8, 0x26, Solid,  Bomb,   Open,   Solid,  Some(Text)),
            r(8, 0x05, Shut,   Solid,  Bomb,   Bomb,   None),
            r(8, 0x26, Solid,  Solid,  Open,   Solid,  Some(Text)),
            r(8, 0x23, Bomb,   Shut,   Locked, Solid,  None),
            r(8, 0x1B, Solid,  Solid,  Solid,  Shut,   None),
        ],
        [
            r(9, 0x16, Locked, Solid,  Locked, Solid,  None),
            r(9, 0x00, Open,   Solid,  Shut,   Solid,  Some(Dark)),
            r(9, 0x28, Shut,   Solid,  Shut,   Solid,  Some(Dark)),
            r(9, 0x26, Solid,  Solid,  Bomb,   Solid,  Some(Text)),
            r(9, 0x00, Solid,  Open,   Open,   Solid,  None),
            r(9, 0x00, Solid,  Open,   Bomb,   Open,   None),
            r(9, 0x25, Solid,  Solid,  Open,   Open,   None),
            r(9, 0x1E, Open,   Solid,  Open,   Solid,  None),
            r(7, 0x26, Solid,  Solid,  Locked, Solid,  Some(Text)),
            r(7, 0x18, Shut,   Solid,  Open,   Solid,  None),
            None,
            r(8, 0x23, Open,   Shut,   Solid,  Solid,  Some(Dark)),
            r(8, 0x1C, Bomb,   Solid,  Solid,  Shut,   None),
            r(8, 0x25, Shut,   Locked, Open,   Solid,  None),
            r(8, 0x00, Locked, Solid,  Open,   Locked, None),
            None,
        ],
        [
            r(9, 0x14, Locked, Shut,   Solid,  Solid,  Some(Dark)),
            r(9, 0x11, Open,   Solid,  Open,   Shut,   None),
            r(9, 0x1B, Shut,   Solid,  Solid,  Solid,  None),
            r(9, 0x23, Bomb,   Solid,  Locked, Solid,  None),
            r(9, 0x0C, Open,   Bomb,   Open,   Solid,  None),
            r(9, 0x1A, Bomb,   Bomb,   Bomb,   Bomb,   None),
            r(9, 0x19, Open,   Solid,  Open,   Bomb,   None),
            r(9, 0x14, Open,   Solid,  Solid,  Solid,  Some(Dark)),
            r(7, 0x00, Locked, Open,   Open,   Solid,  None),
            r(7, 0x02, Open,   Shut,   Bomb,   Open,   None),
            r(7, 0x19, Solid,  Solid,  Bomb,   Open,   Some(Dark)),
            r(7, 0x26, Solid,  Solid,  Open,   Solid,  Some(Text)),
            r(8, 0x24, Solid,  Open,   Solid,  Solid,  Some(Dim)),
            r(8, 0x11, Open,   Open,   Solid,  Open,   Some(Dark)),
            r(8, 0x24, Shut,   Locked, Bomb,   Shut,   None),
            r(8, 0x18, Solid,  Solid,  Solid,  Locked, Some(Dark)),
        ],
        [
            None,
            r(9, 0x1A, Open,   Open,   Open,   Solid,  None),
            r(9, 0x26, Solid,  Locked, Solid,  Open,   None),
            r(9, 0x1B, Locked, Solid,  Locked, Locked, None),
            r(9, 0x1F, Open,   Open,   Solid,  Solid,  None),
            r(9, 0x18, Bomb,   Open,   Solid,  Open,   Some(Dark)),
            r(9, 0x26, Shut,   Solid,  Open,   Shut,   Some(Text)),
            None,
            r(7, 0x00, Open,   Bomb,   Open,   Solid,  None),
            r(7, 0x23, Bomb,   Open,   Open,   Bomb,   None),
            r(7, 0x09, Bomb,   Open,   Open,   Open,   Some(Dark)),
            r(7, 0x1E, Shut,   Open,   Solid,  Open,   None),
            r(7, 0x24, Solid,  Open,   Solid,  Open,   Some(Dim)),
            r(7, 0x13, Solid,  Solid,  Solid,  Open,   None),
            r(8, 0x25, Bomb,   Solid,  Open,   Solid,  None),
            None,
        ],
        [
            None,
            r(9, 0x1B, Open,   Solid,  Solid,  Solid,  None),
            None,
            r(9, 0x1F, Locked, Locked, Solid,  Solid,  None),
            r(9, 0x1A, Solid,  Solid,  Solid,  Locked, None),
            None,
            r(9, 0x21, Open,   Solid,  Open,   Solid,  Some(Dim)),
            None,
            r(7, 0x23, Open,   Solid,  Solid,  Solid,  Some(Dim)),
            r(7, 0x21, Open,   Open,   Open,   Solid,  None),
            r(7, 0x1D, Open,   Solid,  Solid,  Open,   None),
            None,
            r(8, 0x1A, Solid,  Open,   Solid,  Solid,  None),
            r(8, 0x23, Solid,  Open,   Solid,  Shut,   None),
            r(8, 0x21, Open,   Open,   Open,   Open,   None),
            r(8, 0x16, Solid,  Solid,  Solid,  Open,   Some(Dark)),
        ],
    ]
};

/// Nothing here: a cell that still resolves (and so still gets an
/// elevation filler when raised) but stacks no pieces.
const EMPTY: TileRef = &[];

fn polar_row(
    elevation: i32,
    cap_w: TileRef,
    span: TileRef,
    door: TileRef,
    cap_e: TileRef,
) -> Vec<Option<TileData>> {
    let mut row = vec![Some(TileData::new(elevation, cap_w))];
    for i in 0..13 {
        let tile = if i == 6 { door } else { span };
        row.push(Some(TileData::new(elevation, tile)));
    }
    row.push(Some(TileData::new(elevation, EMPTY)));
    row.push(Some(TileData::new(elevation, cap_e)));
    row
}

fn make_room(grid_y: usize, grid_x: usize, room: &Room) -> Result<Screen> {
    let level = &LEVELS[room.level as usize - 1];
    let elevation = level.elevation;
    let [door_n, door_e, door_s, door_w] = room.doors;

    let overlay = ROOM_TEXTS
        .iter()
        .find(|t| t.row == grid_y + 1 && t.col == grid_x + 1);

    let mut rows: TileGrid = match overlay {
        Some(t) => make_text_floor(elevation, t.messages, t.npcs, t.items),
        None => {
            let mut rows = TileGrid::new();
            for line in template(room.template)? {
                let mut row = Vec::with_capacity(line.len());
                for code in line.bytes() {
                    row.push(Some(TileData::new(elevation, floor_tile(code)?)));
                }
                rows.push(row);
            }
            rows
        }
    };

    // East and west walls, with the doors at the horizontal midline.
    for (row_index, row) in rows.iter_mut().enumerate() {
        let (west_outer, west_inner, east_inner, east_outer) = if row_index == 3 {
            (
                door_w.outer(Dir::W),
                door_w.inner(Dir::W),
                door_e.inner(Dir::E),
                door_e.outer(Dir::E),
            )
        } else {
            (
                &tiles::WALL_OUTER_EW as TileRef,
                &tiles::WALL_INNER_EW as TileRef,
                &tiles::WALL_INNER_EW as TileRef,
                &tiles::WALL_OUTER_EW as TileRef,
            )
        };
        row.insert(0, Some(TileData::new(elevation, west_inner)));
        row.insert(0, Some(TileData::new(elevation, west_outer)));
        row.push(Some(TileData::new(elevation, east_inner)));
        row.push(Some(TileData::new(elevation, east_outer)));
    }

    // North and south walls, inner strip facing the room.
    rows.insert(
        0,
        polar_row(
            elevation,
            &tiles::WALL_INNER_CAP_W,
            &tiles::WALL_INNER_NS,
            door_n.inner(Dir::N),
            &tiles::WALL_INNER_CAP_E,
        ),
    );
    rows.insert(
        0,
        polar_row(
            elevation,
            &tiles::WALL_OUTER_CAP_W,
            &tiles::WALL_OUTER_NS,
            door_n.outer(Dir::N),
            &tiles::WALL_OUTER_CAP_E,
        ),
    );
    rows.push(polar_row(
        elevation,
        &tiles::WALL_INNER_CAP_W,
        &tiles::WALL_INNER_NS,
        door_s.inner(Dir::S),
        &tiles::WALL_INNER_CAP_E,
    ));
    rows.push(polar_row(
        elevation,
        &tiles::WALL_OUTER_CAP_W,
        &tiles::WALL_OUTER_NS,
        door_s.outer(Dir::S),
        &tiles::WALL_OUTER_CAP_E,
    ));

    Ok(Screen::new(level.palettes(room.style), rows))
}

pub fn screen_grid() -> Result<ScreenGrid> {
    let mut grid = ScreenGrid::with_capacity(GRID_ROWS);
    for (grid_y, room_row) in ROOMS.iter().enumerate() {
        let mut row = Vec::with_capacity(GRID_COLS);
        for (grid_x, room) in room_row.iter().enumerate() {
            row.push(match room {
                Some(room) => Some(make_room(grid_y, grid_x, room)?),
                None => None,
            });
        }
        grid.push(row);
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SCREEN_COLS, SCREEN_ROWS};

    fn base_at(screen: &Screen, row: usize, col: usize) -> TileRef {
        screen.tiles[row][col].as_ref().unwrap().base
    }

    fn same(a: TileRef, b: TileRef) -> bool {
        std::ptr::eq(a.as_ptr(), b.as_ptr())
    }

    #[test]
    fn every_room_builds_to_screen_size() {
        let grid = screen_grid().unwrap();
        assert_eq!(grid.len(), GRID_ROWS);
        for row in &grid {
            assert_eq!(row.len(), GRID_COLS);
            for screen in row.iter().flatten() {
                assert_eq!(screen.tiles.len(), SCREEN_ROWS);
                for tile_row in &screen.tiles {
                    assert_eq!(tile_row.len(), SCREEN_COLS);
                }
            }
        }
    }

    #[test]
    fn every_template_is_seven_by_twelve() {
        for (index, rows) in TEMPLATES {
            assert_eq!(rows.len(), 7);
            for row in rows {
                assert_eq!(row.len(), 12, "template {:#04x}", index);
                for code in row.bytes() {
                    floor_tile(code).unwrap();
                }
            }
        }
    }

    #[test]
    fn unknown_templates_are_reported() {
        assert!(matches!(
            template(0x7F),
            Err(BuilderError::UnknownRoomTemplate(0x7F))
        ));
    }

    #[test]
    fn equatorial_doors_sit_on_the_midline() {
        let grid = screen_grid().unwrap();
        // Room 01,01 has a locked east door and a solid west door.
        let screen = grid[0][0].as_ref().unwrap();
        // Floor row 3 lands at screen row 5 after the two north wall rows.
        assert!(same(base_at(screen, 5, 0), &tiles::WALL_OUTER_DOOR_W));
        assert!(same(base_at(screen, 5, 1), &tiles::WALL_INNER_DOOR_SOLID_EW));
        assert!(same(base_at(screen, 5, 14), &tiles::WALL_INNER_DOOR_LOCKED_E));
        assert!(same(base_at(screen, 5, 15), &tiles::WALL_OUTER_DOOR_E));
    }

    #[test]
    fn polar_walls_put_the_door_at_column_seven() {
        let grid = screen_grid().unwrap();
        // Room 01,01 has an open south door.
        let screen = grid[0][0].as_ref().unwrap();
        assert!(same(base_at(screen, 9, 7), &tiles::WALL_INNER_DOOR_OPEN_NS));
        assert!(same(base_at(screen, 10, 7), &tiles::WALL_OUTER_DOOR_S));
        assert!(same(base_at(screen, 10, 1), &tiles::WALL_OUTER_NS));
        assert!(same(base_at(screen, 10, 0), &tiles::WALL_OUTER_CAP_W));
        assert!(same(base_at(screen, 10, 15), &tiles::WALL_OUTER_CAP_E));
        assert!(base_at(screen, 10, 14).is_empty());
    }

    #[test]
    fn level_elevation_reaches_the_floor_cells() {
        let grid = screen_grid().unwrap();
        // Room 01,01 belongs to level 4, which sits three plates up.
        let raised = grid[0][0].as_ref().unwrap();
        assert_eq!(raised.tiles[5][5].as_ref().unwrap().elevation, 3);
        // Room 03,03 belongs to level 1 at ground height.
        let flat = grid[2][2].as_ref().unwrap();
        assert_eq!(flat.tiles[5][5].as_ref().unwrap().elevation, 0);
    }

    #[test]
    fn text_rooms_render_their_message_floor() {
        let grid = screen_grid().unwrap();
        // Room 01,01 carries the waterfall hint on an abyss template.
        let screen = grid[0][0].as_ref().unwrap();
        assert_eq!(screen.palettes.len(), 2);
        // Interior row 0 starts at screen row 2, column 2.
        let has_glyph = (2..14).any(|col| {
            same(base_at(screen, 2, col), &tiles::TEXT_GLYPH)
        });
        assert!(has_glyph);
    }

    #[test]
    fn dark_rooms_get_two_palettes_and_plain_rooms_one() {
        let grid = screen_grid().unwrap();
        let dark = grid[0][1].as_ref().unwrap();
        assert_eq!(dark.palettes.len(), 2);
        let plain = grid[0][5].as_ref().unwrap();
        assert_eq!(plain.palettes.len(), 1);
    }
}
