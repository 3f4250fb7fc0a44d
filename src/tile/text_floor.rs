//! Lays out the interior of a message room: two lines of glyph tiles, an
//! NPC flanked by candles, and up to three items with price tags.
//!
//! The row and column constants here pin down the reference layout; screen
//! compilers wrap the returned 7x12 grid in their own walls.

use crate::tile::text::Message;
use crate::tile::{tiles, TileRef};
use crate::types::TileData;

pub const TEXT_ROWS: usize = 7;
pub const TEXT_COLS: usize = 12;

const CANDLE_COLS: [usize; 2] = [2, 9];
const NPC_COLS: [usize; 2] = [5, 6];
const ITEM_ROW: usize = 5;
const ITEM_COLS_ONE: [usize; 1] = [5];
const ITEM_COLS_TWO: [usize; 2] = [3, 7];
const ITEM_COLS_THREE: [usize; 3] = [2, 5, 8];

/// An item on offer. A priced entry with no tile still renders its price
/// tag, which is how a flat charge (door repair) is displayed.
#[derive(Clone, Copy)]
pub struct PriceItem {
    pub tile: Option<TileRef>,
    pub price: Option<i32>,
}

impl PriceItem {
    pub const fn free(tile: TileRef) -> Self {
        Self { tile: Some(tile), price: None }
    }

    pub const fn priced(tile: TileRef, price: i32) -> Self {
        Self { tile: Some(tile), price: Some(price) }
    }

    pub const fn charge(price: i32) -> Self {
        Self { tile: None, price: Some(price) }
    }
}

pub type TextFloor = Vec<Vec<Option<TileData>>>;

/// Builds the 7x12 interior of a cave or message room.
///
/// Alternate messages beyond the first are kept by callers for their own
/// purposes; only `messages[0]` is rendered, at most two lines of it.
pub fn make_text_floor(
    elevation: i32,
    messages: &[Message],
    npcs: &[TileRef],
    items: &[PriceItem],
) -> TextFloor {
    let mut floor: TextFloor = (0..TEXT_ROWS)
        .map(|_| {
            (0..TEXT_COLS)
                .map(|_| Some(TileData::new(elevation, &tiles::TEXT_FLOOR)))
                .collect()
        })
        .collect();

    let mut set = |row: usize, col: usize, tile: TileRef| {
        floor[row][col] = Some(TileData::new(elevation, tile));
    };

    let lines: &[&str] = messages.first().map(|m| *m).unwrap_or(&[]);
    for (row, line) in lines.iter().take(2).enumerate() {
        let start = (TEXT_COLS - line.len().min(TEXT_COLS)) / 2;
        for (offset, ch) in line.chars().take(TEXT_COLS).enumerate() {
            if let Some(glyph) = glyph_tile(ch) {
                set(row, start + offset, glyph);
            }
        }
    }

    if !npcs.is_empty() {
        let npc_row = lines.len().max(2);
        for col in CANDLE_COLS {
            set(npc_row, col, &tiles::CANDLE);
        }
        for (slot, col) in NPC_COLS.into_iter().enumerate() {
            let npc = npcs.get(slot).copied().unwrap_or(npcs[0]);
            set(npc_row, col, npc);
        }
    }

    if let [only] = items {
        if let Some(tile) = only.tile {
            if is_sword(tile) {
                set(ITEM_ROW, 4, &tiles::TRIANGLE);
                set(ITEM_ROW, 5, tile);
                set(ITEM_ROW, 6, &tiles::TRIANGLE);
                return floor;
            }
        }
    }

    let columns: &[usize] = match items.len() {
        0 => &[],
        1 => &ITEM_COLS_ONE,
        2 => &ITEM_COLS_TWO,
        _ => &ITEM_COLS_THREE,
    };

    let first_price = items.first().and_then(|item| item.price).unwrap_or(0);
    if items.len() > 1 && first_price.unsigned_abs() >= 10 {
        set(ITEM_ROW, 0, &tiles::ITEM_RUPEE_ORANGE);
        set(ITEM_ROW, 1, &tiles::TEXT_TIMES);
    }

    for (item, &col) in items.iter().zip(columns) {
        if let Some(tile) = item.tile {
            set(ITEM_ROW, col, tile);
        }
        if let Some(price) = item.price {
            let sign = if price < 0 { &tiles::TEXT_DASH } else { &tiles::TEXT_TIMES };
            set(ITEM_ROW + 1, col, sign);
            set(ITEM_ROW + 1, col + 1, &tiles::TEXT_GLYPH);
        }
    }

    floor
}

fn is_sword(tile: TileRef) -> bool {
    [
        tiles::ITEM_SWORD.as_slice(),
        tiles::ITEM_WHITE_SWORD.as_slice(),
        tiles::ITEM_MAGICAL_SWORD.as_slice(),
    ]
    .iter()
    .any(|sword| std::ptr::eq(tile.as_ptr(), sword.as_ptr()))
}

fn glyph_tile(ch: char) -> Option<TileRef> {
    match ch {
        ' ' => None,
        '-' => Some(&tiles::TEXT_DASH),
        '.' => Some(&tiles::TEXT_PERIOD),
        ',' => Some(&tiles::TEXT_COMMA),
        '!' => Some(&tiles::TEXT_EXCLAIM),
        '\'' => Some(&tiles::TEXT_APOSTROPHE),
        '?' => Some(&tiles::TEXT_QUESTION),
        _ => Some(&tiles::TEXT_GLYPH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::text;

    fn base_of(floor: &TextFloor, row: usize, col: usize) -> TileRef {
        floor[row][col].as_ref().unwrap().base
    }

    fn is_tile(floor: &TextFloor, row: usize, col: usize, tile: TileRef) -> bool {
        std::ptr::eq(base_of(floor, row, col).as_ptr(), tile.as_ptr())
    }

    #[test]
    fn lines_are_centered_and_rendered_as_glyphs() {
        let floor = make_text_floor(0, &[text::CAVE_SECRET_EVERYBODY], &[], &[]);
        // "ITS A SECRET" is 12 wide, so it starts at column 0.
        assert!(is_tile(&floor, 0, 0, &tiles::TEXT_GLYPH));
        assert!(is_tile(&floor, 0, 3, &tiles::TEXT_FLOOR));
        // "TO EVERYBODY" fills the second row edge to edge too.
        assert!(is_tile(&floor, 1, 0, &tiles::TEXT_GLYPH));
        assert!(is_tile(&floor, 1, 11, &tiles::TEXT_GLYPH));
    }

    #[test]
    fn short_lines_get_the_centering_offset() {
        let floor = make_text_floor(0, &[&["TAKE THIS"]], &[], &[]);
        // 9 characters center at floor((12 - 9) / 2) = 1.
        assert!(is_tile(&floor, 0, 0, &tiles::TEXT_FLOOR));
        assert!(is_tile(&floor, 0, 1, &tiles::TEXT_GLYPH));
        assert!(is_tile(&floor, 0, 5, &tiles::TEXT_FLOOR));
    }

    #[test]
    fn npc_row_places_candles_and_both_npc_tiles() {
        let floor = make_text_floor(
            0,
            &[text::CAVE_TAKE_ANY],
            &[tiles::OLD_MAN.as_slice()],
            &[],
        );
        assert!(is_tile(&floor, 2, 2, &tiles::CANDLE));
        assert!(is_tile(&floor, 2, 9, &tiles::CANDLE));
        // A lone NPC occupies both center columns.
        assert!(is_tile(&floor, 2, 5, &tiles::OLD_MAN));
        assert!(is_tile(&floor, 2, 6, &tiles::OLD_MAN));
    }

    #[test]
    fn two_npcs_sit_side_by_side() {
        let floor = make_text_floor(
            0,
            &[text::CAVE_SHOP_BUY_MEDICINE],
            &[tiles::OLD_WOMAN.as_slice(), tiles::ITEM_LETTER.as_slice()],
            &[],
        );
        assert!(is_tile(&floor, 2, 5, &tiles::OLD_WOMAN));
        assert!(is_tile(&floor, 2, 6, &tiles::ITEM_LETTER));
    }

    #[test]
    fn three_priced_items_lay_out_with_the_rupee_prefix() {
        let items = [
            PriceItem::priced(&tiles::ITEM_MAGICAL_SHIELD, 130),
            PriceItem::priced(&tiles::ITEM_BOMB, 20),
            PriceItem::priced(&tiles::ITEM_ARROW, 80),
        ];
        let floor = make_text_floor(0, &[text::CAVE_SHOP_BUY_SOMETHIN], &[], &items);
        assert!(is_tile(&floor, 5, 0, &tiles::ITEM_RUPEE_ORANGE));
        assert!(is_tile(&floor, 5, 1, &tiles::TEXT_TIMES));
        assert!(is_tile(&floor, 5, 2, &tiles::ITEM_MAGICAL_SHIELD));
        assert!(is_tile(&floor, 5, 5, &tiles::ITEM_BOMB));
        assert!(is_tile(&floor, 5, 8, &tiles::ITEM_ARROW));
        // Price tags go on the row below each icon.
        assert!(is_tile(&floor, 6, 2, &tiles::TEXT_TIMES));
        assert!(is_tile(&floor, 6, 3, &tiles::TEXT_GLYPH));
    }

    #[test]
    fn negative_prices_render_a_dash_sign() {
        let items = [PriceItem::charge(-20)];
        let floor = make_text_floor(0, &[text::CAVE_DOOR_REPAIR], &[], &items);
        // No icon for a flat charge, only the price tag below column 5.
        assert!(is_tile(&floor, 5, 5, &tiles::TEXT_FLOOR));
        assert!(is_tile(&floor, 6, 5, &tiles::TEXT_DASH));
        assert!(is_tile(&floor, 6, 6, &tiles::TEXT_GLYPH));
    }

    #[test]
    fn single_sword_is_flanked_by_triangles() {
        let items = [PriceItem::free(&tiles::ITEM_SWORD)];
        let floor = make_text_floor(0, &[text::CAVE_ITEM_TAKE_THIS], &[], &items);
        assert!(is_tile(&floor, 5, 4, &tiles::TRIANGLE));
        assert!(is_tile(&floor, 5, 5, &tiles::ITEM_SWORD));
        assert!(is_tile(&floor, 5, 6, &tiles::TRIANGLE));
        assert!(is_tile(&floor, 6, 5, &tiles::TEXT_FLOOR));
    }

    #[test]
    fn cell_elevation_follows_the_argument() {
        let floor = make_text_floor(3, &[], &[], &[]);
        assert_eq!(floor[0][0].as_ref().unwrap().elevation, 3);
    }
}
