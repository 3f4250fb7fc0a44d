//! Cave screens: a 16x8 grid of rock, each location either solid stone or a
//! walled text floor reached from the overworld screen with the same label.

use crate::catalog::palette;
use crate::map::screen_label;
use crate::tile::text;
use crate::tile::text_floor::{make_text_floor, PriceItem};
use crate::tile::{tiles, TileRef};
use crate::types::{Screen, ScreenGrid, TileData, SCREEN_COLS, SCREEN_ROWS};

pub const GRID_COLS: usize = 16;
pub const GRID_ROWS: usize = 8;

/// What happens inside one cave.
struct Scenario {
    messages: &'static [text::Message],
    npcs: &'static [TileRef],
    items: &'static [PriceItem],
    /// South wall entrance width in tiles.
    entrance_width: usize,
}

const fn scenario(
    messages: &'static [text::Message],
    npcs: &'static [TileRef],
    items: &'static [PriceItem],
) -> Scenario {
    Scenario {
        messages,
        npcs,
        items,
        entrance_width: 2,
    }
}

static OLD_MAN: &[TileRef] = &[&tiles::OLD_MAN];
static OLD_WOMAN: &[TileRef] = &[&tiles::OLD_WOMAN];
static KEEPER: &[TileRef] = &[&tiles::KEEPER];
static MOBLIN: &[TileRef] = &[&tiles::MOBLIN_RED_CENTER];
static MEDICINE_SHOP: &[TileRef] = &[&tiles::OLD_WOMAN, &tiles::ITEM_LETTER];

static SCENARIOS: &[(&str, Scenario)] = &[
    (
        "item_sword",
        scenario(
            &[text::CAVE_ITEM_TAKE_THIS],
            OLD_MAN,
            &[PriceItem::free(&tiles::ITEM_SWORD)],
        ),
    ),
    (
        "item_white_sword",
        scenario(
            &[text::CAVE_ITEM_MASTER_USING],
            OLD_MAN,
            &[PriceItem::free(&tiles::ITEM_WHITE_SWORD)],
        ),
    ),
    (
        "item_magical_sword",
        scenario(
            &[text::CAVE_ITEM_MASTER_USING],
            OLD_MAN,
            &[PriceItem::free(&tiles::ITEM_MAGICAL_SWORD)],
        ),
    ),
    (
        "item_letter",
        scenario(
            &[text::CAVE_ITEM_SHOW_THIS],
            OLD_MAN,
            &[PriceItem::free(&tiles::ITEM_LETTER)],
        ),
    ),
    (
        "take_any",
        scenario(
            &[text::CAVE_TAKE_ANY],
            OLD_MAN,
            &[
                PriceItem::free(&tiles::ITEM_LIFE_POTION_RED),
                PriceItem::free(&tiles::ITEM_HEART_CONTAINER),
            ],
        ),
    ),
    (
        "take_road",
        Scenario {
            messages: &[text::CAVE_TAKE_ROAD],
            npcs: OLD_MAN,
            items: &[
                PriceItem::free(&tiles::ITEM_ROAD),
                PriceItem::free(&tiles::ITEM_ROAD),
                PriceItem::free(&tiles::ITEM_ROAD),
            ],
            entrance_width: 1,
        },
    ),
    ("secret_tree", scenario(&[text::CAVE_SECRET_TREE], OLD_MAN, &[])),
    ("meet_grave", scenario(&[text::CAVE_MEET_GRAVE], OLD_MAN, &[])),
    (
        "secret_everybody_10",
        scenario(
            &[text::CAVE_SECRET_EVERYBODY],
            MOBLIN,
            &[PriceItem::priced(&tiles::ITEM_RUPEE_ORANGE, 10)],
        ),
    ),
    (
        "secret_everybody_30",
        scenario(
            &[text::CAVE_SECRET_EVERYBODY],
            MOBLIN,
            &[PriceItem::priced(&tiles::ITEM_RUPEE_ORANGE, 30)],
        ),
    ),
    (
        "secret_everybody_100",
        scenario(
            &[text::CAVE_SECRET_EVERYBODY],
            MOBLIN,
            &[PriceItem::priced(&tiles::ITEM_RUPEE_ORANGE, 100)],
        ),
    ),
    (
        "shop_buy_medicine",
        scenario(
            &[text::CAVE_SHOP_BUY_MEDICINE],
            MEDICINE_SHOP,
            &[
                PriceItem::priced(&tiles::ITEM_LIFE_POTION_BLUE, 40),
                PriceItem::priced(&tiles::ITEM_LIFE_POTION_RED, 68),
            ],
        ),
    ),
    (
        "shop_1",
        scenario(
            &[text::CAVE_SHOP_EXPENSIVE],
            KEEPER,
            &[
                PriceItem::priced(&tiles::ITEM_KEY, 80),
                PriceItem::priced(&tiles::ITEM_RING_BLUE, 250),
                PriceItem::priced(&tiles::ITEM_BAIT, 60),
            ],
        ),
    ),
    (
        "shop_2",
        scenario(
            &[text::CAVE_SHOP_BUY_SOMETHIN],
            KEEPER,
            &[
                PriceItem::priced(&tiles::ITEM_MAGICAL_SHIELD, 130),
                PriceItem::priced(&tiles::ITEM_BOMB, 20),
                PriceItem::priced(&tiles::ITEM_ARROW, 80),
            ],
        ),
    ),
    (
        "shop_3",
        scenario(
            &[text::CAVE_SHOP_EXPENSIVE],
            KEEPER,
            &[
                PriceItem::priced(&tiles::ITEM_MAGICAL_SHIELD, 90),
                PriceItem::priced(&tiles::ITEM_BAIT, 100),
                PriceItem::priced(&tiles::ITEM_HEART, 10),
            ],
        ),
    ),
    (
        "shop_4",
        scenario(
            &[text::CAVE_SHOP_BUY_SOMETHIN],
            KEEPER,
            &[
                PriceItem::priced(&tiles::ITEM_MAGICAL_SHIELD, 160),
                PriceItem::priced(&tiles::ITEM_KEY, 100),
                PriceItem::priced(&tiles::ITEM_CANDLE_BLUE, 60),
            ],
        ),
    ),
    (
        "lets_play",
        scenario(
            &[text::CAVE_LETS_PLAY],
            OLD_MAN,
            &[
                PriceItem::priced(&tiles::ITEM_RUPEE_ORANGE, -10),
                PriceItem::priced(&tiles::ITEM_RUPEE_ORANGE, -10),
                PriceItem::priced(&tiles::ITEM_RUPEE_ORANGE, -10),
            ],
        ),
    ),
    (
        "door_repair",
        scenario(&[text::CAVE_DOOR_REPAIR], OLD_MAN, &[PriceItem::charge(-20)]),
    ),
    (
        "up_up",
        scenario(
            &[text::CAVE_PAY_TALK, text::CAVE_AINT_ENOUGH, text::CAVE_UP_UP],
            OLD_WOMAN,
            &[
                PriceItem::priced(&tiles::ITEM_RUPEE_ORANGE, -5),
                PriceItem::priced(&tiles::ITEM_RUPEE_ORANGE, -10),
                PriceItem::priced(&tiles::ITEM_RUPEE_ORANGE, -20),
            ],
        ),
    ),
    (
        "maze",
        scenario(
            &[
                text::CAVE_PAY_TALK,
                text::CAVE_AINT_ENOUGH,
                text::CAVE_YOURE_RICH,
                text::CAVE_MAZE,
            ],
            OLD_WOMAN,
            &[
                PriceItem::priced(&tiles::ITEM_RUPEE_ORANGE, -10),
                PriceItem::priced(&tiles::ITEM_RUPEE_ORANGE, -30),
                PriceItem::priced(&tiles::ITEM_RUPEE_ORANGE, -50),
            ],
        ),
    ),
];

/// Overworld screen label to cave scenario. Labels without an entry render
/// as solid rock.
static LOCATIONS: &[(&str, &str)] = &[
    ("B1", "take_any"),
    ("D1", "take_any"),
    ("E1", "shop_buy_medicine"),
    ("H1", "take_any"),
    ("K1", "item_white_sword"),
    ("M1", "shop_4"),
    ("N1", "shop_buy_medicine"),
    ("O1", "item_letter"),
    ("P1", "secret_everybody_100"),
    ("A2", "lets_play"),
    ("C2", "shop_3"),
    ("D2", "secret_everybody_30"),
    ("E2", "take_any"),
    ("G2", "lets_play"),
    ("K2", "up_up"),
    ("M2", "secret_tree"),
    ("N2", "take_road"),
    ("O2", "take_any"),
    ("P2", "lets_play"),
    ("B3", "item_magical_sword"),
    ("D3", "take_road"),
    ("F3", "shop_2"),
    ("G3", "shop_3"),
    ("H3", "shop_buy_medicine"),
    ("I3", "secret_everybody_30"),
    ("M3", "take_any"),
    ("N3", "secret_everybody_30"),
    ("P3", "take_any"),
    ("D4", "shop_buy_medicine"),
    ("E4", "shop_1"),
    ("N4", "secret_everybody_30"),
    ("E5", "shop_2"),
    ("G5", "shop_3"),
    ("H5", "take_any"),
    ("I5", "secret_everybody_30"),
    ("J5", "take_road"),
    ("K5", "shop_2"),
    ("L5", "shop_buy_medicine"),
    ("N5", "shop_3"),
    ("O5", "secret_everybody_10"),
    ("B6", "secret_everybody_10"),
    ("G6", "secret_everybody_10"),
    ("L6", "secret_everybody_10"),
    ("O6", "shop_4"),
    ("C7", "secret_everybody_100"),
    ("D7", "take_any"),
    ("E7", "shop_buy_medicine"),
    ("G7", "shop_4"),
    ("H7", "secret_everybody_30"),
    ("I7", "take_any"),
    ("K7", "take_any"),
    ("L7", "secret_everybody_100"),
    ("P7", "shop_2"),
    ("A8", "maze"),
    ("B8", "secret_everybody_30"),
    ("F8", "meet_grave"),
    ("G8", "lets_play"),
    ("H8", "item_sword"),
    ("I8", "shop_buy_medicine"),
    ("J8", "take_road"),
    ("L8", "take_any"),
    ("M8", "lets_play"),
    ("N8", "take_any"),
];

fn find_scenario(label: &str) -> Option<&'static Scenario> {
    let name = LOCATIONS
        .iter()
        .find(|(location, _)| *location == label)?
        .1;
    SCENARIOS
        .iter()
        .find(|(scenario_name, _)| *scenario_name == name)
        .map(|(_, scenario)| scenario)
}

/// One 16-wide wall strip. The entrance gap opens at columns 7 onward; the
/// inner strip keeps solid outer-rock corners.
fn wall_row(outer: bool, entrance_width: usize) -> Vec<Option<TileData>> {
    (0..SCREEN_COLS)
        .map(|column| {
            let tile: TileRef = if column >= 7 && column < 7 + entrance_width {
                &tiles::CAVE_ENTRANCE
            } else if outer || column == 0 || column == SCREEN_COLS - 1 {
                &tiles::CAVE_WALL_OUTER
            } else {
                &tiles::CAVE_WALL_INNER
            };
            Some(TileData::new(0, tile))
        })
        .collect()
}

fn scenario_screen(scenario: &Scenario) -> Screen {
    let mut rows = make_text_floor(0, scenario.messages, scenario.npcs, scenario.items);
    for row in &mut rows {
        row.insert(0, Some(TileData::new(0, &tiles::CAVE_WALL_INNER)));
        row.insert(0, Some(TileData::new(0, &tiles::CAVE_WALL_OUTER)));
        row.push(Some(TileData::new(0, &tiles::CAVE_WALL_INNER)));
        row.push(Some(TileData::new(0, &tiles::CAVE_WALL_OUTER)));
    }
    rows.insert(0, wall_row(false, 0));
    rows.insert(0, wall_row(true, 0));
    rows.push(wall_row(false, scenario.entrance_width));
    rows.push(wall_row(true, scenario.entrance_width));
    Screen::new(vec![palette::CAVE, palette::TEXT], rows)
}

fn solid_screen() -> Screen {
    let tiles: crate::types::TileGrid = (0..SCREEN_ROWS)
        .map(|_| {
            (0..SCREEN_COLS)
                .map(|_| Some(TileData::new(1, &tiles::ROCK_S)))
                .collect()
        })
        .collect();
    Screen::new(vec![palette::CAVE], tiles)
}

pub fn screen_grid() -> ScreenGrid {
    (0..GRID_ROWS)
        .map(|grid_y| {
            (0..GRID_COLS)
                .map(|grid_x| {
                    let label = screen_label(grid_x, grid_y);
                    Some(match find_scenario(&label) {
                        Some(scenario) => scenario_screen(scenario),
                        None => solid_screen(),
                    })
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_at(screen: &Screen, row: usize, col: usize) -> TileRef {
        screen.tiles[row][col].as_ref().unwrap().base
    }

    fn same(a: TileRef, b: TileRef) -> bool {
        std::ptr::eq(a.as_ptr(), b.as_ptr())
    }

    #[test]
    fn every_screen_is_full_size() {
        let grid = screen_grid();
        assert_eq!(grid.len(), GRID_ROWS);
        for row in &grid {
            assert_eq!(row.len(), GRID_COLS);
            for screen in row {
                let screen = screen.as_ref().unwrap();
                assert_eq!(screen.tiles.len(), SCREEN_ROWS);
                for tile_row in &screen.tiles {
                    assert_eq!(tile_row.len(), SCREEN_COLS);
                }
            }
        }
    }

    #[test]
    fn locations_reference_known_scenarios() {
        for (_, name) in LOCATIONS {
            assert!(
                SCENARIOS.iter().any(|(scenario, _)| scenario == name),
                "unknown scenario {}",
                name
            );
        }
    }

    #[test]
    fn unlisted_screens_are_solid_raised_rock() {
        let grid = screen_grid();
        // A1 is not a cave location.
        let screen = grid[0][0].as_ref().unwrap();
        let cell = screen.tiles[5][5].as_ref().unwrap();
        assert_eq!(cell.elevation, 1);
        assert!(same(cell.base, &tiles::ROCK_S));
        assert_eq!(screen.palettes.len(), 1);
    }

    #[test]
    fn cave_screens_wear_a_double_wall_border() {
        let grid = screen_grid();
        // B1 hosts a take_any cave.
        let screen = grid[0][1].as_ref().unwrap();
        assert_eq!(screen.palettes.len(), 2);
        // North rows are outer then inner.
        assert!(same(base_at(screen, 0, 5), &tiles::CAVE_WALL_OUTER));
        assert!(same(base_at(screen, 1, 5), &tiles::CAVE_WALL_INNER));
        // Inner strips keep outer rock at the screen corners.
        assert!(same(base_at(screen, 1, 0), &tiles::CAVE_WALL_OUTER));
        // Side columns are outer then inner.
        assert!(same(base_at(screen, 5, 0), &tiles::CAVE_WALL_OUTER));
        assert!(same(base_at(screen, 5, 1), &tiles::CAVE_WALL_INNER));
    }

    #[test]
    fn south_entrance_narrows_for_road_caves() {
        let grid = screen_grid();
        // N2 is a take_road cave, B1 is not.
        let road = grid[1][13].as_ref().unwrap();
        assert!(same(base_at(road, 10, 7), &tiles::CAVE_ENTRANCE));
        assert!(!same(base_at(road, 10, 8), &tiles::CAVE_ENTRANCE));

        let wide = grid[0][1].as_ref().unwrap();
        assert!(same(base_at(wide, 10, 7), &tiles::CAVE_ENTRANCE));
        assert!(same(base_at(wide, 10, 8), &tiles::CAVE_ENTRANCE));
        assert!(!same(base_at(wide, 10, 9), &tiles::CAVE_ENTRANCE));
    }
}
