//! The overworld demo map: authored screen data, expressed as character
//! grids so a screen reads like the terrain it builds.
//!
//! Overworld data is input to the compiler, not derived; these screens are a
//! small world exercising every terrain family. Sprites are authored as a
//! separate overlay list per screen so the same terrain works with sprites
//! hidden.

use crate::catalog::palette::{self, Palette};
use crate::tile::{tiles, TileRef};
use crate::types::{Screen, ScreenGrid, TileData, SCREEN_ROWS};

struct ScreenSpec {
    border: Palette,
    interior: Option<Palette>,
    rows: [&'static str; SCREEN_ROWS],
    /// (row, column, sprite overlay).
    sprites: &'static [(usize, usize, TileRef)],
}

/// Terrain legend for the authored rows. Uppercase rock codes sit one
/// elevation level up.
fn terrain(code: char) -> Option<(TileRef, i32)> {
    let tile: (TileRef, i32) = match code {
        'g' => (&tiles::GROUND, 0),
        's' => (&tiles::GROUND_SAND, 0),
        'b' => (&tiles::BUSH, 0),
        'w' => (&tiles::WATER_C, 0),
        'f' => (&tiles::WATERFALL, 0),
        'r' => (&tiles::ROCK_S, 0),
        'n' => (&tiles::ROCK_N, 0),
        '1' => (&tiles::ROCK_NW, 0),
        '2' => (&tiles::ROCK_NE, 0),
        '3' => (&tiles::ROCK_SW, 0),
        '4' => (&tiles::ROCK_SE, 0),
        'R' => (&tiles::ROCK_S, 1),
        'N' => (&tiles::ROCK_N, 1),
        't' => (&tiles::TREE_N, 0),
        '5' => (&tiles::TREE_NW, 0),
        '6' => (&tiles::TREE_NE, 0),
        '7' => (tiles::TREE_SW, 0),
        '8' => (&tiles::TREE_SE, 0),
        'e' => (&tiles::ENTRANCE_W, 0),
        'E' => (&tiles::ENTRANCE_E, 0),
        'S' => (&tiles::STEPS, 0),
        'o' => (&tiles::ROCK_BOULDER, 0),
        'T' => (&tiles::TOMB, 0),
        'a' => (&tiles::ARMOS_STATUE, 0),
        'A' => (&tiles::ARMOS_STATUE_EMPTY, 0),
        'B' => (&tiles::BRIDGE, 0),
        'h' => (&tiles::BRIDGE_HEART, 0),
        'q' => (&tiles::WATER_NW, 0),
        'Q' => (&tiles::WATER_NE, 0),
        'z' => (&tiles::WATER_SW, 0),
        'Z' => (&tiles::WATER_SE, 0),
        'u' => (&tiles::GROUND_WATER_NW, 0),
        'U' => (&tiles::GROUND_WATER_NE, 0),
        'v' => (&tiles::GROUND_WATER_SW, 0),
        'V' => (&tiles::GROUND_WATER_SE, 0),
        'd' => (&tiles::DUNGEON_N1, 0),
        'D' => (&tiles::DUNGEON_N2, 0),
        'x' => (tiles::DUNGEON_NW, 0),
        'X' => (&tiles::DUNGEON_NE, 0),
        'y' => (tiles::DUNGEON_SW, 0),
        'Y' => (&tiles::DUNGEON_SE, 0),
        _ => return None,
    };
    Some(tile)
}

static SCREENS: [[ScreenSpec; 4]; 2] = [
    [
        // A1: mountain pass with a cave mouth in the north face.
        ScreenSpec {
            border: palette::MOUNTAIN,
            interior: None,
            rows: [
                "rrrrrrrrrrrrrrrr",
                "rrrnnnnnnnnnnrrr",
                "rngggggggggggnnr",
                "rnggogggggggggnr",
                "rngggggggeggggnr",
                "rnggggggggggggnr",
                "rngggSggggogggnr",
                "rnggggggggggggnr",
                "rnnggggggggggnnr",
                "rrnnnnggggnnnnrr",
                "rrrrrrggggrrrrrr",
            ],
            sprites: &[
                (3, 6, &tiles::OCTOROK_RED_E),
                (6, 11, &tiles::OCTOROK_RED_S),
                (5, 3, &tiles::TEKTITE_RED),
            ],
        },
        // B1: forest clearing around a hollow tree.
        ScreenSpec {
            border: palette::FOREST,
            interior: None,
            rows: [
                "t56t56t56t56t56t",
                "t78t78ggggt78t78",
                "tggggggggggggggt",
                "tggg56t56t56gggt",
                "gggg78ge78t8gggg",
                "gggggggggggggggg",
                "tgggbgbgbgbggggt",
                "tggggggggggggggt",
                "tgggggbgbggggggt",
                "t56t56gggg56t56t",
                "t78t78gggg78t78t",
            ],
            sprites: &[
                (5, 5, &tiles::MOBLIN_RED),
                (7, 10, &tiles::MOBLIN_BLUE),
                (2, 2, &tiles::PEAHAT),
            ],
        },
        // C1: river crossing fed by a waterfall.
        ScreenSpec {
            border: palette::MOUNTAIN,
            interior: None,
            rows: [
                "rrrrrrnfnrrrrrrr",
                "rngggguwUggggnnr",
                "rnggggvwVggggnnr",
                "rnggggqwQggggnnr",
                "rnggggzwZggggnnr",
                "gggggguwUggggggg",
                "ggggggBwBggggggg",
                "rnggggvwVggggnnr",
                "rnggggqwQggggnnr",
                "rnnnggzwZggnnnrr",
                "rrrrrrgwgrrrrrrr",
            ],
            sprites: &[
                (5, 7, &tiles::ZORA),
                (3, 11, &tiles::OCTOROK_BLUE_W),
                (8, 4, &tiles::PEAHAT_SLIM),
            ],
        },
        // D1: graveyard rows under the white palette.
        ScreenSpec {
            border: palette::GRAVEYARD,
            interior: None,
            rows: [
                "rrrrrrrrrrrrrrrr",
                "rnggggggggggggnr",
                "rggTgTgTgTgTgggr",
                "rggggggggggggggr",
                "rggTgTgTgTgTgggr",
                "gggggggggggggggg",
                "rggTgTgTgTgTgggr",
                "rggggggggggggggr",
                "rggTgTgTgTgTgggr",
                "rnggggggggggggnr",
                "rrrrrrggggrrrrrr",
            ],
            sprites: &[
                (3, 5, &tiles::GHINI),
                (7, 9, &tiles::GHINI),
                (5, 12, &tiles::FALLING_ROCK),
            ],
        },
    ],
    [
        // A2: raised mesa showing the elevation fillers.
        ScreenSpec {
            border: palette::MOUNTAIN,
            interior: None,
            rows: [
                "rrrrrrggggrrrrrr",
                "rnnnnnggggnnnnnr",
                "rnggggggggggggnr",
                "rngNNNNNNNNNNgnr",
                "rngRRRRRRRRRRgnr",
                "gngRRRSSRRRRRgng",
                "rngRRRRRRRRRRgnr",
                "rngRRRRRRRRRRgnr",
                "rnggggggggggggnr",
                "rnnnnnnnnnnnnnnr",
                "rrrrrrrrrrrrrrrr",
            ],
            sprites: &[
                (2, 8, &tiles::LYNEL_RED),
                (6, 6, &tiles::LYNEL_BLUE),
                (7, 10, &tiles::FALLING_ROCK),
            ],
        },
        // B2: armos field on the sand flats.
        ScreenSpec {
            border: palette::FOREST,
            interior: None,
            rows: [
                "t56t56ggggt56t56",
                "t78t78ggggt78t78",
                "gggggsssssssgggg",
                "gggasasasasasggg",
                "gggssssssssssggg",
                "gggasasaSasasggg",
                "gggssssssssssggg",
                "gggasasasasasggg",
                "gggggsssssssgggg",
                "t56t56ggggt56t56",
                "t78t78ggggt78t78",
            ],
            sprites: &[
                (4, 4, &tiles::LEEVER_RED),
                (6, 9, &tiles::LEEVER_RED_SUNK1),
                (2, 7, &tiles::ARMOS_RED_AWAKE),
            ],
        },
        // C2: lake with the heart bridge.
        ScreenSpec {
            border: palette::FOREST,
            interior: None,
            rows: [
                "t56t56ggggt56t56",
                "t78t78ggggt78t78",
                "ggguUggggggggggg",
                "gguwwUgggggggggg",
                "ggvwwqwwwwwwUggg",
                "gggBhBwwwwwwVggg",
                "ggggggzwwwwZgggg",
                "gggggggvwVgggggg",
                "gggggggggggggggg",
                "t56t56ggggt56t56",
                "t78t78ggggt78t78",
            ],
            sprites: &[
                (4, 8, &tiles::PEAHAT_WATER),
                (6, 9, &tiles::PEAHAT_WATER_SLIM),
                (8, 4, &tiles::FAIRY),
                (8, 11, &tiles::LINK),
            ],
        },
        // D2: dungeon mouth built into the cliffs.
        ScreenSpec {
            border: palette::MOUNTAIN,
            interior: None,
            rows: [
                "rrrrrrrrrrrrrrrr",
                "rnnnnnnnnnnnnnnr",
                "rngggxddDDXgggnr",
                "rngggydeEdYgggnr",
                "rnggggggggggggnr",
                "gggggggggggggggg",
                "rngggSggggSgggnr",
                "rnggggggggggggnr",
                "rngggggggggggnnr",
                "rnnnnnggggnnnnrr",
                "rrrrrrggggrrrrrr",
            ],
            sprites: &[
                (5, 4, &tiles::OCTOROK_BLUE_N),
                (7, 7, &tiles::LEEVER_BLUE),
                (7, 12, &tiles::LEEVER_BLUE_SLIM),
            ],
        },
    ],
];

fn build_screen(spec: &ScreenSpec) -> Screen {
    let tiles = spec
        .rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            row.chars()
                .enumerate()
                .map(|(col_index, code)| {
                    let (base, elevation) = terrain(code)?;
                    let sprite = spec
                        .sprites
                        .iter()
                        .find(|(r, c, _)| *r == row_index && *c == col_index)
                        .map(|(_, _, sprite)| *sprite);
                    Some(match sprite {
                        Some(sprite) => TileData::with_sprite(elevation, base, sprite),
                        None => TileData::new(elevation, base),
                    })
                })
                .collect()
        })
        .collect();

    let mut palettes = vec![spec.border];
    if let Some(interior) = spec.interior {
        palettes.push(interior);
    }
    Screen::new(palettes, tiles)
}

pub fn screen_grid() -> ScreenGrid {
    SCREENS
        .iter()
        .map(|row| row.iter().map(|spec| Some(build_screen(spec))).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SCREEN_COLS;

    #[test]
    fn every_authored_row_is_screen_width() {
        for row in &SCREENS {
            for spec in row {
                for line in &spec.rows {
                    assert_eq!(line.len(), SCREEN_COLS, "bad row: {:?}", line);
                }
            }
        }
    }

    #[test]
    fn sprite_coordinates_land_on_terrain() {
        for row in &SCREENS {
            for spec in row {
                for (r, c, _) in spec.sprites {
                    let code = spec.rows[*r].as_bytes()[*c] as char;
                    assert!(terrain(code).is_some(), "sprite on empty cell {},{}", r, c);
                }
            }
        }
    }

    #[test]
    fn grid_builds_with_sprites_attached() {
        let grid = screen_grid();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0].len(), 4);
        let a1 = grid[0][0].as_ref().unwrap();
        let cell = a1.tiles[3][6].as_ref().unwrap();
        assert!(cell.sprite.is_some());
    }

    #[test]
    fn mesa_screen_authors_raised_rock() {
        let grid = screen_grid();
        let a2 = grid[1][0].as_ref().unwrap();
        assert_eq!(a2.tiles[4][5].as_ref().unwrap().elevation, 1);
        assert_eq!(a2.tiles[2][5].as_ref().unwrap().elevation, 0);
    }
}
