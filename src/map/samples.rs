//! Reference sheets: one screen per terrain palette, a sprite lineup, and
//! a small composed scene. Placed on a grid row of their own so their
//! labels stay out of the overworld's range.

use crate::catalog::palette;
use crate::tile::{tiles, TileRef};
use crate::types::{Screen, ScreenGrid, TileData, TileGrid};

pub const GRID_ROWS: usize = 10;
pub const GRID_COLS: usize = 11;

const SAMPLE_ROW: usize = 9;
const PALETTE_SAMPLE_COL: usize = 6;

fn tile(t: TileRef) -> Option<TileData> {
    Some(TileData::new(0, t))
}

fn sprite(base: TileRef, overlay: TileRef) -> Option<TileData> {
    Some(TileData::with_sprite(0, base, overlay))
}

/// Terrain swatch sheet, rendered once per palette. Sparse rows keep the
/// groups visually separated; the last row walks every dungeon top style.
fn terrain_sheet() -> TileGrid {
    let mut rows: TileGrid = (0..15).map(|_| Vec::new()).collect();

    rows[0] = vec![
        None,
        tile(&tiles::ROCK_NW),
        tile(&tiles::ROCK_N),
        tile(&tiles::ROCK_NE),
        None,
        tile(&tiles::TREE_NW),
        tile(&tiles::TREE_N),
        tile(&tiles::TREE_NE),
        None,
        tile(tiles::DUNGEON_NW),
        tile(&tiles::DUNGEON_N1),
        tile(&tiles::DUNGEON_N2),
        tile(&tiles::DUNGEON_NE),
    ];
    rows[1] = vec![
        None,
        tile(&tiles::ROCK_SW),
        tile(&tiles::ROCK_S),
        tile(&tiles::ROCK_SE),
        None,
        tile(tiles::TREE_SW),
        tile(&tiles::ENTRANCE_W),
        tile(&tiles::TREE_SE),
        None,
        tile(tiles::DUNGEON_SW),
        tile(&tiles::ENTRANCE_W),
        tile(&tiles::ENTRANCE_E),
        tile(&tiles::DUNGEON_SE),
    ];
    rows[5] = vec![
        tile(&tiles::WATER_NW),
        tile(&tiles::GROUND_WATER_NW),
        tile(&tiles::GROUND_WATER_NE),
        tile(&tiles::WATERFALL),
        tile(&tiles::BRIDGE_HEART),
        tile(&tiles::WATER_NE),
    ];
    rows[6] = vec![
        tile(&tiles::WATER_SW),
        tile(&tiles::GROUND_WATER_SW),
        tile(&tiles::GROUND_WATER_SE),
        tile(&tiles::WATER_C),
        tile(&tiles::BRIDGE),
        tile(&tiles::WATER_SE),
        None,
        tile(&tiles::BUSH),
        tile(&tiles::GROUND),
        tile(&tiles::GROUND_SAND),
        tile(&tiles::ROCK_BOULDER),
        tile(&tiles::STEPS),
        tile(&tiles::TOMB),
        tile(&tiles::ARMOS_STATUE),
    ];
    rows[14] = tiles::DUNGEON_TOPS
        .iter()
        .map(|(_, stack)| tile(stack))
        .collect();

    rows
}

/// Every enemy and character stack on a neutral field, with water and sand
/// patches under the sprites that expect them.
fn sprite_sheet() -> TileGrid {
    let mut rows: TileGrid = (0..11)
        .map(|y| {
            (0..15)
                .map(|x| {
                    let base: TileRef = if (6..=9).contains(&x) && y >= 6 {
                        &tiles::WATER_C
                    } else if (9..=11).contains(&x) && y <= 5 {
                        &tiles::GROUND_SAND
                    } else {
                        &tiles::GROUND
                    };
                    tile(base)
                })
                .collect()
        })
        .collect();

    let overlays: [(usize, usize, TileRef); 25] = [
        (0, 9, tiles::LEEVER_BLUE_SLIM.as_slice()),
        (0, 11, &tiles::LEEVER_BLUE),
        (1, 1, &tiles::OCTOROK_BLUE_E),
        (1, 4, &tiles::TEKTITE_BLUE),
        (1, 7, &tiles::MOBLIN_BLUE),
        (1, 10, tiles::LEEVER_BLUE_SUNK1),
        (1, 13, &tiles::LYNEL_BLUE),
        (2, 9, tiles::LEEVER_BLUE_SUNK2),
        (3, 11, &tiles::LEEVER_RED),
        (4, 1, &tiles::OCTOROK_RED_E),
        (4, 4, &tiles::TEKTITE_RED),
        (4, 7, &tiles::MOBLIN_RED),
        (4, 10, tiles::LEEVER_RED_SUNK1),
        (4, 13, &tiles::LYNEL_RED),
        (5, 9, tiles::LEEVER_RED_SUNK2),
        (5, 11, &tiles::LEEVER_RED_SLIM),
        (7, 1, &tiles::ARMOS_RED_AWAKE),
        (7, 4, &tiles::GHINI),
        (7, 7, &tiles::ZORA),
        (7, 10, &tiles::PEAHAT),
        (7, 13, &tiles::FALLING_ROCK),
        (9, 6, &tiles::FAIRY),
        (9, 9, &tiles::PEAHAT_WATER),
        (9, 11, &tiles::PEAHAT_SLIM),
        (10, 4, &tiles::LINK),
    ];
    for (y, x, overlay) in overlays {
        let base = rows[y][x].as_ref().map(|t| t.base).unwrap_or(&tiles::GROUND);
        rows[y][x] = sprite(base, overlay);
    }

    rows
}

/// A small vignette combining terrain families, for eyeballing seams.
fn mini_scene() -> TileGrid {
    let g: TileRef = &tiles::GROUND;
    let r: TileRef = &tiles::ROCK_S;
    let w: TileRef = &tiles::WATER_C;
    let plan: [[TileRef; 7]; 6] = [
        [r, r, r, r, r, r, w],
        [g, g, g, g, g, r, w],
        [g, &tiles::TREE_NW, &tiles::TREE_N, &tiles::TREE_NE, g, r, w],
        [g, tiles::TREE_SW, &tiles::ENTRANCE_W, &tiles::TREE_SE, g, r, w],
        [g, g, g, g, g, g, &tiles::BRIDGE],
        [g, g, g, g, g, &tiles::ROCK_N, w],
    ];
    plan.iter()
        .map(|row| row.iter().map(|&t| tile(t)).collect())
        .collect()
}

pub fn screen_grid() -> ScreenGrid {
    let mut grid: ScreenGrid = (0..GRID_ROWS)
        .map(|_| (0..GRID_COLS).map(|_| None).collect())
        .collect();

    for (offset, pal) in [palette::FOREST, palette::MOUNTAIN, palette::GRAVEYARD]
        .into_iter()
        .enumerate()
    {
        grid[SAMPLE_ROW][PALETTE_SAMPLE_COL + offset] =
            Some(Screen::new(vec![pal], terrain_sheet()));
    }
    grid[SAMPLE_ROW][PALETTE_SAMPLE_COL + 3] =
        Some(Screen::new(vec![palette::MOUNTAIN], sprite_sheet()));
    grid[SAMPLE_ROW][GRID_COLS - 1] = Some(Screen::new(vec![palette::MOUNTAIN], mini_scene()));

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_sit_alone_on_the_last_grid_row() {
        let grid = screen_grid();
        assert_eq!(grid.len(), GRID_ROWS);
        for row in &grid[..SAMPLE_ROW] {
            assert!(row.iter().all(Option::is_none));
        }
        let populated: Vec<usize> = grid[SAMPLE_ROW]
            .iter()
            .enumerate()
            .filter_map(|(col, screen)| screen.as_ref().map(|_| col))
            .collect();
        assert_eq!(populated, vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn terrain_sheets_differ_only_by_palette() {
        let grid = screen_grid();
        let forest = grid[SAMPLE_ROW][6].as_ref().unwrap();
        let graveyard = grid[SAMPLE_ROW][8].as_ref().unwrap();
        assert_eq!(forest.tiles.len(), graveyard.tiles.len());
        assert_ne!(
            forest.palettes[0].resolve(crate::catalog::palette::ColorRef::Primary).rgb,
            graveyard.palettes[0].resolve(crate::catalog::palette::ColorRef::Primary).rgb,
        );
    }

    #[test]
    fn sprite_sheet_pairs_water_sprites_with_water() {
        let grid = screen_grid();
        let sheet = grid[SAMPLE_ROW][9].as_ref().unwrap();
        let zora = sheet.tiles[7][7].as_ref().unwrap();
        assert!(std::ptr::eq(zora.base.as_ptr(), tiles::WATER_C.as_ptr()));
        assert!(zora.sprite.is_some());
        let link = sheet.tiles[10][4].as_ref().unwrap();
        assert!(std::ptr::eq(link.base.as_ptr(), tiles::GROUND.as_ptr()));
    }

    #[test]
    fn mini_scene_is_seven_tiles_wide() {
        let grid = screen_grid();
        let scene = grid[SAMPLE_ROW][10].as_ref().unwrap();
        assert_eq!(scene.tiles.len(), 6);
        assert!(scene.tiles.iter().all(|row| row.len() == 7));
    }
}
