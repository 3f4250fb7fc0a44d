//! The color catalog: source-palette colors bridged to target-palette codes.
//!
//! Two numbering systems coexist: the console's 6-bit source palette and the
//! LDraw part-color palette the bricks are rendered in. Every source color
//! resolves to an integer intensity in either system; some also list
//! alternate LDraw codes that are acceptable approximations.

use serde::Serialize;

/// Which palette numbering system a color value is resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorSystem {
    Nes,
    Ldraw,
}

/// One LDraw palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LdrawColor {
    pub code: u32,
    pub rgb: u32,
    pub name: &'static str,
}

const fn ldraw(code: u32, rgb: u32, name: &'static str) -> LdrawColor {
    LdrawColor { code, rgb, name }
}

/// The LDraw palette, sorted by code.
pub static LDRAW_COLORS: &[LdrawColor] = &[
    ldraw(0, 0x1B2A34, "Black"),
    ldraw(1, 0x1E5AA8, "Blue"),
    ldraw(2, 0x00852B, "Green"),
    ldraw(3, 0x069D9F, "Dark_Turquoise"),
    ldraw(4, 0xB40000, "Red"),
    ldraw(5, 0xD3359D, "Dark_Pink"),
    ldraw(6, 0x543324, "Brown"),
    ldraw(7, 0x8A928D, "Light_Grey"),
    ldraw(8, 0x545955, "Dark_Grey"),
    ldraw(9, 0x97CBD9, "Light_Blue"),
    ldraw(10, 0x58AB41, "Bright_Green"),
    ldraw(11, 0x00AAA4, "Light_Turquoise"),
    ldraw(12, 0xF06D61, "Salmon"),
    ldraw(13, 0xF6A9BB, "Pink"),
    ldraw(14, 0xFAC80A, "Yellow"),
    ldraw(15, 0xF4F4F4, "White"),
    ldraw(17, 0xADD9A8, "Light_Green"),
    ldraw(18, 0xFFD67F, "Light_Yellow"),
    ldraw(19, 0xD7BA8C, "Tan"),
    ldraw(20, 0xAFBED6, "Light_Violet"),
    ldraw(22, 0x671F81, "Purple"),
    ldraw(23, 0x0E3E9A, "Dark_Blue_Violet"),
    ldraw(25, 0xD67923, "Orange"),
    ldraw(26, 0x901F76, "Magenta"),
    ldraw(27, 0xA5CA18, "Lime"),
    ldraw(28, 0x897D62, "Dark_Tan"),
    ldraw(29, 0xFF9ECD, "Bright_Pink"),
    ldraw(30, 0xA06EB9, "Medium_Lavender"),
    ldraw(31, 0xCDA4DE, "Lavender"),
    ldraw(68, 0xFDC383, "Very_Light_Orange"),
    ldraw(69, 0x8A12A8, "Bright_Reddish_Lilac"),
    ldraw(70, 0x5F3109, "Reddish_Brown"),
    ldraw(71, 0x969696, "Light_Bluish_Grey"),
    ldraw(72, 0x646464, "Dark_Bluish_Grey"),
    ldraw(73, 0x7396C8, "Medium_Blue"),
    ldraw(74, 0x7FC475, "Medium_Green"),
    ldraw(77, 0xFECCCF, "Light_Pink"),
    ldraw(78, 0xFFC995, "Light_Nougat"),
    ldraw(84, 0xAA7D55, "Medium_Nougat"),
    ldraw(85, 0x441A91, "Medium_Lilac"),
    ldraw(86, 0x7B5D41, "Light_Brown"),
    ldraw(89, 0x1C58A7, "Blue_Violet"),
    ldraw(92, 0xBB805A, "Nougat"),
    ldraw(100, 0xF9B7A5, "Light_Salmon"),
    ldraw(110, 0x26469A, "Violet"),
    ldraw(112, 0x4861AC, "Medium_Violet"),
    ldraw(115, 0xB7D425, "Medium_Lime"),
    ldraw(118, 0x9CD6CC, "Aqua"),
    ldraw(120, 0xDEEA92, "Light_Lime"),
    ldraw(121, 0xF89A39, "Light_Orange"),
    ldraw(123, 0xEE5434, "Dark_Salmon"),
    ldraw(125, 0xF9A777, "Spud_Orange"),
    ldraw(128, 0xAD6140, "Dark_Nougat"),
    ldraw(151, 0xC8C8C8, "Very_Light_Bluish_Grey"),
    ldraw(180, 0xDD982E, "Dark_Yellow"),
    ldraw(191, 0xFCAC00, "Bright_Light_Orange"),
    ldraw(212, 0x9DC3F7, "Bright_Light_Blue"),
    ldraw(213, 0x476FB6, "Medium_Blue_Violet"),
    ldraw(216, 0x872B17, "Rust"),
    ldraw(218, 0x8E5597, "Reddish_Lilac"),
    ldraw(219, 0x564E9D, "Lilac"),
    ldraw(220, 0x9195CA, "Light_Lilac"),
    ldraw(225, 0xFAA964, "Warm_Yellowish_Orange"),
    ldraw(226, 0xFFEC6C, "Bright_Light_Yellow"),
    ldraw(232, 0x77C9D8, "Sky_Blue"),
    ldraw(272, 0x19325A, "Dark_Blue"),
    ldraw(288, 0x00451A, "Dark_Green"),
    ldraw(295, 0xFF94C2, "Flamingo_Pink"),
    ldraw(308, 0x352100, "Dark_Brown"),
    ldraw(313, 0xABD9FF, "Maersk_Blue"),
    ldraw(320, 0x720012, "Dark_Red"),
    ldraw(321, 0x469BC3, "Dark_Azure"),
    ldraw(322, 0x68C3E2, "Medium_Azure"),
    ldraw(323, 0xD3F2EA, "Light_Aqua"),
    ldraw(326, 0xE2F99A, "Yellowish_Green"),
    ldraw(330, 0x77774E, "Olive_Green"),
    ldraw(335, 0x88605E, "Sand_Red"),
    ldraw(351, 0xF785B1, "Medium_Dark_Pink"),
    ldraw(353, 0xFF6D77, "Coral"),
    ldraw(366, 0xD86D2C, "Earth_Orange"),
    ldraw(368, 0xEDFF21, "Neon_Yellow"),
    ldraw(370, 0x755945, "Medium_Brown"),
    ldraw(371, 0xCCA373, "Medium_Tan"),
    ldraw(373, 0x75657D, "Sand_Purple"),
    ldraw(378, 0x708E7C, "Sand_Green"),
    ldraw(379, 0x70819A, "Sand_Blue"),
    ldraw(402, 0xCA4C0B, "Reddish_Orange"),
    ldraw(422, 0x915C3C, "Sienna_Brown"),
    ldraw(423, 0x543F33, "Umber_Brown"),
    ldraw(424, 0xDD9E47, "Ochre_Yellow"),
    ldraw(450, 0xD27744, "Fabuland_Brown"),
    ldraw(462, 0xF58624, "Medium_Orange"),
    ldraw(484, 0x91501C, "Dark_Orange"),
    ldraw(503, 0xBCB4A5, "Very_Light_Grey"),
    ldraw(507, 0xFA9C1C, "Light_Orange_Brown"),
    ldraw(508, 0xC65127, "Fabuland_Red"),
    ldraw(509, 0xCF8A47, "Fabuland_Orange"),
    ldraw(510, 0x78FC78, "Fabuland_Lime"),
    ldraw(10015, 0xFFF230, "Lemon"),
    ldraw(10017, 0xFF9494, "Rose_Pink"),
    ldraw(10022, 0xD05098, "Yellowish_Dark_Pink"),
];

/// Look up an LDraw palette entry by code.
///
/// All codes referenced by the source-palette table below are static, so a
/// missing entry is a catalog-definition bug, not a runtime condition.
pub fn ldraw_color(code: u32) -> &'static LdrawColor {
    LDRAW_COLORS
        .iter()
        .find(|color| color.code == code)
        .unwrap_or_else(|| panic!("unknown LDraw color code {}", code))
}

/// One source-palette color, bridged to its LDraw rendering.
#[derive(Debug, PartialEq, Eq)]
pub struct NesColor {
    /// 6-bit source palette code.
    pub code: u8,
    /// Source RGB value.
    pub rgb: u32,
    pub name: &'static str,
    /// Primary LDraw code this color renders as.
    pub ldraw_code: u32,
    /// Acceptable alternate LDraw codes, for approximate matching.
    pub ldraw_alternatives: &'static [u32],
}

impl NesColor {
    const fn new(
        code: u8,
        rgb: u32,
        name: &'static str,
        ldraw_code: u32,
        ldraw_alternatives: &'static [u32],
    ) -> Self {
        Self {
            code,
            rgb,
            name,
            ldraw_code,
            ldraw_alternatives,
        }
    }

    /// Resolved integer intensity in the given numbering system.
    pub fn color_int(&self, system: ColorSystem) -> u32 {
        match system {
            ColorSystem::Nes => self.rgb,
            ColorSystem::Ldraw => ldraw_color(self.ldraw_code).rgb,
        }
    }

    /// Resolved color as linear RGB components in 0..=1.
    pub fn rgb_f32(&self, system: ColorSystem) -> [f32; 3] {
        let rgb = self.color_int(system);
        [
            ((rgb >> 16) & 0xFF) as f32 / 255.0,
            ((rgb >> 8) & 0xFF) as f32 / 255.0,
            (rgb & 0xFF) as f32 / 255.0,
        ]
    }
}

// Source palette rows 0x00-0x0F.
pub static DEEP_GRAY: NesColor = NesColor::new(0x00, 0x747474, "deep_gray", 8, &[]);
pub static DARK_BLUE: NesColor = NesColor::new(0x01, 0x24188C, "dark_blue", 272, &[23, 85]);
pub static NAVY: NesColor = NesColor::new(0x02, 0x0000A8, "navy", 23, &[]);
pub static INDIGO: NesColor = NesColor::new(0x03, 0x44009C, "indigo", 85, &[]);
pub static PLUM: NesColor = NesColor::new(0x04, 0x8C0074, "plum", 26, &[]);
pub static BRICK_RED: NesColor = NesColor::new(0x05, 0xA80010, "brick_red", 4, &[]);
pub static MAROON: NesColor = NesColor::new(0x06, 0xA40000, "maroon", 4, &[]);
pub static DARK_RED: NesColor = NesColor::new(0x07, 0x7C0800, "dark_red", 320, &[]);
pub static DARK_BROWN: NesColor = NesColor::new(0x08, 0x402C00, "dark_brown", 6, &[308]);
pub static DARK_MOSS: NesColor = NesColor::new(0x09, 0x004400, "dark_moss", 288, &[]);
pub static DARK_GREEN: NesColor = NesColor::new(0x0A, 0x005000, "dark_green", 288, &[]);
pub static EVERGREEN: NesColor = NesColor::new(0x0B, 0x003C14, "evergreen", 288, &[]);
pub static DARK_SLATE: NesColor = NesColor::new(0x0C, 0x183C5C, "dark_slate", 272, &[]);
pub static BLACK: NesColor = NesColor::new(0x0D, 0x000000, "black", 0, &[]);

// Rows 0x10-0x1F.
pub static LIGHT_GRAY: NesColor = NesColor::new(0x10, 0xBCBCBC, "light_gray", 503, &[]);
pub static AZURE: NesColor = NesColor::new(0x11, 0x0070EC, "azure", 213, &[1, 321]);
pub static BLUE: NesColor = NesColor::new(0x12, 0x2038EC, "blue", 1, &[110]);
pub static VIOLET: NesColor = NesColor::new(0x13, 0x8000F0, "violet", 22, &[69]);
pub static PURPLE: NesColor = NesColor::new(0x14, 0xBC00BC, "purple", 69, &[5]);
pub static MAGENTA: NesColor = NesColor::new(0x15, 0xE40058, "magenta", 353, &[]);
pub static RED: NesColor = NesColor::new(0x16, 0xD82800, "red", 123, &[4]);
pub static BROWN: NesColor = NesColor::new(0x17, 0xC84C0C, "brown", 402, &[]);
pub static OLIVE: NesColor = NesColor::new(0x18, 0x887000, "olive", 330, &[]);
pub static LEAF_GREEN: NesColor = NesColor::new(0x19, 0x009400, "leaf_green", 2, &[]);
pub static GREEN: NesColor = NesColor::new(0x1A, 0x00A800, "green", 10, &[]);
pub static FOREST_GREEN: NesColor = NesColor::new(0x1B, 0x009038, "forest_green", 2, &[]);
pub static TEAL: NesColor = NesColor::new(0x1C, 0x008088, "teal", 3, &[]);

// Rows 0x20-0x2F.
pub static WHITE: NesColor = NesColor::new(0x20, 0xFCFCFC, "white", 15, &[]);
pub static SKY_BLUE: NesColor = NesColor::new(0x21, 0x3CBCFC, "sky_blue", 322, &[]);
pub static STEEL_BLUE: NesColor = NesColor::new(0x22, 0x5C94FC, "steel_blue", 73, &[]);
pub static LAVENDER: NesColor = NesColor::new(0x23, 0xCC88FC, "lavender", 30, &[]);
pub static FUCHSIA: NesColor =
    NesColor::new(0x24, 0xF478FC, "fuchsia", 10022, &[5, 29, 31, 10017]);
pub static HOT_PINK: NesColor = NesColor::new(0x25, 0xFC74B4, "hot_pink", 351, &[295]);
pub static SALMON: NesColor = NesColor::new(0x26, 0xFC7460, "salmon", 12, &[]);
pub static ORANGE: NesColor = NesColor::new(0x27, 0xFC9838, "orange", 121, &[]);
pub static GOLD: NesColor = NesColor::new(0x28, 0xF0BC3C, "gold", 14, &[]);
pub static CHARTREUSE: NesColor = NesColor::new(0x29, 0x80D010, "chartreuse", 27, &[]);
pub static LIME: NesColor = NesColor::new(0x2A, 0x4CDC48, "lime", 510, &[74, 10, 27, 115]);
pub static SEAFOAM: NesColor = NesColor::new(0x2B, 0x58F898, "seafoam", 510, &[]);
pub static CYAN: NesColor = NesColor::new(0x2C, 0x00E8D8, "cyan", 11, &[]);
pub static DARK_GRAY: NesColor = NesColor::new(0x2D, 0x787878, "dark_gray", 72, &[]);

// Rows 0x30-0x3F.
pub static PALE_BLUE: NesColor = NesColor::new(0x31, 0xA8E4FC, "pale_blue", 9, &[]);
pub static PERIWINKLE: NesColor = NesColor::new(0x32, 0xC4D4FC, "periwinkle", 20, &[]);
pub static LILAC: NesColor = NesColor::new(0x33, 0xD4C8FC, "lilac", 31, &[220, 20]);
pub static PALE_PINK: NesColor =
    NesColor::new(0x34, 0xFCC4FC, "pale_pink", 13, &[31, 295, 10017]);
pub static PINK: NesColor = NesColor::new(0x35, 0xFCC4D8, "pink", 77, &[13, 295, 100]);
pub static BUBBLEGUM: NesColor = NesColor::new(0x36, 0xFCBCB0, "bubblegum", 100, &[]);
pub static PEACH: NesColor = NesColor::new(0x37, 0xFCD8A8, "peach", 78, &[68]);
pub static TAN: NesColor = NesColor::new(0x38, 0xFCE4A0, "tan", 18, &[]);
pub static LEMON_LIME: NesColor = NesColor::new(0x39, 0xE0FCA0, "lemon_lime", 326, &[]);
pub static PALE_GREEN: NesColor = NesColor::new(0x3A, 0xA8F0BC, "pale_green", 17, &[]);
pub static PALE_MINT: NesColor = NesColor::new(0x3B, 0xB0FCCC, "pale_mint", 17, &[]);
pub static PALE_CYAN: NesColor = NesColor::new(0x3C, 0x9CFCF0, "pale_cyan", 118, &[]);
pub static PALE_GRAY: NesColor = NesColor::new(0x3D, 0xC4C4C4, "pale_gray", 151, &[]);

/// Every source-palette color with a distinct rendering, in code order.
pub static NES_COLORS: &[&NesColor] = &[
    &DEEP_GRAY,
    &DARK_BLUE,
    &NAVY,
    &INDIGO,
    &PLUM,
    &BRICK_RED,
    &MAROON,
    &DARK_RED,
    &DARK_BROWN,
    &DARK_MOSS,
    &DARK_GREEN,
    &EVERGREEN,
    &DARK_SLATE,
    &BLACK,
    &LIGHT_GRAY,
    &AZURE,
    &BLUE,
    &VIOLET,
    &PURPLE,
    &MAGENTA,
    &RED,
    &BROWN,
    &OLIVE,
    &LEAF_GREEN,
    &GREEN,
    &FOREST_GREEN,
    &TEAL,
    &WHITE,
    &SKY_BLUE,
    &STEEL_BLUE,
    &LAVENDER,
    &FUCHSIA,
    &HOT_PINK,
    &SALMON,
    &ORANGE,
    &GOLD,
    &CHARTREUSE,
    &LIME,
    &SEAFOAM,
    &CYAN,
    &DARK_GRAY,
    &PALE_BLUE,
    &PERIWINKLE,
    &LILAC,
    &PALE_PINK,
    &PINK,
    &BUBBLEGUM,
    &PEACH,
    &TAN,
    &LEMON_LIME,
    &PALE_GREEN,
    &PALE_MINT,
    &PALE_CYAN,
    &PALE_GRAY,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_source_color_resolves_in_both_systems() {
        for color in NES_COLORS {
            assert_eq!(color.color_int(ColorSystem::Nes), color.rgb);
            // Panics if the bridged code is missing from the LDraw table.
            let _ = color.color_int(ColorSystem::Ldraw);
            for alternative in color.ldraw_alternatives {
                let _ = ldraw_color(*alternative);
            }
        }
    }

    #[test]
    fn ldraw_bridge_values() {
        assert_eq!(BLUE.color_int(ColorSystem::Ldraw), 0x1E5AA8);
        assert_eq!(GREEN.color_int(ColorSystem::Ldraw), 0x58AB41);
        assert_eq!(BLACK.color_int(ColorSystem::Ldraw), 0x1B2A34);
    }

    #[test]
    fn rgb_components() {
        assert_eq!(WHITE.rgb_f32(ColorSystem::Nes), [
            0xFC as f32 / 255.0,
            0xFC as f32 / 255.0,
            0xFC as f32 / 255.0
        ]);
    }
}
