//! Palettes bind the three logical color roles to concrete colors.
//!
//! Authored tile stacks usually name a role (primary/secondary/background)
//! rather than a literal color, so one tile definition renders differently
//! per screen region. A literal color passes through resolution unchanged.

use crate::catalog::color::{self, NesColor};

/// A color reference on an authored piece: either a logical role resolved
/// against the active screen palette, or a literal catalog color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorRef {
    Primary,
    Secondary,
    Background,
    Literal(&'static NesColor),
}

impl From<&'static NesColor> for ColorRef {
    fn from(color: &'static NesColor) -> Self {
        ColorRef::Literal(color)
    }
}

/// Role bindings for one screen region. Copied freely; palettes are three
/// pointers into the static color catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: &'static NesColor,
    /// Water and accents.
    pub secondary: &'static NesColor,
    /// Ground.
    pub background: &'static NesColor,
}

impl Palette {
    pub const fn new(
        primary: &'static NesColor,
        secondary: &'static NesColor,
        background: &'static NesColor,
    ) -> Self {
        Self {
            primary,
            secondary,
            background,
        }
    }

    /// Resolve a role to its bound color; literals pass through unchanged.
    pub fn resolve(&self, color: ColorRef) -> &'static NesColor {
        match color {
            ColorRef::Primary => self.primary,
            ColorRef::Secondary => self.secondary,
            ColorRef::Background => self.background,
            ColorRef::Literal(literal) => literal,
        }
    }
}

// Overworld region palettes.
pub static FOREST: Palette = Palette::new(&color::GREEN, &color::BLUE, &color::PEACH);
pub static MOUNTAIN: Palette = Palette::new(&color::BROWN, &color::BLUE, &color::PEACH);
pub static GRAVEYARD: Palette = Palette::new(&color::WHITE, &color::BLUE, &color::DARK_GRAY);

// Cave interiors: rock walls around a text floor.
pub static CAVE: Palette = Palette::new(&color::BROWN, &color::RED, &color::PEACH);
/// Used for the interior of any screen that renders message text.
pub static TEXT: Palette = Palette::new(&color::WHITE, &color::RED, &color::BLACK);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_resolve_to_bound_colors() {
        assert_eq!(FOREST.resolve(ColorRef::Primary), &color::GREEN);
        assert_eq!(FOREST.resolve(ColorRef::Secondary), &color::BLUE);
        assert_eq!(FOREST.resolve(ColorRef::Background), &color::PEACH);
    }

    #[test]
    fn literals_pass_through_any_palette() {
        let literal = ColorRef::Literal(&color::GOLD);
        assert_eq!(FOREST.resolve(literal), &color::GOLD);
        assert_eq!(GRAVEYARD.resolve(literal), &color::GOLD);
    }
}
