//! Static registries consumed by the tile resolver and map compiler.
//!
//! All catalog entries are defined once, at compile time, in dependency
//! order: colors first, then pieces (which reference other pieces for stud
//! replacement), then palettes binding color roles to concrete colors.

pub mod color;
pub mod palette;
pub mod piece;

pub use color::{ColorSystem, LdrawColor, NesColor};
pub use palette::{ColorRef, Palette};
pub use piece::{PartId, Piece};
