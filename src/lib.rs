#![deny(clippy::all)]

#[macro_use]
extern crate lazy_static;

pub mod dimension;
pub mod error;
pub mod paths;
pub mod pgf;
pub mod text_layout;


pub use dimension::Advance;
pub use error::{
    FormatError, IndexError, LayoutError, LoadError, OutOfBoundsError,
};
pub use pgf::bitmap::Grid;
pub use pgf::{CharInfo, GlyphInfo, GlyphRecord, PgfFont, PgfHeader};
pub use text_layout::{LayoutParams, Line, TextChunk, TextLayout, TextMetrics};

/// Loads a font given either a path to it or a name to look up with
/// `paths::get_path_to_font`.
pub fn load_font(font_name: &str) -> Result<PgfFont, LoadError> {
    let path = paths::get_path_to_font(font_name)
        .ok_or_else(|| LoadError::NotFound(font_name.to_string()))?;
    PgfFont::from_path(path)
}
