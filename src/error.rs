use std::io;
use std::path::PathBuf;

/// A read that would run past the end of the buffer it was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "read of {bit_count} bits at bit offset {bit_offset} is out of bounds \
     ({available_bits} bits available)"
)]
pub struct OutOfBoundsError {
    pub bit_offset: usize,
    pub bit_count: usize,
    pub available_bits: usize,
}

/// Errors which abort loading a font.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid magic: {0:?}")]
    BadMagic([u8; 4]),

    #[error("invalid version: {0}")]
    UnsupportedVersion(u32),

    #[error("invalid revision: {0}")]
    UnsupportedRevision(u32),

    #[error("invalid {table} bpe: {bits}")]
    BitsPerEntryTooLarge { table: &'static str, bits: u32 },

    #[error("invalid first glyph: {0}")]
    FirstGlyphTooLarge(u16),

    #[error(
        "incorrect offset while parsing field {field}: expected {expected:#x}, \
         at {actual:#x}"
    )]
    FieldOffsetMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{consumed} header bytes read but stated header size is {declared}")]
    HeaderSizeMismatch { consumed: usize, declared: u16 },

    #[error(transparent)]
    OutOfBounds(#[from] OutOfBoundsError),
}

/// Errors from looking up a glyph or a table entry. These never leave the
/// font in a bad state, so a caller can carry on with another index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error(
        "codepoint {codepoint:#x} is outside the font's glyph range \
         {first:#x}..={last:#x}"
    )]
    CodepointOutOfRange { codepoint: u32, first: u32, last: u32 },

    #[error("index {index} is out of range for {table} ({entries} entries)")]
    TableIndex {
        table: &'static str,
        index: usize,
        entries: usize,
    },

    #[error(transparent)]
    OutOfBounds(#[from] OutOfBoundsError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error(
        "unable to lay out {word:?}: {width}/64 px does not fit in \
         {max_width}/64 px"
    )]
    UnsplittableWord {
        word: String,
        width: u32,
        max_width: u32,
    },

    #[error(transparent)]
    Glyph(#[from] IndexError),
}

/// Errors from finding and reading a font file off disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("font not found: {0}")]
    NotFound(String),

    #[error("failed to read font '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),
}
