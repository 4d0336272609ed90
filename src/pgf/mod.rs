use crate::pgf::bitmap::Grid;
use crate::pgf::table::{FixedWidthTable, WordPairTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgfHeader {
    pub header_off: u16,
    pub header_size: u16,
    pub magic: [u8; 4],
    pub revision: u32,
    pub version: u32,

    pub len_charmap: u32,
    pub len_charptr: u32,
    pub bpe_charmap: u32,
    pub bpe_charptr: u32,

    pub h_size: u32,
    pub v_size: u32,
    pub h_res: u32,
    pub v_res: u32,
    pub weight: u8,
    pub fontname: [u8; 64],
    pub fonttype: [u8; 64],

    pub first_glyph: u16,
    pub last_glyph: u16,

    pub max_left_x_adj: u32,
    pub max_base_y_adj: u32,
    pub min_cent_x_adj: u32,
    pub max_top_y_adj: u32,
    pub max_adv_h: u32,
    pub max_adv_v: u32,
    pub max_size_h: u32,
    pub max_size_v: u32,
    pub max_glyph_w: u16,
    pub max_glyph_h: u16,

    pub len_dim_tab: u8,
    pub len_xadj_tab: u8,
    pub len_yadj_tab: u8,
    pub len_adv_tab: u8,

    pub len_shadmap: u32,
    pub bpe_shadmap: u32,
    pub x_shadscale: u32,
    pub y_shadscale: u32,
}

/// The fixed size fields at the start of every character record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharInfo {
    pub shadow_header: u16,
    pub width: u8,
    pub height: u8,
    pub left: u8,
    pub top: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphInfo {
    pub flags: u8,
    pub magic_no: u8,
    pub shadow_id: u16,
    // Slot of this glyph's entry in the advance table's word array
    pub advance_index: usize,
    // In 1/64ths of a pixel
    pub horiz_advance: u32,
}

/// A decoded glyph: its metrics plus its bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRecord {
    codepoint: u32,
    char_info: CharInfo,
    glyph_info: GlyphInfo,
    bitmap: Grid<u8>,
}

// Glyph flag bits
pub const PGF_BMP_V_ROWS: u8 = 0x01;
pub const PGF_BMP_H_ROWS: u8 = 0x02;
pub const PGF_EXTRA_METRICS1: u8 = 0x04;
pub const PGF_EXTRA_METRICS2: u8 = 0x08;
pub const PGF_EXTRA_METRICS3: u8 = 0x10;

#[derive(Debug)]
pub struct PgfFont {
    header: PgfHeader,

    dim_tab: WordPairTable,
    xadj_tab: WordPairTable,
    yadj_tab: WordPairTable,
    adv_tab: WordPairTable,

    shadmap: FixedWidthTable,
    charmap: FixedWidthTable,
    charptr: FixedWidthTable,

    glyph_data: Vec<u8>,
}

mod accessors;
mod bit_reader;
pub mod bitmap;
mod byte_reader;
mod glyph;
mod header;
mod read_pgf;
pub mod table;

pub use bit_reader::{read_bits, BitReader};

#[cfg(test)]
pub(crate) mod test_data;
