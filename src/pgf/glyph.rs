use log::{debug, warn};

use crate::error::{IndexError, OutOfBoundsError};
use crate::pgf::bit_reader::BitReader;
use crate::pgf::bitmap::{decode_bitmap, Grid};
use crate::pgf::table::WordPairTable;
use crate::pgf::{
    CharInfo, GlyphInfo, GlyphRecord, PGF_BMP_V_ROWS, PGF_EXTRA_METRICS1,
    PGF_EXTRA_METRICS2, PGF_EXTRA_METRICS3,
};

const SHADOW_HEADER_BITS: usize = 14;
const WIDTH_BITS: usize = 7;
const HEIGHT_BITS: usize = 7;
const LEFT_BITS: usize = 7;
const TOP_BITS: usize = 7;

const FLAGS_BITS: usize = 6;
const MAGIC_NO_BITS: usize = 7;
const SHADOW_ID_BITS: usize = 9;
// Follows the shadow id. Its contents are unknown.
const RESERVED_BITS: usize = 24;
const ADVANCE_INDEX_BITS: usize = 8;

// Optional blocks of unknown contents. Note the inverted sense: a block is
// only present in the record when its flag bit is *clear*.
const EXTENSION_BITS: usize = 56;
const EXTENSION_BLOCKS: [(&str, u8); 3] = [
    ("PGF_EXTRA_METRICS1", PGF_EXTRA_METRICS1),
    ("PGF_EXTRA_METRICS2", PGF_EXTRA_METRICS2),
    ("PGF_EXTRA_METRICS3", PGF_EXTRA_METRICS3),
];

impl CharInfo {
    fn read(reader: &mut BitReader) -> Result<CharInfo, OutOfBoundsError> {
        Ok(CharInfo {
            shadow_header: reader.read_u16(SHADOW_HEADER_BITS)?,
            width: reader.read_u8(WIDTH_BITS)?,
            height: reader.read_u8(HEIGHT_BITS)?,
            left: reader.read_u8(LEFT_BITS)?,
            top: reader.read_u8(TOP_BITS)?,
        })
    }
}

impl GlyphInfo {
    fn read(
        reader: &mut BitReader,
        adv_tab: &WordPairTable,
    ) -> Result<GlyphInfo, IndexError> {
        let flags = reader.read_u8(FLAGS_BITS)?;
        let magic_no = reader.read_u8(MAGIC_NO_BITS)?;
        let shadow_id = reader.read_u16(SHADOW_ID_BITS)?;
        reader.skip(RESERVED_BITS);

        for &(name, bit) in &EXTENSION_BLOCKS {
            if flags & bit == 0 {
                let mystery = reader.read(EXTENSION_BITS)?;
                debug!("{} not set, skipping {:#x}", name, mystery);
            }
        }

        let adv = reader.read_u8(ADVANCE_INDEX_BITS)? as usize;
        let (horiz_advance, _) = adv_tab.pair(adv)?;

        Ok(GlyphInfo {
            flags,
            magic_no,
            shadow_id,
            advance_index: adv * 2,
            horiz_advance,
        })
    }

    // Whether the bitmap is stored a row at a time rather than a column at a
    // time.
    pub fn is_row_major(&self) -> bool {
        self.flags & PGF_BMP_V_ROWS != 0
    }
}

impl GlyphRecord {
    /// Decodes the record starting at bit `bit_offset` of the glyph data.
    pub(crate) fn decode(
        codepoint: u32,
        glyph_data: &[u8],
        bit_offset: usize,
        adv_tab: &WordPairTable,
    ) -> Result<GlyphRecord, IndexError> {
        let mut reader = BitReader::new(glyph_data, bit_offset);

        let char_info = CharInfo::read(&mut reader)?;
        let glyph_info = GlyphInfo::read(&mut reader, adv_tab)?;

        // The bitmap starts on the byte containing the bit after the advance
        // index.
        let bitmap_start = reader.byte_position() * 8;

        let width = char_info.width as usize;
        let height = char_info.height as usize;
        let bitmap = if width > 0 && height > 0 {
            decode_bitmap(
                glyph_data,
                bitmap_start,
                width,
                height,
                glyph_info.is_row_major(),
            )?
        } else {
            warn!("No bitmap for glyph {:#x}", codepoint);
            Grid::new(width, height)
        };

        debug!(
            "Parsed glyph {:#x}: {}x{} left={} top={} flags={:#x} adv={}",
            codepoint,
            width,
            height,
            char_info.left,
            char_info.top,
            glyph_info.flags,
            glyph_info.horiz_advance
        );

        Ok(GlyphRecord {
            codepoint,
            char_info,
            glyph_info,
            bitmap,
        })
    }

    pub fn codepoint(&self) -> u32 {
        self.codepoint
    }

    pub fn char_info(&self) -> &CharInfo {
        &self.char_info
    }

    pub fn glyph_info(&self) -> &GlyphInfo {
        &self.glyph_info
    }

    pub fn width(&self) -> u8 {
        self.char_info.width
    }

    pub fn height(&self) -> u8 {
        self.char_info.height
    }

    pub fn left(&self) -> u8 {
        self.char_info.left
    }

    pub fn top(&self) -> u8 {
        self.char_info.top
    }

    pub fn horiz_advance(&self) -> u32 {
        self.glyph_info.horiz_advance
    }

    pub fn bitmap(&self) -> &Grid<u8> {
        &self.bitmap
    }
}
