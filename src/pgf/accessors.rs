use crate::error::IndexError;
use crate::pgf::table::{FixedWidthTable, WordPairTable};
use crate::pgf::{GlyphRecord, PgfFont, PgfHeader};

// Font names are stored NUL padded.
fn padded_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

impl PgfFont {
    pub fn header(&self) -> &PgfHeader {
        &self.header
    }

    pub fn font_name(&self) -> String {
        padded_string(&self.header.fontname)
    }

    pub fn font_type(&self) -> String {
        padded_string(&self.header.fonttype)
    }

    pub fn first_glyph(&self) -> u32 {
        self.header.first_glyph as u32
    }

    pub fn last_glyph(&self) -> u32 {
        self.header.last_glyph as u32
    }

    // Point size, in 1/64ths of a point
    pub fn point_size(&self) -> (u32, u32) {
        (self.header.h_size, self.header.v_size)
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.header.h_res, self.header.v_res)
    }

    pub fn max_glyph_size(&self) -> (u16, u16) {
        (self.header.max_glyph_w, self.header.max_glyph_h)
    }

    pub fn max_advance(&self) -> (u32, u32) {
        (self.header.max_adv_h, self.header.max_adv_v)
    }

    pub fn shadow_scale(&self) -> (u32, u32) {
        (self.header.x_shadscale, self.header.y_shadscale)
    }

    pub fn dimension_table(&self) -> &WordPairTable {
        &self.dim_tab
    }

    pub fn x_adjust_table(&self) -> &WordPairTable {
        &self.xadj_tab
    }

    pub fn y_adjust_table(&self) -> &WordPairTable {
        &self.yadj_tab
    }

    pub fn advance_table(&self) -> &WordPairTable {
        &self.adv_tab
    }

    pub fn shadow_map(&self) -> &FixedWidthTable {
        &self.shadmap
    }

    pub fn has_glyph(&self, codepoint: u32) -> bool {
        self.glyph_offset(codepoint).is_ok()
    }

    // Finds the bit offset of a character's record in the glyph data, going
    // through the charmap and then the charptr table.
    fn glyph_offset(&self, codepoint: u32) -> Result<usize, IndexError> {
        let first = self.first_glyph();
        let last = self.last_glyph();
        if codepoint < first || codepoint > last {
            return Err(IndexError::CodepointOutOfRange {
                codepoint,
                first,
                last,
            });
        }

        let idx = self.charmap.lookup((codepoint - first) as usize)?;
        let charptr = self.charptr.lookup(idx as usize)?;

        // charptr entries count 32 bit words
        Ok(charptr as usize * 4 * 8)
    }

    pub fn glyph(&self, codepoint: u32) -> Result<GlyphRecord, IndexError> {
        let bit_offset = self.glyph_offset(codepoint)?;
        GlyphRecord::decode(
            codepoint,
            &self.glyph_data,
            bit_offset,
            &self.adv_tab,
        )
    }

    pub fn glyph_for_char(&self, chr: char) -> Result<GlyphRecord, IndexError> {
        self.glyph(chr as u32)
    }
}
