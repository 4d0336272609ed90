use std::fs;
use std::path::Path;

use log::info;

use crate::error::{FormatError, LoadError};
use crate::pgf::byte_reader::PgfByteReader;
use crate::pgf::table::{FixedWidthTable, WordPairTable};
use crate::pgf::{PgfFont, PgfHeader};

impl PgfFont {
    /// Parses a whole PGF file: the header, then the four word pair tables,
    /// then the three packed tables. Everything after that is glyph data.
    pub fn open(bytes: &[u8]) -> Result<PgfFont, FormatError> {
        let mut reader = PgfByteReader::new(bytes);

        let header = PgfHeader::read(&mut reader)?;

        let dim_tab =
            WordPairTable::read("dim_tab", &mut reader, header.len_dim_tab)?;
        let xadj_tab =
            WordPairTable::read("xadj_tab", &mut reader, header.len_xadj_tab)?;
        let yadj_tab =
            WordPairTable::read("yadj_tab", &mut reader, header.len_yadj_tab)?;
        let adv_tab =
            WordPairTable::read("adv_tab", &mut reader, header.len_adv_tab)?;

        let shadmap = FixedWidthTable::read(
            "shadmap",
            &mut reader,
            header.len_shadmap,
            header.bpe_shadmap,
        )?;
        let charmap = FixedWidthTable::read(
            "charmap",
            &mut reader,
            header.len_charmap,
            header.bpe_charmap,
        )?;
        let charptr = FixedWidthTable::read(
            "charptr",
            &mut reader,
            header.len_charptr,
            header.bpe_charptr,
        )?;

        let glyph_data = reader.read_rest().to_vec();

        let font = PgfFont {
            header,
            dim_tab,
            xadj_tab,
            yadj_tab,
            adv_tab,
            shadmap,
            charmap,
            charptr,
            glyph_data,
        };

        info!(
            "Parsed font {:?} ({:?}): glyphs {:#x}..={:#x}, {} bytes of glyph data",
            font.font_name(),
            font.font_type(),
            font.header.first_glyph,
            font.header.last_glyph,
            font.glyph_data.len()
        );

        Ok(font)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<PgfFont, LoadError> {
        let path = path.as_ref();
        info!("Opening font file {}", path.display());

        let bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(PgfFont::open(&bytes)?)
    }
}
