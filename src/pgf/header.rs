use log::debug;

use crate::error::FormatError;
use crate::pgf::byte_reader::PgfByteReader;
use crate::pgf::PgfHeader;

pub const PGF_MAGIC: &[u8; 4] = b"PGF0";
pub const PGF_VERSION: u32 = 6;
pub const PGF_REVISIONS: [u32; 2] = [2, 3];
pub const MAX_TABLE_BPE: u32 = 32;
pub const MAX_FIRST_GLYPH: u16 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderField {
    pub name: &'static str,
    pub offset: usize,
    pub size: usize,
}

const fn field(name: &'static str, offset: usize, size: usize) -> HeaderField {
    HeaderField { name, offset, size }
}

// Every field of the header in file order, including the spans whose
// meaning is unknown. Each one must start exactly where the last one ended.
#[rustfmt::skip]
pub const HEADER_FIELDS: &[HeaderField] = &[
    field("header_off",   0x00,  2),
    field("header_size",  0x02,  2),
    field("magic",        0x04,  4),
    field("revision",     0x08,  4),
    field("version",      0x0C,  4),
    field("len_charmap",  0x10,  4),
    field("len_charptr",  0x14,  4),
    field("bpe_charmap",  0x18,  4),
    field("bpe_charptr",  0x1C,  4),
    field("unk1_4",       0x20,  4),
    field("h_size",       0x24,  4),
    field("v_size",       0x28,  4),
    field("h_res",        0x2C,  4),
    field("v_res",        0x30,  4),
    field("weight",       0x34,  1),
    field("fontname",     0x35,  64),
    field("fonttype",     0x75,  64),
    field("unk3_1",       0xB5,  1),
    field("first_glyph",  0xB6,  2),
    field("last_glyph",   0xB8,  2),
    field("unk4_34",      0xBA,  34),
    field("maxLeftXAdj",  0xDC,  4),
    field("maxBaseYAdj",  0xE0,  4),
    field("minCentXAdj",  0xE4,  4),
    field("maxTopYAdj",   0xE8,  4),
    field("maxAdvH",      0xEC,  4),
    field("maxAdvV",      0xF0,  4),
    field("maxSizeH",     0xF4,  4),
    field("maxSizeV",     0xF8,  4),
    field("maxGlyphW",    0xFC,  2),
    field("maxGlyphH",    0xFE,  2),
    field("unk5",         0x100, 2),
    field("len_dim_tab",  0x102, 1),
    field("len_xadj_tab", 0x103, 1),
    field("len_yadj_tab", 0x104, 1),
    field("len_adv_tab",  0x105, 1),
    field("unk6_102",     0x106, 102),
    field("len_shadmap",  0x16C, 4),
    field("bpe_shadmap",  0x170, 4),
    field("unk7_4",       0x174, 4),
    field("x_shadscale",  0x178, 4),
    field("y_shadscale",  0x17C, 4),
    field("unk8_2",       0x180, 8),
];

// Walks HEADER_FIELDS alongside the reader, checking that each value is read
// from the offset the layout says it lives at.
struct HeaderFieldReader<'r, 'a> {
    reader: &'r mut PgfByteReader<'a>,
    fields: std::slice::Iter<'static, HeaderField>,
}

impl<'r, 'a> HeaderFieldReader<'r, 'a> {
    fn new(reader: &'r mut PgfByteReader<'a>) -> Self {
        HeaderFieldReader {
            reader,
            fields: HEADER_FIELDS.iter(),
        }
    }

    fn next_field(&mut self, size: usize) -> Result<(), FormatError> {
        let field = self
            .fields
            .next()
            .expect("Read past the last header field");
        assert_eq!(
            field.size, size,
            "Header field {} read with the wrong width",
            field.name
        );

        if self.reader.position() != field.offset {
            return Err(FormatError::FieldOffsetMismatch {
                field: field.name,
                expected: field.offset,
                actual: self.reader.position(),
            });
        }
        Ok(())
    }

    fn read_u8(&mut self) -> Result<u8, FormatError> {
        self.next_field(1)?;
        Ok(self.reader.read_1_byte()?)
    }

    fn read_u16(&mut self) -> Result<u16, FormatError> {
        self.next_field(2)?;
        Ok(self.reader.read_2_bytes()?)
    }

    fn read_u32(&mut self) -> Result<u32, FormatError> {
        self.next_field(4)?;
        Ok(self.reader.read_4_bytes()?)
    }

    fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N], FormatError> {
        self.next_field(N)?;
        let mut buf = [0; N];
        buf.copy_from_slice(self.reader.read_array(N)?);
        Ok(buf)
    }

    // Reads over a field whose meaning is unknown.
    fn skip(&mut self) -> Result<(), FormatError> {
        let size = self.fields.as_slice().first().map_or(0, |f| f.size);
        self.next_field(size)?;
        self.reader.read_array(size)?;
        Ok(())
    }
}

impl PgfHeader {
    pub fn read(reader: &mut PgfByteReader) -> Result<PgfHeader, FormatError> {
        let mut fields = HeaderFieldReader::new(reader);

        let header_off = fields.read_u16()?;
        let header_size = fields.read_u16()?;
        let magic = fields.read_bytes::<4>()?;
        let revision = fields.read_u32()?;
        let version = fields.read_u32()?;
        let len_charmap = fields.read_u32()?;
        let len_charptr = fields.read_u32()?;
        let bpe_charmap = fields.read_u32()?;
        let bpe_charptr = fields.read_u32()?;
        fields.skip()?;
        let h_size = fields.read_u32()?;
        let v_size = fields.read_u32()?;
        let h_res = fields.read_u32()?;
        let v_res = fields.read_u32()?;
        let weight = fields.read_u8()?;
        let fontname = fields.read_bytes::<64>()?;
        let fonttype = fields.read_bytes::<64>()?;
        fields.skip()?;
        let first_glyph = fields.read_u16()?;
        let last_glyph = fields.read_u16()?;
        fields.skip()?;
        let max_left_x_adj = fields.read_u32()?;
        let max_base_y_adj = fields.read_u32()?;
        let min_cent_x_adj = fields.read_u32()?;
        let max_top_y_adj = fields.read_u32()?;
        let max_adv_h = fields.read_u32()?;
        let max_adv_v = fields.read_u32()?;
        let max_size_h = fields.read_u32()?;
        let max_size_v = fields.read_u32()?;
        let max_glyph_w = fields.read_u16()?;
        let max_glyph_h = fields.read_u16()?;
        fields.skip()?;
        let len_dim_tab = fields.read_u8()?;
        let len_xadj_tab = fields.read_u8()?;
        let len_yadj_tab = fields.read_u8()?;
        let len_adv_tab = fields.read_u8()?;
        fields.skip()?;
        let len_shadmap = fields.read_u32()?;
        let bpe_shadmap = fields.read_u32()?;
        fields.skip()?;
        let x_shadscale = fields.read_u32()?;
        let y_shadscale = fields.read_u32()?;
        fields.skip()?;

        let header = PgfHeader {
            header_off,
            header_size,
            magic,
            revision,
            version,
            len_charmap,
            len_charptr,
            bpe_charmap,
            bpe_charptr,
            h_size,
            v_size,
            h_res,
            v_res,
            weight,
            fontname,
            fonttype,
            first_glyph,
            last_glyph,
            max_left_x_adj,
            max_base_y_adj,
            min_cent_x_adj,
            max_top_y_adj,
            max_adv_h,
            max_adv_v,
            max_size_h,
            max_size_v,
            max_glyph_w,
            max_glyph_h,
            len_dim_tab,
            len_xadj_tab,
            len_yadj_tab,
            len_adv_tab,
            len_shadmap,
            bpe_shadmap,
            x_shadscale,
            y_shadscale,
        };

        header.validate(reader.position())?;
        debug!(
            "Parsed header: glyphs {:#x}..={:#x}, {}x{} res, {} header bytes",
            header.first_glyph,
            header.last_glyph,
            header.h_res,
            header.v_res,
            header.header_size
        );
        Ok(header)
    }

    fn validate(&self, consumed: usize) -> Result<(), FormatError> {
        if &self.magic != PGF_MAGIC {
            return Err(FormatError::BadMagic(self.magic));
        }
        if self.version != PGF_VERSION {
            return Err(FormatError::UnsupportedVersion(self.version));
        }
        if !PGF_REVISIONS.contains(&self.revision) {
            return Err(FormatError::UnsupportedRevision(self.revision));
        }

        for &(table, bits) in &[
            ("charmap", self.bpe_charmap),
            ("charptr", self.bpe_charptr),
            ("shadmap", self.bpe_shadmap),
        ] {
            if bits > MAX_TABLE_BPE {
                return Err(FormatError::BitsPerEntryTooLarge { table, bits });
            }
        }

        if self.first_glyph > MAX_FIRST_GLYPH {
            return Err(FormatError::FirstGlyphTooLarge(self.first_glyph));
        }

        if consumed != self.header_size as usize {
            return Err(FormatError::HeaderSizeMismatch {
                consumed,
                declared: self.header_size,
            });
        }

        Ok(())
    }
}
