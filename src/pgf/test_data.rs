// Builders for synthetic PGF files. Real fonts are large and not ours to
// ship, so tests lay out small fonts of their own.

/// Packs values into bytes least significant bit first, the same way the
/// decoder reads them.
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        BitWriter::default()
    }

    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn write(&mut self, value: u64, count: usize) {
        for i in 0..count {
            if self.bit_len % 8 == 0 {
                self.bytes.push(0);
            }
            let bit = ((value >> i) & 0x1) as u8;
            let last = self.bytes.len() - 1;
            self.bytes[last] |= bit << (self.bit_len % 8);
            self.bit_len += 1;
        }
    }

    // Pads with zero bits up to the next multiple of `bits`.
    pub fn align(&mut self, bits: usize) {
        while self.bit_len % bits != 0 {
            self.write(0, 1);
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Run length encodes a list of 4 bit samples. Repeated samples become
/// literal runs and everything else is grouped into verbatim runs.
pub fn write_bitmap(writer: &mut BitWriter, samples: &[u8]) {
    let mut i = 0;
    while i < samples.len() {
        let repeats = samples[i..]
            .iter()
            .take(8)
            .take_while(|&&sample| sample == samples[i])
            .count();

        if repeats > 1 {
            writer.write(repeats as u64 - 1, 4);
            writer.write(samples[i] as u64, 4);
            i += repeats;
        } else {
            // Gather samples up until the next repeat starts
            let mut end = i + 1;
            while end < samples.len()
                && end - i < 8
                && !(end + 1 < samples.len() && samples[end] == samples[end + 1])
            {
                end += 1;
            }
            writer.write(16 - (end - i) as u64, 4);
            for &sample in &samples[i..end] {
                writer.write(sample as u64, 4);
            }
            i = end;
        }
    }
}

pub fn encode_bitmap(samples: &[u8]) -> Vec<u8> {
    let mut writer = BitWriter::new();
    write_bitmap(&mut writer, samples);
    writer.into_bytes()
}

#[derive(Debug, Clone)]
pub struct TestHeader {
    pub header_size: u16,
    pub magic: [u8; 4],
    pub revision: u32,
    pub version: u32,
    pub len_charmap: u32,
    pub len_charptr: u32,
    pub bpe_charmap: u32,
    pub bpe_charptr: u32,
    pub fontname: &'static str,
    pub fonttype: &'static str,
    pub first_glyph: u16,
    pub last_glyph: u16,
    pub len_adv_tab: u8,
    pub len_shadmap: u32,
    pub bpe_shadmap: u32,
}

impl Default for TestHeader {
    fn default() -> Self {
        TestHeader {
            header_size: 0x188,
            magic: *b"PGF0",
            revision: 3,
            version: 6,
            len_charmap: 0x5f,
            len_charptr: 3,
            bpe_charmap: 8,
            bpe_charptr: 12,
            fontname: "Test Sans",
            fonttype: "Regular",
            first_glyph: 0x20,
            last_glyph: 0x7e,
            len_adv_tab: 3,
            len_shadmap: 2,
            bpe_shadmap: 8,
        }
    }
}

fn put(bytes: &mut [u8], offset: usize, value: &[u8]) {
    bytes[offset..offset + value.len()].copy_from_slice(value);
}

pub fn header_bytes(header: &TestHeader) -> Vec<u8> {
    // Unknown spans are filled with junk, the decoder must not care.
    let mut bytes = vec![0xee; 0x188];

    put(&mut bytes, 0x00, &0u16.to_le_bytes());
    put(&mut bytes, 0x02, &header.header_size.to_le_bytes());
    put(&mut bytes, 0x04, &header.magic);
    put(&mut bytes, 0x08, &header.revision.to_le_bytes());
    put(&mut bytes, 0x0C, &header.version.to_le_bytes());
    put(&mut bytes, 0x10, &header.len_charmap.to_le_bytes());
    put(&mut bytes, 0x14, &header.len_charptr.to_le_bytes());
    put(&mut bytes, 0x18, &header.bpe_charmap.to_le_bytes());
    put(&mut bytes, 0x1C, &header.bpe_charptr.to_le_bytes());
    put(&mut bytes, 0x24, &0x0900u32.to_le_bytes());
    put(&mut bytes, 0x28, &0x0a00u32.to_le_bytes());
    put(&mut bytes, 0x2C, &0x4800u32.to_le_bytes());
    put(&mut bytes, 0x30, &0x4900u32.to_le_bytes());
    put(&mut bytes, 0x34, &[0x77]);

    let mut fontname = [0u8; 64];
    put(&mut fontname, 0, header.fontname.as_bytes());
    put(&mut bytes, 0x35, &fontname);
    let mut fonttype = [0u8; 64];
    put(&mut fonttype, 0, header.fonttype.as_bytes());
    put(&mut bytes, 0x75, &fonttype);

    put(&mut bytes, 0xB6, &header.first_glyph.to_le_bytes());
    put(&mut bytes, 0xB8, &header.last_glyph.to_le_bytes());

    #[rustfmt::skip]
    let maximums: [u32; 8] = [
        0x1111, 0x2222, 0x3333, 0x4444,
        0x0580, 0x0640, 0x0700, 0x0800,
    ];
    for (i, max) in maximums.iter().enumerate() {
        put(&mut bytes, 0xDC + i * 4, &max.to_le_bytes());
    }
    put(&mut bytes, 0xFC, &21u16.to_le_bytes());
    put(&mut bytes, 0xFE, &22u16.to_le_bytes());

    put(&mut bytes, 0x102, &[1, 1, 1, header.len_adv_tab]);

    put(&mut bytes, 0x16C, &header.len_shadmap.to_le_bytes());
    put(&mut bytes, 0x170, &header.bpe_shadmap.to_le_bytes());
    put(&mut bytes, 0x178, &24u32.to_le_bytes());
    put(&mut bytes, 0x17C, &25u32.to_le_bytes());

    bytes
}

#[derive(Debug, Clone)]
pub struct TestGlyph {
    pub codepoint: u32,
    pub width: u8,
    pub height: u8,
    pub left: u8,
    pub top: u8,
    pub flags: u8,
    pub magic_no: u8,
    pub shadow_id: u16,
    pub advance_index: u8,
    // 4 bit samples in stream order
    pub samples: Vec<u8>,
}

// Filler for the reserved span and the optional blocks in glyph records.
pub const RESERVED_FILLER: u64 = 0xa5_c3_5a;
pub const EXTENSION_FILLER: u64 = 0x00de_adbe_efca_fe12;

pub fn write_glyph_record(writer: &mut BitWriter, glyph: &TestGlyph) {
    writer.write(0x2abc, 14);
    writer.write(glyph.width as u64, 7);
    writer.write(glyph.height as u64, 7);
    writer.write(glyph.left as u64, 7);
    writer.write(glyph.top as u64, 7);

    writer.write(glyph.flags as u64, 6);
    writer.write(glyph.magic_no as u64, 7);
    writer.write(glyph.shadow_id as u64, 9);
    writer.write(RESERVED_FILLER, 24);

    // A block is only stored when its flag is clear.
    for &flag in &[0x04, 0x08, 0x10] {
        if glyph.flags & flag == 0 {
            writer.write(EXTENSION_FILLER, 56);
        }
    }

    writer.write(glyph.advance_index as u64, 8);
    write_bitmap(writer, &glyph.samples);
}

#[derive(Debug, Clone)]
pub struct TestFont {
    pub header: TestHeader,
    // Horizontal advance in 1/64ths of a pixel, one per advance table entry
    pub advances: Vec<u32>,
    pub glyphs: Vec<TestGlyph>,
}

impl TestFont {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut header = self.header.clone();
        header.len_charmap = (header.last_glyph as u32 + 1)
            .saturating_sub(header.first_glyph as u32);
        header.len_charptr = self.glyphs.len() as u32;
        header.len_adv_tab = self.advances.len() as u8;

        let mut bytes = header_bytes(&header);

        // dim_tab, xadj_tab and yadj_tab all have a single entry
        for word in &[0x0a00u32, 0x0b00, 0x0100, 0x0200, 0x0300, 0x0400] {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        for advance in &self.advances {
            bytes.extend_from_slice(&advance.to_le_bytes());
            bytes.extend_from_slice(&0x0440u32.to_le_bytes());
        }

        let mut glyph_data = BitWriter::new();
        let mut charptrs = Vec::new();
        for glyph in &self.glyphs {
            glyph_data.align(32);
            charptrs.push(glyph_data.bit_len() / 32);
            write_glyph_record(&mut glyph_data, glyph);
        }
        glyph_data.align(32);

        let mut shadmap = BitWriter::new();
        for i in 0..header.len_shadmap {
            shadmap.write(i as u64 + 1, header.bpe_shadmap as usize);
        }
        shadmap.align(32);
        bytes.extend(shadmap.into_bytes());

        let mut charmap = BitWriter::new();
        for offset in 0..header.len_charmap {
            let codepoint = header.first_glyph as u32 + offset;
            let index = self
                .glyphs
                .iter()
                .position(|glyph| glyph.codepoint == codepoint)
                .unwrap_or(0);
            charmap.write(index as u64, header.bpe_charmap as usize);
        }
        charmap.align(32);
        bytes.extend(charmap.into_bytes());

        let mut charptr = BitWriter::new();
        for ptr in charptrs {
            charptr.write(ptr as u64, header.bpe_charptr as usize);
        }
        charptr.align(32);
        bytes.extend(charptr.into_bytes());

        bytes.extend(glyph_data.into_bytes());
        bytes
    }

    /// A font with a space and three small glyphs. Widths including the left
    /// bearing are ' ' = 4px, 'a' = 7px, 'b' = 5.5px, 'c' = 7px.
    pub fn basic() -> Self {
        TestFont {
            header: TestHeader::default(),
            advances: vec![4 * 64, 6 * 64, 5 * 64 + 32],
            glyphs: vec![
                TestGlyph {
                    codepoint: ' ' as u32,
                    width: 0,
                    height: 0,
                    left: 0,
                    top: 0,
                    flags: 0x1c,
                    magic_no: 0,
                    shadow_id: 0,
                    advance_index: 0,
                    samples: vec![],
                },
                TestGlyph {
                    codepoint: 'a' as u32,
                    width: 3,
                    height: 2,
                    left: 1,
                    top: 5,
                    // Row major, all three optional blocks present
                    flags: 0x01,
                    magic_no: 0x55,
                    shadow_id: 0x1a3,
                    advance_index: 1,
                    samples: vec![0x1, 0x2, 0x3, 0x4, 0x5, 0x6],
                },
                TestGlyph {
                    codepoint: 'b' as u32,
                    width: 2,
                    height: 3,
                    left: 0,
                    top: 7,
                    // Column major, no optional blocks
                    flags: 0x1c,
                    magic_no: 0x7f,
                    shadow_id: 0x001,
                    advance_index: 2,
                    samples: vec![0xf, 0xf, 0xf, 0x0, 0x0, 0x8],
                },
                TestGlyph {
                    codepoint: 'c' as u32,
                    width: 3,
                    height: 3,
                    left: 1,
                    top: 4,
                    // Row major, only the second optional block missing
                    flags: 0x09,
                    magic_no: 0x01,
                    shadow_id: 0x1ff,
                    advance_index: 1,
                    samples: vec![0x0, 0xf, 0x0, 0xf, 0x0, 0xf, 0x0, 0xf, 0x0],
                },
            ],
        }
    }
}
