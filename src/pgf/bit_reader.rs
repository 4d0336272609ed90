use crate::error::OutOfBoundsError;

/// Reads `count` bits starting at bit `start_bit` of `data`. Bit `i` of the
/// result comes from bit `(start_bit + i) % 8` of byte `(start_bit + i) / 8`,
/// so fields are stored least significant bit first.
pub fn read_bits(
    data: &[u8],
    start_bit: usize,
    count: usize,
) -> Result<u64, OutOfBoundsError> {
    assert!(count <= 64, "Cannot read {} bits into a u64", count);

    let available_bits = data.len() * 8;
    match start_bit.checked_add(count) {
        Some(end) if end <= available_bits => (),
        _ => {
            return Err(OutOfBoundsError {
                bit_offset: start_bit,
                bit_count: count,
                available_bits,
            })
        }
    }

    let mut value: u64 = 0;
    let mut written = 0;
    let mut bit_ptr = start_bit;

    // Take as many bits as possible out of each byte rather than going one
    // bit at a time. The first byte may be entered part way through.
    while written < count {
        let shift = bit_ptr % 8;
        let take = (8 - shift).min(count - written);
        let mask = (1u16 << take) - 1;
        let bits = (u16::from(data[bit_ptr / 8]) >> shift) & mask;

        value |= u64::from(bits) << written;
        written += take;
        bit_ptr += take;
    }

    Ok(value)
}

/// A cursor over a byte buffer which reads consecutive bit fields, advancing
/// past each one as it goes. Addressing follows `read_bits`.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8], bit_pos: usize) -> Self {
        BitReader { data, bit_pos }
    }

    pub fn position(&self) -> usize {
        self.bit_pos
    }

    // The byte containing the current bit, rounding down.
    pub fn byte_position(&self) -> usize {
        self.bit_pos / 8
    }

    pub fn read(&mut self, count: usize) -> Result<u64, OutOfBoundsError> {
        let value = read_bits(self.data, self.bit_pos, count)?;
        self.bit_pos += count;
        Ok(value)
    }

    pub fn read_u8(&mut self, count: usize) -> Result<u8, OutOfBoundsError> {
        debug_assert!(count <= 8);
        Ok(self.read(count)? as u8)
    }

    pub fn read_u16(&mut self, count: usize) -> Result<u16, OutOfBoundsError> {
        debug_assert!(count <= 16);
        Ok(self.read(count)? as u16)
    }

    pub fn read_u32(&mut self, count: usize) -> Result<u32, OutOfBoundsError> {
        debug_assert!(count <= 32);
        Ok(self.read(count)? as u32)
    }

    // Steps over `count` bits without reading them. Nothing is checked here;
    // the next read will fail if the cursor has gone past the end.
    pub fn skip(&mut self, count: usize) {
        self.bit_pos += count;
    }
}
