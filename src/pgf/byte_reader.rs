use crate::error::OutOfBoundsError;

/// A wrapper around a byte slice that provides methods for reading the
/// little-endian, byte aligned data found in a PGF header and its tables.
#[derive(Debug)]
pub struct PgfByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

// Generate a read_<n>_bytes function using <type>::from_le_bytes.
macro_rules! generate_int_reader_func {
    (fn $func_name:ident() -> $return_type:ident, $size:expr) => {
        pub fn $func_name(&mut self) -> Result<$return_type, OutOfBoundsError> {
            let mut buf = [0; $size];
            buf.copy_from_slice(self.take($size)?);
            Ok($return_type::from_le_bytes(buf))
        }
    };
}

impl<'a> PgfByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        PgfByteReader { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, size: usize) -> Result<&'a [u8], OutOfBoundsError> {
        if size > self.remaining() {
            return Err(OutOfBoundsError {
                bit_offset: self.pos * 8,
                bit_count: size * 8,
                available_bits: self.data.len() * 8,
            });
        }

        let bytes = &self.data[self.pos..self.pos + size];
        self.pos += size;
        Ok(bytes)
    }

    generate_int_reader_func!(fn read_1_byte() -> u8, 1);
    generate_int_reader_func!(fn read_2_bytes() -> u16, 2);
    generate_int_reader_func!(fn read_4_bytes() -> u32, 4);

    pub fn read_array(
        &mut self,
        size: usize,
    ) -> Result<&'a [u8], OutOfBoundsError> {
        self.take(size)
    }

    // Everything from the current position to the end of the buffer.
    pub fn read_rest(&mut self) -> &'a [u8] {
        let rest = &self.data[self.pos..];
        self.pos = self.data.len();
        rest
    }
}
