use log::debug;

use crate::error::{IndexError, OutOfBoundsError};
use crate::pgf::bit_reader::read_bits;
use crate::pgf::byte_reader::PgfByteReader;

// Tables without a declared entry width use this many bits per entry.
pub const DEFAULT_BPE: u32 = 64;

/// A packed array of `entries` unsigned values, each `bpe` bits wide, stored
/// back to back with no padding between entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedWidthTable {
    name: &'static str,
    entries: u32,
    bpe: u32,
    data: Vec<u8>,
}

impl FixedWidthTable {
    // The number of bytes a table takes up in the file. The whole table is
    // padded out to a 32 bit boundary.
    pub fn size(entries: u32, bpe: u32) -> usize {
        let bits = entries as usize * bpe as usize;
        ((bits + 31) & !31) / 8
    }

    pub fn read(
        name: &'static str,
        reader: &mut PgfByteReader,
        entries: u32,
        bpe: u32,
    ) -> Result<FixedWidthTable, OutOfBoundsError> {
        let offset = reader.position();
        let data = reader
            .read_array(FixedWidthTable::size(entries, bpe))?
            .to_vec();

        debug!(
            "Parsed table offset:{:#x} - name={} entries={} bpe={} size={}",
            offset,
            name,
            entries,
            bpe,
            data.len()
        );

        Ok(FixedWidthTable {
            name,
            entries,
            bpe,
            data,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.entries as usize
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    pub fn bits_per_entry(&self) -> u32 {
        self.bpe
    }

    pub fn lookup(&self, index: usize) -> Result<u64, IndexError> {
        if index >= self.len() {
            return Err(IndexError::TableIndex {
                table: self.name,
                index,
                entries: self.len(),
            });
        }

        let bit_ptr = index * self.bpe as usize;
        Ok(read_bits(&self.data, bit_ptr, self.bpe as usize)?)
    }
}

/// A table of `entries` pairs of 32 bit words, addressed by word rather than
/// by pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPairTable {
    name: &'static str,
    words: Vec<u32>,
}

impl WordPairTable {
    pub fn read(
        name: &'static str,
        reader: &mut PgfByteReader,
        entries: u8,
    ) -> Result<WordPairTable, OutOfBoundsError> {
        let offset = reader.position();
        let words = (0..entries as usize * 2)
            .map(|_| reader.read_4_bytes())
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Parsed table offset:{:#x} - name={} entries={}",
            offset, name, entries
        );

        Ok(WordPairTable { name, words })
    }

    // Number of pairs
    pub fn len(&self) -> usize {
        self.words.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, index: usize) -> Result<u32, IndexError> {
        self.words
            .get(index)
            .copied()
            .ok_or(IndexError::TableIndex {
                table: self.name,
                index,
                entries: self.words.len(),
            })
    }

    pub fn pair(&self, entry: usize) -> Result<(u32, u32), IndexError> {
        if entry >= self.len() {
            return Err(IndexError::TableIndex {
                table: self.name,
                index: entry,
                entries: self.len(),
            });
        }
        Ok((self.words[entry * 2], self.words[entry * 2 + 1]))
    }
}
