use crate::error::OutOfBoundsError;
use crate::pgf::bit_reader::BitReader;

/// A `height` by `width` grid of values, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![T::default(); width * height],
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.height && col < self.width {
            self.cells.get(row * self.width + col)
        } else {
            None
        }
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.width + col] = value;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() refuses a size of zero, and a zero width grid has no cells
        // anyway.
        self.cells.chunks(self.width.max(1))
    }
}

// Widens a 4 bit sample to 8 bits so that 0x0 maps to 0x00 and 0xf to 0xff.
fn expand_nibble(value: u8) -> u8 {
    (value << 4) | value
}

/// Decodes a glyph bitmap starting at bit `start_bit` of `data`.
///
/// The bitmap is a stream of runs, each introduced by a 4 bit count:
///  * a count `n < 8` is followed by a single 4 bit sample which is repeated
///    `n + 1` times.
///  * a count `n >= 8` is followed by `16 - n` samples, each of which is
///    emitted once.
///
/// Samples are laid out left to right then top to bottom when `row_major` is
/// set, and top to bottom then left to right otherwise. Decoding stops as
/// soon as the grid is full, even in the middle of a run.
pub fn decode_bitmap(
    data: &[u8],
    start_bit: usize,
    width: usize,
    height: usize,
    row_major: bool,
) -> Result<Grid<u8>, OutOfBoundsError> {
    let mut grid = Grid::new(width, height);
    let total = width * height;
    let mut reader = BitReader::new(data, start_bit);

    let mut i = 0;
    while i < total {
        let nibble = reader.read_u8(4)?;

        let (run_length, repeated) = if nibble < 8 {
            (nibble as usize + 1, Some(reader.read_u8(4)?))
        } else {
            (16 - nibble as usize, None)
        };

        for _ in 0..run_length {
            if i >= total {
                break;
            }

            let value = match repeated {
                Some(value) => value,
                None => reader.read_u8(4)?,
            };

            let (row, col) = if row_major {
                (i / width, i % width)
            } else {
                (i % height, i / height)
            };
            grid.set(row, col, expand_nibble(value));

            i += 1;
        }
    }

    Ok(grid)
}
