use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

// PGF advances are stored in 1/64ths of a pixel.
pub const UNITS_PER_PIXEL: u32 = 64;

// A horizontal distance in 1/64ths of a pixel. Arithmetic saturates at
// u32::MAX, since advances come straight out of font files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Advance(u32);

impl Advance {
    pub const fn zero() -> Advance {
        Advance(0)
    }

    pub const fn from_64ths(units: u32) -> Advance {
        Advance(units)
    }

    pub const fn from_pixels(pixels: u32) -> Advance {
        Advance(pixels.saturating_mul(UNITS_PER_PIXEL))
    }

    // None if the distance can't be represented in 64ths.
    pub fn checked_from_pixels(pixels: u32) -> Option<Advance> {
        pixels.checked_mul(UNITS_PER_PIXEL).map(Advance)
    }

    pub const fn as_64ths(self) -> u32 {
        self.0
    }

    // Whole pixels, dropping any fraction.
    pub const fn to_pixels(self) -> u32 {
        self.0 / UNITS_PER_PIXEL
    }
}

impl Add for Advance {
    type Output = Advance;
    fn add(self, other: Advance) -> Advance {
        Advance(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Advance {
    fn add_assign(&mut self, other: Advance) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Advance {
    type Output = Advance;
    fn sub(self, other: Advance) -> Advance {
        Advance(self.0.saturating_sub(other.0))
    }
}

impl Sum for Advance {
    fn sum<I: Iterator<Item = Advance>>(iter: I) -> Advance {
        iter.fold(Advance::zero(), |total, advance| total + advance)
    }
}
