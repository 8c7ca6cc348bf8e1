//! Flags register (`FL`).
//!
//! `FL` holds the result of the most recent `CMP` as a bitmask of the form
//! `0b00000LGE`. After any comparison exactly one of the three bits is set;
//! at reset none are.

use std::cmp::Ordering;
use std::fmt;

/// Less-than bit.
pub const FLAG_LESS: u8 = 0b100;
/// Greater-than bit.
pub const FLAG_GREATER: u8 = 0b010;
/// Equal bit.
pub const FLAG_EQUAL: u8 = 0b001;

/// The `FL` register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    /// Flags value after reset (no comparison performed yet).
    pub const RESET: Self = Self(0);
    /// Last comparison found `a < b`.
    pub const LESS: Self = Self(FLAG_LESS);
    /// Last comparison found `a > b`.
    pub const GREATER: Self = Self(FLAG_GREATER);
    /// Last comparison found `a == b`.
    pub const EQUAL: Self = Self(FLAG_EQUAL);

    /// Flags produced by comparing `a` with `b`.
    pub const fn compare(a: u8, b: u8) -> Self {
        if a < b {
            Self::LESS
        } else if a > b {
            Self::GREATER
        } else {
            Self::EQUAL
        }
    }

    /// Raw register bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when the equal bit is set.
    #[inline]
    pub const fn is_equal(self) -> bool {
        self.0 & FLAG_EQUAL != 0
    }

    /// Converts the flags back to an ordering, if a comparison has happened.
    pub const fn ordering(self) -> Option<Ordering> {
        match self.0 {
            FLAG_LESS => Some(Ordering::Less),
            FLAG_GREATER => Some(Ordering::Greater),
            FLAG_EQUAL => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl From<Ordering> for Flags {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Self::LESS,
            Ordering::Greater => Self::GREATER,
            Ordering::Equal => Self::EQUAL,
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |mask: u8, c: char| if self.0 & mask != 0 { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(FLAG_LESS, 'L'),
            bit(FLAG_GREATER, 'G'),
            bit(FLAG_EQUAL, 'E')
        )
    }
}
