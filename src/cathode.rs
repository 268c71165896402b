//! Digit to decoder output remapping.
//!
//! Tube cathodes are not always soldered to the K155ID1 outputs in numeric
//! order. A [`CathodeMap`] records, for each numeral, which decoder output
//! (the canonical index) lights it on a given board revision.

use crate::constants::{MAX_DIGIT, NUM_DIGITS};

/// Permutation of `0..=9`, indexed by the requested digit.
///
/// Only constructible through [`CathodeMap::new`], which rejects tables that
/// are not bijections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CathodeMap([u8; NUM_DIGITS]);

impl CathodeMap {
    /// Cathodes wired in order, first board revision.
    pub const IDENTITY: CathodeMap = match CathodeMap::new([0, 1, 2, 3, 4, 5, 6, 7, 8, 9]) {
        Some(map) => map,
        None => panic!("identity cathode map is not a permutation"),
    };

    /// Second board revision.
    pub const REV2: CathodeMap = match CathodeMap::new([2, 9, 8, 4, 1, 6, 3, 7, 5, 0]) {
        Some(map) => map,
        None => panic!("rev2 cathode map is not a permutation"),
    };

    pub const fn new(table: [u8; NUM_DIGITS]) -> Option<Self> {
        let mut seen = [false; NUM_DIGITS];
        let mut i = 0;
        while i < NUM_DIGITS {
            let canonical = table[i];
            if canonical > MAX_DIGIT || seen[canonical as usize] {
                return None;
            }
            seen[canonical as usize] = true;
            i += 1;
        }
        Some(Self(table))
    }

    /// Decoder output wired to the cathode of `digit`.
    pub const fn canonical(&self, digit: u8) -> Option<u8> {
        if digit > MAX_DIGIT {
            return None;
        }
        Some(self.0[digit as usize])
    }

    /// Numeral lit when the decoder enables output `canonical`.
    pub const fn digit_for(&self, canonical: u8) -> Option<u8> {
        if canonical > MAX_DIGIT {
            return None;
        }
        let mut digit = 0;
        while digit < NUM_DIGITS {
            if self.0[digit] == canonical {
                return Some(digit as u8);
            }
            digit += 1;
        }
        None
    }

    pub const fn inverse(&self) -> CathodeMap {
        let mut table = [0; NUM_DIGITS];
        let mut digit = 0;
        while digit < NUM_DIGITS {
            table[self.0[digit] as usize] = digit as u8;
            digit += 1;
        }
        CathodeMap(table)
    }

    pub const fn as_array(&self) -> &[u8; NUM_DIGITS] {
        &self.0
    }
}

impl Default for CathodeMap {
    fn default() -> Self {
        Self::IDENTITY
    }
}
