pub const NUM_INPUTS: usize = 4; // D, C, B, A
pub const NUM_DIGITS: usize = 10;
pub const MAX_DIGIT: u8 = 9;

// decoder truth table, bit 3..0 = D, C, B, A
pub const BCD_STATES: [u8; NUM_DIGITS] = [
    0b0000, 0b0001, 0b0010, 0b0011, 0b0100, 0b0101, 0b0110, 0b0111, 0b1000, 0b1001,
];

pub const BLANK: u8 = 0b1111; // invalid BCD code, all outputs off

pub mod input {
    pub const D: u8 = 0b1000;
    pub const C: u8 = 0b0100;
    pub const B: u8 = 0b0010;
    pub const A: u8 = 0b0001;

    /// Write order of the select lines, most significant first.
    pub const ORDER: [u8; super::NUM_INPUTS] = [D, C, B, A];
}
