//! Cell arithmetic
//!
//! Cells hold 16-bit signed values, but every write goes through two steps:
//!
//! 1. [`to_short`] truncates to 16 bits, two's complement (a plain `short` cast).
//! 2. [`wrap_cell`] folds any negative result back onto the positive side by
//!    adding 32768.
//!
//! The combination keeps every stored value in `0..=32767`. Decrementing zero
//! yields 32767 and incrementing 32767 yields 0. This is not two's complement
//! wraparound and programs depend on it, so [`normalize`] must be used for
//! every store.

/// Value stored in one memory cell
pub type Cell = i16;

/// Truncate to the 16-bit signed range
pub fn to_short(value: i32) -> Cell {
    value as i16
}

/// Fold a negative cell value onto the positive side
pub fn wrap_cell(value: Cell) -> Cell {
    if value < 0 {
        (i32::from(i16::MAX) + i32::from(value) + 1) as i16
    } else {
        value
    }
}

/// The full store pipeline: truncate then fold
pub fn normalize(value: i32) -> Cell {
    wrap_cell(to_short(value))
}

/// Character printed by `.`: the low 16 bits read as an unsigned code point
pub fn output_char(value: Cell) -> char {
    let code = u32::from(value as u16);
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}
