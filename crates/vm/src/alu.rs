//! The Hack arithmetic-logic unit.
//!
//! Six control bits, applied in order:
//! ```text
//! zx  zero the D input        zy  zero the A/M input
//! nx  negate the D input      ny  negate the A/M input
//! f   1: x + y, 0: x & y      no  negate the output
//! ```
//! The a-bit (bit 6 of the computation code) picks A or M as the second
//! input. The caller resolves it and passes the chosen value as `y`.

const ZX: u8 = 0b100000;
const NX: u8 = 0b010000;
const ZY: u8 = 0b001000;
const NY: u8 = 0b000100;
const F: u8 = 0b000010;
const NO: u8 = 0b000001;

/// Compute the ALU output for a 7-bit computation code.
///
/// `d` is the current value of register D and `y` the already-selected A or
/// M operand. All arithmetic wraps at 16 bits.
pub fn alu(comp: u8, d: u16, y: u16) -> u16 {
    let mut x = d;
    let mut y = y;

    if comp & ZX != 0 {
        x = 0;
    }
    if comp & NX != 0 {
        x = !x;
    }
    if comp & ZY != 0 {
        y = 0;
    }
    if comp & NY != 0 {
        y = !y;
    }

    let out = if comp & F != 0 {
        x.wrapping_add(y)
    } else {
        x & y
    };

    if comp & NO != 0 {
        !out
    } else {
        out
    }
}

/// Whether the computation reads M instead of A.
pub fn reads_memory(comp: u8) -> bool {
    comp & 0b1000000 != 0
}
