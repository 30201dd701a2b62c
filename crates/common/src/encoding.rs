//! Bit-field encoding tables for Hack command instructions.
//!
//! A command word is laid out as:
//! ```text
//! bit:  15 14 13 | 12 | 11 10  9  8  7  6 | 5 4 3 | 2 1 0
//!        1  1  1 |  a | c1 c2 c3 c4 c5 c6 | A D M | j1 j2 j3
//! ```
//! The 7-bit computation code is `a c1..c6`. All tables here are immutable
//! constants; lookups go both ways (mnemonic → code, code → mnemonic).

/// Computation mnemonics and their 7-bit codes (a-bit first).
pub const COMP_TABLE: [(&str, u8); 28] = [
    ("0", 0b0101010),
    ("1", 0b0111111),
    ("-1", 0b0111010),
    ("D", 0b0001100),
    ("A", 0b0110000),
    ("M", 0b1110000),
    ("!D", 0b0001101),
    ("!A", 0b0110001),
    ("!M", 0b1110001),
    ("-D", 0b0001111),
    ("-A", 0b0110011),
    ("-M", 0b1110011),
    ("D+1", 0b0011111),
    ("A+1", 0b0110111),
    ("M+1", 0b1110111),
    ("D-1", 0b0001110),
    ("A-1", 0b0110010),
    ("M-1", 0b1110010),
    ("D+A", 0b0000010),
    ("D+M", 0b1000010),
    ("D-A", 0b0010011),
    ("A-D", 0b0000111),
    ("D-M", 0b1010011),
    ("M-D", 0b1000111),
    ("D&A", 0b0000000),
    ("D&M", 0b1000000),
    ("D|A", 0b0010101),
    ("D|M", 0b1010101),
];

/// Look up the 7-bit code for a computation mnemonic.
pub fn comp_code(mnemonic: &str) -> Option<u8> {
    COMP_TABLE
        .iter()
        .find(|(m, _)| *m == mnemonic)
        .map(|&(_, code)| code)
}

/// Look up the canonical mnemonic for a 7-bit computation code.
///
/// Codes outside the table are still executable by the ALU; they just have
/// no assembly spelling.
pub fn comp_mnemonic(code: u8) -> Option<&'static str> {
    COMP_TABLE
        .iter()
        .find(|&&(_, c)| c == code & 0x7F)
        .map(|&(m, _)| m)
}

/// The destination field: which of {A, D, M} receive the ALU result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dest(u8);

impl Dest {
    /// Write to memory at address A.
    pub const M: u8 = 0b001;
    /// Write to register D.
    pub const D: u8 = 0b010;
    /// Write to register A.
    pub const A: u8 = 0b100;

    /// Build a destination from the low three bits of `bits`.
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & 0b111)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn writes_m(self) -> bool {
        self.0 & Self::M != 0
    }

    pub fn writes_d(self) -> bool {
        self.0 & Self::D != 0
    }

    pub fn writes_a(self) -> bool {
        self.0 & Self::A != 0
    }

    /// Parse a destination mnemonic. The empty string means "no destination".
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        DEST_TABLE
            .iter()
            .find(|(m, _)| *m == mnemonic)
            .map(|&(_, bits)| Self(bits))
    }

    /// Canonical spelling, empty for the null destination.
    pub fn mnemonic(self) -> &'static str {
        DEST_TABLE[self.0 as usize].0
    }
}

/// Destination mnemonics, indexed by their 3-bit code.
pub const DEST_TABLE: [(&str, u8); 8] = [
    ("", 0b000),
    ("M", 0b001),
    ("D", 0b010),
    ("MD", 0b011),
    ("A", 0b100),
    ("AM", 0b101),
    ("AD", 0b110),
    ("AMD", 0b111),
];

/// Jump condition, evaluated against the sign and zero status of the ALU result.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Jump {
    /// No jump.
    #[default]
    Never = 0b000,
    /// Jump if result > 0.
    Jgt = 0b001,
    /// Jump if result == 0.
    Jeq = 0b010,
    /// Jump if result >= 0.
    Jge = 0b011,
    /// Jump if result < 0.
    Jlt = 0b100,
    /// Jump if result != 0.
    Jne = 0b101,
    /// Jump if result <= 0.
    Jle = 0b110,
    /// Unconditional jump.
    Jmp = 0b111,
}

/// All jump conditions, indexed by their 3-bit code.
pub const ALL_JUMPS: [Jump; 8] = [
    Jump::Never,
    Jump::Jgt,
    Jump::Jeq,
    Jump::Jge,
    Jump::Jlt,
    Jump::Jne,
    Jump::Jle,
    Jump::Jmp,
];

impl Jump {
    /// Decode the low three bits of `bits`. Every 3-bit value is a valid jump.
    pub fn from_bits(bits: u8) -> Self {
        ALL_JUMPS[(bits & 0b111) as usize]
    }

    /// Parse a jump mnemonic. The empty string means "no jump".
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        ALL_JUMPS.iter().find(|j| j.mnemonic() == mnemonic).copied()
    }

    /// Canonical spelling, empty for [`Jump::Never`].
    pub fn mnemonic(self) -> &'static str {
        match self {
            Jump::Never => "",
            Jump::Jgt => "JGT",
            Jump::Jeq => "JEQ",
            Jump::Jge => "JGE",
            Jump::Jlt => "JLT",
            Jump::Jne => "JNE",
            Jump::Jle => "JLE",
            Jump::Jmp => "JMP",
        }
    }
}
