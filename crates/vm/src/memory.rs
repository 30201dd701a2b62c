//! Sparse data memory indexed by 16-bit address.
//!
//! Unwritten cells read as 0. Only written cells are stored, which is also
//! what ends up in the memory image.

use std::collections::BTreeMap;

use hack_common::{KBD, SCREEN};

/// The part of the address space an address falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// General-purpose RAM, 0..SCREEN.
    Data,
    /// Memory-mapped screen, SCREEN..KBD.
    Screen,
    /// The keyboard register.
    Keyboard,
    /// Above the keyboard; not backed by hardware.
    Unmapped,
}

impl Region {
    pub fn of(address: u16) -> Self {
        match address {
            a if a < SCREEN => Region::Data,
            a if a < KBD => Region::Screen,
            KBD => Region::Keyboard,
            _ => Region::Unmapped,
        }
    }

    /// Screen and keyboard are memory-mapped I/O.
    pub fn is_io(self) -> bool {
        matches!(self, Region::Screen | Region::Keyboard)
    }
}

/// Emulator memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    cells: BTreeMap<u16, u16>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value at `address`, 0 if never written.
    pub fn read(&self, address: u16) -> u16 {
        self.cells.get(&address).copied().unwrap_or(0)
    }

    pub fn write(&mut self, address: u16, value: u16) {
        self.cells.insert(address, value);
    }

    /// Whether `address` has been written.
    pub fn is_written(&self, address: u16) -> bool {
        self.cells.contains_key(&address)
    }

    /// Written cells in ascending address order.
    pub fn written(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.cells.iter().map(|(&a, &v)| (a, v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn into_cells(self) -> BTreeMap<u16, u16> {
        self.cells
    }
}

impl FromIterator<(u16, u16)> for Memory {
    fn from_iter<I: IntoIterator<Item = (u16, u16)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_reads_zero() {
        let mem = Memory::new();
        assert_eq!(mem.read(0), 0);
        assert_eq!(mem.read(0xFFFF), 0);
        assert!(mem.is_empty());
    }

    #[test]
    fn write_then_read() {
        let mut mem = Memory::new();
        mem.write(100, 0xBEEF);
        assert_eq!(mem.read(100), 0xBEEF);
        assert!(mem.is_written(100));
        assert!(!mem.is_written(101));
    }

    #[test]
    fn writing_zero_still_counts() {
        let mut mem = Memory::new();
        mem.write(5, 0);
        assert!(mem.is_written(5));
        assert_eq!(mem.len(), 1);
    }

    #[test]
    fn written_is_sorted() {
        let mut mem = Memory::new();
        mem.write(300, 3);
        mem.write(2, 1);
        mem.write(17, 2);
        let cells: Vec<_> = mem.written().collect();
        assert_eq!(cells, [(2, 1), (17, 2), (300, 3)]);
    }

    #[test]
    fn regions() {
        assert_eq!(Region::of(0), Region::Data);
        assert_eq!(Region::of(16383), Region::Data);
        assert_eq!(Region::of(16384), Region::Screen);
        assert_eq!(Region::of(24575), Region::Screen);
        assert_eq!(Region::of(24576), Region::Keyboard);
        assert_eq!(Region::of(24577), Region::Unmapped);
        assert!(Region::of(SCREEN).is_io());
        assert!(!Region::of(16).is_io());
    }
}
