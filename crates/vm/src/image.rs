//! The memory image left behind by a run.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::memory::Memory;

/// Every address written during a run with its final value, in address
/// order. Serializes as `{"RAM": {"<address>": <value>, ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemoryImage {
    #[serde(rename = "RAM")]
    pub ram: BTreeMap<u16, u16>,
}

impl MemoryImage {
    /// Final value at `address`, if it was written.
    pub fn get(&self, address: u16) -> Option<u16> {
        self.ram.get(&address).copied()
    }

    pub fn len(&self) -> usize {
        self.ram.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ram.is_empty()
    }
}

impl From<Memory> for MemoryImage {
    fn from(memory: Memory) -> Self {
        Self {
            ram: memory.into_cells(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_memory_keeps_written_cells() {
        let mut memory = Memory::new();
        memory.write(17, 4);
        memory.write(0, 9);
        let image = MemoryImage::from(memory);
        assert_eq!(image.len(), 2);
        assert_eq!(image.get(0), Some(9));
        assert_eq!(image.get(17), Some(4));
        assert_eq!(image.get(1), None);
    }

    #[test]
    fn serializes_under_ram_key() {
        let image: MemoryImage = MemoryImage {
            ram: [(10, 1), (2, 65535)].into_iter().collect(),
        };
        let json = serde_json::to_string(&image).unwrap();
        assert_eq!(json, r#"{"RAM":{"2":65535,"10":1}}"#);
    }

    #[test]
    fn empty_image() {
        let json = serde_json::to_string(&MemoryImage::default()).unwrap();
        assert_eq!(json, r#"{"RAM":{}}"#);
    }
}
