// 🏗️ BBAN Structure - Ordered parts that make up a country's BBAN
//
// Structures are static configuration: built once from the registry table
// and only ever read afterwards.

pub mod part;
mod registry;

pub use part::{CharacterType, PartType, StructurePart};

use crate::text::substring;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BbanStructure {
    parts: Vec<StructurePart>,
}

impl BbanStructure {
    pub fn new(parts: Vec<StructurePart>) -> Self {
        BbanStructure { parts }
    }

    /// Structure registered for `country_code`, `None` when IBAN is not used there
    pub fn for_country(country_code: &str) -> Option<&'static BbanStructure> {
        registry::STRUCTURES.get(country_code)
    }

    /// Country codes with a registered structure, alphabetical
    pub fn supported_countries() -> impl Iterator<Item = &'static str> {
        registry::BBAN_TABLE.iter().map(|(code, _)| *code)
    }

    pub fn parts(&self) -> &[StructurePart] {
        &self.parts
    }

    /// Sum of all part lengths
    pub fn bban_length(&self) -> usize {
        self.parts.iter().map(|p| p.length()).sum()
    }

    /// Slice `bban` part by part, in layout order.
    ///
    /// Offsets count characters, not bytes. Slices are clipped when `bban`
    /// is shorter than the structure.
    pub fn split<'a>(&'a self, bban: &'a str) -> impl Iterator<Item = (&'a StructurePart, &'a str)> + 'a {
        let mut offset = 0;
        self.parts.iter().map(move |part| {
            let value = substring(bban, offset, offset + part.length());
            offset += part.length();
            (part, value)
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
