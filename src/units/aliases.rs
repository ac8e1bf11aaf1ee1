use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::units::constants::{GRAMS_PER_KILOGRAM, GRAMS_PER_MILLIGRAM};

use Matching::{Phrase, Token};
use UnitFamily::*;

/// Physical or culinary category an alias belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnitFamily {
    Spoon,
    Cup,
    Glass,
    Pinch,
    Clove,
    Kilogram,
    Gram,
    Milligram,
    Liter,
    Milliliter,
}

impl UnitFamily {
    /// True for the family that is already expressed in grams.
    #[inline]
    pub fn is_canonical(self) -> bool {
        self == UnitFamily::Gram
    }

    pub fn name(self) -> &'static str {
        match self {
            UnitFamily::Spoon => "spoon",
            UnitFamily::Cup => "cup",
            UnitFamily::Glass => "glass",
            UnitFamily::Pinch => "pinch",
            UnitFamily::Clove => "clove",
            UnitFamily::Kilogram => "kilogram",
            UnitFamily::Gram => "gram",
            UnitFamily::Milligram => "milligram",
            UnitFamily::Liter => "liter",
            UnitFamily::Milliliter => "milliliter",
        }
    }
}

/// How an alias is compared against a normalized unit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Matching {
    /// Alias may appear anywhere in the unit string.
    Phrase,
    /// Alias must equal one whole alphanumeric token of the unit string.
    Token,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AliasEntry {
    pub alias: &'static str,
    pub grams_per_unit: f64,
    pub family: UnitFamily,
    pub matching: Matching,
}

impl AliasEntry {
    /// Length in characters, used to order the table.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.alias.chars().count()
    }

    /// Check this alias against an already-normalized unit string.
    pub fn matches(&self, normalized_unit: &str) -> bool {
        match self.matching {
            // A phrase must start a word: "grama" may not match inside
            // "miligramas" or "kilogramas".
            Matching::Phrase => normalized_unit.match_indices(self.alias).any(|(start, _)| {
                normalized_unit[..start]
                    .chars()
                    .next_back()
                    .is_none_or(|c| !c.is_alphanumeric())
            }),
            Matching::Token => normalized_unit
                .split(|c: char| !c.is_alphanumeric())
                .any(|token| token == self.alias),
        }
    }
}

// Volume units use fixed culinary approximations (density of water for
// liters and milliliters, typical kitchen fill for spoons and cups).
#[rustfmt::skip]
const RAW_ALIASES: &[(&str, f64, UnitFamily, Matching)] = &[
    // Spoons
    ("colher (sopa)", 15.0, Spoon, Phrase),
    ("colher de sopa", 15.0, Spoon, Phrase),
    ("colher sopa", 15.0, Spoon, Phrase),
    ("colheres (sopa)", 15.0, Spoon, Phrase),
    ("colheres de sopa", 15.0, Spoon, Phrase),
    ("colheres sopa", 15.0, Spoon, Phrase),
    ("colher (sobremesa)", 10.0, Spoon, Phrase),
    ("colher de sobremesa", 10.0, Spoon, Phrase),
    ("colher sobremesa", 10.0, Spoon, Phrase),
    ("colheres (sobremesa)", 10.0, Spoon, Phrase),
    ("colheres de sobremesa", 10.0, Spoon, Phrase),
    ("colheres sobremesa", 10.0, Spoon, Phrase),
    ("colher (chá)", 5.0, Spoon, Phrase),
    ("colher (cha)", 5.0, Spoon, Phrase),
    ("colher de chá", 5.0, Spoon, Phrase),
    ("colher de cha", 5.0, Spoon, Phrase),
    ("colher chá", 5.0, Spoon, Phrase),
    ("colher cha", 5.0, Spoon, Phrase),
    ("colheres (chá)", 5.0, Spoon, Phrase),
    ("colheres (cha)", 5.0, Spoon, Phrase),
    ("colheres de chá", 5.0, Spoon, Phrase),
    ("colheres de cha", 5.0, Spoon, Phrase),
    ("colheres chá", 5.0, Spoon, Phrase),
    ("colheres cha", 5.0, Spoon, Phrase),
    ("colher (café)", 2.0, Spoon, Phrase),
    ("colher (cafe)", 2.0, Spoon, Phrase),
    ("colher de café", 2.0, Spoon, Phrase),
    ("colher de cafe", 2.0, Spoon, Phrase),
    ("colher café", 2.0, Spoon, Phrase),
    ("colher cafe", 2.0, Spoon, Phrase),
    ("colheres (café)", 2.0, Spoon, Phrase),
    ("colheres (cafe)", 2.0, Spoon, Phrase),
    ("colheres de café", 2.0, Spoon, Phrase),
    ("colheres de cafe", 2.0, Spoon, Phrase),
    ("colheres café", 2.0, Spoon, Phrase),
    ("colheres cafe", 2.0, Spoon, Phrase),
    // Cups and glasses
    ("xícara", 160.0, Cup, Phrase),
    ("xicara", 160.0, Cup, Phrase),
    ("copo americano", 190.0, Glass, Phrase),
    ("copo", 200.0, Glass, Phrase),
    // Pinches and cloves
    ("pitada", 1.0, Pinch, Phrase),
    ("dente", 5.0, Clove, Phrase),
    // Mass
    ("quilograma", GRAMS_PER_KILOGRAM, Kilogram, Phrase),
    ("quilo", GRAMS_PER_KILOGRAM, Kilogram, Phrase),
    ("kilograma", GRAMS_PER_KILOGRAM, Kilogram, Phrase),
    ("kilo", GRAMS_PER_KILOGRAM, Kilogram, Phrase),
    ("kilos", GRAMS_PER_KILOGRAM, Kilogram, Token),
    ("kg", GRAMS_PER_KILOGRAM, Kilogram, Token),
    ("kgs", GRAMS_PER_KILOGRAM, Kilogram, Token),
    ("grama", 1.0, Gram, Phrase),
    ("gr", 1.0, Gram, Token),
    ("grs", 1.0, Gram, Token),
    ("g", 1.0, Gram, Token),
    ("miligrama", GRAMS_PER_MILLIGRAM, Milligram, Phrase),
    ("mg", GRAMS_PER_MILLIGRAM, Milligram, Token),
    // Volume
    ("litro", GRAMS_PER_KILOGRAM, Liter, Phrase),
    ("lt", GRAMS_PER_KILOGRAM, Liter, Token),
    ("lts", GRAMS_PER_KILOGRAM, Liter, Token),
    ("l", GRAMS_PER_KILOGRAM, Liter, Token),
    ("mililitro", 1.0, Milliliter, Phrase),
    ("ml", 1.0, Milliliter, Token),
];

/// All aliases, sorted by descending length so the most specific alias wins.
pub static ALIAS_TABLE: LazyLock<Vec<AliasEntry>> = LazyLock::new(|| {
    let mut table: Vec<AliasEntry> = RAW_ALIASES
        .iter()
        .map(|&(alias, grams_per_unit, family, matching)| AliasEntry {
            alias,
            grams_per_unit,
            family,
            matching,
        })
        .collect();
    table.sort_by(|a, b| b.char_len().cmp(&a.char_len()).then_with(|| a.alias.cmp(b.alias)));
    table
});

static EXACT_INDEX: LazyLock<HashMap<&'static str, &'static AliasEntry>> =
    LazyLock::new(|| ALIAS_TABLE.iter().map(|e| (e.alias, e)).collect());

/// The immutable alias table, longest aliases first.
pub fn alias_table() -> &'static [AliasEntry] {
    &ALIAS_TABLE
}

/// Look up an alias by exact (already normalized) name.
pub fn find_exact(normalized_unit: &str) -> Option<&'static AliasEntry> {
    EXACT_INDEX.get(normalized_unit).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted_by_descending_length() {
        let table = alias_table();
        for pair in table.windows(2) {
            assert!(pair[0].char_len() >= pair[1].char_len());
        }
    }

    #[test]
    fn test_no_contradictory_duplicates() {
        let mut seen: HashMap<&str, f64> = HashMap::new();
        for entry in alias_table() {
            if let Some(previous) = seen.insert(entry.alias, entry.grams_per_unit) {
                assert_eq!(previous, entry.grams_per_unit, "alias {}", entry.alias);
            }
        }
    }

    #[test]
    fn test_aliases_are_normalized() {
        for entry in alias_table() {
            assert_eq!(entry.alias, entry.alias.trim());
            assert_eq!(entry.alias, entry.alias.to_lowercase());
        }
    }

    #[test]
    fn test_token_matching_does_not_match_inside_words() {
        let liter = find_exact("l").unwrap();
        assert!(liter.matches("l"));
        assert!(liter.matches("1 l"));
        assert!(!liter.matches("colher"));

        let gram = find_exact("g").unwrap();
        assert!(!gram.matches("kg"));
        assert!(!gram.matches("pitada grande"));
    }

    #[test]
    fn test_phrase_must_start_a_word() {
        let gram = find_exact("grama").unwrap();
        assert!(gram.matches("gramas"));
        assert!(gram.matches("200 gramas"));
        assert!(!gram.matches("miligramas"));
        assert!(!gram.matches("kilogramas"));
    }

    #[test]
    fn test_phrase_matching() {
        let cup = find_exact("xícara").unwrap();
        assert!(cup.matches("xícara (chá)"));
        assert!(cup.matches("meia xícara"));
    }
}
