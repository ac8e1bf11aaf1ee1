use strsim::jaro_winkler;

use crate::units::aliases::{alias_table, find_exact, AliasEntry, Matching};
use crate::units::constants::SUGGESTION_MIN_SIMILARITY;

/// Outcome of resolving a free-text unit to grams.
///
/// Keeps "already in grams" and "unknown unit" apart instead of passing
/// both through as the bare quantity.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Recognized {
        grams: f64,
        entry: &'static AliasEntry,
    },
    Unrecognized {
        quantity: f64,
        unit: String,
    },
}

impl Resolution {
    /// Grams for recognized units, the untouched quantity otherwise.
    pub fn grams_or_quantity(&self) -> f64 {
        match self {
            Resolution::Recognized { grams, .. } => *grams,
            Resolution::Unrecognized { quantity, .. } => *quantity,
        }
    }

    #[inline]
    pub fn is_recognized(&self) -> bool {
        matches!(self, Resolution::Recognized { .. })
    }

    pub fn entry(&self) -> Option<&'static AliasEntry> {
        match self {
            Resolution::Recognized { entry, .. } => Some(*entry),
            Resolution::Unrecognized { .. } => None,
        }
    }
}

/// Lowercase, trim and collapse inner whitespace.
pub fn normalize_unit(unit: &str) -> String {
    unit.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Find the alias for a unit string.
///
/// An exact alias wins; otherwise the longest alias that matches the unit
/// string (phrase containment or whole-token equality) is taken.
pub fn match_alias(unit: &str) -> Option<&'static AliasEntry> {
    let normalized = normalize_unit(unit);
    if normalized.is_empty() {
        return None;
    }

    // Exact hits skip the scan; the table is sorted longest-first so the
    // first partial hit is also the most specific one.
    find_exact(&normalized).or_else(|| alias_table().iter().find(|e| e.matches(&normalized)))
}

/// Resolve a quantity expressed in `unit` to grams.
pub fn resolve(quantity: f64, unit: &str) -> Resolution {
    match match_alias(unit) {
        Some(entry) => {
            let grams = quantity * entry.grams_per_unit;
            tracing::debug!(unit, alias = entry.alias, quantity, grams, "resolved unit");
            Resolution::Recognized { grams, entry }
        }
        None => {
            tracing::debug!(unit, quantity, "unrecognized unit, passing quantity through");
            Resolution::Unrecognized {
                quantity,
                unit: unit.to_string(),
            }
        }
    }
}

/// Grams equivalent of `quantity` in `unit`.
///
/// Unknown units return the quantity unchanged; use [`resolve`] to tell
/// the two cases apart.
pub fn resolve_grams(quantity: f64, unit: &str) -> f64 {
    resolve(quantity, unit).grams_or_quantity()
}

/// Closest phrase alias to an unrecognized unit, for "did you mean" hints.
pub fn suggest_unit(unit: &str) -> Option<&'static str> {
    let normalized = normalize_unit(unit);
    if normalized.is_empty() {
        return None;
    }

    alias_table()
        .iter()
        .filter(|e| e.matching == Matching::Phrase)
        .map(|e| (e.alias, jaro_winkler(&normalized, e.alias)))
        .filter(|(_, score)| *score >= SUGGESTION_MIN_SIMILARITY)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(alias, _)| alias)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::aliases::UnitFamily;

    #[test]
    fn test_normalize_unit() {
        assert_eq!(normalize_unit("  Colher   (Chá) "), "colher (chá)");
        assert_eq!(normalize_unit(""), "");
    }

    #[test]
    fn test_known_conversions() {
        assert_eq!(resolve_grams(1.0, "colher (chá)"), 5.0);
        assert_eq!(resolve_grams(2.0, "colher (sopa)"), 30.0);
        assert_eq!(resolve_grams(1.0, "xícara"), 160.0);
        assert_eq!(resolve_grams(1.0, "Quilogramas"), 1000.0);
        assert_eq!(resolve_grams(250.0, "ml"), 250.0);
    }

    #[test]
    fn test_longest_alias_wins() {
        // "mililitros" contains "litro"; the longer alias must be chosen.
        let entry = match_alias("Mililitros").unwrap();
        assert_eq!(entry.family, UnitFamily::Milliliter);
        assert_eq!(resolve_grams(2.0, "mililitros"), 2.0);

        let entry = match_alias("copo americano cheio").unwrap();
        assert_eq!(entry.alias, "copo americano");
    }

    #[test]
    fn test_gram_family_is_identity() {
        for unit in ["Gramas", "grama", "g", "gr", " GRAMAS "] {
            assert_eq!(resolve_grams(123.5, unit), 123.5, "unit {unit}");
        }
    }

    #[test]
    fn test_unrecognized_is_tagged() {
        let resolution = resolve(3.0, "punhado");
        assert!(!resolution.is_recognized());
        assert_eq!(resolution.grams_or_quantity(), 3.0);
        assert!(resolution.entry().is_none());
    }

    #[test]
    fn test_empty_unit_is_unrecognized() {
        assert!(match_alias("   ").is_none());
        assert_eq!(resolve_grams(7.0, ""), 7.0);
    }

    #[test]
    fn test_suggest_unit() {
        assert_eq!(suggest_unit("xicra"), Some("xicara"));
        assert_eq!(suggest_unit("zzzz"), None);
    }
}
