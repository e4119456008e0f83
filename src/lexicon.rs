pub mod labels;
pub mod tokens;

use phf::Map;

pub type Table = Map<&'static str, &'static str>;

/// The pair of dictionaries a translator reads from.
///
/// Both tables are compile-time `phf` maps, so a `Lexicon` is two pointers
/// and is passed around by value.
#[derive(Clone, Copy)]
pub struct Lexicon {
    labels: &'static Table,
    tokens: &'static Table,
}

impl Default for Lexicon {
    #[inline(always)]
    fn default() -> Self {
        Self::ELECTRIC_POWER
    }
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("labels", &self.label_count())
            .field("tokens", &self.token_count())
            .finish()
    }
}

impl Lexicon {
    /// Built-in tables covering the TEPCO, Chubu and JERA filings.
    pub const ELECTRIC_POWER: Lexicon = Lexicon {
        labels: &labels::LABELS,
        tokens: &tokens::TOKENS,
    };

    /// Token keys must already be lower-case ASCII.
    #[inline(always)]
    pub const fn new(labels: &'static Table, tokens: &'static Table) -> Self {
        Self { labels, tokens }
    }

    /// Curated label for `identifier`. Empty entries count as absent.
    #[inline]
    pub fn label(&self, identifier: &str) -> Option<&'static str> {
        self.labels
            .get(identifier)
            .copied()
            .filter(|label| !label.is_empty())
    }

    #[inline]
    pub fn has_label(&self, identifier: &str) -> bool {
        self.label(identifier).is_some()
    }

    /// Fragment for an already lower-cased token. `Some("")` means the token is
    /// known and dropped; `None` means it is unknown.
    #[inline]
    pub fn fragment(&self, lowered: &str) -> Option<&'static str> {
        self.tokens.get(lowered).copied()
    }

    pub fn labels(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.labels.entries().map(|(k, v)| (*k, *v))
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_keys_are_lowercase_ascii() {
        for key in tokens::TOKENS.keys() {
            assert!(
                key.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()),
                "token key `{key}` is not lower-case ASCII"
            );
        }
    }

    #[test]
    fn labels_are_never_empty() {
        for (key, label) in Lexicon::ELECTRIC_POWER.labels() {
            assert!(!label.is_empty(), "`{key}` maps to an empty label");
        }
    }

    #[test]
    fn metadata_columns_have_labels() {
        let lex = Lexicon::default();
        assert_eq!(lex.label("fiscal_year"), Some("会計年度"));
        assert_eq!(lex.label("date"), Some("決算日"));
        assert_eq!(lex.label("company_code"), Some("EDINETコード"));
    }

    #[test]
    fn dropped_fragments_are_known() {
        let lex = Lexicon::default();
        assert_eq!(lex.fragment("of"), Some(""));
        assert_eq!(lex.fragment("and"), Some(""));
        assert_eq!(lex.fragment("xyz"), None);
    }

    #[test]
    fn built_in_table_sizes() {
        let lex = Lexicon::ELECTRIC_POWER;
        assert_eq!(lex.label_count(), 311);
        assert_eq!(lex.token_count(), 407);
        assert_eq!(lex.labels().count(), lex.label_count());
        assert_eq!(format!("{lex:?}"), "Lexicon { labels: 311, tokens: 407 }");
    }

    #[test]
    fn mixed_case_source_key_is_stored_lowered() {
        assert_eq!(Lexicon::default().fragment("metricsof"), Some("指標"));
    }
}
