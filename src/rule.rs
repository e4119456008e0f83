//! Compositional rules for identifiers the curated table does not list.
//!
//! A rule recognises an identifier by its leading English phrase
//! (`NumberOf…`, `IncreaseDecreaseIn…`) and wraps the translated remainder in
//! a fixed Japanese affix. Rules are tried in table order and the first one
//! whose prefix matches wins, so more specific prefixes that share a head with
//! a later rule must come first.
use crate::{lexicon::Lexicon, tokenize};

/// Where the fixed Japanese text goes relative to the translated remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affix {
    Suffix(&'static str),
    Prefix(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    pub prefix: &'static str,
    pub affix: Affix,
}

impl PatternRule {
    pub const fn suffix(prefix: &'static str, suffix: &'static str) -> Self {
        Self {
            prefix,
            affix: Affix::Suffix(suffix),
        }
    }

    pub const fn prefix(prefix: &'static str, label_prefix: &'static str) -> Self {
        Self {
            prefix,
            affix: Affix::Prefix(label_prefix),
        }
    }

    /// The remainder after the prefix, if this rule applies.
    ///
    /// The remainder must be non-empty and free of line terminators.
    #[inline]
    pub fn matches<'a>(&self, identifier: &'a str) -> Option<&'a str> {
        identifier
            .strip_prefix(self.prefix)
            .filter(|rest| !rest.is_empty() && !rest.contains(is_line_terminator))
    }

    /// Label for an identifier whose remainder is `rest`.
    pub fn build(&self, lexicon: &Lexicon, rest: &str) -> String {
        let inner = tokenize::convert(lexicon, rest);
        match self.affix {
            Affix::Suffix(s) => inner + s,
            Affix::Prefix(p) => {
                let mut out = String::with_capacity(p.len() + inner.len());
                out.push_str(p);
                out.push_str(&inner);
                out
            }
        }
    }
}

#[inline(always)]
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// First rule in `rules` that applies to `identifier`, with the remainder.
pub fn find<'r, 'a>(
    rules: &'r [PatternRule],
    identifier: &'a str,
) -> Option<(&'r PatternRule, &'a str)> {
    rules
        .iter()
        .find_map(|rule| rule.matches(identifier).map(|rest| (rule, rest)))
}

pub static DEFAULT_RULES: &[PatternRule] = &[
    PatternRule::suffix("NumberOf", "数"),
    PatternRule::suffix("TotalNumberOf", "総数"),
    PatternRule::suffix("TotalAmountOf", "総額"),
    PatternRule::suffix("TotalSalesAmountFor", "売却額"),
    PatternRule::suffix("TotalAcquisitionCostFor", "取得額"),
    PatternRule::suffix("PercentageOf", "構成比"),
    PatternRule::suffix("RatioOf", "比率"),
    PatternRule::suffix("RateOf", "率"),
    PatternRule::suffix("IncreaseDecreaseIn", "の増減"),
    PatternRule::suffix("DecreaseIncreaseIn", "の増減"),
    PatternRule::suffix("IncreaseIn", "の増加"),
    PatternRule::suffix("DecreaseIn", "の減少"),
    PatternRule::suffix("ProvisionFor", "引当金"),
    PatternRule::suffix("ReserveFor", "準備金"),
    PatternRule::suffix("ReserveFundFor", "積立金"),
    PatternRule::suffix("ProvisionOf", "引当金繰入"),
    PatternRule::suffix("LossOn", "損失"),
    PatternRule::suffix("GainOn", "益"),
    PatternRule::suffix("LossGainOn", "損益"),
    PatternRule::suffix("ChangeOf", "の変更"),
    PatternRule::suffix("ChangeIn", "の変動"),
    PatternRule::suffix("NetIncreaseDecreaseIn", "純増減"),
    PatternRule::suffix("CashFlowsFromUsedIn", "によるキャッシュフロー"),
    PatternRule::prefix("CashAndCashEquivalents", "現金及び現金同等物"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_needs_a_remainder() {
        let rule = PatternRule::suffix("NumberOf", "数");
        assert_eq!(rule.matches("NumberOfEmployees"), Some("Employees"));
        assert_eq!(rule.matches("NumberOf"), None);
        assert_eq!(rule.matches("TotalNumberOfShares"), None);
    }

    #[test]
    fn line_terminators_block_a_match() {
        let rule = PatternRule::suffix("LossOn", "損失");
        assert_eq!(rule.matches("LossOnSale\nX"), None);
        assert_eq!(rule.matches("LossOnSale\u{2028}"), None);
        assert_eq!(rule.matches("LossOnSale X"), Some("Sale X"));
    }

    #[test]
    fn first_matching_rule_wins() {
        let (rule, rest) = find(DEFAULT_RULES, "IncreaseDecreaseInInventories").unwrap();
        assert_eq!(rule.prefix, "IncreaseDecreaseIn");
        assert_eq!(rest, "Inventories");

        let (rule, _) = find(DEFAULT_RULES, "IncreaseInShortTermLoans").unwrap();
        assert_eq!(rule.prefix, "IncreaseIn");
    }

    #[test]
    fn no_rule_for_plain_words() {
        assert!(find(DEFAULT_RULES, "AverageAnnualSalary").is_none());
    }

    #[test]
    fn build_places_affix() {
        let lex = Lexicon::default();
        let suffix = PatternRule::suffix("ProvisionFor", "引当金");
        assert_eq!(suffix.build(&lex, "Bonuses"), "賞与引当金");

        let prefix = PatternRule::prefix("CashAndCashEquivalents", "現金及び現金同等物");
        assert_eq!(prefix.build(&lex, "EndOfPeriod"), "現金及び現金同等物期間");
    }

    #[test]
    fn remainder_skips_the_curated_table() {
        // `NetAssets` is curated as 純資産合計, but inside a rule it is tokenized.
        let lex = Lexicon::default();
        assert_eq!(lex.label("NetAssets"), Some("純資産合計"));
        let rule = PatternRule::suffix("ChangeIn", "の変動");
        assert_eq!(rule.build(&lex, "NetAssets"), "純資産の変動");
    }
}
