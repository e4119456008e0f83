//! Coverage report for a set of line-item identifiers.
//!
//! Answers the questions the label tables get maintained by: which headers
//! have no curated label, which English words are missing from the token
//! dictionary, which labels come out blank or still read as English, and
//! which labels are shared by several identifiers.
use crate::{header::is_metadata, tokenize, translator::LabelTranslator};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub total: usize,
    pub missing: Vec<String>,
    pub missing_tokens: Vec<String>,
    pub blank: Vec<String>,
    pub english: Vec<String>,
    pub duplicate_labels: BTreeMap<String, Vec<String>>,
}

impl AuditReport {
    /// Every identifier has a Japanese label.
    pub fn is_clean(&self) -> bool {
        self.blank.is_empty() && self.english.is_empty()
    }
}

/// More than half of the non-space characters are ASCII letters.
pub fn reads_as_english(label: &str) -> bool {
    let (letters, total) = label
        .chars()
        .filter(|c| *c != ' ')
        .fold((0usize, 0usize), |(letters, total), c| {
            (letters + usize::from(c.is_ascii_alphabetic()), total + 1)
        });
    total > 0 && letters * 2 > total
}

pub fn audit<I, S>(translator: &LabelTranslator, keys: I) -> AuditReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let keys: BTreeSet<String> = keys
        .into_iter()
        .map(|k| k.as_ref().to_owned())
        .filter(|k| !is_metadata(k))
        .collect();

    let lexicon = translator.lexicon();
    let mut report = AuditReport {
        total: keys.len(),
        ..AuditReport::default()
    };
    let mut missing_tokens = BTreeSet::new();
    let mut by_label: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for key in &keys {
        if !lexicon.has_label(key) {
            report.missing.push(key.clone());
            for token in tokenize::split(key) {
                let lowered = token.to_ascii_lowercase();
                if lexicon.fragment(&lowered).is_none() {
                    missing_tokens.insert(token.to_owned());
                }
            }
        }

        let label = translator.translate(key);
        if label.is_empty() {
            report.blank.push(key.clone());
            continue;
        }
        if reads_as_english(&label) {
            report.english.push(key.clone());
        }
        by_label.entry(label.into_owned()).or_default().push(key.clone());
    }

    report.missing_tokens = missing_tokens.into_iter().collect();
    report.duplicate_labels = by_label
        .into_iter()
        .filter(|(_, keys)| keys.len() > 1)
        .collect();
    report
}
