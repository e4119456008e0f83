//! tokenize.rs – split PascalCase XBRL identifiers into word-like tokens
//!
//! One left-to-right scan over ASCII bytes. At each position the first
//! alternative that applies wins:
//!
//! 1. an upper-case run that is followed by a digit, or whose last letter
//!    starts a capitalised word (`HD` in `HDCompany`, `TEPCO` in
//!    `TEPCOFukushima`, `ABC` in `ABC123`)
//! 2. an optional upper-case letter and a lower-case run (`Employees`, `of`)
//! 3. a digit run
//! 4. any other upper-case run (`CF` at the end of `OpeCF`)
//!
//! Everything else (`_`, punctuation, non-ASCII) separates tokens and is never
//! part of one. Tokens are sub-slices of the input, so scanning never allocates.
use crate::lexicon::Lexicon;
use smallvec::SmallVec;
use std::iter::FusedIterator;

/// Iterator over the tokens of one identifier.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    #[inline]
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

#[inline(always)]
fn run_end(bytes: &[u8], start: usize, class: fn(&u8) -> bool) -> usize {
    bytes[start..]
        .iter()
        .position(|b| !class(b))
        .map_or(bytes.len(), |offset| start + offset)
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        let start = self.pos + bytes[self.pos..].iter().position(u8::is_ascii_alphanumeric)?;

        let end = match bytes[start] {
            b'A'..=b'Z' => {
                let upper_end = run_end(bytes, start, u8::is_ascii_uppercase);
                let next = bytes.get(upper_end);
                match next {
                    Some(b) if b.is_ascii_digit() => upper_end,
                    Some(b) if b.is_ascii_lowercase() => {
                        if upper_end - start >= 2 {
                            // Acronym: leave the last capital for the next word.
                            upper_end - 1
                        } else {
                            run_end(bytes, upper_end, u8::is_ascii_lowercase)
                        }
                    }
                    _ => upper_end,
                }
            }
            b'a'..=b'z' => run_end(bytes, start, u8::is_ascii_lowercase),
            _ => run_end(bytes, start, u8::is_ascii_digit),
        };

        self.pos = end;
        // Both bounds sit next to ASCII bytes, so they are char boundaries.
        Some(&self.text[start..end])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.text.len() - self.pos))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Tokens of `identifier`. An identifier with no ASCII letter or digit at all
/// comes back as its own single token.
pub fn split(identifier: &str) -> SmallVec<[&str; 8]> {
    let mut tokens: SmallVec<[&str; 8]> = Tokens::new(identifier).collect();
    if tokens.is_empty() {
        tokens.push(identifier);
    }
    tokens
}

/// Translate every token through the token dictionary and concatenate the
/// fragments. Unknown tokens contribute nothing.
pub fn convert(lexicon: &Lexicon, identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() * 2);
    let mut lowered = String::with_capacity(32);
    for token in split(identifier) {
        lowered.clear();
        lowered.extend(token.chars().map(|c| c.to_ascii_lowercase()));
        if let Some(fragment) = lexicon.fragment(&lowered) {
            out.push_str(fragment);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<&str> {
        split(s).into_vec()
    }

    #[test]
    fn pascal_case_words() {
        assert_eq!(toks("NumberOfEmployees"), ["Number", "Of", "Employees"]);
    }

    #[test]
    fn acronym_before_capitalised_word() {
        assert_eq!(toks("HDCompany"), ["HD", "Company"]);
        assert_eq!(toks("TEPCOFukushima"), ["TEPCO", "Fukushima"]);
    }

    #[test]
    fn acronym_before_digit() {
        assert_eq!(toks("ABC123"), ["ABC", "123"]);
        assert_eq!(toks("X2024Total"), ["X", "2024", "Total"]);
    }

    #[test]
    fn trailing_acronym() {
        assert_eq!(toks("OpeCF"), ["Ope", "CF"]);
        assert_eq!(toks("CurrentAssetsCAELE"), ["Current", "Assets", "CAELE"]);
    }

    #[test]
    fn digits_and_lowercase() {
        assert_eq!(toks("UnknownXyzTag123"), ["Unknown", "Xyz", "Tag", "123"]);
        assert_eq!(toks("fiscal_year"), ["fiscal", "year"]);
    }

    #[test]
    fn separators_are_skipped() {
        assert_eq!(toks("a-b c__D"), ["a", "b", "c", "D"]);
        assert_eq!(toks("売上Net高"), ["Net"]);
    }

    #[test]
    fn no_token_falls_back_to_whole_input() {
        assert_eq!(toks(""), [""]);
        assert_eq!(toks("___"), ["___"]);
        assert_eq!(toks("売上高"), ["売上高"]);
    }

    #[test]
    fn convert_drops_unknown_and_empty_fragments() {
        let lex = Lexicon::default();
        assert_eq!(convert(&lex, "Employees"), "従業員");
        assert_eq!(convert(&lex, "OpeCF"), "営業CF");
        assert_eq!(convert(&lex, "FooBarBaz"), "");
        assert_eq!(convert(&lex, "AverageAnnualSalary"), "平均年間給与");
        assert_eq!(convert(&lex, "FemaleDirectorsAndOtherOfficers"), "女性取締役その他役員");
    }

    #[test]
    fn iterator_is_fused() {
        let mut it = Tokens::new("A");
        assert_eq!(it.next(), Some("A"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
