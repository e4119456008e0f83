//! Header rows of the extracted statement CSVs.
//!
//! Only the first non-blank row matters here: its columns are the line-item
//! identifiers that get translated. `fiscal_year`, `date` and `company_code`
//! describe the row itself and are never shown as line items.
use crate::{
    statement::{self, Company, Statement},
    translator::LabelTranslator,
};
use serde::Serialize;
use std::{
    borrow::Cow,
    collections::BTreeSet,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, warn};

pub const METADATA_COLUMNS: [&str; 3] = ["fiscal_year", "date", "company_code"];

const BOM: char = '\u{FEFF}';

#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("CSV data is empty")]
    Empty,
    #[error("CSV data has no data rows")]
    NoDataRows,
    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[inline]
pub fn is_metadata(column: &str) -> bool {
    METADATA_COLUMNS.contains(&column)
}

/// Lines of `text` without their `\n` / `\r\n` terminators.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    let mut start = 0;
    memchr::memchr_iter(b'\n', text.as_bytes())
        .map(Some)
        .chain(std::iter::once(None))
        .map(move |newline| {
            let end = newline.unwrap_or(text.len());
            let line = &text[start..end];
            start = end + 1;
            line.strip_suffix('\r').unwrap_or(line)
        })
}

/// Only whitespace or a byte-order mark.
#[inline]
fn is_blank(line: &str) -> bool {
    line.trim_matches(|c: char| c.is_whitespace() || c == BOM).is_empty()
}

#[inline]
pub fn first_line(text: &str) -> &str {
    lines(text).next().unwrap_or_default()
}

/// Split a header row into column names.
///
/// A leading BOM is dropped, names are trimmed and wrapping double quotes
/// are removed; quotes inside a name stay. Empty columns stay in place so
/// positions line up with data rows.
pub fn parse_header(line: &str) -> Vec<String> {
    line.strip_prefix(BOM)
        .unwrap_or(line)
        .split(',')
        .map(|column| column.trim().trim_matches('"').trim().to_owned())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    pub fn from_line(line: &str) -> Self {
        Self {
            columns: parse_header(line),
        }
    }

    /// Header of a whole CSV document: its first non-blank row. A row
    /// holding nothing but a BOM counts as blank.
    pub fn from_csv(text: &str) -> Result<Self, HeaderError> {
        lines(text)
            .find(|l| !is_blank(l))
            .map(Self::from_line)
            .ok_or(HeaderError::Empty)
    }

    /// Like [`Header::from_csv`], but also requires at least one data row.
    pub fn from_csv_with_rows(text: &str) -> Result<Self, HeaderError> {
        let mut rows = lines(text).filter(|l| !is_blank(l));
        let header = rows.next().map(Self::from_line).ok_or(HeaderError::Empty)?;
        if rows.next().is_none() {
            return Err(HeaderError::NoDataRows);
        }
        Ok(header)
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, HeaderError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| HeaderError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_csv(&text)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Non-empty, non-metadata columns in file order.
    pub fn line_items(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|c| !c.is_empty() && !is_metadata(c))
    }
}

/// Sorted union of the line items of several headers.
pub fn union_line_items<'a>(headers: impl IntoIterator<Item = &'a Header>) -> Vec<String> {
    headers
        .into_iter()
        .flat_map(Header::line_items)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// One row of a comparison table: identifier and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledItem {
    pub key: String,
    pub label: Cow<'static, str>,
}

pub fn label_items<I, S>(translator: &LabelTranslator, keys: I) -> Vec<LabeledItem>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keys.into_iter()
        .map(|key| {
            let key = key.as_ref();
            LabeledItem {
                key: key.to_owned(),
                label: translator.translate(key),
            }
        })
        .collect()
}

/// Header of one company's statement.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub company: Company,
    pub statement: Statement,
    pub header: Header,
}

/// Headers found under an extraction root, plus the sheets that were absent.
#[derive(Debug, Default)]
pub struct SheetScan {
    pub sheets: Vec<Sheet>,
    pub missing: Vec<PathBuf>,
}

impl SheetScan {
    pub fn headers(&self) -> impl Iterator<Item = &Header> {
        self.sheets.iter().map(|s| &s.header)
    }
}

/// Read every `root/{company}/{statement}.csv` that exists. Missing files are
/// reported, not fatal; unreadable or empty files are errors.
pub fn scan_root(root: impl AsRef<Path>) -> Result<SheetScan, HeaderError> {
    let root = root.as_ref();
    let mut scan = SheetScan::default();
    for (company, statement) in statement::all_sheets() {
        let path = statement::csv_path(root, company, statement);
        if !path.is_file() {
            warn!(path = %path.display(), "missing statement file");
            scan.missing.push(path);
            continue;
        }
        let header = Header::read(&path)?;
        debug!(%company, %statement, columns = header.columns().len(), "read header");
        scan.sheets.push(Sheet {
            company,
            statement,
            header,
        });
    }
    Ok(scan)
}
