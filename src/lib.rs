pub mod audit;
pub mod cache;
pub mod header;
pub mod lexicon;
pub mod logging;
pub mod rule;
pub mod statement;
pub mod tokenize;
pub mod translator;

pub use audit::{AuditReport, audit};
pub use cache::{LabelCache, NoCache, SharedCache};
pub use header::{Header, HeaderError, LabeledItem, METADATA_COLUMNS, label_items, union_line_items};
pub use lexicon::Lexicon;
pub use rule::{Affix, DEFAULT_RULES, PatternRule};
pub use statement::{Company, Statement, StatementError};
pub use translator::{LabelTranslator, LabelTranslatorBuilder, default_translator, translate};

#[cfg(test)]
pub(crate) mod testing;
