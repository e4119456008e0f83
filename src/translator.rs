use crate::{
    cache::{LabelCache, SharedCache},
    lexicon::Lexicon,
    rule::{self, DEFAULT_RULES, PatternRule},
    tokenize,
};
use std::{
    borrow::Cow,
    sync::{Arc, LazyLock},
};
use tracing::{debug, trace};

/// Identifier → Japanese label translator.
///
/// Resolution order: curated table, cache, first matching pattern rule,
/// token-by-token fallback. Every input yields a label; the empty string means
/// nothing was recognised.
#[derive(Clone)]
pub struct LabelTranslator {
    lexicon: Lexicon,
    rules: &'static [PatternRule],
    cache: Arc<dyn LabelCache>,
}

impl Default for LabelTranslator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for LabelTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelTranslator")
            .field("lexicon", &self.lexicon)
            .field("rules", &self.rules().len())
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl LabelTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> LabelTranslatorBuilder {
        LabelTranslatorBuilder::default()
    }

    pub fn translate(&self, identifier: &str) -> Cow<'static, str> {
        if let Some(label) = self.lexicon.label(identifier) {
            return Cow::Borrowed(label);
        }
        if let Some(label) = self.cache.get(identifier) {
            trace!(identifier, "label cache hit");
            return Cow::Owned(label);
        }
        let label = self.derive(identifier);
        Cow::Owned(self.cache.insert(identifier.to_owned(), label))
    }

    /// Rule or tokenizer label, bypassing both the curated table and the cache.
    pub fn derive(&self, identifier: &str) -> String {
        if let Some((rule, rest)) = rule::find(self.rules, identifier) {
            let label = rule.build(&self.lexicon, rest);
            if !label.is_empty() {
                debug!(identifier, rule = rule.prefix, "pattern rule applied");
                return label;
            }
        }
        let label = tokenize::convert(&self.lexicon, identifier);
        debug!(identifier, blank = label.is_empty(), "tokenizer fallback");
        label
    }

    #[inline]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[inline]
    pub fn rules(&self) -> &'static [PatternRule] {
        self.rules
    }

    /// Number of derived labels remembered so far.
    #[inline]
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

pub struct LabelTranslatorBuilder {
    lexicon: Lexicon,
    rules: &'static [PatternRule],
    cache: Option<Arc<dyn LabelCache>>,
}

impl Default for LabelTranslatorBuilder {
    fn default() -> Self {
        Self {
            lexicon: Lexicon::default(),
            rules: DEFAULT_RULES,
            cache: None,
        }
    }
}

impl LabelTranslatorBuilder {
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn rules(mut self, rules: &'static [PatternRule]) -> Self {
        self.rules = rules;
        self
    }

    /// Use `cache` instead of a private `SharedCache`. Pass a clone of a
    /// `SharedCache` (or an `Arc`) to share one cache between translators.
    pub fn cache<C: LabelCache + 'static>(mut self, cache: C) -> Self {
        self.cache = Some(Arc::new(cache));
        self
    }

    pub fn build(self) -> LabelTranslator {
        let cache: Arc<dyn LabelCache> = match self.cache {
            Some(cache) => cache,
            None => Arc::new(SharedCache::new()),
        };
        LabelTranslator {
            lexicon: self.lexicon,
            rules: self.rules,
            cache,
        }
    }
}

static DEFAULT_TRANSLATOR: LazyLock<LabelTranslator> = LazyLock::new(LabelTranslator::default);

/// Process-wide translator with the built-in lexicon and rules.
pub fn default_translator() -> &'static LabelTranslator {
    &DEFAULT_TRANSLATOR
}

/// Translate with the process-wide translator.
#[inline]
pub fn translate(identifier: &str) -> Cow<'static, str> {
    DEFAULT_TRANSLATOR.translate(identifier)
}
