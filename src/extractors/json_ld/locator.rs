use log::debug;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

const JSON_LD_MIME: &str = "application/ld+json";

static SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script[type]").expect("Failed to parse script selector - this is a bug")
});

/// Text content of one `<script type="application/ld+json">` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// Position among the page's JSON-LD scripts, counting skipped empty ones.
    pub index: usize,
    pub text: String,
}

/// Finds the JSON-LD script blocks of a parsed page.
///
/// [`ScriptLocator::blocks`] can be called any number of times; each call
/// walks the document again from the top.
#[derive(Clone, Copy)]
pub struct ScriptLocator<'a> {
    document: &'a Html,
}

impl<'a> ScriptLocator<'a> {
    pub fn new(document: &'a Html) -> Self {
        Self { document }
    }

    /// Lazily yield each non-blank JSON-LD block in document order.
    pub fn blocks(&self) -> impl Iterator<Item = RawBlock> + 'a {
        self.document
            .select(&SCRIPT_SELECTOR)
            .filter(is_json_ld)
            .enumerate()
            .filter_map(|(index, script)| {
                let text: String = script.text().collect();
                if text.trim().is_empty() {
                    debug!("JsonLdExtractor: Skipping empty script block {}", index);
                    None
                } else {
                    Some(RawBlock { index, text })
                }
            })
    }
}

fn is_json_ld(script: &ElementRef<'_>) -> bool {
    script
        .value()
        .attr("type")
        .is_some_and(|kind| kind.trim().eq_ignore_ascii_case(JSON_LD_MIME))
}
