mod fields;
mod locator;
mod normalizer;
mod resolver;
mod sanitize;

pub use fields::Field;
pub use locator::{RawBlock, ScriptLocator};
pub use normalizer::FieldNormalizer;
pub use resolver::{GraphResolver, RecipeNode};
pub use sanitize::sanitize_json;

use log::{debug, warn};
use scraper::Html;

use crate::config::ImportConfig;
use crate::model::{CanonicalRecipe, Extraction};

/// Extracts a schema.org Recipe from the JSON-LD blocks of a page.
///
/// Blocks are tried in document order and the first one holding a Recipe
/// node wins. A block that is not valid JSON is logged and skipped; it only
/// becomes the outcome when no later block matches.
pub struct JsonLdExtractor<'c> {
    config: &'c ImportConfig,
}

impl<'c> JsonLdExtractor<'c> {
    pub fn new(config: &'c ImportConfig) -> Self {
        Self { config }
    }

    pub fn extract(&self, html: &str) -> Extraction {
        let document = Html::parse_document(html);
        self.extract_document(&document)
    }

    pub fn extract_document(&self, document: &Html) -> Extraction {
        let resolver = GraphResolver::new(&self.config.resolver);
        let mut first_malformed = None;

        for block in ScriptLocator::new(document).blocks() {
            debug!(
                "JsonLdExtractor: Script {} raw content: {}",
                block.index, block.text
            );

            let json_ld = match resolver.parse(&block) {
                Ok(json_ld) => json_ld,
                Err(e) => {
                    warn!(
                        "JsonLdExtractor: Failed to parse JSON-LD {}: {}",
                        block.index, e
                    );
                    first_malformed.get_or_insert(block.index);
                    continue;
                }
            };

            match resolver.find_recipe(&json_ld) {
                Some(node) => {
                    debug!("JsonLdExtractor: Found recipe in script {}", block.index);
                    return Extraction::Found(self.normalize(node));
                }
                None => debug!("JsonLdExtractor: No recipe found in script {}", block.index),
            }
        }

        match first_malformed {
            Some(index) => Extraction::MalformedJson(index),
            None => {
                debug!("JsonLdExtractor: No valid recipe found in any JSON-LD script");
                Extraction::NotFound
            }
        }
    }

    fn normalize(&self, node: RecipeNode<'_>) -> CanonicalRecipe {
        FieldNormalizer::new(&self.config.normalizer).normalize(node)
    }
}
