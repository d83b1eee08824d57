use log::debug;
use serde_json::{Map, Value};

use super::fields::has_type;
use super::locator::RawBlock;
use super::sanitize::sanitize_json;
use crate::config::ResolverConfig;

/// A JSON-LD node whose `@type` names `Recipe`, borrowed from the parsed block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeNode<'a>(&'a Map<String, Value>);

impl<'a> RecipeNode<'a> {
    pub fn properties(&self) -> &'a Map<String, Value> {
        self.0
    }
}

/// Parses JSON-LD blocks and searches them for the Recipe node.
pub struct GraphResolver<'c> {
    config: &'c ResolverConfig,
}

impl<'c> GraphResolver<'c> {
    pub fn new(config: &'c ResolverConfig) -> Self {
        Self { config }
    }

    /// Parse a block, retrying once on the repaired text when lenient parsing
    /// is enabled. The returned error is always the one for the original text.
    pub fn parse(&self, block: &RawBlock) -> Result<Value, serde_json::Error> {
        match serde_json::from_str::<Value>(&block.text) {
            Ok(value) => Ok(value),
            Err(e) if self.config.lenient_json => {
                debug!(
                    "JsonLdExtractor: Block {} failed to parse ({}), retrying sanitized",
                    block.index, e
                );
                serde_json::from_str::<Value>(&sanitize_json(&block.text)).map_err(|_| e)
            }
            Err(e) => Err(e),
        }
    }

    /// Depth-first search for the first Recipe-typed node.
    ///
    /// Objects are tested before their `@graph` is entered, and arrays and
    /// graphs are walked in source order, so the first Recipe in document
    /// order wins. Other object properties are not searched.
    pub fn find_recipe<'v>(&self, value: &'v Value) -> Option<RecipeNode<'v>> {
        match value {
            Value::Object(node) => {
                if has_type(node, "Recipe", self.config.case_insensitive_type) {
                    return Some(RecipeNode(node));
                }
                match node.get("@graph") {
                    Some(Value::Array(items)) => self.find_in(items),
                    Some(lone @ Value::Object(_)) => self.find_recipe(lone),
                    _ => None,
                }
            }
            Value::Array(items) => self.find_in(items),
            _ => None,
        }
    }

    fn find_in<'v>(&self, items: &'v [Value]) -> Option<RecipeNode<'v>> {
        items.iter().find_map(|item| self.find_recipe(item))
    }
}
