//! Extraction of schema.org Recipe records from the JSON-LD embedded in web
//! pages.
//!
//! The caller fetches the page; this crate locates the
//! `<script type="application/ld+json">` blocks, finds the first node typed
//! `Recipe` and flattens it into a [`CanonicalRecipe`].
//!
//! ```
//! use cookbook_import::{extract_recipe, Extraction};
//!
//! let html = r#"<script type="application/ld+json">
//!     {"@type": "Recipe", "name": "Soup", "recipeIngredient": ["Salt", "Water"]}
//! </script>"#;
//!
//! match extract_recipe(html) {
//!     Extraction::Found(recipe) => assert_eq!(recipe.ingredients, ["Salt", "Water"]),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod model;

pub use crate::config::{load_config, ImportConfig, NormalizerConfig, ResolverConfig};
pub use crate::error::ImportError;
pub use crate::extractors::JsonLdExtractor;
pub use crate::model::{CanonicalRecipe, Extraction};

/// Extract a recipe from a page using the default configuration.
pub fn extract_recipe(html: &str) -> Extraction {
    extract_recipe_with_config(html, &ImportConfig::default())
}

/// Extract a recipe from a page using an explicit configuration.
pub fn extract_recipe_with_config(html: &str, config: &ImportConfig) -> Extraction {
    JsonLdExtractor::new(config).extract(html)
}
