use html_escape::decode_html_entities;
use serde_json::Value;

use super::fields::{has_type, Field};
use super::resolver::RecipeNode;
use crate::config::NormalizerConfig;
use crate::model::CanonicalRecipe;

/// Maps a Recipe node's loosely-typed properties onto a [`CanonicalRecipe`].
///
/// Normalization never fails: each field falls back to a configured or empty
/// value when the source is absent or has an unrecognised shape.
pub struct FieldNormalizer<'c> {
    config: &'c NormalizerConfig,
}

impl<'c> FieldNormalizer<'c> {
    pub fn new(config: &'c NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn normalize(&self, node: RecipeNode<'_>) -> CanonicalRecipe {
        let properties = node.properties();

        let title = match Field::get(properties, "name").as_str() {
            Some(name) if !name.is_empty() => self.clean(name),
            _ => self.config.fallback_title.clone(),
        };

        let description = Field::get(properties, "description")
            .as_str()
            .map(|text| self.clean(text))
            .unwrap_or_default();

        let image_url = image_url(Field::get(properties, "image"))
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.config.fallback_image_url.clone());

        let ingredients = match Field::get(properties, "recipeIngredient") {
            Field::List(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(|ingredient| self.clean(ingredient))
                .collect(),
            Field::Missing | Field::Scalar(_) | Field::Object(_) => Vec::new(),
        };

        let instruction_steps = instruction_texts(properties.get("recipeInstructions"))
            .into_iter()
            .map(|step| self.clean(step))
            .collect();

        CanonicalRecipe {
            title,
            description,
            image_url,
            ingredients,
            instruction_steps,
        }
    }

    fn clean(&self, text: &str) -> String {
        if self.config.decode_html_entities {
            // Some sites double-encode, e.g. `&amp;#8217;`
            decode_html_entities(&decode_html_entities(text)).into_owned()
        } else {
            text.to_string()
        }
    }
}

/// URL from a string, the first element of a list, or an `ImageObject`.
fn image_url(image: Field<'_>) -> Option<&str> {
    match image {
        Field::Scalar(_) => image.as_str(),
        Field::List(items) => match Field::of(items.first()) {
            first @ Field::Scalar(_) => first.as_str(),
            Field::Object(object) => Field::get(object, "url").as_str(),
            Field::List(_) | Field::Missing => None,
        },
        Field::Object(object) => Field::get(object, "url").as_str(),
        Field::Missing => None,
    }
}

/// Flatten `recipeInstructions` into step texts in source order.
///
/// A lone step or section object is handled like a one-element list.
fn instruction_texts(instructions: Option<&Value>) -> Vec<&str> {
    let mut steps = Vec::new();
    match Field::of(instructions) {
        text @ Field::Scalar(_) => steps.extend(text.as_str()),
        Field::List(items) => {
            for item in items {
                push_instruction(item, &mut steps);
            }
        }
        Field::Object(_) => {
            if let Some(item) = instructions {
                push_instruction(item, &mut steps);
            }
        }
        Field::Missing => {}
    }
    steps
}

/// One top-level instruction element: a string, a `HowToStep`, or a
/// `HowToSection` whose steps are expanded in place.
fn push_instruction<'a>(item: &'a Value, steps: &mut Vec<&'a str>) {
    match Field::of(Some(item)) {
        Field::Object(object) if has_type(object, "HowToSection", false) => {
            if let Field::List(elements) = Field::get(object, "itemListElement") {
                for element in elements {
                    steps.extend(step_text(element));
                }
            }
        }
        _ => steps.extend(step_text(item)),
    }
}

/// Text of a plain string step or a `HowToStep` with a string `text`.
fn step_text(item: &Value) -> Option<&str> {
    match Field::of(Some(item)) {
        scalar @ Field::Scalar(_) => scalar.as_str(),
        Field::Object(object) if has_type(object, "HowToStep", false) => {
            Field::get(object, "text").as_str()
        }
        Field::Object(_) | Field::List(_) | Field::Missing => None,
    }
}
