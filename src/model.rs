use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ImportError;

/// A recipe in the flat shape the rest of the application stores.
///
/// Every field is always populated; missing source data is replaced by the
/// configured fallbacks during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecipe {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub ingredients: Vec<String>,
    pub instruction_steps: Vec<String>,
}

impl CanonicalRecipe {
    /// Ingredients joined with `|`, the column format used for storage.
    pub fn ingredients_joined(&self) -> String {
        self.ingredients.join("|")
    }

    /// Instruction steps separated by blank lines.
    pub fn instructions_text(&self) -> String {
        self.instruction_steps.join("\n\n")
    }
}

impl fmt::Display for CanonicalRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if !self.description.is_empty() {
            writeln!(f, "\n{}", self.description)?;
        }
        writeln!(f, "\nImage: {}", self.image_url)?;

        writeln!(f, "\nIngredients:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "- {ingredient}")?;
        }

        writeln!(f, "\nInstructions:")?;
        for (number, step) in self.instruction_steps.iter().enumerate() {
            writeln!(f, "{}. {step}", number + 1)?;
        }
        Ok(())
    }
}

/// Outcome of scanning one page for a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// A Recipe node was found and normalized.
    Found(CanonicalRecipe),
    /// No JSON-LD block yielded a Recipe node and none was malformed.
    NotFound,
    /// No block matched; this is the document-order index of the first
    /// block that failed to parse.
    MalformedJson(usize),
}

impl Extraction {
    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Found(_))
    }

    pub fn recipe(&self) -> Option<&CanonicalRecipe> {
        match self {
            Extraction::Found(recipe) => Some(recipe),
            _ => None,
        }
    }

    /// Convert into a `Result`, mapping the two failure outcomes onto
    /// [`ImportError`].
    pub fn into_result(self) -> Result<CanonicalRecipe, ImportError> {
        match self {
            Extraction::Found(recipe) => Ok(recipe),
            Extraction::NotFound => Err(ImportError::NoRecipeTypeFound),
            Extraction::MalformedJson(block) => Err(ImportError::MalformedJson { block }),
        }
    }
}
