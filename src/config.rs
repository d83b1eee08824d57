use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level import configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    /// Fallback values and text clean-up for the normalizer
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    /// Parsing and type-matching policy for the graph resolver
    #[serde(default)]
    pub resolver: ResolverConfig,
    /// Largest page the command-line caller will hand to the extractor
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            normalizer: NormalizerConfig::default(),
            resolver: ResolverConfig::default(),
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

/// Configuration for turning a Recipe node into a canonical record
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Title used when the node has no usable `name`
    #[serde(default = "default_fallback_title")]
    pub fallback_title: String,
    /// Image used when no `image` form yields a URL
    #[serde(default = "default_fallback_image_url")]
    pub fallback_image_url: String,
    /// Decode HTML entities (`&amp;`, `&#8217;`) left in text fields
    #[serde(default)]
    pub decode_html_entities: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            fallback_title: default_fallback_title(),
            fallback_image_url: default_fallback_image_url(),
            decode_html_entities: false,
        }
    }
}

/// Configuration for locating the Recipe node in a JSON-LD block
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Retry blocks that fail to parse after repairing common defects
    #[serde(default)]
    pub lenient_json: bool,
    /// Accept `@type` values such as `"recipe"`
    #[serde(default)]
    pub case_insensitive_type: bool,
}

// Default value functions
fn default_fallback_title() -> String {
    "Unknown Recipe".to_string()
}

fn default_fallback_image_url() -> String {
    "https://via.placeholder.com/600x400".to_string()
}

fn default_max_input_bytes() -> usize {
    5 * 1024 * 1024
}

impl ImportConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKBOOK__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COOKBOOK__NORMALIZER__FALLBACK_TITLE
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ImportConfig::load`] for the precedence rules.
pub fn load_config() -> Result<ImportConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: COOKBOOK__RESOLVER__LENIENT_JSON
        .add_source(
            Environment::with_prefix("COOKBOOK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
