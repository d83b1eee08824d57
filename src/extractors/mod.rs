pub mod json_ld;

pub use self::json_ld::JsonLdExtractor;
