use clap::{Parser, ValueEnum};
use log::{debug, error};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use cookbook_import::{extract_recipe_with_config, load_config, CanonicalRecipe, ImportError};

#[derive(Parser)]
#[command(
    name = "cookbook-import",
    version,
    about = "Extract a schema.org Recipe from the JSON-LD of a saved web page"
)]
struct Cli {
    /// HTML file to read (stdin when omitted)
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Title to use when the recipe has no name
    #[arg(long)]
    fallback_title: Option<String>,

    /// Image URL to use when the recipe has no image
    #[arg(long)]
    fallback_image: Option<String>,

    /// Repair trailing commas and raw control characters before giving up on a block
    #[arg(long)]
    lenient: bool,

    /// Decode HTML entities left in text fields
    #[arg(long)]
    decode_entities: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, ImportError> {
    let mut config = load_config()?;
    if let Some(title) = cli.fallback_title {
        config.normalizer.fallback_title = title;
    }
    if let Some(image) = cli.fallback_image {
        config.normalizer.fallback_image_url = image;
    }
    config.resolver.lenient_json |= cli.lenient;
    config.normalizer.decode_html_entities |= cli.decode_entities;
    debug!("{:#?}", config);

    let input: Box<dyn Read> = match cli.file {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };

    // Read one byte past the limit so oversized input is detected without
    // buffering all of it
    let mut bytes = Vec::new();
    input
        .take(config.max_input_bytes as u64 + 1)
        .read_to_end(&mut bytes)?;

    if bytes.len() > config.max_input_bytes {
        return Err(ImportError::InputTooLarge {
            limit: config.max_input_bytes,
        });
    }
    let html =
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let recipe = extract_recipe_with_config(&html, &config).into_result()?;
    render(&recipe, cli.format)
}

fn render(recipe: &CanonicalRecipe, format: Format) -> Result<String, ImportError> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(recipe)?),
        Format::Text => Ok(recipe.to_string()),
    }
}
