use clap::Parser;
use labdoc::application::dto::{DocumentView, OutputFormat};
use labdoc::config::ConfigFile;
use labdoc::formula::policies::{MissingRatioPolicy, DEFAULT_ALLERGEN_THRESHOLD};
use labdoc::shared::Result;
use std::path::PathBuf;

pub const STORE_URL_ENV: &str = "LABDOC_STORE_URL";
pub const STORE_KEY_ENV: &str = "LABDOC_STORE_KEY";

/// Generate INCI composition documents from a product's bill of materials
#[derive(Parser, Debug)]
#[command(name = "labdoc")]
#[command(version)]
#[command(about = "Generate INCI composition documents from a product's bill of materials", long_about = None)]
pub struct Args {
    /// Finished-product code
    pub product_code: String,

    /// Sections to render: material, breakdown, summary, allergens or all
    #[arg(short, long)]
    pub view: Option<DocumentView>,

    /// Output format: markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read products, BOM and components from a JSON snapshot instead of the store
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// PostgREST root URL of the product database
    #[arg(long, value_name = "URL")]
    pub store_url: Option<String>,

    /// Minimum percent at which a fragrance allergen is listed
    #[arg(long, value_name = "PERCENT")]
    pub allergen_threshold: Option<f64>,

    /// Weight of components without a recorded ratio: assume-whole or zero
    #[arg(long, value_name = "POLICY")]
    pub missing_ratio: Option<MissingRatioPolicy>,

    /// Path to a config file (defaults to ./labdoc.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Where formula data is read from
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Snapshot(PathBuf),
    Remote { url: String, api_key: Option<String> },
}

/// Effective settings after merging CLI flags, config file and environment
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub product_code: String,
    pub view: DocumentView,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub source: DataSource,
    pub allergen_threshold: f64,
    pub missing_ratio: MissingRatioPolicy,
}

/// Values read from the process environment
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub store_url: Option<String>,
    pub store_key: Option<String>,
}

impl Environment {
    pub fn from_process() -> Self {
        Self {
            store_url: std::env::var(STORE_URL_ENV).ok(),
            store_key: std::env::var(STORE_KEY_ENV).ok(),
        }
    }
}

impl Settings {
    /// CLI flags win over the config file, which wins over defaults.
    /// The store URL falls back to the environment last.
    pub fn resolve(args: Args, config: Option<&ConfigFile>, env: Environment) -> Result<Self> {
        let view = match args.view {
            Some(view) => view,
            None => config.map(|c| c.view()).transpose()?.flatten().unwrap_or_default(),
        };
        let format = match args.format {
            Some(format) => format,
            None => config.map(|c| c.format()).transpose()?.flatten().unwrap_or_default(),
        };
        let missing_ratio = match args.missing_ratio {
            Some(policy) => policy,
            None => config
                .map(|c| c.missing_ratio())
                .transpose()?
                .flatten()
                .unwrap_or_default(),
        };
        let allergen_threshold = args
            .allergen_threshold
            .or_else(|| config.and_then(|c| c.allergen_threshold))
            .unwrap_or(DEFAULT_ALLERGEN_THRESHOLD);

        let source = match args.data {
            Some(path) => DataSource::Snapshot(path),
            None => DataSource::Remote {
                url: args
                    .store_url
                    .or_else(|| config.and_then(|c| c.store_url.clone()))
                    .or(env.store_url)
                    .unwrap_or_default(),
                api_key: env.store_key,
            },
        };

        Ok(Self {
            product_code: args.product_code,
            view,
            format,
            output: args.output,
            source,
            allergen_threshold,
            missing_ratio,
        })
    }
}
