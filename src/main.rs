mod cli;

use cli::{Args, DataSource, Environment, Settings};
use labdoc::adapters::outbound::console::StderrProgressReporter;
use labdoc::adapters::outbound::filesystem::SnapshotStore;
use labdoc::adapters::outbound::network::PostgrestStore;
use labdoc::application::dto::{FormulaRequest, FormulaResponse};
use labdoc::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use labdoc::application::read_models::FormulaReadModelBuilder;
use labdoc::application::use_cases::AggregateFormulaUseCase;
use labdoc::config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use labdoc::ports::outbound::{BomStore, ComponentStore, ProductStore};
use labdoc::shared::error::{ExitCode, LabdocError};
use labdoc::shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        let exit_code = e
            .downcast_ref::<LabdocError>()
            .map(LabdocError::exit_code)
            .unwrap_or(ExitCode::ApplicationError);
        process::exit(exit_code.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = Settings::resolve(args, config.as_ref(), Environment::from_process())?;

    let request = FormulaRequest::new(settings.product_code.clone())
        .with_missing_ratio(settings.missing_ratio)
        .with_allergen_threshold(settings.allergen_threshold);

    // Create the store adapter (Dependency Injection)
    let response = match &settings.source {
        DataSource::Snapshot(path) => aggregate(SnapshotStore::load(path)?, request).await?,
        DataSource::Remote { url, api_key } => {
            aggregate(PostgrestStore::new(url, api_key.clone())?, request).await?
        }
    };

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let model = FormulaReadModelBuilder::build(&response, settings.view);
    let formatter = FormatterFactory::create(settings.format);
    let document = formatter.format(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from(settings.output));
    presenter.present(&document)?;

    Ok(())
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    let config = match &args.config {
        Some(path) => load_config_from_path(path).map(Some)?,
        None => discover_config(Path::new("."))?,
    };
    if config.is_some() {
        let path = args
            .config
            .clone()
            .unwrap_or_else(|| Path::new(CONFIG_FILENAME).to_path_buf());
        eprintln!("📋 Loaded config from: {}", path.display());
    }
    Ok(config)
}

/// Runs the use case with one store adapter serving all three store ports
async fn aggregate<S>(store: S, request: FormulaRequest) -> Result<FormulaResponse>
where
    S: ProductStore + BomStore + ComponentStore + Clone,
{
    let use_case = AggregateFormulaUseCase::new(
        store.clone(),
        store.clone(),
        store,
        StderrProgressReporter::new(),
    );
    use_case.execute(request).await
}
