mod cli;

use cli::{Args, ListingOptions};
use order_lister::adapters::outbound::console::StderrProgressReporter;
use order_lister::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType, RepositoryFactory,
};
use order_lister::application::read_models::OrderListReadModelBuilder;
use order_lister::application::use_cases::ListOrdersUseCase;
use order_lister::config::{self, ConfigFile};
use order_lister::order_listing::services::ListingMetadataGenerator;
use order_lister::ports::outbound::ProgressReporter;
use order_lister::shared::error::ExitCode;
use order_lister::shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let reporter = StderrProgressReporter::new();

    let config = load_config(&args)?;
    if let Some(config) = &config {
        for warning in config::unknown_field_warnings(config) {
            reporter.report_error(&warning);
        }
    }
    let options = ListingOptions::resolve(&args, config.as_ref());

    // Create adapters (Dependency Injection)
    let repository = RepositoryFactory::create(&options.source)?;
    let use_case = ListOrdersUseCase::new(repository);

    reporter.report(&format!("📖 Loading orders from {}", options.source));
    let orders = use_case.execute().await?;
    reporter.report(&format!("✅ Found {} order(s)", orders.len()));

    let metadata = ListingMetadataGenerator::generate_default();
    let model = OrderListReadModelBuilder::build(&orders, &metadata);

    reporter.report(FormatterFactory::progress_message(options.format));
    let formatter = FormatterFactory::create(options.format);
    let formatted_output = formatter.format(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from(options.output.clone()));
    presenter.present(&formatted_output)?;

    if let Some(path) = &options.output {
        reporter.report_completion(&format!("✅ Output complete: {}", path.display()));
    }

    Ok(())
}

/// Explicit `--config` must exist; otherwise look for one in the working directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}
