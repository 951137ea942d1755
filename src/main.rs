use clap::Parser;
use mjml_bench::utils::error::BenchError;
use mjml_bench::utils::logger;
use mjml_bench::utils::validation::validate_file_extension;
use mjml_bench::{
    BenchEngine, BenchSettings, CliConfig, ConfigProvider, FsTemplateSource, MrmlConverter,
    ReportFormat, TemplateSource, USAGE,
};
use std::path::Path;
use std::process;

fn usage() -> ! {
    println!("{}", USAGE);
    process::exit(1);
}

fn fail(e: &BenchError) -> ! {
    tracing::error!(
        "❌ Benchmark failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    process::exit(e.exit_code());
}

fn run(settings: &BenchSettings, input: &Path) -> mjml_bench::Result<String> {
    if let Err(e) = validate_file_extension("input", input, &["mjml"]) {
        tracing::warn!("{}", e);
    }

    let template = FsTemplateSource::new().load(input)?;
    let converter = MrmlConverter::from_render_settings(&settings.render);
    let engine = BenchEngine::from_config(converter, settings).with_monitoring(settings.monitor);

    let report = engine.run(&template)?;
    report.render(settings.format())
}

fn main() {
    let cli = CliConfig::parse();

    if cli.input.is_none() && cli.config.is_none() {
        usage();
    }

    let settings = match cli.to_settings() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            fail(&e);
        }
    };

    match settings.format() {
        ReportFormat::Text => logger::init_cli_logger(cli.verbose, settings.log_level.as_deref()),
        ReportFormat::Json => logger::init_json_logger(cli.verbose, settings.log_level.as_deref()),
    }
    tracing::debug!("Effective settings: {:?}", settings);

    let Some(input) = settings.input_path() else {
        usage();
    };

    match run(&settings, input) {
        Ok(line) => println!("{}", line),
        Err(e) => fail(&e),
    }
}
