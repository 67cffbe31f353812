mod cli;

use cli::{Args, Command, ReportArgs};
use spdx_licences::config::{discover_config, load_config_from_path, ConfigFile};
use spdx_licences::prelude::*;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    setup_logging(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the level chosen by `-v`
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<ExitCode> {
    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(&std::env::current_dir()?)?.unwrap_or_default(),
    };

    match args.command {
        Command::Render { input, output } => {
            let expressions = LoadExpressionsUseCase::new(FileSystemReader::new()).execute(&input)?;
            let rendered: Vec<String> = expressions.iter().map(|e| e.licence_id()).collect();
            presenter(output).present(&rendered.join("\n"))?;
            Ok(ExitCode::Success)
        }
        Command::Classify {
            input,
            report,
            output,
        } => {
            let expressions = LoadExpressionsUseCase::new(FileSystemReader::new()).execute(&input)?;
            classify(
                ClassificationRequest::new(expressions),
                &report,
                &config,
                output,
            )
        }
        Command::Check { ids, report } => {
            classify(ClassificationRequest::from_ids(ids), &report, &config, None)
        }
    }
}

/// Classifies the request and presents the report; CLI flags win over config
fn classify(
    request: ClassificationRequest,
    report_args: &ReportArgs,
    config: &ConfigFile,
    output: Option<PathBuf>,
) -> Result<ExitCode> {
    let licence_list_path: Option<&Path> = report_args
        .licence_list
        .as_deref()
        .or(config.licence_list.as_deref());

    let mut additional = config.additional_licences.clone().unwrap_or_default();
    additional.extend(report_args.additional.iter().cloned());

    let licence_list = Arc::new(InMemoryLicenceList::new());
    LoadLicenceListUseCase::new(FileSystemReader::new(), Arc::clone(&licence_list))
        .execute(licence_list_path, &additional)?;
    let licence_list_version = licence_list.version();

    let report = ClassifyLicencesUseCase::new(licence_list).execute(request);

    let format = report_args
        .format
        .or_else(|| config.output_format())
        .unwrap_or(OutputFormat::Json);
    let formatted = FormatterFactory::create(format, licence_list_version).format(&report)?;
    presenter(output).present(&formatted)?;

    let strict = report_args.strict || config.strict.unwrap_or(false);
    if strict && report.has_unknown() {
        eprintln!(
            "⚠️  Unknown licences: {}",
            report.unknown_ids().join(", ")
        );
        return Ok(ExitCode::UnknownLicencesFound);
    }
    Ok(ExitCode::Success)
}

fn presenter(output: Option<PathBuf>) -> Box<dyn OutputPresenter> {
    match output {
        Some(path) => Box::new(FileSystemWriter::new(path)),
        None => Box::new(StdoutPresenter::new()),
    }
}
