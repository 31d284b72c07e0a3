use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use manifest_semver::config;
use manifest_semver::ui;
use manifest_semver::{Dispatcher, FileMapping, OperationRequest};

const DEFAULT_MANIFEST: &str = "package.json";

#[derive(clap::Parser)]
#[command(
    name = "manifest-semver",
    version,
    about = "Validate, set or bump semantic versions in JSON manifests"
)]
struct Args {
    #[arg(help = "Phase to run: validate, set or bump")]
    phase: String,

    #[arg(help = "Version for validate/set, or part for bump (major, minor, patch, prerelease)")]
    target: Option<String>,

    #[arg(short, long, help = "Build metadata to attach to the version")]
    build: Option<String>,

    #[arg(short, long = "file", help = "Manifest to process (repeatable)")]
    files: Vec<PathBuf>,

    #[arg(short, long, help = "Write results here instead of in place")]
    dest: Option<PathBuf>,

    #[arg(long, help = "Indentation unit for written manifests")]
    indent: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Exit non-zero when any manifest fails")]
    fail_on_warning: bool,

    #[arg(short, long, help = "Log old and new versions for every file")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "manifest_semver=debug"
    } else {
        "manifest_semver=error"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let request = OperationRequest {
        phase: args.phase,
        target: args.target,
        build: args.build,
    };

    // Unknown phase or part must fail before any file is looked at
    let operation = match request.resolve() {
        Ok(op) => op,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let base = Path::new("");
    let mappings = if !args.files.is_empty() {
        vec![FileMapping::new(args.files, args.dest)]
    } else if !config.files.is_empty() {
        // each [[files]] entry carries its own dest
        if args.dest.is_some() {
            ui::display_error("--dest needs --file when files come from the configuration");
            std::process::exit(1);
        }
        match config.file_mappings(base) {
            Ok(mappings) => mappings,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
    } else {
        vec![FileMapping::new(
            vec![PathBuf::from(DEFAULT_MANIFEST)],
            args.dest,
        )]
    };

    let mut options = config.write_options();
    if let Some(indent) = args.indent {
        options.indent = indent;
    }

    let dispatcher = Dispatcher::new(config.notifier(base), options);
    let report = dispatcher.run(&operation, &mappings);
    ui::display_report(operation.phase(), &report);

    if report.has_failures() && args.fail_on_warning {
        std::process::exit(1);
    }

    Ok(())
}
