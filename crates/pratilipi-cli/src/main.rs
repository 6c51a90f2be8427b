//! pratilipi-cli: translate a PDF between Hindi and English from the
//! terminal.
//!
//! Drives the same upload form and submission flow as the web widget,
//! with an HTTP client in place of `fetch` and a file on disk in place
//! of the browser download.
//!
//! # Usage
//!
//! ```text
//! pratilipi-cli [OPTIONS] <INPUT>
//! pratilipi-cli --check
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod sink;
mod transport;

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use pratilipi_core::{
    API_URL_ENV, ApiConfig, DEFAULT_API_BASE, FileCandidate, Language, PDF_MEDIA_TYPE, Rejection,
    ServiceStatus, Submission, UploadForm, check_health, submit,
};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::sink::{FileSink, OutputTarget};
use crate::transport::ReqwestTransport;

/// Translate a PDF document through the pratilipi translation service.
#[derive(Parser, Debug)]
#[command(name = "pratilipi-cli", version)]
struct Cli {
    /// PDF to translate.
    #[arg(required_unless_present = "check")]
    input: Option<PathBuf>,

    /// Language the document is written in (`hi` or `en`).
    #[arg(long, default_value = "hi")]
    from: Language,

    /// Language to translate into (`hi` or `en`).
    #[arg(long, default_value = "en")]
    to: Language,

    /// Base URL of the translation service.
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_BASE)]
    api_url: String,

    /// Output file or directory (default: next to the input).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only probe the service's health endpoint.
    #[arg(long)]
    check: bool,

    /// Verbose output (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(cli.verbose)));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Log level used when `RUST_LOG` is not set.
const fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[allow(clippy::future_not_send)]
async fn run(cli: Cli) -> Result<()> {
    let config = ApiConfig::new(&cli.api_url).context("invalid --api-url")?;
    let transport = ReqwestTransport::new();
    info!(base_url = config.base_url(), "translation service configured");

    if cli.check {
        let status = check_health(&config, &transport).await;
        println!("{}: {}", config.base_url(), status.label());
        if status != ServiceStatus::Online {
            bail!("service is not reachable");
        }
        return Ok(());
    }

    let Some(input) = cli.input else {
        bail!("no input file given");
    };
    let candidate = read_candidate(&input)?;

    let form = RefCell::new(UploadForm::new());
    {
        let mut form = form.borrow_mut();
        form.set_source(cli.from);
        form.set_target(cli.to);
        form.select_file(candidate)?;
    }

    let sink = FileSink::new(OutputTarget::resolve(cli.output.as_deref(), &input));
    info!(file = %input.display(), from = cli.from.code(), to = cli.to.code(), "translating");

    match submit(&form, &config, &transport, &sink).await {
        Submission::Finished(Ok(file_name)) => {
            println!("Translated PDF saved to: {}", sink.path_for(&file_name).display());
            Ok(())
        }
        Submission::Finished(Err(e)) => {
            debug!("submission failed: {e}");
            bail!("{}", e.user_message())
        }
        Submission::Rejected(Rejection::Invalid(e)) => bail!(e),
        Submission::Rejected(Rejection::InFlight) => bail!("a translation is already running"),
    }
}

/// Read `path` as an upload candidate.
///
/// There is no browser to report a media type, so a `.pdf` extension
/// stands in for it.
fn read_candidate(path: &Path) -> Result<FileCandidate> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("not a file name: {}", path.display()))?;
    Ok(FileCandidate::new(name, media_type_for(path), bytes))
}

fn media_type_for(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.eq_ignore_ascii_case("pdf"))
        .map(|_| PDF_MEDIA_TYPE.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_translate_hindi_to_english() {
        let cli = Cli::try_parse_from(["pratilipi-cli", "doc.pdf"]).unwrap();
        assert_eq!(cli.from, Language::Hindi);
        assert_eq!(cli.to, Language::English);
        assert!(!cli.check);
    }

    #[test]
    fn input_is_optional_only_for_check() {
        assert!(Cli::try_parse_from(["pratilipi-cli"]).is_err());
        assert!(Cli::try_parse_from(["pratilipi-cli", "--check"]).is_ok());
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(Cli::try_parse_from(["pratilipi-cli", "doc.pdf", "--to", "fr"]).is_err());
    }

    #[test]
    fn verbosity_raises_default_log_level() {
        assert_eq!(default_log_level(0), "warn");
        assert_eq!(default_log_level(1), "info");
        assert_eq!(default_log_level(2), "debug");
        assert_eq!(default_log_level(9), "trace");
        let cli = Cli::try_parse_from(["pratilipi-cli", "-vv", "doc.pdf"]).unwrap();
        assert!(EnvFilter::try_new(default_log_level(cli.verbose)).is_ok());
    }

    #[test]
    fn pdf_extension_maps_to_pdf_media_type() {
        assert_eq!(
            media_type_for(Path::new("Report.PDF")).as_deref(),
            Some(PDF_MEDIA_TYPE)
        );
        assert_eq!(media_type_for(Path::new("notes.txt")), None);
        assert_eq!(media_type_for(Path::new("README")), None);
    }

    #[test]
    fn read_candidate_keeps_bare_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        std::fs::write(&path, b"%PDF-1.7").unwrap();
        let candidate = read_candidate(&path).unwrap();
        assert_eq!(candidate.name, "doc.pdf");
        assert!(candidate.is_pdf());
        assert_eq!(candidate.bytes, b"%PDF-1.7");
    }
}
