use clap::Parser;
use news_digest::cli::{Cli, Command};
use news_digest::dates::{Clock, FixedClock, SystemClock};
use news_digest::error::DigestError;
use news_digest::filter::filter_articles_by_days;
use news_digest::input::{InputSource, read_articles};
use news_digest::outputs::{json, markdown};
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;
use tracing::{Level, debug, enabled, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

fn main() -> ExitCode {
    // --- Tracing init ---
    // stdout carries the data, so all diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(status) => return ExitCode::from(status),
    };
    debug!(?args, "Parsed CLI arguments");

    let clock: Box<dyn Clock> = match args.now {
        Some(now) => Box::new(FixedClock(now)),
        None => Box::new(SystemClock),
    };

    let result = run(
        args.command,
        clock.as_ref(),
        &InputSource::Stdin,
        std::io::stdout().lock(),
    );
    ExitCode::from(exit_status(&result))
}

/// Parse the command line, printing clap's message on failure.
///
/// `--help` and `--version` map to status 0; every argument error maps to 1.
fn parse_args<I, T>(args: I) -> Result<Cli, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| {
        let _ = e.print();
        if e.exit_code() == 0 { 0 } else { 1 }
    })
}

/// Process status for a finished run, reporting a fatal error on stderr.
fn exit_status(result: &Result<(), DigestError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            // Must reach stderr even when RUST_LOG filters ERROR out.
            if enabled!(Level::ERROR) {
                error!(error = %e, "news_digest failed");
            } else {
                eprintln!("{}", fatal_notice(e));
            }
            1
        }
    }
}

fn fatal_notice(e: &DigestError) -> String {
    format!("news_digest: error: {e}")
}

/// Run one stage.
///
/// `stdin` is where `filter` (and `summarize` without an input path) reads
/// from; `stdout` receives the filtered array or the printed document.
fn run<W: Write>(
    command: Command,
    clock: &dyn Clock,
    stdin: &InputSource,
    stdout: W,
) -> Result<(), DigestError> {
    match command {
        Command::Filter { days } => {
            let articles = read_articles(stdin)?;
            let outcome = filter_articles_by_days(articles, days, clock.now());
            json::write_articles(&outcome.kept, stdout, "stdout")?;
        }
        Command::Summarize {
            input,
            output,
            title,
        } => {
            let source = input.map_or_else(|| stdin.clone(), InputSource::Path);
            let articles = read_articles(&source)?;
            let md = markdown::generate_markdown_summary(
                &articles,
                &title,
                clock.today(),
                output.as_deref(),
                stdout,
            )?;
            debug!(bytes = md.len(), "Rendered summary");
        }
    }
    info!("Done");
    Ok(())
}
