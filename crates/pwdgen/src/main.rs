//! pwdgen: prints random passwords in columns that fill the terminal.
//!
//! # Usage
//!
//! ```text
//! pwdgen [OPTIONS]
//!
//! Options:
//!   -l, --length <N>        Characters per password [default: from config, 12]
//!   -n, --count <N>         Print exactly N passwords instead of a full screen
//!       --wrap <POLICY>     Line breaking for --count: width | columns [default: width]
//!   -p, --pages <N>         Number of full screens to print [default: 1]
//!       --charset <SET>     alphanumeric | letters | digits | symbols
//!       --rows <N>          Screen rows (use with --columns to skip the terminal query)
//!       --columns <N>       Screen columns (use with --rows)
//!       --config <PATH>     Config file [default: platform config dir]
//!   -v, --verbose           Debug logging on stderr
//! ```
//!
//! Passwords go to stdout; logs go to stderr, so `pwdgen > file` captures only
//! passwords.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pwdgen::application::print_passwords::{
    PrintMode, PrintPasswordsUseCase, PrintRequest, ScreenGeometrySource,
};
use pwdgen::infrastructure::{
    config::{load_config, AppConfig},
    generator::{Charset, PasswordGenerator},
    sink::WriterSink,
    terminal::{FixedGeometrySource, TerminalGeometrySource},
};
use pwdgen_core::{PasswordLength, ScreenGeometry, WrapPolicy};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Line-breaking policy for `--count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WrapArg {
    /// Break when the characters on the line reach the screen width.
    Width,
    /// Break after the number of passwords that fit on one line.
    Columns,
}

impl From<WrapArg> for WrapPolicy {
    fn from(arg: WrapArg) -> Self {
        match arg {
            WrapArg::Width => WrapPolicy::ByAccumulatedWidth,
            WrapArg::Columns => WrapPolicy::ByColumnCount,
        }
    }
}

/// Random password generator that lays passwords out in terminal columns.
#[derive(Debug, Parser)]
#[command(name = "pwdgen", version, about)]
struct Cli {
    /// Characters per password.
    #[arg(short, long, env = "PWDGEN_LENGTH")]
    length: Option<usize>,

    /// Print exactly this many passwords instead of a full screen.
    #[arg(short = 'n', long, conflicts_with = "pages")]
    count: Option<usize>,

    /// Line breaking used with `--count`.
    #[arg(long, value_enum, default_value_t = WrapArg::Width)]
    wrap: WrapArg,

    /// Number of full screens to print.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,

    /// Characters passwords are drawn from.
    #[arg(long, value_enum, env = "PWDGEN_CHARSET")]
    charset: Option<Charset>,

    /// Screen rows; skips the terminal size query together with `--columns`.
    #[arg(long, requires = "columns")]
    rows: Option<u16>,

    /// Screen columns; skips the terminal size query together with `--rows`.
    #[arg(long, requires = "rows")]
    columns: Option<u16>,

    /// Path to the TOML config file.
    #[arg(long, env = "PWDGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

/// Settings after merging the config file with the command line.
#[derive(Debug)]
struct Settings {
    request: PrintRequest,
    charset: Charset,
    fallback: ScreenGeometry,
    fixed_geometry: Option<ScreenGeometry>,
}

impl Cli {
    /// Merges the parsed arguments over `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the password length or any geometry value is zero.
    fn into_settings(self, config: &AppConfig) -> anyhow::Result<Settings> {
        let length_value = self.length.unwrap_or(config.password.length);
        let length = PasswordLength::new(length_value)
            .with_context(|| format!("invalid password length: {length_value}"))?;

        let fallback =
            ScreenGeometry::new(config.screen.fallback_rows, config.screen.fallback_columns)
                .context("invalid fallback screen size in config")?;

        let fixed_geometry = match (self.rows, self.columns) {
            (Some(rows), Some(columns)) => Some(
                ScreenGeometry::new(rows, columns)
                    .with_context(|| format!("invalid screen size: {rows} rows x {columns} columns"))?,
            ),
            _ => None,
        };

        let mode = match self.count {
            Some(count) => PrintMode::Count {
                count,
                policy: self.wrap.into(),
            },
            None => PrintMode::Pages { pages: self.pages },
        };

        Ok(Settings {
            request: PrintRequest { length, mode },
            charset: self.charset.unwrap_or(config.password.charset),
            fallback,
            fixed_geometry,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    // RUST_LOG wins; otherwise --verbose, otherwise the configured level.
    let default_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let settings = cli.into_settings(&config)?;
    debug!(?settings, "settings resolved");

    let terminal = TerminalGeometrySource::new();
    let fixed;
    let geometry_source: &dyn ScreenGeometrySource = match settings.fixed_geometry {
        Some(geometry) => {
            fixed = FixedGeometrySource::new(geometry);
            &fixed
        }
        None => &terminal,
    };

    let use_case = PrintPasswordsUseCase::new(geometry_source, settings.fallback);
    let mut generator = PasswordGenerator::new(settings.request.length, settings.charset);
    let mut sink = WriterSink::new(BufWriter::new(io::stdout().lock()));

    let summary = use_case
        .execute(&settings.request, || generator.generate(), &mut sink)
        .context("password generation failed")?;
    sink.finish().context("failed to write passwords to stdout")?;

    info!(printed = summary.printed, lines = summary.lines, "done");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
