// pain: interactive shell for the pain scripting language front end

use std::io;

use clap::Parser as CliParser;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use pain::repl::{OutputFormat, Repl, ReplConfig};

/// Parse pain source one line at a time and print the syntax trees.
#[derive(CliParser, Debug)]
#[command(name = "pain", version, about)]
struct Args {
    /// Print the token stream of each line before its trees.
    #[arg(long)]
    tokens: bool,

    /// How to print parsed trees.
    #[arg(long, value_enum, default_value_t = OutputFormat::Tree)]
    format: OutputFormat,

    /// Disable colored prompt and diagnostics.
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> ReplConfig {
        ReplConfig {
            show_tokens: self.tokens,
            format: self.format,
            color: !self.no_color,
        }
    }
}

/// Log filter for the binary. `RUST_LOG` replaces the `pain=warn` default;
/// `-v` and `-vv` raise the crate level on top of whatever it selected.
fn log_filter(rust_log: Option<&str>, verbose: u8) -> Result<EnvFilter, ParseError> {
    let filter = EnvFilter::builder()
        .with_default_directive("pain=warn".parse()?)
        .parse_lossy(rust_log.unwrap_or_default());

    Ok(match verbose {
        0 => filter,
        1 => filter.add_directive("pain=debug".parse()?),
        _ => filter.add_directive("pain=trace".parse()?),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // Log to stderr; stdout belongs to the REPL
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), args.verbose)?)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(stdin.lock(), stdout.lock(), args.config());

    if let Err(err) = repl.run() {
        tracing::warn!(%err, "read loop stopped");
        return Err(err.into());
    }

    Ok(())
}
