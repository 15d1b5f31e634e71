use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "pretty-date",
    version,
    about = "Print a human-readable relative phrase for a timestamp"
)]
struct Cli {
    /// Target datetime in RFC 3339 (e.g. 1991-05-18T23:36:59Z)
    target: String,

    /// Reference datetime in RFC 3339 (defaults to now)
    #[arg(short, long)]
    reference: Option<String>,

    /// IANA timezone used for today/yesterday/tomorrow (defaults to the target's offset)
    #[arg(short, long)]
    timezone: Option<String>,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    debug!(
        input = %cli.target,
        reference = ?cli.reference,
        timezone = ?cli.timezone,
        "describing timestamp"
    );

    let result = pretty_datetime::describe(
        &cli.target,
        cli.reference.as_deref(),
        cli.timezone.as_deref(),
    )
    .with_context(|| format!("cannot describe '{}'", cli.target))?;

    if cli.json {
        let output = serde_json::to_string_pretty(&result).context("JSON serialization failed")?;
        println!("{output}");
    } else {
        println!("{}", result.phrase);
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn setup_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "pretty_date=debug,pretty_datetime=debug",
        _ => "pretty_date=trace,pretty_datetime=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
