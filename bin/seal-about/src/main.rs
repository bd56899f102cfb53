//! ---
//! seal_section: "02-cli"
//! seal_subsection: "binary"
//! seal_type: "source"
//! seal_scope: "code"
//! seal_description: "CLI surface printing Seal version and license metadata."
//! seal_version: "v0.1-pre"
//! seal_owner: "tbd"
//! ---
use anyhow::Result;
use clap::{ArgAction, Parser};
use seal_versioning::license::license_text;
use seal_versioning::version::{current, UNKNOWN_VERSION};
use tracing::{warn, Level};
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "Prints Seal version and license information",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print extended version information and exit"
    )]
    version: bool,
    #[arg(
        long = "license",
        action = ArgAction::SetTrue,
        help = "Print the license text and exit"
    )]
    license: bool,
    #[arg(
        long = "json",
        action = ArgAction::SetTrue,
        help = "Print version metadata as JSON and exit"
    )]
    json: bool,
}

fn init_tracing() {
    let _ = Registry::default()
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(subscriber_fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.license {
        print!("{}", license_text());
        return Ok(());
    }

    match current() {
        Ok(info) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(info)?);
            } else if cli.version {
                println!("{}", info.extended());
            } else {
                println!("{}", info.banner());
            }
        }
        Err(err) => {
            warn!(%err, "embedded version metadata failed validation");
            if cli.json {
                return Err(err.into());
            }
            println!("{UNKNOWN_VERSION}");
        }
    }
    Ok(())
}
