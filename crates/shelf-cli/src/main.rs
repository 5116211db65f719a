use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod menu;
mod render;

/// Log filter used when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "error"
    }
}

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();
    commands::run_command(cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_unless_verbose() {
        assert_eq!(default_filter(false), "error");
        assert_eq!(default_filter(true), "debug");
    }
}
