use clap::Parser;
use form_confirm::cli::commands::{build_resolver, cmd_check, cmd_flow};
use form_confirm::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve string source: CLI > config > defaults
    let source = cli
        .strings
        .as_deref()
        .or_else(|| cli.string_pack.as_deref().map(|_| "pack"))
        .or_else(|| cli.strings_endpoint.as_deref().map(|_| "http"))
        .unwrap_or(config.strings.source.as_str());
    let pack = cli.string_pack.as_deref().or(config.strings.pack.as_deref());
    let endpoint = cli
        .strings_endpoint
        .as_deref()
        .or(config.strings.endpoint.as_deref());

    match cli.command {
        Commands::Check { snapshot, form } => {
            let changed = cmd_check(&snapshot, &form, cli.verbose)?;
            if changed {
                std::process::exit(1);
            }
        }
        Commands::Flow {
            snapshot,
            form,
            confirm,
            trace,
        } => {
            let strings = build_resolver(source, pack, endpoint, &config.strings.language)?;
            cmd_flow(
                &snapshot,
                &form,
                confirm,
                trace.as_deref(),
                strings,
                cli.verbose,
            )?;
        }
    }

    Ok(())
}
