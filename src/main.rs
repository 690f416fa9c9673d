use clap::Parser;
use screen_fusion::cli::commands::{cmd_fuse, cmd_inspect};
use screen_fusion::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Fuse {
            input,
            format,
            output,
        } => {
            cmd_fuse(&input, &format, output.as_deref(), cli.verbose, &config)?;
        }
        Commands::Inspect { input, trace } => {
            cmd_inspect(&input, trace.as_deref(), cli.verbose, &config)?;
        }
    }

    Ok(())
}
