use clap::Parser;
use seedseal::cli::commands::encrypt::Destination;
use seedseal::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    seedseal::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Encrypt {
            ref input,
            ref output,
            save,
            copy,
            force,
        } => {
            let dest = Destination {
                output: output.as_deref(),
                save,
                copy,
            };
            seedseal::cli::commands::encrypt::execute(&cli, input.as_deref(), &dest, force)
        }
        Commands::Decrypt { ref input, copy } => {
            seedseal::cli::commands::decrypt::execute(&cli, input.as_deref(), copy)
        }
        Commands::Inspect { ref input } => {
            seedseal::cli::commands::inspect::execute(&cli, input.as_deref())
        }
        Commands::Strength { ref password } => {
            seedseal::cli::commands::strength::execute(password.as_deref())
        }
        Commands::GeneratePassword { copy } => {
            seedseal::cli::commands::generate::execute(&cli, copy)
        }
        #[cfg(feature = "audit-log")]
        Commands::Audit { last, ref since } => {
            seedseal::cli::commands::audit_cmd::execute(&cli, last, since.as_deref())
        }
        Commands::Completions { shell } => seedseal::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        tracing::debug!("command failed: {e:?}");
        seedseal::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
