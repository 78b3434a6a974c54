use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = deskbook::cli::Cli::parse();
    let config = deskbook::config::from_cli(&cli)?;
    deskbook::logging::init_tracing(&config, cli.is_interactive())?;

    match cli.command.clone() {
        Some(deskbook::cli::CliCommand::Tui) | None => {
            deskbook::tui::run(config)?;
        }
        Some(command) => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            deskbook::commands::execute(&config, command, &mut handle)?;
        }
    }

    Ok(())
}
