use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "beehire-gui")]
#[command(about = "BeeHire desktop app", long_about = None)]
struct Cli {
    /// Store file shared with the command line tool
    #[arg(long, env = "BEEHIRE_STORE", default_value = "beehire.db")]
    store: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    beehire::logging::init_logging(cli.verbose)?;
    beehire::gui::run(cli.store)?;
    Ok(())
}
