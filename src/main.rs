use clap::Parser;
use ditchgen::cli::{Cli, Commands};
use ditchgen::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => ditchgen::cli::build::run(args, &printer)?,
        Commands::List(args) => ditchgen::cli::list::run(args, &printer)?,
    }

    Ok(())
}
