pub mod build;
pub mod list;

use clap::{Parser, Subcommand};

/// ditchgen - Procedural sprite generator for Cows in the Ditch
#[derive(Parser, Debug)]
#[command(name = "ditchgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render every sprite into the asset catalog
    Build(build::BuildArgs),

    /// List the sprites that would be built
    List(list::ListArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::try_parse_from([
            "ditchgen",
            "build",
            "--output",
            "out",
            "--only",
            "heart_full",
            "--only",
            "farmer",
        ])
        .unwrap();
        let Commands::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert_eq!(args.only, vec!["heart_full", "farmer"]);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["ditchgen", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }
}
