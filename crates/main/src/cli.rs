/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "template-server", version, about = "Starter code template generator")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Generate one template from a request file and print it
    Generate {
        /// JSON request file
        request: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["template-server"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_generate_command() {
        let cli = Cli::try_parse_from([
            "template-server",
            "generate",
            "request.json",
            "--config",
            "server.toml",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Generate {
                request: PathBuf::from("request.json")
            })
        );
        assert_eq!(cli.config, Some(PathBuf::from("server.toml")));
    }
}
