/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use clap::Parser;
use template_server::cli::{Cli, Commands};
use template_server::{generate_from_file, load_config, serve};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).await?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&config).await,
        Commands::Generate { request } => {
            let template = generate_from_file(&request).await?;
            print!("{template}");
            Ok(())
        }
    }
}
