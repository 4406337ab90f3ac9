/*
 * Purpur Setup - A Purpur server installer
 * Copyright (C) 2025 Josh Kropf <josh@slashdev.ca>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

mod cli;
mod prompt;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::{io::{self, IsTerminal}, path::{Path, PathBuf}};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Parser};
use prompt::TermPrompter;
use purpur_setup::{
    env, Answers, Delays, JavaProcess, LinePrompter, Progress, PurpurClient, ServerInstance
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let answers = if io::stdin().is_terminal() {
        Answers::collect(&mut TermPrompter::new())?
    } else {
        // answers piped in, one per line
        Answers::collect(&mut LinePrompter::new(io::stdin().lock(), io::stdout()))?
    };

    let server_dir = absolute_path(&cli.dir)?;
    let instance = ServerInstance::create(&server_dir)
        .with_context(|| format!("Failed to create server directory {}", server_dir.display()))?;

    let api_url = cli.api_url
        .map(|url| url.to_string())
        .unwrap_or_else(env::get_api_url);

    let client = PurpurClient::new(reqwest::Client::new(), &api_url);
    let mut progress = ProgressHandler::new();

    instance.install(&answers, &client, &JavaProcess, &mut progress, &Delays::default())
        .await
}

fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    Ok(if !path.is_absolute() {
        std::env::current_dir()?.join(path)
    } else {
        path.to_owned()
    })
}

struct ProgressHandler {
    progress: ProgressBar
}

impl ProgressHandler {
    fn new() -> Self {
        ProgressHandler {
            progress: ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout())
                .with_style(ProgressStyle::with_template("{bar:40.cyan/blue} {msg} {bytes}/{total_bytes}").unwrap())
        }
    }
}

impl Progress for ProgressHandler {
    fn advance(&mut self, current: usize) {
        self.progress.set_position(current as u64);
    }

    fn begin(&mut self, message: &'static str, total: usize) {
        self.progress.set_length(total as u64);
        self.progress.set_message(message);
        self.progress.reset();
    }

    fn end(&mut self) {
        self.progress.finish_and_clear();
    }
}
