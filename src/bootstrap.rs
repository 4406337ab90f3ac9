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

use std::{io::{self, Write}, path::Path, process::{ExitStatus, Stdio}};

use tracing::info;

use crate::launch_cmd::LaunchCommand;

/// Console command that makes the server save and exit
const STOP_COMMAND: &[u8] = b"stop\n";

#[derive(thiserror::Error, Debug)]
pub enum BootstrapError {
    #[error("We failed to start Minecraft Server: {0}")]
    Spawn(io::Error),
    #[error("We failed to attach stdin to Minecraft Server terminal")]
    Stdin,
    #[error("It seems like the server exited with error: {0}")]
    Exit(ExitStatus),
    #[error("It seems like the server exited with error: {0}")]
    Wait(io::Error)
}

impl BootstrapError {
    /// Start up failures are fatal, a messy shutdown still generated the config
    pub fn is_fatal(&self) -> bool {
        matches!(self, BootstrapError::Spawn(_) | BootstrapError::Stdin)
    }
}

/// Runs the server once so it writes out its default config files
pub trait ServerProcess {
    fn run_once(&self, server_dir: &Path, cmd: &LaunchCommand) -> Result<(), BootstrapError>;
}

/// Spawns the real java process
pub struct JavaProcess;

impl ServerProcess for JavaProcess {
    fn run_once(&self, server_dir: &Path, cmd: &LaunchCommand) -> Result<(), BootstrapError> {
        info!("Starting Minecraft Server...");

        let mut child = cmd.to_command(server_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(BootstrapError::Spawn)?;

        let mut stdin = child.stdin.take()
            .ok_or(BootstrapError::Stdin)?;

        // the server reads console input once it is done loading, a failed write
        // means it already quit, which the exit status will tell us about
        let _ = stdin.write_all(STOP_COMMAND);
        drop(stdin);

        let status = child.wait()
            .map_err(BootstrapError::Wait)?;

        match status.success() {
            true => Ok(()),
            false => Err(BootstrapError::Exit(status))
        }
    }
}
