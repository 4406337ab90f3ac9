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

use std::{fs, io, path::{Path, PathBuf}, time::Duration};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::{
    env::{self, EULA_FILE, PROPERTIES_FILE, PURPUR_FILE, SERVER_JAR_FILE},
    launch_cmd::{run_script, LaunchCommand},
    Answers, ArtifactSource, Progress, PurpurConfig, ServerProcess, ServerProperties
};

/// Heap for the bootstrap run, independent of the heap chosen for the run script
pub const BOOTSTRAP_HEAP_MB: i64 = 2048;

/// Fixed waits around the bootstrap run
pub struct Delays {
    /// Give file writes a moment before the server reads them
    pub before_bootstrap: Duration,
    pub before_exit: Duration
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            before_bootstrap: Duration::from_secs(3),
            before_exit: Duration::from_secs(5)
        }
    }
}

pub struct ServerInstance {
    /// Absolute path of the server directory
    pub dir: PathBuf
}

impl ServerInstance {
    /// Create the server directory when it doesn't exist yet
    pub fn create(server_dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(server_dir)?;

        Ok(Self {
            dir: fs::canonicalize(server_dir)?
        })
    }

    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    pub fn write_server_jar(&self, jar: &[u8]) -> io::Result<()> {
        fs::write(self.file_path(SERVER_JAR_FILE), jar)
    }

    pub fn write_run_script(&self, heap_gb: i64) -> Result<PathBuf> {
        let script_path = self.file_path(env::get_run_script_name());
        fs::write(&script_path, run_script(heap_gb, env::is_windows()))
            .with_context(|| format!("Failed to write {}", script_path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755))
                .with_context(|| format!("Failed to make {} executable", script_path.display()))?;
        }

        Ok(script_path)
    }

    /// Accepts the minecraft EULA on behalf of the operator
    pub fn write_eula(&self) -> io::Result<()> {
        fs::write(self.file_path(EULA_FILE), "eula=true")
    }

    pub fn write_server_properties(&self, answers: &Answers) -> io::Result<()> {
        ServerProperties::from_answers(answers)
            .write_file(&self.file_path(PROPERTIES_FILE))
    }

    pub fn purpur_config(&self) -> PurpurConfig {
        PurpurConfig::new(&self.file_path(PURPUR_FILE))
    }

    /// Download the server, write its config, run it once and patch what it generated.
    ///
    /// Only a failed download, a failed `server.jar` write or a server that can't be
    /// started end the install early. Every other failure is logged and skipped.
    pub async fn install(
        &self,
        answers: &Answers,
        source: &impl ArtifactSource,
        server: &impl ServerProcess,
        progress: &mut dyn Progress,
        delays: &Delays
    ) -> Result<()> {
        info!("===================================================");
        info!("Downloading jar file at version \"{}\"...", answers.version);

        let jar = source.fetch(&answers.version, progress)
            .await
            .with_context(|| format!("Failed to download server jar for version {}", answers.version))?;

        self.write_server_jar(&jar)
            .with_context(|| format!("Failed to write {SERVER_JAR_FILE} in {}", self.dir.display()))?;

        info!("Creating RUN button to start the server...");
        if let Err(e) = self.write_run_script(answers.heap_gb) {
            warn!("{e:#}");
        }

        info!("Generating accepted EULA file...");
        if let Err(e) = self.write_eula() {
            warn!("Failed to write {EULA_FILE}: {e}");
        }

        info!("Generating properties at \"{PROPERTIES_FILE}\" file with custom provided values...");
        if let Err(e) = self.write_server_properties(answers) {
            warn!("Failed to write {PROPERTIES_FILE}: {e}");
        }

        info!(
            "We are going to be initializing the server in {}s to generate some configuration files, do not kill the installer yet!",
            delays.before_bootstrap.as_secs()
        );
        tokio::time::sleep(delays.before_bootstrap).await;

        // blocks until the server has generated its files and stopped
        let cmd = LaunchCommand::server(BOOTSTRAP_HEAP_MB);
        match server.run_once(&self.dir, &cmd) {
            Ok(()) => {},
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => warn!("{e}")
        }

        info!("Adjusting \"{PURPUR_FILE}\" file configurations...");
        if let Err(e) = self.purpur_config().patch_keepalive(answers.keepalive) {
            warn!("{e}");
        }

        info!("You're all done! :)");
        info!("Quitting in {} seconds...", delays.before_exit.as_secs());
        tokio::time::sleep(delays.before_exit).await;

        Ok(())
    }
}
