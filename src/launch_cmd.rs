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

use std::{path::Path, process::Command};

use crate::env::SERVER_JAR_FILE;

/// Java command line used both for the run script and the bootstrap run
pub struct LaunchCommand {
    program: String,
    args: Vec<String>
}

impl LaunchCommand {
    /// `java -Xms<heap>M -Xmx<heap>M -jar server.jar nogui`
    pub fn server(heap_mb: i64) -> Self {
        let mut cmd = Self::new("java");
        cmd.arg(format!("-Xms{heap_mb}M"))
            .arg(format!("-Xmx{heap_mb}M"))
            .args(["-jar", SERVER_JAR_FILE, "nogui"]);
        cmd
    }

    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::new()
        }
    }

    pub fn arg<S: Into<String>>(&mut self, val: S) -> &mut Self {
        self.args.push(val.into());
        self
    }

    pub fn args<I>(&mut self, iter: I) -> &mut Self
        where I: IntoIterator, I::Item: Into<String>
    {
        iter.into_iter().for_each(|v| self.args.push(v.into()));
        self
    }

    /// Single line form for writing into a script file
    pub fn to_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Process command with the server directory as current directory
    pub fn to_command(&self, launch_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        // server writes its generated config relative to current directory
        cmd.current_dir(launch_dir);

        cmd
    }
}

/// Run script contents, the launch line followed by a pause so the window stays open
pub fn run_script(heap_gb: i64, windows: bool) -> String {
    let line = LaunchCommand::server(heap_gb.saturating_mul(1024)).to_line();

    if windows {
        format!("{line}\r\nPAUSE\r\n")
    } else {
        format!("#!/usr/bin/env sh\n{line}\nprintf 'Press enter to continue...'\nread _\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_line() {
        assert_eq!(
            LaunchCommand::server(2048).to_line(),
            "java -Xms2048M -Xmx2048M -jar server.jar nogui"
        );
    }

    #[test]
    fn run_script_heap_in_megabytes() {
        let script = run_script(2, false);
        assert!(script.contains("-Xms2048M -Xmx2048M"));
        assert!(script.starts_with("#!"));
        assert!(script.contains("\nread "));

        let script = run_script(6, true);
        assert!(script.starts_with("java -Xms6144M -Xmx6144M -jar server.jar nogui\r\n"));
        assert!(script.contains("PAUSE"));

        // absurd heap answers don't overflow
        assert!(run_script(i64::MAX, false).contains(&format!("-Xmx{}M", i64::MAX)));
    }

    #[test]
    fn command_runs_in_launch_dir() {
        let cmd = LaunchCommand::server(1024).to_command(Path::new("/srv/purpur"));

        assert_eq!(cmd.get_program(), "java");
        assert_eq!(cmd.get_current_dir(), Some(Path::new("/srv/purpur")));

        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, ["-Xms1024M", "-Xmx1024M", "-jar", "server.jar", "nogui"]);
    }
}
