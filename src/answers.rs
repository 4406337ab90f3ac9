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

use std::io::{self, BufRead, Write};

use crate::validate::{
    parse_bool, parse_number, parse_seed, parse_text, parse_version,
    ValidationError, Version
};

/// Source of operator answers, one line of text per prompt
pub trait Prompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
    fn invalid(&mut self, err: &ValidationError) -> io::Result<()>;
}

/// Everything the operator told us, validated
#[derive(Debug, Clone, PartialEq)]
pub struct Answers {
    pub version: Version,
    pub offline: bool,
    pub max_players: i64,
    /// Heap size in gigabytes for the launcher script
    pub heap_gb: i64,
    pub simulation_distance: i64,
    pub view_distance: i64,
    pub hardcore: bool,
    pub server_name: String,
    pub keepalive: bool,
    pub whitelist: bool,
    pub seed: Option<i64>
}

impl Answers {
    /// Prompt for every answer in order, asking again until each one is valid
    pub fn collect(prompter: &mut impl Prompter) -> io::Result<Self> {
        let version = ask(prompter, "Version: ", parse_version)?;
        let offline = ask(prompter, "Should we run on offline mode (extremely discouraged)? ", parse_bool)?;
        let max_players = ask(prompter, "Maximum Allowed players: ", parse_number)?;
        let heap_gb = ask(prompter, "How many gigabytes should be used to the server (recommended: 2)? ", parse_number)?;
        let simulation_distance = ask(prompter, "How far should the server tick (Simulation Distance, recommended: 4): ", parse_number)?;
        let view_distance = ask(prompter, "How far should players be allowed to render (View Distance [2-31], recommended: [10 - 16])? ", parse_number)?;
        let hardcore = ask(prompter, "Should the server be on Hardcore mode? ", parse_bool)?;
        let server_name = ask(prompter, "Server Name: ", parse_text)?;
        let keepalive = ask(prompter, "Should we use Purpur's alternate keep alive (recommended)? ", parse_bool)?;
        let whitelist = ask(prompter, "Should we enable/enforce whitelist? ", parse_bool)?;

        let seed = if ask(prompter, "You want to provide us a custom seed for world generation? ", parse_bool)? {
            Some(ask(prompter, "Provide your custom seed: ", parse_seed)?)
        } else {
            None
        };

        Ok(Self {
            version,
            offline,
            max_players,
            heap_gb,
            simulation_distance,
            view_distance,
            hardcore,
            server_name,
            keepalive,
            whitelist,
            seed
        })
    }
}

/// Read and validate one answer, validation errors never leave this loop
pub fn ask<T, P, F>(prompter: &mut P, prompt: &str, validate: F) -> io::Result<T>
    where P: Prompter + ?Sized, F: Fn(&str) -> Result<T, ValidationError>
{
    loop {
        let line = prompter.read_line(prompt)?;

        match validate(line.trim()) {
            Ok(value) => return Ok(value),
            Err(e) => prompter.invalid(&e)?
        }
    }
}

/// Plain line oriented prompter for piped or scripted input
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before all questions were answered"
            ));
        }

        Ok(line)
    }

    fn invalid(&mut self, err: &ValidationError) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{err}")
    }
}
