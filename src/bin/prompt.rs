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

use std::io;

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input};

use purpur_setup::{Prompter, ValidationError};

/// Interactive prompts for when a person is at the terminal
pub struct TermPrompter {
    theme: ColorfulTheme,
    term: Term
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stderr()
        }
    }
}

impl Prompter for TermPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        // theme draws its own separator after the prompt
        let prompt = prompt.trim_end().trim_end_matches(':');

        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(io::Error::other)
    }

    fn invalid(&mut self, err: &ValidationError) -> io::Result<()> {
        self.term.write_line(&style(err).red().to_string())
    }
}
