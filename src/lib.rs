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

mod answers;
mod artifact_client;
mod bootstrap;
pub mod env;
mod launch_cmd;
mod purpur_config;
mod server_instance;
mod server_properties;
pub mod validate;

pub use {
    answers::{ask, Answers, LinePrompter, Prompter},
    artifact_client::{ArtifactSource, FetchError, PurpurClient},
    bootstrap::{BootstrapError, JavaProcess, ServerProcess},
    launch_cmd::{run_script, LaunchCommand},
    purpur_config::{PatchError, PurpurConfig},
    server_instance::{Delays, ServerInstance, BOOTSTRAP_HEAP_MB},
    server_properties::ServerProperties,
    validate::{ValidationError, Version}
};

pub trait Progress {
    fn begin(&mut self, message: &'static str, total: usize);
    fn end(&mut self);
    fn advance(&mut self, current: usize);
}
