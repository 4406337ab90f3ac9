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

use std::fmt;

/// Oldest "simple" version (ex. 1.15) purpur publishes builds for
const OLDEST_SIMPLE: u64 = 115;
/// Oldest "compound" version (ex. 1.14.1) purpur publishes builds for
const OLDEST_COMPOUND: u64 = 1141;

const AFFIRMATIVE: [&str; 5] = ["y", "yes", "true", "ok", "1"];

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Versions can only have 2-3 tokens, ex.: 1.24 or 1.24.4")]
    VersionTokens,
    #[error("Version can only contain numbers and dots, snapshots are not allowed")]
    VersionNotNumeric,
    #[error("The oldest allowed version is 1.14.1")]
    VersionTooOld,
    #[error("Only numbers are valid here, provided: {0}")]
    NotANumber(String),
    #[error("Only numbers can be provided for a seed")]
    InvalidSeed
}

/// Minecraft version accepted by the purpur download API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version(String);

impl Version {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn parse_version(text: &str) -> Result<Version, ValidationError> {
    let tokens = text.split('.').count();

    if !(2..=3).contains(&tokens) {
        return Err(ValidationError::VersionTokens);
    }

    let num = text.replace('.', "")
        .parse::<u64>()
        .map_err(|_| ValidationError::VersionNotNumeric)?;

    let floor = match tokens {
        2 => OLDEST_SIMPLE,
        _ => OLDEST_COMPOUND
    };

    if num < floor {
        return Err(ValidationError::VersionTooOld);
    }

    Ok(Version(text.to_string()))
}

/// Anything outside of the affirmative set is `false`, this never fails
pub fn parse_bool(text: &str) -> Result<bool, ValidationError> {
    let text = text.to_lowercase();
    Ok(AFFIRMATIVE.contains(&text.as_str()))
}

pub fn parse_number(text: &str) -> Result<i64, ValidationError> {
    text.parse::<i64>()
        .map_err(|_| ValidationError::NotANumber(text.to_string()))
}

pub fn parse_seed(text: &str) -> Result<i64, ValidationError> {
    text.parse::<i64>()
        .map_err(|_| ValidationError::InvalidSeed)
}

pub fn parse_text(text: &str) -> Result<String, ValidationError> {
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_token_count() {
        for text in ["1", "120", "1.20.4.1", "", "1.2.3.4.5"] {
            assert_eq!(parse_version(text), Err(ValidationError::VersionTokens), "{text}");
        }
    }

    #[test]
    fn version_simple_floor() {
        assert_eq!(parse_version("1.14"), Err(ValidationError::VersionTooOld));
        assert_eq!(parse_version("1.13"), Err(ValidationError::VersionTooOld));
        assert_eq!(parse_version("1.15").unwrap().as_str(), "1.15");
        assert_eq!(parse_version("1.21").unwrap().as_str(), "1.21");
    }

    #[test]
    fn version_compound_floor() {
        assert_eq!(parse_version("1.14.1").unwrap().as_str(), "1.14.1");
        assert_eq!(parse_version("1.20.4").unwrap().to_string(), "1.20.4");
        assert_eq!(parse_version("1.14.0"), Err(ValidationError::VersionTooOld));
        assert_eq!(parse_version("1.9.4"), Err(ValidationError::VersionTooOld));
    }

    #[test]
    fn version_not_numeric() {
        assert_eq!(parse_version("1.20-pre1"), Err(ValidationError::VersionNotNumeric));
        assert_eq!(parse_version("23w13a.1"), Err(ValidationError::VersionNotNumeric));
        assert_eq!(parse_version("1.x"), Err(ValidationError::VersionNotNumeric));
    }

    #[test]
    fn version_errors_name_the_rule() {
        assert!(ValidationError::VersionTokens.to_string().contains("2-3 tokens"));
        assert!(ValidationError::VersionNotNumeric.to_string().contains("numbers and dots"));
        assert!(ValidationError::VersionTooOld.to_string().contains("1.14.1"));
    }

    #[test]
    fn bool_affirmative() {
        for text in ["y", "Y", "yes", "YES", "true", "True", "ok", "OK", "1"] {
            assert_eq!(parse_bool(text), Ok(true), "{text}");
        }
    }

    #[test]
    fn bool_unrecognized_is_false() {
        // permissive on purpose, garbage is a "no" rather than an error
        for text in ["", "n", "no", "false", "0", "yep", "2", " y"] {
            assert_eq!(parse_bool(text), Ok(false), "{text}");
        }
    }

    #[test]
    fn number() {
        assert_eq!(parse_number("20"), Ok(20));
        assert_eq!(parse_number("-4"), Ok(-4));
        assert_eq!(parse_number("3000000000"), Ok(3_000_000_000));
        assert_eq!(parse_number("twenty"), Err(ValidationError::NotANumber("twenty".into())));
        assert_eq!(
            ValidationError::NotANumber("abc".into()).to_string(),
            "Only numbers are valid here, provided: abc"
        );
    }

    #[test]
    fn seed() {
        assert_eq!(parse_seed("-4172144997902289642"), Ok(-4172144997902289642));
        assert_eq!(parse_seed("0"), Ok(0));
        assert_eq!(parse_seed("seed"), Err(ValidationError::InvalidSeed));
        assert_eq!(parse_seed("99999999999999999999"), Err(ValidationError::InvalidSeed));
    }

    #[test]
    fn text_is_accepted() {
        assert_eq!(parse_text(""), Ok(String::new()));
        assert_eq!(parse_text("My Server"), Ok("My Server".to_string()));
    }
}
