//! Stdin prompts
//!
//! Plain line-based questions; no terminal UI.

use std::io::{self, Write};

use secrecy::SecretString;

use crate::error::{GitliftError, Result};

/// Ask a question, returning the trimmed answer
///
/// An empty answer falls back to `default` when one is given and is
/// rejected otherwise.
pub fn ask(question: &str, default: Option<&str>) -> Result<String> {
    match default {
        Some(d) => print!("{} [{}]: ", question, d),
        None => print!("{}: ", question),
    }
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let answer = input.trim();

    if answer.is_empty() {
        return match default {
            Some(d) => Ok(d.to_string()),
            None => Err(GitliftError::InvalidInput("No value provided".to_string())),
        };
    }

    Ok(answer.to_string())
}

/// Ask a question whose answer may be empty
pub fn ask_optional(question: &str) -> Result<String> {
    print!("{}: ", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

/// Ask for a secret; the answer is wrapped before it travels further
pub fn ask_secret(question: &str) -> Result<SecretString> {
    Ok(SecretString::from(ask(question, None)?))
}

/// Ask a yes/no question
pub fn confirm(question: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    print!("{} [{}]: ", question, hint);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let choice = input.trim().to_lowercase();

    Ok(match choice.as_str() {
        "" => default_yes,
        "y" | "yes" => true,
        _ => false,
    })
}
