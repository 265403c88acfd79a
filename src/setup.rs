//! Interactive prompts for the `log` command.
//!
//! Each prompt loops until it gets acceptable input, mirroring the validation
//! the store applies. The functions take a reader and a writer so they can be
//! driven from stdin/stdout or from an in-memory buffer in tests.

use crate::errors::{AppError, AppResult};
use crate::mood_core::{self, MoodEntry};
use crate::store::OverwriteDecision;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Reads one trimmed line, failing on end of input.
fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> AppResult<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before an answer was given",
        )));
    }
    Ok(line.trim().to_string())
}

/// Prompts the user for a yes/no answer with a default.
///
/// # Arguments
///
/// * `question` - The question to ask
/// * `default` - Default answer if user just presses Enter
///
/// # Returns
///
/// Returns `true` for yes, `false` for no.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: bool,
) -> AppResult<bool> {
    let prompt = if default {
        format!("{} [Y/n] ", question)
    } else {
        format!("{} [y/N] ", question)
    };

    loop {
        match read_line(input, output, &prompt)?.to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please answer yes or no.")?,
        }
    }
}

/// Asks for a mood until it names a vocabulary mood, returning the raw answer.
pub fn prompt_mood<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> AppResult<String> {
    loop {
        let answer = read_line(
            input,
            output,
            "How are you feeling today? (e.g., Happy, Sad, Anxious): ",
        )?;
        match mood_core::validate_mood(&answer) {
            Ok(_) => return Ok(answer),
            Err(e) => {
                debug!("Rejected mood input: {}", e);
                writeln!(output, "Invalid input: {}", e)?;
            }
        }
    }
}

/// Asks for a comma-separated activity list until at least one is given.
pub fn prompt_activities<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> AppResult<String> {
    loop {
        let answer = read_line(
            input,
            output,
            "What activities did you do today? (comma-separated): ",
        )?;
        match mood_core::parse_activities(&answer) {
            Ok(_) => return Ok(answer),
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

/// Asks for optional notes; an empty answer is accepted.
pub fn prompt_notes<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> AppResult<String> {
    read_line(input, output, "Any additional notes or comments: ")
}

/// Overwrite decision answered on the terminal.
///
/// An unreadable answer counts as "no", so a closed stdin never replaces data.
pub struct PromptOverwrite<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptOverwrite<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptOverwrite<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> OverwriteDecision for PromptOverwrite<R, W> {
    fn confirm_overwrite(&mut self, existing: &MoodEntry) -> bool {
        let question = format!(
            "An entry for {} already exists ({}). Do you want to overwrite it?",
            existing.date, existing.mood
        );
        match prompt_yes_no(&mut self.input, &mut self.output, &question, false) {
            Ok(answer) => answer,
            Err(e) => {
                debug!("Overwrite prompt failed, keeping existing entry: {}", e);
                false
            }
        }
    }
}
