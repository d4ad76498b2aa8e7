//! Interactive yes/no confirmation for zenilib-clean
//!
//! A deletion is confirmed only by one of the literal answers `y`, `Y`,
//! `yes`, `YES` after trimming spaces, tabs, CR and LF. Everything else,
//! including an empty line or a closed input stream, declines.

use std::io::{BufRead, Write};

/// Answers that confirm a deletion. Mixed-case spellings like `Yes` are
/// rejected on purpose: only these four literals have ever been accepted.
const AFFIRMATIVE: [&str; 4] = ["y", "Y", "yes", "YES"];

/// Seam between the remover and whatever answers its questions.
pub trait Confirm {
    /// Ask whether to proceed with the described deletion.
    fn confirm(&mut self, question: &str) -> bool;
}

/// Confirms everything without interaction.
pub struct AutoAccept;

impl Confirm for AutoAccept {
    fn confirm(&mut self, _question: &str) -> bool {
        true
    }
}

/// Prompts on an output stream and reads one answer line per question.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompter<R, W> {
    fn confirm(&mut self, question: &str) -> bool {
        // A failed prompt write never counts as a confirmation.
        let _ = write!(self.output, "{} [y/N] ", question);
        let _ = self.output.flush();

        let mut line = String::new();
        let answered = match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_affirmative(&line),
        };
        let _ = writeln!(self.output);

        answered
    }
}

/// Check an answer line against the affirmative set, trimming exactly
/// space, tab, CR and LF from both ends.
fn is_affirmative(line: &str) -> bool {
    let trimmed = line.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
    AFFIRMATIVE.contains(&trimmed)
}
