//! Interactive question browser
//!
//! Reads answers from any `BufRead` and writes to any `Write`, so the binary
//! wires it to stdin/stdout and tests drive it with scripted input.

use crate::error::Result;
use crate::text::{QuestionSelection, Segmentation};
use std::io::{BufRead, Write};

/// Write `message`, then read one trimmed line. `None` at end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn is_quit(answer: &str) -> bool {
    answer == "0" || answer.eq_ignore_ascii_case("q")
}

enum Flow {
    Continue,
    Exit,
}

pub struct Navigator<'a, R, W> {
    segmentation: &'a Segmentation,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Navigator<'a, R, W> {
    pub fn new(segmentation: &'a Segmentation, input: R, output: W) -> Self {
        Self {
            segmentation,
            input,
            output,
        }
    }

    /// Ask for question numbers until the user quits or input ends.
    ///
    /// Quitting during a sub-question pause only leaves that question.
    pub fn run(&mut self) -> Result<()> {
        let total = self.segmentation.question_count();
        let question_prompt = format!("Enter the question number (1-{}) or 0 to quit: ", total);

        loop {
            let Some(answer) = self.prompt(&question_prompt)? else {
                break;
            };
            if is_quit(&answer) {
                break;
            }

            let Ok(number) = answer.parse::<i64>() else {
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                continue;
            };
            // Negative numbers are well-formed but out of range, like 0
            let number = usize::try_from(number).unwrap_or(0);

            match self.segmentation.select_question(number) {
                Ok(question) => {
                    tracing::debug!(number, parts = question.subquestions.len(), "question selected");
                    if let Flow::Exit = self.walk(&question)? {
                        break;
                    }
                }
                Err(e) if e.is_recoverable() => writeln!(self.output, "{}", e)?,
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    /// Print the stem and each part, pausing after parts that end with marks
    fn walk(&mut self, question: &QuestionSelection) -> Result<Flow> {
        writeln!(self.output, "\nQuestion {}:", question.number)?;
        writeln!(self.output, "{}", question.stem)?;

        if question.subquestions.is_empty() {
            writeln!(self.output, "No subquestions available for this question.")?;
            return Ok(Flow::Continue);
        }

        for index in 0..question.subquestions.len() {
            let text = self.segmentation.display_subquestion(question, index);
            writeln!(self.output, "{}", text)?;

            if self.segmentation.ends_with_marks(&text) {
                match self.prompt("Press 0 to quit, or any other key to continue: ")? {
                    None => return Ok(Flow::Exit),
                    Some(answer) if is_quit(&answer) => break,
                    Some(_) => {}
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        prompt_line(&mut self.input, &mut self.output, message)
    }
}
