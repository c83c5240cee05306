//! # Input Module
//!
//! Player decisions during exploration: where to go next, yes/no questions and
//! "press enter" pauses between narrated steps.

pub mod commands;

pub use commands::*;

use crate::game::Direction;
use crate::{BurrowError, BurrowResult};
use std::io::{BufRead, Write};

/// Input collaborator consulted by exploration and room resolution.
pub trait Prompt {
    /// Presents a rendered view of the dungeon.
    fn show(&mut self, view: &str) -> BurrowResult<()>;

    /// Asks where to go. Only `available` directions may be returned, plus
    /// [`MovementChoice::BackOut`] when `allow_back_out` is set.
    fn choose_direction(
        &mut self,
        available: &[Direction],
        allow_back_out: bool,
    ) -> BurrowResult<MovementChoice>;

    /// Asks a yes/no question.
    fn confirm(&mut self, question: &str) -> BurrowResult<bool>;

    /// Shows a message and waits for the player to continue.
    fn acknowledge(&mut self, message: &str) -> BurrowResult<()>;
}

/// Line-based prompt over any reader and writer, normally stdin and stdout.
///
/// Invalid answers are reported and asked again; end of input becomes
/// [`BurrowError::InputClosed`].
pub struct TerminalPrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    /// Creates a prompt reading answers from `reader` and writing to `writer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{Direction, MovementChoice, Prompt, TerminalPrompt};
    ///
    /// let mut output = Vec::new();
    /// let mut prompt = TerminalPrompt::new("x\ne\n".as_bytes(), &mut output);
    /// let choice = prompt.choose_direction(&[Direction::East], true).unwrap();
    /// assert_eq!(choice, MovementChoice::Move(Direction::East));
    /// ```
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> BurrowResult<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(BurrowError::InputClosed);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn show(&mut self, view: &str) -> BurrowResult<()> {
        writeln!(self.writer, "{}", view)?;
        Ok(())
    }

    fn choose_direction(
        &mut self,
        available: &[Direction],
        allow_back_out: bool,
    ) -> BurrowResult<MovementChoice> {
        let mut options: Vec<String> = available
            .iter()
            .map(|&direction| format!("[{}] {}", direction_key(direction), direction))
            .collect();
        if allow_back_out {
            options.push("[b] back out".to_string());
        }

        loop {
            write!(self.writer, "Where to? {} > ", options.join("  "))?;
            self.writer.flush()?;

            match parse_movement(&self.read_line()?) {
                Some(MovementChoice::Move(direction)) if available.contains(&direction) => {
                    return Ok(MovementChoice::Move(direction));
                }
                Some(MovementChoice::BackOut) if allow_back_out => {
                    return Ok(MovementChoice::BackOut);
                }
                Some(MovementChoice::Move(direction)) => {
                    writeln!(self.writer, "There is no hallway to the {}.", direction)?;
                }
                _ => writeln!(self.writer, "Choose one of the listed options.")?,
            }
        }
    }

    fn confirm(&mut self, question: &str) -> BurrowResult<bool> {
        loop {
            write!(self.writer, "{} [y/n] > ", question)?;
            self.writer.flush()?;

            if let Some(answer) = parse_yes_no(&self.read_line()?) {
                return Ok(answer);
            }
        }
    }

    fn acknowledge(&mut self, message: &str) -> BurrowResult<()> {
        write!(self.writer, "{} (press enter) ", message)?;
        self.writer.flush()?;
        self.read_line()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_direction_is_asked_again() {
        let mut output = Vec::new();
        let mut prompt = TerminalPrompt::new("w\ns\n".as_bytes(), &mut output);

        let choice = prompt
            .choose_direction(&[Direction::East, Direction::South], false)
            .unwrap();
        assert_eq!(choice, MovementChoice::Move(Direction::South));

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("no hallway to the west"));
        assert!(!text.contains("back out"));
    }

    #[test]
    fn test_back_out_only_when_allowed() {
        let mut output = Vec::new();
        let mut prompt = TerminalPrompt::new("b\nb\n".as_bytes(), &mut output);
        assert!(prompt.choose_direction(&[], false).is_err());

        let mut prompt = TerminalPrompt::new("b\n".as_bytes(), Vec::new());
        assert_eq!(
            prompt.choose_direction(&[Direction::North], true).unwrap(),
            MovementChoice::BackOut
        );
    }

    #[test]
    fn test_confirm_retries_until_answer() {
        let mut prompt = TerminalPrompt::new("perhaps\nyes\n".as_bytes(), Vec::new());
        assert!(prompt.confirm("Inspect?").unwrap());
    }

    #[test]
    fn test_end_of_input() {
        let mut prompt = TerminalPrompt::new("".as_bytes(), Vec::new());
        assert!(matches!(
            prompt.acknowledge("The chest creaks open."),
            Err(BurrowError::InputClosed)
        ));
        assert!(matches!(prompt.confirm("Leave?"), Err(BurrowError::InputClosed)));
    }

    #[test]
    fn test_show_writes_view() {
        let mut output = Vec::new();
        TerminalPrompt::new("".as_bytes(), &mut output)
            .show("@-?")
            .unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "@-?\n");
    }
}
