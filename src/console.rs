use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::quiz::{QuizError, Reply};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Standard input was closed")]
    InputClosed,
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

pub type HandlerResult = Result<(), SessionError>;

/// Line-oriented prompt/response channel. Generic so sessions can be driven
/// from a script in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` followed by a newline.
    pub fn send_message(&mut self, text: impl AsRef<str>) -> HandlerResult {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Writes `text` without a newline and flushes so it shows before input.
    pub fn prompt(&mut self, text: impl AsRef<str>) -> HandlerResult {
        write!(self.output, "{}", text.as_ref())?;
        self.output.flush()?;
        Ok(())
    }

    /// Next trimmed line. Bytes that are not UTF-8 are replaced rather than
    /// failing the session, so the caller rejects the token and reprompts.
    pub fn receive(&mut self) -> Result<String, SessionError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    /// Reads until a number in `min..=max` arrives.
    pub fn receive_choice(&mut self, min: usize, max: usize) -> Result<usize, SessionError> {
        loop {
            let input = self.receive()?;
            if let Some(choice) = parse_choice(&input, min, max) {
                return Ok(choice);
            }
            log::debug!("Rejected menu input {:?}", input);
            self.prompt(format!(
                "Invalid input. Please enter a number between {} and {}: ",
                min, max
            ))?;
        }
    }

    /// Reads until a yes/no/back token arrives.
    pub fn receive_reply(&mut self) -> Result<Reply, SessionError> {
        loop {
            let input = self.receive()?;
            if let Some(reply) = Reply::parse(&input) {
                return Ok(reply);
            }
            log::debug!("Rejected reply {:?}", input);
            self.prompt("Invalid input. Please enter 'y', 'n', or 'back': ")?;
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

pub fn parse_choice(input: &str, min: usize, max: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|choice| (min..=max).contains(choice))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn parse_choice_checks_the_range() {
        assert_eq!(parse_choice("3", 1, 4), Some(3));
        assert_eq!(parse_choice(" 1 ", 1, 4), Some(1));
        assert_eq!(parse_choice("0", 1, 4), None);
        assert_eq!(parse_choice("5", 1, 4), None);
        assert_eq!(parse_choice("-1", 1, 4), None);
        assert_eq!(parse_choice("two", 1, 4), None);
        assert_eq!(parse_choice("", 1, 4), None);
    }

    #[test]
    fn receive_choice_reprompts_until_valid() {
        let mut console = console("abc\n9\n2\n");
        assert_eq!(console.receive_choice(1, 4).unwrap(), 2);
        let output = output(console);
        assert_eq!(
            output.matches("Invalid input. Please enter a number between 1 and 4: ").count(),
            2
        );
    }

    #[test]
    fn receive_reply_reprompts_until_valid() {
        let mut console = console("maybe\nBACK\n");
        assert_eq!(console.receive_reply().unwrap(), Reply::Back);
        assert!(output(console).contains("Please enter 'y', 'n', or 'back'"));
    }

    #[test]
    fn non_utf8_input_is_rejected_and_reprompted() {
        let mut console = Console::new(Cursor::new(b"\xff\xfe\ny\n".to_vec()), Vec::new());
        assert_eq!(console.receive_reply().unwrap(), Reply::Yes);
        assert_eq!(
            output(console).matches("Please enter 'y', 'n', or 'back'").count(),
            1
        );

        let mut console = Console::new(Cursor::new(b"\xc3\n3\n".to_vec()), Vec::new());
        assert_eq!(console.receive_choice(1, 4).unwrap(), 3);
    }

    #[test]
    fn closed_input_is_reported() {
        let mut console = console("nope\n");
        assert!(matches!(
            console.receive_reply(),
            Err(SessionError::InputClosed)
        ));
    }

    #[test]
    fn messages_end_with_newline_prompts_do_not() {
        let mut console = console("");
        console.send_message("hello").unwrap();
        console.prompt("choice: ").unwrap();
        assert_eq!(output(console), "hello\nchoice: ");
    }
}
