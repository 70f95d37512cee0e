use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::domain::geometry::Position;
use crate::domain::user::validate_phone_number;
use crate::error::Result;

/// Parses `x,y` into a position. Whitespace around either coordinate is ignored.
pub fn parse_position(text: &str) -> Option<Position> {
    let (x, y) = text.trim().split_once(',')?;
    let x = x.trim().parse::<f64>().ok()?;
    let y = y.trim().parse::<f64>().ok()?;
    let position = Position::new(x, y);
    position.validate().ok().map(|_| position)
}

/// Phone check run before prompting for the rest of the user's details.
pub fn is_plausible_phone(text: &str) -> bool {
    validate_phone_number(text).is_ok()
}

/// Line-oriented prompt reader over any reader/writer pair.
///
/// Every `read_*` method returns `Ok(None)` once input is exhausted.
pub struct Prompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompts until the line parses as `T`.
    pub fn read_number<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }

    /// Re-prompts until the line parses as `x,y`.
    pub fn read_position(&mut self, prompt: &str) -> Result<Option<Position>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse_position(&line) {
                Some(position) => return Ok(Some(position)),
                None => self.say("Invalid format. Please enter coordinates as 'x,y' (e.g., 10,20).")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("10,20"), Some(Position::new(10.0, 20.0)));
        assert_eq!(parse_position(" -1.5 , 3 "), Some(Position::new(-1.5, 3.0)));
        assert_eq!(parse_position("10"), None);
        assert_eq!(parse_position("a,b"), None);
        assert_eq!(parse_position("1,2,3"), None);
        assert_eq!(parse_position("NaN,1"), None);
    }

    #[test]
    fn test_phone_precheck() {
        assert!(is_plausible_phone("5551234"));
        assert!(!is_plausible_phone("555123"));
        assert!(!is_plausible_phone("555123a"));

        for phone in ["5551234", "555123", "", "12345678901", "555 1234", "+5551234"] {
            assert_eq!(is_plausible_phone(phone), validate_phone_number(phone).is_ok(), "Pre-check disagrees on '{}'", phone);
        }
    }

    #[test]
    fn test_read_number_reprompts_until_valid() {
        let input = Cursor::new("abc\n\n42.5\n");
        let mut prompter = Prompter::new(input, Vec::new());

        let value: Option<f64> = prompter.read_number("Height: ").unwrap();

        assert_eq!(value, Some(42.5));
        let output = String::from_utf8(prompter.into_writer()).unwrap();
        assert_eq!(output.matches("Invalid input").count(), 2);
    }

    #[test]
    fn test_read_position_at_end_of_input() {
        let input = Cursor::new("oops\n");
        let mut prompter = Prompter::new(input, Vec::new());

        assert_eq!(prompter.read_position("Pos: ").unwrap(), None);
    }
}
