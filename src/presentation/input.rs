use crate::domain::parser;
use std::io::{self, BufRead, Write};

/// Blocking line-oriented console used by every drill flow.
///
/// Wraps a buffered input source and an output sink behind `dyn`
/// references so flows run identically over stdin/stdout and over
/// in-memory buffers in tests. Reads return `None` once input is
/// exhausted; flows treat that as a normal end of the session.
pub struct Console<'a> {
    reader: &'a mut dyn BufRead,
    writer: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(reader: &'a mut dyn BufRead, writer: &'a mut dyn Write) -> Self {
        Self { reader, writer }
    }

    /// Writes text without a trailing newline and flushes, so prompts
    /// appear before the blocking read.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    /// Reads one line, stripped of the line terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prints a prompt, then reads one line.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.print(text)?;
        self.read_line()
    }

    /// Prompts for an integer, re-asking until one parses.
    ///
    /// Returns `Ok(None)` only when input ends.
    pub fn prompt_integer(&mut self, text: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match parser::parse_integer(&line) {
                Some(number) => return Ok(Some(number)),
                None => self.println("Invalid number, try again")?,
            }
        }
    }

    /// Prompts for two whitespace-separated integers on one line,
    /// re-asking until both parse.
    pub fn prompt_integer_pair(&mut self, text: &str) -> io::Result<Option<(i64, i64)>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match parser::parse_integer_pair(&line) {
                Some(pair) => return Ok(Some(pair)),
                None => self.println("Invalid number, try again")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn with_console<T>(input: &str, run: impl FnOnce(&mut Console) -> T) -> (T, String) {
        let mut reader = Cursor::new(input.as_bytes());
        let mut writer: Vec<u8> = Vec::new();
        let mut console = Console::new(&mut reader, &mut writer);
        let result = run(&mut console);
        (result, String::from_utf8(writer).unwrap())
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let (line, _) = with_console("hello\nworld\n", |c| c.read_line().unwrap());
        assert_eq!(line, Some("hello".to_string()));
    }

    #[test]
    fn test_read_line_none_at_eof() {
        let (line, _) = with_console("", |c| c.read_line().unwrap());
        assert_eq!(line, None);
    }

    #[test]
    fn test_prompt_writes_before_reading() {
        let (line, output) = with_console("42\n", |c| c.prompt("Enter: ").unwrap());
        assert_eq!(line, Some("42".to_string()));
        assert_eq!(output, "Enter: ");
    }

    #[test]
    fn test_prompt_integer_retries_on_garbage() {
        let (number, output) = with_console("abc\n\n12\n", |c| {
            c.prompt_integer("Number: ").unwrap()
        });
        assert_eq!(number, Some(12));
        assert_eq!(output.matches("Invalid number, try again").count(), 2);
    }

    #[test]
    fn test_prompt_integer_gives_up_at_eof() {
        let (number, _) = with_console("nope\n", |c| c.prompt_integer("Number: ").unwrap());
        assert_eq!(number, None);
    }

    #[test]
    fn test_prompt_integer_pair() {
        let (pair, _) = with_console("3 4\n", |c| c.prompt_integer_pair("Point: ").unwrap());
        assert_eq!(pair, Some((3, 4)));
    }

    #[test]
    fn test_prompt_integer_pair_rejects_single_value() {
        let (pair, output) = with_console("3\n3 4\n", |c| {
            c.prompt_integer_pair("Point: ").unwrap()
        });
        assert_eq!(pair, Some((3, 4)));
        assert!(output.contains("Invalid number, try again"));
    }
}
