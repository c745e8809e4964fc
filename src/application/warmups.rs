//! Warm-up drills: fixed number printing, geometric series summation,
//! and the bounded double-echo prompt.
//!
//! Unlike the kiosk, the double-echo drill keeps re-asking on invalid
//! input instead of aborting; the two policies are intentional.

use crate::domain::parser;
use crate::domain::services::{echo_twice, geometric_series_sum};
use crate::presentation::Console;
use std::io;

const DOUBLE_LOWER: i64 = 0;
const DOUBLE_UPPER: i64 = 172486;

/// Prints a fixed demonstration sequence: two numbers, their sum, and a
/// literal.
pub fn run_numbers(console: &mut Console) -> io::Result<()> {
    let first = -1;
    let second = 46;
    for number in [first, second, first + second, 6] {
        console.println(&number.to_string())?;
    }
    Ok(())
}

/// Reads the series parameters and prints the sum of its first elements.
pub fn run_series(console: &mut Console) -> io::Result<()> {
    let Some(first) = console.prompt_integer("Enter first element of the series: ")? else {
        return Ok(());
    };
    let Some(ratio) = console.prompt_integer("Enter the series ratio: ")? else {
        return Ok(());
    };
    let Some(count) = console.prompt_integer("Enter number of elements: ")? else {
        return Ok(());
    };
    let sum = geometric_series_sum(first, ratio, count);
    console.println(&format!("The sum of the first {count} elements is {sum}"))
}

/// Reads a number within fixed bounds, retrying until valid, then prints
/// it twice in a row.
pub fn run_double(console: &mut Console) -> io::Result<()> {
    console.println("Welcome to my cool program!")?;
    console.println("My program gets a number from you - and prints it twice in a row!")?;
    loop {
        let prompt = format!("Please enter a number between {DOUBLE_LOWER} - {DOUBLE_UPPER}: ");
        let Some(line) = console.prompt(&prompt)? else {
            return Ok(());
        };
        match parser::parse_integer(&line) {
            Some(number) if (DOUBLE_LOWER..=DOUBLE_UPPER).contains(&number) => {
                return console
                    .println(&format!("The number twice in a row: {}", echo_twice(number)));
            }
            _ => console.println("Invalid choice!")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, flow: fn(&mut Console) -> io::Result<()>) -> String {
        let mut reader = Cursor::new(input.as_bytes());
        let mut writer: Vec<u8> = Vec::new();
        let mut console = Console::new(&mut reader, &mut writer);
        flow(&mut console).unwrap();
        String::from_utf8(writer).unwrap()
    }

    #[test]
    fn test_numbers_prints_fixed_sequence() {
        assert_eq!(run("", run_numbers), "-1\n46\n45\n6\n");
    }

    #[test]
    fn test_series_sums_five_doublings() {
        let output = run("1\n2\n5\n", run_series);
        assert!(output.contains("The sum of the first 5 elements is 31"));
    }

    #[test]
    fn test_series_with_zero_elements() {
        let output = run("4\n3\n0\n", run_series);
        assert!(output.contains("The sum of the first 0 elements is 0"));
    }

    #[test]
    fn test_series_stops_quietly_at_eof() {
        let output = run("1\n", run_series);
        assert!(!output.contains("The sum"));
    }

    #[test]
    fn test_double_echoes_valid_number() {
        let output = run("5\n", run_double);
        assert!(output.contains("The number twice in a row: 55"));
    }

    #[test]
    fn test_double_retries_until_valid() {
        let output = run("-1\n200000\nabc\n42\n", run_double);
        assert_eq!(output.matches("Invalid choice!").count(), 3);
        assert!(output.contains("The number twice in a row: 4242"));
    }

    #[test]
    fn test_double_accepts_bounds() {
        let output = run("0\n", run_double);
        assert!(output.contains("The number twice in a row: 00"));
        let output = run("172486\n", run_double);
        assert!(output.contains("The number twice in a row: 172486172486"));
    }

    #[test]
    fn test_double_gives_up_at_eof() {
        let output = run("nope\n", run_double);
        assert!(output.contains("Invalid choice!"));
        assert!(!output.contains("twice in a row:"));
    }
}
