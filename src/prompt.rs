//! Interactive validate-and-loop prompts.
//!
//! Every prompt rejects until the input matches its fixed set
//! (case-insensitive) and re-prompts with a short correction message —
//! invalid input is recovered locally, never surfaced as a failure. EOF on
//! the input stream returns `Ok(None)` so the session can end cleanly
//! instead of spinning on a closed pipe.

use std::io::{self, BufRead, Write};

use crate::data::filter::{DayFilter, MonthFilter};
use crate::data::model::City;

/// Ask once and read one trimmed line; `None` on EOF.
fn ask(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Re-prompt until `parse` accepts the input; `None` on EOF.
fn ask_until<T>(
    input: &mut impl BufRead,
    prompt: &str,
    retry: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> io::Result<Option<T>> {
    loop {
        let Some(line) = ask(input, prompt)? else {
            return Ok(None);
        };
        if let Some(value) = parse(&line) {
            return Ok(Some(value));
        }
        println!("{retry}");
    }
}

pub fn read_city(input: &mut impl BufRead) -> io::Result<Option<City>> {
    ask_until(
        input,
        "What is the city that you want to analyze? ",
        "Try again - this database only covers Chicago, New York City, and Washington.",
        |line| line.parse::<City>().ok(),
    )
}

pub fn read_month(input: &mut impl BufRead) -> io::Result<Option<MonthFilter>> {
    ask_until(
        input,
        "What month do you want to analyze? (or 'all' to include every month) ",
        "Try again - input a month name or 'all'.",
        MonthFilter::parse,
    )
}

pub fn read_day(input: &mut impl BufRead) -> io::Result<Option<DayFilter>> {
    ask_until(
        input,
        "Day of the week you want to analyze? (or 'all' to include the entire week) ",
        "Try again - input a weekday name or 'all'.",
        DayFilter::parse,
    )
}

/// `yes`/`no` question; anything else re-prompts.
pub fn read_yes_no(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<bool>> {
    ask_until(
        input,
        prompt,
        "Invalid input. Please enter 'yes' or 'no'.",
        |line| {
            if line.eq_ignore_ascii_case("yes") {
                Some(true)
            } else if line.eq_ignore_ascii_case("no") {
                Some(false)
            } else {
                None
            }
        },
    )
}
