//! The Day 3 mini project: a menu that adds or subtracts two numbers until
//! the user picks "Exit".

use std::io::Write;

use clap::ValueEnum;
use log::{debug, info};

use crate::error::{MenuError, Result};
use crate::input::{InputSource, prompt};

pub const HEADER: &str = "--- Simple Calculator ---";
pub const OPTIONS: [&str; 3] = ["1. Add two numbers", "2. Subtract two numbers", "3. Exit"];

/// What to do when a number was expected and something else was typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OnInvalidInput {
    /// Stop with an error naming the bad token.
    #[default]
    Fail,
    /// Tell the user, throw away the rest of the line and ask again.
    Retry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    /// Widened to `i64` so no pair of `i32` operands can overflow.
    pub fn apply(self, a: i32, b: i32) -> i64 {
        match self {
            Operation::Add => i64::from(a) + i64::from(b),
            Operation::Subtract => i64::from(a) - i64::from(b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Calculate(Operation),
    Exit,
    Unknown(i32),
}

impl From<i32> for Choice {
    fn from(n: i32) -> Self {
        match n {
            1 => Choice::Calculate(Operation::Add),
            2 => Choice::Calculate(Operation::Subtract),
            3 => Choice::Exit,
            other => Choice::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Session {
    Running,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub calculations: usize,
    pub invalid_choices: usize,
}

pub struct Calculator<I, W> {
    input: I,
    out: W,
    on_invalid_input: OnInvalidInput,
}

impl<I: InputSource, W: Write> Calculator<I, W> {
    pub fn new(input: I, out: W) -> Self {
        Self {
            input,
            out,
            on_invalid_input: OnInvalidInput::default(),
        }
    }

    pub fn on_invalid_input(mut self, policy: OnInvalidInput) -> Self {
        self.on_invalid_input = policy;
        self
    }

    /// Runs the menu until the user exits. Consumes the calculator so the
    /// input it holds is released when the loop is over.
    pub fn run(mut self) -> Result<SessionStats> {
        let mut stats = SessionStats::default();
        let mut session = Session::Running;

        while session == Session::Running {
            self.show_menu()?;
            let choice = Choice::from(self.read_number("Choice (1-3): ", "a menu choice")?);
            debug!("menu choice: {:?}", choice);

            session = match choice {
                Choice::Calculate(op) => {
                    let a = self.read_number("First number: ", "the first number")?;
                    let b = self.read_number("Second number: ", "the second number")?;
                    writeln!(self.out, "Result: {}", op.apply(a, b))?;
                    stats.calculations += 1;
                    Session::Running
                }
                Choice::Exit => {
                    writeln!(self.out, "Bye!")?;
                    Session::Terminated
                }
                Choice::Unknown(n) => {
                    debug!("no menu entry for {}", n);
                    writeln!(self.out, "Invalid choice.")?;
                    stats.invalid_choices += 1;
                    Session::Running
                }
            };
        }

        self.out.flush()?;
        info!(
            "calculator session ended after {} calculation(s), {} invalid choice(s)",
            stats.calculations, stats.invalid_choices
        );
        Ok(stats)
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", HEADER)?;
        for line in OPTIONS {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn read_number(&mut self, text: &str, expected: &'static str) -> Result<i32> {
        loop {
            prompt(&mut self.out, text)?;
            let token = self
                .input
                .next_token()?
                .ok_or(MenuError::EndOfInput { expected })?;

            match token.parse::<i32>() {
                Ok(n) => return Ok(n),
                Err(_) if self.on_invalid_input == OnInvalidInput::Retry => {
                    debug!("rejected {:?} while reading {}", token, expected);
                    self.input.discard_line();
                    writeln!(self.out, "Please enter a whole number.")?;
                }
                Err(_) => return Err(MenuError::NotANumber { expected, token }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TokenReader;

    fn run(script: &str) -> (Result<SessionStats>, String) {
        let mut out = Vec::new();
        let result = Calculator::new(TokenReader::new(script.as_bytes()), &mut out).run();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn choices_map_to_actions() {
        assert_eq!(Choice::from(1), Choice::Calculate(Operation::Add));
        assert_eq!(Choice::from(2), Choice::Calculate(Operation::Subtract));
        assert_eq!(Choice::from(3), Choice::Exit);
        assert_eq!(Choice::from(0), Choice::Unknown(0));
        assert_eq!(Choice::from(-3), Choice::Unknown(-3));
    }

    #[test]
    fn operations_do_not_overflow() {
        assert_eq!(Operation::Add.apply(i32::MAX, i32::MAX), 4_294_967_294);
        assert_eq!(Operation::Subtract.apply(i32::MIN, i32::MAX), -4_294_967_295);
    }

    #[test]
    fn exit_right_away() {
        let (result, out) = run("3\n");
        assert_eq!(result.unwrap(), SessionStats::default());
        assert!(out.ends_with("Choice (1-3): Bye!\n"));
        assert_eq!(out.matches(HEADER).count(), 1);
    }

    #[test]
    fn menu_is_shown_every_round() {
        let (result, out) = run("1 1 1\n2 5 2\n3\n");
        let stats = result.unwrap();
        assert_eq!(stats.calculations, 2);
        assert_eq!(out.matches(HEADER).count(), 3);
        assert_eq!(out.matches("2. Subtract two numbers\n").count(), 3);
        assert!(out.contains("Result: 2\n"));
        assert!(out.contains("Result: 3\n"));
    }

    #[test]
    fn menu_block_is_exact() {
        let (_, out) = run("3\n");
        assert!(out.starts_with(
            "\n--- Simple Calculator ---\n1. Add two numbers\n2. Subtract two numbers\n3. Exit\nChoice (1-3): "
        ));
    }

    #[test]
    fn prompts_for_both_operands() {
        let (_, out) = run("1 4 5 3");
        assert!(out.contains("Choice (1-3): First number: Second number: Result: 9\n"));
    }

    #[test]
    fn unknown_choice_is_counted() {
        let (result, out) = run("0 7 3");
        assert_eq!(result.unwrap().invalid_choices, 2);
        assert_eq!(out.matches("Invalid choice.\n").count(), 2);
    }

    #[test]
    fn bad_choice_fails_fast_by_default() {
        let (result, out) = run("add\n");
        match result {
            Err(MenuError::NotANumber { expected, token }) => {
                assert_eq!(expected, "a menu choice");
                assert_eq!(token, "add");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!out.contains("Bye!"));
    }

    #[test]
    fn out_of_range_operand_is_not_a_number() {
        let (result, _) = run("1 3000000000 1 3");
        assert!(matches!(
            result,
            Err(MenuError::NotANumber { expected: "the first number", .. })
        ));
    }

    #[test]
    fn retry_discards_rest_of_line() {
        let mut out = Vec::new();
        let stats = Calculator::new(TokenReader::new("1 x y\n2 3\n3\n".as_bytes()), &mut out)
            .on_invalid_input(OnInvalidInput::Retry)
            .run()
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(stats.calculations, 1);
        assert_eq!(out.matches("Please enter a whole number.\n").count(), 1);
        assert!(out.contains("Result: 5\n"));
    }

    #[test]
    fn end_of_input_mid_calculation() {
        let (result, _) = run("2 10");
        assert!(matches!(
            result,
            Err(MenuError::EndOfInput { expected: "the second number" })
        ));
    }
}
