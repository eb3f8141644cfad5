//! Day 1 to Day 3 exercises. Each one just prints; the grade analyzer is the
//! only one that reads input.

use std::io::Write;

use clap::ValueEnum;
use log::debug;

use crate::error::Result;
use crate::input::{InputSource, prompt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lesson {
    /// Day 1: print a message and some variables
    HelloWorld,
    /// Day 2: if/else, a for loop and a while loop
    ControlFlow,
    /// Day 2: define and call functions
    Functions,
    /// Day 3: iterate over arrays
    ArraysAndLoops,
    /// Day 3: read scores and report count, total and average
    GradeAnalyzer,
}

impl Lesson {
    pub const ALL: [Lesson; 5] = [
        Lesson::HelloWorld,
        Lesson::ControlFlow,
        Lesson::Functions,
        Lesson::ArraysAndLoops,
        Lesson::GradeAnalyzer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Lesson::HelloWorld => "hello-world",
            Lesson::ControlFlow => "control-flow",
            Lesson::Functions => "functions",
            Lesson::ArraysAndLoops => "arrays-and-loops",
            Lesson::GradeAnalyzer => "grade-analyzer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Lesson::HelloWorld => "Day 1: print a message and some variables",
            Lesson::ControlFlow => "Day 2: if/else, a for loop and a while loop",
            Lesson::Functions => "Day 2: define and call functions",
            Lesson::ArraysAndLoops => "Day 3: iterate over arrays",
            Lesson::GradeAnalyzer => "Day 3: read scores and report count, total and average",
        }
    }

    pub fn run<I: InputSource, W: Write>(self, input: &mut I, out: &mut W) -> Result<()> {
        debug!("running lesson {}", self.name());
        match self {
            Lesson::HelloWorld => hello_world(out)?,
            Lesson::ControlFlow => control_flow(out)?,
            Lesson::Functions => functions(out)?,
            Lesson::ArraysAndLoops => arrays_and_loops(out)?,
            Lesson::GradeAnalyzer => grade_analyzer(input, out)?,
        }
        out.flush()?;
        Ok(())
    }
}

fn hello_world<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Hello, World!")?;

    let name = "Student";
    let age = 20;
    writeln!(out, "Name: {}, Age: {}", name, age)?;
    Ok(())
}

pub fn grade(score: u32) -> &'static str {
    if score >= 80 {
        "A"
    } else if score >= 60 {
        "B"
    } else {
        "C or below"
    }
}

fn control_flow<W: Write>(out: &mut W) -> Result<()> {
    let score = 75;
    writeln!(out, "Grade: {}", grade(score))?;

    write!(out, "Count 1 to 5: ")?;
    for i in 1..=5 {
        write!(out, "{} ", i)?;
    }
    writeln!(out)?;

    let mut n = 3;
    while n > 0 {
        writeln!(out, "Countdown: {}", n)?;
        n -= 1;
    }
    Ok(())
}

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn greet<W: Write>(out: &mut W, name: &str) -> Result<()> {
    writeln!(out, "Hello, {}!", name)?;
    Ok(())
}

fn functions<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "add(10, 20) = {}", add(10, 20))?;
    greet(out, "Student")
}

fn arrays_and_loops<W: Write>(out: &mut W) -> Result<()> {
    let numbers = [10, 20, 30, 40, 50];

    write!(out, "Numbers: ")?;
    for i in 0..numbers.len() {
        write!(out, "{} ", numbers[i])?;
    }
    writeln!(out)?;

    write!(out, "Again:   ")?;
    for n in numbers {
        write!(out, "{} ", n)?;
    }
    writeln!(out)?;

    let names = ["Alice", "Bob", "Carol"];
    for name in names {
        writeln!(out, "Hello, {}", name)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub count: usize,
    pub total: f64,
    pub average: f64,
}

pub fn summarize(scores: &[f64]) -> Option<ScoreSummary> {
    if scores.is_empty() {
        return None;
    }
    let total: f64 = scores.iter().sum();
    Some(ScoreSummary {
        count: scores.len(),
        total,
        average: total / scores.len() as f64,
    })
}

/// Formats a float the way the exercise's reference output does: whole
/// values keep a trailing `.0`.
pub fn format_total(total: f64) -> String {
    if total.is_finite() && total.fract() == 0.0 {
        format!("{:.1}", total)
    } else {
        total.to_string()
    }
}

// One score per line. Input ends at "done" or when stdin runs out.
fn grade_analyzer<I: InputSource, W: Write>(input: &mut I, out: &mut W) -> Result<()> {
    let mut scores = Vec::new();
    writeln!(out, "Enter scores (one per line). Type 'done' when finished.")?;
    loop {
        prompt(out, "Score: ")?;
        let Some(line) = input.next_line()? else {
            writeln!(out)?;
            break;
        };
        if line.eq_ignore_ascii_case("done") {
            break;
        }
        match line.parse::<f64>() {
            Ok(score) => scores.push(score),
            Err(_) => writeln!(out, "Not a number, try again.")?,
        }
    }

    match summarize(&scores) {
        None => writeln!(out, "No scores entered.")?,
        Some(summary) => writeln!(
            out,
            "\nCount: {}, Total: {}, Average: {:.2}",
            summary.count,
            format_total(summary.total),
            summary.average
        )?,
    }
    Ok(())
}
