use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use virtreg::{PowerTable, Register};

/// Sums doubles read from stdin both in `f64` and in the virtual register.
#[derive(Debug, Clone, Parser)]
#[command(name = "virtreg", version)]
pub struct Args {
    /// Print the register's bits after every addition
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of values to read, `0` reads until end of input
    #[arg(short = 'n', long, default_value_t = 3)]
    pub count: usize,

    #[arg(value_enum, hide = true)]
    pub mode: Option<Mode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Verbose,
}

impl Args {
    #[inline]
    pub fn show_bits(&self) -> bool {
        self.verbose || self.mode == Some(Mode::Verbose)
    }
}

/// Runs the demo. Unless `interactive`, a newline follows every echoed
/// prompt, since piped input does not end the prompt line.
pub fn run<R, W>(args: &Args, input: R, mut out: W, interactive: bool) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let table = PowerTable::global();
    writeln!(out, "Register minimum: {:e}", table.min())?;
    writeln!(out, "Register maximum: {:e}", table.max())?;

    let mut sum = 0.0_f64;
    let mut reg = Register::new(table);
    let mut lines = input.lines().enumerate();

    let mut k = 1;
    while args.count == 0 || k <= args.count {
        write!(out, "\nEnter double {k}: ")?;
        out.flush()?;

        let Some(value) = next_value(&mut lines)? else {
            tracing::debug!(read = k - 1, "end of input");
            writeln!(out)?;
            break;
        };
        if !interactive {
            writeln!(out)?;
        }

        sum += value;
        if reg.add(value) {
            virtreg::write_overflow_warning(&mut out)?;
        }
        if args.show_bits() {
            reg.write_bits(&mut out)?;
        }
        writeln!(out, "Floating point sum: {sum:e}")?;
        writeln!(out, "Virtual register sum: {reg:e}")?;
        k += 1;
    }

    Ok(())
}

/// Next non-blank line parsed as `f64`, `None` at end of input.
fn next_value<I, E>(lines: &mut I) -> Result<Option<f64>>
where
    I: Iterator<Item = (usize, Result<String, E>)>,
    E: std::error::Error + Send + Sync + 'static,
{
    for (i, line) in lines {
        let line = line.context("read input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value = line
            .parse()
            .with_context(|| format!("line {}: invalid double {line:?}", i + 1))?;
        return Ok(Some(value));
    }
    Ok(None)
}
