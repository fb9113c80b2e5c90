//! Interactive read loop
//!
//! Reads one line at a time, parses it with a fresh [`Parser`], and prints
//! either the resulting trees (one per line) or the single diagnostic. The
//! literal line `.exit` (or end of input) ends the loop. A diagnostic never
//! ends the loop.
//!
//! [`Repl`] is generic over its reader and writer so tests can drive it with
//! in-memory buffers.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use crate::parser::unparse::unparse_program;
use crate::parser::{ParseError, Parser, Scanner};

pub const EXIT_COMMAND: &str = ".exit";

/// How parsed trees are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tree form, e.g. `BinaryExpression(+, IntLiteral(1), IntLiteral(2))`
    #[default]
    Tree,
    /// Re-serialized source text
    Source,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplConfig {
    /// Print the token stream of each line before its trees.
    pub show_tokens: bool,
    pub format: OutputFormat,
    /// Style the prompt and diagnostics with ANSI escapes.
    pub color: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_tokens: false,
            format: OutputFormat::Tree,
            color: true,
        }
    }
}

/// Parse one line and render its trees according to `format`.
pub fn render(line: &str, format: OutputFormat) -> Result<String, ParseError> {
    let program = Parser::new(line)?.parse_program()?;
    Ok(match format {
        OutputFormat::Tree => program.to_string(),
        OutputFormat::Source => unparse_program(&program),
    })
}

/// Render the token stream of one line, one token per line.
pub fn render_tokens(line: &str) -> Result<String, ParseError> {
    let tokens = Scanner::new(line)
        .map(|token| token.map(|t| t.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tokens.join("\n"))
}

pub struct Repl<R, W> {
    input: R,
    output: W,
    config: ReplConfig,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, config: ReplConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run until `.exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Welcome to pain version '{}'",
            env!("CARGO_PKG_VERSION")
        )?;

        let mut line = String::new();
        loop {
            self.prompt()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("end of input");
                break;
            }

            let line = line.trim_end_matches(['\n', '\r']);
            if line == EXIT_COMMAND {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            self.eval_line(line)?;
        }

        self.output.flush()
    }

    /// Parse one line and print its trees or its diagnostic.
    pub fn eval_line(&mut self, line: &str) -> io::Result<()> {
        tracing::debug!(line, "evaluating line");

        if self.config.show_tokens {
            match render_tokens(line) {
                Ok(tokens) => writeln!(self.output, "{}", tokens)?,
                Err(err) => self.diagnostic(&err)?,
            }
        }

        match render(line, self.config.format) {
            Ok(trees) if trees.is_empty() => Ok(()),
            Ok(trees) => writeln!(self.output, "{}", trees),
            Err(err) => self.diagnostic(&err),
        }
    }

    fn prompt(&mut self) -> io::Result<()> {
        if self.config.color {
            write!(self.output, "{}", "> ".bold())?;
        } else {
            write!(self.output, "> ")?;
        }
        self.output.flush()
    }

    fn diagnostic(&mut self, err: &ParseError) -> io::Result<()> {
        tracing::debug!(location = %err.location(), "parse failed");
        if self.config.color {
            writeln!(self.output, "{}", err.to_string().red())
        } else {
            writeln!(self.output, "{}", err)
        }
    }
}
