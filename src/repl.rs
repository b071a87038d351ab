use std::borrow::Cow;
use std::io;
use std::io::BufRead;
use std::io::Write;

use crate::config::Config;
use crate::evaluator;
use crate::lexer::Lexer;
use crate::object::Environment;
use crate::parser::{Parser, ParserError};

pub const NO_VALUE_MESSAGE: &str = "Program could not be evaluated";

/// Reads `input` line by line until it is exhausted, writing each line's
/// result (or its parse errors) to `output`. Bindings made with `let` live
/// for the whole session. Bytes that are not UTF-8 are replaced with U+FFFD
/// and reach the parser as illegal tokens.
pub fn start<R, W>(mut input: R, mut output: W, config: &Config) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut env = Environment::new();
    let mut buf = Vec::new();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            tracing::debug!(bytes = buf.len(), "line is not valid UTF-8");
        }

        let lexer = Lexer::new(&line);
        let mut parser = Parser::with_max_depth(lexer, config.max_depth);

        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            tracing::debug!(errors = parser.errors().len(), "skipping evaluation");
            print_parser_errors(&mut output, parser.errors())?;
            continue;
        }

        match evaluator::eval(&program, &mut env) {
            Some(evaluated) => writeln!(output, "{}", evaluated)?,
            None => writeln!(output, "{}", NO_VALUE_MESSAGE)?,
        }

        tracing::debug!(bindings = env.len(), "evaluated line");
    }
}

fn print_parser_errors<W: Write>(output: &mut W, errors: &[ParserError]) -> io::Result<()> {
    for error in errors {
        writeln!(output, "\t{}", error)?;
    }
    Ok(())
}
