//! The interactive menu loop.
//!
//! Contract with the core: present the numbered menu, read each numeric
//! parameter as its own line, call the matching function, print the result
//! after an `OUT:` label, read and discard one trailing "delay" integer,
//! repeat. Core errors are reported and the loop returns to the menu. The
//! loop stops on end-of-input or an explicit `q`/`quit` entry.

use std::io::{BufRead, Write};

use discreta_prob::{dbinom, dhyper, dnbinom, pbinom, phyper, pnbinom, DistError};
use tracing::debug;

const MENU: &str = "1:dnbinom  2:pnbinom\n3:dbinom   4:pbinom\n5:dhyper   6:phyper\nq:quit";

/// Outcome of one menu round.
enum Round {
    /// The core was invoked; its result (or validation error) is reported.
    Evaluated(Result<f64, DistError>),
    /// A parameter line failed to parse; reported already, back to the menu.
    Malformed,
    /// Input ended mid-round.
    Eof,
}

/// Drive the menu loop over arbitrary reader/writer pairs. `main` passes
/// locked stdin/stdout; tests pass cursors.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<()> {
    loop {
        writeln!(output, "{MENU}")?;
        let Some(line) = read_line(input)? else {
            break;
        };
        let choice = line.trim();
        if choice.is_empty() {
            continue;
        }
        if choice.eq_ignore_ascii_case("q") || choice.eq_ignore_ascii_case("quit") {
            break;
        }
        debug!(choice, "dispatching menu selection");

        let round = match choice {
            "1" => {
                writeln!(output, "k, r, p")?;
                with_int_int_prob(input, output, |k, r, p| dnbinom(k, r, p))?
            }
            "2" => {
                writeln!(output, "x, size, prob")?;
                with_int_int_prob(input, output, |x, size, prob| pnbinom(x, size, prob))?
            }
            "3" => {
                writeln!(output, "x, size, prob")?;
                with_int_int_prob(input, output, |x, size, prob| dbinom(x, size, prob))?
            }
            "4" => {
                writeln!(output, "q, size, prob")?;
                with_int_int_prob(input, output, |q, size, prob| pbinom(q, size, prob, true))?
            }
            "5" => {
                writeln!(output, "x, m, n, k")?;
                with_four_ints(input, output, |x, m, n, k| dhyper(x, m, n, k))?
            }
            "6" => {
                writeln!(output, "x, M1, M2, n1")?;
                with_four_ints(input, output, |x, m1, m2, n1| phyper(x, m1, m2, n1))?
            }
            other => {
                writeln!(output, "no such operation: {other}")?;
                continue;
            }
        };

        match round {
            Round::Evaluated(Ok(value)) => writeln!(output, "OUT: {value}\n")?,
            Round::Evaluated(Err(err)) => writeln!(output, "error: {err}\n")?,
            Round::Malformed => continue,
            Round::Eof => break,
        }

        // The trailing "delay" integer: read and discard.
        if read_line(input)?.is_none() {
            break;
        }
    }
    Ok(())
}

fn with_int_int_prob<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    eval: impl FnOnce(i64, i64, f64) -> Result<f64, DistError>,
) -> std::io::Result<Round> {
    let a = match read_int(input, output)? {
        Param::Value(v) => v,
        Param::Malformed => return Ok(Round::Malformed),
        Param::Eof => return Ok(Round::Eof),
    };
    let b = match read_int(input, output)? {
        Param::Value(v) => v,
        Param::Malformed => return Ok(Round::Malformed),
        Param::Eof => return Ok(Round::Eof),
    };
    let p = match read_float(input, output)? {
        Param::Value(v) => v,
        Param::Malformed => return Ok(Round::Malformed),
        Param::Eof => return Ok(Round::Eof),
    };
    Ok(Round::Evaluated(eval(a, b, p)))
}

fn with_four_ints<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    eval: impl FnOnce(i64, i64, i64, i64) -> Result<f64, DistError>,
) -> std::io::Result<Round> {
    let mut values = [0i64; 4];
    for slot in &mut values {
        *slot = match read_int(input, output)? {
            Param::Value(v) => v,
            Param::Malformed => return Ok(Round::Malformed),
            Param::Eof => return Ok(Round::Eof),
        };
    }
    let [a, b, c, d] = values;
    Ok(Round::Evaluated(eval(a, b, c, d)))
}

enum Param<T> {
    Value(T),
    Malformed,
    Eof,
}

/// One raw line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn read_int<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<Param<i64>> {
    let Some(line) = read_line(input)? else {
        return Ok(Param::Eof);
    };
    match line.trim().parse::<i64>() {
        Ok(v) => Ok(Param::Value(v)),
        Err(_) => {
            writeln!(output, "not an integer: {}\n", line.trim())?;
            Ok(Param::Malformed)
        }
    }
}

fn read_float<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<Param<f64>> {
    let Some(line) = read_line(input)? else {
        return Ok(Param::Eof);
    };
    match line.trim().parse::<f64>() {
        Ok(v) => Ok(Param::Value(v)),
        Err(_) => {
            writeln!(output, "not a number: {}\n", line.trim())?;
            Ok(Param::Malformed)
        }
    }
}
