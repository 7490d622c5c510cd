//! Command line driver for `magna-bigint`.
//!
//! Two modes: pass `<OP> <A> <B>` on the command line for a one-shot
//! computation, or run with no arguments for the interactive prompt. All
//! arithmetic lives in the library; this binary only parses, dispatches
//! and prints.

use std::cmp::Ordering;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use magna_bigint::BigInt;

#[derive(Debug, Parser)]
#[command(
    name = "magna",
    about = "Exact arbitrary precision integer arithmetic",
    version
)]
struct Args {
    /// Operation to perform; omit all arguments for interactive mode.
    #[arg(value_enum, requires = "a", requires = "b")]
    op: Option<Op>,

    /// First operand, a decimal integer.
    a: Option<String>,

    /// Second operand, a decimal integer.
    b: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Gcd,
    Lcm,
    Mod,
    AbsCmp,
    Cmp,
}

const MENU: &str = "\
1. Add
2. Subtract
3. Multiply
4. Divide
5. Power
6. GCD
7. LCM
8. Modulus
9. Absolute Compare
10. Compare";

fn main() -> ExitCode {
    let args = Args::parse();
    let outcome = match args.op {
        Some(op) => {
            // clap's `requires` guarantees both operands are present.
            let a = args.a.unwrap_or_default();
            let b = args.b.unwrap_or_default();
            run(op, &a, &b)
        }
        None => interactive(),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(op: Op, a: &str, b: &str) -> Result<(), Box<dyn Error>> {
    let a: BigInt = a.parse()?;
    let b: BigInt = b.parse()?;
    println!("{}", eval(op, &a, &b)?);
    Ok(())
}

fn eval(op: Op, a: &BigInt, b: &BigInt) -> Result<String, Box<dyn Error>> {
    Ok(match op {
        Op::Add => (a + b).to_string(),
        Op::Sub => (a - b).to_string(),
        Op::Mul => (a * b).to_string(),
        Op::Div => a.checked_div(b)?.to_string(),
        Op::Pow => a.pow(b).to_string(),
        Op::Gcd => a.gcd(b).to_string(),
        Op::Lcm => a.checked_lcm(b)?.to_string(),
        Op::Mod => a.checked_rem(b)?.to_string(),
        Op::AbsCmp => ordering_value(a.cmp_magnitude(b)).to_string(),
        Op::Cmp => ordering_value(a.cmp(b)).to_string(),
    })
}

fn ordering_value(ord: Ordering) -> i32 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

fn interactive() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let a: BigInt = prompt(&mut lines, "Enter Number 1: ")?.parse()?;
    let b: BigInt = prompt(&mut lines, "Enter Number 2: ")?.parse()?;

    println!("{MENU}");
    let choice = prompt(&mut lines, "> ")?;
    match selector(choice.trim()) {
        Some(op) => println!("{}", eval(op, &a, &b)?),
        None => println!("Invalid choice"),
    }
    Ok(())
}

fn selector(choice: &str) -> Option<Op> {
    match choice {
        "1" => Some(Op::Add),
        "2" => Some(Op::Sub),
        "3" => Some(Op::Mul),
        "4" => Some(Op::Div),
        "5" => Some(Op::Pow),
        "6" => Some(Op::Gcd),
        "7" => Some(Op::Lcm),
        "8" => Some(Op::Mod),
        "9" => Some(Op::AbsCmp),
        "10" => Some(Op::Cmp),
        _ => None,
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<String, Box<dyn Error>> {
    print!("{text}");
    io::stdout().flush()?;
    Ok(lines.next().ok_or("unexpected end of input")??)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_dispatch() {
        let a: BigInt = "100".parse().unwrap();
        let b: BigInt = "7".parse().unwrap();
        assert_eq!(eval(Op::Add, &a, &b).unwrap(), "107");
        assert_eq!(eval(Op::Div, &a, &b).unwrap(), "14");
        assert_eq!(eval(Op::Mod, &a, &b).unwrap(), "2");
        assert_eq!(eval(Op::Cmp, &a, &b).unwrap(), "1");
    }

    #[test]
    fn test_eval_reports_divide_by_zero() {
        let a: BigInt = "5".parse().unwrap();
        let b: BigInt = "0".parse().unwrap();
        assert!(eval(Op::Div, &a, &b).is_err());
    }

    #[test]
    fn test_selector_mapping() {
        assert!(matches!(selector("1"), Some(Op::Add)));
        assert!(matches!(selector("10"), Some(Op::Cmp)));
        assert!(selector("11").is_none());
        assert!(selector("x").is_none());
    }

    #[test]
    fn test_abs_cmp_ignores_sign() {
        let a: BigInt = "-5".parse().unwrap();
        let b: BigInt = "3".parse().unwrap();
        assert_eq!(eval(Op::Cmp, &a, &b).unwrap(), "-1");
        assert_eq!(eval(Op::AbsCmp, &a, &b).unwrap(), "1");
    }
}
