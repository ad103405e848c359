use std::process;

use clap::{Parser, ValueEnum};

use relp_num::{Error, Integer};

/// Exact integer arithmetic on the command line.
#[derive(Parser, Debug)]
#[clap(name = "relp-num", version, about, allow_negative_numbers = true)]
struct Arguments {
    /// Left-hand side operand.
    lhs: String,
    /// Operation to perform.
    #[clap(value_enum)]
    operation: Operation,
    /// Right-hand side operand, required for all but `neg`.
    rhs: Option<String>,
    /// Radix of the operands. Without it, `0b`, `0o` and `0x` prefixes are recognized.
    #[clap(long, short = 'r')]
    radix: Option<u32>,
    /// Radix of the output.
    #[clap(long, short = 'o', default_value_t = 10)]
    output_radix: u32,
}

#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Neg,
    Cmp,
}

fn parse(text: &str, radix: Option<u32>) -> Result<Integer, Error> {
    match radix {
        Some(radix) => Integer::from_str_radix(text, radix),
        None => text.parse(),
    }
}

fn evaluate(arguments: &Arguments) -> Result<String, String> {
    let lhs = parse(&arguments.lhs, arguments.radix).map_err(|error| error.to_string())?;
    let rhs = match (&arguments.rhs, arguments.operation) {
        (None, Operation::Neg) => None,
        (Some(_), Operation::Neg) => return Err("neg takes a single operand".to_string()),
        (None, operation) => return Err(format!("{:?} takes two operands", operation)),
        (Some(text), _) => Some(parse(text, arguments.radix).map_err(|error| error.to_string())?),
    };
    log::debug!("Evaluating {:?} on {} and {:?}", arguments.operation, lhs, rhs);

    let result = match (arguments.operation, rhs) {
        (Operation::Neg, _) => -lhs,
        (Operation::Cmp, Some(rhs)) => return Ok(format!("{:?}", lhs.cmp(&rhs))),
        (Operation::Pow, Some(rhs)) => lhs.checked_pow(&rhs).map_err(|error| error.to_string())?,
        (Operation::Div, Some(rhs)) => lhs.checked_div(&rhs).map_err(|error| error.to_string())?,
        (Operation::Rem, Some(rhs)) => lhs.checked_rem(&rhs).map_err(|error| error.to_string())?,
        (Operation::Add, Some(rhs)) => lhs + rhs,
        (Operation::Sub, Some(rhs)) => lhs - rhs,
        (Operation::Mul, Some(rhs)) => lhs * rhs,
        (_, None) => unreachable!("only negation has a single operand"),
    };

    result.to_str_radix(arguments.output_radix).map_err(|error| error.to_string())
}

fn main() {
    env_logger::init();

    let arguments = Arguments::parse();
    match evaluate(&arguments) {
        Ok(text) => println!("{}", text),
        Err(message) => {
            eprintln!("error: {}", message);
            process::exit(1);
        },
    }
}
