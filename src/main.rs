use exactly::{power, Number, Problem};
use std::io;
use tracing_subscriber::EnvFilter;

fn evaluate(line: &str) -> Result<String, Problem> {
    match line.split_once('^') {
        Some((base, exp)) => {
            let base: Number = base.parse()?;
            let exp: Number = exp.parse()?;
            Ok(power(&base, &exp)?.to_string())
        }
        None => {
            let n: Number = line.parse()?;
            Ok(n.to_string())
        }
    }
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    loop {
        let mut input = String::new();

        io::stdin()
            .read_line(&mut input)
            .expect("Failed to read calculator input");

        let expr = input.trim();
        if expr.is_empty() {
            break;
        }

        match evaluate(expr) {
            Ok(answer) => println!("{answer}"),
            Err(Problem::DivisionByZero) => println!("Attempted division by zero"),
            Err(Problem::ExponentTooLarge) => println!("The exponent is too large"),
            Err(Problem::BadInteger | Problem::BadFraction) => {
                println!("Parsing your input failed, try e.g. -4 ^ 3/2")
            }
            Err(problem) => println!("Calculation failed: {problem}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines() {
        assert_eq!(evaluate("-4 ^ 3/2").unwrap(), "-8*I");
        assert_eq!(evaluate("8/27^2/3").unwrap(), "4/9");
        assert_eq!(evaluate("10/4").unwrap(), "5/2");
        assert_eq!(evaluate("0 ^ -1"), Err(Problem::DivisionByZero));
        assert_eq!(evaluate("x ^ 2"), Err(Problem::BadInteger));
    }
}
