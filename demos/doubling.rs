use std::fmt;

use noisy_fn::{SamplingError, make_noisy};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq)]
enum Reading {
    Doubled(i64),
    Glitch(&'static str),
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Doubled(v) => write!(f, "{}", v),
            Reading::Glitch(s) => write!(f, "{}", s),
        }
    }
}

fn double(value: i64) -> Reading {
    Reading::Doubled(2 * value)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Noisy Doubling Demo ===\n");

    let mut noisy_double = make_noisy(
        0.5,
        [
            (Reading::Glitch("ups!"), 0.7),
            (Reading::Glitch("UPS!"), 0.3),
        ],
    )?
    .wrap(double);

    for x in 0..10 {
        let reading: Result<Reading, SamplingError> = noisy_double(x);
        println!("  double({}) -> {}", x, reading?);
    }

    Ok(())
}
