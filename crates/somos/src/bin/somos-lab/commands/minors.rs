use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use somos::linalg::{MinorSearch, MinorSearchConfig};
use somos::sequences::{hankel_matrix, MatrixKind};

pub fn run(
    dual: bool,
    size: usize,
    kind: i64,
    minor_size: Option<usize>,
    max_attempts: Option<u64>,
    seed: u64,
) -> Result<()> {
    let kind = MatrixKind::try_from(kind)?;
    let mut seq = super::sequence(dual)?;

    println!("Initializing {size}x{size} matrix");
    let matrix = hankel_matrix(seq.as_mut(), size, kind)
        .with_context(|| format!("failed to build the {size}x{size} matrix"))?;

    let minor_size = match minor_size {
        Some(n) => n,
        None => read_minor_size()?,
    };
    let config = MinorSearchConfig {
        minor_size,
        max_attempts,
        seed,
    };

    let mut search = MinorSearch::new(&matrix, &config)?;
    for minor in search.by_ref() {
        let minor = minor?;
        println!("Found non-singular {minor_size}x{minor_size} minor:");
        println!("DET: {}", minor.determinant);
        println!("{}", join(&minor.rows));
        println!("{}", join(&minor.cols));
        println!("Matrix:");
        print!("{}", minor.matrix);
    }
    println!("Stopped after {} attempts", search.attempts());

    Ok(())
}

fn read_minor_size() -> Result<usize> {
    println!("Enter the minor size:");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("no minor size on standard input");
    }
    line.trim()
        .parse()
        .with_context(|| format!("invalid minor size {:?}", line.trim()))
}

fn join(indices: &[usize]) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
