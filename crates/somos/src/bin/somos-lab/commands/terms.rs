use anyhow::{ensure, Context, Result};

pub fn run(dual: bool, from: i64, to: i64) -> Result<()> {
    ensure!(from <= to, "empty range: {from} > {to}");
    let mut seq = super::sequence(dual)?;

    for index in from..=to {
        let value = seq
            .term(index)
            .with_context(|| format!("failed to compute s_{{{index}}}"))?;
        println!("s_{{{index}}} = {value}");
    }

    Ok(())
}
