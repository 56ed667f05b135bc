use anyhow::{Context, Result};
use somos::sequences::{hankel_rank, MatrixKind};

pub fn run(dual: bool, size: usize, kind: i64) -> Result<()> {
    let kind = MatrixKind::try_from(kind)?;
    let mut seq = super::sequence(dual)?;

    println!("Initializing {size}x{size} matrix");
    let rank = hankel_rank(seq.as_mut(), size, kind)
        .with_context(|| format!("failed to compute the rank of the {size}x{size} matrix"))?;
    println!("RANK: {rank}");

    Ok(())
}
