use clap::{Parser, Subcommand};
use somos::experiment::{MATRIX_SIZE, PREVIEW};

#[derive(Parser)]
#[command(name = "somos-lab")]
#[command(author, version, about = "Exact experiments on Somos-4 and its dual")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use the dual Somos-4 sequence seeded with [1, 0, 0, 0]
    #[arg(long, global = true)]
    pub dual: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the terms s_{from} ..= s_{to}
    Terms {
        /// First index
        #[arg(long, default_value_t = *PREVIEW.start(), allow_negative_numbers = true)]
        from: i64,

        /// Last index (inclusive)
        #[arg(long, default_value_t = *PREVIEW.end(), allow_negative_numbers = true)]
        to: i64,
    },

    /// Compute the rank of the Hankel-style matrix
    Rank {
        /// Matrix side length
        #[arg(short, long, default_value_t = MATRIX_SIZE)]
        size: usize,

        /// Matrix kind (0: s[m+n]·s[m-n])
        #[arg(long, default_value_t = 0)]
        kind: i64,
    },

    /// Search the Hankel-style matrix for non-singular minors
    Minors {
        /// Matrix side length
        #[arg(short, long, default_value_t = MATRIX_SIZE)]
        size: usize,

        /// Matrix kind (0: s[m+n]·s[m-n])
        #[arg(long, default_value_t = 0)]
        kind: i64,

        /// Minor side length; read from stdin when omitted
        #[arg(short, long)]
        minor_size: Option<usize>,

        /// Stop after this many sampled minors
        #[arg(long)]
        max_attempts: Option<u64>,

        /// Seed for the index sampler
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}
