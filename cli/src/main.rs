// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use kkp::{
    cross_parse::cross_parse,
    entropy::{
        block_entropy, block_sorting_estimator_uniform, gosper_distance, lz_complexity_76,
        lz_complexity_78, lz77_complexity_kkp,
    },
    factor::Factor,
    kkp1s::factorize_external_sa,
    kkp2::factorize_in_memory,
    kkp3::factorize_in_memory_destructive,
    suffix::build_suffix_array,
};

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Algo {
    Kkp2,
    Kkp3,
    Kkp1s,
}

#[derive(Clone, Copy, ValueEnum)]
enum Measure {
    Lz76,
    Lz77,
    Lz78,
}

#[derive(Subcommand)]
enum Command {
    /// Factorize a file's contents using one of the KKP algorithms.
    Factorize {
        input: PathBuf,
        #[arg(long, value_enum, default_value = "kkp2")]
        algo: Algo,
        #[arg(long)]
        sa_file: Option<PathBuf>,
        #[arg(long)]
        verbose: bool,
    },
    /// Cross-parse the second file's contents against the first's.
    CrossParse { file1: PathBuf, file2: PathBuf },
    /// Report the block entropy of a file's contents.
    BlockEntropy {
        input: PathBuf,
        #[arg(long, default_value_t = 6)]
        blocksize: usize,
    },
    /// Report the block-sorting (Burrows-Wheeler) entropy estimate of a file's contents.
    BwtEntropy { input: PathBuf },
    /// Report an incremental-parsing complexity measure of a file's contents.
    Complexity {
        input: PathBuf,
        #[arg(long, value_enum)]
        measure: Measure,
    },
    /// Report the distance along a Gosper space-filling curve from 2D coordinates.
    GosperDistance {
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
        #[arg(long)]
        level: u32,
    },
}

fn print_factors(factors: &[Factor]) {
    for factor in factors {
        if factor.is_literal() {
            println!("literal {}", factor.pos);
        } else {
            println!("reference pos={} len={}", factor.pos, factor.len);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Factorize { input, algo, sa_file, verbose } => {
            let text = fs::read(&input)
                .with_context(|| format!("Failed to read input file '{}'", input.display()))?;

            let mut factors = Vec::new();
            let count = match algo {
                Algo::Kkp2 => {
                    let sa = build_suffix_array(&text);
                    factorize_in_memory(&text, &sa, &mut factors)
                }
                Algo::Kkp3 => {
                    let mut sa = build_suffix_array(&text);
                    factorize_in_memory_destructive(&text, &mut sa, &mut factors)
                }
                Algo::Kkp1s => {
                    let sa_path = sa_file
                        .context("--sa-file is required when --algo kkp1s is used")?;
                    factorize_external_sa(&text, &sa_path, &mut factors).with_context(|| {
                        format!("Failed to read external suffix array '{}'", sa_path.display())
                    })?
                }
            };

            println!("{count} factors");
            if verbose {
                print_factors(&factors);
            }
        }
        Command::CrossParse { file1, file2 } => {
            let s1 = fs::read(&file1)
                .with_context(|| format!("Failed to read file '{}'", file1.display()))?;
            let s2 = fs::read(&file2)
                .with_context(|| format!("Failed to read file '{}'", file2.display()))?;

            let mut factors = Vec::new();
            let count = cross_parse(&s1, &s2, &mut factors)
                .context("Failed to cross-parse input files")?;

            println!("{count} factors");
        }
        Command::BlockEntropy { input, blocksize } => {
            let text = fs::read(&input)
                .with_context(|| format!("Failed to read input file '{}'", input.display()))?;
            println!("{}", block_entropy(&text, blocksize));
        }
        Command::BwtEntropy { input } => {
            let text = fs::read(&input)
                .with_context(|| format!("Failed to read input file '{}'", input.display()))?;
            println!("{}", block_sorting_estimator_uniform(&text));
        }
        Command::Complexity { input, measure } => {
            let text = fs::read(&input)
                .with_context(|| format!("Failed to read input file '{}'", input.display()))?;
            let complexity = match measure {
                Measure::Lz76 => lz_complexity_76(&text),
                Measure::Lz77 => lz77_complexity_kkp(&text),
                Measure::Lz78 => lz_complexity_78(&text),
            };
            println!("{complexity}");
        }
        Command::GosperDistance { x, y, level } => match gosper_distance((x, y), level) {
            Some(distance) => println!("{distance}"),
            None => println!("point is not on the curve at this level"),
        },
    }

    Ok(())
}
