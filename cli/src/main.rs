// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the suffix array of a file
    Sa {
        input: PathBuf,
        /// Index Unicode characters decoded from UTF-8 instead of raw bytes
        #[arg(long)]
        utf8: bool,
    },
    /// Print the Burrows-Wheeler transform of a file
    Bwt {
        input: PathBuf,
        /// Index Unicode characters decoded from UTF-8 instead of raw bytes
        #[arg(long)]
        utf8: bool,
    },
    /// Print the LCP array of a file
    Lcp {
        input: PathBuf,
        /// Index Unicode characters decoded from UTF-8 instead of raw bytes
        #[arg(long)]
        utf8: bool,
        /// File holding a precomputed suffix array as whitespace-separated integers; computed
        /// from the input when omitted
        #[arg(long)]
        sa: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Sa { input, utf8 } => {
            let text = read_input(&input)?;
            let sa = compute_suffix_array(&text, utf8)?;

            print_row(&sa);
        }
        Command::Bwt { input, utf8 } => {
            let text = read_input(&input)?;

            if utf8 {
                let bwt = strata::bwt_utf8(&text).context("Failed to compute transform")?;
                print_row(&bwt);
            } else {
                let bwt = strata::bwt(&text).context("Failed to compute transform")?;
                print_row(&bwt);
            }
        }
        Command::Lcp { input, utf8, sa } => {
            let text = read_input(&input)?;

            let sa = match sa {
                Some(path) => read_suffix_array(&path)?,
                None => compute_suffix_array(&text, utf8)?,
            };

            let result = if utf8 {
                strata::lcp_array_utf8(&text, &sa)
            } else {
                strata::lcp_array(&text, &sa)
            };
            let lcp = result.context("Failed to compute LCP array")?;

            print_row(&lcp);
        }
    }

    Ok(())
}

fn compute_suffix_array(text: &[u8], utf8: bool) -> anyhow::Result<Vec<u32>> {
    let sa = if utf8 {
        strata::suffix_array_utf8(text)
    } else {
        strata::suffix_array(text)
    };

    sa.context("Failed to compute suffix array")
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read input file '{}'", path.display()))
}

fn read_suffix_array(path: &Path) -> anyhow::Result<Vec<u32>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read suffix array file '{}'", path.display()))?;

    contents
        .split_whitespace()
        .map(|token| {
            token.parse().with_context(|| {
                format!(
                    "Invalid suffix array entry '{}' in '{}'",
                    token,
                    path.display(),
                )
            })
        })
        .collect()
}

fn print_row<T: Display>(values: &[T]) {
    let row = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    println!("{row}");
}
