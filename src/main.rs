//! txtree CLI - Command line interface for txtree
//!
//! Builds Merkle trees over transaction data given on the command line and
//! exposes the diff and lookup operations. Indices are assigned densely
//! from 0 in the order the items appear.

use clap::{Parser, Subcommand};
use txtree::{build, find_differences, locate, Transaction};

#[derive(Parser)]
#[command(name = "txtree")]
#[command(about = "A binary Merkle hash tree over ordered transaction records")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a tree and print its root digest
    Root {
        /// Transaction data, one item per leaf
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Report the leaves that differ between two trees
    Diff {
        /// First sequence, comma-separated
        left: String,
        /// Second sequence, comma-separated
        right: String,
    },

    /// Check whether a transaction is on the tree
    Check {
        /// Transaction data, one item per leaf
        #[arg(required = true)]
        items: Vec<String>,
        /// Index of the transaction to check
        #[arg(short, long)]
        index: u64,
        /// Expected data at that index
        #[arg(short, long)]
        data: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Root { items } => {
            let root = build(Transaction::sequence(items))?;
            output(
                &cli.format,
                &serde_json::json!({
                    "root": root.digest().to_hex(),
                    "depth": root.depth()
                }),
            );
        }

        Commands::Diff { left, right } => {
            let a = build(Transaction::sequence(left.split(',')))?;
            let b = build(Transaction::sequence(right.split(',')))?;
            let differences = find_differences(&a, &b)?;
            match cli.format {
                OutputFormat::Json => {
                    output(
                        &cli.format,
                        &serde_json::json!({ "differences": differences }),
                    );
                }
                OutputFormat::Text => {
                    for difference in &differences {
                        println!("{}", difference);
                    }
                }
            }
        }

        Commands::Check { items, index, data } => {
            let root = build(Transaction::sequence(items))?;
            let on_tree = locate(&root, index)? == data;
            output(
                &cli.format,
                &serde_json::json!({
                    "index": index,
                    "data": data,
                    "on_tree": on_tree
                }),
            );
        }
    }

    Ok(())
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value).unwrap());
        }
        OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(value).unwrap());
        }
    }
}
