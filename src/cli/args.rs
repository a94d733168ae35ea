use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode bytes to text
    Encode(EncodeArgs),
    /// Decode text to bytes
    Decode(DecodeArgs),
    /// Write or read a single integer in a radix between 2 and 36
    Radix {
        #[command(subcommand)]
        action: RadixAction,
    },
    /// List available formats
    List(ListArgs),
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Format to encode with
    pub format: String,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Treat the input as hex text instead of raw bytes
    #[arg(long)]
    pub hex: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Format to decode from
    pub format: String,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Write the decoded bytes as hex text
    #[arg(long)]
    pub hex: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Radix subcommand actions
#[derive(Subcommand, Debug)]
pub enum RadixAction {
    /// Write a decimal integer in the given radix
    Encode {
        /// Target radix
        #[arg(short, long, default_value_t = 16)]
        radix: u32,

        /// Decimal value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Read an integer written in the given radix
    Decode {
        /// Source radix
        #[arg(short, long, default_value_t = 16)]
        radix: u32,

        /// Digits, optionally prefixed with '-'
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

/// Arguments for listing formats
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
