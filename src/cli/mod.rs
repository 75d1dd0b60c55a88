// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bytebuf command-line interface.
//!
//! Every subcommand reads its input from a file path, or from stdin when the
//! path is omitted or `-`. Binary output goes to stdout unless `--output`
//! names a file.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bytebuf",
    about = "Inspect, convert, and snapshot raw byte data",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print input as lowercase hex
    Hex {
        /// Input file (stdin if omitted)
        input: Option<String>,
    },

    /// Parse hex text (spaces allowed between pairs) into raw bytes
    Fromhex {
        /// Hex digits, e.g. "de ad be ef"
        text: String,

        /// Write bytes here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print input as an escaped b'...' literal
    Repr {
        /// Input file (stdin if omitted)
        input: Option<String>,
    },

    /// Decode input to text with a named codec
    Decode {
        /// Input file (stdin if omitted)
        input: Option<String>,

        /// Codec name: utf-8, utf-16, latin-1, ascii (and aliases)
        #[arg(short, long, default_value = "utf-8")]
        codec: String,

        /// Error handling: strict, ignore, or replace
        #[arg(short, long, default_value = "strict")]
        errors: String,
    },

    /// Count occurrences of a pattern and report where they are
    Find {
        /// Pattern to look for
        pattern: String,

        /// Input file (stdin if omitted)
        input: Option<String>,

        /// Treat the pattern as hex digits
        #[arg(long)]
        hex: bool,

        /// Search from the end
        #[arg(long)]
        reverse: bool,
    },

    /// Show a summary and hex dump of the input
    Inspect {
        /// Input file (stdin if omitted)
        input: Option<String>,

        /// Maximum number of bytes to dump
        #[arg(short, long, default_value = "256")]
        limit: usize,

        /// Emit the summary as JSON (requires the serde_json feature)
        #[arg(long)]
        json: bool,
    },

    /// Wrap input in a checksummed snapshot
    Snapshot {
        /// Input file (stdin if omitted)
        input: Option<String>,

        /// Write the snapshot here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Verify a snapshot and write its payload
    Restore {
        /// Snapshot file (stdin if omitted)
        input: Option<String>,

        /// Write the payload here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}
