// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Write};

use clap::Parser;
use tracing::{debug, info};

use bytebuf::{decode_snapshot, encode_snapshot, ByteBuffer, CodecRegistry, Slice};

mod cli;
use cli::display::{self, field, flag, format_size, section_bot, section_mid, section_top};
use cli::{Cli, Commands};

/// Positions listed by `find` before it only counts.
const MAX_LISTED_MATCHES: usize = 32;

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Hex { input } => run_hex(input.as_deref()),
        Commands::Fromhex { text, output } => run_fromhex(&text, output.as_deref()),
        Commands::Repr { input } => run_repr(input.as_deref()),
        Commands::Decode {
            input,
            codec,
            errors,
        } => run_decode(input.as_deref(), &codec, &errors),
        Commands::Find {
            pattern,
            input,
            hex,
            reverse,
        } => run_find(&pattern, input.as_deref(), hex, reverse),
        Commands::Inspect { input, limit, json } => run_inspect(input.as_deref(), limit, json),
        Commands::Snapshot { input, output } => run_snapshot(input.as_deref(), output.as_deref()),
        Commands::Restore { input, output } => run_restore(input.as_deref(), output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `BYTEBUF_LOG` (default: warnings only).
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("BYTEBUF_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bytebuf=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// ============================================================================
// INPUT / OUTPUT
// ============================================================================

fn read_input(path: Option<&str>) -> Result<ByteBuffer, String> {
    let mut buf = ByteBuffer::new();
    match path {
        None | Some("-") => {
            io::copy(&mut io::stdin().lock(), &mut buf)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
        }
        Some(path) => {
            let mut file =
                fs::File::open(path).map_err(|e| format!("Failed to open {}: {}", path, e))?;
            io::copy(&mut file, &mut buf).map_err(|e| format!("Failed to read {}: {}", path, e))?;
        }
    }
    debug!(len = buf.len(), "read input");
    Ok(buf)
}

fn write_output(path: Option<&str>, buf: &ByteBuffer) -> Result<(), String> {
    match path {
        None | Some("-") => {
            let mut stdout = io::stdout().lock();
            buf.write_to(&mut stdout)
                .and_then(|()| stdout.flush())
                .map_err(|e| format!("Failed to write stdout: {}", e))
        }
        Some(path) => {
            let mut file =
                fs::File::create(path).map_err(|e| format!("Failed to create {}: {}", path, e))?;
            buf.write_to(&mut file)
                .map_err(|e| format!("Failed to write {}: {}", path, e))?;
            info!(path, len = buf.len(), "wrote output");
            Ok(())
        }
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

fn run_hex(input: Option<&str>) -> Result<(), String> {
    let buf = read_input(input)?;
    println!("{}", buf.to_hex());
    Ok(())
}

fn run_fromhex(text: &str, output: Option<&str>) -> Result<(), String> {
    let buf = ByteBuffer::from_hex(text.trim_end()).map_err(|e| e.to_string())?;
    write_output(output, &buf)
}

fn run_repr(input: Option<&str>) -> Result<(), String> {
    let buf = read_input(input)?;
    println!("{}", buf.repr());
    Ok(())
}

fn run_decode(input: Option<&str>, codec: &str, errors: &str) -> Result<(), String> {
    let buf = read_input(input)?;
    let registry = CodecRegistry::with_builtins();
    let text = buf
        .decode(codec, Some(errors), &registry)
        .map_err(|e| e.to_string())?;
    print!("{}", text);
    Ok(())
}

fn run_find(pattern: &str, input: Option<&str>, hex: bool, reverse: bool) -> Result<(), String> {
    let buf = read_input(input)?;
    let needle = if hex {
        ByteBuffer::from_hex(pattern).map_err(|e| e.to_string())?
    } else {
        ByteBuffer::from(pattern.as_bytes())
    };
    let total = buf.count(&needle).map_err(|e| e.to_string())?;
    println!("{} match{}", total, if total == 1 { "" } else { "es" });
    if needle.is_empty() {
        return Ok(());
    }

    let step = needle.len() as i64;
    let mut positions = Vec::new();
    if reverse {
        let mut stop = buf.len() as i64;
        while positions.len() < MAX_LISTED_MATCHES {
            match buf.rfind_in(&needle, Slice::to_stop(stop)).map_err(|e| e.to_string())? {
                Some(pos) => {
                    positions.push(pos);
                    stop = pos as i64;
                }
                None => break,
            }
        }
    } else {
        let mut start = 0i64;
        while positions.len() < MAX_LISTED_MATCHES {
            match buf.find_in(&needle, Slice::from_start(start)).map_err(|e| e.to_string())? {
                Some(pos) => {
                    positions.push(pos);
                    start = pos as i64 + step;
                }
                None => break,
            }
        }
    }
    for pos in &positions {
        println!("{:#010x}  {}", pos, pos);
    }
    if total > positions.len() {
        println!("... {} more", total - positions.len());
    }
    Ok(())
}

fn run_inspect(input: Option<&str>, limit: usize, json: bool) -> Result<(), String> {
    let buf = read_input(input)?;
    let report = InspectReport::from_buffer(&buf);

    if json {
        #[cfg(feature = "serde_json")]
        {
            let out = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize report: {}", e))?;
            println!("{}", out);
            return Ok(());
        }
        #[cfg(not(feature = "serde_json"))]
        return Err("--json requires the serde_json feature".to_string());
    }

    display::title("BYTEBUF INSPECT");
    section_top("BUFFER");
    display::row(&field("length", &format!("{} ({})", report.len, format_size(report.len))));
    display::row(&field("lines", &report.lines.to_string()));
    display::row(&field("distinct bytes", &report.distinct.to_string()));
    display::row(&field("crc32", &format!("{:#010x}", report.crc32)));

    section_mid("TEXT");
    display::row(&field("ascii", &flag(report.ascii)));
    display::row(&field("utf-8", &flag(report.utf8)));
    display::row(&field("whitespace only", &flag(report.whitespace_only)));
    display::row(&field("printable", &format!("{:.1}%", report.printable_pct)));

    section_mid("DUMP");
    let shown = &buf.as_bytes()[..buf.len().min(limit)];
    for (i, chunk) in shown.chunks(display::DUMP_WIDTH).enumerate() {
        display::row(&display::dump_row(i * display::DUMP_WIDTH, chunk));
    }
    if buf.len() > shown.len() {
        display::row(&field("", &format!("... {} more bytes", buf.len() - shown.len())));
    }
    section_bot();
    Ok(())
}

fn run_snapshot(input: Option<&str>, output: Option<&str>) -> Result<(), String> {
    let buf = read_input(input)?;
    let snap = ByteBuffer::from(encode_snapshot(&buf));
    write_output(output, &snap)
}

fn run_restore(input: Option<&str>, output: Option<&str>) -> Result<(), String> {
    let snap = read_input(input)?;
    let buf = decode_snapshot(snap.as_bytes()).map_err(|e| format!("Invalid snapshot: {}", e))?;
    write_output(output, &buf)
}

// ============================================================================
// INSPECT REPORT
// ============================================================================

#[derive(serde::Serialize)]
struct InspectReport {
    len: usize,
    lines: usize,
    distinct: usize,
    crc32: u32,
    ascii: bool,
    utf8: bool,
    whitespace_only: bool,
    printable_pct: f64,
    repr_preview: String,
}

impl InspectReport {
    fn from_buffer(buf: &ByteBuffer) -> Self {
        let bytes = buf.as_bytes();
        let mut seen = [false; 256];
        let mut printable = 0usize;
        for &b in bytes {
            seen[b as usize] = true;
            if (0x20..=0x7e).contains(&b) {
                printable += 1;
            }
        }
        let printable_pct = if bytes.is_empty() {
            100.0
        } else {
            printable as f64 * 100.0 / bytes.len() as f64
        };
        let preview = ByteBuffer::from(&bytes[..bytes.len().min(48)]);
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(bytes);

        InspectReport {
            len: buf.len(),
            lines: buf.splitlines(false).len(),
            distinct: seen.iter().filter(|&&s| s).count(),
            crc32: hasher.finalize(),
            ascii: bytes.is_ascii(),
            utf8: std::str::from_utf8(bytes).is_ok(),
            whitespace_only: buf.is_space(),
            printable_pct,
            repr_preview: preview.repr(),
        }
    }
}
