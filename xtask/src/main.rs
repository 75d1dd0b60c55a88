//! Custom cargo commands for the bytebuf crate.
//!
//! Usage:
//!   cargo xtask verify        - Run full verification suite
//!   cargo xtask test          - Run all tests
//!   cargo xtask check         - Quick check (check + test + clippy)
//!   cargo xtask bench         - Run benchmarks
//!   cargo xtask fuzz <target> - Run a fuzz target for 60s
//!   cargo xtask kani          - Run Kani proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Contract checks that must stay wired into the storage and slice layers.
const REQUIRED_CONTRACTS: &[(&str, &str)] = &[
    ("store.rs", "check_store_well_formed"),
    ("store.rs", "check_extended_assignment"),
    ("slice.rs", "check_spec_in_bounds"),
    ("search.rs", "check_window"),
];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify         Run full verification suite (contracts + tests + clippy + kani)
  test           Run all Rust tests
  check          Quick check (cargo check + test + clippy)
  bench          Run benchmarks
  fuzz <target>  Run one fuzz target for 60 seconds (needs cargo-fuzz, nightly)
  kani           Run Kani proofs (needs cargo-kani)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("bytebuf Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract call sites...");
    check_contract_sites()?;
    println!("✓ Contracts wired in\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs hold\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check (no Kani)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("usage: cargo xtask fuzz <target> (slice_ops, hex_parse, snapshot_decode)");
    };
    let root = project_root()?;
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(&root)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;
    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
}

fn kani() -> Result<()> {
    let proofs_dir = project_root()?.join("kani-proofs");
    let status = match Command::new("cargo")
        .arg("kani")
        .current_dir(&proofs_dir)
        .status()
    {
        Ok(status) => status,
        Err(_) => {
            println!("  (cargo-kani not available, skipping)");
            return Ok(());
        }
    };
    if !status.success() {
        bail!("Kani proofs failed");
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_contract_sites() -> Result<()> {
    let src_dir = project_root()?.join("src");
    for (file, contract) in REQUIRED_CONTRACTS {
        let source = std::fs::read_to_string(src_dir.join(file))
            .with_context(|| format!("Failed to read {}", file))?;
        let calls = source
            .lines()
            .filter(|line| line.contains(contract) && !line.trim_start().starts_with("use "))
            .count();
        if calls == 0 {
            bail!(
                "{} no longer calls {}. Someone may have removed a contract check!",
                file,
                contract
            );
        }
    }
    Ok(())
}
