//! Custom cargo commands for docsift.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + clippy + tests)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run each fuzz target briefly
//!   cargo xtask kani      - Run Kani proofs
//!   cargo xtask wasm      - Build the browser bundle

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets.
const FUZZ_TARGETS: &[&str] = &["excerpt_matching", "blob_decoding", "widget_keys"];

/// Seconds each fuzz target gets in `cargo xtask fuzz`.
const FUZZ_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        Some("kani") => kani()?,
        Some("wasm") => wasm()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + wasm build + constants)
  test      Run all Rust tests
  check     Quick check (cargo check + clippy + tests)
  bench     Run benchmarks
  fuzz      Run each fuzz target for {FUZZ_SECONDS}s (needs cargo-fuzz, nightly)
  kani      Run Kani proofs (needs cargo-kani)
  wasm      Build the browser bundle with wasm-pack
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("docsift Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[2/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[3/4] Checking wasm bindings...");
    run_cargo(&["check", "--quiet", "--features", "wasm", "--target", "wasm32-unknown-unknown"])?;
    println!("✓ wasm bindings build\n");

    println!("[4/4] Verifying kani model constants...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("[3/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run every fuzz target for a short, fixed time
fn fuzz() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);
    for target in FUZZ_TARGETS {
        println!("fuzzing {} for {}s...", target, FUZZ_SECONDS);
        run_in(
            &fuzz_dir,
            "cargo",
            &["+nightly", "fuzz", "run", target, "--", &max_time],
        )?;
    }
    println!("\n✓ No crashes");
    Ok(())
}

/// Run Kani proofs
fn kani() -> Result<()> {
    let kani_dir = project_root()?.join("kani-proofs");
    run_in(&kani_dir, "cargo", &["kani"])
}

/// Build the browser bundle
fn wasm() -> Result<()> {
    let root = project_root()?;
    run_in(
        &root,
        "wasm-pack",
        &["build", "--target", "web", "--release", "--", "--features", "wasm"],
    )
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
    run_in(&project_root()?, "cargo", args)
}

fn run_in(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run {} {:?}", program, args))?;

    if !status.success() {
        bail!("{} {:?} failed", program, args);
    }

    Ok(())
}

/// The kani crate copies constants from the main crate; make sure they match.
fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let history_rs = std::fs::read_to_string(root.join("src/history.rs"))
        .context("Failed to read src/history.rs")?;
    let kani_rs = std::fs::read_to_string(root.join("kani-proofs/src/lib.rs"))
        .context("Failed to read kani-proofs/src/lib.rs")?;

    let ours = extract_const(&history_rs, "HISTORY_CAPACITY")
        .context("HISTORY_CAPACITY not found in src/history.rs")?;
    let theirs = extract_const(&kani_rs, "HISTORY_CAPACITY")
        .context("HISTORY_CAPACITY not found in kani-proofs")?;

    if ours != theirs {
        bail!("HISTORY_CAPACITY: crate={} kani={}", ours, theirs);
    }
    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<u64> {
    // Look for "pub const NAME: usize = 5;"
    let prefix = format!("pub const {}:", name);
    content
        .lines()
        .find(|line| line.trim_start().starts_with(&prefix))
        .and_then(|line| line.split('=').nth(1))
        .and_then(|value| value.trim().trim_end_matches(';').trim().parse().ok())
}
