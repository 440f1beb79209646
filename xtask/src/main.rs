//! Build automation tasks for the LWC workspace
//!
//! Run with: cargo xtask <command>

use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "LWC build automation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all tests, including doc tests
    Test,

    /// Run clippy lints over every target
    Lint,

    /// Check formatting
    Fmt,

    /// Run format, lint and test checks in sequence
    Ci,

    /// Run the criterion benchmarks of the library crates
    Bench,

    /// Run a fuzz target for a bounded time (requires cargo-fuzz and nightly)
    Fuzz {
        /// Target name
        #[arg(default_value = "fuzz_crypto")]
        target: String,

        /// Seconds to run
        #[arg(long, default_value_t = 60)]
        seconds: u64,
    },

    /// Generate documentation
    Doc,
}

const FMT: &[&str] = &["fmt", "--all", "--check"];
const CLIPPY: &[&str] = &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"];
const TEST: &[&str] = &["test", "--all-features", "--workspace"];
const BENCH: &[&str] = &["bench", "-p", "lwc-crypto", "-p", "lwc-files"];
const DOC: &[&str] = &["doc", "--workspace", "--no-deps", "--open"];

/// Fuzz targets declared in `fuzz/Cargo.toml`
const FUZZ_TARGETS: [&str; 2] = ["fuzz_crypto", "fuzz_extract"];

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Test => cargo(TEST)?,
        Commands::Lint => cargo(CLIPPY)?,
        Commands::Fmt => cargo(FMT)?,
        Commands::Ci => {
            println!("Running CI checks...");
            for step in [FMT, CLIPPY, TEST] {
                cargo(step)?;
            }
            println!("All CI checks passed!");
        }
        Commands::Bench => cargo(BENCH)?,
        Commands::Fuzz { target, seconds } => {
            let args = fuzz_args(&target, seconds)?;
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            cargo(&args)?;
        }
        Commands::Doc => cargo(DOC)?,
    }

    Ok(())
}

/// Arguments for a bounded cargo-fuzz run of `target`
fn fuzz_args(target: &str, seconds: u64) -> anyhow::Result<Vec<String>> {
    if !FUZZ_TARGETS.contains(&target) {
        anyhow::bail!("unknown fuzz target {target}, expected one of {FUZZ_TARGETS:?}");
    }

    Ok(["+nightly", "fuzz", "run", "--fuzz-dir", "fuzz", target, "--"]
        .into_iter()
        .map(str::to_string)
        .chain([format!("-max_total_time={seconds}")])
        .collect())
}

fn cargo(args: &[&str]) -> anyhow::Result<()> {
    let status = Command::new("cargo").args(args).status()?;

    if !status.success() {
        anyhow::bail!("cargo {:?} failed", args);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_fuzz_args_bounded() {
        let args = fuzz_args("fuzz_extract", 30).unwrap();
        assert_eq!(args.first().map(String::as_str), Some("+nightly"));
        assert!(args.contains(&"fuzz_extract".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("-max_total_time=30"));
    }

    #[test]
    fn test_fuzz_args_unknown_target() {
        assert!(fuzz_args("frame_parser", 10).is_err());
    }
}
