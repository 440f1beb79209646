//! LWC CLI
//!
//! Lightweight authenticated encryption with Elephant and ISAP.

mod config;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use lwc_crypto::{Algorithm, AuthenticatedData, Mode};
use lwc_files::IntegrityService;
use rand_core::{OsRng, RngCore};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use zeroize::Zeroizing;

use config::Config;

/// LWC - lightweight permutation-based authenticated encryption
#[derive(Parser)]
#[command(name = "lwc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Key material shared by every keyed command
#[derive(Args, Debug)]
struct KeyArgs {
    /// Key as hex
    #[arg(long, conflicts_with = "key_file")]
    key: Option<String>,

    /// File holding the key, raw or hex
    #[arg(long)]
    key_file: Option<PathBuf>,

    /// Nonce (IV for chained modes) as hex
    #[arg(long)]
    nonce: String,

    /// Scheme (`isap` or `elephant`); defaults to the configured one
    #[arg(short, long)]
    algorithm: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file, writing ciphertext followed by the tag
    Encrypt {
        /// Plaintext file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Mode (`direct`, `cbc` or `ofb`); defaults to the configured one
        #[arg(short, long)]
        mode: Option<String>,

        /// Associated data
        #[arg(long)]
        ad: Option<String>,

        #[command(flatten)]
        keys: KeyArgs,
    },

    /// Verify and decrypt a file produced by `encrypt`
    Decrypt {
        /// Ciphertext file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Mode used for encryption
        #[arg(short, long)]
        mode: Option<String>,

        /// Associated data used for encryption
        #[arg(long)]
        ad: Option<String>,

        #[command(flatten)]
        keys: KeyArgs,
    },

    /// Append an encrypted digest extract to a file
    Seal {
        /// File to seal
        #[arg(required = true)]
        file: PathBuf,

        #[command(flatten)]
        keys: KeyArgs,
    },

    /// Check a sealed file (exit code 1 on failure)
    Verify {
        /// Sealed file
        #[arg(required = true)]
        file: PathBuf,

        /// Remove the extract after a successful check
        #[arg(long)]
        strip: bool,

        #[command(flatten)]
        keys: KeyArgs,
    },

    /// Generate a random key and nonce
    Keygen {
        /// Scheme to size the nonce for
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Write the key (hex) to this file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load_or_default()?,
    };
    config.validate()?;

    // Initialize logging
    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging.level.to_lowercase()
    };
    tracing_subscriber::fmt()
        .with_env_filter(level.as_str())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Encrypt {
            input,
            output,
            mode,
            ad,
            keys,
        } => {
            let mode = resolve_mode(mode.as_deref(), &config)?;
            encrypt_file(&input, &output, mode, ad.as_deref(), &keys, &config)?;
        }
        Commands::Decrypt {
            input,
            output,
            mode,
            ad,
            keys,
        } => {
            let mode = resolve_mode(mode.as_deref(), &config)?;
            decrypt_file(&input, &output, mode, ad.as_deref(), &keys, &config)?;
        }
        Commands::Seal { file, keys } => {
            seal_file(&file, &keys, &config)?;
        }
        Commands::Verify { file, strip, keys } => {
            if !verify_file(&file, strip, &keys, &config)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Keygen { algorithm, output } => {
            let algorithm = resolve_algorithm(algorithm.as_deref(), &config)?;
            generate_key(algorithm, output.as_deref())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn resolve_algorithm(flag: Option<&str>, config: &Config) -> anyhow::Result<Algorithm> {
    match flag {
        Some(name) => Ok(name.parse()?),
        None => config.algorithm(),
    }
}

fn resolve_mode(flag: Option<&str>, config: &Config) -> anyhow::Result<Mode> {
    match flag {
        Some(name) => Ok(name.parse()?),
        None => config.mode(),
    }
}

/// Decode hex, tolerating surrounding whitespace
fn decode_hex(label: &str, text: &str) -> anyhow::Result<Vec<u8>> {
    hex::decode(text.trim()).with_context(|| format!("{label} is not valid hex"))
}

/// Key from `--key`, `--key-file` or the configured key file
fn load_key(
    keys: &KeyArgs,
    algorithm: Algorithm,
    config: &Config,
) -> anyhow::Result<Zeroizing<Vec<u8>>> {
    if let Some(hex_key) = &keys.key {
        return Ok(Zeroizing::new(decode_hex("key", hex_key)?));
    }

    let path = keys
        .key_file
        .as_ref()
        .or(config.crypto.key_file.as_ref())
        .context("no key given: use --key, --key-file or crypto.key_file")?;

    let raw = Zeroizing::new(
        std::fs::read(path).with_context(|| format!("failed to read key file {}", path.display()))?,
    );
    if raw.len() == algorithm.key_len() {
        return Ok(raw);
    }
    let text = std::str::from_utf8(&raw).context("key file is neither raw key bytes nor hex")?;
    Ok(Zeroizing::new(decode_hex("key file", text)?))
}

struct Material {
    algorithm: Algorithm,
    key: Zeroizing<Vec<u8>>,
    nonce: Vec<u8>,
}

fn load_material(keys: &KeyArgs, config: &Config) -> anyhow::Result<Material> {
    let algorithm = resolve_algorithm(keys.algorithm.as_deref(), config)?;
    let key = load_key(keys, algorithm, config)?;
    let nonce = decode_hex("nonce", &keys.nonce)?;
    Ok(Material {
        algorithm,
        key,
        nonce,
    })
}

/// Encrypt `input` into `output` as `ciphertext || tag`
fn encrypt_file(
    input: &Path,
    output: &Path,
    mode: Mode,
    ad: Option<&str>,
    keys: &KeyArgs,
    config: &Config,
) -> anyhow::Result<()> {
    let material = load_material(keys, config)?;
    let plaintext = Zeroizing::new(
        std::fs::read(input).with_context(|| format!("failed to read {}", input.display()))?,
    );

    tracing::info!(
        "Encrypting {} ({} bytes) with {}/{}",
        input.display(),
        plaintext.len(),
        material.algorithm,
        mode
    );

    let sealed = material.algorithm.seal(
        mode,
        &plaintext,
        &material.key,
        &material.nonce,
        ad.map(str::as_bytes),
    )?;
    std::fs::write(output, sealed.to_extract())
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Encrypted {} -> {}", input.display(), output.display());
    println!("Tag: {}", hex::encode(&sealed.tag));
    Ok(())
}

/// Verify and decrypt `input` into `output`
fn decrypt_file(
    input: &Path,
    output: &Path,
    mode: Mode,
    ad: Option<&str>,
    keys: &KeyArgs,
    config: &Config,
) -> anyhow::Result<()> {
    let material = load_material(keys, config)?;
    let data = std::fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let sealed = AuthenticatedData::from_extract(&data, material.algorithm.tag_len())?;

    tracing::info!(
        "Decrypting {} ({} bytes) with {}/{}",
        input.display(),
        sealed.ciphertext.len(),
        material.algorithm,
        mode
    );

    let plaintext = Zeroizing::new(
        material
            .algorithm
            .open(
                mode,
                &sealed.ciphertext,
                &material.key,
                &material.nonce,
                &sealed.tag,
                ad.map(str::as_bytes),
            )
            .with_context(|| format!("failed to decrypt {}", input.display()))?,
    );
    std::fs::write(output, &*plaintext)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Decrypted {} -> {}", input.display(), output.display());
    Ok(())
}

/// Append an integrity extract to `file`
fn seal_file(file: &Path, keys: &KeyArgs, config: &Config) -> anyhow::Result<()> {
    let material = load_material(keys, config)?;
    let service = IntegrityService::new(material.algorithm);
    let extract = service.seal_file(file, &material.key, &material.nonce)?;

    println!("Sealed: {}", file.display());
    println!("Extract: {}", hex::encode(extract));
    Ok(())
}

/// Check the integrity extract of `file`
fn verify_file(file: &Path, strip: bool, keys: &KeyArgs, config: &Config) -> anyhow::Result<bool> {
    let material = load_material(keys, config)?;
    let service = IntegrityService::new(material.algorithm);

    if !service.verify_file(file, &material.key, &material.nonce)? {
        println!("FAILED: {}", file.display());
        return Ok(false);
    }

    println!("OK: {}", file.display());
    if strip {
        service.strip_extract(file)?;
        println!("Extract removed");
    }
    Ok(true)
}

/// Generate a random key and nonce for `algorithm`
fn generate_key(algorithm: Algorithm, output: Option<&Path>) -> anyhow::Result<()> {
    let mut key = Zeroizing::new(vec![0u8; algorithm.key_len()]);
    let mut nonce = vec![0u8; algorithm.nonce_len()];
    OsRng.fill_bytes(&mut key);
    OsRng.fill_bytes(&mut nonce);

    let key_hex = Zeroizing::new(hex::encode(&*key));
    println!("Algorithm: {algorithm}");

    if let Some(path) = output {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, key_hex.as_bytes())?;
        println!("Key saved to: {}", path.display());
        println!("\nKeep this file secure! It contains your key.");
    } else {
        println!("Key: {}", key_hex.as_str());
    }
    println!("Nonce: {}", hex::encode(nonce));
    println!("Never reuse a nonce with the same key.");

    Ok(())
}
