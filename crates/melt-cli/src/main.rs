//! melt: back up an Ed25519 SSH key as a seed phrase, and restore it
//!
//! # Usage
//!
//! ```bash
//! melt ~/.ssh/id_ed25519                       # print the seed phrase
//! melt ~/.ssh/id_ed25519 > seed                # save it
//! melt restore --seed "seed phrase" ./my-key   # rebuild my-key and my-key.pub
//! melt restore ./my-key < seed
//! ```

mod config;
mod io;
mod prompt;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

use config::MeltConfig;

const PROGRAM: &str = "melt";
const MAX_WIDTH: usize = 72;

/// Generate a seed phrase from an SSH key
#[derive(Parser, Debug)]
#[command(name = "melt", version)]
#[command(
    long_about = "melt generates a seed phrase from an SSH key. That phrase can be used \
                  to rebuild your public and private keys."
)]
#[command(subcommand_negates_reqs = true)]
#[command(after_help = "EXAMPLES:
    melt ~/.ssh/id_ed25519
    melt ~/.ssh/id_ed25519 > seed
    melt restore --seed \"seed phrase\" ./restored_id25519
    melt restore ./restored_id25519 < seed")]
struct Cli {
    /// Seed phrase language, as a tag (en, ja, zh-Hant) or a name (japanese)
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Config file path
    #[arg(short, long, global = true, env = "MELT_CONFIG")]
    config: Option<PathBuf>,

    /// SSH private key to back up
    #[arg(required = true)]
    key: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recreate a key using the given seed phrase
    #[command(visible_aliases = ["res", "r"])]
    Restore(RestoreArgs),
}

#[derive(Args, Debug)]
struct RestoreArgs {
    /// Where to write the private key (`-` for stdout). The public key goes to `<PATH>.pub`.
    path: PathBuf,

    /// Seed phrase, a file holding it, or `-` for stdin
    #[arg(short, long, default_value = "-")]
    seed: String,

    /// Comment for the restored public key
    #[arg(long)]
    comment: Option<String>,
}

fn main() -> Result<()> {
    // Keep seeds and passphrases out of core files
    melt_core::memory::disable_core_dumps();

    let cli = Cli::parse();

    let source = MeltConfig::locate(cli.config.as_deref());
    let mut config = match &source {
        Some(path) => MeltConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => MeltConfig::default(),
    };
    config.apply_env_overrides();
    config.apply_flags(cli.language);
    config
        .validate()
        .context("Configuration validation failed")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log.level))
        .init();
    match &source {
        Some(path) => log::debug!("using config file {}", path.display()),
        None => log::debug!("no config file, using defaults"),
    }

    match cli.command {
        Some(Command::Restore(args)) => run_restore(&config, args),
        None => {
            let key = cli.key.context("missing the path of the key to back up")?;
            run_backup(&config, &key)
        }
    }
}

fn run_backup(config: &MeltConfig, path: &Path) -> Result<()> {
    let language = &config.defaults.language;
    let key = io::read_key(path)?;
    let mnemonic = melt_core::backup(&key, language, &mut prompt::unlock(path))
        .with_context(|| format!("could not back up {}", path.display()))?;
    let phrase = mnemonic.phrase();

    let mut stdout = std::io::stdout().lock();
    if stdout.is_terminal() {
        let message = backup_message(&phrase, language);
        stdout.write_all(message.as_bytes())?;
    } else {
        stdout.write_all(phrase.as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}

fn run_restore(config: &MeltConfig, args: RestoreArgs) -> Result<()> {
    let seed = io::read_seed(&args.seed, std::io::stdin().lock())?;
    let comment = args.comment.as_deref().unwrap_or(&config.defaults.comment);

    let restored = melt_core::restore(
        &seed,
        &config.defaults.language,
        &mut prompt::new_passphrase,
        comment,
    )
    .context("could not restore key")?;

    if args.path == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(restored.private_key.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let public = io::write_key_pair(&args.path, &restored)?;
    println!(
        "\n  Successfully restored keys to {} and {}\n  Fingerprint: {}\n",
        args.path.display(),
        public.display(),
        restored.fingerprint
    );
    Ok(())
}

/// The interactive backup report: what happened, the phrase, and the
/// command that brings the key back.
fn backup_message(phrase: &str, language: &str) -> Zeroizing<String> {
    let language_flag = if language == "en" {
        String::new()
    } else {
        format!(" --language {}", language)
    };
    let restore = Zeroizing::new(format!(
        "{} restore{} ./my-key --seed \"{}\"",
        PROGRAM, language_flag, phrase
    ));

    let mut out = Zeroizing::new(String::from("\n"));
    push_indented(
        &mut out,
        &wrap(
            &format!(
                "OK! Your key has been melted down to the seed phrase below. Store it \
                 somewhere safe. You can use {} to recover your key at any time.",
                PROGRAM
            ),
            MAX_WIDTH,
        ),
        "",
    );
    push_indented(&mut out, &Zeroizing::new(wrap(phrase, MAX_WIDTH)), "");
    out.push_str("  To recreate this key run:\n\n");
    push_indented(&mut out, &Zeroizing::new(wrap(&restore, MAX_WIDTH)), " \\");
    out
}

/// Fill `text` to `width` columns, breaking only at ASCII spaces so a
/// phrase word or a path is never split across lines.
fn wrap(text: &str, width: usize) -> String {
    let options = textwrap::Options::new(width)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit)
        .break_words(false);
    textwrap::fill(text, &options)
}

/// Append `text` indented by two spaces, ending every line but the last
/// with `continuation`, followed by a blank line.
fn push_indented(out: &mut String, text: &str, continuation: &str) {
    let mut lines = text.lines().peekable();
    while let Some(line) = lines.next() {
        out.push_str("  ");
        out.push_str(line);
        if lines.peek().is_some() {
            out.push_str(continuation);
        }
        out.push('\n');
    }
    out.push('\n');
}
