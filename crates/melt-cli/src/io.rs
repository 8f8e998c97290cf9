//! Reading keys and seed phrases, writing restored key pairs.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use melt_core::RestoredKey;
use zeroize::Zeroizing;

/// Read a private key file into a zeroizing buffer.
pub fn read_key(path: &Path) -> Result<Zeroizing<Vec<u8>>> {
    let mut bytes = Zeroizing::new(Vec::new());
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .with_context(|| format!("could not read key {}", path.display()))?;
    Ok(bytes)
}

/// Resolve the `--seed` argument: `-` reads `stdin`, an existing file is
/// read, anything else is the phrase itself.
pub fn read_seed<R: Read>(arg: &str, mut stdin: R) -> Result<Zeroizing<String>> {
    let mut seed = Zeroizing::new(String::new());

    if arg == "-" {
        stdin
            .read_to_string(&mut seed)
            .context("could not read seed phrase from stdin")?;
        return Ok(seed);
    }

    let path = Path::new(arg);
    if path.is_file() {
        log::debug!("reading seed phrase from {}", path.display());
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut seed))
            .with_context(|| format!("could not read seed phrase from {}", path.display()))?;
        return Ok(seed);
    }

    seed.push_str(arg);
    Ok(seed)
}

/// `<path>.pub`
pub fn public_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".pub");
    PathBuf::from(name)
}

/// Write the private key to `path` (mode 0600) and the public line to
/// `<path>.pub`. If the public half cannot be written the private file is
/// removed again. Returns the public key path.
pub fn write_key_pair(path: &Path, key: &RestoredKey) -> Result<PathBuf> {
    write_private(path, key.private_key.as_bytes())
        .with_context(|| format!("failed to write private key to {}", path.display()))?;

    let public = public_path(path);
    if let Err(err) = fs::write(&public, key.public_key.as_bytes()) {
        if let Err(rm) = fs::remove_file(path) {
            log::warn!("could not remove {}: {}", path.display(), rm);
        }
        return Err(err).with_context(|| format!("failed to write public key to {}", public.display()));
    }

    Ok(public)
}

fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    // mode() only applies when the file is created
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(bytes)?;
    file.sync_all()
}
