//! Process hardening for a tool that holds private keys in memory.
//!
//! Disables core dumps so that a crash while a seed or decrypted key is
//! live never writes it to disk. Best effort: failure is logged, not fatal.

use std::sync::atomic::{AtomicBool, Ordering};

static CORE_DUMPS_DISABLED: AtomicBool = AtomicBool::new(false);

/// Set `RLIMIT_CORE` to zero for this process.
///
/// Returns `true` once core dumps are off. Safe to call more than once.
pub fn disable_core_dumps() -> bool {
    if CORE_DUMPS_DISABLED.load(Ordering::SeqCst) {
        return true;
    }

    let disabled = platform::disable_core_dumps();
    if disabled {
        CORE_DUMPS_DISABLED.store(true, Ordering::SeqCst);
    }
    disabled
}

#[cfg(unix)]
mod platform {
    pub fn disable_core_dumps() -> bool {
        let limit = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        // SAFETY: setrlimit only reads the struct we pass by reference.
        let result = unsafe { libc::setrlimit(libc::RLIMIT_CORE, &limit) };
        if result != 0 {
            log::warn!(
                "failed to disable core dumps: {}",
                std::io::Error::last_os_error()
            );
            return false;
        }
        log::debug!("core dumps disabled");
        true
    }
}

#[cfg(not(unix))]
mod platform {
    pub fn disable_core_dumps() -> bool {
        log::warn!("core dump prevention is not supported on this platform");
        false
    }
}
