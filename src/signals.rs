use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use nix::sys::signal::{self, SigHandler, Signal};

static INTERRUPTED: OnceLock<Arc<AtomicBool>> = OnceLock::new();

/// Install SIGINT/SIGTERM handlers that set `flag`.
///
/// Only the first call registers a flag; later calls reinstall the
/// handlers but keep the first flag.
pub fn install_interrupt_handler(flag: Arc<AtomicBool>) -> nix::Result<()> {
    let _ = INTERRUPTED.set(flag);

    // SAFETY: the handler only performs an atomic store.
    unsafe {
        signal::signal(Signal::SIGINT, SigHandler::Handler(handle_interrupt))?;
        signal::signal(Signal::SIGTERM, SigHandler::Handler(handle_interrupt))?;
    }

    Ok(())
}

extern "C" fn handle_interrupt(_: i32) {
    if let Some(flag) = INTERRUPTED.get() {
        flag.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_interrupt_handler() {
        let flag = Arc::new(AtomicBool::new(false));

        let result = install_interrupt_handler(flag.clone());
        assert!(result.is_ok());
    }

    #[test]
    fn test_handler_sets_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        install_interrupt_handler(flag).unwrap();
        let registered = INTERRUPTED.get().unwrap();

        handle_interrupt(2);

        assert!(registered.load(Ordering::SeqCst));
        registered.store(false, Ordering::SeqCst);
    }
}
