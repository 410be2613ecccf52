//! Suite-level setup using #[ctor].

use std::sync::atomic::{AtomicBool, Ordering};

/// Flag to track if the suite has been initialized.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initializes the suite (called by #[ctor] in main.rs).
///
/// Installs the tracing subscriber once so `RUST_LOG` works for every test.
pub fn init_suite() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    uibot_lib::logging::try_init();
}
