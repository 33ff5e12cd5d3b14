//! Window startup guard.
//!
//! The windowing backend reports a missing display or GL context by panicking
//! before the first frame. The guard turns that into an ordinary error.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use anyhow::{Result, anyhow};

/// Run the windowing entry point, converting a panic into an error
pub fn run_guarded<F: FnOnce()>(launch: F) -> Result<()> {
    panic::catch_unwind(AssertUnwindSafe(launch))
        .map_err(|payload| anyhow!("window startup failed: {}", panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown error")
}
