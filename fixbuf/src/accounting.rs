// SPDX-License-Identifier: Apache-2.0

//! External memory accounting.
//!
//! Buffer storage lives outside whatever heap a host runtime manages, so a host
//! collector can't see it. Buffers report `+size` when allocated and `-size` when
//! released, where `size` is the storage length plus a fixed per-buffer overhead,
//! letting the host factor that memory into its collection heuristics. Reports
//! are best-effort signals; buffer correctness never depends on them.

use std::sync::atomic::{AtomicIsize, Ordering};
use log::trace;
use once_cell::sync::OnceCell;

/// A hook receiving each change in externally-held memory, in bytes.
pub type PressureHook = Box<dyn Fn(isize) + Send + Sync>;

/// Receives external memory changes from buffers.
pub trait Accounting {
	/// Reports a change of `delta` bytes in externally-held memory.
	fn adjust(&self, delta: isize);
}

/// Process-wide accounting, keeping a running total and forwarding each change
/// to the hook installed by [`set_pressure_hook`], if any.
#[derive(Copy, Clone, Debug, Default)]
pub struct GlobalAccounting;

static EXTERNAL_MEMORY: AtomicIsize = AtomicIsize::new(0);
static PRESSURE_HOOK: OnceCell<PressureHook> = OnceCell::new();

/// Installs the process-wide pressure hook. The hook can only be installed once;
/// returns `false` if one was already installed.
pub fn set_pressure_hook(hook: impl Fn(isize) + Send + Sync + 'static) -> bool {
	PRESSURE_HOOK.set(Box::new(hook)).is_ok()
}

/// Returns the total bytes currently reported through [`GlobalAccounting`].
pub fn external_memory() -> isize {
	EXTERNAL_MEMORY.load(Ordering::Relaxed)
}

impl Accounting for GlobalAccounting {
	fn adjust(&self, delta: isize) {
		let total = EXTERNAL_MEMORY.fetch_add(delta, Ordering::Relaxed).wrapping_add(delta);
		trace!("external memory changed by {delta}B, now {total}B");

		if let Some(hook) = PRESSURE_HOOK.get() {
			hook(delta);
		}
	}
}
