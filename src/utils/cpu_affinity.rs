//! Pin the measuring thread to the core it is running on.
//!
//! Only Linux is supported (through `libc`); elsewhere the guard is a no-op
//! and measurements simply run unpinned.

#[cfg(target_os = "linux")]
mod platform {
    use std::mem;

    /// Affinity mask to restore once the guard is dropped.
    pub struct Saved(libc::cpu_set_t);

    pub fn pin_to_current_core() -> Option<Saved> {
        // SAFETY: `cpu_set_t` is plain data; every pointer passed to libc
        // points at a live, correctly sized local.
        unsafe {
            let mut original: libc::cpu_set_t = mem::zeroed();
            if libc::sched_getaffinity(0, mem::size_of::<libc::cpu_set_t>(), &mut original) != 0 {
                return None;
            }

            let core = libc::sched_getcpu();
            if core < 0 {
                return None;
            }

            let mut pinned: libc::cpu_set_t = mem::zeroed();
            libc::CPU_ZERO(&mut pinned);
            libc::CPU_SET(core as usize, &mut pinned);
            if libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), &pinned) != 0 {
                return None;
            }
            Some(Saved(original))
        }
    }

    pub fn restore(saved: &Saved) {
        // SAFETY: see `pin_to_current_core`.
        unsafe {
            libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), &saved.0);
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct Saved;

    pub fn pin_to_current_core() -> Option<Saved> {
        None
    }

    pub fn restore(_saved: &Saved) {}
}

/// RAII guard: pins on creation, restores the previous affinity on drop.
pub struct CpuPinGuard {
    saved: Option<platform::Saved>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let saved = platform::pin_to_current_core();
        if saved.is_none() {
            log::trace!("cpu pinning unavailable, measuring unpinned");
        }
        Self { saved }
    }

    /// Whether the thread is actually pinned.
    pub fn is_pinned(&self) -> bool {
        self.saved.is_some()
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            platform::restore(&saved);
        }
    }
}
