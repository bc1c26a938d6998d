//! Process-wide scratch-buffer pool for verbose rendering.
//!
//! Rendering an error chain in a logging hot path would otherwise allocate a
//! fresh buffer per call. The pool is lazily initialized, lives for the
//! process duration, and bounds both the number of retained buffers and the
//! capacity each may keep, so a one-off huge render does not pin memory.

use std::sync::{Mutex, OnceLock};

const MAX_POOLED: usize = 16;
const MAX_RETAINED_CAPACITY: usize = 16 * 1024;

static POOL: OnceLock<Mutex<Vec<String>>> = OnceLock::new();

fn pool() -> &'static Mutex<Vec<String>> {
    POOL.get_or_init(|| Mutex::new(Vec::new()))
}

/// Takes a cleared buffer from the pool, or allocates a fresh one.
///
/// A poisoned lock degrades to allocation; rendering must never fail.
pub(crate) fn acquire() -> String {
    match pool().lock() {
        Ok(mut buffers) => buffers.pop().unwrap_or_default(),
        Err(_) => String::new(),
    }
}

/// Clears and returns a buffer to the pool.
///
/// Buffers over the retention cap are dropped so the pool shrinks back after
/// an unusually large render.
pub(crate) fn release(mut buf: String) {
    buf.clear();
    if buf.capacity() > MAX_RETAINED_CAPACITY {
        return;
    }
    if let Ok(mut buffers) = pool().lock() {
        if buffers.len() < MAX_POOLED {
            buffers.push(buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_release_round_trip() {
        let mut buf = acquire();
        buf.push_str("scratch");
        release(buf);
        // A released buffer comes back cleared.
        let again = acquire();
        assert!(again.is_empty());
        release(again);
    }

    #[test]
    fn test_oversized_buffer_not_retained() {
        let mut buf = acquire();
        buf.reserve(MAX_RETAINED_CAPACITY + 1);
        release(buf);
        let again = acquire();
        assert!(again.capacity() <= MAX_RETAINED_CAPACITY);
        release(again);
    }
}
