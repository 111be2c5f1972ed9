// PathScout - util/pathtext.rs
//
// Bounded path text buffer and separator-truncation helpers shared by the
// platform strategies. The buffer enforces the one invariant every strategy
// relies on: output length is strictly less than capacity, or nothing is
// written at all — never a silently truncated path.

use std::fmt;

/// A failed bounded copy: the text needed more room than the buffer allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTooLong {
    /// Byte length the text required.
    pub needed: usize,
    /// Capacity of the rejecting buffer.
    pub capacity: usize,
}

impl fmt::Display for CopyTooLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "text of {} bytes exceeds buffer capacity of {} bytes",
            self.needed, self.capacity
        )
    }
}

impl std::error::Error for CopyTooLong {}

/// Caller-owned, capacity-bounded directory path text.
///
/// Successful `set` calls leave the value with no trailing separator and a
/// byte length strictly below the capacity (headroom for the terminator at
/// the native boundary). A rejected `set` clears the buffer so stale
/// contents can never be mistaken for a result.
#[derive(Debug)]
pub struct BoundedPath {
    value: String,
    capacity: usize,
}

impl BoundedPath {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            value: String::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }

    /// Copy `text` into the buffer iff it fits.
    ///
    /// Trailing path separators are stripped first (a bare filesystem root
    /// like `/` is preserved). The fit check applies to the stored form:
    /// its length must be strictly less than the capacity.
    pub fn set(&mut self, text: &str) -> Result<(), CopyTooLong> {
        let stored = trim_trailing_separators(text);
        self.value.clear();
        if stored.len() >= self.capacity {
            return Err(CopyTooLong {
                needed: stored.len(),
                capacity: self.capacity,
            });
        }
        self.value.push_str(stored);
        Ok(())
    }
}

/// Strip trailing `/` and `\` separators, keeping a bare root intact.
fn trim_trailing_separators(text: &str) -> &str {
    let trimmed = text.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() && !text.is_empty() {
        // Path was nothing but separators; keep the root designator.
        &text[..1]
    } else {
        trimmed
    }
}

/// The substring of `text` up to, excluding, the last `separator`.
///
/// `None` when the separator never occurs. Used by the Windows strategy
/// (module path, `\`) and the web strategy (document location, `/`).
pub fn parent_of(text: &str, separator: char) -> Option<&str> {
    text.rfind(separator).map(|idx| &text[..idx])
}

// =============================================================================
// Tests
// =============================================================================
