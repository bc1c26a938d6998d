//! Best-effort capture of the call site where an error was constructed.
//!
//! [`Location::capture`] resolves the function name, source file, and line of
//! a stack frame at a caller-supplied depth. Capture never fails hard: when
//! the stack cannot be resolved (depth past the top, missing debug info) it
//! yields `None` and the error simply carries no location.
//!
//! Absolute paths are normalized to a readable relative form: everything up
//! through a `/src/` marker segment (or a `/pkg/mod/` vendor marker) is
//! stripped, so toolchain and registry paths don't dominate the output.

use std::fmt;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A captured call site: function name, normalized file path, and line.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub(crate) function: String,
    pub(crate) file: String,
    pub(crate) line: u32,
}

impl Location {
    /// Builds a location, normalizing the file path.
    ///
    /// # Examples
    ///
    /// ```
    /// use richerr::Location;
    ///
    /// let loc = Location::new("app::load", "/home/me/app/src/load.rs", 12);
    /// assert_eq!(loc.file(), "load.rs");
    ///
    /// let loc = Location::new("dep::f", "/go/pkg/mod/dep@v1/f.rs", 3);
    /// assert_eq!(loc.file(), "dep@v1/f.rs");
    ///
    /// let loc = Location::new("f", "relative/main.rs", 1);
    /// assert_eq!(loc.file(), "relative/main.rs");
    /// ```
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        let file = file.into();
        let file = shorten(&file).to_string();
        Self { function: function.into(), file, line }
    }

    /// Resolves the stack frame `skip` levels above the immediate caller.
    ///
    /// `skip = 0` records the caller of `capture` itself. Returns `None` when
    /// the frame cannot be resolved to a file and line.
    #[inline(never)]
    pub fn capture(skip: usize) -> Option<Self> {
        let mut seen_self = false;
        let mut remaining = skip;
        let mut found: Option<Location> = None;

        backtrace::trace(|frame| {
            let mut done = false;
            backtrace::resolve_frame(frame, |symbol| {
                if found.is_some() {
                    done = true;
                    return;
                }
                let name = match symbol.name() {
                    Some(n) => n.to_string(),
                    None => return,
                };
                // Frames above our own are backtrace internals.
                if !seen_self {
                    if name.contains("Location") && name.contains("::capture") && !name.contains("closure") {
                        seen_self = true;
                    }
                    return;
                }
                if remaining > 0 {
                    remaining -= 1;
                    return;
                }
                let file = symbol
                    .filename()
                    .map(Path::to_string_lossy)
                    .map(|p| p.into_owned())
                    .unwrap_or_default();
                if file.is_empty() {
                    return;
                }
                found = Some(Location::new(name, file, symbol.lineno().unwrap_or(0)));
                done = true;
            });
            !done
        });

        found
    }

    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Strips an absolute path down to the segment after a `/src/` marker, or
/// after a `/pkg/mod/` vendor marker when no `/src/` applies.
///
/// A marker at index zero does not count: the remainder would lose the only
/// meaningful part of the path. Non-absolute paths pass through unchanged.
fn shorten(path: &str) -> &str {
    let bytes = path.as_bytes();
    let absolute = bytes.first() == Some(&b'/') || bytes.get(1) == Some(&b':');
    if !absolute {
        return path;
    }
    if let Some(idx) = path.find("/src/") {
        if idx > 0 {
            return &path[idx + "/src/".len()..];
        }
    }
    if let Some(idx) = path.find("/pkg/mod/") {
        if idx > 0 {
            return &path[idx + "/pkg/mod/".len()..];
        }
    }
    path
}
