//! Verbose rendering of an error chain.
//!
//! The output layout is a stable external contract: a header line, then one
//! delimited block per chain link, outermost first. Optional fields obey
//! strict omission rules; an unset timestamp or missing location is absent
//! from the output, never rendered as a zero value.

use chrono::SecondsFormat;
use std::fmt::Write as _;

use crate::pool;
use crate::types::enhanced::{Cause, EnhancedError};

const HEADER: &str = "EnhancedError:\n";
const BLOCK_BEGIN: &str = ">>>>>>>>>>>>>\n";
const BLOCK_END: &str = "<<<<<<<<<<<<<\n";

/// Walks the chain outermost-to-innermost into one string.
///
/// The scratch buffer comes from the process-wide pool and is returned
/// unconditionally; the result is an independent owned copy, so concurrent
/// renders never share backing storage.
pub(crate) fn render_verbose(err: &EnhancedError) -> String {
    let mut buf = pool::acquire();
    buf.push_str(HEADER);

    let mut current = err;
    loop {
        write_block(&mut buf, current);
        match current.wrapped.as_deref() {
            Some(Cause::Enhanced(inner)) => current = inner,
            Some(Cause::Opaque(foreign)) => {
                // Foreign links carry no structured fields and end the walk.
                buf.push_str(BLOCK_BEGIN);
                buf.push_str(foreign.message());
                buf.push('\n');
                buf.push_str(BLOCK_END);
                break;
            }
            None => break,
        }
    }

    let out = buf.clone();
    pool::release(buf);
    out
}

fn write_block(buf: &mut String, err: &EnhancedError) {
    buf.push_str(BLOCK_BEGIN);
    let _ = writeln!(buf, "ERRO      = {}", err.message);
    if let Some(description) = &err.description {
        if !description.is_empty() {
            let _ = writeln!(buf, "DESC      = {description}");
        }
    }
    if !err.meta.is_empty() {
        buf.push_str("META      =");
        for entry in &err.meta {
            let _ = write!(buf, " [{}: {}]", entry.key(), entry.value());
        }
        buf.push('\n');
    }
    if let Some(occurred_at) = err.occurred_at {
        let _ = writeln!(
            buf,
            "OCCU      = {}",
            occurred_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
    }
    if let Some(location) = &err.location {
        let _ = writeln!(buf, "FUNC      = {}", location.function());
        let _ = writeln!(buf, "SEEK      = {}:{}", location.file(), location.line());
    }
    buf.push_str(BLOCK_END);
}
