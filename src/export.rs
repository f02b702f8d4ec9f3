//! File output for recorded traces.
//!
//! A trace can be written two ways for a replaying consumer:
//! - pretty-printed JSON, one object per step (snapshot, focus, action tag,
//!   message), the format a browser UI loads for animation;
//! - numbered narration text, the same lines the CLI prints.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::trace::{format_trace, Step};

/// Writes a trace as pretty-printed JSON.
pub fn save_json(path: &Path, steps: &[Step]) -> std::io::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, steps)?;
    Ok(())
}

/// Writes a trace as numbered narration text.
pub fn save_text(path: &Path, steps: &[Step]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    write!(file, "{}", format_trace(steps))?;
    Ok(())
}
