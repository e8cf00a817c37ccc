//! Address trace parsing.
//!
//! A trace is plain text with one virtual address per line, written in
//! decimal or `0x`-prefixed hex. Blank lines and `#` comments are skipped.

use std::io::BufRead;

use thiserror::Error;

/// Error reading an address trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace source could not be read.
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    /// A line is not a decimal or hex number.
    #[error("line {line}: cannot parse {text:?} as an address")]
    BadAddress {
        /// 1-based line number.
        line: usize,
        /// Offending text after comment stripping.
        text: String,
    },
}

/// Parses a single address token.
pub fn parse_address(text: &str) -> Option<u64> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u64::from_str_radix(&hex.replace('_', ""), 16).ok()
    } else {
        text.replace('_', "").parse().ok()
    }
}

/// Reads every address from `reader`.
///
/// # Errors
///
/// Fails on the first unreadable line or unparsable address.
pub fn read_trace(reader: impl BufRead) -> Result<Vec<u64>, TraceError> {
    let mut addrs = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }
        let addr = parse_address(text).ok_or_else(|| TraceError::BadAddress {
            line: idx + 1,
            text: text.to_owned(),
        })?;
        addrs.push(addr);
    }
    Ok(addrs)
}
