//! Reference trace loader.
//!
//! This module reads the logical address file before any translation happens. It performs:
//! 1. **Line parsing:** Each line yields one address; the leading integer is taken
//!    and anything after it ignored. The line text is kept for echoing in the output.
//! 2. **Fallback:** A line with no leading integer becomes address 0, or an error in strict mode.
//!    Blank lines inside the file count as such lines; blank lines at the end of the file
//!    are dropped.
//! 3. **Materialization:** The page sequence of the whole run, needed by the OPT policy.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::common::{LogicalAddr, PageNumber, Result, SimError};

/// All addresses of one run, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTrace {
    addresses: Vec<LogicalAddr>,
    /// Input text of each address, trimmed; parallel to `addresses`.
    texts: Vec<Box<str>>,
}

/// Parses the leading decimal integer of `text`.
///
/// Accepts optional leading whitespace and an optional sign, then consumes
/// digits until the first non-digit. Values wrap to 32 bits.
///
/// # Returns
///
/// `None` if no digit follows the optional sign.
pub fn parse_leading_int(text: &str) -> Option<i32> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i32 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.wrapping_mul(10).wrapping_add(i32::from(b - b'0'));
        seen = true;
    }

    seen.then(|| if negative { value.wrapping_neg() } else { value })
}

impl ReferenceTrace {
    /// Creates a trace from already parsed addresses, echoed as their decimal value.
    pub fn new(addresses: Vec<LogicalAddr>) -> Self {
        let texts = addresses.iter().map(|a| a.to_string().into()).collect();
        Self { addresses, texts }
    }

    /// Reads and parses the address file at `path`.
    ///
    /// # Errors
    ///
    /// [`SimError::ResourceUnavailable`] if the file cannot be opened,
    /// [`SimError::InputRead`] if reading it fails,
    /// [`SimError::MalformedAddress`] for a bad line in strict mode.
    pub fn from_path(path: impl AsRef<Path>, strict: bool) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SimError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let trace = Self::from_reader(file, strict)?;
        debug!(path = %path.display(), addresses = trace.len(), "loaded reference trace");
        Ok(trace)
    }

    /// Parses addresses from any reader, one per line.
    ///
    /// # Errors
    ///
    /// [`SimError::InputRead`] wrapping a read failure,
    /// [`SimError::MalformedAddress`] for a bad line in strict mode.
    pub fn from_reader<R: Read>(reader: R, strict: bool) -> Result<Self> {
        let mut builder = TraceBuilder::new(strict);
        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line.map_err(SimError::InputRead)?;
            builder.push_line(idx + 1, &line)?;
        }
        Ok(builder.finish())
    }

    /// Parses addresses from in-memory text.
    ///
    /// # Errors
    ///
    /// [`SimError::MalformedAddress`] for a bad line in strict mode.
    pub fn parse(text: &str, strict: bool) -> Result<Self> {
        let mut builder = TraceBuilder::new(strict);
        for (idx, line) in text.lines().enumerate() {
            builder.push_line(idx + 1, line)?;
        }
        Ok(builder.finish())
    }

    fn push(&mut self, addr: LogicalAddr, text: &str) {
        self.addresses.push(addr);
        self.texts.push(text.trim().into());
    }

    /// The addresses in input order.
    pub fn addresses(&self) -> &[LogicalAddr] {
        &self.addresses
    }

    /// The input text of the address at `index`, without surrounding whitespace.
    pub fn text(&self, index: usize) -> Option<&str> {
        self.texts.get(index).map(Box::as_ref)
    }

    /// Page number of every address, in input order.
    pub fn pages(&self) -> Vec<PageNumber> {
        self.addresses.iter().map(LogicalAddr::page).collect()
    }

    /// Number of addresses.
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Returns `true` if the trace holds no addresses.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// Line-at-a-time accumulator behind [`ReferenceTrace::from_reader`] and
/// [`ReferenceTrace::parse`].
struct TraceBuilder {
    strict: bool,
    trace: ReferenceTrace,
    /// Blank lines since the last address. They only become addresses once a
    /// non-blank line follows, so trailing blank lines never do.
    pending_blank: Vec<usize>,
}

impl TraceBuilder {
    fn new(strict: bool) -> Self {
        Self {
            strict,
            trace: ReferenceTrace::default(),
            pending_blank: Vec::new(),
        }
    }

    fn push_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        if line.trim().is_empty() {
            self.pending_blank.push(line_no);
            return Ok(());
        }
        for blank in std::mem::take(&mut self.pending_blank) {
            self.push_malformed(blank, "")?;
        }
        match parse_leading_int(line) {
            Some(v) => self.trace.push(LogicalAddr(v), line),
            None => self.push_malformed(line_no, line)?,
        }
        Ok(())
    }

    fn push_malformed(&mut self, line_no: usize, line: &str) -> Result<()> {
        if self.strict {
            return Err(SimError::MalformedAddress {
                line: line_no,
                text: line.to_string(),
            });
        }
        warn!(line = line_no, text = line, "malformed address, using 0");
        self.trace.push(LogicalAddr(0), line);
        Ok(())
    }

    fn finish(self) -> ReferenceTrace {
        if !self.pending_blank.is_empty() {
            debug!(lines = self.pending_blank.len(), "ignored trailing blank lines");
        }
        self.trace
    }
}

impl FromIterator<i32> for ReferenceTrace {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(LogicalAddr).collect())
    }
}
