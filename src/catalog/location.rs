//! Source-location hints attached to messages.
//!
//! TS files produced with relative locations (`lupdate -locations relative`)
//! encode each hint as a delta against the previous hint for the same file:
//! `<location line="+14"/>` means "14 lines after the previous hint in this
//! file", and a hint without a `filename` attribute inherits the most recent
//! filename. That state spans the whole document, not a single context, so
//! encoding and decoding share the [`OffsetTracker`] below.

use std::collections::HashMap;

use anyhow::{Result, bail};

/// Where a source string appears in the UI sources. Used only by translator
/// tooling to re-sync entries after source edits, never at lookup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path as recorded by the extraction tool, usually relative to the
    /// catalog file (e.g. `../worldeditor/src/editors/meshedit/meshedit.ui`).
    pub file: String,
    /// Absolute 1-based line number.
    pub line: u32,
}

/// Decodes and encodes the relative location-hint scheme.
///
/// One tracker instance must be threaded through an entire catalog in
/// document order; resetting it mid-file would mis-resolve every later
/// offset.
#[derive(Debug, Default)]
pub struct OffsetTracker {
    current_file: Option<String>,
    last_line: HashMap<String, i64>,
}

impl OffsetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve one `<location>` element to an absolute location.
    ///
    /// `filename` is the raw attribute value if present; `line` is the raw
    /// line attribute (`"+14"`, `"-3"`, or an absolute `"187"`).
    pub fn resolve(&mut self, filename: Option<&str>, line: &str) -> Result<Location> {
        let file = match filename {
            Some(name) => {
                self.current_file = Some(name.to_string());
                name.to_string()
            }
            None => match &self.current_file {
                Some(name) => name.clone(),
                None => bail!("location has a relative offset but no filename is in effect"),
            },
        };

        let absolute = if let Some(rest) = line.strip_prefix('+') {
            let delta: i64 = parse_line_number(rest, line)?;
            self.last_line.get(&file).copied().unwrap_or(0) + delta
        } else if let Some(rest) = line.strip_prefix('-') {
            let delta: i64 = parse_line_number(rest, line)?;
            self.last_line.get(&file).copied().unwrap_or(0) - delta
        } else {
            parse_line_number(line, line)?
        };

        if absolute < 1 {
            bail!(
                "location offset \"{}\" resolves to line {} in \"{}\"",
                line,
                absolute,
                file
            );
        }

        self.last_line.insert(file.clone(), absolute);
        Ok(Location {
            file,
            line: absolute as u32,
        })
    }

    /// Encode one absolute location as `(filename attribute, line attribute)`
    /// in the relative scheme. The filename attribute is omitted when it
    /// matches the previously emitted one.
    pub fn encode(&mut self, location: &Location) -> (Option<String>, String) {
        let filename = if self.current_file.as_deref() == Some(location.file.as_str()) {
            None
        } else {
            self.current_file = Some(location.file.clone());
            Some(location.file.clone())
        };

        let last = self.last_line.get(&location.file).copied().unwrap_or(0);
        let delta = i64::from(location.line) - last;
        self.last_line.insert(location.file.clone(), location.line.into());

        (filename, format!("{:+}", delta))
    }
}

fn parse_line_number(digits: &str, raw: &str) -> Result<i64> {
    match digits.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(_) => bail!("invalid location line attribute \"{}\"", raw),
    }
}
