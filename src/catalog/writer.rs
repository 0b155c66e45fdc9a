//! TS catalog serialization.
//!
//! The writer emits the same container shape `lupdate` produces: XML
//! declaration, `<!DOCTYPE TS>`, and a `<TS>` root. Output is canonically
//! indented, so re-serializing a parsed catalog is equivalent rather than
//! byte-identical; equivalence is over the (context, source, translation)
//! triples plus the resolved location hints.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::location::OffsetTracker;
use super::{Catalog, Message};

/// How location hints are written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationMode {
    /// `line="+14"` deltas, the style `lupdate -locations relative` emits
    /// and the style the editor's catalogs use.
    #[default]
    Relative,
    /// Absolute `filename`/`line` on every hint.
    Absolute,
    /// Omit location hints entirely.
    None,
}

/// Serialize a catalog to TS XML text.
pub fn write_catalog(catalog: &Catalog, mode: LocationMode) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::new("TS")))?;

    let mut root = BytesStart::new("TS");
    root.push_attribute(("version", catalog.version.as_str()));
    if let Some(language) = &catalog.language {
        root.push_attribute(("language", language.as_str()));
    }
    writer.write_event(Event::Start(root))?;

    let mut tracker = OffsetTracker::new();
    for context in &catalog.contexts {
        writer.write_event(Event::Start(BytesStart::new("context")))?;
        write_text_element(&mut writer, "name", &context.name)?;
        for message in &context.messages {
            write_message(&mut writer, message, mode, &mut tracker)?;
        }
        writer.write_event(Event::End(BytesEnd::new("context")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("TS")))?;

    let mut out = String::from_utf8(writer.into_inner()).context("catalog is not valid UTF-8")?;
    out.push('\n');
    Ok(out)
}

/// Serialize a catalog and write it to disk.
pub fn save_catalog(catalog: &Catalog, path: &Path, mode: LocationMode) -> Result<()> {
    let content = write_catalog(catalog, mode)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write catalog file: {}", path.display()))
}

fn write_message(
    writer: &mut Writer<Vec<u8>>,
    message: &Message,
    mode: LocationMode,
    tracker: &mut OffsetTracker,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("message")))?;

    if mode != LocationMode::None {
        for location in &message.locations {
            let mut element = BytesStart::new("location");
            match mode {
                LocationMode::Relative => {
                    let (filename, line) = tracker.encode(location);
                    if let Some(filename) = filename {
                        element.push_attribute(("filename", filename.as_str()));
                    }
                    element.push_attribute(("line", line.as_str()));
                }
                LocationMode::Absolute => {
                    element.push_attribute(("filename", location.file.as_str()));
                    element.push_attribute(("line", location.line.to_string().as_str()));
                }
                LocationMode::None => unreachable!(),
            }
            writer.write_event(Event::Empty(element))?;
        }
    }

    write_text_element(writer, "source", &message.source)?;

    let mut translation = BytesStart::new("translation");
    if let Some(status) = message.status.as_attr() {
        translation.push_attribute(("type", status));
    }
    if message.translation.is_empty() {
        writer.write_event(Event::Empty(translation))?;
    } else {
        writer.write_event(Event::Start(translation))?;
        writer.write_event(Event::Text(text_event(&message.translation)))?;
        writer.write_event(Event::End(BytesEnd::new("translation")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("message")))?;
    Ok(())
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(text_event(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

// lupdate leaves quotes and apostrophes literal in text content, so escape
// only the markup characters.
fn text_event(text: &str) -> BytesText<'_> {
    BytesText::from_escaped(partial_escape(text))
}
