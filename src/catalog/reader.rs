//! TS catalog parsing.
//!
//! The reader is a pull parser over the TS XML container. It resolves
//! relative location hints to absolute lines while parsing and fails fast on
//! a malformed catalog with a diagnostic naming the offending context/entry
//! and line, rather than silently dropping strings.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result, bail};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::location::OffsetTracker;
use super::{Catalog, Context, Message, TS_VERSION, TranslationStatus};
use crate::utils::{build_line_index, offset_to_line};

/// Message child elements that carry translator metadata we do not model.
/// They are valid TS, so they are skipped rather than rejected.
const IGNORED_MESSAGE_CHILDREN: &[&[u8]] = &[
    b"comment",
    b"extracomment",
    b"translatorcomment",
    b"oldsource",
    b"oldcomment",
    b"userdata",
];

/// Read and parse a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    parse_catalog(&content)
        .with_context(|| format!("Failed to parse catalog: {}", path.display()))
}

/// Parse a catalog from its XML text.
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    Parser::new(content).parse()
}

struct Parser<'a> {
    reader: Reader<&'a [u8]>,
    line_index: Vec<usize>,
    tracker: OffsetTracker,
}

impl<'a> Parser<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            reader: Reader::from_str(content),
            line_index: build_line_index(content),
            tracker: OffsetTracker::new(),
        }
    }

    /// 1-based line of the most recently read event.
    fn line(&self) -> usize {
        offset_to_line(&self.line_index, self.reader.buffer_position() as usize)
    }

    fn parse(mut self) -> Result<Catalog> {
        let (mut catalog, root_is_empty) = self.parse_root()?;
        if root_is_empty {
            return Ok(catalog);
        }

        loop {
            match self.reader.read_event()? {
                Event::Start(e) if e.name().as_ref() == b"context" => {
                    let context = self.parse_context()?;
                    if catalog.contexts.iter().any(|c| c.name == context.name) {
                        bail!("duplicate context \"{}\"", context.name);
                    }
                    catalog.contexts.push(context);
                }
                Event::End(e) if e.name().as_ref() == b"TS" => break,
                Event::Start(e) | Event::Empty(e) => {
                    bail!(
                        "unexpected element <{}> in <TS> at line {}",
                        element_name(&e),
                        self.line()
                    );
                }
                Event::Text(t) if t.unescape()?.trim().is_empty() => {}
                Event::Text(_) => bail!("unexpected text in <TS> at line {}", self.line()),
                Event::Comment(_) => {}
                Event::Eof => bail!("unexpected end of file: <TS> is not closed"),
                _ => {}
            }
        }

        Ok(catalog)
    }

    /// Consume the prolog and the `<TS>` start tag. Returns the catalog shell
    /// and whether the root element was self-closing.
    fn parse_root(&mut self) -> Result<(Catalog, bool)> {
        loop {
            match self.reader.read_event()? {
                Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => {}
                Event::Text(t) if t.unescape()?.trim().is_empty() => {}
                Event::Start(e) if e.name().as_ref() == b"TS" => {
                    return Ok((self.catalog_from_root(&e)?, false));
                }
                Event::Empty(e) if e.name().as_ref() == b"TS" => {
                    return Ok((self.catalog_from_root(&e)?, true));
                }
                Event::Start(e) | Event::Empty(e) => {
                    bail!(
                        "expected <TS> root element, found <{}> at line {}",
                        element_name(&e),
                        self.line()
                    );
                }
                Event::Eof => bail!("expected <TS> root element, found end of file"),
                _ => bail!("expected <TS> root element at line {}", self.line()),
            }
        }
    }

    fn catalog_from_root(&self, root: &BytesStart<'_>) -> Result<Catalog> {
        let version = match attribute(root, "version")? {
            Some(version) => version,
            None => TS_VERSION.to_string(),
        };
        let language = attribute(root, "language")?;

        Ok(Catalog {
            version,
            language,
            contexts: Vec::new(),
        })
    }

    fn parse_context(&mut self) -> Result<Context> {
        let start_line = self.line();
        let mut name: Option<String> = None;
        let mut messages = Vec::new();

        loop {
            match self.reader.read_event()? {
                Event::Start(e) if e.name().as_ref() == b"name" => {
                    if name.is_some() {
                        bail!("context at line {} has more than one <name>", start_line);
                    }
                    name = Some(self.read_text(b"name")?);
                }
                Event::Start(e) if e.name().as_ref() == b"message" => {
                    if attribute(&e, "numerus")?.as_deref() == Some("yes") {
                        bail!(
                            "plural (numerus) message in context \"{}\" at line {} is not supported",
                            name.as_deref().unwrap_or("?"),
                            self.line()
                        );
                    }
                    messages.push(self.parse_message(name.as_deref())?);
                }
                Event::Empty(e) if e.name().as_ref() == b"message" => {
                    bail!(
                        "message in context \"{}\" at line {} is missing a <source>",
                        name.as_deref().unwrap_or("?"),
                        self.line()
                    );
                }
                // Optional translator comment on the context itself.
                Event::Start(e) if e.name().as_ref() == b"comment" => {
                    self.reader.read_to_end(e.to_end().name())?;
                }
                Event::End(e) if e.name().as_ref() == b"context" => break,
                Event::Start(e) | Event::Empty(e) => {
                    bail!(
                        "unexpected element <{}> in <context> at line {}",
                        element_name(&e),
                        self.line()
                    );
                }
                Event::Text(t) if t.unescape()?.trim().is_empty() => {}
                Event::Text(_) => {
                    bail!("unexpected text in <context> at line {}", self.line())
                }
                Event::Comment(_) => {}
                Event::Eof => {
                    bail!("unexpected end of file inside context at line {}", start_line)
                }
                _ => {}
            }
        }

        match name {
            Some(name) => Ok(Context { name, messages }),
            None => bail!("context at line {} is missing a <name>", start_line),
        }
    }

    fn parse_message(&mut self, context: Option<&str>) -> Result<Message> {
        let start_line = self.line();
        let context_name = context.unwrap_or("?");
        let mut source: Option<String> = None;
        let mut source_line = start_line;
        let mut translation = String::new();
        let mut status = TranslationStatus::default();
        let mut locations = Vec::new();

        loop {
            match self.reader.read_event()? {
                Event::Empty(e) if e.name().as_ref() == b"location" => {
                    locations.push(self.resolve_location(&e, context_name)?);
                }
                Event::Start(e) if e.name().as_ref() == b"location" => {
                    locations.push(self.resolve_location(&e, context_name)?);
                    self.reader.read_to_end(e.to_end().name())?;
                }
                Event::Start(e) if e.name().as_ref() == b"source" => {
                    source_line = self.line();
                    source = Some(self.read_text(b"source")?);
                }
                Event::Empty(e) if e.name().as_ref() == b"source" => {
                    source_line = self.line();
                    source = Some(String::new());
                }
                Event::Start(e) if e.name().as_ref() == b"translation" => {
                    status = self.translation_status(&e)?;
                    translation = self.read_text(b"translation")?;
                }
                Event::Empty(e) if e.name().as_ref() == b"translation" => {
                    status = self.translation_status(&e)?;
                    translation = String::new();
                }
                Event::Start(e) if IGNORED_MESSAGE_CHILDREN.contains(&e.name().as_ref()) => {
                    self.reader.read_to_end(e.to_end().name())?;
                }
                Event::Empty(e) if IGNORED_MESSAGE_CHILDREN.contains(&e.name().as_ref()) => {}
                Event::End(e) if e.name().as_ref() == b"message" => break,
                Event::Start(e) | Event::Empty(e) => {
                    bail!(
                        "unexpected element <{}> in message of context \"{}\" at line {}",
                        element_name(&e),
                        context_name,
                        self.line()
                    );
                }
                Event::Text(t) if t.unescape()?.trim().is_empty() => {}
                Event::Text(_) => bail!(
                    "unexpected text in message of context \"{}\" at line {}",
                    context_name,
                    self.line()
                ),
                Event::Comment(_) => {}
                Event::Eof => bail!(
                    "unexpected end of file inside message of context \"{}\" at line {}",
                    context_name,
                    start_line
                ),
                _ => {}
            }
        }

        match source {
            Some(source) => Ok(Message {
                source,
                translation,
                status,
                locations,
                line: source_line,
            }),
            None => bail!(
                "message in context \"{}\" at line {} is missing a <source>",
                context_name,
                start_line
            ),
        }
    }

    fn resolve_location(
        &mut self,
        element: &BytesStart<'_>,
        context_name: &str,
    ) -> Result<super::Location> {
        let filename = attribute(element, "filename")?;
        let line = match attribute(element, "line")? {
            Some(line) => line,
            None => bail!(
                "location in context \"{}\" at line {} is missing a line attribute",
                context_name,
                self.line()
            ),
        };

        self.tracker
            .resolve(filename.as_deref(), &line)
            .with_context(|| {
                format!(
                    "invalid location in context \"{}\" at line {}",
                    context_name,
                    self.line()
                )
            })
    }

    fn translation_status(&self, element: &BytesStart<'_>) -> Result<TranslationStatus> {
        match attribute(element, "type")? {
            None => Ok(TranslationStatus::Finished),
            Some(value) => match TranslationStatus::from_attr(&value) {
                Some(status) => Ok(status),
                None => bail!(
                    "unknown translation type \"{}\" at line {}",
                    value,
                    self.line()
                ),
            },
        }
    }

    /// Accumulate the text content of an element until its end tag.
    fn read_text(&mut self, end: &[u8]) -> Result<String> {
        let mut out = String::new();
        loop {
            match self.reader.read_event()? {
                Event::Text(t) => out.push_str(&t.unescape()?),
                Event::CData(c) => {
                    out.push_str(std::str::from_utf8(&c).context("invalid UTF-8 in CDATA")?);
                }
                Event::End(e) if e.name().as_ref() == end => break,
                Event::Start(e) | Event::Empty(e) => bail!(
                    "unexpected element <{}> inside <{}> at line {}",
                    element_name(&e),
                    String::from_utf8_lossy(end),
                    self.line()
                ),
                Event::Comment(_) => {}
                Event::Eof => bail!(
                    "unexpected end of file inside <{}>",
                    String::from_utf8_lossy(end)
                ),
                _ => {}
            }
        }
        Ok(out)
    }
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    match element.try_get_attribute(name)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}
