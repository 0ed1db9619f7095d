//! Streaming XML writer used by the request encoder.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::error::XmlError;

/// Thin wrapper over `quick_xml::Writer` writing into memory.
///
/// Text and attribute values are escaped by quick-xml.
pub struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlWriter {
    pub fn new() -> Self {
        Self {
            inner: Writer::new(Vec::new()),
        }
    }

    /// Write the `<?xml version="1.0" encoding="UTF-8"?>` declaration.
    pub fn declaration(&mut self) -> Result<(), XmlError> {
        self.inner
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(())
    }

    /// Open an element.
    pub fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), XmlError> {
        let mut start = BytesStart::new(name);
        for &(key, value) in attributes {
            start.push_attribute((key, value));
        }
        self.inner.write_event(Event::Start(start))?;
        Ok(())
    }

    /// Close an element opened with [`XmlWriter::start`].
    pub fn end(&mut self, name: &str) -> Result<(), XmlError> {
        self.inner.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Write escaped character data.
    pub fn text(&mut self, text: &str) -> Result<(), XmlError> {
        self.inner.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// Write `<name attrs>text</name>`, or `<name attrs/>` when `text` is empty.
    pub fn text_element(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
        text: &str,
    ) -> Result<(), XmlError> {
        if text.is_empty() {
            let mut start = BytesStart::new(name);
            for &(key, value) in attributes {
                start.push_attribute((key, value));
            }
            self.inner.write_event(Event::Empty(start))?;
            return Ok(());
        }
        self.start(name, attributes)?;
        self.text(text)?;
        self.end(name)
    }

    /// Finish writing and return the document.
    pub fn into_string(self) -> Result<String, XmlError> {
        String::from_utf8(self.inner.into_inner())
            .map_err(|e| XmlError::Malformed(format!("writer produced invalid UTF-8: {e}")))
    }
}
