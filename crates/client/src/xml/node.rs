//! In-memory XML element tree.
//!
//! Responsibilities:
//! - Parse a SOAP document into a small owned tree of elements.
//! - Resolve `xsi:type` against the XML Schema instance namespace, whatever
//!   prefix the server chose for it.
//!
//! Does NOT handle:
//! - Mapping elements onto vim25 types (see `value.rs` and the type macros).
//! - Preserving comments, processing instructions or namespace prefixes.
//!
//! Invariants:
//! - Element names are stored without their namespace prefix.
//! - `xmlns` declarations are never stored as attributes.
//! - Whitespace-only text between child elements is dropped; text of leaf
//!   elements is kept verbatim.

use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use serde::Serialize;
use std::collections::BTreeMap;

use super::error::XmlError;

/// Namespace of the `xsi:type` attribute.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// A parsed XML element.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct XmlNode {
    /// Local element name.
    pub name: String,
    /// Value of `xsi:type`, with any prefix (`xsd:`) removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xsi_type: Option<String>,
    /// Attributes other than namespace declarations and `xsi:type`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<XmlNode>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl XmlNode {
    /// Create an empty element with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse a complete document and return its root element.
    pub fn parse(input: &str) -> Result<Self, XmlError> {
        let mut reader = NsReader::from_str(input);
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let node = open_element(&reader, &start)?;
                    stack.push(node);
                }
                Event::Empty(start) => {
                    let node = open_element(&reader, &start)?;
                    attach(&mut stack, &mut root, node)?;
                }
                Event::End(end) => {
                    let mut node = stack.pop().ok_or_else(|| {
                        XmlError::Malformed("closing tag without matching start".to_string())
                    })?;
                    let local = end.local_name();
                    let name = utf8(local.as_ref())?;
                    if name != node.name {
                        return Err(XmlError::Malformed(format!(
                            "expected </{}>, found </{}>",
                            node.name, name
                        )));
                    }
                    if !node.children.is_empty() && node.text.trim().is_empty() {
                        node.text.clear();
                    }
                    attach(&mut stack, &mut root, node)?;
                }
                Event::Text(text) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(utf8(&data)?);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(XmlError::Malformed(format!(
                "unclosed element <{}>",
                open.name
            )));
        }

        root.ok_or_else(|| XmlError::Malformed("document has no root element".to_string()))
    }

    /// First child element with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements with the given local name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First child element regardless of name.
    pub fn first_element(&self) -> Option<&XmlNode> {
        self.children.first()
    }

    /// Text content of the element.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Plain (non-`xsi`) attribute by local name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The declared `xsi:type`, or the element name when none is given.
    pub fn type_name(&self) -> &str {
        self.xsi_type.as_deref().unwrap_or(&self.name)
    }
}

fn open_element(reader: &NsReader<&[u8]>, start: &BytesStart<'_>) -> Result<XmlNode, XmlError> {
    let mut node = XmlNode::new(utf8(start.local_name().as_ref())?);

    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let value = attr.unescape_value()?.into_owned();
        let (namespace, local) = reader.resolve_attribute(attr.key);
        let local = utf8(local.as_ref())?;
        match namespace {
            ResolveResult::Bound(Namespace(ns)) if ns == XSI_NAMESPACE.as_bytes() => {
                if local == "type" {
                    node.xsi_type = Some(strip_prefix(&value).to_string());
                }
            }
            _ => {
                node.attributes.insert(local.to_string(), value);
            }
        }
    }

    Ok(node)
}

fn attach(
    stack: &mut [XmlNode],
    root: &mut Option<XmlNode>,
    node: XmlNode,
) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(node);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(node);
            Ok(())
        }
        None => Err(XmlError::Malformed(
            "document has more than one root element".to_string(),
        )),
    }
}

fn strip_prefix(qualified: &str) -> &str {
    qualified
        .rsplit_once(':')
        .map_or(qualified, |(_, local)| local)
}

fn utf8(bytes: &[u8]) -> Result<&str, XmlError> {
    std::str::from_utf8(bytes).map_err(|e| XmlError::Malformed(format!("invalid UTF-8: {e}")))
}
