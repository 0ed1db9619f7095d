//! Mapping between Rust values and vim25 XML elements.
//!
//! Responsibilities:
//! - Define [`XmlValue`] (any value that can stand in an element position) and
//!   [`VimType`] (schema complex types, with inheritance).
//! - Implement both for the XML Schema primitives vim25 uses.
//! - Provide the `required` / `optional` / `repeated` field readers used by
//!   the type macros.
//!
//! Invariants:
//! - Numbers and booleans tolerate surrounding whitespace; strings do not trim.
//! - `xsd:dateTime` values are written in UTC with a `Z` suffix.

use chrono::{DateTime, SecondsFormat, Utc};

use super::error::XmlError;
use super::node::XmlNode;
use super::writer::XmlWriter;

/// A value that occupies a single XML element.
pub trait XmlValue: Sized {
    /// Write the value as an element called `name`.
    fn write_xml(&self, w: &mut XmlWriter, name: &str) -> Result<(), XmlError>;

    /// Read the value from an element (the element name is not checked).
    fn read_xml(node: &XmlNode) -> Result<Self, XmlError>;
}

/// A vim25 complex type.
///
/// Derived types write their parent's fields before their own, which is the
/// order XSD extension prescribes.
pub trait VimType: Sized {
    /// Schema type name, as it appears in `xsi:type`.
    const TYPE_NAME: &'static str;

    /// This type's name followed by the names of all its ancestors.
    fn type_names() -> Vec<&'static str>;

    /// Write the child elements of this value (not the enclosing element).
    fn write_fields(&self, w: &mut XmlWriter) -> Result<(), XmlError>;

    /// Read this value from the children of `node`.
    fn read_fields(node: &XmlNode) -> Result<Self, XmlError>;
}

/// Read a required child element.
pub fn required<T: XmlValue>(
    node: &XmlNode,
    type_name: &'static str,
    element: &'static str,
) -> Result<T, XmlError> {
    match node.child(element) {
        Some(child) => T::read_xml(child),
        None => Err(XmlError::MissingElement { type_name, element }),
    }
}

/// Read an optional child element.
pub fn optional<T: XmlValue>(node: &XmlNode, element: &str) -> Result<Option<T>, XmlError> {
    node.child(element).map(T::read_xml).transpose()
}

/// Read every child element with the given name, preserving order.
pub fn repeated<T: XmlValue>(node: &XmlNode, element: &str) -> Result<Vec<T>, XmlError> {
    node.children_named(element).map(T::read_xml).collect()
}

impl XmlValue for String {
    fn write_xml(&self, w: &mut XmlWriter, name: &str) -> Result<(), XmlError> {
        w.text_element(name, &[], self)
    }

    fn read_xml(node: &XmlNode) -> Result<Self, XmlError> {
        Ok(node.text().to_string())
    }
}

impl XmlValue for bool {
    fn write_xml(&self, w: &mut XmlWriter, name: &str) -> Result<(), XmlError> {
        w.text_element(name, &[], if *self { "true" } else { "false" })
    }

    fn read_xml(node: &XmlNode) -> Result<Self, XmlError> {
        match node.text().trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(XmlError::invalid("boolean", other)),
        }
    }
}

macro_rules! numeric_value {
    ($($ty:ty => $xsd:literal),+ $(,)?) => {
        $(
            impl XmlValue for $ty {
                fn write_xml(&self, w: &mut XmlWriter, name: &str) -> Result<(), XmlError> {
                    w.text_element(name, &[], &self.to_string())
                }

                fn read_xml(node: &XmlNode) -> Result<Self, XmlError> {
                    let text = node.text().trim();
                    text.parse::<$ty>().map_err(|_| XmlError::invalid($xsd, text))
                }
            }
        )+
    };
}

numeric_value! {
    i8 => "byte",
    i16 => "short",
    i32 => "int",
    i64 => "long",
    f32 => "float",
    f64 => "double",
}

impl XmlValue for DateTime<Utc> {
    fn write_xml(&self, w: &mut XmlWriter, name: &str) -> Result<(), XmlError> {
        w.text_element(name, &[], &self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    fn read_xml(node: &XmlNode) -> Result<Self, XmlError> {
        let text = node.text().trim();
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| XmlError::invalid("dateTime", text))
    }
}

impl<T: XmlValue> XmlValue for Box<T> {
    fn write_xml(&self, w: &mut XmlWriter, name: &str) -> Result<(), XmlError> {
        (**self).write_xml(w, name)
    }

    fn read_xml(node: &XmlNode) -> Result<Self, XmlError> {
        T::read_xml(node).map(Box::new)
    }
}
