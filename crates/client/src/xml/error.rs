//! Error types for the XML codec.

use thiserror::Error;

/// An enumeration literal that is not part of the closed value set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{value}' is not a valid {type_name} value")]
pub struct UnknownEnumValue {
    pub type_name: &'static str,
    pub value: String,
}

/// Errors raised while reading or writing vim25 XML.
#[derive(Error, Debug)]
pub enum XmlError {
    /// The underlying XML reader or writer failed.
    #[error("XML error: {0}")]
    Syntax(#[from] quick_xml::Error),

    /// Writing to the output buffer failed.
    #[error("XML write error: {0}")]
    Io(#[from] std::io::Error),

    /// An attribute could not be read.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// The document is well formed at the token level but not as a tree.
    #[error("Malformed XML document: {0}")]
    Malformed(String),

    /// A required child element was absent.
    #[error("{type_name} is missing required element <{element}>")]
    MissingElement {
        type_name: &'static str,
        element: &'static str,
    },

    /// A required attribute was absent.
    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    /// Text content could not be converted to the target type.
    #[error("Invalid {type_name} value '{value}'")]
    InvalidValue {
        type_name: &'static str,
        value: String,
    },

    /// Enumeration literal outside the allowed set.
    #[error(transparent)]
    UnknownEnumValue(#[from] UnknownEnumValue),
}

impl XmlError {
    pub(crate) fn invalid(type_name: &'static str, value: &str) -> Self {
        Self::InvalidValue {
            type_name,
            value: value.to_string(),
        }
    }
}
