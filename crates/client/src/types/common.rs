//! Types shared across the vim25 vocabulary.
//!
//! `ManagedObjectReference` is written by hand because its identity lives in
//! an attribute, which the field macros do not model.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::types::AnyValue;
use crate::xml::{XmlError, XmlNode, XmlValue, XmlWriter, vim_type};

/// Reference to a server-side managed object, e.g. `VirtualMachine:vm-42`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ManagedObjectReference {
    /// Managed object type (`Folder`, `VirtualMachine`, ...).
    #[serde(rename = "type")]
    pub r#type: String,
    /// Server-assigned identifier.
    pub value: String,
}

impl ManagedObjectReference {
    pub fn new(r#type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            r#type: r#type.into(),
            value: value.into(),
        }
    }

    /// Write the reference with an explicit `xsi:type`, as needed inside `xsd:anyType` slots.
    pub(crate) fn write_typed(&self, w: &mut XmlWriter, name: &str) -> Result<(), XmlError> {
        w.text_element(
            name,
            &[
                ("xsi:type", "ManagedObjectReference"),
                ("type", self.r#type.as_str()),
            ],
            &self.value,
        )
    }
}

impl fmt::Display for ManagedObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.r#type, self.value)
    }
}

impl FromStr for ManagedObjectReference {
    type Err = XmlError;

    /// Parse the `Type:value` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((ty, value)) if !ty.is_empty() && !value.is_empty() => Ok(Self::new(ty, value)),
            _ => Err(XmlError::invalid("ManagedObjectReference", s)),
        }
    }
}

impl XmlValue for ManagedObjectReference {
    fn write_xml(&self, w: &mut XmlWriter, name: &str) -> Result<(), XmlError> {
        w.text_element(name, &[("type", self.r#type.as_str())], &self.value)
    }

    fn read_xml(node: &XmlNode) -> Result<Self, XmlError> {
        let ty = node.attr("type").ok_or_else(|| XmlError::MissingAttribute {
            element: node.name.clone(),
            attribute: "type",
        })?;
        Ok(Self::new(ty, node.text().trim()))
    }
}

vim_type! {
    /// A message key with arguments, plus the server-rendered text when available.
    pub struct LocalizableMessage {
        req key: String => "key",
        many arg: KeyAnyValue => "arg",
        opt message: String => "message",
    }
}

vim_type! {
    pub struct KeyAnyValue {
        req key: String => "key",
        req value: AnyValue => "value",
    }
}

vim_type! {
    pub struct KeyValue {
        req key: String => "key",
        req value: String => "value",
    }
}
