//! `xsd:anyType` values.
//!
//! Property values and task results arrive in untyped slots whose concrete
//! type is named by `xsi:type`. The common primitives, references, arrays and
//! the few complex types the client reads through the property collector are
//! decoded; everything else is kept as raw XML in [`AnyValue::Other`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::types::{
    HostSystemConnectionState, ManagedEntityStatus, ManagedObjectReference, TaskInfo,
    TaskInfoState, VirtualMachinePowerState,
};
use crate::xml::{VimType, XmlError, XmlNode, XmlValue, XmlWriter, repeated};

/// A value of statically unknown type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyValue {
    String(String),
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    DateTime(DateTime<Utc>),
    ManagedObjectReference(ManagedObjectReference),
    ArrayOfString(Vec<String>),
    ArrayOfInt(Vec<i32>),
    ArrayOfLong(Vec<i64>),
    ArrayOfManagedObjectReference(Vec<ManagedObjectReference>),
    TaskInfo(Box<TaskInfo>),
    VirtualMachinePowerState(VirtualMachinePowerState),
    ManagedEntityStatus(ManagedEntityStatus),
    HostSystemConnectionState(HostSystemConnectionState),
    TaskInfoState(TaskInfoState),
    /// A type without a dedicated variant, kept as parsed.
    Other(XmlNode),
}

impl AnyValue {
    /// Schema type name carried in `xsi:type` when this value is written.
    pub fn type_name(&self) -> &str {
        match self {
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Byte(_) => "byte",
            Self::Short(_) => "short",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::DateTime(_) => "dateTime",
            Self::ManagedObjectReference(_) => "ManagedObjectReference",
            Self::ArrayOfString(_) => "ArrayOfString",
            Self::ArrayOfInt(_) => "ArrayOfInt",
            Self::ArrayOfLong(_) => "ArrayOfLong",
            Self::ArrayOfManagedObjectReference(_) => "ArrayOfManagedObjectReference",
            Self::TaskInfo(_) => TaskInfo::TYPE_NAME,
            Self::VirtualMachinePowerState(_) => VirtualMachinePowerState::TYPE_NAME,
            Self::ManagedEntityStatus(_) => ManagedEntityStatus::TYPE_NAME,
            Self::HostSystemConnectionState(_) => HostSystemConnectionState::TYPE_NAME,
            Self::TaskInfoState(_) => TaskInfoState::TYPE_NAME,
            Self::Other(node) => node.type_name(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mor(&self) -> Option<&ManagedObjectReference> {
        match self {
            Self::ManagedObjectReference(mor) => Some(mor),
            _ => None,
        }
    }

    pub fn as_task_info(&self) -> Option<&TaskInfo> {
        match self {
            Self::TaskInfo(info) => Some(info),
            _ => None,
        }
    }

    /// Human-readable rendering for tables and logs.
    pub fn display(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Boolean(b) => b.to_string(),
            Self::Byte(n) => n.to_string(),
            Self::Short(n) => n.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Long(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Double(n) => n.to_string(),
            Self::DateTime(dt) => dt.to_rfc3339(),
            Self::ManagedObjectReference(mor) => mor.to_string(),
            Self::ArrayOfString(items) => items.join(", "),
            Self::ArrayOfInt(items) => join(items),
            Self::ArrayOfLong(items) => join(items),
            Self::ArrayOfManagedObjectReference(items) => join(items),
            Self::TaskInfo(info) => format!("{} ({})", info.key, info.state),
            Self::VirtualMachinePowerState(v) => v.to_string(),
            Self::ManagedEntityStatus(v) => v.to_string(),
            Self::HostSystemConnectionState(v) => v.to_string(),
            Self::TaskInfoState(v) => v.to_string(),
            Self::Other(node) => format!("<{}>", node.type_name()),
        }
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_primitive(w: &mut XmlWriter, name: &str, xsd: &str, text: &str) -> Result<(), XmlError> {
    w.text_element(name, &[("xsi:type", xsd)], text)
}

fn write_array<T: XmlValue>(
    w: &mut XmlWriter,
    name: &str,
    array_type: &str,
    item: &str,
    items: &[T],
) -> Result<(), XmlError> {
    w.start(name, &[("xsi:type", array_type)])?;
    for value in items {
        value.write_xml(w, item)?;
    }
    w.end(name)
}

/// XML Schema built-in types that may appear in `xsi:type`.
const XSD_TYPES: &[&str] = &[
    "anyType",
    "anyURI",
    "base64Binary",
    "boolean",
    "byte",
    "dateTime",
    "decimal",
    "double",
    "float",
    "int",
    "integer",
    "long",
    "short",
    "string",
    "unsignedByte",
    "unsignedInt",
    "unsignedLong",
    "unsignedShort",
];

/// `xsi:type` value with the `xsd:` prefix restored for schema built-ins.
fn qualified_xsi_type(ty: &str) -> String {
    if XSD_TYPES.contains(&ty) {
        format!("xsd:{ty}")
    } else {
        ty.to_string()
    }
}

fn write_node(w: &mut XmlWriter, name: &str, node: &XmlNode) -> Result<(), XmlError> {
    let xsi_type = node.xsi_type.as_deref().map(qualified_xsi_type);
    let mut attributes: Vec<(&str, &str)> = Vec::new();
    if let Some(ty) = xsi_type.as_deref() {
        attributes.push(("xsi:type", ty));
    }
    attributes.extend(node.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    if node.children.is_empty() {
        return w.text_element(name, &attributes, node.text());
    }
    w.start(name, &attributes)?;
    for child in &node.children {
        write_node(w, &child.name, child)?;
    }
    w.end(name)
}

impl XmlValue for AnyValue {
    fn write_xml(&self, w: &mut XmlWriter, name: &str) -> Result<(), XmlError> {
        match self {
            Self::String(v) => write_primitive(w, name, "xsd:string", v),
            Self::Boolean(v) => write_primitive(w, name, "xsd:boolean", &v.to_string()),
            Self::Byte(v) => write_primitive(w, name, "xsd:byte", &v.to_string()),
            Self::Short(v) => write_primitive(w, name, "xsd:short", &v.to_string()),
            Self::Int(v) => write_primitive(w, name, "xsd:int", &v.to_string()),
            Self::Long(v) => write_primitive(w, name, "xsd:long", &v.to_string()),
            Self::Float(v) => write_primitive(w, name, "xsd:float", &v.to_string()),
            Self::Double(v) => write_primitive(w, name, "xsd:double", &v.to_string()),
            Self::DateTime(v) => write_primitive(
                w,
                name,
                "xsd:dateTime",
                &v.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            ),
            Self::ManagedObjectReference(mor) => mor.write_typed(w, name),
            Self::ArrayOfString(items) => write_array(w, name, "ArrayOfString", "string", items),
            Self::ArrayOfInt(items) => write_array(w, name, "ArrayOfInt", "int", items),
            Self::ArrayOfLong(items) => write_array(w, name, "ArrayOfLong", "long", items),
            Self::ArrayOfManagedObjectReference(items) => write_array(
                w,
                name,
                "ArrayOfManagedObjectReference",
                "ManagedObjectReference",
                items,
            ),
            Self::TaskInfo(info) => {
                w.start(name, &[("xsi:type", TaskInfo::TYPE_NAME)])?;
                info.write_fields(w)?;
                w.end(name)
            }
            Self::VirtualMachinePowerState(v) => {
                w.text_element(name, &[("xsi:type", VirtualMachinePowerState::TYPE_NAME)], v.as_str())
            }
            Self::ManagedEntityStatus(v) => {
                w.text_element(name, &[("xsi:type", ManagedEntityStatus::TYPE_NAME)], v.as_str())
            }
            Self::HostSystemConnectionState(v) => w.text_element(
                name,
                &[("xsi:type", HostSystemConnectionState::TYPE_NAME)],
                v.as_str(),
            ),
            Self::TaskInfoState(v) => {
                w.text_element(name, &[("xsi:type", TaskInfoState::TYPE_NAME)], v.as_str())
            }
            Self::Other(node) => write_node(w, name, node),
        }
    }

    fn read_xml(node: &XmlNode) -> Result<Self, XmlError> {
        let Some(type_name) = node.xsi_type.as_deref() else {
            return Ok(Self::Other(node.clone()));
        };
        let value = match type_name {
            "string" => Self::String(String::read_xml(node)?),
            "boolean" => Self::Boolean(bool::read_xml(node)?),
            "byte" => Self::Byte(i8::read_xml(node)?),
            "short" => Self::Short(i16::read_xml(node)?),
            "int" => Self::Int(i32::read_xml(node)?),
            "long" => Self::Long(i64::read_xml(node)?),
            "float" => Self::Float(f32::read_xml(node)?),
            "double" => Self::Double(f64::read_xml(node)?),
            "dateTime" => Self::DateTime(DateTime::<Utc>::read_xml(node)?),
            "ManagedObjectReference" => {
                Self::ManagedObjectReference(ManagedObjectReference::read_xml(node)?)
            }
            "ArrayOfString" => Self::ArrayOfString(repeated(node, "string")?),
            "ArrayOfInt" => Self::ArrayOfInt(repeated(node, "int")?),
            "ArrayOfLong" => Self::ArrayOfLong(repeated(node, "long")?),
            "ArrayOfManagedObjectReference" => {
                Self::ArrayOfManagedObjectReference(repeated(node, "ManagedObjectReference")?)
            }
            "TaskInfo" => Self::TaskInfo(Box::new(TaskInfo::read_fields(node)?)),
            "VirtualMachinePowerState" => {
                Self::VirtualMachinePowerState(VirtualMachinePowerState::read_xml(node)?)
            }
            "ManagedEntityStatus" => Self::ManagedEntityStatus(ManagedEntityStatus::read_xml(node)?),
            "HostSystemConnectionState" => {
                Self::HostSystemConnectionState(HostSystemConnectionState::read_xml(node)?)
            }
            "TaskInfoState" => Self::TaskInfoState(TaskInfoState::read_xml(node)?),
            _ => Self::Other(node.clone()),
        };
        Ok(value)
    }
}

impl From<String> for AnyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for AnyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<ManagedObjectReference> for AnyValue {
    fn from(value: ManagedObjectReference) -> Self {
        Self::ManagedObjectReference(value)
    }
}
