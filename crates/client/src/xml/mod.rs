//! XML codec for the vim25 vocabulary.
//!
//! `node` parses documents into an owned tree, `writer` streams them out, and
//! `value` maps between the two and Rust values. The macros in `macros`
//! declare schema types on top of those traits.

mod error;
mod macros;
mod node;
mod value;
mod writer;

pub use error::{UnknownEnumValue, XmlError};
pub use node::{XSI_NAMESPACE, XmlNode};
pub use value::{VimType, XmlValue, optional, repeated, required};
pub use writer::XmlWriter;

pub(crate) use macros::{vim_any, vim_enum, vim_field_ty, vim_read_field, vim_type, vim_write_field};
