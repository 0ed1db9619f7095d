//! Declarative macros that declare vim25 schema types.
//!
//! Three shapes cover the vocabulary:
//! - `vim_enum!`: a closed set of string literals (`xsd:restriction`).
//! - `vim_type!`: a complex type, optionally extending a parent type.
//! - `vim_any!`: a polymorphic slot holding any member of a type family,
//!   selected by `xsi:type` on decode.
//!
//! Field multiplicity is spelled `req` (exactly one), `opt` (zero or one) and
//! `many` (zero or more, kept in document order).

/// Declare a vim25 enumeration.
///
/// ```ignore
/// vim_enum! {
///     pub enum TaskInfoState {
///         Queued => "queued",
///         Running => "running",
///     }
/// }
/// ```
macro_rules! vim_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $literal:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Schema type name.
            pub const TYPE_NAME: &'static str = stringify!($name);

            /// Every value, in schema declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// The wire literal for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $literal, )+
                }
            }

            /// Look a value up by its wire literal.
            pub fn from_value(value: &str) -> Result<Self, $crate::xml::UnknownEnumValue> {
                match value {
                    $( $literal => Ok($name::$variant), )+
                    _ => Err($crate::xml::UnknownEnumValue {
                        type_name: stringify!($name),
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::xml::UnknownEnumValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_value(s)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl $crate::xml::XmlValue for $name {
            fn write_xml(
                &self,
                w: &mut $crate::xml::XmlWriter,
                name: &str,
            ) -> Result<(), $crate::xml::XmlError> {
                w.text_element(name, &[], self.as_str())
            }

            fn read_xml(node: &$crate::xml::XmlNode) -> Result<Self, $crate::xml::XmlError> {
                Ok(Self::from_value(node.text().trim())?)
            }
        }
    };
}

/// Rust type of a field given its multiplicity.
macro_rules! vim_field_ty {
    (req $ty:ty) => { $ty };
    (opt $ty:ty) => { Option<$ty> };
    (many $ty:ty) => { Vec<$ty> };
}

/// Write one field; evaluates to `Result<(), XmlError>`.
macro_rules! vim_write_field {
    (req $w:ident, $value:expr, $xml:literal) => {
        $crate::xml::XmlValue::write_xml($value, $w, $xml)
    };
    (opt $w:ident, $value:expr, $xml:literal) => {
        match $value {
            Some(v) => $crate::xml::XmlValue::write_xml(v, $w, $xml),
            None => Ok(()),
        }
    };
    (many $w:ident, $value:expr, $xml:literal) => {
        $value
            .iter()
            .try_for_each(|v| $crate::xml::XmlValue::write_xml(v, $w, $xml))
    };
}

/// Read one field; evaluates to `Result<field type, XmlError>`.
macro_rules! vim_read_field {
    (req $node:ident, $type_name:expr, $xml:literal, $ty:ty) => {
        $crate::xml::required::<$ty>($node, $type_name, $xml)
    };
    (opt $node:ident, $type_name:expr, $xml:literal, $ty:ty) => {
        $crate::xml::optional::<$ty>($node, $xml)
    };
    (many $node:ident, $type_name:expr, $xml:literal, $ty:ty) => {
        $crate::xml::repeated::<$ty>($node, $xml)
    };
}

/// Declare a vim25 complex type.
///
/// ```ignore
/// vim_type! {
///     pub struct AlarmEvent extends Event {
///         req alarm: AlarmEventArgument => "alarm",
///         opt source: String => "source",
///         many tags: String => "tag",
///     }
/// }
/// ```
///
/// A derived type stores its parent in `base` (flattened when serialised
/// with serde) and writes the parent's elements first.
macro_rules! vim_type {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $kind:ident $field:ident : $ty:ty => $xml:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $crate::xml::vim_field_ty!($kind $ty), )*
        }

        impl $crate::xml::VimType for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn type_names() -> Vec<&'static str> {
                vec![Self::TYPE_NAME]
            }

            #[allow(unused_variables)]
            fn write_fields(
                &self,
                w: &mut $crate::xml::XmlWriter,
            ) -> Result<(), $crate::xml::XmlError> {
                $( $crate::xml::vim_write_field!($kind w, &self.$field, $xml)?; )*
                Ok(())
            }

            #[allow(unused_variables)]
            fn read_fields(node: &$crate::xml::XmlNode) -> Result<Self, $crate::xml::XmlError> {
                Ok(Self {
                    $( $field: $crate::xml::vim_read_field!(
                        $kind node, stringify!($name), $xml, $ty
                    )?, )*
                })
            }
        }

        $crate::xml::vim_type!(@value $name);
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident extends $parent:ident {
            $( $(#[$fmeta:meta])* $kind:ident $field:ident : $ty:ty => $xml:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            #[serde(flatten)]
            pub base: $parent,
            $( $(#[$fmeta])* pub $field: $crate::xml::vim_field_ty!($kind $ty), )*
        }

        impl AsRef<$parent> for $name {
            fn as_ref(&self) -> &$parent {
                &self.base
            }
        }

        impl $crate::xml::VimType for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn type_names() -> Vec<&'static str> {
                let mut names = vec![Self::TYPE_NAME];
                names.extend(<$parent as $crate::xml::VimType>::type_names());
                names
            }

            fn write_fields(
                &self,
                w: &mut $crate::xml::XmlWriter,
            ) -> Result<(), $crate::xml::XmlError> {
                <$parent as $crate::xml::VimType>::write_fields(&self.base, w)?;
                $( $crate::xml::vim_write_field!($kind w, &self.$field, $xml)?; )*
                Ok(())
            }

            fn read_fields(node: &$crate::xml::XmlNode) -> Result<Self, $crate::xml::XmlError> {
                Ok(Self {
                    base: <$parent as $crate::xml::VimType>::read_fields(node)?,
                    $( $field: $crate::xml::vim_read_field!(
                        $kind node, stringify!($name), $xml, $ty
                    )?, )*
                })
            }
        }

        $crate::xml::vim_type!(@value $name);
    };

    (@value $name:ident) => {
        impl $crate::xml::XmlValue for $name {
            fn write_xml(
                &self,
                w: &mut $crate::xml::XmlWriter,
                name: &str,
            ) -> Result<(), $crate::xml::XmlError> {
                w.start(name, &[])?;
                $crate::xml::VimType::write_fields(self, w)?;
                w.end(name)
            }

            fn read_xml(node: &$crate::xml::XmlNode) -> Result<Self, $crate::xml::XmlError> {
                <Self as $crate::xml::VimType>::read_fields(node)
            }
        }
    };
}

/// Declare a polymorphic slot over a type family.
///
/// Each member lists the field path from the member to the root type, so
/// `AlarmCreatedEvent [base base]` reaches its `Event` through
/// `value.base.base`. Types the crate does not know decode as
/// `Unrecognized`, keeping the root type's fields.
///
/// ```ignore
/// vim_any! {
///     pub enum AnyEvent: Event {
///         Event [],
///         AlarmEvent [base],
///         AlarmCreatedEvent [base base],
///     }
/// }
/// ```
macro_rules! vim_any {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $root:ident {
            $( $variant:ident [ $( $segment:ident )* ] ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        #[serde(tag = "_type")]
        pub enum $name {
            $( $variant($variant), )+
            /// A member of the family this crate has no type for.
            Unrecognized {
                #[serde(rename = "typeName")]
                type_name: String,
                #[serde(flatten)]
                base: $root,
            },
        }

        impl $name {
            /// The concrete schema type name.
            pub fn type_name(&self) -> &str {
                match self {
                    $( Self::$variant(_) => <$variant as $crate::xml::VimType>::TYPE_NAME, )+
                    Self::Unrecognized { type_name, .. } => type_name,
                }
            }

            /// The concrete type name followed by its known ancestors.
            pub fn type_names(&self) -> Vec<&str> {
                match self {
                    $( Self::$variant(_) => <$variant as $crate::xml::VimType>::type_names(), )+
                    Self::Unrecognized { type_name, .. } => {
                        let mut names = vec![type_name.as_str()];
                        names.extend(<$root as $crate::xml::VimType>::type_names());
                        names
                    }
                }
            }

            /// Whether the value is an instance of `type_name` or one of its subtypes.
            pub fn is_a(&self, type_name: &str) -> bool {
                self.type_names().contains(&type_name)
            }

            /// Fields shared by every member of the family.
            pub fn root(&self) -> &$root {
                match self {
                    $( Self::$variant(v) => &(*v) $( .$segment )*, )+
                    Self::Unrecognized { base, .. } => base,
                }
            }

            /// Decode `node` as the named member of the family.
            pub fn decode_as(
                type_name: &str,
                node: &$crate::xml::XmlNode,
            ) -> Result<Self, $crate::xml::XmlError> {
                $(
                    if type_name == stringify!($variant) {
                        return Ok(Self::$variant(
                            <$variant as $crate::xml::VimType>::read_fields(node)?,
                        ));
                    }
                )+
                Ok(Self::Unrecognized {
                    type_name: type_name.to_string(),
                    base: <$root as $crate::xml::VimType>::read_fields(node)?,
                })
            }
        }

        impl $crate::xml::XmlValue for $name {
            fn write_xml(
                &self,
                w: &mut $crate::xml::XmlWriter,
                name: &str,
            ) -> Result<(), $crate::xml::XmlError> {
                w.start(name, &[("xsi:type", self.type_name())])?;
                match self {
                    $( Self::$variant(v) => $crate::xml::VimType::write_fields(v, w)?, )+
                    Self::Unrecognized { base, .. } => $crate::xml::VimType::write_fields(base, w)?,
                }
                w.end(name)
            }

            fn read_xml(node: &$crate::xml::XmlNode) -> Result<Self, $crate::xml::XmlError> {
                let type_name = node
                    .xsi_type
                    .as_deref()
                    .unwrap_or(<$root as $crate::xml::VimType>::TYPE_NAME);
                Self::decode_as(type_name, node)
            }
        }

        $(
            impl From<$variant> for $name {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

pub(crate) use {vim_any, vim_enum, vim_field_ty, vim_read_field, vim_type, vim_write_field};
