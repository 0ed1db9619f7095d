//! Request message bodies of the vim25 methods the client issues.
//!
//! Each type is the `{Method}RequestType` of the WSDL: `_this` is the managed
//! object the method is invoked on, followed by the method's parameters.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::types::{EventFilterSpec, ManagedObjectReference, PropertyFilterSpec, RetrieveOptions};
use crate::xml::{XmlError, XmlNode, XmlValue, XmlWriter, vim_type};

/// `Login` password. Only the XML writer sees the clear text.
#[derive(Clone)]
pub struct Password(SecretString);

impl Password {
    pub fn new(secret: SecretString) -> Self {
        Self(secret)
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self(SecretString::new(value.into()))
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl serde::Serialize for Password {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("[REDACTED]")
    }
}

impl XmlValue for Password {
    fn write_xml(&self, w: &mut XmlWriter, name: &str) -> Result<(), XmlError> {
        w.text_element(name, &[], self.0.expose_secret())
    }

    fn read_xml(node: &XmlNode) -> Result<Self, XmlError> {
        Ok(Self::from(node.text()))
    }
}

vim_type! {
    pub struct RetrieveServiceContentRequestType {
        req this: ManagedObjectReference => "_this",
    }
}

vim_type! {
    pub struct LoginRequestType {
        req this: ManagedObjectReference => "_this",
        req user_name: String => "userName",
        req password: Password => "password",
        opt locale: String => "locale",
    }
}

vim_type! {
    /// Request with no parameters besides `_this` (`Logout`, `CurrentTime`,
    /// `DestroyView`, `PowerOffVM_Task`).
    pub struct ThisRequestType {
        req this: ManagedObjectReference => "_this",
    }
}

vim_type! {
    pub struct CreateContainerViewRequestType {
        req this: ManagedObjectReference => "_this",
        req container: ManagedObjectReference => "container",
        many r#type: String => "type",
        req recursive: bool => "recursive",
    }
}

vim_type! {
    pub struct RetrievePropertiesExRequestType {
        req this: ManagedObjectReference => "_this",
        many spec_set: PropertyFilterSpec => "specSet",
        req options: RetrieveOptions => "options",
    }
}

vim_type! {
    pub struct ContinueRetrievePropertiesExRequestType {
        req this: ManagedObjectReference => "_this",
        req token: String => "token",
    }
}

vim_type! {
    pub struct QueryEventsRequestType {
        req this: ManagedObjectReference => "_this",
        req filter: EventFilterSpec => "filter",
    }
}

vim_type! {
    pub struct PowerOnVmRequestType {
        req this: ManagedObjectReference => "_this",
        /// Host to power on on; defaults to the VM's current host.
        opt host: ManagedObjectReference => "host",
    }
}

impl ThisRequestType {
    pub fn new(this: ManagedObjectReference) -> Self {
        Self { this }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{VimType, XmlWriter};

    #[test]
    fn test_login_request_fields_in_order() {
        let request = LoginRequestType {
            this: ManagedObjectReference::new("SessionManager", "SessionManager"),
            user_name: "admin".to_string(),
            password: Password::from("p<&>"),
            locale: None,
        };
        let mut w = XmlWriter::new();
        request.write_fields(&mut w).unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            concat!(
                "<_this type=\"SessionManager\">SessionManager</_this>",
                "<userName>admin</userName><password>p&lt;&amp;&gt;</password>"
            )
        );
    }

    #[test]
    fn test_login_request_debug_redacts_password() {
        let request = LoginRequestType {
            this: ManagedObjectReference::new("SessionManager", "SessionManager"),
            user_name: "root".to_string(),
            password: Password::from("hunter2"),
            locale: None,
        };
        let debug = format!("{request:?}");
        assert!(debug.contains("root"));
        assert!(!debug.contains("hunter2"));

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("hunter2"));
    }
}
