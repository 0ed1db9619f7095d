//! Property collector request and result types.

use crate::types::{AnyValue, LocalizedMethodFault, ManagedObjectReference};
use crate::xml::{vim_any, vim_type};

vim_type! {
    /// Which properties to fetch for objects of one managed type.
    pub struct PropertySpec {
        req r#type: String => "type",
        opt all: bool => "all",
        many path_set: String => "pathSet",
    }
}

impl PropertySpec {
    /// Fetch the given property paths of `managed_type`.
    pub fn new<I, S>(managed_type: impl Into<String>, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            r#type: managed_type.into(),
            all: None,
            path_set: paths.into_iter().map(Into::into).collect(),
        }
    }
}

vim_type! {
    /// Starting object of a property collector traversal.
    pub struct ObjectSpec {
        req obj: ManagedObjectReference => "obj",
        opt skip: bool => "skip",
        many select_set: AnySelectionSpec => "selectSet",
    }
}

impl ObjectSpec {
    pub fn new(obj: ManagedObjectReference) -> Self {
        Self {
            obj,
            skip: None,
            select_set: Vec::new(),
        }
    }
}

vim_type! {
    /// Reference to a named traversal, used to build recursive traversals.
    pub struct SelectionSpec {
        opt name: String => "name",
    }
}

vim_type! {
    /// Follow property `path` of objects of type `type`.
    pub struct TraversalSpec extends SelectionSpec {
        req r#type: String => "type",
        req path: String => "path",
        opt skip: bool => "skip",
        many select_set: AnySelectionSpec => "selectSet",
    }
}

vim_any! {
    pub enum AnySelectionSpec: SelectionSpec {
        SelectionSpec [],
        TraversalSpec [base],
    }
}

vim_type! {
    pub struct PropertyFilterSpec {
        many prop_set: PropertySpec => "propSet",
        many object_set: ObjectSpec => "objectSet",
        opt report_missing_objects_in_results: bool => "reportMissingObjectsInResults",
    }
}

impl PropertyFilterSpec {
    /// Properties of a single object.
    pub fn for_object<I, S>(obj: ManagedObjectReference, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spec = PropertySpec::new(obj.r#type.clone(), paths);
        Self {
            prop_set: vec![spec],
            object_set: vec![ObjectSpec::new(obj)],
            report_missing_objects_in_results: None,
        }
    }

    /// Properties of every `managed_type` object listed by a container view.
    ///
    /// The view itself is skipped; only the objects it references are returned.
    pub fn for_container_view<I, S>(
        view: ManagedObjectReference,
        managed_type: impl Into<String>,
        paths: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let traversal = TraversalSpec {
            base: SelectionSpec {
                name: Some("traverseEntities".to_string()),
            },
            r#type: "ContainerView".to_string(),
            path: "view".to_string(),
            skip: Some(false),
            select_set: Vec::new(),
        };
        let object = ObjectSpec {
            obj: view,
            skip: Some(true),
            select_set: vec![traversal.into()],
        };
        Self {
            prop_set: vec![PropertySpec::new(managed_type, paths)],
            object_set: vec![object],
            report_missing_objects_in_results: None,
        }
    }
}

vim_type! {
    pub struct RetrieveOptions {
        /// Page size hint; the server may return fewer objects.
        opt max_objects: i32 => "maxObjects",
    }
}

vim_type! {
    /// One page of `RetrievePropertiesEx` results.
    pub struct RetrieveResult {
        /// Present while more pages remain.
        opt token: String => "token",
        many objects: ObjectContent => "objects",
    }
}

vim_type! {
    pub struct ObjectContent {
        req obj: ManagedObjectReference => "obj",
        many prop_set: DynamicProperty => "propSet",
        many missing_set: MissingProperty => "missingSet",
    }
}

impl ObjectContent {
    /// Value of the named property, if it was returned.
    pub fn property(&self, name: &str) -> Option<&AnyValue> {
        self.prop_set.iter().find(|p| p.name == name).map(|p| &p.val)
    }
}

vim_type! {
    pub struct DynamicProperty {
        req name: String => "name",
        req val: AnyValue => "val",
    }
}

vim_type! {
    /// A requested property the server could not read.
    pub struct MissingProperty {
        req path: String => "path",
        req fault: LocalizedMethodFault => "fault",
    }
}
