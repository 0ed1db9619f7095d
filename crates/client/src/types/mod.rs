//! The vim25 vocabulary.
//!
//! Types are organised by area in submodules and re-exported here.
//! Field names are the schema's element names in snake case; schema
//! inheritance is composition through a `base` field.

pub mod any_value;
pub mod common;
pub mod enums;
pub mod events;
pub mod faults;
pub mod property;
pub mod requests;
pub mod service;
pub mod task;

pub use any_value::AnyValue;
pub use common::{KeyAnyValue, KeyValue, LocalizableMessage, ManagedObjectReference};
pub use enums::{
    ActionParameter, EventEventSeverity, EventFilterSpecRecursionOption,
    HostSystemConnectionState, HostSystemPowerState, ManagedEntityStatus, ScsiLunState,
    TaskInfoState, VirtualMachineConnectionState, VirtualMachinePowerState,
};
pub use events::{
    AlarmCreatedEvent, AlarmEvent, AlarmEventArgument, AlarmStatusChangedEvent, AnyEvent,
    ComputeResourceEventArgument, DatacenterEventArgument, DatastoreDestroyedEvent,
    DatastoreEvent, DatastoreEventArgument, DatastoreRenamedEvent, EntityEventArgument, Event,
    EventArgument, EventFilterSpec, EventFilterSpecByEntity, EventFilterSpecByTime,
    EventFilterSpecByUsername, GeneralEvent, GeneralUserEvent, HostConnectedEvent,
    HostDisconnectedEvent, HostEvent, HostEventArgument, ManagedEntityEventArgument,
    NetworkEventArgument, SessionEvent, TaskEvent, UserLoginSessionEvent, UserLogoutSessionEvent,
    VmCreatedEvent, VmEvent, VmEventArgument, VmPoweredOffEvent, VmPoweredOnEvent,
};
pub use faults::{
    AlreadyExists, AnyFault, CannotAccessFile, DuplicateName, FileAlreadyExists, FileFault,
    FileNotFound, HostCommunication, HostNotConnected, HostNotReachable, InvalidArgument,
    InvalidLocale, InvalidLogin, InvalidName, InvalidPowerState, InvalidProperty, InvalidRequest,
    InvalidState, ManagedObjectNotFound, MethodFault, MethodNotFound, NoPermission,
    NotAuthenticated, NotFound, NotImplemented, NotSupported, RequestCanceled, RuntimeFault,
    SecurityError, SoapFault, SystemError, TaskInProgress, VimFault,
};
pub use property::{
    AnySelectionSpec, DynamicProperty, MissingProperty, ObjectContent, ObjectSpec,
    PropertyFilterSpec, PropertySpec, RetrieveOptions, RetrieveResult, SelectionSpec,
    TraversalSpec,
};
pub use service::{AboutInfo, ServiceContent, UserSession};
pub use task::{LocalizedMethodFault, TaskInfo};
