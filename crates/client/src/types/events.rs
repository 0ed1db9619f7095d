//! Event types returned by `QueryEvents`, and the filter used to select them.
//!
//! Events form a deep hierarchy rooted at [`Event`]; [`AnyEvent`] holds any
//! member of it. Event types this crate does not declare decode as
//! `AnyEvent::Unrecognized` with the common `Event` fields intact.

use chrono::{DateTime, Utc};

use crate::types::{EventFilterSpecRecursionOption, ManagedObjectReference, TaskInfo};
use crate::xml::{vim_any, vim_type};

// Event arguments: entity references captured when the event was logged.

vim_type! {
    pub struct EventArgument {}
}

vim_type! {
    pub struct EntityEventArgument extends EventArgument {
        /// Entity name at the time of the event.
        req name: String => "name",
    }
}

vim_type! {
    pub struct VmEventArgument extends EntityEventArgument {
        req vm: ManagedObjectReference => "vm",
    }
}

vim_type! {
    pub struct HostEventArgument extends EntityEventArgument {
        req host: ManagedObjectReference => "host",
    }
}

vim_type! {
    pub struct DatacenterEventArgument extends EntityEventArgument {
        req datacenter: ManagedObjectReference => "datacenter",
    }
}

vim_type! {
    pub struct DatastoreEventArgument extends EntityEventArgument {
        req datastore: ManagedObjectReference => "datastore",
    }
}

vim_type! {
    pub struct ComputeResourceEventArgument extends EntityEventArgument {
        req compute_resource: ManagedObjectReference => "computeResource",
    }
}

vim_type! {
    pub struct NetworkEventArgument extends EntityEventArgument {
        req network: ManagedObjectReference => "network",
    }
}

vim_type! {
    pub struct AlarmEventArgument extends EntityEventArgument {
        req alarm: ManagedObjectReference => "alarm",
    }
}

vim_type! {
    pub struct ManagedEntityEventArgument extends EntityEventArgument {
        req entity: ManagedObjectReference => "entity",
    }
}

vim_type! {
    /// Fields common to every event.
    pub struct Event {
        req key: i32 => "key",
        /// Key of the first event in a chain of related events.
        req chain_id: i32 => "chainId",
        req created_time: DateTime<Utc> => "createdTime",
        req user_name: String => "userName",
        opt datacenter: DatacenterEventArgument => "datacenter",
        opt compute_resource: ComputeResourceEventArgument => "computeResource",
        opt host: HostEventArgument => "host",
        opt vm: VmEventArgument => "vm",
        opt ds: DatastoreEventArgument => "ds",
        opt net: NetworkEventArgument => "net",
        opt full_formatted_message: String => "fullFormattedMessage",
        opt change_tag: String => "changeTag",
    }
}

vim_type! {
    pub struct GeneralEvent extends Event {
        req message: String => "message",
    }
}

vim_type! {
    /// A message logged by a user through `LogUserEvent`.
    pub struct GeneralUserEvent extends GeneralEvent {
        opt entity: ManagedEntityEventArgument => "entity",
    }
}

vim_type! {
    pub struct SessionEvent extends Event {}
}

vim_type! {
    pub struct UserLoginSessionEvent extends SessionEvent {
        req ip_address: String => "ipAddress",
        opt user_agent: String => "userAgent",
        req locale: String => "locale",
        req session_id: String => "sessionId",
    }
}

vim_type! {
    pub struct UserLogoutSessionEvent extends SessionEvent {
        opt ip_address: String => "ipAddress",
        opt user_agent: String => "userAgent",
        opt call_count: i64 => "callCount",
        opt session_id: String => "sessionId",
        opt login_time: DateTime<Utc> => "loginTime",
    }
}

vim_type! {
    pub struct AlarmEvent extends Event {
        req alarm: AlarmEventArgument => "alarm",
    }
}

vim_type! {
    pub struct AlarmCreatedEvent extends AlarmEvent {
        req entity: ManagedEntityEventArgument => "entity",
    }
}

vim_type! {
    pub struct AlarmStatusChangedEvent extends AlarmEvent {
        req source: ManagedEntityEventArgument => "source",
        req entity: ManagedEntityEventArgument => "entity",
        /// Previous `ManagedEntityStatus` literal.
        req from: String => "from",
        req to: String => "to",
    }
}

vim_type! {
    pub struct DatastoreEvent extends Event {
        opt datastore: DatastoreEventArgument => "datastore",
    }
}

vim_type! {
    pub struct DatastoreRenamedEvent extends DatastoreEvent {
        req old_name: String => "oldName",
        req new_name: String => "newName",
    }
}

vim_type! {
    pub struct DatastoreDestroyedEvent extends DatastoreEvent {}
}

vim_type! {
    pub struct HostEvent extends Event {}
}

vim_type! {
    pub struct HostConnectedEvent extends HostEvent {}
}

vim_type! {
    pub struct HostDisconnectedEvent extends HostEvent {
        opt reason: String => "reason",
    }
}

vim_type! {
    pub struct VmEvent extends Event {
        req template: bool => "template",
    }
}

vim_type! {
    pub struct VmPoweredOnEvent extends VmEvent {}
}

vim_type! {
    pub struct VmPoweredOffEvent extends VmEvent {}
}

vim_type! {
    pub struct VmCreatedEvent extends VmEvent {}
}

vim_type! {
    pub struct TaskEvent extends Event {
        req info: TaskInfo => "info",
    }
}

vim_any! {
    /// Any event, dispatched on `xsi:type`.
    pub enum AnyEvent: Event {
        Event [],
        GeneralEvent [base],
        GeneralUserEvent [base base],
        SessionEvent [base],
        UserLoginSessionEvent [base base],
        UserLogoutSessionEvent [base base],
        AlarmEvent [base],
        AlarmCreatedEvent [base base],
        AlarmStatusChangedEvent [base base],
        DatastoreEvent [base],
        DatastoreRenamedEvent [base base],
        DatastoreDestroyedEvent [base base],
        HostEvent [base],
        HostConnectedEvent [base base],
        HostDisconnectedEvent [base base],
        VmEvent [base],
        VmPoweredOnEvent [base base],
        VmPoweredOffEvent [base base],
        VmCreatedEvent [base base],
        TaskEvent [base],
    }
}

vim_type! {
    pub struct EventFilterSpecByEntity {
        req entity: ManagedObjectReference => "entity",
        req recursion: EventFilterSpecRecursionOption => "recursion",
    }
}

vim_type! {
    pub struct EventFilterSpecByTime {
        opt begin_time: DateTime<Utc> => "beginTime",
        opt end_time: DateTime<Utc> => "endTime",
    }
}

vim_type! {
    pub struct EventFilterSpecByUsername {
        /// Include events generated by the server itself.
        req system_user: bool => "systemUser",
        many user_list: String => "userList",
    }
}

vim_type! {
    /// Criteria for `QueryEvents`; unset criteria do not filter.
    pub struct EventFilterSpec {
        opt entity: EventFilterSpecByEntity => "entity",
        opt time: EventFilterSpecByTime => "time",
        opt user_name: EventFilterSpecByUsername => "userName",
        opt event_chain_id: i32 => "eventChainId",
        opt alarm: ManagedObjectReference => "alarm",
        opt scheduled_task: ManagedObjectReference => "scheduledTask",
        opt disable_full_message: bool => "disableFullMessage",
        many category: String => "category",
        many r#type: String => "type",
        many tag: String => "tag",
        many event_type_id: String => "eventTypeId",
        opt max_count: i32 => "maxCount",
    }
}

impl Default for EventFilterSpec {
    fn default() -> Self {
        Self {
            entity: None,
            time: None,
            user_name: None,
            event_chain_id: None,
            alarm: None,
            scheduled_task: None,
            disable_full_message: None,
            category: Vec::new(),
            r#type: Vec::new(),
            tag: Vec::new(),
            event_type_id: Vec::new(),
            max_count: None,
        }
    }
}

impl AnyEvent {
    /// The server-rendered message, when the query asked for it.
    pub fn message(&self) -> Option<&str> {
        self.root().full_formatted_message.as_deref()
    }
}
