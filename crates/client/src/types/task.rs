//! Task progress and task error types.

use chrono::{DateTime, Utc};

use crate::types::{AnyFault, AnyValue, LocalizableMessage, ManagedObjectReference, TaskInfoState};
use crate::xml::vim_type;

vim_type! {
    /// Snapshot of a server-side task, read from the task's `info` property.
    pub struct TaskInfo {
        req key: String => "key",
        req task: ManagedObjectReference => "task",
        opt description: LocalizableMessage => "description",
        opt name: String => "name",
        req description_id: String => "descriptionId",
        opt entity: ManagedObjectReference => "entity",
        opt entity_name: String => "entityName",
        many locked: ManagedObjectReference => "locked",
        req state: TaskInfoState => "state",
        req cancelled: bool => "cancelled",
        req cancelable: bool => "cancelable",
        /// Set when `state` is `error`.
        opt error: LocalizedMethodFault => "error",
        opt result: AnyValue => "result",
        /// Percentage complete while running.
        opt progress: i32 => "progress",
        req queue_time: DateTime<Utc> => "queueTime",
        opt start_time: DateTime<Utc> => "startTime",
        opt complete_time: DateTime<Utc> => "completeTime",
        req event_chain_id: i32 => "eventChainId",
        opt change_tag: String => "changeTag",
        opt parent_task_key: String => "parentTaskKey",
        opt root_task_key: String => "rootTaskKey",
        opt activation_id: String => "activationId",
    }
}

vim_type! {
    /// A fault together with its message in the session locale.
    pub struct LocalizedMethodFault {
        req fault: AnyFault => "fault",
        opt localized_message: String => "localizedMessage",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{XmlNode, XmlValue};

    #[test]
    fn test_failed_task_info() {
        let xml = r#"<val xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
            <key>task-101</key>
            <task type="Task">task-101</task>
            <name>PowerOnVM_Task</name>
            <descriptionId>VirtualMachine.powerOn</descriptionId>
            <entity type="VirtualMachine">vm-42</entity>
            <entityName>web-01</entityName>
            <state>error</state>
            <cancelled>false</cancelled>
            <cancelable>false</cancelable>
            <error>
                <fault xsi:type="InvalidPowerState">
                    <requestedState>poweredOn</requestedState>
                    <existingState>poweredOn</existingState>
                </fault>
                <localizedMessage>The attempted operation cannot be performed in the current state (Powered on).</localizedMessage>
            </error>
            <queueTime>2024-05-01T10:00:00Z</queueTime>
            <startTime>2024-05-01T10:00:01Z</startTime>
            <completeTime>2024-05-01T10:00:02Z</completeTime>
            <eventChainId>9001</eventChainId>
        </val>"#;
        let info = TaskInfo::read_xml(&XmlNode::parse(xml).unwrap()).unwrap();
        assert_eq!(info.state, TaskInfoState::Error);
        assert!(info.locked.is_empty());
        let error = info.error.unwrap();
        assert_eq!(error.fault.type_name(), "InvalidPowerState");
        assert!(error.fault.is_a("InvalidState"));
        assert!(error.fault.is_a("VimFault"));
    }

    #[test]
    fn test_task_info_requires_state() {
        let xml = r#"<val>
            <key>task-1</key><task type="Task">task-1</task>
            <descriptionId>x</descriptionId><cancelled>false</cancelled>
            <cancelable>true</cancelable><queueTime>2024-05-01T10:00:00Z</queueTime>
            <eventChainId>1</eventChainId>
        </val>"#;
        assert!(TaskInfo::read_xml(&XmlNode::parse(xml).unwrap()).is_err());
    }
}
