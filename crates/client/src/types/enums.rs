//! vim25 enumeration types.
//!
//! Every enumeration is closed: decoding a literal that is not listed here
//! fails with [`UnknownEnumValue`](crate::xml::UnknownEnumValue).

use crate::xml::vim_enum;

vim_enum! {
    /// Parameters that can be substituted into alarm action text.
    pub enum ActionParameter {
        TargetName => "targetName",
        AlarmName => "alarmName",
        OldStatus => "oldStatus",
        NewStatus => "newStatus",
        TriggeringSummary => "triggeringSummary",
        DeclaringSummary => "declaringSummary",
        EventDescription => "eventDescription",
        Target => "target",
        Alarm => "alarm",
    }
}

vim_enum! {
    /// Operational state of a SCSI logical unit.
    pub enum ScsiLunState {
        UnknownState => "unknownState",
        Ok => "ok",
        Error => "error",
        Off => "off",
        Quiesced => "quiesced",
        Degraded => "degraded",
        LostCommunication => "lostCommunication",
        Timeout => "timeout",
    }
}

vim_enum! {
    pub enum VirtualMachinePowerState {
        PoweredOff => "poweredOff",
        PoweredOn => "poweredOn",
        Suspended => "suspended",
    }
}

vim_enum! {
    /// Whether the server can reach a virtual machine's files and host.
    pub enum VirtualMachineConnectionState {
        Connected => "connected",
        Disconnected => "disconnected",
        Orphaned => "orphaned",
        Inaccessible => "inaccessible",
        Invalid => "invalid",
    }
}

vim_enum! {
    pub enum HostSystemConnectionState {
        Connected => "connected",
        NotResponding => "notResponding",
        Disconnected => "disconnected",
    }
}

vim_enum! {
    pub enum HostSystemPowerState {
        PoweredOn => "poweredOn",
        PoweredOff => "poweredOff",
        StandBy => "standBy",
        Unknown => "unknown",
    }
}

vim_enum! {
    /// Overall health colour of a managed entity.
    pub enum ManagedEntityStatus {
        /// Status is unknown.
        Gray => "gray",
        Green => "green",
        Yellow => "yellow",
        Red => "red",
    }
}

vim_enum! {
    /// Lifecycle of a server-side task.
    pub enum TaskInfoState {
        Queued => "queued",
        Running => "running",
        Success => "success",
        Error => "error",
    }
}

impl TaskInfoState {
    /// Whether the task has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

vim_enum! {
    /// Severity attached to an `EventEx` or `ExtendedEvent`.
    pub enum EventEventSeverity {
        Error => "error",
        Warning => "warning",
        Info => "info",
        User => "user",
    }
}

vim_enum! {
    /// How far an event filter descends from the selected entity.
    pub enum EventFilterSpecRecursionOption {
        /// Only the entity itself.
        SelfOnly => "self",
        /// The entity and its direct children.
        Children => "children",
        /// The entity and all of its descendants.
        All => "all",
    }
}
