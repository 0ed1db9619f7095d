//! Service entry point types: `ServiceContent`, `AboutInfo`, `UserSession`.

use chrono::{DateTime, Utc};

use crate::types::ManagedObjectReference;
use crate::xml::vim_type;

vim_type! {
    /// Product and API identification of the endpoint.
    pub struct AboutInfo {
        req name: String => "name",
        req full_name: String => "fullName",
        req vendor: String => "vendor",
        req version: String => "version",
        opt patch_level: String => "patchLevel",
        req build: String => "build",
        opt locale_version: String => "localeVersion",
        opt locale_build: String => "localeBuild",
        req os_type: String => "osType",
        req product_line_id: String => "productLineId",
        /// `VirtualCenter` or `HostAgent`.
        req api_type: String => "apiType",
        req api_version: String => "apiVersion",
        opt instance_uuid: String => "instanceUuid",
        opt license_product_name: String => "licenseProductName",
        opt license_product_version: String => "licenseProductVersion",
    }
}

impl AboutInfo {
    /// Whether the endpoint is a vCenter Server rather than a standalone host.
    pub fn is_vcenter(&self) -> bool {
        self.api_type == "VirtualCenter"
    }
}

vim_type! {
    /// References to the singleton managers of a vim25 endpoint.
    ///
    /// Managers absent on the endpoint (most of them on a standalone host
    /// agent) are `None`.
    pub struct ServiceContent {
        req root_folder: ManagedObjectReference => "rootFolder",
        req property_collector: ManagedObjectReference => "propertyCollector",
        opt view_manager: ManagedObjectReference => "viewManager",
        req about: AboutInfo => "about",
        opt setting: ManagedObjectReference => "setting",
        opt user_directory: ManagedObjectReference => "userDirectory",
        opt session_manager: ManagedObjectReference => "sessionManager",
        opt authorization_manager: ManagedObjectReference => "authorizationManager",
        opt service_manager: ManagedObjectReference => "serviceManager",
        opt perf_manager: ManagedObjectReference => "perfManager",
        opt scheduled_task_manager: ManagedObjectReference => "scheduledTaskManager",
        opt alarm_manager: ManagedObjectReference => "alarmManager",
        opt event_manager: ManagedObjectReference => "eventManager",
        opt task_manager: ManagedObjectReference => "taskManager",
        opt extension_manager: ManagedObjectReference => "extensionManager",
        opt custom_fields_manager: ManagedObjectReference => "customFieldsManager",
        opt account_manager: ManagedObjectReference => "accountManager",
        opt license_manager: ManagedObjectReference => "licenseManager",
        opt search_index: ManagedObjectReference => "searchIndex",
        opt file_manager: ManagedObjectReference => "fileManager",
        opt virtual_disk_manager: ManagedObjectReference => "virtualDiskManager",
        opt ovf_manager: ManagedObjectReference => "ovfManager",
    }
}

vim_type! {
    /// An authenticated session, as returned by `Login`.
    pub struct UserSession {
        req key: String => "key",
        req user_name: String => "userName",
        req full_name: String => "fullName",
        req login_time: DateTime<Utc> => "loginTime",
        req last_active_time: DateTime<Utc> => "lastActiveTime",
        req locale: String => "locale",
        req message_locale: String => "messageLocale",
        opt extension_session: bool => "extensionSession",
        opt ip_address: String => "ipAddress",
        opt user_agent: String => "userAgent",
        opt call_count: i64 => "callCount",
    }
}
