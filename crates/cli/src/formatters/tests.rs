use super::*;
use chrono::TimeZone;
use vim25_client::soap::{decode_response, repeated_returnval, returnval};
use vim25_client::testing::load_fixture;
use vim25_client::{RetrieveResult, ServiceContent};

fn about() -> AboutInfo {
    let response = decode_response(&load_fixture("service/retrieve_service_content.xml")).unwrap();
    returnval::<ServiceContent>(&response).unwrap().about
}

fn session() -> UserSession {
    let response = decode_response(&load_fixture("session/login.xml")).unwrap();
    returnval(&response).unwrap()
}

fn events() -> Vec<AnyEvent> {
    let response = decode_response(&load_fixture("events/query_events.xml")).unwrap();
    repeated_returnval(&response).unwrap()
}

fn task_info(fixture: &str) -> TaskInfo {
    let response = decode_response(&load_fixture(fixture)).unwrap();
    let result: RetrieveResult = returnval(&response).unwrap();
    result.objects[0]
        .property("info")
        .and_then(|v| v.as_task_info())
        .cloned()
        .unwrap()
}

fn inventory() -> Vec<InventoryItem> {
    let mut web = BTreeMap::new();
    web.insert("name".to_string(), serde_json::json!("web-01"));
    web.insert("runtime.powerState".to_string(), serde_json::json!("poweredOn"));
    let mut db = BTreeMap::new();
    db.insert("name".to_string(), serde_json::json!("db-01"));
    vec![
        InventoryItem {
            reference: ManagedObjectReference::new("VirtualMachine", "vm-42"),
            properties: web,
        },
        InventoryItem {
            reference: ManagedObjectReference::new("VirtualMachine", "vm-57"),
            properties: db,
        },
    ]
}

#[test]
fn test_table_about() {
    let output = TableFormatter.format_about(&about()).unwrap();
    assert!(output.contains("API Type: VirtualCenter"));
    assert!(output.contains("Vendor: VMware, Inc."));
}

#[test]
fn test_json_about_is_valid() {
    let output = JsonFormatter.format_about(&about()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["apiType"], "VirtualCenter");
}

#[test]
fn test_time_skew() {
    let server = Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 32).unwrap();
    let local = Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 30).unwrap();
    let time = ServerTimeOutput::new(server, local);
    assert_eq!(time.skew_ms, 2000);

    let table = TableFormatter.format_time(&time).unwrap();
    assert!(table.contains("Skew: 2000 ms"));

    let yaml = YamlFormatter.format_time(&time).unwrap();
    assert!(yaml.contains("skew_ms: 2000"));
}

#[test]
fn test_table_session() {
    let output = TableFormatter.format_session(&session()).unwrap();
    assert!(output.contains("User: VSPHERE.LOCAL\\Administrator"));
}

#[test]
fn test_table_inventory_columns_and_missing_values() {
    let output = TableFormatter
        .format_inventory(&inventory(), &["name", "runtime.powerState"])
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with("ID"));
    assert!(lines[0].contains("runtime.powerState"));
    assert!(lines[1].starts_with("=="));
    assert!(lines[2].contains("vm-42") && lines[2].contains("poweredOn"));
    assert!(lines[3].contains("vm-57") && lines[3].contains(DEFAULT_MISSING_VALUE));
}

#[test]
fn test_empty_inventory() {
    assert_eq!(
        TableFormatter.format_inventory(&[], &["name"]).unwrap(),
        "No objects found.\n"
    );
    assert_eq!(JsonFormatter.format_inventory(&[], &["name"]).unwrap(), "[]\n");
}

#[test]
fn test_json_inventory_uses_ref_key() {
    let output = JsonFormatter.format_inventory(&inventory(), &["name"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[0]["ref"]["value"], "vm-42");
    assert_eq!(value[0]["properties"]["name"], "web-01");
}

#[test]
fn test_table_events_include_unknown_types() {
    let output = TableFormatter.format_events(&events()).unwrap();
    assert!(output.contains("VmPoweredOnEvent"));
    assert!(output.contains("UserLoginSessionEvent"));
    assert!(output.contains("VmReconfiguredEvent"));
}

#[test]
fn test_json_events_are_tagged() {
    let output = JsonFormatter.format_events(&events()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[0]["_type"], "VmPoweredOnEvent");
}

#[test]
fn test_table_task_error() {
    let output = TableFormatter
        .format_task(&task_info("tasks/task_info_error.xml"))
        .unwrap();
    assert!(output.contains("State: error"));
    assert!(output.contains("InvalidPowerState"));
}

#[test]
fn test_task_started_without_wait() {
    let started = TaskStartedOutput {
        task: ManagedObjectReference::new("Task", "task-101"),
        info: None,
    };
    assert_eq!(
        TableFormatter.format_task_started(&started).unwrap(),
        "Started task task-101\n"
    );
    let json = JsonFormatter.format_task_started(&started).unwrap();
    assert!(!json.contains("info"));
}

#[test]
fn test_task_started_with_wait_shows_info() {
    let started = TaskStartedOutput {
        task: ManagedObjectReference::new("Task", "task-101"),
        info: Some(task_info("tasks/task_info_success.xml")),
    };
    let output = TableFormatter.format_task_started(&started).unwrap();
    assert!(output.contains("State: success"));
}
