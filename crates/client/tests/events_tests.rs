//! Event query tests.

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use vim25_client::AnyEvent;
use vim25_client::types::{EventFilterSpec, EventFilterSpecByTime};
use wiremock::matchers::{body_string_contains, method, path};

#[tokio::test]
async fn test_query_events_decodes_subtypes() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_login(&mock_server).await;
    mount_method(&mock_server, "QueryEvents", soap_ok("events/query_events.xml")).await;

    let mut client = client(&mock_server);
    let events = client
        .query_events(&EventFilterSpec::default())
        .await
        .unwrap();

    assert_eq!(events.len(), 3);

    match &events[0] {
        AnyEvent::VmPoweredOnEvent(e) => {
            let vm_arg = e.base.base.vm.as_ref().unwrap();
            assert_eq!(vm_arg.vm, vm("vm-42"));
            assert_eq!(vm_arg.base.name, "web-01");
        }
        other => panic!("expected VmPoweredOnEvent, got {}", other.type_name()),
    }
    assert!(events[0].is_a("VmEvent"));
    assert_eq!(
        events[0].message(),
        Some("web-01 on esx01.lab.local in DC1 is powered on")
    );

    assert_eq!(events[1].type_name(), "UserLoginSessionEvent");
    assert!(events[1].is_a("SessionEvent"));

    // Types outside the known hierarchy keep the common fields.
    assert_eq!(events[2].type_name(), "VmReconfiguredEvent");
    assert!(matches!(events[2], AnyEvent::Unrecognized { .. }));
    assert_eq!(events[2].root().key, 501);
}

#[tokio::test]
async fn test_query_events_sends_filter() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_login(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(soap_method("QueryEvents"))
        .and(body_string_contains(
            r#"<_this type="EventManager">EventManager</_this>"#,
        ))
        .and(body_string_contains(
            "<beginTime>2024-05-01T09:00:00Z</beginTime>",
        ))
        .and(body_string_contains("<maxCount>50</maxCount>"))
        .respond_with(soap_ok("events/query_events.xml"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let filter = EventFilterSpec {
        time: Some(EventFilterSpecByTime {
            begin_time: Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()),
            end_time: None,
        }),
        max_count: Some(50),
        ..EventFilterSpec::default()
    };

    let mut client = client(&mock_server);
    assert!(client.query_events(&filter).await.is_ok());
}
