use super::{SUCCESSFUL, completed_xml, progress_xml, queued_xml, started_xml};
use crate::capture::{
    DecodeError, EndpointKind, EventDetail, TransferAction, TransferId, decode_transaction,
};
use pretty_assertions::assert_eq;

#[test]
fn decodes_a_completed_transaction() {
    // Arrange
    let xml = completed_xml("414d51204d46544841514d2020202020", Some(SUCCESSFUL));

    // Act
    let event = decode_transaction(&xml).unwrap();

    // Assert
    assert_eq!(event.id.as_str(), "414D51204D46544841514D2020202020");
    assert_eq!(event.action, TransferAction::Completed);
    assert_eq!(event.timestamp, "2021-03-04T10:01:30.500Z");
    assert_eq!(event.source_agent, "SRC");
    assert_eq!(event.destination_agent, "DEST");

    let EventDetail::Completed(done) = event.detail else {
        panic!("expected completed detail, got {:?}", event.detail);
    };
    assert_eq!(done.result_code, "0");
    assert_eq!(done.supplement.as_deref(), Some(SUCCESSFUL));
    assert_eq!(done.statistics.actual_start_time, "2021-03-04T10:00:00.000Z");
    assert_eq!(done.statistics.retry_count, "0");
    assert_eq!(done.statistics.num_file_failures, "1");
    assert_eq!(done.statistics.num_file_warnings, "2");
}

#[test]
fn completion_without_supplement_keeps_the_result_code() {
    let event = decode_transaction(&completed_xml("TX1", None)).unwrap();

    let EventDetail::Completed(done) = event.detail else {
        panic!("expected completed detail");
    };
    assert_eq!(done.result_code, "40");
    assert_eq!(done.supplement, None);
}

#[test]
fn decodes_progress_items() {
    // Act
    let event = decode_transaction(&progress_xml("TX3")).unwrap();

    // Assert
    assert_eq!(event.action, TransferAction::Progress);
    let EventDetail::Progress(progress) = event.detail else {
        panic!("expected progress detail");
    };
    assert_eq!(progress.start_time, "2021-03-04T10:00:00.000Z");
    assert_eq!(progress.total, "2");
    assert_eq!(progress.bytes_sent, "1024");
    assert_eq!(progress.items.len(), 2);

    let queue_item = &progress.items[0];
    assert_eq!(queue_item.source.kind, EndpointKind::Queue);
    assert_eq!(queue_item.source.name, "SRC.Q@QM1");
    assert_eq!(queue_item.source.size, "-1");
    assert_eq!(queue_item.destination.kind, EndpointKind::File);
    assert_eq!(queue_item.destination.size, "512");
    assert_eq!(queue_item.result_code, "0");
    assert_eq!(queue_item.supplement, None);

    let file_item = &progress.items[1];
    assert_eq!(file_item.source.name, "/in/a.txt");
    assert_eq!(file_item.source.size, "1024");
    assert_eq!(file_item.destination.name, "/out/a.txt");
    assert_eq!(file_item.destination.size, "-1");
    assert_eq!(file_item.result_code, "1");
    assert_eq!(
        file_item.supplement.as_deref(),
        Some("BFGIO0001E: File not found")
    );
}

#[test]
fn started_uses_the_transfer_set_start_time() {
    let event = decode_transaction(&started_xml("TX2")).unwrap();

    assert_eq!(event.action, TransferAction::Started);
    assert_eq!(
        event.detail,
        EventDetail::Started(crate::capture::StartedDetail {
            start_time: "2021-03-04T10:00:00.000Z".to_string(),
        })
    );
}

#[test]
fn queued_falls_back_to_the_publish_time() {
    let event = decode_transaction(&queued_xml("TX4")).unwrap();

    assert_eq!(event.action, TransferAction::Queued);
    let EventDetail::Started(started) = event.detail else {
        panic!("expected started detail");
    };
    assert_eq!(started.start_time, "2021-03-04T09:59:59.000Z");
}

#[test]
fn unknown_actions_are_kept_verbatim() {
    let xml = r#"<transaction ID="tx9"><action time="t">cancelled</action></transaction>"#;

    let event = decode_transaction(xml).unwrap();

    assert_eq!(event.id, TransferId::parse("TX9").unwrap());
    assert_eq!(event.action, TransferAction::Other("cancelled".to_string()));
    assert_eq!(event.detail, EventDetail::None);
}

#[test]
fn missing_or_blank_id_is_rejected() {
    let no_id = r#"<transaction><action time="t">started</action></transaction>"#;
    let blank_id = r#"<transaction ID="  "><action time="t">started</action></transaction>"#;

    assert!(matches!(
        decode_transaction(no_id),
        Err(DecodeError::MissingTransferId)
    ));
    assert!(matches!(
        decode_transaction(blank_id),
        Err(DecodeError::MissingTransferId)
    ));
}

#[test]
fn missing_action_is_rejected() {
    let xml = r#"<transaction ID="TX1"><sourceAgent agent="SRC"/></transaction>"#;

    assert!(matches!(
        decode_transaction(xml),
        Err(DecodeError::MissingAction)
    ));
}

#[test]
fn other_documents_are_rejected() {
    let xml = r#"<monitorLog ID="M1"><action>triggerSatisfied</action></monitorLog>"#;

    let err = decode_transaction(xml).unwrap_err();

    assert!(matches!(err, DecodeError::NotATransaction { ref found } if found == "monitorLog"));
}

#[test]
fn broken_xml_is_an_error() {
    let xml = r#"<transaction ID="TX1"><action time="t">started</transaction>"#;

    assert!(decode_transaction(xml).is_err());
}

#[test]
fn empty_payload_is_an_error() {
    assert!(matches!(decode_transaction(""), Err(DecodeError::Empty)));
}
