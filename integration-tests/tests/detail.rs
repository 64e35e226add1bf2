use integration_tests::harness::{CaptureLog, Item, SUCCESSFUL};
use mftstatus_core::capture::{DetailFormat, DetailQuery, Query, QueryOutcome};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn detail(transfer: &str, format: DetailFormat) -> Query {
    Query::Detail(DetailQuery {
        transfer: transfer.to_string(),
        format,
    })
}

fn two_item_transfer() -> CaptureLog {
    CaptureLog::new()
        .started("TX3")
        .progress(
            "TX3",
            &[
                Item::Queue {
                    name: "PAYMENTS.IN@QM1".to_string(),
                },
                Item::File {
                    path: "/data/in/report.csv".to_string(),
                    size: 1024,
                },
            ],
        )
        .started("TX4")
        .write()
}

#[test]
fn progress_items_are_described() {
    // Arrange
    let log = two_item_transfer();

    // Act
    let (outcome, out) = log.query(&detail("tx3", DetailFormat::Narrative));

    // Assert
    assert!(matches!(outcome, QueryOutcome::Detailed { matched: 2, .. }));
    assert!(out.contains("\tItem # 1\n\t\tSource: PAYMENTS.IN@QM1\tSize: -1 bytes\n"));
    assert!(out.contains("\tItem # 2\n\t\tSource: /data/in/report.csv\tSize: 1024 bytes\n"));
    assert!(!out.contains("TX4"));
}

#[test]
fn progress_items_as_json() {
    // Arrange
    let log = two_item_transfer();

    // Act
    let (_, out) = log.query(&detail("TX3", DetailFormat::Json));

    // Assert
    let docs: Vec<Value> = serde_json::Deserializer::from_str(&out)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0]["transfer.status"], "started");

    let items = docs[1]["transfer.transferSet"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["sourceName"], "PAYMENTS.IN@QM1");
    assert_eq!(items[0]["sourceSize"], "-1");
    assert_eq!(items[1]["sourceSize"], "1024");
    assert_eq!(docs[1]["transfer.totalItems"], "2");
}

#[test]
fn wildcard_shows_every_publication_in_log_order() {
    let log = two_item_transfer();

    let (outcome, out) = log.query(&detail("*", DetailFormat::Narrative));

    assert!(matches!(outcome, QueryOutcome::Detailed { matched: 3, .. }));
    let headers: Vec<_> = out
        .lines()
        .filter(|line| line.starts_with('['))
        .map(|line| line.split("TransferID: ").nth(1).unwrap())
        .collect();
    assert_eq!(headers, vec!["TX3", "TX3", "TX4"]);
}

#[test]
fn completed_transfer_reports_elapsed_time() {
    let log = CaptureLog::new().started("TX1").completed("TX1", SUCCESSFUL).write();

    let (_, out) = log.query(&detail("TX1", DetailFormat::Narrative));

    assert!(out.contains(&format!("\tSupplement: {SUCCESSFUL}\n")));
    assert!(out.contains("\tCompletion Time: 2021-03-04T10:02:00.000Z\n"));
    assert!(out.contains("\tElapsed time: 2m0s\n"));
}

#[test]
fn unknown_transfer_matches_nothing() {
    let log = two_item_transfer();

    let (outcome, out) = log.query(&detail("NOSUCHID", DetailFormat::Json));

    assert!(matches!(outcome, QueryOutcome::Detailed { matched: 0, .. }));
    assert_eq!(out, "");
}
