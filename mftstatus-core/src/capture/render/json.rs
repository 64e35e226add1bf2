use crate::capture::classify::classify;
use crate::capture::timing::completion_elapsed;
use crate::capture::types::{EventDetail, TransferEvent, TransferItem};
use serde_json::{Map, Value, json};

/// One publication as a flat document keyed by dotted paths
/// (`transfer.id`, `transfer.status`, ...).
pub fn render_json(event: &TransferEvent) -> Value {
    let mut doc = Map::new();
    let mut put = |key: &str, value: Value| {
        doc.insert(format!("transfer.{key}"), value);
    };

    put("id", json!(event.id.as_str()));
    put("status", json!(event.action.as_str()));
    put("outcome", json!(classify(event).label()));
    put("sourceAgent", json!(event.source_agent));
    put("destinationAgent", json!(event.destination_agent));

    match &event.detail {
        EventDetail::Completed(done) => {
            let stats = &done.statistics;
            let elapsed_time = completion_elapsed(&stats.actual_start_time, &event.timestamp);

            put("resultCode", json!(done.result_code));
            if let Some(supplement) = &done.supplement {
                put("supplement", json!(supplement));
            }
            put("time", json!(event.timestamp));
            put("actualStartTime", json!(stats.actual_start_time));
            put("completionTime", json!(event.timestamp));
            put("elapsedTime", json!(elapsed_time));
            put("retryCount", json!(stats.retry_count));
            put("numberOfFailures", json!(stats.num_file_failures));
            put("numberOfWarnings", json!(stats.num_file_warnings));
        }
        EventDetail::Progress(progress) => {
            put("publishTime", json!(event.timestamp));
            put("startTime", json!(progress.start_time));
            put("totalItems", json!(progress.total));
            put("bytesSent", json!(progress.bytes_sent));
            put(
                "transferSet",
                Value::Array(progress.items.iter().map(item_json).collect()),
            );
        }
        EventDetail::Started(started) => {
            put("startTime", json!(started.start_time));
        }
        EventDetail::None => {
            put("time", json!(event.timestamp));
        }
    }

    Value::Object(doc)
}

pub fn render_json_pretty(event: &TransferEvent) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&render_json(event))
}

fn item_json(item: &TransferItem) -> Value {
    let mut obj = Map::new();
    obj.insert("sourceName".into(), json!(item.source.name));
    obj.insert("sourceSize".into(), json!(item.source.size));
    obj.insert("destinationName".into(), json!(item.destination.name));
    obj.insert("destinationSize".into(), json!(item.destination.size));
    obj.insert("resultCode".into(), json!(item.result_code));
    if let Some(supplement) = &item.supplement {
        obj.insert("supplement".into(), json!(supplement));
    }
    Value::Object(obj)
}
