use crate::capture::timing::completion_elapsed;
use crate::capture::types::{
    CompletedDetail, EventDetail, ProgressDetail, StartedDetail, TransferEvent,
};

/// Multi-line description of one publication, for `--id` queries.
pub fn render_narrative(event: &TransferEvent) -> String {
    match &event.detail {
        EventDetail::Completed(done) => completed(event, done),
        EventDetail::Progress(progress) => in_progress(event, progress),
        EventDetail::Started(started) => started_or_queued(event, started),
        EventDetail::None => format!(
            "[{}] TransferID: {}\n\tStatus: {}\n\n",
            event.timestamp, event.id, event.action
        ),
    }
}

fn completed(event: &TransferEvent, done: &CompletedDetail) -> String {
    let stats = &done.statistics;
    let mut out = format!(
        "[{}] TransferID: {}\n\tStatus: {}\n",
        event.timestamp, event.id, event.action
    );

    match &done.supplement {
        Some(supplement) => out.push_str(&format!("\tSupplement: {supplement}\n")),
        None => out.push_str(&format!("\tResult code: {}\n", done.result_code)),
    }

    let elapsed = completion_elapsed(&stats.actual_start_time, &event.timestamp);

    out.push_str(&format!(
        "\tSource Agent: {}\n\
         \tDestination Agent: {}\n\
         \tStart time: {}\n\
         \tCompletion Time: {}\n\
         \tElapsed time: {}\n\
         \tRetry Count: {}\n\
         \tFailures: {}\n\
         \tWarnings: {}\n\n",
        event.source_agent,
        event.destination_agent,
        stats.actual_start_time,
        event.timestamp,
        elapsed,
        stats.retry_count,
        stats.num_file_failures,
        stats.num_file_warnings,
    ));
    out
}

fn in_progress(event: &TransferEvent, progress: &ProgressDetail) -> String {
    let mut out = format!(
        "[{}] TransferID: {}\n\
         \tStatus: {}\n\
         \tDestination: {}\n\
         \tStart time: {}\n\
         \tTotal items in transfer request: {}\n\
         \tBytes sent: {}\n",
        event.timestamp,
        event.id,
        event.action,
        event.destination_agent,
        progress.start_time,
        progress.total,
        progress.bytes_sent,
    );

    for (n, item) in progress.items.iter().enumerate() {
        out.push_str(&format!(
            "\tItem # {}\n\
             \t\tSource: {}\tSize: {} bytes\n\
             \t\tDestination: {}\tSize: {} bytes\n",
            n + 1,
            item.source.name,
            item.source.size,
            item.destination.name,
            item.destination.size,
        ));

        match (&item.supplement, item.result_code.as_str()) {
            (Some(supplement), code) if code != "0" => out.push_str(&format!(
                "\t\tResult code {code} Supplement {supplement}\n"
            )),
            (_, code) => out.push_str(&format!("\t\tResult code {code}\n")),
        }
    }

    out.push('\n');
    out
}

fn started_or_queued(event: &TransferEvent, started: &StartedDetail) -> String {
    format!(
        "[{}] TransferID: {}\n\tStatus: {}\n\tDestination: {}\n\n",
        started.start_time, event.id, event.action, event.destination_agent
    )
}
