mod decode_tests;
mod source_tests;

//-----------------------------------------------------------------------------
// Fixtures
//-----------------------------------------------------------------------------

pub(crate) const SUCCESSFUL: &str =
    "BFGRP0032I: The file transfer request has successfully completed.";
pub(crate) const FAILED: &str = "BFGRP0034I: The file transfer request has completed with no files being transferred.";
pub(crate) const PARTIAL: &str =
    "BFGRP0033I: The file transfer request has completed with partial success.";

pub(crate) fn completed_xml(id: &str, supplement: Option<&str>) -> String {
    let status = match supplement {
        Some(text) => format!(r#"<status resultCode="0"><supplement>{text}</supplement></status>"#),
        None => r#"<status resultCode="40"/>"#.to_string(),
    };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><transaction version="6.00" ID="{id}" agentRole="sourceAgent" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:noNamespaceSchemaLocation="TransferLog.xsd" xmlns=""><action time="2021-03-04T10:01:30.500Z">completed</action><sourceAgent agent="SRC" QMgr="QM1"><systemInfo architecture="amd64" name="Linux" version="5.4"/></sourceAgent><destinationAgent agent="DEST" QMgr="QM1"/><originator><hostName>mft-host</hostName><userID>mqm</userID></originator>{status}<statistics><actualStartTime>2021-03-04T10:00:00.000Z</actualStartTime><retryCount>0</retryCount><numFileFailures>1</numFileFailures><numFileWarnings>2</numFileWarnings></statistics></transaction>"#
    )
}

pub(crate) fn started_xml(id: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><transaction version="6.00" ID="{id}" agentRole="sourceAgent"><action time="2021-03-04T10:00:00.100Z">started</action><sourceAgent agent="SRC" QMgr="QM1"/><destinationAgent agent="DEST" QMgr="QM1"/><transferSet startTime="2021-03-04T10:00:00.000Z" total="2"/></transaction>"#
    )
}

pub(crate) fn queued_xml(id: &str) -> String {
    format!(
        r#"<transaction version="6.00" ID="{id}"><action time="2021-03-04T09:59:59.000Z">queued</action><sourceAgent agent="SRC"/><destinationAgent agent="DEST"/></transaction>"#
    )
}

pub(crate) fn progress_xml(id: &str) -> String {
    format!(
        r#"<transaction version="6.00" ID="{id}" agentRole="sourceAgent"><action time="2021-03-04T10:00:02.000Z">progress</action><sourceAgent agent="SRC" QMgr="QM1"/><destinationAgent agent="DEST" QMgr="QM1"/><transferSet index="0" size="2" startTime="2021-03-04T10:00:00.000Z" total="2" bytesSent="1024"><item mode="binary"><source disposition="leave" type="queue"><queue>SRC.Q@QM1</queue></source><destination exist="error" type="file"><file size="512">/out/msg.dat</file></destination><status resultCode="0"/></item><item mode="binary"><source disposition="leave" type="file"><file size="1024">/in/a.txt</file></source><destination exist="error" type="file"><file>/out/a.txt</file></destination><status resultCode="1"><supplement>BFGIO0001E: File not found</supplement></status></item></transferSet></transaction>"#
    )
}

/// Wraps a payload the way the agent writes it to the capture log.
pub(crate) fn log_line(payload: &str) -> String {
    format!("SYSTEM.FTE/Log/SRC/TRANSFER!2021-03-04T10:00:00Z!{payload}")
}

pub(crate) fn log_text(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
