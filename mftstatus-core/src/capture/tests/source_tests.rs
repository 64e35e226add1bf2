use crate::capture::{BackwardLines, ForwardLines, LineSource, ScanDirection, open_log};
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

fn drain(source: &mut dyn LineSource) -> Vec<String> {
    let mut lines = Vec::new();
    while let Some(line) = source.next_line().unwrap() {
        lines.push(line);
    }
    lines
}

fn forward(text: &str) -> Vec<String> {
    drain(&mut ForwardLines::new(Cursor::new(text.as_bytes().to_vec())))
}

fn backward(text: &str, chunk_size: usize) -> Vec<String> {
    let mut source = BackwardLines::new(Cursor::new(text.as_bytes().to_vec()))
        .unwrap()
        .with_chunk_size(chunk_size);
    drain(&mut source)
}

#[test]
fn forward_yields_lines_in_file_order() {
    assert_eq!(forward("one\ntwo\nthree\n"), vec!["one", "two", "three"]);
}

#[test]
fn forward_keeps_a_final_line_without_newline() {
    assert_eq!(forward("one\ntwo"), vec!["one", "two"]);
}

#[test]
fn backward_is_forward_reversed() {
    let texts = [
        "one\ntwo\nthree\n",
        "one\ntwo\nthree",
        "single",
        "single\n",
        "\n\nafter blanks\n",
        "a much longer line than the chunk size used below\nshort\n",
    ];

    for text in texts {
        let mut expected = forward(text);
        expected.reverse();

        for chunk_size in [1, 2, 3, 7, 64 * 1024] {
            assert_eq!(
                backward(text, chunk_size),
                expected,
                "chunk size {chunk_size} over {text:?}"
            );
        }
    }
}

#[test]
fn empty_input_has_no_lines() {
    assert!(forward("").is_empty());
    assert!(backward("", 4).is_empty());
}

#[test]
fn blank_lines_in_the_middle_are_preserved() {
    // Arrange
    let text = "first\n\nthird\n";

    // Act
    let lines = backward(text, 2);

    // Assert
    assert_eq!(lines, vec!["third", "", "first"]);
}

#[test]
fn carriage_returns_are_stripped() {
    let text = "one\r\ntwo\r\n";

    assert_eq!(forward(text), vec!["one", "two"]);
    assert_eq!(backward(text, 3), vec!["two", "one"]);
}

#[test]
fn invalid_utf8_is_replaced_not_fatal() {
    let bytes = b"ok\n\xff\xfebad\n".to_vec();
    let mut source = ForwardLines::new(Cursor::new(bytes));

    assert_eq!(source.next_line().unwrap().as_deref(), Some("ok"));
    let line = source.next_line().unwrap().unwrap();
    assert!(line.ends_with("bad"));
}

#[test]
fn missing_file_opens_as_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("capture0.log");

    assert!(open_log(&path, ScanDirection::Forward).unwrap().is_none());
    assert!(open_log(&path, ScanDirection::Backward).unwrap().is_none());
}

#[test]
fn open_log_reads_both_directions() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("capture0.log");
    fs::write(&path, "oldest\nmiddle\nnewest\n").unwrap();

    // Act
    let mut fwd = open_log(&path, ScanDirection::Forward).unwrap().unwrap();
    let mut bwd = open_log(&path, ScanDirection::Backward).unwrap().unwrap();

    // Assert
    assert_eq!(drain(fwd.as_mut()), vec!["oldest", "middle", "newest"]);
    assert_eq!(drain(bwd.as_mut()), vec!["newest", "middle", "oldest"]);
}

#[test]
fn open_log_ignores_appends_after_open() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("capture0.log");
    fs::write(&path, "before\n").unwrap();
    let mut source = open_log(&path, ScanDirection::Forward).unwrap().unwrap();

    // Act
    fs::write(&path, "before\nafter\n").unwrap();

    // Assert
    assert_eq!(drain(source.as_mut()), vec!["before"]);
}
