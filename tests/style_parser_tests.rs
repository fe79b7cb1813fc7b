use proctor::style::{StyleError, parser};

#[test]
fn parse_filters_boilerplate_and_noise() {
    let capture = [
        "Starting audit...",
        "[WARN] /work/src/main/java/Foo.java:3:1: Missing a Javadoc comment. [MissingJavadocType]",
        "[WARN] /work/src/main/java/Foo.java:9:5: Missing a Javadoc comment. \
         [MissingJavadocMethod]",
        "/work/src/main/java/Foo.java:12: message",
        "Audit done.",
    ]
    .join("\n");

    let diags = parser::parse(&capture).expect("parse capture with one violation");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].to_string(), "[ERROR] 12: message");
}

#[test]
fn parse_preserves_emitted_order() {
    let capture = [
        "Starting audit...",
        "[ERROR] /p/Bar.java:1:8: first [RuleOne]",
        "[ERROR] /p/Bar.java:30:1: second [RuleTwo]",
        "[ERROR] /p/Bar.java:2:4: third [RuleThree]",
        "Audit done.",
    ]
    .join("\n");

    let diags = parser::parse(&capture).expect("parse multi-line capture");
    let messages: Vec<&str> = diags.iter().map(|d| d.message()).collect();
    assert_eq!(messages, vec![
        "1:8: first [RuleOne]",
        "30:1: second [RuleTwo]",
        "2:4: third [RuleThree]",
    ]);
    assert!(diags.iter().all(|d| d.severity().is_error()));
}

#[test]
fn parse_suppresses_noise_by_category_not_count() {
    let capture = [
        "Starting audit...",
        "[WARN] /p/A.java:1:1: Missing a Javadoc comment. [MissingJavadocType]",
        "[WARN] /p/A.java:2:1: Missing a Javadoc comment. [MissingJavadocType]",
        "[WARN] /p/A.java:3:1: Missing a Javadoc comment. [MissingJavadocMethod]",
        "[WARN] /p/A.java:4:1: Missing a Javadoc comment. [MissingJavadocMethod]",
        "[WARN] /p/A.java:5:1: Missing a Javadoc comment. [MissingJavadocMethod]",
        "Audit done.",
    ]
    .join("\n");

    let diags = parser::parse(&capture).expect("parse noise-only capture");
    assert!(diags.is_empty());
}

#[test]
fn parse_rejects_empty_capture() {
    assert!(matches!(parser::parse(""), Err(StyleError::EmptyCapture)));
    assert!(matches!(
        parser::parse("   \n\t  \n"),
        Err(StyleError::EmptyCapture)
    ));
}

#[test]
fn parse_trims_after_last_extension_marker() {
    // A directory literally named with the extension still counts as a
    // path boundary; the last occurrence wins.
    let capture = "/odd/dir.java/Foo.java:7:2: tab character";
    let diags = parser::parse(capture).expect("parse nested marker");
    assert_eq!(diags[0].message(), "7:2: tab character");
}

#[test]
fn parse_keeps_lines_without_marker_whole() {
    let capture = "some stray checker output";
    let diags = parser::parse(capture).expect("parse markerless line");
    assert_eq!(diags[0].message(), "some stray checker output");
}

#[test]
fn parse_yields_empty_message_when_line_ends_at_marker() {
    let capture = "/p/Foo.java";
    let diags = parser::parse(capture).expect("parse truncated line");
    assert_eq!(diags[0].message(), "");
    assert_eq!(diags[0].to_string(), "[ERROR] ");
}

#[test]
fn diagnostics_serialize_with_uppercase_severity() {
    let capture = "/p/Foo.java:12: message";
    let diags = parser::parse(capture).expect("parse single violation");
    let snapshot = serde_json::to_value(&diags[0]).unwrap();
    assert_eq!(snapshot["severity"], "ERROR");
    assert_eq!(snapshot["message"], "12: message");
}
