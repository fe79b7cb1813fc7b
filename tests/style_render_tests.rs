use proctor::style::{BatchSummary, render};

#[test]
fn underline_rules_match_text_length() {
    let banner = render::underline("You have nothing to verify!");
    let mut lines = banner.lines();
    let text = lines.next().unwrap();
    let rule = lines.next().unwrap();
    assert_eq!(text, "You have nothing to verify!");
    assert_eq!(rule.len(), text.len());
    assert!(rule.chars().all(|c| c == '-'));
    assert!(lines.next().is_none());
}

#[test]
fn footer_lists_all_counters_for_mixed_batch() {
    let mut summary = BatchSummary::default();
    summary.record(0);
    summary.record(3);

    let footer = render::prepare_footer(&summary);
    let lines: Vec<&str> = footer.lines().collect();
    // Leading newline from the bar, then the bar itself, then the rule.
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "FILES 2 | SUCCESSFUL 1 | FAILED 1 | ERRORS 3");
    assert_eq!(lines[2].len(), lines[1].len());
    assert!(lines[2].chars().all(|c| c == '-'));
}

#[test]
fn footer_omits_zero_counters() {
    let mut summary = BatchSummary::default();
    summary.record(3);

    let footer = render::prepare_footer(&summary);
    let bar = footer.lines().nth(1).unwrap();
    assert_eq!(bar, "FILES 1 | FAILED 1 | ERRORS 3");
    assert!(!footer.contains("SUCCESSFUL"));
}

#[test]
fn clean_batch_gets_the_banner_never_the_footer() {
    let mut summary = BatchSummary::default();
    summary.record(0);
    summary.record(0);

    let footer = render::batch_footer(&summary);
    assert_eq!(
        footer,
        render::underline("Your source files are verified successfully!")
    );
    assert!(!footer.contains("FILES"));
    assert!(!footer.contains('|'));
}

#[test]
fn dirty_batch_gets_the_counter_bar_never_the_banner() {
    let mut summary = BatchSummary::default();
    summary.record(0);
    summary.record(3);

    let footer = render::batch_footer(&summary);
    assert_eq!(footer, render::prepare_footer(&summary));
    assert!(!footer.contains("verified successfully"));
}

#[test]
fn ruled_bar_sizes_its_rule_to_the_visible_bar() {
    let segments = vec!["\nCLASSES 2".to_string(), "TESTS 5/5".to_string()];
    let out = render::ruled_bar(&segments);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "CLASSES 2 | TESTS 5/5");
    assert_eq!(lines[2].len(), lines[1].len());
    assert!(lines[2].chars().all(|c| c == '-'));
}

#[test]
fn summary_accounting_holds_per_record() {
    let mut summary = BatchSummary::default();
    for count in [0, 2, 0, 5, 1] {
        summary.record(count);
        assert_eq!(summary.files(), summary.successful() + summary.failed());
    }
    assert_eq!(summary.files(), 5);
    assert_eq!(summary.successful(), 2);
    assert_eq!(summary.failed(), 3);
    assert_eq!(summary.errors(), 8);
}
