// tests/truncation.rs
use proptest::prelude::*;

use benchseq::report::{Excerpt, SEPARATOR, TruncationPolicy, abridge};

fn numbered(n: usize) -> String {
    let mut s = String::with_capacity(n * 8);
    for i in 1..=n {
        s.push_str(&format!("L{i}\n"));
    }
    s
}

fn assert_window(n: usize) {
    let text = numbered(n);
    let lines = abridge(&text, TruncationPolicy::default()).lines();

    let mut expected: Vec<String> = (1..=10).map(|i| format!("L{i}")).collect();
    expected.push(SEPARATOR.to_string());
    expected.extend((n - 9..=n).map(|i| format!("L{i}")));

    assert_eq!(lines.len(), 21, "window size for {n} lines");
    assert_eq!(lines, expected);
}

#[test]
fn window_is_21_lines_at_101() {
    assert_window(101);
}

#[test]
fn window_is_21_lines_at_1000() {
    assert_window(1000);
}

#[test]
fn window_is_21_lines_at_100000() {
    assert_window(100_000);
}

proptest! {
    #[test]
    fn short_text_is_shown_verbatim(lines in proptest::collection::vec("[a-z ]{0,12}", 1..=100)) {
        let text = lines.join("\n") + "\n";
        let excerpt = abridge(&text, TruncationPolicy::default());
        prop_assert_eq!(excerpt.to_string(), text);
    }

    #[test]
    fn long_text_keeps_head_and_tail(n in 101usize..3000) {
        let text = numbered(n);
        let excerpt = abridge(&text, TruncationPolicy::default());
        let shown = excerpt.lines();

        prop_assert_eq!(shown.len(), 21);
        prop_assert_eq!(shown[0], "L1");
        prop_assert_eq!(shown[10], SEPARATOR);
        let last = format!("L{n}");
        prop_assert_eq!(shown[20], last.as_str());
        let is_window = matches!(excerpt, Excerpt::Window { .. });
        prop_assert!(is_window);
    }

    #[test]
    fn window_size_follows_policy(head in 0usize..20, tail in 0usize..20, extra in 1usize..50) {
        let max_lines = head + tail + 5;
        let policy = TruncationPolicy { max_lines, head, tail };
        let text = numbered(max_lines + extra);

        prop_assert_eq!(abridge(&text, policy).lines().len(), head + tail + 1);
    }
}
