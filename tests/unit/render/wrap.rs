use super::*;

#[test]
fn short_text_stays_on_one_line() {
    assert_eq!(wrap("hello world", 60), vec!["hello world"]);
}

#[test]
fn wraps_at_column_limit() {
    let lines = wrap("the quick brown fox jumps over the lazy dog", 15);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(line.chars().count() <= 15, "line too long: {line:?}");
    }
    // Round-trips the words in order.
    let rejoined = lines.join(" ");
    assert_eq!(rejoined, "the quick brown fox jumps over the lazy dog");
}

#[test]
fn collapses_whitespace_runs() {
    assert_eq!(wrap("a  b\t c\n d", 60), vec!["a b c d"]);
}

#[test]
fn splits_words_longer_than_the_limit() {
    let lines = wrap("abcdefghij", 4);
    assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
}

#[test]
fn empty_input_produces_no_lines() {
    assert!(wrap("", 60).is_empty());
    assert!(wrap("   ", 60).is_empty());
}

#[test]
fn fill_joins_with_newlines() {
    assert_eq!(fill("one two three", 5), "one\ntwo\nthree");
}
