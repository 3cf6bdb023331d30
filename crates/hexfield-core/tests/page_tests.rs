use hexfield_core::sanitize_address;

#[test]
fn strips_label_and_spaces() {
    assert_eq!(sanitize_address("CA: ABC123"), "ABC123");
}

#[test]
fn keeps_unlabelled_text_without_whitespace() {
    assert_eq!(sanitize_address("  AB C\t12\n"), "ABC12");
}

#[test]
fn only_the_first_colon_is_a_label() {
    assert_eq!(sanitize_address("CA: a:b"), "a:b");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(sanitize_address(""), "");
    assert_eq!(sanitize_address("CA:"), "");
}
