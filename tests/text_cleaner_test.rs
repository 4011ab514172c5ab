use deck_analyst::infrastructure::text_processing::clean_extracted_text;

#[test]
fn given_text_with_fi_ligature_when_cleaning_then_decomposes_to_fi() {
    assert_eq!(clean_extracted_text("ﬁnancial proﬁle"), "financial profile");
}

#[test]
fn given_non_ascii_characters_when_cleaning_then_replaced_by_single_space() {
    assert_eq!(
        clean_extracted_text("Market → €40B • growing"),
        "Market 40B growing"
    );
}

#[test]
fn given_mixed_whitespace_when_cleaning_then_collapses_to_single_line() {
    assert_eq!(
        clean_extracted_text("  Problem:\n\n\tSlow   analytics \r\n Solution: AI  "),
        "Problem: Slow analytics Solution: AI"
    );
}

#[test]
fn given_word_hyphenated_across_lines_when_cleaning_then_joined() {
    assert_eq!(clean_extracted_text("subscrip-\ntion revenue"), "subscription revenue");
}

#[test]
fn given_only_non_ascii_text_when_cleaning_then_returns_empty() {
    assert_eq!(clean_extracted_text("日本語 🚀"), "");
}

#[test]
fn given_empty_text_when_cleaning_then_returns_empty() {
    assert_eq!(clean_extracted_text(""), "");
    assert_eq!(clean_extracted_text(" \n\t "), "");
}
