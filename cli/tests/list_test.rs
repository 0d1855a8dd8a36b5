//! Integration tests for the `list` command.

mod common;

use common::check_stdout;
use expect_test::expect;

#[test]
fn list_cases_and_targets() {
    check_stdout(
        &["list"],
        expect![[r#"
            cases:
              array_get (baseline)
              array_set
              segment_get
              segment_set
              text_get
              text_set
              span_of_array_get
              span_of_array_set
              span_of_segment_get
              span_of_segment_set
              span_of_text_get
              span_of_text_set
            targets:
              opaque
              transparent
        "#]],
    );
}
