//! Integration tests for the pwdgen-core public API.
//!
//! These tests drive the layout calculator and the screen printer together
//! through the crate-root re-exports, the way the `pwdgen` binary uses them.

use std::convert::Infallible;

use pwdgen_core::{
    columns_per_line, lines_per_password, passwords_per_screen, printer::RecordingSink,
    LayoutPlan, PasswordLength, PrintSummary, ScreenGeometry, ScreenPrinter, WrapPolicy,
};

#[derive(Debug, PartialEq)]
struct SourceDrained;

fn geometry(rows: u16, columns: u16) -> ScreenGeometry {
    ScreenGeometry::new(rows, columns).expect("positive geometry")
}

fn len(n: usize) -> PasswordLength {
    PasswordLength::new(n).expect("positive length")
}

/// Generator producing `width`-character passwords "aaa", "bbb", ... cycling
/// through the alphabet.
fn letters(width: usize) -> impl FnMut() -> Result<String, Infallible> {
    let mut n = 0u8;
    move || {
        let c = char::from(b'a' + n % 26);
        n = n.wrapping_add(1) % 26;
        Ok(c.to_string().repeat(width))
    }
}

#[test]
fn test_standard_terminal_plan_for_common_lengths() {
    let screen = geometry(24, 80);

    assert_eq!(columns_per_line(&screen, len(9)), 8);
    assert_eq!(columns_per_line(&screen, len(7)), 10);
    assert_eq!(lines_per_password(&screen, len(9)), 1);
    assert_eq!(passwords_per_screen(&screen, len(9)), 192);
}

#[test]
fn test_overlong_password_plan() {
    let plan = LayoutPlan::compute(&geometry(6, 10), len(12));

    assert_eq!(plan.columns_per_line, 0);
    assert_eq!(plan.lines_per_password, 2);
    assert_eq!(plan.passwords_per_screen, 3);
}

#[test]
fn test_screen_print_never_overflows_line_width() {
    for columns in [8u16, 11, 13, 17, 40, 80, 132] {
        for length in 1..=usize::from(columns) {
            // Arrange
            let printer = ScreenPrinter::new(geometry(4, columns), len(length));
            let mut sink = RecordingSink::new();

            // Act
            let summary = printer
                .print_screen(letters(length), &mut sink)
                .expect("generator never fails");

            // Assert
            assert_eq!(summary.printed, printer.plan().passwords_per_screen);
            for line in sink.lines() {
                assert!(
                    line.len() <= usize::from(columns),
                    "cols={columns} len={length} overflowed: {line:?}"
                );
            }
        }
    }
}

#[test]
fn test_screen_print_line_count_matches_rows_when_password_fits() {
    let printer = ScreenPrinter::new(geometry(5, 80), len(12));
    let mut sink = RecordingSink::new();

    let summary = printer.print_screen(letters(12), &mut sink).unwrap();

    assert_eq!(summary.lines, 5);
    assert_eq!(sink.lines().len(), 5);
}

#[test]
fn test_explicit_count_output_ends_with_newline_and_keeps_order() {
    let printer = ScreenPrinter::new(geometry(24, 20), len(3));
    let mut sink = RecordingSink::new();

    let summary = printer.print_count(7, letters(3), &mut sink).unwrap();

    // 20 columns, 4-char slots: wraps once offset + 4 >= 20, i.e. after 5 passwords
    assert_eq!(sink.output(), "aaa bbb ccc ddd eee\nfff ggg\n");
    assert_eq!(summary, PrintSummary { printed: 7, lines: 2 });
}

#[test]
fn test_generator_failure_on_ith_call_emits_i_minus_one_items() {
    for fail_at in 1..=6usize {
        // Arrange
        let printer = ScreenPrinter::new(geometry(24, 80), len(4));
        let mut calls = 0usize;
        let generator = || {
            calls += 1;
            if calls == fail_at {
                Err(SourceDrained)
            } else {
                Ok("pass".to_string())
            }
        };
        let mut sink = RecordingSink::new();

        // Act
        let result = printer.print(6, WrapPolicy::ByColumnCount, generator, &mut sink);

        // Assert
        assert_eq!(result, Err(SourceDrained));
        assert_eq!(sink.chunks.len(), fail_at - 1);
    }
}
