use crate::{ScanErrorKind, ScanFlags, Scanner};
use pretty_assertions::assert_eq;

fn none() -> ScanFlags {
    ScanFlags::empty()
}

// === Unsigned Numbers ===

#[test]
fn unsigned_decimal_value() {
    let mut scanner = Scanner::new("255");
    assert_eq!(scanner.get_unsigned_number(none(), 0).unwrap(), 255);
    assert!(scanner.is_end_of_input(false));
}

#[test]
fn unsigned_hex_prefix() {
    let mut scanner = Scanner::new("0xFF");
    assert_eq!(scanner.get_unsigned_number(ScanFlags::HEX, 0).unwrap(), 255);
    assert_eq!(scanner.get_last_token(none()), "0xFF");
}

#[test]
fn unsigned_hex_only() {
    let mut scanner = Scanner::new("FF");
    assert_eq!(scanner.get_unsigned_number(ScanFlags::HEX_ONLY, 0).unwrap(), 255);
}

#[test]
fn hex_only_treats_digits_as_hex() {
    let mut scanner = Scanner::new("10");
    assert_eq!(scanner.get_unsigned_number(ScanFlags::HEX_ONLY, 0).unwrap(), 16);
}

#[test]
fn hex_flag_keeps_plain_digits_decimal() {
    let mut scanner = Scanner::new("10");
    assert_eq!(scanner.get_unsigned_number(ScanFlags::HEX, 0).unwrap(), 10);
}

#[test]
fn hex_letter_switches_to_hex() {
    let mut scanner = Scanner::new("1f");
    assert_eq!(scanner.get_unsigned_number(ScanFlags::HEX, 0).unwrap(), 31);
}

#[test]
fn hex_only_rejects_prefix() {
    let mut scanner = Scanner::new("0xFF");
    assert_eq!(scanner.get_unsigned_number(ScanFlags::HEX_ONLY, 0).unwrap(), 0);
    assert_eq!(scanner.remaining(), Some("xFF"));
}

#[test]
fn hex_letters_need_flag() {
    let mut scanner = Scanner::new("FF");
    let err = scanner.get_unsigned_number(none(), 0).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::NumberExpected);
    assert_eq!(err.token, "FF");
}

#[test]
fn decimal_stops_at_non_digit() {
    let mut scanner = Scanner::new("12ab");
    assert_eq!(scanner.get_unsigned_number(none(), 0).unwrap(), 12);
    assert_eq!(scanner.remaining(), Some("ab"));
}

#[test]
fn malformed_prefix_fails() {
    for input in ["12x4", "0x0x1", "x1"] {
        let mut scanner = Scanner::new(input);
        let err = scanner.get_unsigned_number(ScanFlags::HEX, 0).unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::NumberExpected, "input {input:?}");
    }
}

#[test]
fn bare_prefix_fails() {
    let mut scanner = Scanner::new("0x rest");
    let err = scanner.get_unsigned_number(ScanFlags::HEX, 0).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::NumberExpected);
    assert_eq!(err.token, "0x");
}

#[test]
fn no_digits_fails_with_token_to_space() {
    let mut scanner = Scanner::new("abc def");
    let err = scanner.get_unsigned_number(none(), 0).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::NumberExpected);
    assert_eq!(err.token, "abc");
    assert_eq!(err.pos, 0);
}

#[test]
fn unsigned_at_end_fails() {
    let mut scanner = Scanner::new("   ");
    let err = scanner.get_unsigned_number(ScanFlags::SKIP_SPACE, 0).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::NumberExpected);
    assert_eq!(err.token, "");
}

#[test]
fn u64_overflow_is_a_conversion_failure() {
    let mut scanner = Scanner::new("18446744073709551616");
    let err = scanner.get_unsigned_number(none(), 0).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::NumberExpected);
    assert_eq!(err.token, "18446744073709551616");

    let mut scanner = Scanner::new("18446744073709551615");
    assert_eq!(scanner.get_unsigned_number(none(), 0).unwrap(), u64::MAX);
}

#[test]
fn max_value_bounds_result() {
    let mut scanner = Scanner::new("101");
    let err = scanner.get_unsigned_number(none(), 100).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::Overflow { max: 100 });
    assert_eq!(err.token, "101");

    let mut scanner = Scanner::new("100");
    assert_eq!(scanner.get_unsigned_number(none(), 100).unwrap(), 100);
}

#[test]
fn max_value_applies_to_hex() {
    let mut scanner = Scanner::new("0x100");
    let err = scanner.get_unsigned_number(ScanFlags::HEX, 255).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::Overflow { max: 255 });
}

#[test]
fn skip_space_around_number() {
    let mut scanner = Scanner::new("  42  ,");
    assert_eq!(scanner.get_unsigned_number(ScanFlags::SKIP_SPACE, 0).unwrap(), 42);
    assert_eq!(scanner.get_last_token(none()), "42");
    assert_eq!(scanner.remaining(), Some(","));
}

#[test]
fn unsigned_rejects_sign() {
    let mut scanner = Scanner::new("-5");
    let err = scanner.get_unsigned_number(ScanFlags::SIGNED, 0).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::NumberExpected);
}

// === Signed Numbers ===

#[test]
fn signed_values() {
    let mut scanner = Scanner::new("-42 17");
    let flags = ScanFlags::SKIP_SPACE;
    assert_eq!(scanner.get_signed_number(flags, 0).unwrap(), -42);
    assert_eq!(scanner.get_signed_number(flags, 0).unwrap(), 17);
}

#[test]
fn signed_hex() {
    let mut scanner = Scanner::new("-0x10");
    assert_eq!(scanner.get_signed_number(ScanFlags::HEX, 0).unwrap(), -16);
    assert_eq!(scanner.get_last_token(none()), "-0x10");
}

#[test]
fn signed_max_bounds_magnitude() {
    let mut scanner = Scanner::new("-101");
    let err = scanner.get_signed_number(none(), 100).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::Overflow { max: 100 });
    assert_eq!(err.token, "-101");

    let mut scanner = Scanner::new("-100");
    assert_eq!(scanner.get_signed_number(none(), 100).unwrap(), -100);
}

#[test]
fn signed_limits() {
    let mut scanner = Scanner::new("-9223372036854775808");
    assert_eq!(scanner.get_signed_number(none(), 0).unwrap(), i64::MIN);

    let mut scanner = Scanner::new("9223372036854775808");
    let err = scanner.get_signed_number(none(), 0).unwrap_err();
    assert_eq!(
        err.kind,
        ScanErrorKind::Overflow {
            max: i64::MAX.unsigned_abs()
        }
    );
}

#[test]
fn sign_without_digits_fails() {
    let mut scanner = Scanner::new("- 5");
    let err = scanner.get_signed_number(none(), 0).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::NumberExpected);
    assert_eq!(err.token, "-");
}

// === Decimal Numbers ===

#[test]
fn decimal_ignores_hex_flags() {
    let mut scanner = Scanner::new("0xFF");
    assert_eq!(scanner.get_unsigned_decimal(ScanFlags::HEX, 0).unwrap(), 0);
    assert_eq!(scanner.remaining(), Some("xFF"));
}

#[test]
fn decimal_failure_kind() {
    let mut scanner = Scanner::new("FF");
    let err = scanner.get_unsigned_decimal(ScanFlags::HEX_ONLY, 0).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::DecimalNumberExpected);
}

#[test]
fn signed_decimal() {
    let mut scanner = Scanner::new(" -7;");
    assert_eq!(scanner.get_signed_decimal(ScanFlags::SKIP_SPACE, 10).unwrap(), -7);
    assert!(scanner.match_char(';', false));

    let mut scanner = Scanner::new("-11");
    let err = scanner.get_signed_decimal(none(), 10).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::Overflow { max: 10 });
}

// === Floats ===

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn float_with_point() {
    let mut scanner = Scanner::new("12.345");
    assert_close(scanner.get_float(none()).unwrap(), 12.345);
    assert!(scanner.is_end_of_input(false));
}

#[test]
fn float_with_comma_flag() {
    let mut scanner = Scanner::new("12,345");
    assert_close(scanner.get_float(ScanFlags::COMMA).unwrap(), 12.345);
}

#[test]
fn float_comma_without_flag_stops() {
    let mut scanner = Scanner::new("12,345");
    assert_close(scanner.get_float(none()).unwrap(), 12.0);
    assert_eq!(scanner.position(), 2);
    assert_eq!(scanner.get_last_token(none()), "12");
}

#[test]
fn float_signs() {
    let mut scanner = Scanner::new("-1.5 +2.25");
    let flags = ScanFlags::SKIP_SPACE;
    assert_close(scanner.get_float(flags).unwrap(), -1.5);
    assert_close(scanner.get_float(flags).unwrap(), 2.25);
}

#[test]
fn float_integer_only() {
    let mut scanner = Scanner::new("7");
    assert_close(scanner.get_float(none()).unwrap(), 7.0);
}

#[test]
fn float_leading_zeros_in_fraction() {
    let mut scanner = Scanner::new("0.05");
    assert_close(scanner.get_float(none()).unwrap(), 0.05);
}

#[test]
fn float_long_fraction_is_truncated_not_rejected() {
    let mut scanner = Scanner::new("1.0000000000000000000000001");
    assert_close(scanner.get_float(none()).unwrap(), 1.0);
    assert!(scanner.is_end_of_input(false));
}

#[test]
fn float_failures() {
    let mut scanner = Scanner::new("abc");
    let err = scanner.get_float(none()).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::FloatNumberExpected);
    assert_eq!(err.token, "abc");

    let mut scanner = Scanner::new("12.x");
    let err = scanner.get_float(none()).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::FloatNumberExpected);
    assert_eq!(err.token, "12.");

    let mut scanner = Scanner::new(".5");
    assert_eq!(
        scanner.get_float(none()).unwrap_err().kind,
        ScanErrorKind::FloatNumberExpected
    );
}

// === Strings ===

#[test]
fn quoted_string_doubled_quote() {
    let mut scanner = Scanner::new(r#""a""b""#);
    assert_eq!(scanner.get_string(ScanFlags::QUOTED).unwrap(), r#"a"b"#);
    assert!(scanner.is_end_of_input(false));
}

#[test]
fn quoted_string_keeps_inner_space() {
    let mut scanner = Scanner::new(r#"  "hello world"  next"#);
    let flags = ScanFlags::QUOTED | ScanFlags::SKIP_SPACE;
    assert_eq!(scanner.get_string(flags).unwrap(), "hello world");
    assert_eq!(scanner.get_last_token(none()), r#""hello world""#);
    assert_eq!(scanner.remaining(), Some("next"));
}

#[test]
fn quoted_string_empty() {
    let mut scanner = Scanner::new(r#""""#);
    assert_eq!(scanner.get_string(ScanFlags::QUOTED).unwrap(), "");
    assert!(scanner.is_end_of_input(false));
}

#[test]
fn quoted_required() {
    let mut scanner = Scanner::new("bare word");
    let err = scanner.get_string(ScanFlags::QUOTED).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::StringExpected);
    assert_eq!(err.token, "bare");

    let mut scanner = Scanner::new("");
    let err = scanner.get_string(ScanFlags::QUOTED).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::StringExpected);
}

#[test]
fn unterminated_quoted_string() {
    let mut scanner = Scanner::new(r#""abc def"#);
    let err = scanner.get_string(none()).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::StringEndExpected);
    assert_eq!(err.token, r#""abc def"#);
}

#[test]
fn doubled_quote_at_end_of_buffer_is_unterminated() {
    let mut scanner = Scanner::new(r#""ab"""#);
    let err = scanner.get_string(none()).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::StringEndExpected);
}

#[test]
fn quoted_detected_without_flag() {
    let mut scanner = Scanner::new(r#""x y""#);
    assert_eq!(scanner.get_string(none()).unwrap(), "x y");
}

#[test]
fn unquoted_string_ends_at_space() {
    let mut scanner = Scanner::new("path/to/file rest");
    assert_eq!(scanner.get_string(none()).unwrap(), "path/to/file");
    assert_eq!(scanner.position(), 12);
}

#[test]
fn unquoted_string_at_end_is_empty() {
    let mut scanner = Scanner::new("  ");
    assert_eq!(scanner.get_string(ScanFlags::SKIP_SPACE).unwrap(), "");
}

#[test]
fn control_characters_fold_to_newline() {
    let mut scanner = Scanner::new("\"a\r\nb\n\rc\rd\u{1}e\"");
    assert_eq!(scanner.get_string(none()).unwrap(), "a\nb\nc\nd\ne");
}

#[test]
fn doubled_newlines_are_kept_apart() {
    let mut scanner = Scanner::new("\"a\n\nb\"");
    assert_eq!(scanner.get_string(none()).unwrap(), "a\n\nb");
}

// === Words ===

#[test]
fn next_token_words() {
    let mut scanner = Scanner::new("  copy  a.txt b.txt");
    assert_eq!(scanner.get_next_token(true), "copy");
    assert_eq!(scanner.get_next_token(true), "a.txt");
    assert_eq!(scanner.get_next_token(true), "b.txt");
    assert_eq!(scanner.get_next_token(true), "");
}

#[test]
fn next_token_without_skip() {
    let mut scanner = Scanner::new(" x");
    assert_eq!(scanner.get_next_token(false), "");
    assert_eq!(scanner.position(), 0);
}

// === Lines ===

#[test]
fn next_line_terminators() {
    let mut scanner = Scanner::new("one\r\ntwo\n\rthree\nfour");
    assert_eq!(scanner.get_next_line(false).unwrap(), "one");
    assert_eq!(scanner.get_next_line(false).unwrap(), "two");
    assert_eq!(scanner.get_next_line(false).unwrap(), "three");
    assert_eq!(scanner.get_next_line(false).unwrap(), "four");
    assert!(scanner.is_end_of_input(false));
}

#[test]
fn next_line_empty_lines() {
    let mut scanner = Scanner::new("\n\nx");
    assert_eq!(scanner.get_next_line(false).unwrap(), "");
    assert_eq!(scanner.get_next_line(false).unwrap(), "");
    assert_eq!(scanner.get_next_line(false).unwrap(), "x");
}

#[test]
fn next_line_window_excludes_terminator() {
    let mut scanner = Scanner::new("head\r\nbody");
    scanner.get_next_line(false).unwrap();
    assert_eq!(scanner.get_last_token(none()), "head");
    assert_eq!(scanner.remaining(), Some("body"));
}

#[test]
fn next_line_at_end_returns_empty() {
    let mut scanner = Scanner::new("");
    assert_eq!(scanner.get_next_line(true).unwrap(), "");
}

#[test]
fn next_line_fails_when_skip_reaches_end() {
    let mut scanner = Scanner::new("x   ");
    scanner.move_position(1).unwrap();
    let err = scanner.get_next_line(true).unwrap_err();
    assert!(matches!(err.kind, ScanErrorKind::SpecNotFound { .. }));
    assert_eq!(err.pos, 4);
}

#[test]
fn next_line_skips_leading_space() {
    let mut scanner = Scanner::new("   text here\n");
    assert_eq!(scanner.get_next_line(true).unwrap(), "text here");
    assert!(scanner.is_end_of_input(false));
}

#[test]
fn next_line_folds_embedded_tab() {
    // Tab is a control character, so it folds like any other even though
    // it is also whitespace.
    let mut scanner = Scanner::new("key\tvalue\r\nnext");
    assert_eq!(scanner.get_next_line(false).unwrap(), "key\nvalue");
    assert_eq!(scanner.get_last_token(none()), "key\tvalue");
    assert_eq!(scanner.get_next_line(false).unwrap(), "next");
}

// === Property tests ===

mod proptest_numbers {
    use crate::{ScanFlags, Scanner};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn unsigned_decimal_round_trips(value in any::<u64>()) {
            let mut scanner = Scanner::new(format!("  {value} "));
            prop_assert_eq!(scanner.get_unsigned_decimal(ScanFlags::SKIP_SPACE, 0).unwrap(), value);
            prop_assert!(scanner.is_end_of_input(false));
        }

        #[test]
        fn signed_decimal_round_trips(value in any::<i64>()) {
            let mut scanner = Scanner::new(format!("{value}"));
            prop_assert_eq!(scanner.get_signed_decimal(ScanFlags::empty(), 0).unwrap(), value);
            prop_assert!(scanner.is_end_of_input(false));
        }

        #[test]
        fn hex_number_round_trips(value in any::<u64>()) {
            let mut scanner = Scanner::new(format!("0x{value:x}"));
            prop_assert_eq!(scanner.get_unsigned_number(ScanFlags::HEX, 0).unwrap(), value);
        }

        #[test]
        fn value_above_max_overflows(max in 0_u64..1_000_000, excess in 1_u64..1_000) {
            let max = max + 1;
            let mut scanner = Scanner::new(format!("{}", max + excess));
            prop_assert!(scanner.get_unsigned_decimal(ScanFlags::empty(), max).is_err());
        }
    }
}
