use nfogen::error::NfoError;
use nfogen::formatter::apply;
use nfogen::value::{ImageRef, Scalar, Value};

fn seq(items: &[&str]) -> Value {
    Value::Sequence(items.iter().map(|s| Scalar::from(*s)).collect())
}

fn unwrap_text(value: Value) -> String {
    match value {
        Value::Scalar(scalar) => scalar.to_string(),
        other => panic!("Expected scalar output, got {:?}", other),
    }
}

#[test]
fn test_boolean_specs() {
    for spec in ["true", "!false"] {
        assert_eq!(unwrap_text(apply(Value::from("x"), spec).unwrap()), "1");
        assert_eq!(unwrap_text(apply(Value::from(0_i64), spec).unwrap()), "0");
        assert_eq!(unwrap_text(apply(Value::Sequence(vec![]), spec).unwrap()), "0");
        assert_eq!(unwrap_text(apply(Value::Scalar(Scalar::Null), spec).unwrap()), "0");
    }
    for spec in ["false", "!true"] {
        assert_eq!(unwrap_text(apply(Value::from("x"), spec).unwrap()), "0");
        assert_eq!(unwrap_text(apply(Value::from(false), spec).unwrap()), "1");
    }
}

#[test]
fn test_len_counts_elements() {
    assert_eq!(unwrap_text(apply(seq(&["a", "b", "c"]), "len").unwrap()), "3");
    assert_eq!(unwrap_text(apply(Value::Sequence(vec![]), "len").unwrap()), "0");
    assert_eq!(
        unwrap_text(apply(Value::Nested(vec![vec![Scalar::from("a")]]), "len").unwrap()),
        "1"
    );
}

#[test]
fn test_len_rejects_scalars() {
    assert!(matches!(
        apply(Value::from("abc"), "len"),
        Err(NfoError::TypeMismatch { .. })
    ));
}

#[test]
fn test_bbimg_single_collapses_to_scalar() {
    let result = apply(seq(&["http://a"]), "bbimg").unwrap();
    assert_eq!(
        result,
        Value::from("[URL=http://a][IMG]http://a[/IMG][/URL]")
    );
}

#[test]
fn test_bbimg_multiple_stays_a_sequence() {
    let result = apply(seq(&["http://a", "http://b"]), "bbimg").unwrap();
    assert_eq!(
        result,
        Value::Sequence(vec![
            Scalar::from("[URL=http://a][IMG]http://a[/IMG][/URL]"),
            Scalar::from("[URL=http://b][IMG]http://b[/IMG][/URL]"),
        ])
    );
}

#[test]
fn test_bbimg_uses_image_ref_fields() {
    let images = Value::Images(vec![ImageRef {
        url: "http://page/1".to_string(),
        src: "http://thumb/1.png".to_string(),
    }]);
    assert_eq!(
        apply(images, "bbimg").unwrap(),
        Value::from("[URL=http://page/1][IMG]http://thumb/1.png[/IMG][/URL]")
    );
}

#[test]
fn test_layout_spacing_zero() {
    let result = apply(seq(&["1", "2", "3", "4"]), "layout,2x2x0").unwrap();
    assert_eq!(unwrap_text(result), "12\n34");
}

#[test]
fn test_layout_spacing_one() {
    let result = apply(seq(&["1", "2", "3", "4"]), "layout,2x2x1").unwrap();
    assert_eq!(unwrap_text(result), "1 2\n\n3 4");
}

#[test]
fn test_layout_count_mismatch() {
    match apply(seq(&["1", "2", "3"]), "layout,2x2x0") {
        Err(NfoError::LayoutCountMismatch { expected, actual }) => {
            assert_eq!(expected, 4);
            assert_eq!(actual, 3);
        }
        other => panic!("Expected LayoutCountMismatch, got {:?}", other),
    }
}

#[test]
fn test_layout_rejects_zero_dimensions() {
    // A zero-column or zero-row grid can never place anything, and an
    // empty sequence must not slip through the count check.
    for spec in ["layout,0x1x0", "layout,1x0x0", "layout,0x0x2"] {
        assert!(matches!(
            apply(Value::Sequence(vec![]), spec),
            Err(NfoError::InvalidFormatSpec { .. })
        ));
    }
    assert!(matches!(
        apply(seq(&["1", "2"]), "layout,0x1x0"),
        Err(NfoError::InvalidFormatSpec { .. })
    ));
}

#[test]
fn test_layout_rejects_oversized_dimensions() {
    // A dimension beyond usize
    assert!(matches!(
        apply(seq(&["1"]), "layout,99999999999999999999999999x1x0"),
        Err(NfoError::InvalidFormatSpec { .. })
    ));
    // Dimensions whose product overflows usize
    assert!(matches!(
        apply(seq(&["1"]), "layout,9999999999x9999999999x0"),
        Err(NfoError::InvalidFormatSpec { .. })
    ));
}

#[test]
fn test_chain_bbimg_then_layout() {
    let urls = seq(&["http://a", "http://b", "http://c", "http://d"]);
    let chained = apply(urls.clone(), "bbimg:layout,2x2x0").unwrap();

    let staged = apply(apply(urls, "bbimg").unwrap(), "layout,2x2x0").unwrap();
    assert_eq!(chained, staged);

    assert_eq!(
        unwrap_text(chained),
        "[URL=http://a][IMG]http://a[/IMG][/URL][URL=http://b][IMG]http://b[/IMG][/URL]\n\
         [URL=http://c][IMG]http://c[/IMG][/URL][URL=http://d][IMG]http://d[/IMG][/URL]"
    );
}

#[test]
fn test_wrap_scalar_word_wraps_with_indent() {
    let result = apply(Value::from("aaa bbb ccc ddd"), ">>2x10").unwrap();
    assert_eq!(unwrap_text(result), "aaa bbb\n  ccc ddd");
}

#[test]
fn test_wrap_sequence_joins_with_indent() {
    let result = apply(seq(&["one", "two"]), ">>4x68").unwrap();
    assert_eq!(unwrap_text(result), "one\n    two");
}

#[test]
fn test_wrap_nested_uses_single_inner_group() {
    let nested = Value::Nested(vec![vec![Scalar::from("l1"), Scalar::from("l2")]]);
    let result = apply(nested, ">>2x68").unwrap();
    assert_eq!(unwrap_text(result), "l1\n  l2");
}

#[test]
fn test_wrap_rejects_multi_group_nested() {
    let nested = Value::Nested(vec![
        vec![Scalar::from("a")],
        vec![Scalar::from("b")],
    ]);
    assert!(matches!(
        apply(nested, ">>2x68"),
        Err(NfoError::TypeMismatch { .. })
    ));
}

#[test]
fn test_center_wraps_then_centers() {
    let result = apply(Value::from("ab cd"), "^>10x4").unwrap();
    assert_eq!(unwrap_text(result), "    ab    \n    cd    ");
}

#[test]
fn test_center_odd_space_goes_right() {
    let result = apply(Value::from("abc"), "^>6x6").unwrap();
    assert_eq!(unwrap_text(result), " abc  ");
}

#[test]
fn test_generic_zero_padded_integer() {
    assert_eq!(unwrap_text(apply(Value::from(3_i64), "02").unwrap()), "03");
}

#[test]
fn test_generic_width_alignment() {
    assert_eq!(unwrap_text(apply(Value::from("ab"), "5").unwrap()), "ab   ");
    assert_eq!(unwrap_text(apply(Value::from(3_i64), "5").unwrap()), "    3");
    assert_eq!(unwrap_text(apply(Value::from("ab"), "^6").unwrap()), "  ab  ");
    assert_eq!(unwrap_text(apply(Value::from("ab"), "*>5").unwrap()), "***ab");
}

#[test]
fn test_unrecognized_spec_is_an_error() {
    match apply(Value::from("x"), "bogus") {
        Err(NfoError::InvalidFormatSpec { spec }) => assert_eq!(spec, "bogus"),
        other => panic!("Expected InvalidFormatSpec, got {:?}", other),
    }
}

#[test]
fn test_generic_rejects_sequences() {
    assert!(matches!(
        apply(seq(&["a"]), "5"),
        Err(NfoError::TypeMismatch { .. })
    ));
}
