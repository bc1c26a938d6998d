use chrono::{TimeZone, Utc};
use richerr::{meta, EnhancedError, Meta, MetaValue};

#[test]
fn test_empty_key_entry_is_dropped() {
    let err = EnhancedError::define("e")
        .with_meta("k", "v")
        .with_meta("", "dropped");
    assert_eq!(err.meta().len(), 1);

    let mut meta = Meta::new();
    meta.push("", 1);
    assert!(meta.is_empty());
}

#[test]
fn test_insertion_order_preserved() {
    let err = EnhancedError::define("e")
        .with_meta("z", 1)
        .with_meta("a", 2)
        .with_meta("m", 3);
    let keys: Vec<&str> = err.meta().iter().map(|e| e.key()).collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn test_integer_values_render_base_10() {
    let err = EnhancedError::define("e")
        .with_meta("i8", -8i8)
        .with_meta("i32", 32i32)
        .with_meta("i64", -64i64)
        .with_meta("u8", 65u8)
        .with_meta("u16", 16u16)
        .with_meta("u64", 64u64)
        .with_meta("usize", 7usize);

    assert_eq!(err.meta().get("i8"), Some("-8"));
    assert_eq!(err.meta().get("i32"), Some("32"));
    assert_eq!(err.meta().get("i64"), Some("-64"));
    // u8 is an integer like the rest, never a character.
    assert_eq!(err.meta().get("u8"), Some("65"));
    assert_eq!(err.meta().get("u16"), Some("16"));
    assert_eq!(err.meta().get("u64"), Some("64"));
    assert_eq!(err.meta().get("usize"), Some("7"));
}

#[test]
fn test_float_values_render_shortest_form() {
    let err = EnhancedError::define("e")
        .with_meta("f32", 2.5f32)
        .with_meta("f64", 64.64f64);
    assert_eq!(err.meta().get("f32"), Some("2.5"));
    assert_eq!(err.meta().get("f64"), Some("64.64"));
}

#[test]
fn test_bool_char_and_string_values() {
    let err = EnhancedError::define("e")
        .with_meta("t", true)
        .with_meta("f", false)
        .with_meta("c", 'b')
        .with_meta("s", "text")
        .with_meta("owned", String::from("owned"));

    assert_eq!(err.meta().get("t"), Some("true"));
    assert_eq!(err.meta().get("f"), Some("false"));
    assert_eq!(err.meta().get("c"), Some("b"));
    assert_eq!(err.meta().get("s"), Some("text"));
    assert_eq!(err.meta().get("owned"), Some("owned"));
}

#[test]
fn test_byte_values_render_as_raw_text() {
    let err = EnhancedError::define("e")
        .with_meta("bytes", b"hello world".as_slice())
        .with_meta("vec", Vec::from(*b"abc"))
        .with_meta("empty", b"".as_slice());

    assert_eq!(err.meta().get("bytes"), Some("hello world"));
    assert_eq!(err.meta().get("vec"), Some("abc"));
    assert_eq!(err.meta().get("empty"), Some(""));
}

#[test]
fn test_time_values_render_rfc3339() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap();
    let err = EnhancedError::define("e").with_meta("time", at);
    assert_eq!(err.meta().get("time"), Some("2024-05-01T12:30:45Z"));
}

#[test]
fn test_display_and_debug_fallbacks() {
    let err = EnhancedError::define("e")
        .with_meta("addr", MetaValue::display(std::net::Ipv4Addr::LOCALHOST))
        .with_meta("opt", MetaValue::debug(Some(1)));

    assert_eq!(err.meta().get("addr"), Some("127.0.0.1"));
    assert_eq!(err.meta().get("opt"), Some("Some(1)"));
}

#[test]
fn test_meta_macro_builds_entries() {
    let err = EnhancedError::define("e").with_meta_entries(meta!(
        "table" => "users",
        "attempt" => 3,
        "fatal" => false,
        "" => "dropped",
    ));

    assert_eq!(err.meta().len(), 3);
    assert_eq!(err.meta().get("table"), Some("users"));
    assert_eq!(err.meta().get("attempt"), Some("3"));
    assert_eq!(err.meta().get("fatal"), Some("false"));
}

#[test]
fn test_meta_entry_display_form() {
    let mut meta = Meta::new();
    meta.push("key", "value");
    let entry = meta.iter().next().unwrap();
    assert_eq!(entry.to_string(), "[key: value]");
}
