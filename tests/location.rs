use richerr::{EnhancedError, Location};

#[test]
fn test_src_marker_truncates_path() {
    let loc = Location::new("f", "/home/me/project/src/module/file.rs", 10);
    assert_eq!(loc.file(), "module/file.rs");
}

#[test]
fn test_pkg_mod_marker_truncates_path() {
    let loc = Location::new("f", "/go/pkg/mod/dep@v1.2.3/file.rs", 10);
    assert_eq!(loc.file(), "dep@v1.2.3/file.rs");
}

#[test]
fn test_src_marker_takes_precedence() {
    let loc = Location::new("f", "/a/pkg/mod/x/src/file.rs", 1);
    assert_eq!(loc.file(), "file.rs");
}

#[test]
fn test_unmarked_absolute_path_unchanged() {
    let loc = Location::new("f", "/opt/app/main.rs", 3);
    assert_eq!(loc.file(), "/opt/app/main.rs");
}

#[test]
fn test_relative_path_unchanged() {
    let loc = Location::new("f", "project/src/file.rs", 3);
    assert_eq!(loc.file(), "project/src/file.rs");
}

#[test]
fn test_windows_drive_path_is_treated_absolute() {
    let loc = Location::new("f", r"C:/work/app/src/file.rs", 3);
    assert_eq!(loc.file(), "file.rs");
}

#[test]
fn test_marker_at_path_start_does_not_count() {
    let loc = Location::new("f", "/src/file.rs", 1);
    assert_eq!(loc.file(), "/src/file.rs");
}

#[test]
fn test_display_is_file_and_line() {
    let loc = Location::new("f", "a/b.rs", 7);
    assert_eq!(loc.to_string(), "a/b.rs:7");
}

#[test]
fn test_capture_far_past_stack_top_is_none() {
    assert!(Location::capture(10_000).is_none());
}

#[test]
fn test_capture_is_best_effort() {
    // With debug info present the captured frame is this test function;
    // without it, capture degrades to None rather than failing.
    if let Some(loc) = Location::capture(0) {
        assert!(!loc.file().is_empty());
        assert!(loc.line() > 0);
        assert!(!loc.function().is_empty());
    }
}

#[test]
fn test_new_and_define_location_policy() {
    // define never captures; new is best-effort.
    assert!(EnhancedError::define("s").location().is_none());

    let err = EnhancedError::new("e");
    if let Some(loc) = err.location() {
        assert!(!loc.file().is_empty());
    }
}

#[test]
fn test_without_location_clears_capture() {
    let err = EnhancedError::new("e").without_location();
    assert!(err.location().is_none());
    assert!(err.stack().is_none());
}
