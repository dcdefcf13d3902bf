use crossbeam_channel::unbounded;
use pdfmill::engine::{ProgressCounter, is_eligible, output_path_for, path_relative_to, should_tick};
use pdfmill::pipeline::{WalkOutcome, run_walk_loop};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

// --- path_relative_to ---

#[test]
fn test_path_relative_under_base() {
    let base = PathBuf::from("/foo/bar");
    let path = PathBuf::from("/foo/bar/baz/qux.html");
    assert_eq!(
        path_relative_to(&path, &base),
        Some(PathBuf::from("baz/qux.html"))
    );
}

#[test]
fn test_path_relative_not_under_base() {
    let base = PathBuf::from("/foo/bar");
    let path = PathBuf::from("/other/qux.html");
    assert_eq!(path_relative_to(&path, &base), None);
}

#[test]
fn test_path_relative_path_equals_base() {
    let base = PathBuf::from("/foo/bar");
    let path = PathBuf::from("/foo/bar");
    assert_eq!(path_relative_to(&path, &base), Some(PathBuf::new()));
}

// --- is_eligible ---

#[test]
fn test_eligible_plain_html_file() {
    assert!(is_eligible(Path::new("/src/a.html"), false, "html"));
    assert!(is_eligible(Path::new("/src/x/c.html"), false, "html"));
}

#[test]
fn test_eligible_rejects_directories() {
    assert!(!is_eligible(Path::new("/src/a.html"), true, "html"));
    assert!(!is_eligible(Path::new("/src/x"), true, "html"));
}

#[test]
fn test_eligible_rejects_hidden_files() {
    assert!(!is_eligible(Path::new("/src/.hidden.html"), false, "html"));
    assert!(!is_eligible(Path::new("/src/x/.c.html"), false, "html"));
}

#[test]
fn test_eligible_rejects_wrong_suffix() {
    assert!(!is_eligible(Path::new("/src/notes.txt"), false, "html"));
    assert!(!is_eligible(Path::new("/src/a.htm"), false, "html"));
    assert!(!is_eligible(Path::new("/src/a"), false, "html"));
}

#[test]
fn test_eligible_hidden_parent_does_not_hide_child() {
    // Only the entry's own name is checked; the walk visits whatever the
    // filesystem exposes under the root.
    assert!(is_eligible(Path::new("/src/.git/a.html"), false, "html"));
}

// --- output_path_for ---

#[test]
fn test_output_path_swaps_suffix() {
    let dest = PathBuf::from("/dest");
    assert_eq!(
        output_path_for(&dest, Path::new("a.html"), "pdf"),
        PathBuf::from("/dest/a.pdf")
    );
}

#[test]
fn test_output_path_preserves_subtree() {
    let dest = PathBuf::from("/dest");
    assert_eq!(
        output_path_for(&dest, Path::new("x/c.html"), "pdf"),
        PathBuf::from("/dest/x/c.pdf")
    );
}

#[test]
fn test_output_path_is_deterministic() {
    let dest = PathBuf::from("/dest");
    let input = Path::new("x/y/report.min.html");
    let first = output_path_for(&dest, input, "pdf");
    let second = output_path_for(&dest, input, "pdf");
    assert_eq!(first, second);
    assert_eq!(first, PathBuf::from("/dest/x/y/report.min.pdf"));
}

// --- should_tick ---

#[test]
fn test_should_tick_on_boundary() {
    assert!(should_tick(250, 250));
    assert!(should_tick(500, 250));
    assert!(should_tick(1, 1));
}

#[test]
fn test_should_tick_off_boundary() {
    assert!(!should_tick(1, 250));
    assert!(!should_tick(249, 250));
    assert!(!should_tick(251, 250));
}

#[test]
fn test_should_tick_zero_interval_disables() {
    assert!(!should_tick(0, 0));
    assert!(!should_tick(250, 0));
}

// --- ProgressCounter ---

#[test]
fn test_counter_monotonic_from_zero() {
    let counter = ProgressCounter::new();
    assert_eq!(counter.total(), 0);
    assert_eq!(counter.increment(), 1);
    assert_eq!(counter.increment(), 2);
    assert_eq!(counter.total(), 2);
}

#[test]
fn test_counter_no_lost_updates_under_concurrency() {
    let counter = Arc::new(ProgressCounter::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let counter = Arc::clone(&counter);
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    counter.increment();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(counter.total(), 8000);
}

// --- run_walk_loop ---

fn ok(path: &str, is_dir: bool) -> WalkOutcome {
    WalkOutcome::Ok {
        path: PathBuf::from(path),
        is_dir,
    }
}

#[test]
fn test_walk_loop_filters_and_relativizes() {
    let (tx, rx) = unbounded();
    let first_error = Arc::new(Mutex::new(None));
    let outcomes = vec![
        ok("/src", true),
        ok("/src/a.html", false),
        ok("/src/.hidden.html", false),
        ok("/src/notes.txt", false),
        ok("/src/x", true),
        ok("/src/x/c.html", false),
    ];
    let count = run_walk_loop(tx, Path::new("/src"), &first_error, outcomes.into_iter());
    assert_eq!(count, 2);
    let got: Vec<PathBuf> = rx.iter().collect();
    assert_eq!(got, vec![PathBuf::from("a.html"), PathBuf::from("x/c.html")]);
    assert!(first_error.lock().unwrap().is_none());
}

#[test]
fn test_walk_loop_error_is_fatal_but_keeps_emitted_paths() {
    let (tx, rx) = unbounded();
    let first_error = Arc::new(Mutex::new(None));
    let outcomes = vec![
        ok("/src/a.html", false),
        WalkOutcome::Err {
            msg: "permission denied".into(),
            path: Some(PathBuf::from("/src/locked")),
        },
        ok("/src/b.html", false),
    ];
    let count = run_walk_loop(tx, Path::new("/src"), &first_error, outcomes.into_iter());
    assert_eq!(count, 1, "the walk stops at the error");
    let got: Vec<PathBuf> = rx.iter().collect();
    assert_eq!(got, vec![PathBuf::from("a.html")]);

    let err = first_error
        .lock()
        .unwrap()
        .take()
        .expect("walk error recorded");
    let msg = err.to_string();
    assert!(msg.contains("permission denied"), "got: {msg}");
    assert!(msg.contains("locked"), "got: {msg}");
}

#[test]
fn test_walk_loop_keeps_first_error_only() {
    let (tx, _rx) = unbounded();
    let first_error = Arc::new(Mutex::new(None));
    let outcomes = vec![WalkOutcome::Err {
        msg: "vanished".into(),
        path: None,
    }];
    run_walk_loop(tx, Path::new("/src"), &first_error, outcomes.into_iter());
    let msg = first_error.lock().unwrap().take().unwrap().to_string();
    assert!(msg.contains("vanished"), "got: {msg}");
}
