//! End-to-end tests for the display state model
//!
//! These drive the public API the way an escape-sequence interpreter and a
//! renderer would: write cells, scroll, resize, then read everything back
//! through the global coordinate space.

use std::time::SystemTime;

use vtgrid::{Attrs, Color, Display, DisplaySnapshot, Glyph};

/// Write a string into a live row starting at column 0
fn write_row(display: &mut Display, row: usize, text: &str) {
    for (col, c) in text.chars().enumerate() {
        display.set_glyph(col, row, Glyph::new(c));
    }
}

/// Write the top row and scroll it away, pushing one line toward history
fn push_line(display: &mut Display, text: &str) {
    write_row(display, 0, text);
    display.scroll_up(1);
}

// ============================================================================
// Dirty tracking
// ============================================================================

#[test]
fn test_write_then_reset_dirty() {
    let mut display = Display::new(24, 80);
    display.reset_changes();

    display.set_glyph(0, 0, Glyph::new('A'));

    assert!(display.global_row_dirty(0));
    for row in 1..24 {
        assert!(!display.global_row_dirty(row));
    }

    display.reset_changes();
    for row in 0..24 {
        assert!(!display.global_row_dirty(row));
    }
    let (glyph, _) = display.global_glyph(0, 0);
    assert_eq!(glyph.c, 'A');
}

#[test]
fn test_history_rows_stay_clean_forever() {
    let mut display = Display::with_history(4, 20, usize::MAX);
    for i in 0..10 {
        push_line(&mut display, &format!("line {}", i));
    }
    write_row(&mut display, 2, "busy");

    let hist = display.history_len();
    assert_eq!(hist, 10);
    for row in 0..hist {
        assert!(!display.global_row_dirty(row));
    }
    assert!(display.global_row_dirty(hist + 2));
}

// ============================================================================
// Batch writers
// ============================================================================

#[test]
fn test_batch_write_through_line_mut() {
    let mut display = Display::with_history(3, 10, usize::MAX);
    display.reset_changes();

    // An interpreter filling a row by hand stamps and marks it itself.
    let line = display.line_mut(1).unwrap();
    for (col, c) in "batch".chars().enumerate() {
        line.cells_mut()[col] = Glyph::new(c);
    }
    assert_eq!(line.last_modified(), SystemTime::UNIX_EPOCH);
    line.touch();
    display.mark_row_dirty(1);

    // The batch is visible through the global space with its stamp.
    let (glyph, stamp) = display.global_glyph(0, 1);
    assert_eq!(glyph.c, 'b');
    assert!(stamp > SystemTime::UNIX_EPOCH);
    assert!(display.global_row_dirty(1));
    assert!(!display.global_row_dirty(0));
    assert!(!display.global_row_dirty(2));

    // Retirement carries the hand-written line into history, stamp intact.
    display.scroll_up(2);
    assert_eq!(display.history_len(), 2);
    assert_eq!(display.history().get(1).unwrap().text(), "batch");
    let (glyph, stamp) = display.global_glyph(0, 1);
    assert_eq!(glyph.c, 'b');
    assert!(stamp > SystemTime::UNIX_EPOCH);
    assert!(!display.global_row_dirty(1));
}

// ============================================================================
// History capacity
// ============================================================================

#[test]
fn test_bounded_history_keeps_newest() {
    let mut display = Display::with_history(24, 80, 100);
    for i in 0..150 {
        push_line(&mut display, &format!("line {}", i));
    }

    assert_eq!(display.history_len(), 100);
    assert_eq!(display.total_len(), 124);
    // the first 50 lines were evicted, oldest first
    assert_eq!(display.history().get(0).unwrap().text(), "line 50");
    assert_eq!(display.history().get(99).unwrap().text(), "line 149");
}

#[test]
fn test_unbounded_history_keeps_everything() {
    let mut display = Display::with_history(4, 20, usize::MAX);
    for i in 0..500 {
        push_line(&mut display, &format!("{}", i));
    }
    assert_eq!(display.history_len(), 500);
    assert_eq!(display.history().get(0).unwrap().text(), "0");
}

#[test]
fn test_disabled_recording_archives_nothing() {
    let mut display = Display::new(4, 20);
    for i in 0..50 {
        push_line(&mut display, &format!("{}", i));
    }
    assert_eq!(display.history_len(), 0);
    assert_eq!(display.total_len(), 4);
    assert_eq!(display.global_size(), (4, 20));
}

// ============================================================================
// Global addressing
// ============================================================================

#[test]
fn test_global_space_spans_history_then_live() {
    let mut display = Display::with_history(4, 10, usize::MAX);
    push_line(&mut display, "one");
    push_line(&mut display, "two");
    push_line(&mut display, "three");
    write_row(&mut display, 0, "live");

    assert_eq!(display.global_size(), (7, 10));
    assert_eq!(display.total_len(), 7);

    // history region, oldest first
    assert_eq!(display.global_glyph(0, 0).0.c, 'o');
    assert_eq!(display.global_glyph(0, 1).0.c, 't');
    assert_eq!(display.global_glyph(0, 2).0.c, 't');

    // live region starts right after history
    assert_eq!(display.global_glyph(0, 3).0.c, 'l');

    // reads agree with direct region access everywhere
    for row in 0..3 {
        let direct = *display.history().get(row).unwrap().get(0).unwrap();
        assert_eq!(display.global_glyph(0, row).0, direct);
    }
    for row in 0..4 {
        let direct = *display.line(row).unwrap().get(0).unwrap();
        assert_eq!(display.global_glyph(0, 3 + row).0, direct);
    }
}

#[test]
fn test_global_glyph_carries_write_time() {
    let mut display = Display::with_history(2, 10, usize::MAX);
    push_line(&mut display, "aged");

    let (_, archived_stamp) = display.global_glyph(0, 0);
    assert!(archived_stamp > SystemTime::UNIX_EPOCH);

    // untouched live rows still report the epoch
    let (_, blank_stamp) = display.global_glyph(0, 2);
    assert_eq!(blank_stamp, SystemTime::UNIX_EPOCH);
}

#[test]
fn test_total_len_matches_history_plus_live() {
    let mut display = Display::with_history(6, 10, 8);
    assert_eq!(display.total_len(), display.history_len() + display.rows());
    for i in 0..20 {
        push_line(&mut display, &format!("{}", i));
        assert_eq!(display.total_len(), display.history_len() + display.rows());
    }
    display.resize(3, 10);
    assert_eq!(display.total_len(), display.history_len() + display.rows());
}

// ============================================================================
// Last content row
// ============================================================================

#[test]
fn test_last_non_blank_row_tracks_content() {
    let mut display = Display::with_history(4, 10, usize::MAX);
    assert_eq!(display.last_non_blank_row(), None);

    push_line(&mut display, "archived");
    assert_eq!(display.last_non_blank_row(), Some(0));

    write_row(&mut display, 2, "prompt");
    assert_eq!(display.last_non_blank_row(), Some(3));
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_resize_never_touches_history() {
    let mut display = Display::with_history(4, 10, usize::MAX);
    push_line(&mut display, "remember");
    write_row(&mut display, 0, "keep");

    display.resize(6, 40);

    assert_eq!(display.history_len(), 1);
    assert_eq!(display.history().get(0).unwrap().text(), "remember");
    assert_eq!(display.history().get(0).unwrap().len(), 10);
    assert_eq!(display.cols(), 40);
    assert_eq!(display.global_size(), (7, 40));
    assert!(display.is_dirty());
    // live content survived the reshape
    assert_eq!(display.global_glyph(0, 1).0.c, 'k');
}

// ============================================================================
// Renderer span merging
// ============================================================================

#[test]
fn test_wrap_marker_does_not_split_styled_runs() {
    let mut display = Display::new(1, 4);
    let style = Attrs::new(Attrs::BOLD);
    display.set_glyph(0, 0, Glyph::with_style('a', style, Color::RED, Color::DefaultBg));
    display.set_glyph(1, 0, Glyph::with_style('b', style, Color::RED, Color::DefaultBg));
    let mut wrapped = Glyph::with_style('c', style, Color::RED, Color::DefaultBg);
    wrapped.attrs.insert(Attrs::WRAP);
    display.set_glyph(2, 0, wrapped);
    display.set_glyph(
        3,
        0,
        Glyph::with_style('d', Attrs::empty(), Color::RED, Color::DefaultBg),
    );

    let first = display.global_glyph(0, 0).0;
    let spans = (1..4)
        .map(|col| display.global_glyph(col, 0).0)
        .fold(vec![first], |mut spans, glyph| {
            if !spans.last().map(|last| last.similar(&glyph)).unwrap_or(false) {
                spans.push(glyph);
            }
            spans
        });

    // a, b, c merge into one span; d starts another
    assert_eq!(spans.len(), 2);
}

// ============================================================================
// Snapshots
// ============================================================================

#[test]
fn test_snapshot_covers_global_space() {
    let mut display = Display::with_history(2, 10, usize::MAX);
    push_line(&mut display, "first");
    push_line(&mut display, "second");
    write_row(&mut display, 0, "third");

    let snapshot = DisplaySnapshot::from_display(&display);
    assert_eq!(snapshot.history_len, 2);
    assert_eq!(snapshot.lines.len(), 4);
    assert_eq!(snapshot.row_text(0), "first");
    assert_eq!(snapshot.row_text(1), "second");
    assert_eq!(snapshot.row_text(2), "third");

    let restored = DisplaySnapshot::from_json(&snapshot.to_json()).unwrap();
    assert_eq!(restored, snapshot);
}
