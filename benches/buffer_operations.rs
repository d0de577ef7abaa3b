//! Benchmarks for buffer edit and lookup operations
//!
//! Run with: cargo bench buffer_operations

use pim_core::TextBuffer;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn buffer_with_lines(lines: usize) -> TextBuffer {
    let mut buffer = TextBuffer::new();
    buffer.insert(0, &"foo bar baz\n".repeat(lines)).unwrap();
    buffer
}

// ============================================================================
// Insert operations
// ============================================================================

#[divan::bench]
fn insert_middle_10k_lines() {
    let mut buffer = buffer_with_lines(10_000);
    let pos = buffer.len() / 2;
    buffer.insert(pos, divan::black_box("inserted text\n")).unwrap();
}

#[divan::bench]
fn insert_start_10k_lines() {
    let mut buffer = buffer_with_lines(10_000);
    buffer.insert(0, divan::black_box("inserted text\n")).unwrap();
}

#[divan::bench]
fn insert_end_10k_lines() {
    let mut buffer = buffer_with_lines(10_000);
    let pos = buffer.len();
    buffer.insert(pos, divan::black_box("inserted text\n")).unwrap();
}

// ============================================================================
// Delete operations
// ============================================================================

#[divan::bench]
fn delete_middle_10k_lines() {
    let mut buffer = buffer_with_lines(10_000);
    let end = buffer.len() / 2 + 100;
    buffer.delete(end, 100).unwrap();
}

#[divan::bench]
fn delete_across_line_endings() {
    let mut buffer = buffer_with_lines(10_000);
    // 10 whole lines from the middle
    buffer.delete(buffer.len() / 2, 120).unwrap();
}

// ============================================================================
// Line lookup (binary search over the line index)
// ============================================================================

#[divan::bench(args = [100, 10_000, 119_990])]
fn line_at(offset: usize) {
    let buffer = buffer_with_lines(10_000);
    divan::black_box(buffer.line_at(offset));
}

#[divan::bench(args = [100, 1000, 10_000])]
fn full_content_iteration(lines: usize) {
    let buffer = buffer_with_lines(lines);
    for ch in buffer.chars() {
        divan::black_box(ch);
    }
}
