//! pim-core - point-offset text buffer for the pim editor
//!
//! This crate provides the in-memory buffer at the heart of a modal terminal
//! editor: a growable character store addressed by character offset, a derived
//! index of line-start offsets, and a single editing point ("the point", in
//! the Emacs sense) at which point-relative edits apply.
//!
//! The surrounding program (key decoding, mode switching, rendering) is a thin
//! consumer of this API: a controller calls [`TextBuffer::insert_at_point`] /
//! [`TextBuffer::delete_before_point`] on edit commands, and a renderer walks
//! [`TextBuffer::chars`] and reads [`TextBuffer::point`] on each redraw.
//!
//! # Example
//!
//! ```
//! use pim_core::TextBuffer;
//!
//! let mut buffer = TextBuffer::new();
//! buffer.insert_at_point("hello")?;
//! buffer.insert_line_break_at_point()?;
//! buffer.insert_at_point("world")?;
//!
//! assert_eq!(buffer.content(), "hello\nworld");
//! assert_eq!(buffer.line_count(), 2);
//! assert_eq!(buffer.point().line(), 1);
//! # Ok::<(), pim_core::BufferError>(())
//! ```

mod buffer;
mod error;
mod line_index;
mod point;

// Re-export commonly used types
pub use buffer::{Chars, Edit, TextBuffer};
pub use error::BufferError;
pub use point::Point;

/// The line-ending character stored in buffer content.
///
/// Line boundaries are derived solely from occurrences of this character;
/// it is fixed for the lifetime of the process.
pub const LINE_ENDING: char = '\n';
