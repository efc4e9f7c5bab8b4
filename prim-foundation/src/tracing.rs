//! Tracing support for PRIM buffers
//!
//! Thin re-export of the `tracing` macros plus span helpers for buffer
//! operations. Only compiled with the `tracing` feature.

#![cfg(feature = "tracing")]

pub use tracing::{debug, error, info, trace, warn};
pub use tracing::{debug_span, info_span, span, trace_span, warn_span};
pub use tracing::{event, Level, Span};

/// Trace spans for buffer operations
#[derive(Debug, Clone)]
pub struct BufferTrace;

impl BufferTrace {
    /// Span for a whole-buffer zero fill
    #[inline]
    pub fn zeroing(len: usize, size_bytes: usize) -> Span {
        debug_span!("buffer_zero", len = %len, size_bytes = %size_bytes)
    }
}
