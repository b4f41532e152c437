//! Chunk-stream access for operation results.

use llm::{Generation, TextStream};

/// Access to a result's lazy chunk stream.
///
/// The execution loop uses this seam to drain streaming results without
/// knowing their concrete type. Results of non-streaming operations simply
/// return `None`.
pub trait Streamed {
    /// Take the chunk stream, if the result carries an undrained one.
    fn take_chunks(&mut self) -> Option<TextStream>;
}

impl Streamed for Generation {
    fn take_chunks(&mut self) -> Option<TextStream> {
        self.take_stream()
    }
}
