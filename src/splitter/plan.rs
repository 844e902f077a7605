use std::ops::Range;

/// How a single oversized archive is cut into chunks
///
/// The chunk count is estimated from the input file's byte size, not from the serialized size of
/// each chunk, so real chunks can land well above or below the nominal target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    pub chunks: u64,
    pub per_chunk: usize,
    pub message_count: usize,
}

impl ChunkPlan {
    /// `chunks = size / target + 1`, `per_chunk = count / chunks + 1`
    ///
    /// A `target_chunk_bytes` of zero is treated as one byte.
    pub fn new(file_size: u64, message_count: usize, target_chunk_bytes: u64) -> Self {
        let chunks = file_size / target_chunk_bytes.max(1) + 1;
        let per_chunk = (message_count as u64 / chunks) as usize + 1;
        Self { chunks, per_chunk, message_count }
    }

    /// Contiguous message ranges, starting at 0 and advancing by `per_chunk`
    ///
    /// The last range may be shorter. An empty message list yields no ranges.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.message_count)
            .step_by(self.per_chunk)
            .map(|start| start..(start + self.per_chunk).min(self.message_count))
    }
}
