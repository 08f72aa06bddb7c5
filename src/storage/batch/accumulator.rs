//! In-process buffer of operations collected since the last flush.

/// Ordered buffer of pending write operations.
///
/// Owned by the batch writer task alone, so it carries no synchronization.
#[derive(Debug)]
pub struct BatchAccumulator<Op> {
    ops: Vec<Op>,
}

impl<Op> BatchAccumulator<Op> {
    pub fn new() -> Self {
        BatchAccumulator { ops: Vec::new() }
    }

    /// Appends a submission's operations, keeping their order.
    pub fn append(&mut self, ops: Vec<Op>) {
        self.ops.extend(ops);
    }

    /// Number of accumulated operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Takes every accumulated operation and leaves the accumulator empty.
    pub fn drain(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }
}

impl<Op> Default for BatchAccumulator<Op> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order_across_submissions() {
        let mut acc = BatchAccumulator::new();
        acc.append(vec!["a1", "a2"]);
        acc.append(vec!["b1"]);
        acc.append(vec!["c1", "c2", "c3"]);
        assert_eq!(acc.len(), 6);
        assert_eq!(acc.drain(), vec!["a1", "a2", "b1", "c1", "c2", "c3"]);
    }

    #[test]
    fn test_empty_submission_is_noop() {
        let mut acc: BatchAccumulator<u32> = BatchAccumulator::new();
        acc.append(Vec::new());
        assert!(acc.is_empty());
        acc.append(vec![1]);
        acc.append(Vec::new());
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn test_drain_resets() {
        let mut acc = BatchAccumulator::new();
        acc.append(vec![1, 2, 3]);
        assert_eq!(acc.drain(), vec![1, 2, 3]);
        assert!(acc.is_empty());
        assert_eq!(acc.len(), 0);
        assert!(acc.drain().is_empty());
        acc.append(vec![4]);
        assert_eq!(acc.drain(), vec![4]);
    }
}
