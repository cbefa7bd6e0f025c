//! Small async API surface exercised by the asynchronous template test.

/// Trivial suspendable task; resolves immediately with a fixed answer.
pub async fn answer() -> u64 {
    42
}
