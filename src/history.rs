use crate::request::TransactionRequest;

/// Store of previously accepted requests, consulted for duplicate detection.
///
/// Callers needing concurrent access must serialize the contains-then-record
/// sequence themselves; the trait is deliberately synchronous.
pub trait TransactionHistory {
    fn contains(&self, request: &TransactionRequest) -> bool;
    fn record(&mut self, request: TransactionRequest);
}

/// Unbounded in-memory history. Entries are never evicted.
pub struct InMemoryHistory {
    requests: Vec<TransactionRequest>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self {
            requests: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionHistory for InMemoryHistory {
    fn contains(&self, request: &TransactionRequest) -> bool {
        self.requests.iter().any(|recorded| recorded == request)
    }

    fn record(&mut self, request: TransactionRequest) {
        self.requests.push(request);
    }
}
