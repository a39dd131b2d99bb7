use serde::Serialize;
use tracing::info;

/// Ordered, append-only diagnostic log of a single resolution or validation.
///
/// Owned by the caller and passed down by `&mut`. Every entry is also emitted
/// as a `tracing` event so the same steps show up in process logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolutionTrace {
    entries: Vec<String>,
}

impl ResolutionTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!(target: "carbon_txt::trace", "{}", message);
        self.entries.push(message);
    }

    /// Appends entries produced elsewhere (e.g. by a document processor)
    /// without logging them a second time.
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.entries.extend(entries);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|entry| entry.contains(needle))
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}
