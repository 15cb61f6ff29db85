use thiserror::Error;

/// Errors raised while decoding a conversation snapshot.
///
/// Decoding is the only fallible surface of the contract crate; once a
/// snapshot decodes, every downstream consumer is total.
#[derive(Debug, Error)]
pub enum StreamDecodeError {
    #[error("failed to parse snapshot JSON: {source}")]
    Snapshot {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse message JSON at line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
