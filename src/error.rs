use thiserror::Error;

/// Errors raised when constructing or driving a generator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Fewer seed words were supplied than the algorithm consumes.
    #[error("{algorithm} requires {required} seed words, got {supplied}")]
    InsufficientSeeds {
        /// Algorithm being seeded.
        algorithm: &'static str,
        /// Seed words the algorithm consumes.
        required: usize,
        /// Seed words supplied by the caller.
        supplied: usize,
    },

    /// The algorithm has no jump function.
    #[error("{algorithm} has no jump function, select a stream increment instead")]
    JumpUnsupported {
        /// Algorithm asked to jump.
        algorithm: &'static str,
    },

    /// An algorithm tag did not name any generator.
    #[error("unknown algorithm tag")]
    UnknownAlgorithm,
}

/// Copies the first `N` words of `seeds`, failing if there are fewer.
pub(crate) fn seed_words<const N: usize>(algorithm: &'static str, seeds: &[u64]) -> Result<[u64; N], GeneratorError> {
    if seeds.len() < N {
        return Err(GeneratorError::InsufficientSeeds { algorithm, required: N, supplied: seeds.len() });
    }
    if seeds.len() > N {
        tracing::debug!(algorithm, required = N, supplied = seeds.len(), "ignoring surplus seed words");
    }
    let mut words = [0u64; N];
    words.copy_from_slice(&seeds[.. N]);
    Ok(words)
}
