//! Mapper configuration.

/// What happens to already-converted fields when a later field fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitPolicy {
    /// Convert every field first, assign only if all conversions succeed.
    /// Kind, index and conversion failures leave the target untouched; an
    /// `assign` hook that rejects a value fails mid-commit.
    #[default]
    Atomic,
    /// Assign each field as soon as it converts. A failed call leaves earlier
    /// fields mutated.
    Incremental,
}

/// Mapper configuration.
#[derive(Debug, Clone, Default)]
pub struct MapperConfig {
    /// Commit behavior on failure
    pub commit_policy: CommitPolicy,
}

impl MapperConfig {
    /// Configuration that assigns fields as they convert.
    pub fn incremental() -> Self {
        Self {
            commit_policy: CommitPolicy::Incremental,
        }
    }
}
