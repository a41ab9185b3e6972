//! Object store parameters.

/// Default bound on how many references a single lookup may follow.
pub const DEFAULT_MAX_RESOLVE_DEPTH: usize = 32;

/// Parameters for an [`ObjectStore`](super::store::ObjectStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreParams {
    /// Maximum number of references followed while dereferencing one value.
    /// Longer chains are treated as unresolvable.
    pub max_resolve_depth: usize,

    /// Number of slots to allocate up front.
    pub initial_capacity: usize,
}

impl Default for StoreParams {
    fn default() -> Self {
        Self {
            max_resolve_depth: DEFAULT_MAX_RESOLVE_DEPTH,
            initial_capacity: 0,
        }
    }
}

impl StoreParams {
    /// Creates store parameters with the specified values.
    ///
    /// # Panics
    /// Panics if max_resolve_depth is zero.
    pub fn new(max_resolve_depth: usize, initial_capacity: usize) -> Self {
        assert!(
            max_resolve_depth > 0,
            "max_resolve_depth must allow at least one dereference"
        );
        Self {
            max_resolve_depth,
            initial_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = StoreParams::default();
        assert_eq!(params.max_resolve_depth, 32);
        assert_eq!(params.initial_capacity, 0);
    }

    #[test]
    #[should_panic(expected = "max_resolve_depth")]
    fn test_zero_depth_rejected() {
        StoreParams::new(0, 16);
    }
}
