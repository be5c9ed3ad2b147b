/// Default nesting limit for arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum nesting of arrays/objects before parsing fails
    /// (a top-level container is depth 1).
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
