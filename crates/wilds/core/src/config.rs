/// Compile-time bounds for authored content structures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldConfig;

impl WorldConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of level-gated stages in one evolution chain.
    pub const MAX_CHAIN_STAGES: usize = 4;
    /// Maximum number of co-occurring forms within one chain stage.
    pub const MAX_STAGE_FORMS: usize = 4;
}
