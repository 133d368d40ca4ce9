use serde::{Deserialize, Serialize};

/// Post-processing switches for [`gen_from_scratch`](crate::gen_from_scratch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScratchFlags {
    /// Drop every hyperedge contained in another surviving hyperedge.
    #[serde(default = "enabled")]
    pub make_simple: bool,
    /// Keep only the largest connected component of the intersection graph.
    #[serde(default = "enabled")]
    pub make_connected: bool,
}

impl Default for ScratchFlags {
    fn default() -> Self {
        Self {
            make_simple: true,
            make_connected: true,
        }
    }
}

impl ScratchFlags {
    /// Flags with every filter switched off.
    pub const fn raw() -> Self {
        Self {
            make_simple: false,
            make_connected: false,
        }
    }
}

/// Post-processing switches for [`gen_from_tree`](crate::gen_from_tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TreeFlags {
    /// Reduce the result to an antichain under strict inclusion.
    #[serde(default)]
    pub sperner: bool,
}

fn enabled() -> bool {
    true
}
