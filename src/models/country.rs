use serde::Serialize;

/// Result of the highest-Gini lookup. `name` is `None` and `gini` is `-1`
/// when no country carries Gini data.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GiniLeader {
    pub name: Option<String>,
    pub gini: f64,
}

impl Default for GiniLeader {
    fn default() -> Self {
        Self { name: None, gini: -1.0 }
    }
}

pub type NameList = Vec<String>;
