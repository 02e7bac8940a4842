use serde::{Deserialize, Serialize};

/// A user-defined category, unique by `id`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}
