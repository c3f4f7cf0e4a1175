use serde::{Deserialize, Serialize};

/// Operating-system family tag.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TypeOs {
    pub value: i64,
    pub label: String,
}
