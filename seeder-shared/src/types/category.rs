use serde::Deserialize;

/// A row of `categories.csv`.
///
/// Categories are self-referential: `parent` names another category row by
/// its source key (or natural name). An empty `parent` cell marks a root
/// category, which must be created before any of its children.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub parent: Option<String>,
}

impl CategoryRecord {
    /// A root category has no parent reference.
    pub fn is_root(&self) -> bool {
        match &self.parent {
            None => true,
            Some(parent) => parent.is_empty(),
        }
    }
}
