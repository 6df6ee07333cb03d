use serde::{Deserialize, Serialize};

/// A node in the navigation tree.
///
/// `roles` lists the role tags allowed to see the item; an empty list
/// means every role. An item with a non-empty `children` list is a
/// submenu; whether it renders depends on what survives role filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable per-item identifier used for selection and lookup.
    pub index: String,
    pub title: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(
        index: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            index: index.into(),
            title: title.into(),
            icon: icon.into(),
            path: None,
            roles: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    /// Exact-string role membership; an empty role list admits everyone.
    pub fn allows_role(&self, role: &str) -> bool {
        self.roles.is_empty() || self.roles.iter().any(|r| r == role)
    }
}
