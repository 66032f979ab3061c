//! Main-layout shapes: navigation menu entries, open tabs and the signed-in user

use serde::{Deserialize, Serialize};

/// An open page tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabItem {
    pub key: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closable: Option<bool>,
}

/// A node of the side navigation menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItem>>,
}

impl MenuItem {
    pub fn leaf(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            icon: None,
            label: label.into(),
            children: None,
        }
    }

    pub fn group(key: impl Into<String>, label: impl Into<String>, children: Vec<MenuItem>) -> Self {
        Self {
            key: key.into(),
            icon: None,
            label: label.into(),
            children: Some(children),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Depth-first search for an entry by key
    pub fn find(&self, key: &str) -> Option<&MenuItem> {
        if self.key == key {
            return Some(self);
        }
        self.children
            .iter()
            .flatten()
            .find_map(|child| child.find(key))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: String,
    pub department: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_find_nested() {
        let menu = MenuItem::group(
            "all-projects",
            "All Projects",
            vec![MenuItem::group(
                "declaration",
                "Declaration",
                vec![MenuItem::leaf("project-approval", "Approval")],
            )],
        );

        assert_eq!(menu.find("project-approval").map(|m| m.label.as_str()), Some("Approval"));
        assert!(menu.find("sms-settings").is_none());
    }

    #[test]
    fn test_leaf_omits_children() {
        let json = serde_json::to_value(MenuItem::leaf("geographic-map", "Map").with_icon("map")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "key": "geographic-map", "icon": "map", "label": "Map" })
        );
    }

    #[test]
    fn test_tab_item_closable_optional() {
        let tab: TabItem = serde_json::from_str(r#"{"key":"home","title":"Home"}"#).unwrap();
        assert_eq!(tab.closable, None);
    }
}
