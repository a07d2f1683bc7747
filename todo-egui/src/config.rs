//! Widget Configuration
//!
//! Texts and layout settings for the widget. Every field has a default, so a
//! partial JSON document only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Presentation settings for [`TodoApp`](crate::TodoApp).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Heading above the input row
    pub title: String,
    /// Hint shown in the empty input field
    pub placeholder: String,
    /// Label of the commit button
    pub add_label: String,
    /// Shown instead of the list when there are no items
    pub empty_message: String,
    /// Hover title of the toggle control on an open item
    pub toggle_complete_title: String,
    /// Hover title of the toggle control on a completed item
    pub toggle_incomplete_title: String,
    /// Hover title of the delete control
    pub delete_title: String,
    /// Maximum width of the widget column in points
    pub max_width: f32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "Todo List".to_owned(),
            placeholder: "Enter a new task".to_owned(),
            add_label: "Add".to_owned(),
            empty_message: "No tasks yet. Add a new task above!".to_owned(),
            toggle_complete_title: "Mark as complete".to_owned(),
            toggle_incomplete_title: "Mark as incomplete".to_owned(),
            delete_title: "Delete task".to_owned(),
            max_width: 448.0,
        }
    }
}

impl WidgetConfig {
    /// Parse a config from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = WidgetConfig::from_json(r#"{"title":"Groceries","max_width":300}"#).unwrap();

        assert_eq!(config.title, "Groceries");
        assert_eq!(config.max_width, 300.0);
        assert_eq!(config.placeholder, WidgetConfig::default().placeholder);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(WidgetConfig::from_json("{}").unwrap(), WidgetConfig::default());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = WidgetConfig::from_json("{title:").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
