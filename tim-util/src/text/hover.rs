use serde::{Deserialize, Serialize};

use super::TextComponent;

/// What the client shows while the cursor rests on a component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HoverEvent {
    ShowText { value: Box<TextComponent> },
}

impl HoverEvent {
    pub fn show_text(text: TextComponent) -> Self {
        Self::ShowText {
            value: Box::new(text),
        }
    }
}
