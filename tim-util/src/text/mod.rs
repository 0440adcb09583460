use std::borrow::Cow;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use color::NamedColor;
use hover::HoverEvent;

pub mod color;
pub mod hover;

/// A chat message, serialized the way clients expect chat JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextComponent {
    pub text: Cow<'static, str>,
    #[serde(flatten)]
    pub style: Style,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<TextComponent>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<NamedColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_event: Option<HoverEvent>,
}

impl TextComponent {
    pub fn text<P: Into<Cow<'static, str>>>(plain: P) -> Self {
        Self {
            text: plain.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn color_named(mut self, color: NamedColor) -> Self {
        self.style.color = Some(color);
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.style.bold = Some(true);
        self
    }

    #[must_use]
    pub fn hover_event(mut self, hover_event: HoverEvent) -> Self {
        self.style.hover_event = Some(hover_event);
        self
    }

    #[must_use]
    pub fn add_child(mut self, child: TextComponent) -> Self {
        self.extra.push(child);
        self
    }

    /// Plain text of this component and its children, without styling.
    pub fn get_text(&self) -> String {
        let mut text = self.text.to_string();
        for child in &self.extra {
            text.push_str(&child.get_text());
        }
        text
    }

    /// Renders with ANSI colors for a terminal. Hover events have no console form.
    pub fn to_pretty_console(&self) -> String {
        let mut text = self.text.as_ref().normal();
        if let Some(color) = self.style.color {
            text = text.color(color);
        }
        if self.style.bold == Some(true) {
            text = text.bold();
        }
        let mut rendered = text.to_string();
        for child in &self.extra {
            rendered.push_str(&child.to_pretty_console());
        }
        rendered
    }
}

impl From<&'static str> for TextComponent {
    fn from(value: &'static str) -> Self {
        Self::text(value)
    }
}

impl From<String> for TextComponent {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}
