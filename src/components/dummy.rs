//! Dummy Component
//!
//! Placeholder shown in the content area until real pages land. Renders a
//! fixed greeting as its only text node.

use gpui::{
    div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
};

use crate::theme::colors::ClientColors;
use crate::theme::typography::Typography;

const GREETING: &str = "Hello world";

/// A placeholder component that renders a fixed greeting
#[derive(IntoElement)]
pub struct Dummy {
    greeting: SharedString,
}

impl Dummy {
    /// Create a new placeholder
    pub fn new() -> Self {
        Self {
            greeting: SharedString::from(GREETING),
        }
    }

    /// The text content this component renders as its single text node
    pub fn text(&self) -> &SharedString {
        &self.greeting
    }
}

impl Default for Dummy {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Dummy {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(Typography::TEXT_LG))
            .text_color(ClientColors::text_primary())
            .child(self.greeting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::contains_text;

    #[test]
    fn renders_hello_world_as_text() {
        let dummy = Dummy::new();
        assert!(contains_text(dummy.text(), "Hello world"));
    }

    #[test]
    fn query_is_case_insensitive_and_accepts_substrings() {
        let dummy = Dummy::new();
        assert!(contains_text(dummy.text(), "hello"));
        assert!(contains_text(dummy.text(), "WORLD"));
    }

    #[test]
    fn changed_copy_would_not_satisfy_the_query() {
        assert!(!contains_text("Goodbye world", "Hello world"));
    }

    #[test]
    fn repeated_mounts_render_the_same_text() {
        let first = Dummy::new();
        let second = Dummy::new();
        assert_eq!(first.text(), second.text());
        assert!(contains_text(second.text(), "Hello world"));
    }
}
