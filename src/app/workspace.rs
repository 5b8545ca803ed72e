//! Workspace - Main Shell and Layout
//!
//! The workspace is the root view holding the header bar and the content
//! area. The content area currently mounts the Dummy placeholder.

use gpui::{
    div, prelude::*, px, Context, IntoElement, ParentElement, Render, SharedString, Styled, Window,
};

use crate::components::dummy::Dummy;
use crate::theme::colors::ClientColors;
use crate::theme::typography::Typography;

/// Root view containing the application layout
pub struct Workspace {
    title: SharedString,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            title: SharedString::from("Client"),
        }
    }

    /// Render the header bar with the application title
    fn render_header(&self) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .h(px(40.0))
            .px(px(16.0))
            .bg(ClientColors::header_bg())
            .border_b_1()
            .border_color(ClientColors::border())
            .text_color(ClientColors::text_header())
            .text_size(px(Typography::TEXT_SM))
            .child(self.title.clone())
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(ClientColors::background())
            .child(self.render_header())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .justify_center()
                    .bg(ClientColors::content_bg())
                    .child(Dummy::new()),
            )
    }
}
