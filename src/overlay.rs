//! Overlay visibility: a two-state machine plus what rendering needs from it.

use dioxus::logger::tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    WindowDragEnter,
    DragLeave,
    Drop,
}

impl Visibility {
    pub fn next(self, event: OverlayEvent) -> Visibility {
        let next = match event {
            OverlayEvent::WindowDragEnter => Visibility::Visible,
            OverlayEvent::DragLeave | OverlayEvent::Drop => Visibility::Hidden,
        };
        if next != self {
            debug!(from = ?self, to = ?next, ?event, "drop zone overlay transition");
        }
        next
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }

    /// Inline style applied to the overlay element.
    pub fn style(self) -> &'static str {
        match self {
            Visibility::Hidden => "display: none;",
            Visibility::Visible => "display: flex;",
        }
    }
}
