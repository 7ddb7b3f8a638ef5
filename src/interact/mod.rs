mod adapter;
mod dwell;
mod machine;

pub use adapter::{DEFAULT_DWELL, InputAdapter};
pub use machine::InteractionMachine;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    HoverEnter(String),
    HoverLeave(String),
    Activate(String),
    ActivateBackground,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    Selected(String),
    Deselected(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub changed: bool,
    pub selection: Option<SelectionEvent>,
}

// Invariant: `hovered` never equals `selected` while both are set; the
// machine clears or refuses the hover on the selected node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    selected: Option<String>,
    hovered: Option<String>,
}

impl InteractionState {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn is_idle(&self) -> bool {
        self.selected.is_none() && self.hovered.is_none()
    }

    pub fn focus(&self) -> Focus<'_> {
        match (self.selected.as_deref(), self.hovered.as_deref()) {
            (None, None) => Focus::Idle,
            (None, Some(hovered)) => Focus::Hovering { hovered },
            (Some(selected), None) => Focus::Selected { selected },
            (Some(selected), Some(hovered)) => Focus::SelectedAndHovering { selected, hovered },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus<'a> {
    Idle,
    Hovering { hovered: &'a str },
    Selected { selected: &'a str },
    SelectedAndHovering { selected: &'a str, hovered: &'a str },
}
