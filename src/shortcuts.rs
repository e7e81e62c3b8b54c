//! Keyboard shortcuts
//!
//! Maps a key press to a page action. Key names follow the browser
//! `KeyboardEvent.key` convention ("k", "?", "Escape").

/// One key press as reported by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
    /// A text input, textarea or editable element has focus.
    pub input_focused: bool,
}

impl<'a> KeyPress<'a> {
    pub fn new(key: &'a str) -> Self {
        Self { key, ..Self::default() }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn in_input(mut self) -> Self {
        self.input_focused = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    GlobalSearch,
    ShowHelp,
    CloseModals,
}

impl Shortcut {
    /// Whether the host should suppress the key's default action.
    pub fn prevents_default(self) -> bool {
        matches!(self, Shortcut::GlobalSearch | Shortcut::ShowHelp)
    }

    /// Notification text shown when the shortcut fires. Empty when silent.
    pub fn hint(self) -> &'static str {
        match self {
            Shortcut::GlobalSearch => "Global search: Ctrl+K",
            Shortcut::ShowHelp => "Press Ctrl+K for search, ? for help",
            Shortcut::CloseModals => "",
        }
    }
}

pub fn resolve_shortcut(press: &KeyPress<'_>) -> Option<Shortcut> {
    match press.key {
        "k" if press.ctrl || press.meta => Some(Shortcut::GlobalSearch),
        "?" if !press.input_focused => Some(Shortcut::ShowHelp),
        "Escape" => Some(Shortcut::CloseModals),
        _ => None,
    }
}
