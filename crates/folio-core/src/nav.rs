/// Input the mobile menu reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuInput<'a> {
    ToggleClicked,
    LinkClicked,
    /// Key pressed anywhere in the document.
    DocumentKey(&'a str),
    /// Key pressed while the toggle control has focus.
    ToggleKey(&'a str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEffect {
    None,
    /// Open state changed; re-sync the menu and toggle classes.
    Changed,
    /// Treat the key press as a click on the toggle.
    ActivateToggle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn handle(&mut self, input: MenuInput<'_>) -> MenuEffect {
        match input {
            MenuInput::ToggleClicked => {
                self.open = !self.open;
                MenuEffect::Changed
            }
            MenuInput::LinkClicked => self.close(),
            MenuInput::DocumentKey("Escape") => self.close(),
            MenuInput::ToggleKey("Enter" | " ") => MenuEffect::ActivateToggle,
            MenuInput::DocumentKey(_) | MenuInput::ToggleKey(_) => MenuEffect::None,
        }
    }

    fn close(&mut self) -> MenuEffect {
        if self.open {
            self.open = false;
            MenuEffect::Changed
        } else {
            MenuEffect::None
        }
    }
}

/// Section id an in-page link points at: `"#about"` gives `"about"`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
