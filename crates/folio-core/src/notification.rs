//! Notification kinds, their styling, and the single-slot lifecycle.
//!
//! Only one banner is ever on screen. [`NotificationSlot`] tracks which one
//! that is and hands out generation ids, so a timer scheduled for an evicted
//! banner can recognize itself as stale and do nothing.

/// Anything that can put a transient message in front of the user.
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotificationKind);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

/// Background, text and accent-border colors for one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    /// Font Awesome glyph name shown before the message.
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "exclamation-circle",
            NotificationKind::Info => "info-circle",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            NotificationKind::Success => Palette {
                background: "#d4edda",
                text: "#155724",
                accent: "#28a745",
            },
            NotificationKind::Error => Palette {
                background: "#f8d7da",
                text: "#721c24",
                accent: "#dc3545",
            },
            NotificationKind::Info => Palette {
                background: "#d1ecf1",
                text: "#0c5460",
                accent: "#17a2b8",
            },
        }
    }

    /// Class list for the banner root, e.g. `notification notification-error`.
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    /// Color declarations appended to the banner's base style.
    pub fn color_css(self) -> String {
        let p = self.palette();
        format!(
            "background: {}; color: {}; border-left: 4px solid {};",
            p.background, p.text, p.accent
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Mounted off-screen, waiting for the slide-in.
    Entering,
    Shown,
    /// Sliding out; detached once the transition finishes.
    Leaving,
}

#[derive(Debug)]
struct Active {
    id: NotificationId,
    notification: Notification,
    phase: Phase,
}

#[derive(Debug, Default)]
pub struct NotificationSlot {
    next_id: u64,
    active: Option<Active>,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the slot for a new banner. Returns its id and the id of the banner
    /// it evicted, which must be removed right away.
    pub fn show(&mut self, notification: Notification) -> (NotificationId, Option<NotificationId>) {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        let evicted = self.active.replace(Active {
            id,
            notification,
            phase: Phase::Entering,
        });
        (id, evicted.map(|a| a.id))
    }

    /// Slide-in timer fired. False when `id` is stale or already past entering.
    pub fn entered(&mut self, id: NotificationId) -> bool {
        match self.active_mut(id) {
            Some(a) if a.phase == Phase::Entering => {
                a.phase = Phase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Start the slide-out. False when `id` is stale or already leaving.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.active_mut(id) {
            Some(a) if a.phase != Phase::Leaving => {
                a.phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Slide-out finished; frees the slot if `id` still owns it.
    pub fn detached(&mut self, id: NotificationId) -> bool {
        if self.active_mut(id).is_some_and(|a| a.phase == Phase::Leaving) {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.active.as_ref().map(|a| &a.notification)
    }

    pub fn phase(&self) -> Option<Phase> {
        self.active.as_ref().map(|a| a.phase)
    }

    fn active_mut(&mut self, id: NotificationId) -> Option<&mut Active> {
        self.active.as_mut().filter(|a| a.id == id)
    }
}
