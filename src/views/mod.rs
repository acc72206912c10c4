//! Views
//!
//! Rendering is deliberately thin: each view produces a short text summary
//! that the mount writes into the page.

pub mod help;

/// Identifies one of the app's screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Login,
    Students,
    Archive,
    Help,
}

impl ViewId {
    pub const ALL: [ViewId; 4] = [
        ViewId::Login,
        ViewId::Students,
        ViewId::Archive,
        ViewId::Help,
    ];

    /// Route name for this view.
    pub fn name(&self) -> &'static str {
        match self {
            ViewId::Login => "login",
            ViewId::Students => "students",
            ViewId::Archive => "archive",
            ViewId::Help => "help",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Login => "Sign in",
            ViewId::Students => "Students",
            ViewId::Archive => "Archive",
            ViewId::Help => "Help",
        }
    }
}

/// Record counts shown by the list views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub active: usize,
    pub deleted: usize,
}

/// Text content for `view`.
pub fn render(view: ViewId, counts: Counts) -> String {
    match view {
        ViewId::Login => format!("{}\nEnter your name to continue.", view.title()),
        ViewId::Students => format!("{}\n{} on roll", view.title(), plural(counts.active)),
        ViewId::Archive => format!("{}\n{} archived", view.title(), plural(counts.deleted)),
        ViewId::Help => format!("{}\n{}", view.title(), help::text()),
    }
}

fn plural(n: usize) -> String {
    if n == 1 {
        "1 student".to_string()
    } else {
        format!("{} students", n)
    }
}
