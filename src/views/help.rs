//! Help view content, only built once the `/help` route is first loaded.

use std::cell::OnceCell;

const SECTIONS: &[(&str, &str)] = &[
    ("Students", "Add students to the roll from the students page."),
    (
        "Archiving",
        "Deleting a student moves them to the archive; restore them from there.",
    ),
    ("Storage", "Records are kept in this browser only."),
];

thread_local! {
    static TEXT: OnceCell<String> = const { OnceCell::new() };
}

/// Help text, assembled on first call.
pub fn text() -> String {
    TEXT.with(|cell| cell.get_or_init(build).clone())
}

/// Build the help text if it has not been built yet.
pub fn load() {
    TEXT.with(|cell| {
        cell.get_or_init(build);
    });
}

/// Whether the help text has been built yet.
pub fn is_loaded() -> bool {
    TEXT.with(|cell| cell.get().is_some())
}

fn build() -> String {
    log::info!("Loading help content");
    SECTIONS
        .iter()
        .map(|(heading, body)| format!("{}: {}", heading, body))
        .collect::<Vec<_>>()
        .join("\n")
}
