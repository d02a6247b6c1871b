//! TUI animation helpers (checkmark art).

/// Large checkmark ASCII art for the post-accepted screen.
pub(crate) const SUCCESS_CHECKMARK: &[&str] = &["    ██╗", "   ██╔╝", "  ██╔╝ ", "  ╚═╝  "];
