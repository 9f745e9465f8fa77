//! Styles for the vocab CLI.
//!
//! Templates only use the semantic names in [`names`]; the theme maps them to actual
//! `console` styles. Everything is registered once through `once_cell::sync::Lazy`.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const PAGE_TITLE: &str = "page-title";
    pub const HEADING: &str = "heading";
    pub const NOTEBOOK: &str = "notebook";
    pub const LINK: &str = "link";
    pub const BADGE: &str = "badge";
    pub const WORD: &str = "word";
    pub const MUTED: &str = "muted";
    pub const ALERT: &str = "alert";
    pub const ALERT_LABEL: &str = "alert-label";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

pub static VOCAB_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(rgb_to_ansi256((140, 140, 140)));
    let accent = Style::new().color256(rgb_to_ansi256((59, 130, 246)));
    let alert = Style::new().color256(rgb_to_ansi256((185, 28, 28)));

    Theme::new()
        .add(names::PAGE_TITLE, Style::new().bold().underlined())
        .add(names::HEADING, Style::new().bold())
        .add(names::NOTEBOOK, Style::new().bold())
        .add(names::LINK, accent.clone().underlined())
        .add(names::BADGE, accent.reverse())
        .add(names::WORD, Style::new())
        .add(names::MUTED, muted.clone())
        .add(names::ALERT, alert.clone())
        .add(names::ALERT_LABEL, alert.bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
});
