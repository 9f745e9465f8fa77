//! # Rendering Module
//!
//! Pages are rendered through `outstanding` templates (see `templates.rs`).
//!
//! Layout calculations (card widths, padding, truncation) stay in Rust because they need
//! Unicode-aware widths. Templates pick styles and branch on the page state:
//! `loading`, `error`, `empty` or `ready`.
//!
//! Error pages never show the underlying error, only the static alert text. The cause is
//! already in the log.

use super::styles::{names, VOCAB_THEME};
use super::templates::{
    DETAIL_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, NOT_FOUND_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use outstanding::{render, render_with_color, ThemeChoice};
use serde::Serialize;
use serde_json::Number;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vocab::api::Page;
use vocab::model::{Notebook, NotebookPage};
use vocab::router::Route;
use vocab::views::ViewState;

pub const LINE_WIDTH: usize = 80;
/// Gap between word cards, on top of the two-space lead-in each card gets.
const CARD_GAP: usize = 2;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const LIST_ERROR: &str = "Failed to load vocabulary notebooks.";
pub const LIST_EMPTY_TITLE: &str = "No vocabulary notebooks found";
pub const LIST_EMPTY_HINT: &str = "Create your first vocabulary notebook to get started";
pub const DETAIL_ERROR: &str = "Failed to load vocabulary notebook details.";
pub const BACK_TO_NOTEBOOKS: &str = "Back to Notebooks";
pub const WORDS_HEADING: &str = "Words in this notebook";
pub const DETAIL_EMPTY: &str = "No words in this vocabulary notebook yet";

#[derive(Serialize)]
struct NotebookLine {
    name: String,
    padding: String,
    path: String,
}

#[derive(Serialize)]
struct ListData {
    title: &'static str,
    state: &'static str,
    notebooks: Vec<NotebookLine>,
    error_message: &'static str,
    loading_message: &'static str,
    empty_title: &'static str,
    empty_hint: &'static str,
}

#[derive(Serialize)]
struct WordCard {
    word: String,
    padding: String,
}

#[derive(Serialize)]
struct DetailData {
    title: &'static str,
    state: &'static str,
    notebook: String,
    badge: String,
    words_heading: &'static str,
    rows: Vec<Vec<WordCard>>,
    empty_words: &'static str,
    error_message: &'static str,
    loading_message: &'static str,
    back_label: &'static str,
    back_path: String,
}

#[derive(Serialize)]
struct NotFoundData {
    title: &'static str,
    message: String,
    back_label: &'static str,
    back_path: String,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders any page. `use_color: None` follows terminal detection.
pub fn render_page(page: &Page, use_color: Option<bool>) -> String {
    match page {
        Page::List(state) => render_list(state, use_color),
        Page::Detail { state, .. } => render_detail(state, use_color),
        Page::NotFound { path } => render_not_found(path, use_color),
    }
}

pub fn render_list(state: &ViewState<Vec<Notebook>>, use_color: Option<bool>) -> String {
    let (state_name, notebooks) = match state {
        ViewState::Loading => ("loading", vec![]),
        ViewState::Error(_) => ("error", vec![]),
        ViewState::Success(list) if list.is_empty() => ("empty", vec![]),
        ViewState::Success(list) => ("ready", notebook_lines(list)),
    };

    let data = ListData {
        title: Route::NotebookList.title(),
        state: state_name,
        notebooks,
        error_message: LIST_ERROR,
        loading_message: LOADING_MESSAGE,
        empty_title: LIST_EMPTY_TITLE,
        empty_hint: LIST_EMPTY_HINT,
    };
    render_template(LIST_TEMPLATE, &data, use_color)
}

pub fn render_detail(state: &ViewState<NotebookPage>, use_color: Option<bool>) -> String {
    let mut data = DetailData {
        title: Route::detail("").title(),
        state: "loading",
        notebook: String::new(),
        badge: String::new(),
        words_heading: WORDS_HEADING,
        rows: vec![],
        empty_words: DETAIL_EMPTY,
        error_message: DETAIL_ERROR,
        loading_message: LOADING_MESSAGE,
        back_label: BACK_TO_NOTEBOOKS,
        back_path: Route::NotebookList.path(),
    };

    match state {
        ViewState::Loading => {}
        ViewState::Error(_) => data.state = "error",
        ViewState::Success(page) => {
            data.notebook = page.notebook.name.clone();
            data.badge = word_count_badge(&page.details.word_count);
            if page.details.words.is_empty() {
                data.state = "empty";
            } else {
                data.state = "ready";
                data.rows = word_cards(&page.details.words, LINE_WIDTH);
            }
        }
    }
    render_template(DETAIL_TEMPLATE, &data, use_color)
}

pub fn render_not_found(path: &str, use_color: Option<bool>) -> String {
    let route = Route::NotFound {
        path: path.to_string(),
    };
    let data = NotFoundData {
        title: route.title(),
        message: format!("Nothing lives at {}", path),
        back_label: BACK_TO_NOTEBOOKS,
        back_path: Route::NotebookList.path(),
    };
    render_template(NOT_FOUND_TEMPLATE, &data, use_color)
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: Option<bool>) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };
    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
}

pub fn render_messages(messages: &[Message], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                },
            })
            .collect(),
    };
    render_template(MESSAGES_TEMPLATE, &data, use_color)
}

/// "1 word", "2 words", "0 words". Whole floats print without a fraction, so `2.0` is "2 words".
pub fn word_count_badge(count: &Number) -> String {
    let value = count.as_f64();
    let shown = match (count.as_i64(), count.as_u64(), value) {
        (Some(n), _, _) => n.to_string(),
        (None, Some(n), _) => n.to_string(),
        (None, None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{:.0}", f),
        _ => count.to_string(),
    };
    if value == Some(1.0) {
        format!("{} word", shown)
    } else {
        format!("{} words", shown)
    }
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: Option<bool>) -> String {
    let theme = ThemeChoice::from(&*VOCAB_THEME);
    let mut output = match use_color {
        Some(c) => render_with_color(template, data, theme, c),
        None => render(template, data, theme),
    }
    .unwrap_or_else(|e| format!("Render error: {}", e));

    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}

fn notebook_lines(notebooks: &[Notebook]) -> Vec<NotebookLine> {
    let name_width = notebooks
        .iter()
        .map(|nb| nb.name.width())
        .max()
        .unwrap_or(0)
        .min(LINE_WIDTH / 2);

    notebooks
        .iter()
        .map(|nb| {
            let name = truncate_to_width(&nb.name, name_width + 1);
            let padding = " ".repeat(name_width.saturating_sub(name.width()) + CARD_GAP);
            NotebookLine {
                name,
                padding,
                path: Route::detail(nb.id.clone()).path(),
            }
        })
        .collect()
}

/// Lays words out as equal-width cards, as many per row as fit in `line_width`.
fn word_cards(words: &[String], line_width: usize) -> Vec<Vec<WordCard>> {
    let max_card = line_width.saturating_sub(2).max(1);
    let card_width = words
        .iter()
        .map(|w| w.width())
        .max()
        .unwrap_or(0)
        .clamp(1, max_card);
    let per_row = (line_width / (card_width + 2 + CARD_GAP)).max(1);

    words
        .chunks(per_row)
        .map(|row| {
            let last = row.len() - 1;
            row.iter()
                .enumerate()
                .map(|(i, word)| {
                    let word = truncate_to_width(word, card_width + 1);
                    let padding = if i == last {
                        String::new()
                    } else {
                        " ".repeat(card_width.saturating_sub(word.width()) + CARD_GAP)
                    };
                    WordCard { word, padding }
                })
                .collect()
        })
        .collect()
}

/// Cuts `s` so that it fits in `max_width - 1` columns, marking the cut with an ellipsis.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() < max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(2);
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
