//! # CLI Templates
//!
//! Output templates live as stand-alone files in `templates/` and are embedded here as string
//! constants. They are minijinja templates rendered through `outstanding`.
//!
//! Whitespace is explicit: block tags trim the newline that follows them (`-%}`), so every
//! line break in the output comes from a content line. Layout math (column widths, padding)
//! is done in `render.rs`; templates only pick styles.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const NOT_FOUND_TEMPLATE: &str = include_str!("templates/not_found.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
