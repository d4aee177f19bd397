//! Style derivation for the design-system components.
//!
//! Every function here is a pure mapping from props and the resolved
//! [`ColorScheme`] to a space-separated class string. Components hold no
//! state of their own.

mod badge;
mod button;
mod card;
mod checkbox;
mod input_text;
mod progress_bar;
mod select;
mod stat_card;
mod table;
mod toggle;

pub use badge::{badge_classes, BadgeVariant};
pub use button::{button_classes, ButtonState, ButtonVariant};
pub use card::CardClasses;
pub use checkbox::CheckboxClasses;
pub use input_text::{InputTextClasses, InputVariant};
pub use progress_bar::{clamp_percent, progress_track_classes};
pub use select::{SelectClasses, SelectOption};
pub use stat_card::StatCardClasses;
pub use table::TableClasses;
pub use toggle::ToggleClasses;

use crate::theme::ColorScheme;

/// Label wrapper shared by checkbox and toggle.
pub(crate) fn choice_wrapper_classes(disabled: bool) -> &'static str {
    if disabled {
        "inline-flex items-center gap-2 cursor-not-allowed opacity-50"
    } else {
        "inline-flex items-center gap-2 cursor-pointer"
    }
}

/// Label text shared by checkbox and toggle.
pub(crate) fn choice_label_classes(scheme: ColorScheme) -> &'static str {
    if scheme.is_dark() {
        "text-sm text-slate-300"
    } else {
        "text-sm text-slate-700"
    }
}

/// Joins class fragments, skipping empty ones.
pub(crate) fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_classes_skips_empty_fragments() {
        assert_eq!(join_classes(&["p-6", "", " border "]), "p-6 border");
        assert_eq!(join_classes(&[]), "");
    }

    #[test]
    fn choice_wrapper_reflects_disabled_flag() {
        assert!(choice_wrapper_classes(true).contains("cursor-not-allowed"));
        assert!(choice_wrapper_classes(false).contains("cursor-pointer"));
    }
}
