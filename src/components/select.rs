use serde::Serialize;

use crate::theme::ColorScheme;

const SELECT_BASE: &str = "w-full appearance-none rounded px-3 py-2 pr-10 text-sm outline-none transition-all focus:ring-2 focus:border-transparent cursor-pointer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectClasses {
    pub scheme: ColorScheme,
}

impl SelectClasses {
    pub fn label(&self) -> &'static str {
        if self.scheme.is_dark() {
            "text-sm font-medium text-slate-300"
        } else {
            "text-sm font-medium text-slate-700"
        }
    }

    pub fn select(&self) -> String {
        let tone = if self.scheme.is_dark() {
            "bg-background-dark border border-border-dark text-white focus:ring-primary"
        } else {
            "bg-slate-50 border border-slate-300 text-slate-900 focus:ring-primary"
        };
        format!("{SELECT_BASE} {tone}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_keeps_room_for_chevron() {
        let classes = SelectClasses {
            scheme: ColorScheme::Light,
        };
        assert!(classes.select().contains("pr-10"));
        assert!(classes.select().contains("bg-slate-50"));
    }

    #[test]
    fn dark_select_uses_dark_surface() {
        let classes = SelectClasses {
            scheme: ColorScheme::Dark,
        };
        assert!(classes.select().ends_with("text-white focus:ring-primary"));
        assert_eq!(classes.label(), "text-sm font-medium text-slate-300");
    }
}
