use crate::theme::ColorScheme;

use super::join_classes;

/// Classes for the content card: icon header, title, description and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardClasses {
    scheme: ColorScheme,
    clickable: bool,
}

impl CardClasses {
    /// Cards are clickable unless told otherwise.
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            clickable: true,
        }
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn card(&self) -> String {
        let cursor = if self.clickable { "cursor-pointer" } else { "" };
        let surface = if self.scheme.is_dark() {
            "bg-surface-dark border-border-dark shadow-lg hover:border-primary/50"
        } else {
            "bg-white border-border-light shadow-sm hover:shadow-md hover:border-primary/50"
        };
        join_classes(&["p-6 rounded-xl border transition-all group", cursor, surface])
    }

    pub fn icon_wrapper(&self) -> &'static str {
        if self.scheme.is_dark() {
            "w-10 h-10 rounded-lg bg-primary/20 flex items-center justify-center text-primary"
        } else {
            "w-10 h-10 rounded-lg bg-blue-50 flex items-center justify-center text-primary"
        }
    }

    pub fn title(&self) -> &'static str {
        if self.scheme.is_dark() {
            "text-base font-bold text-white mb-1 group-hover:text-primary transition-colors"
        } else {
            "text-base font-bold text-slate-900 mb-1 group-hover:text-primary transition-colors"
        }
    }

    pub fn description(&self) -> &'static str {
        if self.scheme.is_dark() {
            "text-sm text-slate-400 mb-4"
        } else {
            "text-sm text-slate-500 mb-4"
        }
    }

    pub fn footer(&self) -> &'static str {
        if self.scheme.is_dark() {
            "flex items-center gap-4 text-xs text-slate-500 border-t border-border-dark pt-4"
        } else {
            "flex items-center gap-4 text-xs text-slate-500 border-t border-border-light pt-4"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clickable_card_gets_pointer_cursor() {
        let card = CardClasses::new(ColorScheme::Light).card();
        assert!(card.contains("cursor-pointer"));
        assert!(card.contains("hover:shadow-md"));
    }

    #[test]
    fn static_card_has_no_cursor_or_double_spaces() {
        let card = CardClasses::new(ColorScheme::Dark).clickable(false).card();
        assert!(!card.contains("cursor-pointer"));
        assert!(!card.contains("  "));
        assert!(card.contains("bg-surface-dark"));
    }

    #[test]
    fn footer_border_follows_scheme() {
        assert!(CardClasses::new(ColorScheme::Dark)
            .footer()
            .contains("border-border-dark"));
        assert!(CardClasses::new(ColorScheme::Light)
            .footer()
            .contains("border-border-light"));
    }
}
