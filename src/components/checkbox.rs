use crate::theme::ColorScheme;

use super::{choice_label_classes, choice_wrapper_classes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxClasses {
    pub scheme: ColorScheme,
    pub disabled: bool,
}

impl CheckboxClasses {
    pub fn wrapper(&self) -> &'static str {
        choice_wrapper_classes(self.disabled)
    }

    pub fn checkbox(&self) -> &'static str {
        if self.scheme.is_dark() {
            "w-4 h-4 rounded border-border-dark bg-background-dark text-primary focus:ring-primary focus:ring-offset-background-dark cursor-pointer"
        } else {
            "w-4 h-4 rounded border-slate-300 bg-white text-primary focus:ring-primary cursor-pointer"
        }
    }

    pub fn label(&self) -> &'static str {
        choice_label_classes(self.scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_checkbox_offsets_focus_ring() {
        let classes = CheckboxClasses {
            scheme: ColorScheme::Dark,
            disabled: false,
        };
        assert!(classes
            .checkbox()
            .contains("focus:ring-offset-background-dark"));
        assert_eq!(classes.label(), "text-sm text-slate-300");
    }

    #[test]
    fn disabled_checkbox_dims_wrapper() {
        let classes = CheckboxClasses {
            scheme: ColorScheme::Light,
            disabled: true,
        };
        assert!(classes.wrapper().ends_with("opacity-50"));
        assert_eq!(classes.label(), "text-sm text-slate-700");
    }
}
