use crate::theme::ColorScheme;

use super::{choice_label_classes, choice_wrapper_classes};

const TRACK_SHARED: [&str; 16] = [
    "peer-focus:outline-none",
    "peer-checked:bg-primary",
    "relative",
    "after:content-['']",
    "after:absolute",
    "after:top-[2px]",
    "after:start-[2px]",
    "after:bg-white",
    "after:border",
    "after:border-slate-300",
    "after:rounded-full",
    "after:h-5",
    "after:w-5",
    "after:transition-all",
    "peer-checked:after:translate-x-full",
    "peer-checked:after:border-white",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleClasses {
    pub scheme: ColorScheme,
    pub disabled: bool,
}

impl ToggleClasses {
    pub fn wrapper(&self) -> &'static str {
        choice_wrapper_classes(self.disabled)
    }

    /// The switch track; the knob is drawn with `after:` utilities.
    pub fn track(&self) -> String {
        let fill = if self.scheme.is_dark() {
            "bg-slate-700"
        } else {
            "bg-slate-200"
        };
        let mut parts = vec!["w-11 h-6 rounded-full", fill];
        parts.extend(TRACK_SHARED);
        parts.join(" ")
    }

    pub fn label(&self) -> &'static str {
        choice_label_classes(self.scheme)
    }
}
