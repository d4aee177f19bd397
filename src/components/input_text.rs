use crate::theme::ColorScheme;

const INPUT_BASE: &str =
    "w-full rounded px-3 py-2 text-sm outline-none transition-all focus:ring-2 focus:border-transparent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    #[default]
    Default,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputTextClasses {
    pub scheme: ColorScheme,
    pub variant: InputVariant,
}

impl InputTextClasses {
    pub fn label(&self) -> &'static str {
        match (self.variant, self.scheme.is_dark()) {
            (InputVariant::Error, true) => "text-sm font-medium text-red-500",
            (InputVariant::Error, false) => "text-sm font-medium text-red-600",
            (InputVariant::Default, true) => "text-sm font-medium text-slate-300",
            (InputVariant::Default, false) => "text-sm font-medium text-slate-700",
        }
    }

    pub fn input(&self) -> String {
        let tone = match (self.variant, self.scheme.is_dark()) {
            (InputVariant::Error, true) => "bg-red-900/10 border border-red-500 text-red-200",
            (InputVariant::Error, false) => "bg-red-50 border border-red-300 text-red-900",
            (InputVariant::Default, true) => {
                "bg-background-dark border border-border-dark text-white placeholder:text-slate-500 focus:ring-primary"
            }
            (InputVariant::Default, false) => {
                "bg-slate-50 border border-slate-300 text-slate-900 placeholder:text-slate-400 focus:ring-primary"
            }
        };
        format!("{INPUT_BASE} {tone}")
    }

    pub fn error_message(&self) -> &'static str {
        if self.scheme.is_dark() {
            "text-xs text-red-500"
        } else {
            "text-xs text-red-600"
        }
    }

    /// The error line only shows for the error variant with a non-empty message.
    pub fn shows_error(&self, message: &str) -> bool {
        self.variant == InputVariant::Error && !message.is_empty()
    }
}
