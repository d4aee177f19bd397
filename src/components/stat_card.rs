use crate::theme::ColorScheme;

/// Classes layered on top of the stat card's fixed shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCardClasses {
    pub scheme: ColorScheme,
}

impl StatCardClasses {
    pub const SHELL: &'static str = "rounded-lg px-6 py-8 ring shadow-xl ring-gray-900/5 mx-auto max-w-md overflow-hidden rounded-xl bg-white shadow-md md:max-w-2xl";

    pub fn container(&self) -> &'static str {
        if self.scheme.is_dark() {
            "dark:bg-ui-card-1-dark border border-ui-b-card-dark"
        } else {
            ""
        }
    }

    pub fn value(&self) -> &'static str {
        if self.scheme.is_dark() {
            "text-gray-100"
        } else {
            "text-gray-800"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_stat_card_adds_nothing_to_shell() {
        let classes = StatCardClasses {
            scheme: ColorScheme::Light,
        };
        assert_eq!(classes.container(), "");
        assert_eq!(classes.value(), "text-gray-800");
    }

    #[test]
    fn dark_stat_card_adds_border() {
        let classes = StatCardClasses {
            scheme: ColorScheme::Dark,
        };
        assert!(classes.container().contains("border-ui-b-card-dark"));
        assert_eq!(classes.value(), "text-gray-100");
    }
}
