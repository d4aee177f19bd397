use crate::theme::ColorScheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableClasses {
    pub scheme: ColorScheme,
}

impl TableClasses {
    pub fn wrapper(&self) -> &'static str {
        if self.scheme.is_dark() {
            "w-full overflow-hidden rounded-lg border border-border-dark"
        } else {
            "w-full overflow-hidden rounded-lg border border-border-light shadow-sm"
        }
    }

    pub fn table(&self) -> &'static str {
        if self.scheme.is_dark() {
            "w-full text-left text-sm text-slate-400"
        } else {
            "w-full text-left text-sm text-slate-600"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_table_has_shadow() {
        let classes = TableClasses {
            scheme: ColorScheme::Light,
        };
        assert!(classes.wrapper().ends_with("shadow-sm"));
        assert!(classes.table().ends_with("text-slate-600"));
    }

    #[test]
    fn dark_table_drops_shadow() {
        let classes = TableClasses {
            scheme: ColorScheme::Dark,
        };
        assert!(!classes.wrapper().contains("shadow"));
        assert!(classes.table().ends_with("text-slate-400"));
    }
}
