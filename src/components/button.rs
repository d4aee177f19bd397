use crate::theme::ColorScheme;

const BUTTON_BASE: &str = "inline-flex items-center gap-2 px-4 py-2 rounded text-sm font-medium transition-colors cursor-pointer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub loading: bool,
    pub disabled: bool,
}

impl ButtonState {
    /// Whether the rendered control should refuse interaction.
    pub fn is_inert(self) -> bool {
        self.loading || self.disabled
    }
}

/// Loading or disabled buttons share one muted style regardless of variant.
pub fn button_classes(variant: ButtonVariant, state: ButtonState, scheme: ColorScheme) -> String {
    if state.is_inert() {
        return format!("{BUTTON_BASE} bg-primary/50 text-white/50 cursor-not-allowed");
    }

    let dark = scheme.is_dark();
    let tone = match variant {
        ButtonVariant::Secondary if dark => {
            "bg-surface-dark border border-border-dark hover:bg-border-dark text-white"
        }
        ButtonVariant::Secondary => {
            "bg-white border border-border-light hover:bg-slate-50 text-slate-700 shadow-sm"
        }
        ButtonVariant::Destructive if dark => {
            "bg-red-500/10 text-red-500 border border-red-500/20 hover:bg-red-500/20"
        }
        ButtonVariant::Destructive => "bg-red-50 text-red-600 border border-red-200 hover:bg-red-100",
        ButtonVariant::Outline if dark => "border border-primary text-primary hover:bg-primary/10",
        ButtonVariant::Outline => "border border-primary text-primary hover:bg-primary/5",
        ButtonVariant::Ghost if dark => "text-slate-400 hover:text-white hover:bg-white/5",
        ButtonVariant::Ghost => "text-slate-500 hover:text-slate-900 hover:bg-slate-100",
        ButtonVariant::Primary if dark => "bg-primary hover:bg-primary-dark text-white",
        ButtonVariant::Primary => "bg-primary hover:bg-primary-dark text-white shadow-sm",
    };
    format!("{BUTTON_BASE} {tone}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARIANTS: [ButtonVariant; 5] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Destructive,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
    ];

    #[test]
    fn every_variant_keeps_base_classes() {
        for variant in ALL_VARIANTS {
            for scheme in [ColorScheme::Light, ColorScheme::Dark] {
                let classes = button_classes(variant, ButtonState::default(), scheme);
                assert!(classes.starts_with(BUTTON_BASE), "{variant:?} {scheme:?}");
            }
        }
    }

    #[test]
    fn inert_state_overrides_variant() {
        let loading = ButtonState {
            loading: true,
            disabled: false,
        };
        let disabled = ButtonState {
            loading: false,
            disabled: true,
        };
        let ghost_loading = button_classes(ButtonVariant::Ghost, loading, ColorScheme::Dark);
        let primary_disabled =
            button_classes(ButtonVariant::Primary, disabled, ColorScheme::Light);

        assert_eq!(ghost_loading, primary_disabled);
        assert!(ghost_loading.ends_with("bg-primary/50 text-white/50 cursor-not-allowed"));
    }

    #[test]
    fn secondary_switches_surface_with_scheme() {
        let light = button_classes(
            ButtonVariant::Secondary,
            ButtonState::default(),
            ColorScheme::Light,
        );
        let dark = button_classes(
            ButtonVariant::Secondary,
            ButtonState::default(),
            ColorScheme::Dark,
        );

        assert!(light.contains("bg-white"));
        assert!(light.contains("shadow-sm"));
        assert!(dark.contains("bg-surface-dark"));
        assert!(!dark.contains("shadow-sm"));
    }

    #[test]
    fn primary_drops_shadow_in_dark() {
        let dark = button_classes(
            ButtonVariant::Primary,
            ButtonState::default(),
            ColorScheme::Dark,
        );
        assert!(dark.ends_with("bg-primary hover:bg-primary-dark text-white"));
    }
}
