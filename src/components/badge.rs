use crate::theme::ColorScheme;

const BADGE_BASE: &str =
    "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium border";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

pub fn badge_classes(variant: BadgeVariant, scheme: ColorScheme) -> String {
    let dark = scheme.is_dark();
    let tone = match variant {
        BadgeVariant::Success if dark => "bg-emerald-500/10 text-emerald-400 border-emerald-500/20",
        BadgeVariant::Success => "bg-emerald-50 text-emerald-700 border-emerald-200",
        BadgeVariant::Warning if dark => "bg-amber-500/10 text-amber-400 border-amber-500/20",
        BadgeVariant::Warning => "bg-amber-50 text-amber-700 border-amber-200",
        BadgeVariant::Error if dark => "bg-red-500/10 text-red-400 border-red-500/20",
        BadgeVariant::Error => "bg-red-50 text-red-700 border-red-200",
        BadgeVariant::Info if dark => "bg-primary/10 text-primary border-primary/20",
        BadgeVariant::Info => "bg-blue-50 text-blue-700 border-blue-200",
    };
    format!("{BADGE_BASE} {tone}")
}
