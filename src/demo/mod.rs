//! Static demo page showing every component in the resolved scheme.

use minijinja::Environment;
use serde::Serialize;

use crate::components::{
    badge_classes, button_classes, clamp_percent, progress_track_classes, BadgeVariant,
    ButtonState, ButtonVariant, CardClasses, CheckboxClasses, InputTextClasses, InputVariant,
    SelectClasses, SelectOption, StatCardClasses, TableClasses, ToggleClasses,
};
use crate::document::Document;
use crate::storage::PreferenceStore;
use crate::theme::{ColorScheme, SystemThemeSignal, ThemeMode, ThemeResolver};

const DEMO_TEMPLATE_NAME: &str = "demo.html";
const DEMO_TEMPLATE: &str = include_str!("demo.html");
const DEMO_TITLE: &str = "mine-ui components";

/// Renders the demo page for the resolver's current state.
pub fn render_demo_page<S, P>(resolver: &ThemeResolver<S, P>) -> Result<String, minijinja::Error>
where
    S: PreferenceStore,
    P: SystemThemeSignal,
{
    render_demo_page_for(resolver.document(), resolver.mode(), resolver.theme())
}

pub fn render_demo_page_for(
    document: &Document,
    mode: ThemeMode,
    scheme: ColorScheme,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(DEMO_TEMPLATE_NAME, DEMO_TEMPLATE)?;
    let template = env.get_template(DEMO_TEMPLATE_NAME)?;
    let page = DemoPage::build(document, mode, scheme);
    tracing::debug!(%mode, ?scheme, "rendering demo page");
    template.render(&page)
}

#[derive(Debug, Serialize)]
struct DemoPage {
    title: &'static str,
    mode: &'static str,
    scheme: &'static str,
    root_attributes: Vec<(String, String)>,
    root_class: Option<String>,
    body_class: &'static str,
    buttons: Vec<ButtonView>,
    inputs: Vec<InputView>,
    select: SelectView,
    checkboxes: Vec<ChoiceView>,
    toggles: Vec<ChoiceView>,
    badges: Vec<BadgeView>,
    progress: Vec<ProgressView>,
    cards: Vec<CardView>,
    stats: Vec<StatView>,
    table: TableView,
}

#[derive(Debug, Serialize)]
struct ButtonView {
    label: &'static str,
    class: String,
    inert: bool,
    loading: bool,
}

#[derive(Debug, Serialize)]
struct InputView {
    label: &'static str,
    placeholder: &'static str,
    value: &'static str,
    error: Option<&'static str>,
    label_class: &'static str,
    input_class: String,
    error_class: &'static str,
}

#[derive(Debug, Serialize)]
struct SelectView {
    label: &'static str,
    value: &'static str,
    options: Vec<SelectOption>,
    label_class: &'static str,
    select_class: String,
}

#[derive(Debug, Serialize)]
struct ChoiceView {
    label: &'static str,
    checked: bool,
    disabled: bool,
    wrapper_class: &'static str,
    control_class: String,
    label_class: &'static str,
}

#[derive(Debug, Serialize)]
struct BadgeView {
    label: &'static str,
    class: String,
}

#[derive(Debug, Serialize)]
struct ProgressView {
    percent: f64,
    track_class: &'static str,
}

#[derive(Debug, Serialize)]
struct CardView {
    icon: &'static str,
    badge: &'static str,
    title: &'static str,
    description: &'static str,
    footer: &'static str,
    card_class: String,
    icon_class: &'static str,
    badge_class: String,
    title_class: &'static str,
    description_class: &'static str,
    footer_class: &'static str,
}

#[derive(Debug, Serialize)]
struct StatView {
    title: &'static str,
    icon: &'static str,
    value: &'static str,
    trend: &'static str,
    footer: &'static str,
    container_class: String,
    value_class: String,
}

#[derive(Debug, Serialize)]
struct TableView {
    wrapper_class: &'static str,
    table_class: &'static str,
    rows: Vec<RowView>,
}

#[derive(Debug, Serialize)]
struct RowView {
    name: &'static str,
    objects: String,
    size: &'static str,
    status: &'static str,
    status_class: String,
}

struct BucketRow {
    name: &'static str,
    objects: u64,
    size: &'static str,
    status: BucketStatus,
}

#[derive(Clone, Copy)]
enum BucketStatus {
    Active,
    Locked,
    Inactive,
}

impl BucketStatus {
    fn label(self) -> &'static str {
        match self {
            BucketStatus::Active => "active",
            BucketStatus::Locked => "locked",
            BucketStatus::Inactive => "inactive",
        }
    }

    fn badge(self) -> BadgeVariant {
        match self {
            BucketStatus::Active => BadgeVariant::Success,
            BucketStatus::Locked => BadgeVariant::Warning,
            BucketStatus::Inactive => BadgeVariant::Info,
        }
    }
}

const BUCKET_ROWS: [BucketRow; 4] = [
    BucketRow {
        name: "backups-2024",
        objects: 1_204,
        size: "120 GB",
        status: BucketStatus::Active,
    },
    BucketRow {
        name: "media-assets",
        objects: 45_892,
        size: "2.3 TB",
        status: BucketStatus::Active,
    },
    BucketRow {
        name: "logs-archive",
        objects: 890,
        size: "48 GB",
        status: BucketStatus::Locked,
    },
    BucketRow {
        name: "temp-uploads",
        objects: 33,
        size: "1.2 GB",
        status: BucketStatus::Inactive,
    },
];

impl DemoPage {
    fn build(document: &Document, mode: ThemeMode, scheme: ColorScheme) -> Self {
        Self {
            title: DEMO_TITLE,
            mode: mode.as_str(),
            scheme: scheme.as_str(),
            root_attributes: document
                .attributes()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            root_class: document.class_list(),
            body_class: if scheme.is_dark() {
                "bg-background-dark text-white"
            } else {
                "bg-background-light text-slate-900"
            },
            buttons: demo_buttons(scheme),
            inputs: demo_inputs(scheme),
            select: demo_select(scheme),
            checkboxes: demo_checkboxes(scheme),
            toggles: demo_toggles(scheme),
            badges: [
                ("Info", BadgeVariant::Info),
                ("Success", BadgeVariant::Success),
                ("Warning", BadgeVariant::Warning),
                ("Error", BadgeVariant::Error),
            ]
            .into_iter()
            .map(|(label, variant)| BadgeView {
                label,
                class: badge_classes(variant, scheme),
            })
            .collect(),
            progress: [0.0, 35.0, 72.5, 140.0]
                .into_iter()
                .map(|value| ProgressView {
                    percent: clamp_percent(value),
                    track_class: progress_track_classes(scheme),
                })
                .collect(),
            cards: demo_cards(scheme),
            stats: demo_stats(scheme),
            table: demo_table(scheme),
        }
    }
}

fn demo_buttons(scheme: ColorScheme) -> Vec<ButtonView> {
    let idle = ButtonState::default();
    let loading = ButtonState {
        loading: true,
        disabled: false,
    };
    let disabled = ButtonState {
        loading: false,
        disabled: true,
    };
    [
        ("Primary", ButtonVariant::Primary, idle),
        ("Secondary", ButtonVariant::Secondary, idle),
        ("Delete", ButtonVariant::Destructive, idle),
        ("Outline", ButtonVariant::Outline, idle),
        ("Ghost", ButtonVariant::Ghost, idle),
        ("Saving", ButtonVariant::Primary, loading),
        ("Disabled", ButtonVariant::Secondary, disabled),
    ]
    .into_iter()
    .map(|(label, variant, state)| ButtonView {
        label,
        class: button_classes(variant, state, scheme),
        inert: state.is_inert(),
        loading: state.loading,
    })
    .collect()
}

fn demo_inputs(scheme: ColorScheme) -> Vec<InputView> {
    let input = |label, placeholder, variant, error: &'static str| {
        let classes = InputTextClasses { scheme, variant };
        InputView {
            label,
            placeholder,
            value: "",
            error: classes.shows_error(error).then_some(error),
            label_class: classes.label(),
            input_class: classes.input(),
            error_class: classes.error_message(),
        }
    };
    vec![
        input("Bucket name", "my-bucket", InputVariant::Default, ""),
        input(
            "Access key",
            "AKIA...",
            InputVariant::Error,
            "Access key is required",
        ),
    ]
}

fn demo_select(scheme: ColorScheme) -> SelectView {
    let classes = SelectClasses { scheme };
    SelectView {
        label: "Storage provider",
        value: "minio",
        options: vec![
            SelectOption::new("minio", "MinIO"),
            SelectOption::new("s3", "AWS S3"),
            SelectOption::new("azure", "Azure Blob"),
        ],
        label_class: classes.label(),
        select_class: classes.select(),
    }
}

fn demo_checkboxes(scheme: ColorScheme) -> Vec<ChoiceView> {
    [
        ("Versioning", true, false),
        ("Object lock", false, false),
        ("Legacy ACLs", false, true),
    ]
    .into_iter()
    .map(|(label, checked, disabled)| {
        let classes = CheckboxClasses { scheme, disabled };
        ChoiceView {
            label,
            checked,
            disabled,
            wrapper_class: classes.wrapper(),
            control_class: classes.checkbox().to_string(),
            label_class: classes.label(),
        }
    })
    .collect()
}

fn demo_toggles(scheme: ColorScheme) -> Vec<ChoiceView> {
    [("Public access", true), ("Encryption", false)]
        .into_iter()
        .map(|(label, checked)| {
            let classes = ToggleClasses {
                scheme,
                disabled: false,
            };
            ChoiceView {
                label,
                checked,
                disabled: false,
                wrapper_class: classes.wrapper(),
                control_class: classes.track(),
                label_class: classes.label(),
            }
        })
        .collect()
}

fn demo_cards(scheme: ColorScheme) -> Vec<CardView> {
    let card = |icon, badge, variant, title, description, footer, clickable| {
        let classes = CardClasses::new(scheme).clickable(clickable);
        CardView {
            icon,
            badge,
            title,
            description,
            footer,
            card_class: classes.card(),
            icon_class: classes.icon_wrapper(),
            badge_class: badge_classes(variant, scheme),
            title_class: classes.title(),
            description_class: classes.description(),
            footer_class: classes.footer(),
        }
    };
    vec![
        card(
            "inventory_2",
            "Active",
            BadgeVariant::Success,
            "backups-2024",
            "Nightly database snapshots.",
            "1,204 objects",
            true,
        ),
        card(
            "lock",
            "Locked",
            BadgeVariant::Warning,
            "logs-archive",
            "Retention-locked audit logs.",
            "890 objects",
            true,
        ),
        card(
            "policy",
            "Info",
            BadgeVariant::Info,
            "Policies",
            "Access rules applied to every bucket.",
            "Read only",
            false,
        ),
    ]
}

fn demo_stats(scheme: ColorScheme) -> Vec<StatView> {
    let classes = StatCardClasses { scheme };
    let container_class = format!("{} {}", StatCardClasses::SHELL, classes.container())
        .trim_end()
        .to_string();
    let value_class = format!("text-2xl font-semibold {}", classes.value());
    [
        ("Buckets", "inventory_2", "4", "+1", "since last week"),
        ("Objects", "description", "48,019", "+3.2%", "across all buckets"),
        ("Storage", "database", "2.5 TB", "+120 GB", "of 10 TB quota"),
    ]
    .into_iter()
    .map(|(title, icon, value, trend, footer)| StatView {
        title,
        icon,
        value,
        trend,
        footer,
        container_class: container_class.clone(),
        value_class: value_class.clone(),
    })
    .collect()
}

fn demo_table(scheme: ColorScheme) -> TableView {
    let classes = TableClasses { scheme };
    TableView {
        wrapper_class: classes.wrapper(),
        table_class: classes.table(),
        rows: BUCKET_ROWS
            .iter()
            .map(|row| RowView {
                name: row.name,
                objects: group_thousands(row.objects),
                size: row.size,
                status: row.status.label(),
                status_class: badge_classes(row.status.badge(), scheme),
            })
            .collect(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
