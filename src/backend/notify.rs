//! User-facing notifications (toasts).

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

impl Variant {
    pub fn css_class(self) -> &'static str {
        match self {
            Variant::Default => "toast",
            Variant::Destructive => "toast toast-destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }
}

/// Anything that can show a notification to the user.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

const NOT_IMPLEMENTED_TITLE: &str = "🚧 Cette fonctionnalité n'est pas encore implémentée—mais ne vous inquiétez pas ! Vous pouvez la demander dans votre prochaine invite ! 🚀";

/// Notification for actions that exist in the UI but do nothing yet.
pub fn not_implemented(action: &str, item: Option<&str>) -> Notification {
    let description = match item {
        Some(item) => format!("{action} pour {item} bientôt disponible."),
        None => format!("{action} bientôt disponible."),
    };
    Notification::info(NOT_IMPLEMENTED_TITLE, description)
}
