#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A notification banner shown at the top of a page.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}
