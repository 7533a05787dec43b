use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    #[default]
    None,
    Success,
    Danger,
}

impl AlertKind {
    /// Clase CSS del banner; vacía si no se muestra nada
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::None => "",
            AlertKind::Success => "alert-success",
            AlertKind::Danger => "alert-danger",
        }
    }
}

/// La única notificación que ve el usuario
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
}

impl Alert {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: AlertKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: AlertKind::Danger,
        }
    }

    pub fn alert_type(&self) -> &'static str {
        self.kind.css_class()
    }

    pub fn is_empty(&self) -> bool {
        self.kind == AlertKind::None && self.message.is_empty()
    }
}
