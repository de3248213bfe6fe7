use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub major: String,
    pub monthly_salary: f64,
    pub total_loan: f64,
}

#[derive(Debug, Clone)]
pub struct Expense {
    pub id: String,
    pub category: String,
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Clone)]
pub struct SavingsGoal {
    pub id: String,
    pub title: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub color: String,
}

#[derive(Debug, Clone)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub unlocked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub translation_key_title: Option<String>,
    pub translation_key_message: Option<String>,
    pub params: Vec<(String, String)>,
    pub kind: NotificationKind,
    pub read: bool,
    // Display label ("Now", "1h ago"), not a timestamp.
    pub time: String,
}

impl Notification {
    pub fn plain(id: &str, title: &str, message: &str, kind: NotificationKind, time: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            translation_key_title: None,
            translation_key_message: None,
            params: Vec::new(),
            kind,
            read: false,
            time: time.to_string(),
        }
    }
}
