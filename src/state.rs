use crate::i18n::{self, Language};
use crate::models::{Badge, Expense, Notification, NotificationKind, SavingsGoal, Student};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Manage,
    Budget,
    Daily,
    Learn,
    Insights,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Dashboard,
        View::Manage,
        View::Budget,
        View::Daily,
        View::Learn,
        View::Insights,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Manage => "loans",
            View::Budget => "budget",
            View::Daily => "dailyAnalysis",
            View::Learn => "learn",
            View::Insights => "aiAdvisor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationField {
    Title,
    Message,
}

// Single owner of all mutable application state. Panels and the CLI call
// the methods below; nothing else mutates the collections.
pub struct AppState {
    pub authenticated: bool,
    pub view: View,
    pub students: Vec<Student>,
    pub expenses: Vec<Expense>,
    pub goals: Vec<SavingsGoal>,
    pub badges: Vec<Badge>,
    pub notifications: Vec<Notification>,
    pub show_notifications: bool,
    pub language: Language,
    pub interest_rate: f64,
    pub loan_term_years: u32,
    id_seq: u64,
}

impl AppState {
    pub fn seeded(language: Language, interest_rate: f64, loan_term_years: u32) -> Self {
        Self {
            authenticated: false,
            view: View::Dashboard,
            students: seed_students(),
            expenses: Vec::new(),
            goals: Vec::new(),
            badges: Vec::new(),
            notifications: seed_notifications(),
            show_notifications: false,
            language,
            interest_rate,
            loan_term_years,
            id_seq: 3,
        }
    }

    pub fn next_id(&mut self, prefix: &str) -> String {
        let id = self.id_seq;
        self.id_seq += 1;
        format!("{prefix}-{id}")
    }

    pub fn login(&mut self) {
        self.authenticated = true;
    }

    pub fn add_student(&mut self, student: Student) {
        self.students.push(student);
    }

    pub fn update_student(&mut self, updated: Student) {
        if let Some(existing) = self.students.iter_mut().find(|s| s.id == updated.id) {
            *existing = updated;
        }
    }

    pub fn delete_student(&mut self, id: &str) {
        self.students.retain(|s| s.id != id);
    }

    pub fn replace_students(&mut self, students: Vec<Student>) {
        self.students = students;
    }

    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    pub fn add_goal(&mut self, goal: SavingsGoal) {
        self.goals.push(goal);
    }

    // Idempotent by badge id: a re-award changes nothing.
    pub fn earn_badge(&mut self, badge: Badge) {
        if self.badges.iter().any(|b| b.id == badge.id) {
            return;
        }
        let note = Notification {
            id: self.next_id("note"),
            title: "New Badge Unlocked!".to_string(),
            message: format!("You earned the {} badge!", badge.name),
            translation_key_title: Some("badgeUnlocked".to_string()),
            translation_key_message: Some("badgeEarned".to_string()),
            params: vec![("badgeName".to_string(), badge.name.clone())],
            kind: NotificationKind::Success,
            read: false,
            time: "Just now".to_string(),
        };
        self.badges.push(badge);
        self.notifications.insert(0, note);
    }

    pub fn has_badge(&self, id: &str) -> bool {
        self.badges.iter().any(|b| b.id == id)
    }

    pub fn toggle_notification_panel(&mut self) {
        self.show_notifications = !self.show_notifications;
    }

    pub fn mark_all_notifications_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }

    pub fn set_interest_rate(&mut self, rate: f64) {
        self.interest_rate = rate;
    }

    pub fn set_loan_term_years(&mut self, years: u32) {
        self.loan_term_years = years;
    }

    // Resolves a notification field against the active language: translation
    // key first, literal text when the key misses, then `{param}` fills.
    pub fn notification_text(&self, note: &Notification, field: NotificationField) -> String {
        let (key, fallback) = match field {
            NotificationField::Title => (note.translation_key_title.as_deref(), note.title.as_str()),
            NotificationField::Message => {
                (note.translation_key_message.as_deref(), note.message.as_str())
            }
        };
        match key.and_then(|k| i18n::lookup(self.language, k)) {
            Some(template) => i18n::apply_params(template, &note.params),
            None => fallback.to_string(),
        }
    }
}

fn seed_students() -> Vec<Student> {
    vec![
        Student {
            id: "1".to_string(),
            name: "Alice Johnson".to_string(),
            major: "Computer Science".to_string(),
            monthly_salary: 4500.0,
            total_loan: 25000.0,
        },
        Student {
            id: "2".to_string(),
            name: "Bob Smith".to_string(),
            major: "Philosophy".to_string(),
            monthly_salary: 2800.0,
            total_loan: 45000.0,
        },
    ]
}

fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            title: "Welcome!".to_string(),
            message: "Start tracking your loans today.".to_string(),
            translation_key_title: Some("welcomeTitle".to_string()),
            translation_key_message: Some("welcomeMsg".to_string()),
            params: Vec::new(),
            kind: NotificationKind::Info,
            read: false,
            time: "Now".to_string(),
        },
        Notification {
            id: "2".to_string(),
            title: "Tip".to_string(),
            message: "Check the Daily Simulator to save money.".to_string(),
            translation_key_title: Some("tipTitle".to_string()),
            translation_key_message: Some("tipMsg".to_string()),
            params: Vec::new(),
            kind: NotificationKind::Success,
            read: false,
            time: "1h ago".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> AppState {
        AppState::seeded(Language::English, 5.5, 10)
    }

    fn student(id: &str, name: &str) -> Student {
        Student {
            id: id.to_string(),
            name: name.to_string(),
            major: "Art".to_string(),
            monthly_salary: 3000.0,
            total_loan: 10000.0,
        }
    }

    fn badge(id: &str, name: &str) -> Badge {
        Badge {
            id: id.to_string(),
            name: name.to_string(),
            icon: "star".to_string(),
            description: String::new(),
            unlocked: true,
        }
    }

    #[test]
    fn seed_shape() {
        let state = fresh();
        assert!(!state.authenticated);
        assert_eq!(state.view, View::Dashboard);
        assert_eq!(state.students.len(), 2);
        assert_eq!(state.notifications.len(), 2);
        assert!(state.expenses.is_empty());
        assert!(state.goals.is_empty());
        assert!(state.badges.is_empty());
        assert_eq!(state.unread_count(), 2);
    }

    #[test]
    fn add_student_appends_one_trailing_element() {
        let mut state = fresh();
        let before = state.students.clone();
        state.add_student(student("3", "Carl"));
        assert_eq!(state.students.len(), before.len() + 1);
        for (old, new) in before.iter().zip(&state.students) {
            assert_eq!(old.id, new.id);
        }
        assert_eq!(state.students.last().map(|s| s.id.as_str()), Some("3"));
    }

    #[test]
    fn update_student_replaces_in_place_preserving_order() {
        let mut state = fresh();
        let mut changed = state.students[0].clone();
        changed.name = "Alice J.".to_string();
        changed.monthly_salary = 5000.0;
        state.update_student(changed);
        assert_eq!(state.students.len(), 2);
        assert_eq!(state.students[0].name, "Alice J.");
        assert_eq!(state.students[0].monthly_salary, 5000.0);
        assert_eq!(state.students[1].name, "Bob Smith");
    }

    #[test]
    fn update_student_with_unknown_id_is_a_noop() {
        let mut state = fresh();
        let before: Vec<String> = state.students.iter().map(|s| s.name.clone()).collect();
        state.update_student(student("missing", "Nobody"));
        let after: Vec<String> = state.students.iter().map(|s| s.name.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn delete_student_with_unknown_id_is_a_noop() {
        let mut state = fresh();
        state.delete_student("missing");
        assert_eq!(state.students.len(), 2);
    }

    #[test]
    fn end_to_end_add_then_delete() {
        let mut state = fresh();
        state.add_student(student("3", "Carl"));
        state.delete_student("1");
        let ids: Vec<&str> = state.students.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);
    }

    #[test]
    fn earn_badge_prepends_notification() {
        let mut state = fresh();
        state.earn_badge(badge("saver", "Saver"));
        assert_eq!(state.badges.len(), 1);
        assert_eq!(state.notifications.len(), 3);
        let newest = &state.notifications[0];
        assert_eq!(newest.kind, NotificationKind::Success);
        assert!(!newest.read);
        assert_eq!(newest.time, "Just now");
        assert_eq!(
            state.notification_text(newest, NotificationField::Message),
            "You earned the Saver badge!"
        );
    }

    #[test]
    fn earn_badge_is_idempotent_per_id() {
        let mut state = fresh();
        state.earn_badge(badge("saver", "Saver"));
        state.earn_badge(badge("saver", "Saver"));
        assert_eq!(state.badges.len(), 1);
        assert_eq!(state.notifications.len(), 3);
    }

    #[test]
    fn mark_all_read_is_idempotent() {
        let mut state = fresh();
        state.mark_all_notifications_read();
        assert!(state.notifications.iter().all(|n| n.read));
        let snapshot: Vec<(String, bool)> = state
            .notifications
            .iter()
            .map(|n| (n.id.clone(), n.read))
            .collect();
        state.mark_all_notifications_read();
        let again: Vec<(String, bool)> = state
            .notifications
            .iter()
            .map(|n| (n.id.clone(), n.read))
            .collect();
        assert_eq!(snapshot, again);
        assert_eq!(state.unread_count(), 0);
    }

    #[test]
    fn language_switch_drives_direction() {
        let mut state = fresh();
        assert!(!state.is_rtl());
        state.set_language(Language::Arabic);
        assert!(state.is_rtl());
        state.set_language(Language::Turkish);
        assert!(!state.is_rtl());
    }

    #[test]
    fn notification_text_falls_back_to_literal_on_missing_key() {
        let state = fresh();
        let mut note = Notification::plain("x", "Raw title", "Raw message", NotificationKind::Info, "Now");
        note.translation_key_title = Some("noSuchKey".to_string());
        assert_eq!(
            state.notification_text(&note, NotificationField::Title),
            "Raw title"
        );
        assert_eq!(
            state.notification_text(&note, NotificationField::Message),
            "Raw message"
        );
    }

    #[test]
    fn notification_text_uses_active_language_table_only() {
        let mut state = fresh();
        // Hindi has no badgeEarned entry, so the literal message wins there.
        state.earn_badge(badge("saver", "Saver"));
        state.set_language(Language::Hindi);
        let newest = state.notifications[0].clone();
        assert_eq!(
            state.notification_text(&newest, NotificationField::Message),
            "You earned the Saver badge!"
        );
        // Turkish translates it, placeholder included.
        state.set_language(Language::Turkish);
        assert_eq!(
            state.notification_text(&newest, NotificationField::Message),
            "Saver rozetini kazandın!"
        );
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut state = fresh();
        let a = state.next_id("s");
        let b = state.next_id("s");
        assert_ne!(a, b);
    }

    #[test]
    fn login_is_one_way() {
        let mut state = fresh();
        state.login();
        assert!(state.authenticated);
        state.login();
        assert!(state.authenticated);
    }
}
