//! End-to-end flow over the state core, the way the panels drive it.

use edufinance::i18n::Language;
use edufinance::models::{Badge, Student};
use edufinance::roster::{load_roster, save_roster};
use edufinance::settings::{ensure_base_folders, load_or_init_settings, save_settings};
use edufinance::state::{AppState, NotificationField, View};
use tempfile::TempDir;

fn carl() -> Student {
    Student {
        id: "3".to_string(),
        name: "Carl".to_string(),
        major: "Art".to_string(),
        monthly_salary: 3000.0,
        total_loan: 10000.0,
    }
}

#[test]
fn seeded_session_add_delete_and_notify() {
    let mut state = AppState::seeded(Language::English, 5.5, 10);
    assert_eq!(state.students.len(), 2);
    assert_eq!(state.notifications.len(), 2);
    assert_eq!(state.view, View::Dashboard);

    state.login();
    state.add_student(carl());
    state.delete_student("1");

    let ids: Vec<&str> = state.students.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["2", "3"]);

    state.earn_badge(Badge {
        id: "saver".to_string(),
        name: "Saver".to_string(),
        icon: "\u{1F3E6}".to_string(),
        description: "Learned the pay-yourself-first rule".to_string(),
        unlocked: true,
    });
    assert_eq!(state.notifications.len(), 3);
    assert_eq!(
        state.notification_text(&state.notifications[0], NotificationField::Message),
        "You earned the Saver badge!"
    );

    state.mark_all_notifications_read();
    assert_eq!(state.unread_count(), 0);

    state.set_language(Language::Arabic);
    assert!(state.is_rtl());
    assert_eq!(
        state.notification_text(&state.notifications[0], NotificationField::Title),
        "تم فتح شارة جديدة!"
    );
}

#[test]
fn roster_export_import_replaces_wholesale() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("roster.json");

    let mut source = AppState::seeded(Language::English, 5.5, 10);
    source.add_student(carl());
    save_roster(&path, &source.students).expect("export");

    let mut target = AppState::seeded(Language::English, 5.5, 10);
    target.delete_student("1");
    target.delete_student("2");
    assert!(target.students.is_empty());

    let imported = load_roster(&path).expect("import");
    target.replace_students(imported);
    let ids: Vec<&str> = target.students.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn settings_preferences_feed_a_new_session() {
    let dir = TempDir::new().expect("temp dir");
    ensure_base_folders(dir.path()).expect("folders");

    let mut settings = load_or_init_settings(dir.path()).expect("init");
    settings.ui.last_language = Some("Arabic".to_string());
    settings.sim.interest_rate = 7.25;
    settings.sim.loan_term_years = 15;
    save_settings(&settings, dir.path()).expect("save");

    let reloaded = load_or_init_settings(dir.path()).expect("reload");
    let language = reloaded
        .ui
        .last_language
        .as_deref()
        .and_then(Language::from_code)
        .unwrap_or(Language::English);
    let state = AppState::seeded(
        language,
        reloaded.sim.interest_rate,
        reloaded.sim.loan_term_years,
    );
    assert!(state.is_rtl());
    assert_eq!(state.interest_rate, 7.25);
    assert_eq!(state.loan_term_years, 15);
}
