#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Mandarin,
    Hindi,
    Spanish,
    Arabic,
    French,
    Bengali,
    Portuguese,
    Russian,
    Indonesian,
    Azerbaijani,
    Turkish,
}

impl Language {
    pub const ALL: [Language; 12] = [
        Language::English,
        Language::Mandarin,
        Language::Hindi,
        Language::Spanish,
        Language::Arabic,
        Language::French,
        Language::Bengali,
        Language::Portuguese,
        Language::Russian,
        Language::Indonesian,
        Language::Azerbaijani,
        Language::Turkish,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Mandarin => "Mandarin Chinese",
            Language::Hindi => "Hindi",
            Language::Spanish => "Spanish",
            Language::Arabic => "Arabic",
            Language::French => "French",
            Language::Bengali => "Bengali",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Indonesian => "Indonesian",
            Language::Azerbaijani => "Azerbaijani",
            Language::Turkish => "Turkish",
        }
    }

    pub fn native_label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Mandarin => "中文",
            Language::Hindi => "हिन्दी",
            Language::Spanish => "Español",
            Language::Arabic => "العربية",
            Language::French => "Français",
            Language::Bengali => "বাংলা",
            Language::Portuguese => "Português",
            Language::Russian => "Русский",
            Language::Indonesian => "Bahasa Indonesia",
            Language::Azerbaijani => "Azərbaycanca",
            Language::Turkish => "Türkçe",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code.trim()))
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Arabic)
    }
}

// Active-language lookup only; callers decide the fallback.
pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    table(language)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

// UI label accessor: active language, then English, then the key itself.
pub fn text(language: Language, key: &'static str) -> &'static str {
    lookup(language, key)
        .or_else(|| lookup(Language::English, key))
        .unwrap_or(key)
}

// Replaces every `{name}` occurrence for every supplied parameter.
pub fn apply_params(template: &str, params: &[(String, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in params {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::English => ENGLISH,
        Language::Mandarin => MANDARIN,
        Language::Hindi => HINDI,
        Language::Spanish => SPANISH,
        Language::Arabic => ARABIC,
        Language::French => FRENCH,
        Language::Bengali => BENGALI,
        Language::Portuguese => PORTUGUESE,
        Language::Russian => RUSSIAN,
        Language::Indonesian => INDONESIAN,
        Language::Azerbaijani => AZERBAIJANI,
        Language::Turkish => TURKISH,
    }
}

const ENGLISH: &[(&str, &str)] = &[
    ("appTitle", "EduFinance Tracker"),
    ("appSubtitle", "Student loan insights at a glance"),
    ("dashboard", "Dashboard"),
    ("loans", "Loans"),
    ("budget", "Budget"),
    ("dailyAnalysis", "Daily Analysis"),
    ("learn", "Learn"),
    ("aiAdvisor", "AI Advisor"),
    ("notifications", "Notifications"),
    ("markAllRead", "Mark all read"),
    ("noNotifications", "No notifications"),
    ("welcomeTitle", "Welcome!"),
    ("welcomeMsg", "Start tracking your loans today."),
    ("tipTitle", "Tip"),
    ("tipMsg", "Check the Daily Simulator to save money."),
    ("badgeUnlocked", "New Badge Unlocked!"),
    ("badgeEarned", "You earned the {badgeName} badge!"),
    ("earnedBadges", "Earned badges"),
    ("lessons", "Lessons"),
    ("markComplete", "Mark complete"),
    ("completed", "Completed"),
    ("totalStudents", "Students"),
    ("averageSalary", "Average salary"),
    ("totalLoans", "Total loans"),
    ("averageLoan", "Average loan"),
    ("debtToIncome", "Debt-to-income"),
    ("roster", "Roster"),
    ("addStudent", "Add student"),
    ("editStudent", "Edit student"),
    ("name", "Name"),
    ("major", "Major"),
    ("monthlySalary", "Monthly salary"),
    ("totalLoan", "Total loan"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("delete", "Delete"),
    ("edit", "Edit"),
    ("expenses", "Expenses"),
    ("addExpense", "Add expense"),
    ("category", "Category"),
    ("amount", "Amount"),
    ("savingsGoals", "Savings goals"),
    ("addGoal", "Add goal"),
    ("goalTitle", "Goal title"),
    ("targetAmount", "Target amount"),
    ("currentAmount", "Current amount"),
    ("byCategory", "Spending by category"),
    ("totalSpent", "Total spent"),
    ("interestRate", "Interest rate (%)"),
    ("loanTermYears", "Loan term (years)"),
    ("monthlyPayment", "Monthly payment"),
    ("dailyCost", "Daily interest cost"),
    ("totalInterest", "Total interest"),
    ("payoffSchedule", "Payoff schedule"),
    ("month", "Month"),
    ("balance", "Balance"),
    ("advisorHeadline", "Your financial outlook"),
    ("regenerate", "Regenerate advice"),
    ("settings", "Settings"),
    ("language", "Language"),
    ("theme", "Theme"),
    ("exportRoster", "Export roster..."),
    ("importRoster", "Import roster..."),
    ("signIn", "Sign in"),
    ("loginPrompt", "Track tuition debt, plan budgets, and learn as you go."),
];

const SPANISH: &[(&str, &str)] = &[
    ("appTitle", "EduFinance Tracker"),
    ("appSubtitle", "Tus préstamos estudiantiles de un vistazo"),
    ("dashboard", "Panel"),
    ("loans", "Préstamos"),
    ("budget", "Presupuesto"),
    ("dailyAnalysis", "Análisis diario"),
    ("learn", "Aprender"),
    ("aiAdvisor", "Asesor IA"),
    ("notifications", "Notificaciones"),
    ("markAllRead", "Marcar todo como leído"),
    ("noNotifications", "Sin notificaciones"),
    ("welcomeTitle", "¡Bienvenido!"),
    ("welcomeMsg", "Empieza a controlar tus préstamos hoy."),
    ("tipTitle", "Consejo"),
    ("tipMsg", "Prueba el simulador diario para ahorrar dinero."),
    ("badgeUnlocked", "¡Nueva insignia desbloqueada!"),
    ("badgeEarned", "¡Has ganado la insignia {badgeName}!"),
    ("settings", "Ajustes"),
    ("language", "Idioma"),
    ("signIn", "Iniciar sesión"),
];

const FRENCH: &[(&str, &str)] = &[
    ("appSubtitle", "Vos prêts étudiants en un coup d'œil"),
    ("dashboard", "Tableau de bord"),
    ("loans", "Prêts"),
    ("budget", "Budget"),
    ("dailyAnalysis", "Analyse quotidienne"),
    ("learn", "Apprendre"),
    ("aiAdvisor", "Conseiller IA"),
    ("notifications", "Notifications"),
    ("markAllRead", "Tout marquer comme lu"),
    ("noNotifications", "Aucune notification"),
    ("welcomeTitle", "Bienvenue !"),
    ("welcomeMsg", "Commencez à suivre vos prêts dès aujourd'hui."),
    ("tipTitle", "Astuce"),
    ("tipMsg", "Essayez le simulateur quotidien pour économiser."),
    ("badgeUnlocked", "Nouveau badge débloqué !"),
    ("badgeEarned", "Vous avez obtenu le badge {badgeName} !"),
    ("settings", "Paramètres"),
    ("language", "Langue"),
    ("signIn", "Se connecter"),
];

const ARABIC: &[(&str, &str)] = &[
    ("appSubtitle", "قروضك الطلابية في لمحة"),
    ("dashboard", "لوحة التحكم"),
    ("loans", "القروض"),
    ("budget", "الميزانية"),
    ("dailyAnalysis", "التحليل اليومي"),
    ("learn", "تعلّم"),
    ("aiAdvisor", "المستشار الذكي"),
    ("notifications", "الإشعارات"),
    ("markAllRead", "تعليم الكل كمقروء"),
    ("noNotifications", "لا توجد إشعارات"),
    ("welcomeTitle", "أهلاً بك!"),
    ("welcomeMsg", "ابدأ بتتبع قروضك اليوم."),
    ("tipTitle", "نصيحة"),
    ("tipMsg", "جرّب المحاكي اليومي لتوفير المال."),
    ("badgeUnlocked", "تم فتح شارة جديدة!"),
    ("badgeEarned", "لقد حصلت على شارة {badgeName}!"),
    ("settings", "الإعدادات"),
    ("language", "اللغة"),
    ("signIn", "تسجيل الدخول"),
];

const TURKISH: &[(&str, &str)] = &[
    ("dashboard", "Gösterge paneli"),
    ("loans", "Krediler"),
    ("budget", "Bütçe"),
    ("dailyAnalysis", "Günlük analiz"),
    ("learn", "Öğren"),
    ("aiAdvisor", "Yapay zekâ danışmanı"),
    ("notifications", "Bildirimler"),
    ("markAllRead", "Tümünü okundu işaretle"),
    ("noNotifications", "Bildirim yok"),
    ("welcomeTitle", "Hoş geldin!"),
    ("welcomeMsg", "Kredilerini bugün takip etmeye başla."),
    ("tipTitle", "İpucu"),
    ("tipMsg", "Para biriktirmek için günlük simülatörü dene."),
    ("badgeUnlocked", "Yeni rozet açıldı!"),
    ("badgeEarned", "{badgeName} rozetini kazandın!"),
    ("language", "Dil"),
];

const MANDARIN: &[(&str, &str)] = &[
    ("dashboard", "仪表盘"),
    ("loans", "贷款"),
    ("budget", "预算"),
    ("dailyAnalysis", "每日分析"),
    ("learn", "学习"),
    ("aiAdvisor", "AI 顾问"),
    ("notifications", "通知"),
    ("markAllRead", "全部标为已读"),
    ("welcomeTitle", "欢迎！"),
    ("welcomeMsg", "今天就开始跟踪你的贷款吧。"),
    ("badgeUnlocked", "解锁新徽章！"),
    ("badgeEarned", "你获得了 {badgeName} 徽章！"),
];

const HINDI: &[(&str, &str)] = &[
    ("dashboard", "डैशबोर्ड"),
    ("loans", "ऋण"),
    ("budget", "बजट"),
    ("dailyAnalysis", "दैनिक विश्लेषण"),
    ("learn", "सीखें"),
    ("aiAdvisor", "एआई सलाहकार"),
    ("notifications", "सूचनाएं"),
    ("welcomeTitle", "स्वागत है!"),
    ("welcomeMsg", "आज ही अपने ऋणों पर नज़र रखना शुरू करें।"),
];

const BENGALI: &[(&str, &str)] = &[
    ("dashboard", "ড্যাশবোর্ড"),
    ("loans", "ঋণ"),
    ("budget", "বাজেট"),
    ("dailyAnalysis", "দৈনিক বিশ্লেষণ"),
    ("learn", "শিখুন"),
    ("aiAdvisor", "এআই পরামর্শদাতা"),
    ("notifications", "বিজ্ঞপ্তি"),
    ("welcomeTitle", "স্বাগতম!"),
    ("welcomeMsg", "আজ থেকেই আপনার ঋণ ট্র্যাক করা শুরু করুন।"),
];

const PORTUGUESE: &[(&str, &str)] = &[
    ("dashboard", "Painel"),
    ("loans", "Empréstimos"),
    ("budget", "Orçamento"),
    ("dailyAnalysis", "Análise diária"),
    ("learn", "Aprender"),
    ("aiAdvisor", "Conselheiro IA"),
    ("notifications", "Notificações"),
    ("markAllRead", "Marcar tudo como lido"),
    ("welcomeTitle", "Bem-vindo!"),
    ("welcomeMsg", "Comece a acompanhar seus empréstimos hoje."),
    ("badgeEarned", "Você ganhou o emblema {badgeName}!"),
];

const RUSSIAN: &[(&str, &str)] = &[
    ("dashboard", "Панель"),
    ("loans", "Кредиты"),
    ("budget", "Бюджет"),
    ("dailyAnalysis", "Ежедневный анализ"),
    ("learn", "Обучение"),
    ("aiAdvisor", "ИИ-советник"),
    ("notifications", "Уведомления"),
    ("markAllRead", "Отметить все как прочитанные"),
    ("welcomeTitle", "Добро пожаловать!"),
    ("welcomeMsg", "Начните отслеживать свои кредиты уже сегодня."),
    ("badgeEarned", "Вы получили значок {badgeName}!"),
];

const INDONESIAN: &[(&str, &str)] = &[
    ("dashboard", "Dasbor"),
    ("loans", "Pinjaman"),
    ("budget", "Anggaran"),
    ("dailyAnalysis", "Analisis harian"),
    ("learn", "Belajar"),
    ("aiAdvisor", "Penasihat AI"),
    ("notifications", "Notifikasi"),
    ("markAllRead", "Tandai semua dibaca"),
    ("welcomeTitle", "Selamat datang!"),
    ("welcomeMsg", "Mulai lacak pinjamanmu hari ini."),
];

const AZERBAIJANI: &[(&str, &str)] = &[
    ("dashboard", "İdarə paneli"),
    ("loans", "Kreditlər"),
    ("budget", "Büdcə"),
    ("dailyAnalysis", "Gündəlik təhlil"),
    ("learn", "Öyrən"),
    ("aiAdvisor", "Sİ məsləhətçisi"),
    ("notifications", "Bildirişlər"),
    ("welcomeTitle", "Xoş gəldin!"),
    ("welcomeMsg", "Kreditlərini bu gündən izləməyə başla."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_arabic_is_rtl() {
        for lang in Language::ALL {
            assert_eq!(lang.is_rtl(), lang == Language::Arabic);
        }
    }

    #[test]
    fn from_code_round_trips_all_languages() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("Klingon"), None);
    }

    #[test]
    fn lookup_misses_without_english_fallback() {
        // Hindi has no "markAllRead" entry; lookup must not fall back.
        assert_eq!(lookup(Language::Hindi, "markAllRead"), None);
        assert_eq!(text(Language::Hindi, "markAllRead"), "Mark all read");
    }

    #[test]
    fn text_falls_back_to_key_for_unknown_keys() {
        assert_eq!(text(Language::English, "doesNotExist"), "doesNotExist");
    }

    #[test]
    fn apply_params_substitutes_single_parameter() {
        let out = apply_params(
            "You earned the {badgeName} badge!",
            &[("badgeName".to_string(), "Saver".to_string())],
        );
        assert_eq!(out, "You earned the Saver badge!");
    }

    #[test]
    fn apply_params_handles_repeats_and_multiple_parameters() {
        let out = apply_params(
            "{a} and {b}, then {a} again",
            &[
                ("a".to_string(), "one".to_string()),
                ("b".to_string(), "two".to_string()),
            ],
        );
        assert_eq!(out, "one and two, then one again");
    }

    #[test]
    fn apply_params_leaves_unknown_placeholders_alone() {
        let out = apply_params("{known} {unknown}", &[("known".to_string(), "x".to_string())]);
        assert_eq!(out, "x {unknown}");
    }

    #[test]
    fn every_translated_key_exists_in_english() {
        // Catches key typos in the partial tables.
        for lang in Language::ALL {
            for (key, _) in table(lang) {
                assert!(
                    lookup(Language::English, key).is_some(),
                    "{} table has key {key} missing from English",
                    lang.code()
                );
            }
        }
    }
}
