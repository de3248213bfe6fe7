use crate::advisor::generate_advice;
use crate::finance::{
    self, daily_interest_cost, monthly_payment, payoff_schedule, total_interest, FinancialStats,
};
use crate::i18n::Language;
use crate::models::{Badge, Expense, NotificationKind, SavingsGoal, Student};
use crate::roster::{load_roster, save_roster};
use crate::settings::{save_settings, Settings};
use crate::state::{AppState, NotificationField, View};
use crate::theme::{
    apply_theme, ensure_theme_files, load_presets, load_theme, parse_color, ThemeConfig,
};
use eframe::{
    egui::{
        self, Align, Align2, CentralPanel, Color32, Context, Layout, ProgressBar, RichText,
        Rounding, ScrollArea, TopBottomPanel,
    },
    App, CreationContext,
};
use rfd::FileDialog;
use std::path::PathBuf;

struct Lesson {
    badge_id: &'static str,
    title: &'static str,
    summary: &'static str,
    badge_name: &'static str,
    badge_icon: &'static str,
    badge_description: &'static str,
}

const LESSONS: &[Lesson] = &[
    Lesson {
        badge_id: "interest-basics",
        title: "How interest accrues",
        summary: "Interest is charged on the outstanding balance every day. The sooner the balance \
                  shrinks, the less the loan costs overall.",
        badge_name: "First Steps",
        badge_icon: "\u{1F393}",
        badge_description: "Finished the interest basics lesson",
    },
    Lesson {
        badge_id: "budget-basics",
        title: "Build a monthly budget",
        summary: "List fixed costs first, then flexible spending. What remains is what you can put \
                  toward loans and savings.",
        badge_name: "Budgeter",
        badge_icon: "\u{1F9EE}",
        badge_description: "Built a first monthly budget",
    },
    Lesson {
        badge_id: "pay-yourself-first",
        title: "Pay yourself first",
        summary: "Moving savings out on payday, before spending, beats saving whatever is left at \
                  the end of the month.",
        badge_name: "Saver",
        badge_icon: "\u{1F3E6}",
        badge_description: "Learned the pay-yourself-first rule",
    },
    Lesson {
        badge_id: "rate-reading",
        title: "Reading interest rates",
        summary: "A single percentage point changes the monthly payment less than you'd think, but \
                  the total interest a lot. Try it in the Daily Analysis tab.",
        badge_name: "Rate Watcher",
        badge_icon: "\u{1F4C8}",
        badge_description: "Compared loan rates in the simulator",
    },
];

#[derive(Debug, Clone, Default)]
struct StudentForm {
    name: String,
    major: String,
    monthly_salary: String,
    total_loan: String,
}

#[derive(Debug, Clone, Default)]
struct ExpenseForm {
    category: String,
    name: String,
    amount: String,
}

#[derive(Debug, Clone)]
struct GoalForm {
    title: String,
    target_amount: String,
    current_amount: String,
    color: String,
}

impl Default for GoalForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            target_amount: String::new(),
            current_amount: String::new(),
            color: "#34d399".to_string(),
        }
    }
}

fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn fmt_money(value: f64) -> String {
    format!("${value:.2}")
}

pub struct TrackerApp {
    state: AppState,
    settings: Settings,
    base_path: PathBuf,
    theme: ThemeConfig,
    presets: Vec<ThemeConfig>,
    show_settings: bool,
    student_form: StudentForm,
    editing_student: Option<String>,
    expense_form: ExpenseForm,
    goal_form: GoalForm,
    sim_student: Option<String>,
    advice: Option<String>,
    file_status: Option<String>,
}

impl TrackerApp {
    pub fn new(cc: &CreationContext<'_>, base_path: PathBuf, settings: Settings) -> Self {
        if let Err(err) = ensure_theme_files(&base_path) {
            eprintln!("[theme] Could not write theme presets: {err}");
        }
        let presets = load_presets(&base_path);
        let theme = load_theme(&base_path, settings.ui.last_theme.as_deref());
        apply_theme(&theme, &cc.egui_ctx);

        let language = settings
            .ui
            .last_language
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or(Language::English);
        let state = AppState::seeded(
            language,
            settings.sim.interest_rate,
            settings.sim.loan_term_years,
        );

        Self {
            state,
            settings,
            base_path,
            theme,
            presets,
            show_settings: false,
            student_form: StudentForm::default(),
            editing_student: None,
            expense_form: ExpenseForm::default(),
            goal_form: GoalForm::default(),
            sim_student: None,
            advice: None,
            file_status: None,
        }
    }

    fn tr(&self, key: &'static str) -> &'static str {
        crate::i18n::text(self.state.language, key)
    }

    fn accent(&self) -> Color32 {
        parse_color(&self.theme.accent)
    }

    fn muted(&self) -> Color32 {
        parse_color(&self.theme.muted_text)
    }

    fn kind_color(&self, kind: NotificationKind) -> Color32 {
        match kind {
            NotificationKind::Info => parse_color(&self.theme.accent),
            NotificationKind::Warning => parse_color(&self.theme.warning),
            NotificationKind::Success => parse_color(&self.theme.success),
        }
    }

    fn header_layout(&self) -> Layout {
        if self.state.is_rtl() {
            Layout::right_to_left(Align::Center)
        } else {
            Layout::left_to_right(Align::Center)
        }
    }

    fn switch_theme(&mut self, name: &str, ctx: &Context) {
        self.theme = load_theme(&self.base_path, Some(name));
        apply_theme(&self.theme, ctx);
        self.settings.ui.last_theme = Some(self.theme.name.clone());
        if let Err(err) = save_settings(&self.settings, &self.base_path) {
            eprintln!("[settings] Could not save theme choice: {err}");
        }
    }

    fn switch_language(&mut self, language: Language) {
        self.state.set_language(language);
        self.settings.ui.last_language = Some(language.code().to_string());
        if let Err(err) = save_settings(&self.settings, &self.base_path) {
            eprintln!("[settings] Could not save language choice: {err}");
        }
    }

    fn render_login(&mut self, ui: &mut egui::Ui) {
        ui.add_space(ui.available_height() * 0.25);
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new(self.tr("appTitle")).color(self.accent()));
            ui.label(RichText::new(self.tr("appSubtitle")).color(self.muted()));
            ui.add_space(8.0);
            ui.label(self.tr("loginPrompt"));
            ui.add_space(12.0);

            let mut chosen: Option<Language> = None;
            egui::ComboBox::from_id_source("login_language")
                .selected_text(self.state.language.native_label())
                .show_ui(ui, |ui| {
                    for lang in Language::ALL {
                        if ui
                            .selectable_label(self.state.language == lang, lang.native_label())
                            .clicked()
                        {
                            chosen = Some(lang);
                        }
                    }
                });
            if let Some(lang) = chosen {
                self.switch_language(lang);
            }

            ui.add_space(12.0);
            if ui.button(RichText::new(self.tr("signIn")).strong()).clicked() {
                self.state.login();
            }
        });
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        let layout = self.header_layout();
        ui.with_layout(layout, |ui| {
            ui.heading(RichText::new(self.tr("appTitle")).color(self.accent()));
            ui.label(RichText::new(self.tr("appSubtitle")).small().color(self.muted()));
            ui.separator();

            let unread = self.state.unread_count();
            let bell = if unread > 0 {
                format!("\u{1F514} {unread}")
            } else {
                "\u{1F514}".to_string()
            };
            if ui.button(bell).clicked() {
                self.state.toggle_notification_panel();
            }

            for view in View::ALL {
                let active = self.state.view == view;
                if ui.selectable_label(active, self.tr(view.label_key())).clicked() {
                    self.state.view = view;
                }
            }

            if ui.button("\u{2699}").clicked() {
                self.show_settings = !self.show_settings;
            }
        });
    }

    fn render_notification_feed(&mut self, ctx: &Context) {
        egui::Window::new(self.tr("notifications"))
            .anchor(Align2::RIGHT_TOP, [-10.0, 48.0])
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                if ui.small_button(self.tr("markAllRead")).clicked() {
                    self.state.mark_all_notifications_read();
                }
                ui.separator();

                if self.state.notifications.is_empty() {
                    ui.label(RichText::new(self.tr("noNotifications")).color(self.muted()));
                    return;
                }

                let notes = self.state.notifications.clone();
                ScrollArea::vertical().max_height(280.0).show(ui, |ui| {
                    for note in &notes {
                        ui.horizontal(|ui| {
                            if !note.read {
                                ui.colored_label(self.accent(), "\u{25CF}");
                            }
                            ui.colored_label(
                                self.kind_color(note.kind),
                                RichText::new(
                                    self.state.notification_text(note, NotificationField::Title),
                                )
                                .strong(),
                            );
                            ui.label(RichText::new(&note.time).small().color(self.muted()));
                        });
                        ui.label(self.state.notification_text(note, NotificationField::Message));
                        ui.separator();
                    }
                });
            });
    }

    fn stat_tile(&self, ui: &mut egui::Ui, label: &str, value: String) {
        egui::Frame::none()
            .fill(parse_color(&self.theme.surface))
            .stroke(egui::Stroke {
                width: 1.0,
                color: parse_color(&self.theme.border),
            })
            .rounding(Rounding::same(self.theme.radius))
            .inner_margin(egui::vec2(12.0, 10.0))
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(label).small().color(self.muted()));
                    ui.label(
                        RichText::new(value)
                            .strong()
                            .size(self.theme.font_size_base + 5.0),
                    );
                });
            });
    }

    fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr("dashboard"));
        ui.add_space(6.0);

        let stats = FinancialStats::compute(&self.state.students);
        ui.horizontal_wrapped(|ui| {
            self.stat_tile(ui, self.tr("totalStudents"), stats.total_students.to_string());
            self.stat_tile(ui, self.tr("averageSalary"), fmt_money(stats.average_salary));
            self.stat_tile(ui, self.tr("totalLoans"), fmt_money(stats.total_loans));
            self.stat_tile(ui, self.tr("averageLoan"), fmt_money(stats.average_loan));
            self.stat_tile(
                ui,
                self.tr("debtToIncome"),
                format!("{:.0}%", stats.debt_to_income_ratio * 100.0),
            );
        });

        ui.separator();
        ui.label(RichText::new(self.tr("roster")).strong());
        for student in &self.state.students {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&student.name).strong());
                ui.label(RichText::new(&student.major).color(self.muted()));
                ui.label(format!(
                    "{}: {}",
                    self.tr("monthlySalary"),
                    fmt_money(student.monthly_salary)
                ));
                ui.label(format!(
                    "{}: {}",
                    self.tr("totalLoan"),
                    fmt_money(student.total_loan)
                ));
            });
        }
    }

    fn render_manage(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr("loans"));
        ui.add_space(6.0);

        let editing = self.editing_student.is_some();
        ui.label(
            RichText::new(if editing {
                self.tr("editStudent")
            } else {
                self.tr("addStudent")
            })
            .strong(),
        );
        ui.horizontal(|ui| {
            ui.label(self.tr("name"));
            ui.text_edit_singleline(&mut self.student_form.name);
            ui.label(self.tr("major"));
            ui.text_edit_singleline(&mut self.student_form.major);
        });
        ui.horizontal(|ui| {
            ui.label(self.tr("monthlySalary"));
            ui.text_edit_singleline(&mut self.student_form.monthly_salary);
            ui.label(self.tr("totalLoan"));
            ui.text_edit_singleline(&mut self.student_form.total_loan);
        });
        ui.horizontal(|ui| {
            if ui.button(self.tr("save")).clicked() {
                let id = match self.editing_student.take() {
                    Some(id) => id,
                    None => self.state.next_id("student"),
                };
                let student = Student {
                    id: id.clone(),
                    name: self.student_form.name.trim().to_string(),
                    major: self.student_form.major.trim().to_string(),
                    monthly_salary: parse_amount(&self.student_form.monthly_salary),
                    total_loan: parse_amount(&self.student_form.total_loan),
                };
                if editing {
                    self.state.update_student(student);
                } else {
                    self.state.add_student(student);
                }
                self.student_form = StudentForm::default();
            }
            if editing && ui.button(self.tr("cancel")).clicked() {
                self.editing_student = None;
                self.student_form = StudentForm::default();
            }
        });

        ui.separator();
        let students = self.state.students.clone();
        let mut to_delete: Option<String> = None;
        let mut to_edit: Option<Student> = None;
        for student in &students {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&student.name).strong());
                ui.label(RichText::new(&student.major).color(self.muted()));
                ui.label(fmt_money(student.monthly_salary));
                ui.label(fmt_money(student.total_loan));
                if ui.small_button(self.tr("edit")).clicked() {
                    to_edit = Some(student.clone());
                }
                if ui.small_button(self.tr("delete")).clicked() {
                    to_delete = Some(student.id.clone());
                }
            });
        }
        if let Some(student) = to_edit {
            self.student_form = StudentForm {
                name: student.name.clone(),
                major: student.major.clone(),
                monthly_salary: student.monthly_salary.to_string(),
                total_loan: student.total_loan.to_string(),
            };
            self.editing_student = Some(student.id);
        }
        if let Some(id) = to_delete {
            self.state.delete_student(&id);
            if self.editing_student.as_deref() == Some(id.as_str()) {
                self.editing_student = None;
                self.student_form = StudentForm::default();
            }
        }
    }

    fn render_budget(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr("budget"));
        ui.add_space(6.0);

        ui.label(RichText::new(self.tr("expenses")).strong());
        ui.horizontal(|ui| {
            ui.label(self.tr("category"));
            ui.text_edit_singleline(&mut self.expense_form.category);
            ui.label(self.tr("name"));
            ui.text_edit_singleline(&mut self.expense_form.name);
            ui.label(self.tr("amount"));
            ui.text_edit_singleline(&mut self.expense_form.amount);
            if ui.button(self.tr("addExpense")).clicked() {
                let expense = Expense {
                    id: self.state.next_id("expense"),
                    category: self.expense_form.category.trim().to_string(),
                    name: self.expense_form.name.trim().to_string(),
                    amount: parse_amount(&self.expense_form.amount),
                };
                self.state.add_expense(expense);
                self.expense_form = ExpenseForm::default();
            }
        });

        for expense in &self.state.expenses {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&expense.category).color(self.muted()));
                ui.label(&expense.name);
                ui.label(fmt_money(expense.amount));
            });
        }

        let total = finance::total_expenses(&self.state.expenses);
        if total > 0.0 {
            ui.label(format!("{}: {}", self.tr("totalSpent"), fmt_money(total)));
            ui.label(RichText::new(self.tr("byCategory")).strong());
            for (category, sum) in finance::expenses_by_category(&self.state.expenses) {
                ui.horizontal(|ui| {
                    ui.label(category);
                    ui.add(
                        ProgressBar::new((sum / total) as f32)
                            .fill(self.accent())
                            .text(fmt_money(sum)),
                    );
                });
            }
        }

        ui.separator();
        ui.label(RichText::new(self.tr("savingsGoals")).strong());
        ui.horizontal(|ui| {
            ui.label(self.tr("goalTitle"));
            ui.text_edit_singleline(&mut self.goal_form.title);
            ui.label(self.tr("targetAmount"));
            ui.text_edit_singleline(&mut self.goal_form.target_amount);
            ui.label(self.tr("currentAmount"));
            ui.text_edit_singleline(&mut self.goal_form.current_amount);
            if ui.button(self.tr("addGoal")).clicked() {
                let goal = SavingsGoal {
                    id: self.state.next_id("goal"),
                    title: self.goal_form.title.trim().to_string(),
                    target_amount: parse_amount(&self.goal_form.target_amount),
                    current_amount: parse_amount(&self.goal_form.current_amount),
                    color: self.goal_form.color.clone(),
                };
                self.state.add_goal(goal);
                self.goal_form = GoalForm::default();
            }
        });

        for goal in &self.state.goals {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&goal.title).strong());
                ui.add(
                    ProgressBar::new(finance::goal_progress(goal))
                        .fill(parse_color(&goal.color))
                        .text(format!(
                            "{} / {}",
                            fmt_money(goal.current_amount),
                            fmt_money(goal.target_amount)
                        )),
                );
            });
        }
    }

    fn render_daily(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr("dailyAnalysis"));
        ui.add_space(6.0);

        let mut rate = self.state.interest_rate;
        if ui
            .add(egui::Slider::new(&mut rate, 0.0..=20.0).text(self.tr("interestRate")))
            .changed()
        {
            self.state.set_interest_rate(rate);
        }
        let mut years = self.state.loan_term_years;
        if ui
            .add(egui::Slider::new(&mut years, 1..=30).text(self.tr("loanTermYears")))
            .changed()
        {
            self.state.set_loan_term_years(years);
        }

        ui.separator();
        let rate = self.state.interest_rate;
        let years = self.state.loan_term_years;
        for student in &self.state.students {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&student.name).strong());
                ui.label(format!(
                    "{}: {}",
                    self.tr("monthlyPayment"),
                    fmt_money(monthly_payment(student.total_loan, rate, years))
                ));
                ui.label(format!(
                    "{}: {}",
                    self.tr("dailyCost"),
                    fmt_money(daily_interest_cost(student.total_loan, rate))
                ));
                ui.label(format!(
                    "{}: {}",
                    self.tr("totalInterest"),
                    fmt_money(total_interest(student.total_loan, rate, years))
                ));
            });
        }

        ui.separator();
        ui.label(RichText::new(self.tr("payoffSchedule")).strong());
        if self.sim_student.is_none() {
            self.sim_student = self.state.students.first().map(|s| s.id.clone());
        }
        let selected_name = self
            .sim_student
            .as_ref()
            .and_then(|id| self.state.students.iter().find(|s| &s.id == id))
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "-".to_string());
        let students = self.state.students.clone();
        egui::ComboBox::from_id_source("sim_student_select")
            .selected_text(selected_name)
            .show_ui(ui, |ui| {
                for s in &students {
                    if ui
                        .selectable_label(self.sim_student.as_ref() == Some(&s.id), &s.name)
                        .clicked()
                    {
                        self.sim_student = Some(s.id.clone());
                    }
                }
            });

        if let Some(student) = self
            .sim_student
            .as_ref()
            .and_then(|id| self.state.students.iter().find(|s| &s.id == id))
        {
            let rows = payoff_schedule(student.total_loan, rate, years);
            ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                // Year-end snapshots keep the table readable.
                for row in rows.iter().filter(|r| r.month % 12 == 0) {
                    ui.horizontal(|ui| {
                        ui.label(format!("{} {}", self.tr("month"), row.month));
                        ui.label(format!(
                            "{}: {}",
                            self.tr("balance"),
                            fmt_money(row.balance)
                        ));
                    });
                }
            });
        }
    }

    fn render_learn(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr("learn"));
        ui.add_space(6.0);

        ui.label(RichText::new(self.tr("lessons")).strong());
        for lesson in LESSONS {
            let earned = self.state.has_badge(lesson.badge_id);
            ui.horizontal(|ui| {
                ui.label(lesson.badge_icon);
                ui.vertical(|ui| {
                    ui.label(RichText::new(lesson.title).strong());
                    ui.label(RichText::new(lesson.summary).color(self.muted()));
                });
                if earned {
                    ui.colored_label(
                        self.kind_color(NotificationKind::Success),
                        format!("{} \u{2713}", self.tr("completed")),
                    );
                } else if ui.button(self.tr("markComplete")).clicked() {
                    self.state.earn_badge(Badge {
                        id: lesson.badge_id.to_string(),
                        name: lesson.badge_name.to_string(),
                        icon: lesson.badge_icon.to_string(),
                        description: lesson.badge_description.to_string(),
                        unlocked: true,
                    });
                }
            });
            ui.separator();
        }

        ui.label(RichText::new(self.tr("earnedBadges")).strong());
        if self.state.badges.is_empty() {
            ui.label(RichText::new("-").color(self.muted()));
        } else {
            ui.horizontal_wrapped(|ui| {
                for badge in &self.state.badges {
                    ui.label(format!("{} {}", badge.icon, badge.name))
                        .on_hover_text(&badge.description);
                }
            });
        }
    }

    fn render_insights(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr("aiAdvisor"));
        ui.add_space(6.0);

        if ui.button(self.tr("regenerate")).clicked() || self.advice.is_none() {
            self.advice = Some(generate_advice(
                &self.state.students,
                self.state.interest_rate,
                self.state.loan_term_years,
                self.state.language,
            ));
        }

        if let Some(advice) = self.advice.clone() {
            egui::Frame::none()
                .fill(parse_color(&self.theme.surface))
                .stroke(egui::Stroke {
                    width: 1.0,
                    color: self.accent(),
                })
                .rounding(Rounding::same(self.theme.radius))
                .inner_margin(egui::vec2(12.0, 10.0))
                .show(ui, |ui| {
                    for (i, line) in advice.lines().enumerate() {
                        if i == 0 {
                            ui.label(RichText::new(line).strong().color(self.accent()));
                        } else {
                            ui.label(line);
                        }
                    }
                });
        }
    }

    fn render_settings_window(&mut self, ctx: &Context) {
        let mut open = self.show_settings;
        egui::Window::new(self.tr("settings"))
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(self.tr("language"));
                    let mut chosen: Option<Language> = None;
                    egui::ComboBox::from_id_source("settings_language")
                        .selected_text(self.state.language.native_label())
                        .show_ui(ui, |ui| {
                            for lang in Language::ALL {
                                if ui
                                    .selectable_label(
                                        self.state.language == lang,
                                        lang.native_label(),
                                    )
                                    .clicked()
                                {
                                    chosen = Some(lang);
                                }
                            }
                        });
                    if let Some(lang) = chosen {
                        self.switch_language(lang);
                    }
                });

                ui.horizontal(|ui| {
                    ui.label(self.tr("theme"));
                    let preset_names: Vec<String> =
                        self.presets.iter().map(|p| p.name.clone()).collect();
                    let mut chosen: Option<String> = None;
                    egui::ComboBox::from_id_source("settings_theme")
                        .selected_text(self.theme.name.clone())
                        .show_ui(ui, |ui| {
                            for name in preset_names {
                                if ui
                                    .selectable_label(self.theme.name == name, name.clone())
                                    .clicked()
                                {
                                    chosen = Some(name);
                                }
                            }
                        });
                    if let Some(name) = chosen {
                        self.switch_theme(&name, ctx);
                    }
                });

                ui.separator();
                ui.label(format!(
                    "{}: {:.1}",
                    self.tr("interestRate"),
                    self.state.interest_rate
                ));
                ui.label(format!(
                    "{}: {}",
                    self.tr("loanTermYears"),
                    self.state.loan_term_years
                ));

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button(self.tr("exportRoster")).clicked() {
                        let picked = FileDialog::new()
                            .add_filter("json", &["json"])
                            .set_directory(self.base_path.join("exports"))
                            .set_file_name("roster.json")
                            .save_file();
                        if let Some(path) = picked {
                            self.file_status = match save_roster(&path, &self.state.students) {
                                Ok(()) => Some(format!("Saved {}", path.display())),
                                Err(err) => Some(format!("Export failed: {err}")),
                            };
                        }
                    }
                    if ui.button(self.tr("importRoster")).clicked() {
                        let picked = FileDialog::new().add_filter("json", &["json"]).pick_file();
                        if let Some(path) = picked {
                            match load_roster(&path) {
                                Ok(students) => {
                                    let count = students.len();
                                    self.state.replace_students(students);
                                    self.file_status =
                                        Some(format!("Imported {count} students"));
                                }
                                Err(err) => {
                                    self.file_status = Some(format!("Import failed: {err}"));
                                }
                            }
                        }
                    }
                });
                if let Some(status) = &self.file_status {
                    ui.label(RichText::new(status).color(self.muted()));
                }
            });
        self.show_settings = open;
    }
}

impl App for TrackerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        apply_theme(&self.theme, ctx);

        if !self.state.authenticated {
            CentralPanel::default().show(ctx, |ui| self.render_login(ui));
            return;
        }

        TopBottomPanel::top("header").show(ctx, |ui| self.render_header(ui));

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                match self.state.view {
                    View::Dashboard => self.render_dashboard(ui),
                    View::Manage => self.render_manage(ui),
                    View::Budget => self.render_budget(ui),
                    View::Daily => self.render_daily(ui),
                    View::Learn => self.render_learn(ui),
                    View::Insights => self.render_insights(ui),
                }
            });
        });

        if self.state.show_notifications {
            self.render_notification_feed(ctx);
        }
        if self.show_settings {
            self.render_settings_window(ctx);
        }
    }
}

pub fn launch_gui(base_path: PathBuf, settings: Settings) -> eframe::Result<()> {
    let (width, height) = settings.ui.window_size.unwrap_or((1100.0, 720.0));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("EduFinance Tracker")
            .with_inner_size([width, height])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "EduFinance Tracker",
        native_options,
        Box::new(move |cc| Box::new(TrackerApp::new(cc, base_path, settings))),
    )
}
