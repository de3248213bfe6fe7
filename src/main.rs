use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use edufinance::advisor::generate_advice;
use edufinance::finance::{daily_interest_cost, monthly_payment, total_interest, FinancialStats};
use edufinance::gui;
use edufinance::i18n::Language;
use edufinance::models::Student;
use edufinance::roster::{load_roster, save_roster};
use edufinance::settings::{
    default_base_path, ensure_base_folders, load_or_init_settings, save_settings, Settings,
};
use edufinance::state::{AppState, NotificationField};

#[derive(Parser, Debug)]
#[command(
    name = "edufinance",
    version,
    about = "EduFinance Tracker - student loan dashboard, planner, and simulator"
)]
struct CliArgs {
    /// Choose GUI (default) or CLI mode
    #[arg(long, value_enum, default_value = "gui")]
    mode: RunMode,
    /// Override data base path (defaults to ./data next to the exe)
    #[arg(long)]
    base_path: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RunMode {
    Gui,
    Cli,
}

fn main() {
    let args = CliArgs::parse();
    let base_path = args.base_path.unwrap_or_else(default_base_path);

    if let Err(e) = ensure_base_folders(&base_path) {
        eprintln!(
            "Failed to create base folders at {}: {}",
            base_path.display(),
            e
        );
        return;
    }

    let mut settings = match load_or_init_settings(&base_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            return;
        }
    };

    println!("Using data path: {}", base_path.display());

    settings.base_path = base_path.to_string_lossy().to_string();
    settings.mode = match args.mode {
        RunMode::Gui => "gui".to_string(),
        RunMode::Cli => "cli".to_string(),
    };

    // Record mode/base-path now; the GUI saves its own preference changes.
    if let Err(e) = save_settings(&settings, &base_path) {
        eprintln!("Could not save settings: {}", e);
    }

    match args.mode {
        RunMode::Gui => {
            if let Err(e) = gui::launch_gui(base_path.clone(), settings.clone()) {
                eprintln!("Failed to start GUI: {}", e);
            }
        }
        RunMode::Cli => {
            run_cli(&mut settings, &base_path);
            if let Err(e) = save_settings(&settings, &base_path) {
                eprintln!("Could not save settings: {}", e);
            }
        }
    }
}

fn run_cli(settings: &mut Settings, base_path: &Path) {
    let language = settings
        .ui
        .last_language
        .as_deref()
        .and_then(Language::from_code)
        .unwrap_or(Language::English);
    let mut state = AppState::seeded(
        language,
        settings.sim.interest_rate,
        settings.sim.loan_term_years,
    );
    state.login();

    println!("EduFinance Tracker CLI");
    println!("Base path: {}", base_path.display());
    println!("Type 'help' for commands, 'exit' to quit.\n");

    loop {
        print!(
            "[{} | {:.1}% / {}y] > ",
            state.language.code(),
            state.interest_rate,
            state.loan_term_years
        );
        io::stdout().flush().ok();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Exiting.");
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") {
            println!("Goodbye");
            break;
        }

        if input.eq_ignore_ascii_case("help") {
            print_help();
            continue;
        }

        if input.eq_ignore_ascii_case("students") {
            for s in &state.students {
                println!(
                    "  {} - {} ({}) salary {:.2}/mo, loan {:.2}",
                    s.id, s.name, s.major, s.monthly_salary, s.total_loan
                );
            }
            continue;
        }

        if input.eq_ignore_ascii_case("add") {
            let name = prompt("Name", "New Student").unwrap_or_default();
            let major = prompt("Major", "General").unwrap_or_default();
            let salary = prompt("Monthly salary", "0")
                .unwrap_or_default()
                .parse()
                .unwrap_or(0.0);
            let loan = prompt("Total loan", "0")
                .unwrap_or_default()
                .parse()
                .unwrap_or(0.0);
            let id = state.next_id("student");
            state.add_student(Student {
                id: id.clone(),
                name,
                major,
                monthly_salary: salary,
                total_loan: loan,
            });
            println!("Added student {id}");
            continue;
        }

        if let Some(id) = input.strip_prefix("delete ") {
            let before = state.students.len();
            state.delete_student(id.trim());
            if state.students.len() == before {
                println!("No student with id {}", id.trim());
            } else {
                println!("Deleted {}", id.trim());
            }
            continue;
        }

        if input.eq_ignore_ascii_case("stats") {
            let stats = FinancialStats::compute(&state.students);
            println!("  Students:        {}", stats.total_students);
            println!("  Average salary:  {:.2}", stats.average_salary);
            println!("  Total loans:     {:.2}", stats.total_loans);
            println!("  Average loan:    {:.2}", stats.average_loan);
            println!(
                "  Debt-to-income:  {:.0}%",
                stats.debt_to_income_ratio * 100.0
            );
            continue;
        }

        if let Some(id) = input.strip_prefix("simulate ") {
            let id = id.trim();
            match state.students.iter().find(|s| s.id == id) {
                Some(s) => {
                    let payment =
                        monthly_payment(s.total_loan, state.interest_rate, state.loan_term_years);
                    let interest =
                        total_interest(s.total_loan, state.interest_rate, state.loan_term_years);
                    let daily = daily_interest_cost(s.total_loan, state.interest_rate);
                    println!(
                        "  {}: {:.2}/month over {} years, {:.2} total interest, {:.2}/day",
                        s.name, payment, state.loan_term_years, interest, daily
                    );
                }
                None => println!("No student with id {id}"),
            }
            continue;
        }

        if let Some(value) = input.strip_prefix("rate ") {
            match value.trim().parse() {
                Ok(rate) => state.set_interest_rate(rate),
                Err(_) => println!("Usage: rate <percent>"),
            }
            continue;
        }

        if let Some(value) = input.strip_prefix("term ") {
            match value.trim().parse() {
                Ok(years) => state.set_loan_term_years(years),
                Err(_) => println!("Usage: term <years>"),
            }
            continue;
        }

        if let Some(code) = input.strip_prefix("lang ") {
            match Language::from_code(code) {
                Some(lang) => {
                    state.set_language(lang);
                    println!(
                        "Language set to {} ({})",
                        lang.code(),
                        if lang.is_rtl() { "RTL" } else { "LTR" }
                    );
                }
                None => println!("Unknown language code: {}", code.trim()),
            }
            continue;
        }

        if input.eq_ignore_ascii_case("notices") {
            if state.notifications.is_empty() {
                println!("No notifications");
            }
            for n in &state.notifications {
                println!(
                    "  [{}] {} - {} ({})",
                    if n.read { " " } else { "*" },
                    state.notification_text(n, NotificationField::Title),
                    state.notification_text(n, NotificationField::Message),
                    n.time
                );
            }
            continue;
        }

        if input.eq_ignore_ascii_case("read") {
            state.mark_all_notifications_read();
            println!("All notifications marked read");
            continue;
        }

        if input.eq_ignore_ascii_case("advice") {
            let text = generate_advice(
                &state.students,
                state.interest_rate,
                state.loan_term_years,
                state.language,
            );
            println!("{text}\n");
            continue;
        }

        if let Some(path) = input.strip_prefix("export ") {
            match save_roster(Path::new(path.trim()), &state.students) {
                Ok(()) => println!("Wrote roster to {}", path.trim()),
                Err(e) => println!("Failed to write roster: {}", e),
            }
            continue;
        }

        if let Some(path) = input.strip_prefix("import ") {
            match load_roster(Path::new(path.trim())) {
                Ok(students) => {
                    println!("Imported {} students", students.len());
                    state.replace_students(students);
                }
                Err(e) => println!("Failed to read roster: {}", e),
            }
            continue;
        }

        println!("Unknown command. Type 'help' for the list.");
    }

    settings.ui.last_language = Some(state.language.code().to_string());
    settings.sim.interest_rate = state.interest_rate;
    settings.sim.loan_term_years = state.loan_term_years;
}

fn print_help() {
    println!("Commands:");
    println!("  students          list the roster");
    println!("  add               add a student (interactive)");
    println!("  delete <id>       remove a student");
    println!("  stats             roster aggregates");
    println!("  simulate <id>     payment simulation for one student");
    println!("  rate <percent>    set the shared interest rate");
    println!("  term <years>      set the shared loan term");
    println!("  lang <code>       switch language (e.g. 'lang Arabic')");
    println!("  notices           show notifications");
    println!("  read              mark all notifications read");
    println!("  advice            print advisor output");
    println!("  export <path>     write the roster to a JSON file");
    println!("  import <path>     replace the roster from a JSON file");
    println!("  exit");
}

fn prompt(label: &str, default: &str) -> io::Result<String> {
    if default.is_empty() {
        print!("{label}: ");
    } else {
        print!("{label} [{default}]: ");
    }
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let trimmed = input.trim();
    Ok(if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    })
}
