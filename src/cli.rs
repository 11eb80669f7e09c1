use std::{env, process};

use colored::{ColoredString, Colorize};
use dialoguer::{theme::ColorfulTheme, Select};

use finsight_core::{
    builtin_catalog,
    config::{ConfigManager, InsightConfig},
    currency::format_amount,
    domain::{Displayable, Language, LocalizedText, Recommendation, Severity},
    init, InsightSession, ProfileDraft, QuizSession, QuizStatus,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });
    let config = ConfigManager::from_env().load()?;
    let rest: Vec<String> = args.collect();
    let language = language_flag(&rest, config.language)?;

    match command.as_str() {
        "report" => report(config, language)?,
        "lessons" => lessons(language),
        "quiz" => {
            let lesson_id = rest
                .iter()
                .find(|arg| !arg.starts_with("--") && Language::parse(arg).is_none())
                .cloned()
                .unwrap_or_else(|| {
                    print_usage();
                    process::exit(1);
                });
            quiz(&config, &lesson_id, language)?;
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn language_flag(args: &[String], fallback: Language) -> Result<Language, String> {
    let Some(position) = args.iter().position(|arg| arg == "--lang") else {
        return Ok(fallback);
    };
    let value = args
        .get(position + 1)
        .ok_or_else(|| "--lang expects `en` or `te`".to_string())?;
    Language::parse(value).ok_or_else(|| format!("unsupported language '{value}'"))
}

fn heading(language: Language, en: &str, te: &str) -> ColoredString {
    let text = LocalizedText::new(en, te);
    format!("=== {} ===", text.get(language)).bold()
}

fn badge(severity: Severity, language: Language) -> ColoredString {
    let label = format!("[{}]", severity.badge(language));
    match severity {
        Severity::Alert => label.red().bold(),
        Severity::Warning => label.yellow().bold(),
        Severity::Success => label.green().bold(),
    }
}

fn report(config: InsightConfig, language: Language) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = InsightSession::with_sample_expenses(config);
    session.complete_onboarding(&ProfileDraft {
        income_range: "20000-40000".into(),
        monthly_expenses: "25000".into(),
        savings_goal: "50000".into(),
        priorities: vec!["Save for emergencies".into(), "Track spending".into()],
    })?;
    let metrics = session.metrics()?;
    let goal = session.goal_status()?;

    println!("{}", heading(language, "Dashboard", "డాష్‌బోర్డ్"));
    let rows = [
        (LocalizedText::new("Income", "ఆదాయం"), format_amount(metrics.income)),
        (
            LocalizedText::new("Total expenses", "మొత్తం ఖర్చులు"),
            format_amount(metrics.total_expenses),
        ),
        (
            LocalizedText::new("Current savings", "ప్రస్తుత పొదుపు"),
            format_amount(metrics.current_savings),
        ),
        (
            LocalizedText::new("Savings rate", "పొదుపు రేటు"),
            metrics.savings_rate.to_string(),
        ),
        (
            LocalizedText::new("Savings goal", "పొదుపు లక్ష్యం"),
            format!("{} ({})", format_amount(metrics.savings_goal), metrics.savings_progress),
        ),
    ];
    for (label, value) in rows {
        println!("{}: {value}", label.get(language));
    }

    println!("{}", heading(language, "Spending by category", "వర్గం వారీగా ఖర్చు"));
    for (category, total) in metrics.category_totals.iter() {
        println!("  {}: {}", category.display_label(language), format_amount(total));
    }

    println!("{}", heading(language, "Recommendations", "సిఫార్సులు"));
    for recommendation in session.recommendations()? {
        print_recommendation(&recommendation, language);
    }

    println!("{}", goal.message(language).italic());
    Ok(())
}

fn print_recommendation(recommendation: &Recommendation, language: Language) {
    println!(
        "{} {}",
        badge(recommendation.severity, language),
        recommendation.title_in(language).bold()
    );
    println!("  {}", recommendation.description_in(language));
}

fn lessons(language: Language) {
    println!("{}", heading(language, "Financial Lessons", "ఆర్థిక పాఠాలు"));
    for lesson in builtin_catalog().lessons() {
        println!(
            "{} {} {} ({})",
            lesson.id,
            lesson.icon,
            lesson.title.get(language),
            lesson.question_count()
        );
    }
}

fn quiz(
    config: &InsightConfig,
    lesson_id: &str,
    language: Language,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = QuizSession::new(builtin_catalog()).with_pass_mark(config.quiz_pass_mark);
    session.start(lesson_id)?;
    let theme = ColorfulTheme::default();

    if let Some(lesson) = session.lesson() {
        let title = &lesson.title;
        println!(
            "{}",
            heading(language, title.get(Language::En), title.get(Language::Te))
        );
        println!("{}\n", lesson.body.get(language));
    }

    while session.status() == QuizStatus::InProgress {
        let Some(question) = session.current_question() else {
            break;
        };
        let index = session.current_index();
        let options: Vec<&str> = question
            .options
            .iter()
            .map(|option| option.get(language))
            .collect();
        let choice = Select::with_theme(&theme)
            .with_prompt(format!("{}. {}", index + 1, question.prompt.get(language)))
            .items(&options)
            .default(0)
            .interact_opt()?;
        let Some(choice) = choice else {
            session.abandon();
            println!("{}", "Quiz abandoned.".yellow());
            return Ok(());
        };
        session.select_answer(index, choice)?;
        session.advance()?;
    }

    let score = session.score()?;
    let summary = format!(
        "{}/{} ({}%)",
        score.correct_count, score.question_count, score.percentage
    );
    if score.passed() {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.yellow().bold());
    }
    if let Some(lesson) = session.lesson() {
        for review in score.review() {
            let Some(question) = lesson.question(review.question_index) else {
                continue;
            };
            let marker = if review.is_correct() { "✓".green() } else { "✗".red() };
            let correct = question
                .option_in(review.correct, language)
                .unwrap_or_default();
            println!("{marker} {} -> {correct}", question.prompt.get(language));
        }
    }
    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage: finsight_cli <command> [--lang en|te]\n\
         Commands:\n  \
         report\n  \
         lessons\n  \
         quiz <lesson-id>"
    );
}
