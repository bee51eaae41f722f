use std::fmt;

use guide_core::catalog;
use guide_core::model::{Place, Profile, ProfileDraft, QuizSession};
use guide_core::share;
use services::{AppServices, QuizLoopService, QuizOutcome, WriteOutcome};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

const DEFAULT_DB_URL: &str = "sqlite://basel_guide.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingArgument { what: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingArgument { what } => write!(f, "missing {what}"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- quizzes                     [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- play <quiz1|quiz2|quiz3>    [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- certificate                 [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- places [--saved]            [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- place <id>                  [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- save <id>                   [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- profile                     [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- profile set --name <n> [--about <a>] [--photo <uri>]");
    eprintln!("  cargo run -p app -- reset                       [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  BASEL_DB_URL, RUST_LOG");
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quizzes,
    Play { quiz: String },
    Certificate,
    Places { saved_only: bool },
    Place { id: String },
    Save { id: String },
    Profile,
    ProfileSet {
        name: String,
        about: Option<String>,
        photo: Option<String>,
    },
    Reset,
}

struct Args {
    db_url: String,
    command: Command,
}

impl Args {
    fn parse(argv: Vec<String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("BASEL_DB_URL")
            .ok()
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);

        let mut positional = Vec::new();
        let mut saved_only = false;
        let mut name = None;
        let mut about = None;
        let mut photo = None;

        let mut args = argv.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--saved" => saved_only = true,
                "--name" => name = Some(require_value(&mut args, "--name")?),
                "--about" => about = Some(require_value(&mut args, "--about")?),
                "--photo" => photo = Some(require_value(&mut args, "--photo")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                flag if flag.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let command = match positional.next().as_deref() {
            None | Some("quizzes") => Command::Quizzes,
            Some("play") => Command::Play {
                quiz: positional
                    .next()
                    .ok_or(ArgsError::MissingArgument { what: "quiz key" })?,
            },
            Some("certificate") => Command::Certificate,
            Some("places") => Command::Places { saved_only },
            Some("place") => Command::Place {
                id: positional
                    .next()
                    .ok_or(ArgsError::MissingArgument { what: "place id" })?,
            },
            Some("save") => Command::Save {
                id: positional
                    .next()
                    .ok_or(ArgsError::MissingArgument { what: "place id" })?,
            },
            Some("profile") => match positional.next().as_deref() {
                None => Command::Profile,
                Some("set") => Command::ProfileSet {
                    name: name.ok_or(ArgsError::MissingValue { flag: "--name" })?,
                    about,
                    photo,
                },
                Some(other) => return Err(ArgsError::UnknownArg(other.to_string())),
            },
            Some("reset") => Command::Reset,
            Some(other) => return Err(ArgsError::UnknownArg(other.to_string())),
        };

        if let Some(extra) = positional.next() {
            return Err(ArgsError::UnknownArg(extra));
        }

        Ok(Self { db_url, command })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn report_write(write: &WriteOutcome) {
    if let WriteOutcome::Dropped(err) = write {
        eprintln!("warning: progress was not saved ({err})");
    }
}

async fn list_quizzes(app: &AppServices) {
    for row in app.overview().quiz_rows().await {
        let status = match (row.unlocked, row.passed) {
            (false, _) => "locked",
            (true, true) => "passed",
            (true, false) => "open",
        };
        println!(
            "{:<6} {:<8} best {:>2}/{:<2}  {}",
            row.id, status, row.best_score, row.total, row.title
        );
    }
}

/// Parse an answer typed as a letter (`A`) or a 1-based number (`1`).
fn parse_choice(input: &str, available: usize) -> Option<usize> {
    let input = input.trim();
    let mut chars = input.chars();
    let (Some(first), None) = (chars.next(), chars.next()) else {
        return input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|idx| *idx < available);
    };
    let idx = match first.to_ascii_uppercase() {
        letter @ 'A'..='Z' => letter as usize - 'A' as usize,
        digit @ '1'..='9' => digit as usize - '1' as usize,
        _ => return None,
    };
    (idx < available).then_some(idx)
}

fn print_outcome(title: &str, outcome: &QuizOutcome) {
    println!();
    println!("{}", share::quiz_result_message(title, &outcome.result));
    report_write(&outcome.write);
    if outcome.all_passed {
        println!("All quizzes passed. Run `certificate` to see your certificate.");
    } else if let Some(next) = outcome.result.quiz_id.next() {
        if outcome.result.perfect_pass && outcome.unlocked.is_unlocked(next) {
            println!("{next} is now unlocked.");
        }
    }
}

async fn play(
    quiz_loop: &QuizLoopService,
    key: &str,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let pack = catalog::quiz_pack_by_key(key);
    if pack.id().as_str() != key.trim() {
        log::warn!("unknown quiz key {key:?}, playing {}", pack.id());
    }

    let started = quiz_loop.start(pack.id()).await?;
    if let Some(outcome) = started.outcome {
        print_outcome(pack.title(), &outcome);
        return Ok(());
    }
    let mut session: QuizSession = started.session;
    println!("{} ({} questions). Answer with A, B or C.", pack.title(), pack.total());

    while let Some(question) = session.current_question() {
        let progress = session.progress();
        println!();
        println!("[{}/{}] {}", progress.answered + 1, progress.total, question.prompt());
        for option in question.labelled_options() {
            println!("  {option}");
        }

        let Some(line) = lines.next_line().await? else {
            println!("Quiz abandoned.");
            return Ok(());
        };
        let Some(choice) = parse_choice(&line, question.options().len()) else {
            println!("Please answer with A, B or C.");
            continue;
        };

        let answer = quiz_loop.answer(&mut session, choice).await?;
        println!("{}", if answer.correct { "Correct!" } else { "Wrong." });
        if let Some(outcome) = answer.outcome {
            print_outcome(pack.title(), &outcome);
        }
    }
    Ok(())
}

/// Build the draft for `profile set`. Fields whose flag was not given keep
/// their stored value.
fn profile_draft(
    current: &Profile,
    name: String,
    about: Option<String>,
    photo: Option<String>,
) -> ProfileDraft {
    ProfileDraft {
        name,
        about: about.unwrap_or_else(|| current.about().to_string()),
        photo_ref: photo.or_else(|| current.photo_ref().map(str::to_string)),
    }
}

fn print_place(place: &Place, saved: bool) {
    println!("{}{}", place.title(), if saved { "  [saved]" } else { "" });
    println!("{}", place.coords_label());
    println!();
    println!("{}", place.description());
    println!();
    println!("Did you know? {}", place.fact());
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = Args::parse(argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup; core and services only see the key-value seam.
    prepare_sqlite_file(&parsed.db_url)?;
    log::debug!("opening {}", parsed.db_url);
    let app = AppServices::new_sqlite(&parsed.db_url).await?;

    match parsed.command {
        Command::Quizzes => list_quizzes(&app).await,
        Command::Play { quiz } => {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            play(app.quiz_loop().as_ref(), &quiz, &mut lines).await?;
        }
        Command::Certificate => match app.overview().certificate().await {
            Some(certificate) => println!("{}", certificate.message),
            None => println!("Pass all three quizzes to earn the certificate."),
        },
        Command::Places { saved_only } => {
            let saved = app.saved_places().list().await;
            let places: Vec<&Place> = if saved_only {
                app.saved_places().saved_places().await
            } else {
                catalog::places().iter().collect()
            };
            if places.is_empty() {
                println!("No saved places yet.");
            }
            for place in places {
                let mark = if saved.iter().any(|id| id == place.id()) { '*' } else { ' ' };
                println!("{mark} {:<28} {}", place.id(), place.title());
            }
        }
        Command::Place { id } => {
            let place = catalog::place(&id).ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, format!("unknown place: {id}"))
            })?;
            print_place(place, app.saved_places().is_saved(&id).await);
        }
        Command::Save { id } => {
            let saved = app.saved_places().toggle(&id).await?;
            println!("{id} {}", if saved { "saved" } else { "removed" });
        }
        Command::Profile => {
            let profile = app.profile().get_profile().await;
            println!("Name:  {}", profile.display_name());
            println!("About: {}", profile.about());
            if let Some(photo) = profile.photo_ref() {
                println!("Photo: {photo}");
            }
        }
        Command::ProfileSet { name, about, photo } => {
            let profiles = app.profile();
            let current = profiles.get_profile().await;
            let is_new = current.is_empty();
            let draft = profile_draft(&current, name, about, photo);
            let profile = if is_new {
                profiles.create(draft).await?
            } else {
                profiles.update(draft).await?
            };
            println!("Profile saved for {}.", profile.display_name());
        }
        Command::Reset => {
            let write = app.reset_account().await?;
            report_write(&write);
            println!("Profile and quiz progress cleared.");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn no_subcommand_lists_quizzes() {
        let parsed = Args::parse(args(&["--db", "sqlite::memory:"])).unwrap();
        assert_eq!(parsed.command, Command::Quizzes);
        assert_eq!(parsed.db_url, "sqlite::memory:");
    }

    #[test]
    fn parses_profile_set_flags() {
        let parsed = Args::parse(args(&[
            "profile", "set", "--name", "Anna", "--about", "hi", "--photo", "file:///a.jpg",
        ]))
        .unwrap();
        assert_eq!(
            parsed.command,
            Command::ProfileSet {
                name: "Anna".into(),
                about: Some("hi".into()),
                photo: Some("file:///a.jpg".into()),
            }
        );
    }

    #[test]
    fn profile_set_keeps_fields_without_flags() {
        let parsed = Args::parse(args(&["profile", "set", "--name", "Ben"])).unwrap();
        let Command::ProfileSet { name, about, photo } = parsed.command else {
            panic!("expected profile set");
        };
        assert_eq!(about, None);

        let current = Profile::from_persisted(
            Some("Anna".into()),
            Some("Rhine swimmer".into()),
            Some("file:///a.jpg".into()),
        );
        let draft = profile_draft(&current, name, about, photo);
        assert_eq!(draft.name, "Ben");
        assert_eq!(draft.about, "Rhine swimmer");
        assert_eq!(draft.photo_ref.as_deref(), Some("file:///a.jpg"));

        let cleared = profile_draft(&current, "Ben".into(), Some(String::new()), None);
        assert_eq!(cleared.about, "");
    }

    #[test]
    fn rejects_missing_values_and_unknown_args() {
        assert!(matches!(
            Args::parse(args(&["play"])),
            Err(ArgsError::MissingArgument { .. })
        ));
        assert!(matches!(
            Args::parse(args(&["--db"])),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(
            Args::parse(args(&["fly"])),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn places_accepts_saved_flag() {
        let parsed = Args::parse(args(&["places", "--saved"])).unwrap();
        assert_eq!(parsed.command, Command::Places { saved_only: true });
    }

    #[test]
    fn choices_accept_letters_and_numbers() {
        assert_eq!(parse_choice("a", 3), Some(0));
        assert_eq!(parse_choice(" C ", 3), Some(2));
        assert_eq!(parse_choice("2", 3), Some(1));
        assert_eq!(parse_choice("D", 3), None);
        assert_eq!(parse_choice("0", 3), None);
        assert_eq!(parse_choice("", 3), None);
    }

    #[test]
    fn relative_paths_become_absolute_urls() {
        let url = normalize_sqlite_url("sqlite:data/guide.sqlite3".into());
        assert!(url.starts_with("sqlite:///"));
        assert!(url.ends_with("data/guide.sqlite3"));
    }
}
