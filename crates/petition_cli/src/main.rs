//! Interactive petition shell.
//!
//! # Responsibility
//! - Present the menu loop: generate, list, fetch by id, exit.
//! - Own all user-facing I/O and input parsing; the core exposes no
//!   interactive surface.

use log::info;
use petition_core::{
    default_log_level, init_logging, init_store, PetitionDraft, PetitionRepository,
    SqlitePetitionRepository, StoreConfig,
};
use std::io::{self, BufRead, Write};

/// Terminator token for the facts/reliefs entry loops.
const LIST_SENTINEL: &str = "done";

fn main() {
    let config = StoreConfig::default();
    init_file_logging(&config);

    let handle = match init_store(&config) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("failed to initialize petition store: {err}");
            std::process::exit(1);
        }
    };
    info!(
        "event=app_start module=cli status=ok store={}",
        handle.path().display()
    );
    let repo = SqlitePetitionRepository::new(handle);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    if let Err(err) = run_menu(&repo, &mut input) {
        eprintln!("input error: {err}");
        std::process::exit(1);
    }
}

fn run_menu(repo: &impl PetitionRepository, input: &mut impl BufRead) -> io::Result<()> {
    loop {
        println!();
        println!("===== LEGAL PETITION AUTO-DRAFT SYSTEM =====");
        println!("1. Generate new petition");
        println!("2. View all petitions");
        println!("3. View petition by ID");
        println!("4. Exit");

        let choice = match prompt(input, "Enter your choice: ")? {
            Some(line) => line,
            None => break, // EOF behaves like exit
        };

        match choice.as_str() {
            "1" => generate_petition(repo, input)?,
            "2" => list_petitions(repo),
            "3" => view_petition(repo, input)?,
            "4" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid choice. Try again."),
        }
    }

    Ok(())
}

fn generate_petition(repo: &impl PetitionRepository, input: &mut impl BufRead) -> io::Result<()> {
    let Some(petitioner) = prompt(input, "Enter Petitioner Name: ")? else {
        return Ok(());
    };
    let Some(respondent) = prompt(input, "Enter Respondent Name: ")? else {
        return Ok(());
    };
    let Some(court_name) = prompt(input, "Enter Court Name: ")? else {
        return Ok(());
    };
    let Some(case_type) = prompt(input, "Enter Case Type: ")? else {
        return Ok(());
    };

    println!();
    println!("Enter Facts (type '{LIST_SENTINEL}' when finished):");
    let facts = read_list(input)?;

    println!();
    println!("Enter Reliefs (type '{LIST_SENTINEL}' when finished):");
    let reliefs = read_list(input)?;

    let draft = PetitionDraft {
        petitioner,
        respondent,
        court_name,
        case_type,
        facts,
        reliefs,
    };

    match repo.create(&draft) {
        Ok(created) => {
            println!();
            println!("----- GENERATED PETITION -----");
            println!();
            println!("{}", created.petition_text);
        }
        Err(err) => eprintln!("failed to store petition: {err}"),
    }

    Ok(())
}

fn list_petitions(repo: &impl PetitionRepository) {
    match repo.list_all() {
        Ok(summaries) => {
            println!();
            println!("Stored Petitions:");
            for summary in summaries {
                println!(
                    "({}, {}, {}, {})",
                    summary.id, summary.petitioner, summary.respondent, summary.case_type
                );
            }
        }
        Err(err) => eprintln!("failed to list petitions: {err}"),
    }
}

fn view_petition(repo: &impl PetitionRepository, input: &mut impl BufRead) -> io::Result<()> {
    let Some(raw_id) = prompt(input, "Enter Petition ID: ")? else {
        return Ok(());
    };

    let id: i64 = match raw_id.parse() {
        Ok(id) => id,
        Err(_) => {
            println!("Petition ID must be a number, got `{raw_id}`.");
            return Ok(());
        }
    };

    match repo.get_petition_text(id) {
        Ok(Some(text)) => println!("{text}"),
        Ok(None) => println!("No petition found with that ID."),
        Err(err) => eprintln!("failed to fetch petition: {err}"),
    }

    Ok(())
}

/// Reads lines into a list until the sentinel token (case-insensitive)
/// or EOF is entered. Order is preserved; no content is rejected.
fn read_list(input: &mut impl BufRead) -> io::Result<Vec<String>> {
    let mut items = Vec::new();
    loop {
        match prompt(input, "> ")? {
            Some(line) if line.eq_ignore_ascii_case(LIST_SENTINEL) => break,
            Some(line) => items.push(line),
            None => break,
        }
    }
    Ok(items)
}

/// Prints a prompt and reads one line, trimmed of the trailing newline.
/// Returns `None` on EOF.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Best-effort file logging under `<data_dir>/logs`; the shell keeps
/// running when logging cannot be initialized.
fn init_file_logging(config: &StoreConfig) {
    let log_dir = match std::env::current_dir() {
        Ok(cwd) => cwd.join(&config.data_dir).join("logs"),
        Err(_) => return,
    };
    if let Some(log_dir) = log_dir.to_str() {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }
}
