//! Scripted sample runner.
//!
//! # Responsibility
//! - Exercise the full record lifecycle once with fixed sample data:
//!   initialize the store, create a petition, list, fetch by id.
//! - Keep output deterministic for quick local sanity checks.

use log::info;
use petition_core::{
    default_log_level, init_logging, init_store, PetitionDraft, PetitionRepository, RepoError,
    SqlitePetitionRepository, StoreConfig,
};

fn main() {
    let config = StoreConfig::default();
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(log_dir) = cwd.join(&config.data_dir).join("logs").to_str() {
            if let Err(err) = init_logging(default_log_level(), log_dir) {
                eprintln!("logging disabled: {err}");
            }
        }
    }

    if let Err(err) = run(&config) {
        eprintln!("demo failed: {err}");
        std::process::exit(1);
    }
}

fn run(config: &StoreConfig) -> Result<(), RepoError> {
    let handle = init_store(config)?;
    info!(
        "event=demo_start module=cli status=ok store={}",
        handle.path().display()
    );
    let repo = SqlitePetitionRepository::new(handle);

    let draft = PetitionDraft {
        petitioner: "Rahul Sharma".to_string(),
        respondent: "Electricity Board".to_string(),
        court_name: "District Civil Court, Kolkata".to_string(),
        case_type: "Electricity Bill Dispute".to_string(),
        facts: vec![
            "The petitioner received an inflated electricity bill.".to_string(),
            "Meter reading does not match actual consumption.".to_string(),
            "Complaints were made but not resolved.".to_string(),
        ],
        reliefs: vec![
            "Correct the electricity bill".to_string(),
            "Remove penalty charges".to_string(),
            "Provide compensation".to_string(),
        ],
    };

    let created = repo.create(&draft)?;
    println!("Generated Petition:");
    println!();
    println!("{}", created.petition_text);

    println!();
    println!("Stored Petitions (ID, Petitioner, Respondent, Case Type):");
    for summary in repo.list_all()? {
        println!(
            "({}, {}, {}, {})",
            summary.id, summary.petitioner, summary.respondent, summary.case_type
        );
    }

    println!();
    println!("View Petition By ID = 1:");
    println!();
    match repo.get_petition_text(1)? {
        Some(text) => println!("{text}"),
        None => println!("No petition found with that ID."),
    }

    Ok(())
}
