use chrono::Utc;
use clap::Parser;
use manifest::application::{
    init::init, load_progress, ConfigService, EntryService, ReviewService,
};
use manifest::cli::{
    format_config, format_progress, format_review_list, format_submit_outcome, format_today,
    format_toggle, reminder_text, Cli, Commands,
};
use manifest::error::ManifestError;
use manifest::infrastructure::{FileSystemRepository, JournalRepository};
use manifest::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ManifestError> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized manifest journal at {}", path.display());
            Ok(())
        }
        Commands::Add { text } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let mut service = EntryService::open(repo, config.daily_limit);

            let outcome = service.submit(&text, Utc::now())?;
            print!("{}", format_submit_outcome(&outcome));
            Ok(())
        }
        Commands::Today => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let service = EntryService::open(repo, config.daily_limit);

            let now = Utc::now();
            let entries = service.todays_entries(now);
            let reminder = (config.reminder_enabled && entries.is_empty())
                .then(|| reminder_text(config.daily_limit));
            print!(
                "{}",
                format_today(&entries, config.daily_limit, reminder.as_deref())
            );
            Ok(())
        }
        Commands::Review => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let service = ReviewService::new(repo, config.review_after_days);

            println!("{}", format_review_list(&service.entries_due(Utc::now())).trim_end());
            Ok(())
        }
        Commands::Toggle { id } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let service = ReviewService::new(repo, config.review_after_days);

            let entry = service.toggle_due(&id, Utc::now())?;
            println!("{}", format_toggle(&entry));
            Ok(())
        }
        Commands::Progress => {
            let repo = FileSystemRepository::discover()?;
            print!("{}", format_progress(&load_progress(&repo)));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                print!("{}", format_config(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: manifest config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: daily_limit, review_after_days, reminder_enabled, reminder_hour, created"
                );
                Ok(())
            }
        }
    }
}
