use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use mailroom_settings::config;
use mailroom_settings::settings::{
    JsonProfileStore, ProfileField, SettingsSession, guess_mime,
};
use mailroom_settings::{logging, paths};

/// Edit the account profile with undo/redo
#[derive(Parser, Debug)]
#[command(name = "mailroom-settings", version, about)]
struct Args {
    /// Profile file to edit (overrides the config file)
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Maximum number of undoable edits (overrides the config file)
    #[arg(long)]
    history_limit: Option<usize>,

    /// Log filter directive used when RUST_LOG is not set
    #[arg(long)]
    log_filter: Option<String>,
}

const HELP: &str = "\
Commands:
  show                  Print the current profile
  set <field> <value>   Edit a field (fullName, jobTitle, phone, bio)
  photo <file>          Replace the profile photo
  undo | redo           Step through the edit history
  history               List recorded edits
  save                  Save the profile
  discard               Discard all unsaved edits
  quit                  Leave the settings page";

fn main() {
    let args = Args::parse();

    // Keep the guard alive for the duration of the program
    let _log_guard = logging::setup_logging(args.log_filter.as_deref());

    let loaded = config::load_config();
    let mut app_config = loaded.config;
    if let Some(reason) = loaded.reset_reason {
        warn!("Config reset to defaults: {}", reason);
    }
    if let Err(e) = paths::ensure_directories() {
        warn!("Failed to create application directories: {}", e);
    }
    config::save_config(&mut app_config);

    let profile_path = args.profile.unwrap_or_else(|| app_config.profile_path());
    let history_limit = args
        .history_limit
        .unwrap_or(app_config.data.history_limit);
    info!(
        "Opening settings for {:?} (history limit {})",
        profile_path, history_limit
    );

    let store = JsonProfileStore::new(profile_path);
    let mut session = SettingsSession::open(Box::new(store), history_limit);

    println!("{}", HELP);
    if let Err(e) = run(&mut session) {
        eprintln!("Input error: {}", e);
    }
}

/// Read commands from stdin until `quit` or end of input
fn run(session: &mut SettingsSession) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        prompt(session)?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));

        match cmd {
            "" => {}
            "help" => println!("{}", HELP),
            "show" => show(session),
            "set" => set_field(session, rest),
            "photo" => select_photo(session, rest.trim()),
            "undo" => {
                if !session.can_undo() {
                    println!("Nothing to undo");
                }
                session.undo();
            }
            "redo" => {
                if !session.can_redo() {
                    println!("Nothing to redo");
                }
                session.redo();
            }
            "history" => print_history(session),
            "save" => match session.save_all() {
                Ok(()) => println!("Profile saved successfully!"),
                Err(e) => println!("Error saving profile: {}", e),
            },
            "discard" => {
                if confirm(&mut lines, "Discard all changes?")?
                    && let Err(e) = session.discard_all()
                {
                    println!("Could not reload profile: {}", e);
                }
            }
            "quit" | "exit" => {
                if !session.has_unsaved_changes()
                    || confirm(&mut lines, "You have unsaved changes. Quit anyway?")?
                {
                    return Ok(());
                }
            }
            other => println!("Unknown command: {} (try `help`)", other),
        }
    }
}

fn prompt(session: &SettingsSession) -> io::Result<()> {
    let marker = if session.has_unsaved_changes() { "*" } else { "" };
    print!("settings{}> ", marker);
    io::stdout().flush()
}

fn confirm<B: BufRead>(lines: &mut io::Lines<B>, question: &str) -> io::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;
    match lines.next() {
        Some(answer) => Ok(matches!(answer?.trim(), "y" | "Y" | "yes")),
        None => Ok(false),
    }
}

fn show(session: &SettingsSession) {
    let form = session.form();
    for field in ProfileField::ALL {
        println!("  {:<10} {}", field.as_str(), form.value(field));
    }
    let photo = form.photo();
    if photo.starts_with("data:") {
        println!("  {:<10} <uploaded image, {} chars>", "photo", photo.len());
    } else {
        println!("  {:<10} {}", "photo", photo);
    }
}

fn set_field(session: &mut SettingsSession, rest: &str) {
    let (name, value) = rest.split_once(' ').unwrap_or((rest, ""));
    let field = match name.parse::<ProfileField>() {
        Ok(field) => field,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    // Typing then leaving the field
    if let Err(e) = session.edit_field(field, value) {
        println!("{}", e);
        return;
    }
    match session.on_field_change(field) {
        Ok(true) => println!("Changed {}", field),
        Ok(false) => println!("No change"),
        Err(e) => println!("{}", e),
    }
}

fn select_photo(session: &mut SettingsSession, path: &str) {
    if path.is_empty() {
        println!("Usage: photo <file>");
        return;
    }
    let path = PathBuf::from(path);
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("Could not read {:?}: {}", path, e);
            return;
        }
    };

    match session.on_photo_select(&bytes, guess_mime(&path)) {
        Ok(true) => println!("Changed profile photo"),
        Ok(false) => println!("No change"),
        Err(e) => println!("{}", e),
    }
}

fn print_history(session: &SettingsSession) {
    let log = session.history_log();
    if log.is_empty() {
        println!("No changes");
        return;
    }
    for entry in log {
        let marker = if entry.applied { " " } else { "~" };
        println!(
            "{} {}  {}",
            marker,
            entry.created_at.format("%H:%M:%S"),
            entry.description
        );
    }
}
