//! Post Composer - Compose challenge posts from your terminal
//!
//! A small tool that:
//! - Resolves a visual theme for a challenge from its title
//! - Guides you through writing a post and attaching a photo
//! - Validates and submits the post to the session feed

mod accept;
mod challenge;
mod config;
mod media;
mod post;
mod tui;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

use crate::accept::{Acceptance, LocalFeed};
use crate::challenge::{ChallengeCard, KNOWN_CHALLENGES};
use crate::config::Config;
use crate::media::{photo_uri, LibraryPicker, PhotoPicker, PickOutcome};
use crate::post::{
    resolve_theme, ChallengeSubmission, ParticipationMode, SubmissionDraft, SubmitError,
    SystemStamps,
};

/// Post Composer - Compose and submit challenge posts
#[derive(Parser)]
#[command(name = "post-composer")]
#[command(version)]
#[command(about = "Compose and submit challenge posts from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the fullscreen compose UI (default)
    Compose,

    /// Quick submit without opening the UI
    Submit {
        /// Challenge id or title (e.g., "morning-meditation")
        #[arg(short, long)]
        challenge: String,

        /// Post text
        #[arg(short, long)]
        text: Option<String>,

        /// Path to a photo to attach
        #[arg(long)]
        photo: Option<PathBuf>,

        /// Attach the newest photo from the configured library
        #[arg(long, conflicts_with = "photo")]
        latest_photo: bool,

        /// Post as a team instead of individually
        #[arg(long)]
        team: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List known challenges with their resolved themes
    Challenges,

    /// Show the theme a challenge title resolves to
    Theme {
        /// Challenge title to resolve
        title: String,
    },

    /// Show configuration and data paths
    Config,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing() {
    // Logs go to stderr so the TUI's alternate screen stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(
                    "post_composer=info"
                        .parse()
                        .expect("default directive is valid"),
                )
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load().unwrap_or_default();

    match Cli::parse().command {
        Some(Commands::Compose) | None => {
            if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
                println!(
                    "{}",
                    "The compose UI requires an interactive TTY. Use `post-composer submit` for scripted use."
                        .bright_yellow()
                );
                return Ok(());
            }

            let rt = tokio::runtime::Runtime::new()?;
            match tui::run_tui(&rt, &cfg)? {
                tui::TuiExit::Quit => {}
            }
        }
        Some(Commands::Submit {
            challenge,
            text,
            photo,
            latest_photo,
            team,
            format,
        }) => {
            run_quick_submit(&cfg, &challenge, text, photo, latest_photo, team, format)?;
        }
        Some(Commands::Challenges) => {
            print_challenges_list();
        }
        Some(Commands::Theme { title }) => {
            print_theme(&title);
        }
        Some(Commands::Config) => {
            show_config_info(&cfg)?;
        }
    }

    Ok(())
}

fn run_quick_submit(
    cfg: &Config,
    challenge: &str,
    text: Option<String>,
    photo: Option<PathBuf>,
    latest_photo: bool,
    team: bool,
    format: OutputFormat,
) -> Result<()> {
    let Some(card) = ChallengeCard::find(challenge) else {
        println!(
            "{} '{}' not found.",
            "Challenge".bright_red(),
            challenge.bright_yellow()
        );
        println!(
            "{}",
            "Run `post-composer challenges` to see what's available.".bright_cyan()
        );
        return Ok(());
    };

    let rt = tokio::runtime::Runtime::new()?;

    let mut draft = SubmissionDraft {
        text: text.unwrap_or_default(),
        image: photo.as_deref().map(photo_uri),
    };

    if latest_photo {
        let picker = LibraryPicker::from_config(cfg);
        match rt.block_on(picker.pick()) {
            Ok(PickOutcome::Picked(uri)) => draft.image = Some(uri),
            Ok(PickOutcome::Cancelled) => {
                println!(
                    "{}",
                    "No photos found in the configured library.".bright_yellow()
                );
            }
            Err(err) => {
                println!("{} {}", "✗ Cannot attach photo:".bright_red(), err);
                return Ok(());
            }
        }
    }

    let mode = if team {
        ParticipationMode::Team
    } else {
        ParticipationMode::Individual
    };

    let submission =
        match ChallengeSubmission::from_draft(&draft, card, mode, &cfg.author(), &SystemStamps) {
            Ok(submission) => submission,
            Err(err) => {
                println!("{} {}", "✗ Cannot submit:".bright_red(), err);
                return Ok(());
            }
        };

    let feed = LocalFeed::from_config(cfg);

    println!("{}", "Submitting post...".bright_cyan());
    match rt.block_on(feed.accept(&submission)) {
        Ok(()) => match format {
            OutputFormat::Text => {
                println!("{}", "✓ Post accepted".bright_green().bold());
                println!("\n{}", submission.display());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&submission)?);
            }
        },
        Err(err) => {
            println!(
                "{} {}",
                "✗".bright_red(),
                SubmitError::from(err).to_string().bright_red()
            );
            println!(
                "{}",
                "Your draft was not consumed; adjust and try again.".bright_yellow()
            );
        }
    }

    Ok(())
}

fn print_challenges_list() {
    println!("{}\n", "Known challenges:".bright_white().bold());
    for card in KNOWN_CHALLENGES {
        let theme = resolve_theme(card.title);
        println!(
            "  {} {}  {} {}",
            card.icon,
            card.title.bright_cyan(),
            format!("[{}]", card.id).bright_black(),
            format!("theme: {}", theme.kind).bright_black()
        );
        println!(
            "     {}  {}",
            card.subtitle.bright_white(),
            format!("({} → {})", card.gradient.0, card.gradient.1).bright_black()
        );
    }
}

fn print_theme(title: &str) {
    let theme = resolve_theme(title);
    println!(
        "{} {}",
        "Resolved theme:".bright_white(),
        theme.kind.to_string().bright_cyan().bold()
    );
    println!(
        "  {} {}",
        "Heading:".bright_white(),
        theme.copy.heading.bright_cyan()
    );
    println!(
        "  {} {}",
        "Input label:".bright_white(),
        theme.copy.input_label
    );
    println!(
        "  {} {}",
        "Placeholder:".bright_white(),
        theme.copy.placeholder.bright_black()
    );
    println!(
        "  {} {}",
        "Solo tip:".bright_white(),
        theme.copy.individual_tip
    );
    println!("  {} {}", "Team tip:".bright_white(), theme.copy.team_tip);
}

fn show_config_info(cfg: &Config) -> Result<()> {
    println!("{}", "Configuration".bright_white().bold());
    println!(
        "  {} {}",
        "Path:".bright_white(),
        Config::config_path()?.display().to_string().bright_cyan()
    );
    println!(
        "  {} {} {}",
        "Author:".bright_white(),
        cfg.author.name.bright_cyan(),
        cfg.author.handle.bright_black()
    );
    let library = LibraryPicker::from_config(cfg);
    println!(
        "  {} {}",
        "Photo library:".bright_white(),
        library
            .library_dir()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "(not configured)".to_string())
    );
    println!(
        "  {} {}ms",
        "Feed accept delay:".bright_white(),
        cfg.feed.accept_delay_ms
    );
    Ok(())
}
