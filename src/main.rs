use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;

use profile_sync::opportunities::types::ListFilters;
use profile_sync::opportunities::OpportunityService;
use profile_sync::{ApiClient, ApiConfig, AuthTokens, ProfileApi, ProfileSync};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "scholarflow")]
#[command(about = "Browse opportunities and sync your profile from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Bearer token for the profile API
    #[arg(long, env = "SCHOLARFLOW_TOKEN", global = true)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and display the signed-in user's profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Browse job listings
    Jobs {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Browse scholarships
    Scholarships {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        /// Show the AI-matched ranked list instead of the full catalogue
        #[arg(long)]
        matched: bool,
    },
    /// Apply to a job by id
    Apply { job_id: i64 },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print every profile section
    Show,
    /// Re-save one section (Personal, Career Profile, Education, Experience, Projects, AI)
    Save { section: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ApiConfig::load()?;
    let tokens = Arc::new(AuthTokens::new(cli.token.clone()));
    if !tokens.is_authenticated() {
        anyhow::bail!("No API token. Pass --token or set SCHOLARFLOW_TOKEN.");
    }
    let client = ApiClient::new(&config, tokens)?;

    match cli.command {
        Command::Profile { action } => run_profile(action, client).await,
        Command::Jobs {
            search,
            location,
            page,
        } => {
            let service = OpportunityService::new(client);
            let filters = ListFilters {
                search,
                location,
                page,
            };
            let listing = service.list_jobs(&filters).await?;
            println!("{} jobs (page {})", listing.total, listing.page);
            for job in listing.results {
                println!(
                    "{:<6} {:<40} {:<25} {}",
                    job.id.map(|id| id.to_string()).unwrap_or_default(),
                    job.title.unwrap_or_default(),
                    job.company.unwrap_or_default(),
                    job.location.unwrap_or_default()
                );
            }
            Ok(())
        }
        Command::Scholarships {
            search,
            page,
            matched,
        } => {
            let service = OpportunityService::new(client);
            if matched {
                let ranked = service.ai_matched_scholarships().await?;
                println!("{} matched scholarships (best first)", ranked.len());
                for (rank, scholarship) in ranked.iter().enumerate() {
                    println!(
                        "{:>3}. {:<40} {:<25} {}",
                        rank + 1,
                        scholarship.title.clone().unwrap_or_default(),
                        scholarship.provider.clone().unwrap_or_default(),
                        scholarship.deadline.clone().unwrap_or_default()
                    );
                }
            } else {
                let filters = ListFilters {
                    search,
                    location: None,
                    page,
                };
                let listing = service.list_scholarships(&filters).await?;
                println!("{} scholarships (page {})", listing.total, listing.page);
                for scholarship in listing.results {
                    println!(
                        "{:<6} {:<40} {:<25} {}",
                        scholarship.id.map(|id| id.to_string()).unwrap_or_default(),
                        scholarship.title.unwrap_or_default(),
                        scholarship.provider.unwrap_or_default(),
                        scholarship.amount.unwrap_or_default()
                    );
                }
            }
            Ok(())
        }
        Command::Apply { job_id } => {
            let service = OpportunityService::new(client);
            service.apply_to_job(job_id).await?;
            println!("Application submitted for job {}", job_id);
            Ok(())
        }
    }
}

async fn run_profile(action: ProfileAction, client: ApiClient) -> Result<()> {
    let mut sync = ProfileSync::connect(ProfileApi::new(client)).await;
    if let Some(error) = &sync.store.error {
        anyhow::bail!("Failed to load profile: {}", error);
    }

    match action {
        ProfileAction::Show => {
            print_profile(&sync);
            Ok(())
        }
        ProfileAction::Save { section } => {
            sync.save_section(&section).await?;
            match &sync.store.error {
                Some(error) => anyhow::bail!("Save succeeded but reload failed: {}", error),
                None => {
                    println!("Saved section: {}", section);
                    Ok(())
                }
            }
        }
    }
}

fn print_profile(sync: &ProfileSync) {
    let store = &sync.store;

    println!("Personal");
    println!("  Name:    {}", store.personal_info.name);
    println!("  Email:   {}", store.personal_info.email);
    println!("  Phone:   {}", store.personal_info.phone);
    println!("  Country: {}", store.personal_info.country);
    if !store.personal_info.goal.is_empty() {
        println!("  Goals:");
        for line in store.personal_info.goal.lines() {
            println!("    {}", line);
        }
    }

    println!("Career Profile");
    println!("  Industry: {}", store.career_profile.industry);
    println!("  Title:    {}", store.career_profile.job_title);

    println!("Education");
    for entry in &store.education {
        println!(
            "  [{}] {} at {} ({} - {})",
            entry.id,
            entry.degree,
            entry.school,
            entry.start_date,
            if entry.is_studying {
                "present"
            } else {
                entry.end_date.as_str()
            }
        );
    }

    println!("Experience");
    for entry in &store.experience {
        println!(
            "  [{}] {} at {} ({} - {})",
            entry.id,
            entry.job_title,
            entry.company,
            entry.start_date,
            if entry.is_currently_working {
                "present"
            } else {
                entry.end_date.as_str()
            }
        );
    }

    println!("Projects");
    for entry in &store.projects {
        println!("  [{}] {}", entry.id, entry.name);
    }

    println!("AI Preferences");
    println!(
        "  Interests:  {}",
        store.ai_preferences.interests.labels().join(", ")
    );
    println!(
        "  Prioritize: {}",
        store.ai_preferences.priorities.labels().join(", ")
    );
    if !store.ai_preferences.salary_expectation.is_empty() {
        println!(
            "  Salary:     {}",
            store.ai_preferences.salary_expectation
        );
    }
}
