//! Folio CLI
//!
//! Browse the portfolio content, drive the animated site headlessly and
//! submit the contact form.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_site::{project_route, ContactClient, ContactForm, SiteConfig, SubmissionStatus, CONFIG_FILE};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod simulate;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Portfolio site CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects
    Projects {
        /// Only the projects shown on the home page
        #[arg(long)]
        featured: bool,
    },

    /// Print a project case study
    Show {
        /// Project slug
        slug: String,
    },

    /// Mount the site headlessly and trace its animation state
    Simulate {
        /// Route to open
        #[arg(short, long, default_value = "/")]
        route: String,

        /// Jump to a home page section through the navigation bar
        #[arg(short, long)]
        section: Option<String>,

        /// Time to run before scrolling (ms)
        #[arg(long, default_value = "4000")]
        ms: u64,

        /// Print snapshots as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Submit the contact form
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = SiteConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Commands::Projects { featured } => cmd_projects(featured),

        Commands::Show { slug } => cmd_show(&slug),

        Commands::Simulate {
            route,
            section,
            ms,
            json,
        } => simulate::run(config, &route, section.as_deref(), ms, json),

        Commands::Contact {
            name,
            email,
            message,
        } => cmd_contact(&config, ContactForm::new(name, email, message)),
    }
}

fn cmd_projects(featured: bool) -> Result<()> {
    let content = folio_site::ContentStore::load().context("Failed to load projects")?;
    let projects: Vec<_> = if featured {
        content.featured().collect()
    } else {
        content.projects().iter().collect()
    };

    for project in projects {
        println!("{:<58} {}", project.slug, project.title);
        println!("{:<58} {}", "", project.card_tech().join(", "));
    }
    Ok(())
}

fn cmd_show(slug: &str) -> Result<()> {
    let content = folio_site::ContentStore::load().context("Failed to load projects")?;
    let project = content
        .find(slug)
        .with_context(|| format!("No project with slug '{}'", slug))?;

    println!("{}", project.title);
    println!("{}", project_route(&project.slug));
    println!();
    println!("{}", project.long_description);
    println!();
    println!("Tech: {}", project.tech.join(", "));
    println!(
        "GitHub: {}",
        project.github_url.as_deref().unwrap_or("coming soon")
    );
    println!(
        "Live demo: {}",
        project.live_url.as_deref().unwrap_or("coming soon")
    );

    for (heading, items) in [
        ("Highlights", &project.highlights),
        ("Responsibilities", &project.responsibilities),
        ("Results", &project.results),
    ] {
        if items.is_empty() {
            continue;
        }
        println!();
        println!("{}:", heading);
        for item in items {
            println!("  - {}", item);
        }
    }
    Ok(())
}

fn cmd_contact(config: &SiteConfig, form: ContactForm) -> Result<()> {
    let client = ContactClient::new(&config.contact).context("Failed to build HTTP client")?;
    match client.endpoint() {
        Some(endpoint) => info!("Submitting to {}", endpoint),
        None => warn!("No [contact] endpoint configured"),
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    match runtime.block_on(client.submit(&form)) {
        SubmissionStatus::Sent => {
            println!("Thanks! Your message has been sent.");
            Ok(())
        }
        SubmissionStatus::Failed { message } => anyhow::bail!(message),
    }
}
