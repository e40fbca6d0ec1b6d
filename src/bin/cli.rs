//! MindJournal CLI
//!
//! Terminal front-end for MindJournal:
//! - Sign in, sign out, register
//! - List, read, write and delete entries
//! - Ask for AI analysis and weekly insights
//!
//! The session lives in a JSON file (see `mindjournal config`) so it
//! survives between invocations.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mindjournal::config::{generate_default_config, Config};
use mindjournal::pages::{
    summary_line, support_resources, DeleteOutcome, JournalDetailPage, JournalListPage,
    LoginPage, NewJournalPage, PageContext, PageState, RegisterPage, EMPTY_LIST,
    RESOURCES_NOTICE,
};
use mindjournal::shell::{AppLayout, Header, QuoteSource, ZenQuotesClient};
use mindjournal::{
    FileStorage, History, HttpApiClient, Mood, Route, SessionContext, SessionStore, StorageBus,
};

#[derive(Parser)]
#[command(name = "mindjournal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A journal that listens")]
#[command(long_about = "MindJournal keeps your journal entries and offers AI feedback.\nWrite entries, track your mood and get weekly insights.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Journal API base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and sign in
    Register {
        name: String,
        email: String,
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Sign in
    Login {
        email: String,
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Sign out
    Logout,

    /// Show who is signed in
    Whoami,

    /// List journal entries
    List {
        /// Also fetch this week's insights
        #[arg(long)]
        insights: bool,
    },

    /// Show one entry
    Show { id: String },

    /// Write a new entry
    New {
        #[arg(short, long)]
        title: String,
        /// great, good, okay, bad or terrible
        #[arg(short, long, default_value = "okay")]
        mood: Mood,
        /// Entry text (read from stdin when omitted)
        #[arg(long)]
        content: Option<String>,
    },

    /// Ask for AI feedback on an entry
    Analyze { id: String },

    /// Delete an entry
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Weekly insights across recent entries
    Insights,

    /// Quote of the day
    Quote,

    /// Mental health support resources
    Resources,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Everything a command needs
struct App {
    ctx: PageContext,
    history: Arc<History>,
    config: Config,
}

impl App {
    fn new(config: Config) -> anyhow::Result<Self> {
        let storage = FileStorage::new(&config.session.file);
        let session = SessionContext::new(SessionStore::new(
            Arc::new(storage),
            StorageBus::default(),
        ));
        let api = HttpApiClient::new(&config.api.base_url)?;
        let history = Arc::new(History::default());

        Ok(Self {
            ctx: PageContext::new(session, Arc::new(api), history.clone()),
            history,
            config,
        })
    }

    /// Bail with a hint when a page sent us to the login screen
    fn ensure_signed_in<T>(&self, state: &PageState<T>) -> anyhow::Result<()> {
        if matches!(state, PageState::Redirected(Route::Login)) {
            bail!("Not logged in. Run `mindjournal login <email>` first.");
        }
        Ok(())
    }

    fn quote_source(&self) -> Option<ZenQuotesClient> {
        if !self.config.quotes.enabled {
            return None;
        }
        match ZenQuotesClient::new(&self.config.quotes.url) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!("Quote client unavailable: {}", e);
                None
            }
        }
    }
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("mindjournal={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    init_logging(&config);

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &content)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let app = App::new(config)?;
    let ctx = &app.ctx;

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
        } => {
            let mut page = RegisterPage::new();
            page.name = name;
            page.email = email;
            page.password = match password {
                Some(p) => p,
                None => prompt("Password: ")?,
            };

            if !page.submit(ctx).await? {
                bail!("{}", page.error().unwrap_or("Registration failed"));
            }
            println!("Welcome, {}!", page.name);
        }

        Commands::Login { email, password } => {
            let mut page = LoginPage::new();
            page.email = email;
            page.password = match password {
                Some(p) => p,
                None => prompt("Password: ")?,
            };

            if !page.submit(ctx).await? {
                bail!("{}", page.error().unwrap_or("Login failed"));
            }
            let header = Header::new(ctx.session.clone());
            println!("{}", header.greeting().unwrap_or_else(|| "Logged in.".to_string()));
        }

        Commands::Logout => {
            let mut header = Header::new(ctx.session.clone());
            header.logout(app.history.as_ref())?;
            println!("Logged out.");
        }

        Commands::Whoami => {
            let header = Header::new(ctx.session.clone());
            match header.greeting() {
                Some(greeting) => println!("{}", greeting),
                None => println!("Not logged in."),
            }
        }

        Commands::List { insights } => {
            let mut page = JournalListPage::mount(ctx).await?;
            app.ensure_signed_in(page.state())?;

            let entries = page.entries().unwrap_or_default();
            if entries.is_empty() {
                println!("{}", EMPTY_LIST);
                println!();
                println!("Write your first entry with:");
                println!("  mindjournal new --title \"Today\" --mood good");
            } else {
                for entry in entries {
                    println!("{:<26} {}", entry.id, summary_line(entry));
                }
            }

            if insights {
                println!();
                print_insights(&mut page, ctx).await?;
            }
        }

        Commands::Show { id } => {
            let page = JournalDetailPage::mount(ctx, &id).await?;
            app.ensure_signed_in(page.state())?;
            let Some(journal) = page.journal() else {
                bail!("Journal entry {} not found", id);
            };

            println!("{} {}", journal.mood.emoji(), journal.title);
            println!("{}", journal.local_date());
            println!();
            println!("{}", journal.content);
            println!();
            match journal.analysis.as_deref().filter(|a| !a.is_empty()) {
                Some(analysis) => {
                    println!("AI Analysis:");
                    println!("{}", analysis);
                }
                None => {
                    println!("Get supportive feedback with:");
                    println!("  mindjournal analyze {}", journal.id);
                }
            }
        }

        Commands::New {
            title,
            mood,
            content,
        } => {
            let mut page = NewJournalPage::new();
            page.title = title;
            page.set_mood(mood);
            page.content = match content {
                Some(c) => c,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read entry text from stdin")?;
                    buf
                }
            };

            match page.submit(ctx).await? {
                Some(id) => println!("Saved entry {}", id),
                None if app.history.current() == Route::Login => {
                    bail!("Not logged in. Run `mindjournal login <email>` first.")
                }
                None => bail!("{}", page.error().unwrap_or("Failed to create journal")),
            }
        }

        Commands::Analyze { id } => {
            let mut page = JournalDetailPage::mount(ctx, &id).await?;
            app.ensure_signed_in(page.state())?;
            if page.journal().is_none() {
                bail!("Journal entry {} not found", id);
            }

            println!("{}", page.analyze_label());
            page.analyze(ctx).await?;
            match page.journal().and_then(|j| j.analysis.as_deref()) {
                Some(analysis) if !analysis.is_empty() => println!("{}", analysis),
                _ => bail!("No analysis was returned"),
            }
        }

        Commands::Delete { id, yes } => {
            let mut page = JournalDetailPage::mount(ctx, &id).await?;
            app.ensure_signed_in(page.state())?;
            if page.journal().is_none() {
                bail!("Journal entry {} not found", id);
            }

            let ask = |question: &str| yes || confirm(question);
            match page.delete(ctx, &ask).await? {
                DeleteOutcome::Declined => println!("Kept entry {}", id),
                DeleteOutcome::Deleted => println!("Deleted entry {}", id),
                DeleteOutcome::Failed(message) => bail!(
                    "Delete failed: {}",
                    message.unwrap_or_else(|| "unknown error".to_string())
                ),
            }
        }

        Commands::Insights => {
            let mut page = JournalListPage::mount(ctx).await?;
            app.ensure_signed_in(page.state())?;
            print_insights(&mut page, ctx).await?;
        }

        Commands::Quote => {
            let client = app.quote_source();
            let mut layout = AppLayout::new(ctx.session.clone());
            layout
                .mount(client.as_ref().map(|c| c as &dyn QuoteSource))
                .await;
            println!("{}", layout.quote_text());
            layout.unmount();
        }

        Commands::Resources => {
            println!("{}", RESOURCES_NOTICE);
            for resource in support_resources() {
                println!();
                println!("{}", resource.name);
                println!("  {}", resource.description);
                println!("  {}", resource.contact);
                println!("  {}", resource.url);
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

async fn print_insights(page: &mut JournalListPage, ctx: &PageContext) -> anyhow::Result<()> {
    println!("{}", page.insights().button_label());
    page.request_insights(ctx).await?;

    let insights = page.insights();
    if let Some(error) = insights.error() {
        bail!("{}", error);
    }
    println!("Weekly Insights");
    println!("{}", insights.result().unwrap_or_default());
    Ok(())
}

fn prompt(label: &str) -> anyhow::Result<String> {
    eprint!("{}", label);
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
}

fn confirm(question: &str) -> bool {
    match prompt(&format!("{} [y/N] ", question)) {
        Ok(answer) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
