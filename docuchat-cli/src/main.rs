//! DocuChat CLI - terminal chat client for a PDF RAG backend
//!
//! Provides an interactive chat mode plus one-shot subcommands for asking
//! questions and managing uploaded documents.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use docuchat_app::{AppSession, ConversationStore, UploadCoordinator};
use docuchat_client::{ApiConfig, HttpRagClient, RagBackend};
use docuchat_core::{
    init_logging, DocuChatConfig, DocuChatError, DocuChatResult, LoggingConfig, Message, ThemeId,
};

#[derive(Parser)]
#[command(name = "docuchat")]
#[command(about = "Chat with your PDF documents through a RAG backend")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides configuration)
    #[arg(short, long)]
    server: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat session
    Chat {
        /// Hide source chips under answers
        #[arg(long)]
        no_sources: bool,

        /// Theme to start with (cyberpunk, neon, sunset, ocean, forest,
        /// cosmic, matrix, sakura)
        #[arg(long)]
        theme: Option<ThemeId>,
    },

    /// Ask a single question
    Ask {
        /// Question to ask about the uploaded documents
        question: String,
    },

    /// Upload PDF documents for indexing
    Upload {
        /// Files to upload
        files: Vec<PathBuf>,

        /// Clear the vector database before ingesting the first file
        #[arg(long)]
        clear_old: bool,
    },

    /// List documents known to the backend
    Files,

    /// Delete a document on the backend
    Delete {
        /// Document name as reported by the file list
        name: String,
    },

    /// Clear the entire vector database
    Clear {
        /// Confirm the destructive operation
        #[arg(long)]
        yes: bool,
    },

    /// Show backend database statistics
    Stats,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Initialize default configuration
        #[arg(long)]
        init: bool,

        /// Validate current configuration
        #[arg(long)]
        validate: bool,
    },
}

#[tokio::main]
async fn main() -> DocuChatResult<()> {
    let cli = Cli::parse();

    let mut logging_config = LoggingConfig::default();
    if cli.verbose {
        logging_config.level = "debug".to_string();
    }

    init_logging(&logging_config).map_err(|e| DocuChatError::Config {
        message: format!("Failed to initialize logging: {}", e),
        source: Some(e),
        context: docuchat_core::ErrorContext::new("cli")
            .with_operation("init_logging")
            .with_suggestion("Check logging configuration"),
    })?;

    info!("Starting DocuChat CLI v{}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(cli.config.as_ref())?;
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }

    // Config management needs no backend connection
    if let Commands::Config {
        show,
        init,
        validate,
    } = &cli.command
    {
        return handle_config(*show, *init, *validate, &config).await;
    }

    let api_config =
        ApiConfig::new(config.server.base_url.clone()).with_timeout(config.server.timeout_seconds);
    let backend: Arc<dyn RagBackend> = Arc::new(HttpRagClient::new(api_config)?);

    match cli.command {
        Commands::Chat { no_sources, theme } => {
            handle_chat(backend, &config, !no_sources, theme).await?;
        }
        Commands::Ask { question } => {
            handle_ask(backend, &question, config.ui.show_sources).await?;
        }
        Commands::Upload { files, clear_old } => {
            handle_upload(backend, files, clear_old).await?;
        }
        Commands::Files => {
            handle_files(backend).await?;
        }
        Commands::Delete { name } => {
            handle_delete(backend, &name).await?;
        }
        Commands::Clear { yes } => {
            handle_clear(backend, yes).await?;
        }
        Commands::Stats => {
            handle_stats(backend).await?;
        }
        Commands::Config { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn load_config(config_path: Option<&PathBuf>) -> DocuChatResult<DocuChatConfig> {
    if let Some(path) = config_path {
        info!("Loading configuration from {:?}", path);
        DocuChatConfig::from_file(path)
    } else {
        DocuChatConfig::load_default()
    }
}

async fn handle_chat(
    backend: Arc<dyn RagBackend>,
    config: &DocuChatConfig,
    show_sources: bool,
    theme: Option<ThemeId>,
) -> DocuChatResult<()> {
    let mut session = AppSession::new(backend, theme.unwrap_or(config.ui.theme));
    session.initialize().await;

    println!("🤖 **DocuChat**");
    println!("🌐 Backend: {}", config.server.base_url);
    println!(
        "📄 {} document(s) loaded | 🎨 Theme: {}",
        session.uploads.files().len(),
        session.theme.current().label()
    );
    println!("💡 Type 'help' for commands, 'quit' to exit\n");

    loop {
        print!("💬 You: ");
        use std::io::{self, Write};
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        let mut parts = input.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or_default().to_lowercase();
        let rest = parts.next().unwrap_or("").trim();

        match command.as_str() {
            "quit" | "exit" | "q" => {
                println!("👋 Goodbye!");
                break;
            }
            "help" | "h" => {
                show_help();
            }
            "files" => {
                print_files(&session.uploads);
            }
            "upload" => {
                if rest.is_empty() {
                    println!("Usage: upload <path> [<path>...]\n");
                    continue;
                }
                let paths: Vec<PathBuf> = rest.split_whitespace().map(PathBuf::from).collect();
                session.uploads.accept_files(&paths).await;
                print_notices(&mut session.uploads);
                print_files(&session.uploads);
            }
            "hide" => {
                match rest.parse::<u64>() {
                    Ok(id) if session.uploads.hide_locally(id) => {
                        println!("🙈 Hidden from the local list (the backend keeps the file)\n");
                    }
                    Ok(id) => println!("❌ No entry with id {}\n", id),
                    Err(_) => println!("Usage: hide <id> (ids are shown by 'files')\n"),
                }
            }
            "delete" => {
                if rest.is_empty() {
                    println!("Usage: delete <name>\n");
                    continue;
                }
                match session.uploads.delete_remote(rest).await {
                    Ok(()) => println!("🗑️  Deleted {} on the backend\n", rest),
                    Err(e) => {
                        e.log();
                        println!("❌ Delete failed: {}\n", e.user_message());
                    }
                }
            }
            "theme" => {
                if rest.is_empty() {
                    session.theme.open_panel();
                    print_theme_panel(session.theme.current());
                } else {
                    match rest.parse::<ThemeId>() {
                        Ok(id) => {
                            session.theme.choose(id);
                            println!("🎨 Theme set to {}\n", id.label());
                        }
                        Err(e) => println!("❌ {}\n", e),
                    }
                }
            }
            "stats" => {
                let messages = session.conversation.messages();
                println!(
                    "📊 {} message(s), {} document(s) visible\n",
                    messages.len(),
                    session.uploads.files().len()
                );
            }
            _ => {
                print!("🤔 Thinking...");
                io::stdout().flush()?;

                session.conversation.submit_question(input).await;
                if let Some(message) = session.conversation.last_message() {
                    print!("\r🤖 Assistant: ");
                    println!("{}\n", message.content);
                    if show_sources {
                        print_source_chips(message);
                    }
                }
            }
        }
    }

    Ok(())
}

async fn handle_ask(
    backend: Arc<dyn RagBackend>,
    question: &str,
    show_sources: bool,
) -> DocuChatResult<()> {
    let mut store = ConversationStore::new(backend);

    if !store.submit_question(question).await {
        return Err(docuchat_core::validation_error!(
            "Question must not be empty",
            "question",
            "cli"
        ));
    }

    if let Some(message) = store.last_message() {
        println!("🎯 **Answer:**");
        println!("{}", message.content);
        if show_sources {
            print_source_chips(message);
        }
    }

    Ok(())
}

async fn handle_upload(
    backend: Arc<dyn RagBackend>,
    files: Vec<PathBuf>,
    clear_old: bool,
) -> DocuChatResult<()> {
    if files.is_empty() {
        return Err(docuchat_core::validation_error!(
            "No files given",
            "files",
            "cli"
        ));
    }

    let mut uploads = UploadCoordinator::new(backend);
    uploads.accept_files_with_options(&files, clear_old).await;

    print_notices(&mut uploads);
    print_files(&uploads);
    Ok(())
}

async fn handle_files(backend: Arc<dyn RagBackend>) -> DocuChatResult<()> {
    let mut uploads = UploadCoordinator::new(backend);
    uploads.reconcile().await?;
    print_files(&uploads);
    Ok(())
}

async fn handle_delete(backend: Arc<dyn RagBackend>, name: &str) -> DocuChatResult<()> {
    let mut uploads = UploadCoordinator::new(backend);
    uploads.delete_remote(name).await?;
    println!("🗑️  Deleted {} on the backend", name);
    print_files(&uploads);
    Ok(())
}

async fn handle_clear(backend: Arc<dyn RagBackend>, yes: bool) -> DocuChatResult<()> {
    if !yes {
        println!("⚠️  This clears the entire vector database. Re-run with --yes to confirm.");
        return Ok(());
    }

    let ack = backend.clear_database().await?;
    println!(
        "✅ {}",
        ack.message.as_deref().unwrap_or("Vector database cleared")
    );
    Ok(())
}

async fn handle_stats(backend: Arc<dyn RagBackend>) -> DocuChatResult<()> {
    let stats = backend.database_stats().await?;
    println!("📊 **Database statistics:**");
    println!("{}", serde_json::to_string_pretty(&stats.database)?);
    Ok(())
}

async fn handle_config(
    show: bool,
    init: bool,
    validate: bool,
    config: &DocuChatConfig,
) -> DocuChatResult<()> {
    if init {
        let config_path = DocuChatConfig::default_paths()
            .into_iter()
            .next()
            .unwrap_or_else(|| PathBuf::from("docuchat.toml"));
        if let Some(parent) = config_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        DocuChatConfig::default().save_to_file(&config_path)?;
        println!("✅ Configuration initialized at: {:?}", config_path);
        println!("📝 Edit the file to point at your RAG backend.");
    }

    if show {
        println!("📋 Current configuration:");
        println!(
            "{}",
            toml::to_string_pretty(config).map_err(|e| DocuChatError::Config {
                message: format!("Failed to serialize config: {}", e),
                source: Some(Box::new(e)),
                context: docuchat_core::ErrorContext::new("cli").with_operation("config_show"),
            })?
        );
    }

    if validate {
        match config.validate() {
            Ok(()) => println!("✅ Configuration is valid"),
            Err(e) => {
                println!("❌ Configuration validation failed: {}", e);
                return Err(e);
            }
        }
    }

    Ok(())
}

fn show_help() {
    println!("🔧 **Available commands:**");
    println!("  help, h          - Show this help message");
    println!("  files            - List visible documents");
    println!("  upload <path>... - Upload PDF documents");
    println!("  hide <id>        - Remove an entry from the local list only");
    println!("  delete <name>    - Delete a document on the backend");
    println!("  theme [name]     - Show the theme panel or pick a theme");
    println!("  stats            - Show session statistics");
    println!("  quit, exit       - Exit chat");
    println!("  <anything else>  - Ask a question about your documents\n");
}

fn print_files(uploads: &UploadCoordinator) {
    let files = uploads.files();
    if files.is_empty() {
        println!("📄 No documents loaded\n");
        return;
    }

    println!("📄 {} document(s):", files.len());
    for file in files {
        let marker = match file.status {
            docuchat_core::FileStatus::Confirmed => " ",
            docuchat_core::FileStatus::Optimistic => "~",
        };
        println!(
            "  {}{:>4}  {}  ({})",
            marker,
            file.id,
            file.name,
            file.size_display()
        );
    }
    println!();
}

fn print_notices(uploads: &mut UploadCoordinator) {
    for notice in uploads.take_notices() {
        println!("⚠️  {}", notice);
    }
}

fn print_source_chips(message: &Message) {
    if message.sources.is_empty() {
        return;
    }
    println!("📚 Sources:");
    for source in &message.sources {
        println!("  [{}]", source.chip());
    }
    println!();
}

fn print_theme_panel(current: ThemeId) {
    println!("🎨 **Choose your theme** (theme <name>):");
    for theme in ThemeId::ALL {
        let marker = if theme == current { "●" } else { " " };
        println!("  {} {:<10} {}", marker, theme, theme.label());
    }
    println!();
}
