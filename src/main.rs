use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{handle_expense_command, handle_register, login, ExpenseCommands};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::services::ExpenseService;
use expense_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal-based personal expense ledger",
    long_about = "Records dated expenses per user in a plain text file and \
                  summarizes spending by category."
)]
struct Cli {
    /// User whose ledger to open
    #[arg(short, long, global = true, env = "LEDGER_USER")]
    user: Option<String>,

    /// Password (prompted for when omitted)
    #[arg(long, global = true, env = "LEDGER_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    Register {
        /// Username (no commas, spaces, or path separators)
        username: String,
    },

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let (settings, settings_error) = match Settings::load_or_create(&paths) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    expense_ledger::logging::init(&settings.log_level);
    if let Some(e) = settings_error {
        tracing::warn!(error = %e, "ignoring unreadable settings, using defaults");
    }

    match cli.command {
        Some(Commands::Register { username }) => {
            let storage = Storage::new(paths)?;
            handle_register(&storage, &username, cli.password)?;
        }
        Some(Commands::Expense(cmd)) => {
            let storage = Storage::new(paths)?;
            let username = login(&storage, cli.user, cli.password)?;
            let mut service = ExpenseService::open(&storage, &username);
            handle_expense_command(&mut service, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing ledger at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'ledger register <username>' to create a user.");
        }
        Some(Commands::Config) => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Credential store: {}", paths.users_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("Expense Ledger - personal expense tracking");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}
