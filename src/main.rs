use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use folio_dash::cli::{
    handle_dashboard_command, handle_export_command, handle_goal_command, handle_load_command,
    handle_net_worth_command, handle_parse_command, handle_rates_command, handle_upload_command,
    ExportFormat, RateOverrides,
};
use folio_dash::config::{FolioPaths, Settings};

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Terminal personal-finance dashboard",
    long_about = "folio loads mutual-fund and brokerage CSV exports, totals them, \
                  and reports a single-currency net worth using live exchange rates."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show totals, exchange rates, net worth and goal progress
    Dashboard {
        /// Currency to report in (defaults to the configured display currency)
        #[arg(short, long)]
        currency: Option<String>,
    },

    /// Load a bundled export (never fails; reports errors inline)
    Load {
        /// Source (mutual-fund, brokerage)
        source: String,
        /// Data-dir relative path or URL (defaults to the configured file)
        location: Option<String>,
        /// Print the parsed rows
        #[arg(short, long)]
        rows: bool,
    },

    /// Load a CSV file you picked
    Upload {
        /// Source (mutual-fund, brokerage)
        source: String,
        /// Path to the CSV file
        file: PathBuf,
        /// Also save an unchanged copy of the file here
        #[arg(long)]
        save_copy: Option<PathBuf>,
        /// Print the parsed rows
        #[arg(short, long)]
        rows: bool,
    },

    /// Show how a CSV file splits into rows
    Parse {
        /// Path to the CSV file
        file: PathBuf,
        /// Split on every comma, ignoring quotes
        #[arg(long)]
        lenient: bool,
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch current exchange rates
    Rates {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert balances into a single-currency net worth
    NetWorth {
        /// Base-currency balance (defaults to the configured balance)
        #[arg(long, allow_negative_numbers = true)]
        base: Option<f64>,
        /// USD balance
        #[arg(long, allow_negative_numbers = true)]
        usd: Option<f64>,
        /// EUR balance
        #[arg(long, allow_negative_numbers = true)]
        euro: Option<f64>,
        /// Currency to report in
        #[arg(short, long)]
        currency: Option<String>,
        #[command(flatten)]
        rates: RateOverrides,
    },

    /// Convert a base-currency goal amount
    Goal {
        /// Goal amount in base currency (defaults to the configured goal)
        amount: Option<f64>,
        /// Currency to convert into
        #[arg(short, long)]
        currency: Option<String>,
        #[command(flatten)]
        rates: RateOverrides,
    },

    /// Export a CSV file's parsed rows
    Export {
        /// Source (mutual-fund, brokerage)
        source: String,
        /// Path to the CSV file
        file: PathBuf,
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Write default settings and create the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let paths = FolioPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Dashboard { currency }) => {
            handle_dashboard_command(&paths, &settings, currency).await?;
        }
        Some(Commands::Load {
            source,
            location,
            rows,
        }) => {
            handle_load_command(&paths, &settings, &source, location, rows).await?;
        }
        Some(Commands::Upload {
            source,
            file,
            save_copy,
            rows,
        }) => {
            handle_upload_command(&paths, &settings, &source, &file, save_copy, rows).await?;
        }
        Some(Commands::Parse {
            file,
            lenient,
            json,
        }) => {
            handle_parse_command(&file, lenient, json)?;
        }
        Some(Commands::Rates { json }) => {
            handle_rates_command(&settings, json).await?;
        }
        Some(Commands::NetWorth {
            base,
            usd,
            euro,
            currency,
            rates,
        }) => {
            handle_net_worth_command(&settings, base, usd, euro, currency, &rates).await?;
        }
        Some(Commands::Goal {
            amount,
            currency,
            rates,
        }) => {
            handle_goal_command(&settings, amount, currency, &rates).await?;
        }
        Some(Commands::Export {
            source,
            file,
            output,
            format,
            pretty,
        }) => {
            handle_export_command(&paths, &settings, &source, &file, output, format, pretty)
                .await?;
        }
        Some(Commands::Init) => {
            println!("Initializing folio-dash at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Place your exports in {}:", paths.data_dir().display());
            println!("  - {} (mutual-fund holdings)", settings.mutual_fund_file);
            println!("  - {} (brokerage trades)", settings.brokerage_file);
            println!();
            println!("Run 'folio dashboard' to see your portfolio.");
        }
        Some(Commands::Config) => {
            println!("folio-dash Configuration");
            println!("========================");
            println!("Config file:      {}", paths.settings_file().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Base currency:    {}", settings.base_currency);
            println!("  Display currency: {}", settings.display_currency);
            println!("  Rates URL:        {}", settings.rates_url());
            println!("  Mutual funds:     {}", settings.mutual_fund_file);
            println!("  Brokerage:        {}", settings.brokerage_file);
            println!(
                "  Balances:         base {} / USD {} / EUR {}",
                settings.balances.base, settings.balances.usd, settings.balances.euro
            );
            println!("  Goal:             {}", settings.goal_amount);
        }
        None => {
            println!("folio - Terminal personal-finance dashboard");
            println!();
            println!("Run 'folio --help' for usage information.");
            println!("Run 'folio dashboard' to see your portfolio.");
        }
    }

    Ok(())
}
