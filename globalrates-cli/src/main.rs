//! Global Exchange Rates CLI
//!
//! Command-line interface for the Global Exchange Rates API.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use globalrates_client::{
    Client, ConvertOptions, GetCurrenciesOptions, GetHistoricalOptions, GetLatestOptions,
    GetProvidersOptions,
};

#[derive(Parser)]
#[command(name = "globalrates")]
#[command(author, version, about = "Global Exchange Rates API CLI client", long_about = None)]
struct Cli {
    /// API key for the Subscription-Key header
    #[arg(long, env = "GLOBALRATES_API_KEY")]
    api_key: String,

    /// Base URL of the API (defaults to the production origin)
    #[arg(long, env = "GLOBALRATES_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported currencies
    Currencies {
        /// Currency codes to filter by (comma-separated)
        #[arg(long, value_delimiter = ',')]
        codes: Vec<String>,
    },
    /// List supported providers
    Providers {
        /// Provider codes to filter by (comma-separated)
        #[arg(long, value_delimiter = ',')]
        codes: Vec<String>,
        /// Restrict to providers from one country
        #[arg(long)]
        country: Option<String>,
    },
    /// Get the latest exchange rates
    Latest {
        #[arg(long)]
        provider: Option<String>,
        /// Currencies to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        currencies: Vec<String>,
        #[arg(long)]
        base: Option<String>,
    },
    /// Get historical exchange rates for a date
    Historical {
        /// Date in YYYY-MM-DD format
        date: NaiveDate,
        /// Ask for the latest rates published up to the date
        #[arg(long)]
        latest: bool,
        #[arg(long)]
        provider: Option<String>,
        /// Currencies to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        currencies: Vec<String>,
        #[arg(long)]
        base: Option<String>,
    },
    /// Convert an amount between currencies
    Convert {
        /// Amount to convert
        amount: f64,
        #[arg(long)]
        base: Option<String>,
        /// Target currency codes (comma-separated)
        #[arg(long, value_delimiter = ',')]
        to: Vec<String>,
        #[arg(long)]
        provider: Option<String>,
        /// Date in YYYY-MM-DD format for historical conversions
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut builder = Client::builder(cli.api_key);
    if let Some(url) = cli.api_url {
        builder = builder.base_url(url);
    }
    let client = builder.build()?;

    match cli.command {
        Commands::Currencies { codes } => {
            let options = GetCurrenciesOptions { codes };
            let currencies = client.get_currencies(Some(options)).await?;
            println!("{}", serde_json::to_string_pretty(&currencies)?);
        }

        Commands::Providers { codes, country } => {
            let options = GetProvidersOptions {
                codes,
                country_code: country,
            };
            let providers = client.get_providers(Some(options)).await?;
            println!("{}", serde_json::to_string_pretty(&providers)?);
        }

        Commands::Latest {
            provider,
            currencies,
            base,
        } => {
            let options = GetLatestOptions {
                provider,
                currencies,
                base_currency: base,
            };
            let rates = client.get_latest(Some(options)).await?;
            println!("{}", serde_json::to_string_pretty(&rates)?);
        }

        Commands::Historical {
            date,
            latest,
            provider,
            currencies,
            base,
        } => {
            let options = GetHistoricalOptions {
                latest,
                provider,
                currencies,
                base_currency: base,
            };
            let rates = client.get_historical(date, Some(options)).await?;
            println!("{}", serde_json::to_string_pretty(&rates)?);
        }

        Commands::Convert {
            amount,
            base,
            to,
            provider,
            date,
        } => {
            let options = ConvertOptions {
                base_currency: base,
                to_currencies: to,
                provider,
                date,
            };
            let conversion = client.convert(amount, Some(options)).await?;
            println!("{}", serde_json::to_string_pretty(&conversion)?);
        }
    }

    Ok(())
}
