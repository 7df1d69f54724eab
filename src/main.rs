use clap::{Parser, Subcommand};
use tarjimon::{BackendKind, Config, Language, RouteTable, Tarjimon, transliterate};
use tracing::info;

#[derive(Parser)]
#[command(name = "tarjimon", version, about = "Uzbek transliteration and translation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert Latin Uzbek to Cyrillic or back, detected from the input
    Translit { text: String },
    /// Translate between uz, ru and en
    Translate {
        text: String,
        /// Source language (uz, ru, en)
        #[arg(long = "from", short = 'f')]
        source: String,
        /// Target language (uz, ru, en)
        #[arg(long = "to", short = 't')]
        target: String,
        /// Override TARJIMON_BACKEND
        #[arg(long, short = 'b', value_enum)]
        backend: Option<BackendKind>,
        /// Show the route taken
        #[arg(long, short = 'v')]
        verbose: bool,
    },
    /// List direct and pivot routes
    Routes,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Translit { text } => {
            println!("{}", transliterate(&text));
        }
        Command::Translate {
            text,
            source,
            target,
            backend,
            verbose,
        } => {
            let mut config = Config::from_env()?;
            if let Some(backend) = backend {
                config = config.with_backend(backend);
            }

            let source = Language::parse(&source)?;
            let target = Language::parse(&target)?;
            let tarjimon = Tarjimon::from_config(&config)?;

            let plan = tarjimon.routes().plan(source, target)?;
            if verbose {
                info!(backend = %config.backend, %plan, "route");
            }

            match tarjimon.translate_plan(&text, &plan).await {
                Ok(translated) => println!("{}", translated),
                Err(e) => {
                    eprintln!("❌ Translation failed: {}", e);
                    return Err(e.into());
                }
            }
        }
        Command::Routes => {
            let table = RouteTable::standard();
            for (hop, model) in table.direct_hops() {
                println!("{}  direct  {}", hop, model);
            }
            for (hop, via) in table.pivot_hops() {
                println!("{}  pivot   via {}", hop, via);
            }
        }
    }

    Ok(())
}
