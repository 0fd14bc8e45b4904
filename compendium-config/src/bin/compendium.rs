//! Terminal client for the Compendium catalog.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use compendium_config::render::{render_detail, render_page};
use compendium_config::util::init_tracing;
use compendium_config::{Config, ConfigLoad, ConfigLoader, ConfigLoaderOptions};
use compendium_core::api::{ApiClient, ApiRecord, CorpusSource, RecordSource};
use compendium_core::detail::DetailController;
use compendium_core::list::{ListPage, ListPresentation};
use compendium_core::model::record::SEARCH_PARAM;
use compendium_core::model::{
    CardDensity, Character, Item, ListViewMode, Monster, RecordKind, ThemeMode,
};
use compendium_core::preferences::{JsonFilePreferenceStore, Preferences};
use compendium_core::query::{QueryParamSync, SortOwnership, SortState};
use compendium_core::routes;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Origin used for in-process page locations; only path and query matter.
const PAGE_ORIGIN: &str = "http://compendium.local";

#[derive(Parser, Debug)]
#[command(name = "compendium")]
#[command(about = "Browse characters, items and monsters from the catalog API")]
struct Cli {
    /// Configuration file (overrides COMPENDIUM_CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Environment file to load before reading COMPENDIUM_* variables
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// API base URL (overrides config)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show one list page with its filters, summary and records
    List(ListArgs),
    /// Show one record by id
    Show {
        kind: RecordKind,
        /// Raw id segment; anything but digits resolves to not found
        id: String,
    },
    /// Read or change stored display preferences
    #[command(subcommand)]
    Prefs(PrefsCommand),
}

#[derive(ClapArgs, Debug)]
struct ListArgs {
    kind: RecordKind,

    /// Case-insensitive search text
    #[arg(short, long)]
    query: Option<String>,

    /// Selector filter as key=value, e.g. --filter cr=2
    #[arg(short, long = "filter", value_parser = parse_filter)]
    filters: Vec<(String, String)>,

    /// Column key to sort by
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Layout for this run; stored as the new preference
    #[arg(long)]
    view: Option<ViewArg>,

    /// Page size (overrides config)
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    Cards,
    Table,
}

impl From<ViewArg> for ListViewMode {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::Cards => ListViewMode::Cards,
            ViewArg::Table => ListViewMode::Table,
        }
    }
}

#[derive(Debug, Subcommand)]
enum PrefsCommand {
    /// Print every stored preference
    Show,
    /// Store one preference
    Set {
        #[arg(value_enum)]
        key: PrefKey,
        value: String,
    },
    /// Advance the theme: light, dark, system
    CycleTheme,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PrefKey {
    Density,
    View,
    Theme,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_runtime_config(&cli)?;

    match cli.command {
        Command::List(args) => match args.kind {
            RecordKind::Characters => run_list::<Character>(&config, args).await,
            RecordKind::Items => run_list::<Item>(&config, args).await,
            RecordKind::Monsters => run_list::<Monster>(&config, args).await,
        },
        Command::Show { kind, id } => match kind {
            RecordKind::Characters => run_show::<Character>(&config, &id).await,
            RecordKind::Items => run_show::<Item>(&config, &id).await,
            RecordKind::Monsters => run_show::<Monster>(&config, &id).await,
        },
        Command::Prefs(command) => run_prefs(&config, command),
    }
}

fn load_runtime_config(cli: &Cli) -> anyhow::Result<Config> {
    let ConfigLoad {
        mut config,
        warnings,
    } = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: cli.config.clone(),
        env_file: cli.env_file.clone(),
    })
    .load()
    .context("failed to load configuration")?;

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }

    init_tracing(&config.logging.filter);

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        debug!(path = %path.display(), "using configuration file");
    }
    for warning in &warnings {
        warn!(message = %warning, "configuration warning");
    }

    Ok(config)
}

fn preferences(config: &Config) -> Preferences {
    Preferences::new(Arc::new(JsonFilePreferenceStore::open(
        config.preferences.path.clone(),
    )))
}

fn api_client(config: &Config) -> anyhow::Result<Arc<ApiClient>> {
    let client = ApiClient::with_timeout(&config.api.base_url, config.api.timeout)
        .context("failed to build API client")?;
    Ok(Arc::new(client))
}

/// A local corpus file wins over the API when one is configured.
async fn record_source<R>(
    config: &Config,
) -> anyhow::Result<(Arc<dyn RecordSource<R>>, Option<Arc<ApiClient>>)>
where
    R: ApiRecord,
{
    if let Some(path) = config.corpus.path_for(R::KIND) {
        info!(kind = %R::KIND, path = %path.display(), "reading local corpus");
        let corpus = CorpusSource::<R>::from_path(&path)
            .with_context(|| format!("failed to read corpus {}", path.display()))?;
        let source: Arc<dyn RecordSource<R>> = Arc::new(corpus);
        return Ok((source, None));
    }

    let client = api_client(config)?;
    if let Some(token) = &config.api.token {
        client.set_token(Some(token.clone())).await;
    }
    let source: Arc<dyn RecordSource<R>> = client.clone();
    Ok((source, Some(client)))
}

async fn run_list<R>(config: &Config, args: ListArgs) -> anyhow::Result<()>
where
    R: ListPresentation + ApiRecord,
{
    let (source, client) = record_source::<R>(config).await?;

    let mut params = QueryParamSync::parse(&format!(
        "{PAGE_ORIGIN}{}",
        routes::list_path(R::KIND)
    ))?;
    if let Some(query) = &args.query {
        params.update(SEARCH_PARAM, query);
    }
    for (key, value) in &args.filters {
        if R::filter_for_param(key).is_none() {
            bail!("unknown filter '{key}' for {}", R::KIND);
        }
        params.update(key, value);
    }

    let sort = args.sort.as_ref().map(|key| {
        if args.desc {
            SortState::desc(key.clone())
        } else {
            SortState::asc(key.clone())
        }
    });

    let mut page = ListPage::with_limit(
        params,
        source,
        preferences(config),
        args.limit.unwrap_or(config.list.page_limit),
    )
    .with_sort(SortOwnership::internal(sort));

    if let Some(view) = args.view {
        page.set_view_mode(view.into())
            .context("failed to store view preference")?;
    }
    if let Some(client) = &client {
        page.load_metadata(client.as_ref()).await;
    }

    page.mount().await;
    print!("{}", render_page(&page.render()));
    Ok(())
}

async fn run_show<R>(config: &Config, segment: &str) -> anyhow::Result<()>
where
    R: ApiRecord + Serialize,
{
    let (source, _) = record_source::<R>(config).await?;
    let controller = DetailController::new(source);
    controller.load_segment(segment).await;
    print!("{}", render_detail(&controller.state())?);
    Ok(())
}

fn run_prefs(config: &Config, command: PrefsCommand) -> anyhow::Result<()> {
    let prefs = preferences(config);
    match command {
        PrefsCommand::Show => {}
        PrefsCommand::Set { key, value } => match key {
            PrefKey::Density => {
                let Some(density) = CardDensity::parse(&value) else {
                    bail!("density must be compact or comfortable");
                };
                prefs.set_card_density(density)?;
            }
            PrefKey::View => {
                let Some(mode) = ListViewMode::parse(&value) else {
                    bail!("view must be cards or table");
                };
                prefs.set_list_view(mode)?;
            }
            PrefKey::Theme => {
                let Some(mode) = ThemeMode::parse(&value) else {
                    bail!("theme must be light, dark or system");
                };
                prefs.set_theme(mode)?;
            }
        },
        PrefsCommand::CycleTheme => {
            prefs.cycle_theme()?;
        }
    }

    println!("density: {}", prefs.card_density());
    println!("view: {}", prefs.list_view());
    println!("theme: {}", prefs.theme());
    Ok(())
}
