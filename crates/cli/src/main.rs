use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use unidir_core::{Contact, DEFAULT_QUERY_LIMIT, UniversityFilter, env_non_empty};
use unidir_service::UniversityService;
use unidir_storage::StorageBackend;

mod commands;

#[derive(Parser)]
#[command(name = "unidir")]
#[command(about = "University directory with validated records and derived slugs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a university; its slug is derived from the name
    Create {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[command(flatten)]
        fields: OptionalFields,
    },
    /// Change fields of one university; renaming recomputes the slug
    Update {
        #[command(flatten)]
        target: Target,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        address: Option<String>,
        /// Replace the contact list with an empty one
        #[arg(long, conflicts_with = "contact")]
        clear_contacts: bool,
        #[command(flatten)]
        fields: OptionalFields,
    },
    /// Show one university
    Get {
        #[command(flatten)]
        target: Target,
    },
    /// List universities ordered by name
    List {
        #[arg(short, long, default_value_t = DEFAULT_QUERY_LIMIT)]
        limit: usize,
    },
}

/// Which record a command addresses.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct Target {
    #[arg(long)]
    id: Option<String>,
    #[arg(long)]
    slug: Option<String>,
    /// Match on the exact display name
    #[arg(long = "match-name")]
    match_name: Option<String>,
}

impl Target {
    fn into_filter(self) -> Result<UniversityFilter> {
        match (self.id, self.slug, self.match_name) {
            (Some(id), _, _) => Ok(UniversityFilter::Id(id)),
            (None, Some(slug), _) => Ok(UniversityFilter::Slug(slug)),
            (None, None, Some(name)) => Ok(UniversityFilter::Name(name)),
            (None, None, None) => bail!("one of --id, --slug or --match-name is required"),
        }
    }
}

#[derive(Args)]
struct OptionalFields {
    /// Contact as TYPE=VALUE, repeatable
    #[arg(long = "contact", value_parser = parse_contact)]
    contact: Vec<Contact>,
    #[arg(long)]
    avg_gre: Option<f64>,
    #[arg(long)]
    avg_lang: Option<f64>,
    #[arg(long)]
    fees: Option<f64>,
}

fn parse_contact(raw: &str) -> Result<Contact, String> {
    raw.split_once('=')
        .map(|(kind, value)| Contact::new(kind.trim(), value.trim()))
        .ok_or_else(|| format!("expected TYPE=VALUE, got {raw:?}"))
}

pub(crate) fn get_db_path() -> PathBuf {
    env_non_empty("UNIDIR_DB_PATH").map(PathBuf::from).unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("unidir")
            .join("universities.db")
    })
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

async fn open_backend() -> Result<StorageBackend> {
    #[cfg(feature = "postgres")]
    if let Some(url) = env_non_empty("UNIDIR_DATABASE_URL") {
        return Ok(StorageBackend::new_postgres(&url).await?);
    }

    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    Ok(StorageBackend::new_sqlite(&db_path)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let backend = open_backend().await?;
    tracing::debug!(backend = backend.kind(), "storage ready");
    let service = UniversityService::new(Arc::new(backend));

    match cli.command {
        Commands::Create { name, description, address, fields } => {
            let candidate = commands::university::build_candidate(
                name.unwrap_or_default(),
                description.unwrap_or_default(),
                address.unwrap_or_default(),
                fields,
            );
            commands::university::run_create(&service, candidate).await?;
        },
        Commands::Update { target, name, description, address, clear_contacts, fields } => {
            let patch = commands::university::build_patch(
                name,
                description,
                address,
                clear_contacts,
                fields,
            );
            commands::university::run_update(&service, target.into_filter()?, patch).await?;
        },
        Commands::Get { target } => {
            commands::university::run_get(&service, &target.into_filter()?).await?;
        },
        Commands::List { limit } => {
            commands::university::run_list(&service, limit).await?;
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_contact_splits_on_first_equals() {
        let contact = parse_contact("website=https://x.edu/?a=b").unwrap();
        assert_eq!(contact, Contact::new("website", "https://x.edu/?a=b"));
    }

    #[test]
    fn parse_contact_requires_equals() {
        assert!(parse_contact("website").is_err());
    }

    #[test]
    fn parse_contact_keeps_empty_value_for_validation() {
        assert_eq!(parse_contact("phone=").unwrap(), Contact::new("phone", ""));
    }

    #[test]
    fn target_resolves_to_filter() {
        let target = Target { id: None, slug: Some("yale".to_owned()), match_name: None };
        assert_eq!(target.into_filter().unwrap(), UniversityFilter::Slug("yale".to_owned()));
    }

    #[test]
    fn empty_target_is_an_error() {
        let target = Target { id: None, slug: None, match_name: None };
        let err = target.into_filter().unwrap_err();
        assert!(err.to_string().contains("--match-name"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
