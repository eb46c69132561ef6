//! useradmin - command-line admin console for the user-management service
//!
//! - Switch verified / suspended / restricted flags
//! - Edit a profile's website and social links
//! - Inspect and replace scope grants of users and API clients

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use useradmin_client::{AdminApi, AdminApiClient};
use useradmin_console::{
    logging, ConsoleConfig, CustomDataEditor, FlagSwitches, PrintNotifier, ScopeEditor,
};
use useradmin_core::{AdminFlag, Notifier, Target, TargetType, UserRecord};
use useradmin_scope::Selection;

/// useradmin CLI
#[derive(Parser)]
#[command(name = "useradmin")]
#[command(about = "Admin console for user accounts, profile data and permission scopes")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "useradmin.toml", env = "USERADMIN_CONFIG")]
    config: PathBuf,

    /// Override the service base url
    #[arg(long, env = "USERADMIN_BASE_URL")]
    base_url: Option<String>,

    /// Bearer token for the service (overrides config)
    #[arg(long, env = "USERADMIN_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Switch an account flag on or off
    Flag {
        /// User id
        target: Target,
        /// verified | suspended | restricted
        flag: AdminFlag,
        /// New state
        #[arg(value_enum)]
        state: Switch,
    },

    /// Replace a profile's custom data
    CustomData {
        /// User id
        target: Target,
        /// Start from the customData of a user document (JSON)
        #[arg(long)]
        user: Option<PathBuf>,
        /// Website url (empty string clears it)
        #[arg(long)]
        website: Option<String>,
        /// Social link as PLATFORM=URL; empty URL removes the link
        #[arg(long = "social", value_name = "PLATFORM=URL")]
        social: Vec<String>,
        /// Print the payload without sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Scope grant commands
    Scopes {
        #[command(subcommand)]
        command: ScopesCommand,
    },
}

#[derive(Subcommand)]
enum ScopesCommand {
    /// Print the scope tree with what a grant list allows
    Tree {
        /// Granted scope names
        #[arg(long, value_delimiter = ',')]
        granted: Vec<String>,
        /// Acting admin's grants (overrides config)
        #[arg(long, value_delimiter = ',')]
        actor: Option<Vec<String>>,
    },

    /// Toggle scopes starting from the current grants and save the result
    Set {
        /// User or client id
        target: Target,
        /// Kind of target
        #[arg(long = "type", default_value = "user")]
        target_type: TargetType,
        /// Start from the scope grants of a user document (JSON)
        #[arg(long)]
        user: Option<PathBuf>,
        /// Current grants of the target, added to those of --user
        #[arg(long, value_delimiter = ',')]
        granted: Option<Vec<String>>,
        /// Scope to toggle; repeat to apply several in order
        #[arg(long = "toggle", value_name = "SCOPE")]
        toggles: Vec<String>,
        /// Acting admin's grants (overrides config)
        #[arg(long, value_delimiter = ',')]
        actor: Option<Vec<String>>,
        /// Print the resulting grants without saving
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Switch {
    On,
    Off,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConsoleConfig::load(&cli.config)?;
    logging::init(&config.logging.level, cli.verbose);
    info!("Loaded configuration from {:?}", cli.config);

    // Apply CLI overrides
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(token) = cli.token {
        config.api.token = Some(token);
    }

    config.validate()?;

    let notifier: Arc<dyn Notifier> = Arc::new(PrintNotifier);

    match cli.command {
        Command::Flag { target, flag, state } => {
            let api = connect(&config)?;
            let mut switches = FlagSwitches::new(api, notifier, target);
            switches.set(flag, matches!(state, Switch::On)).await?;
        }
        Command::CustomData {
            target,
            user,
            website,
            social,
            dry_run,
        } => {
            let api = connect(&config)?;
            let mut editor =
                CustomDataEditor::new(api, notifier, target, config.profile.platforms.clone());

            if let Some(path) = user {
                let record = read_user(&path)?;
                editor = editor.with_data(record.custom_data.unwrap_or_default());
            }
            if let Some(website) = website {
                editor.set_website(website);
            }
            for entry in &social {
                let (platform, url) = entry
                    .split_once('=')
                    .with_context(|| format!("--social expects PLATFORM=URL, got '{}'", entry))?;
                editor.set_social(platform.trim(), url)?;
            }

            println!("{}", serde_json::to_string_pretty(editor.data())?);
            if !dry_run {
                editor.save().await?;
            }
        }
        Command::Scopes { command } => run_scopes(&config, notifier, command).await?,
    }

    Ok(())
}

async fn run_scopes(
    config: &ConsoleConfig,
    notifier: Arc<dyn Notifier>,
    command: ScopesCommand,
) -> Result<()> {
    let tree = Arc::new(config.scope_tree()?);

    match command {
        ScopesCommand::Tree { granted, actor } => {
            let actor = actor.unwrap_or_else(|| config.actor.scopes.clone());
            let selection: Selection = tree.expand(&granted);
            print!("{}", tree.outline(&selection, Some(&actor)));
        }
        ScopesCommand::Set {
            target,
            target_type,
            user,
            granted,
            toggles,
            actor,
            dry_run,
        } => {
            let api = connect(config)?;
            let actor = actor.unwrap_or_else(|| config.actor.scopes.clone());
            let mut editor =
                ScopeEditor::new(api, notifier, tree, target, target_type).with_actor(actor);

            // Without either source the current grants are unknown and the
            // editor refuses to save.
            if user.is_some() || granted.is_some() {
                let mut current = match &user {
                    Some(path) => read_user(path)?.granted_scopes().to_vec(),
                    None => Vec::new(),
                };
                current.extend(granted.unwrap_or_default());
                editor = editor.with_granted(&current);
            }

            for name in &toggles {
                let outcome = editor.toggle(name)?;
                debug!(scope = %name, ?outcome, "Applied toggle");
            }

            print!("{}", editor.outline());
            println!("grants: {}", editor.pending_grants().join(", "));

            if !dry_run {
                editor.save().await?;
            }
        }
    }

    Ok(())
}

fn connect(config: &ConsoleConfig) -> Result<Arc<dyn AdminApi>> {
    let client = AdminApiClient::new(config.client_config())
        .context("Failed to create admin API client")?;
    Ok(Arc::new(client))
}

fn read_user(path: &Path) -> Result<UserRecord> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read user document {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse user document {}", path.display()))
}
