use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

use crate::domain::{DescriptionPolicy, EditPolicy};

/// Which store backs the registry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Process-local maps; nothing survives a restart
    Memory,
    /// SQLite file at `--database-url`
    #[default]
    Sqlite,
}

/// `--description-policy` values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DescriptionArg {
    /// Required on addMember only
    #[default]
    OnCreate,
    /// Required on addMember and editMember
    Always,
    /// Never required
    Optional,
}

impl From<DescriptionArg> for DescriptionPolicy {
    fn from(arg: DescriptionArg) -> Self {
        match arg {
            DescriptionArg::OnCreate => DescriptionPolicy::OnCreate,
            DescriptionArg::Always => DescriptionPolicy::Always,
            DescriptionArg::Optional => DescriptionPolicy::Optional,
        }
    }
}

/// `--edit-policy` values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EditArg {
    /// Write under the supplied id whether or not it exists
    #[default]
    Upsert,
    /// Reject ids that are not stored yet
    RequireExisting,
}

impl From<EditArg> for EditPolicy {
    fn from(arg: EditArg) -> Self {
        match arg {
            EditArg::Upsert => EditPolicy::Upsert,
            EditArg::RequireExisting => EditPolicy::RequireExisting,
        }
    }
}

/// Command-line arguments for the registry server
#[derive(Parser, Debug, Clone)]
#[command(name = "family-registry")]
#[command(about = "Family member registry exposed over GraphQL")]
#[command(version)]
pub struct Config {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000", env = "REGISTRY_BIND")]
    pub bind: SocketAddr,

    #[arg(long, value_enum, default_value_t = StoreKind::Sqlite, env = "REGISTRY_STORE")]
    pub store: StoreKind,

    /// SQLite connection URL, created if missing
    #[arg(
        long,
        default_value = "sqlite:family_registry.db",
        env = "REGISTRY_DATABASE_URL"
    )]
    pub database_url: String,

    /// Which requests must carry a description
    #[arg(
        long,
        value_enum,
        default_value_t = DescriptionArg::OnCreate,
        env = "REGISTRY_DESCRIPTION_POLICY"
    )]
    pub description_policy: DescriptionArg,

    /// What `editMember` does with an id that is not stored yet
    #[arg(
        long,
        value_enum,
        default_value_t = EditArg::Upsert,
        env = "REGISTRY_EDIT_POLICY"
    )]
    pub edit_policy: EditArg,

    /// Allowed CORS origin; any origin when unset
    #[arg(long, env = "REGISTRY_CORS_ORIGIN")]
    pub cors_origin: Option<String>,
}

impl Config {
    /// In-memory configuration with default policies
    pub fn in_memory() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 0)),
            store: StoreKind::Memory,
            database_url: String::new(),
            description_policy: DescriptionArg::default(),
            edit_policy: EditArg::default(),
            cors_origin: None,
        }
    }
}
