pub mod client;
pub mod config;
pub mod error;
pub mod metadata;
pub mod models;
pub mod transport;
pub mod user_agent;

pub use client::{ClientFactory, HttpClient};
pub use config::Config;
pub use error::{Error, Result};
pub use metadata::{resolve_identity, EnvPackageMetadata, PackageMetadata, StaticPackageMetadata};
pub use models::ClientIdentity;
pub use user_agent::{UserAgent, UserAgentLayer};
