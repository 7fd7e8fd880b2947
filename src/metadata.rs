use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{ClientIdentity, PackageRecord, PlatformInfo};

/// First API level exposing the 64-bit version code accessor (Android P).
pub const LONG_VERSION_CODE_SDK: u32 = 28;

/// Host query for the running application's package metadata.
pub trait PackageMetadata {
    fn package_record(&self) -> Result<PackageRecord>;

    fn platform(&self) -> PlatformInfo;
}

/// Prefers the 64-bit accessor where the platform has one, else widens the
/// legacy 32-bit code.
pub fn resolve_version_code(record: &PackageRecord, platform: &PlatformInfo) -> i64 {
    match record.long_version_code {
        Some(code) if platform.sdk_int >= LONG_VERSION_CODE_SDK => code,
        _ => i64::from(record.version_code),
    }
}

/// Queries `source` once. A missing package record yields `None`; any other
/// failure is logged and treated the same way so startup never aborts here.
pub fn resolve_identity<M: PackageMetadata + ?Sized>(source: &M) -> Option<ClientIdentity> {
    let record = match source.package_record() {
        Ok(record) => record,
        Err(e) if e.is_not_found() => {
            tracing::debug!("No client identity: {}", e);
            return None;
        }
        Err(e) => {
            tracing::warn!("Ignoring unusable package metadata: {}", e);
            return None;
        }
    };

    let platform = source.platform();
    let version_code = resolve_version_code(&record, &platform);

    let identity = ClientIdentity::new(record.label, version_code, platform.name, platform.release);
    tracing::info!("Resolved client identity: {}", identity);
    Some(identity)
}

/// Metadata taken from startup configuration.
#[derive(Debug, Clone)]
pub struct EnvPackageMetadata {
    config: Config,
}

impl EnvPackageMetadata {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl PackageMetadata for EnvPackageMetadata {
    fn package_record(&self) -> Result<PackageRecord> {
        let label = self
            .config
            .app_label
            .clone()
            .ok_or_else(|| Error::MetadataNotFound("APP_LABEL is not set".to_string()))?;

        Ok(PackageRecord {
            label,
            long_version_code: self.config.app_long_version_code,
            version_code: self.config.app_version_code,
        })
    }

    fn platform(&self) -> PlatformInfo {
        PlatformInfo {
            name: self.config.platform_name.clone(),
            release: self.config.platform_release.clone(),
            sdk_int: self.config.platform_sdk_int,
        }
    }
}

/// Fixed metadata, for hosts that know it at build time.
#[derive(Debug, Clone)]
pub struct StaticPackageMetadata {
    record: Option<PackageRecord>,
    platform: PlatformInfo,
}

impl StaticPackageMetadata {
    pub fn new(record: Option<PackageRecord>, platform: PlatformInfo) -> Self {
        Self { record, platform }
    }
}

impl PackageMetadata for StaticPackageMetadata {
    fn package_record(&self) -> Result<PackageRecord> {
        self.record
            .clone()
            .ok_or_else(|| Error::MetadataNotFound("no package record".to_string()))
    }

    fn platform(&self) -> PlatformInfo {
        self.platform.clone()
    }
}
