use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Identity Types ============

/// What the host knows about the running application, computed once at
/// startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientIdentity {
    application_label: String,
    version_code: i64,
    platform_name: String,
    platform_release: String,
}

impl ClientIdentity {
    pub fn new(
        application_label: impl Into<String>,
        version_code: i64,
        platform_name: impl Into<String>,
        platform_release: impl Into<String>,
    ) -> Self {
        Self {
            application_label: application_label.into(),
            version_code,
            platform_name: platform_name.into(),
            platform_release: platform_release.into(),
        }
    }

    pub fn application_label(&self) -> &str {
        &self.application_label
    }

    pub fn version_code(&self) -> i64 {
        self.version_code
    }

    pub fn platform_name(&self) -> &str {
        &self.platform_name
    }

    pub fn platform_release(&self) -> &str {
        &self.platform_release
    }

    /// The `User-Agent` value, e.g. `Wallet$42 android/13`.
    pub fn user_agent(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}${} {}/{}",
            self.application_label, self.version_code, self.platform_name, self.platform_release
        )
    }
}

/// Raw package answer from a metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub label: String,
    /// Only reported by platforms that expose the 64-bit accessor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_version_code: Option<i64>,
    pub version_code: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub name: String,
    pub release: String,
    pub sdk_int: u32,
}

// ============ Report Types ============

/// Summary the host binary prints after its startup request.
#[derive(Debug, Serialize)]
pub struct RequestReport {
    pub url: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    pub body_bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<String>,
}
