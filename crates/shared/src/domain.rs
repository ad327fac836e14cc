use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[default]
    Facebook,
    Google,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Facebook, Platform::Google];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Google => "google",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook Ads",
            Platform::Google => "Google Ads",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Platform::Facebook => "Meta Business Platform",
            Platform::Google => "Google Ads Platform",
        }
    }

    /// Example account identifier shown as placeholder text. Never enforced.
    pub fn account_id_hint(self) -> &'static str {
        match self {
            Platform::Facebook => "act_123456789",
            Platform::Google => "1234567890",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ad platform '{0}' (expected 'facebook' or 'google')")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "facebook" | "meta" => Ok(Platform::Facebook),
            "google" => Ok(Platform::Google),
            _ => Err(UnknownPlatform(value.to_string())),
        }
    }
}

/// Form fields that must be non-empty before a submission is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Endpoint,
    AccountId,
    StartDate,
    EndDate,
}

impl RequiredField {
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::Endpoint => "Webhook URL",
            RequiredField::AccountId => "Account ID",
            RequiredField::StartDate => "Start date",
            RequiredField::EndDate => "End date",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
