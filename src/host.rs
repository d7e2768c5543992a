//! Host plugin API selection and output wrapping.
//!
//! The node host exists in two API generations. They differ only in how a node's
//! result is handed back:
//! - V1: a one-element tuple, serialized as `["<result>"]`
//! - V3: a node-output object, serialized as `{"result": ["<result>"]}`
//!
//! Which one applies is decided once at startup ([`HostApi::resolve`]) and then
//! carried as a plain value; the palette logic never looks at it.

use crate::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Environment variable that selects the host API.
pub const HOST_API_ENV: &str = "PROMPTPALETTE_HOST_API";

/// Host plugin API generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HostApi {
    /// Legacy API: tuple outputs, class mapping registration.
    #[default]
    #[serde(alias = "V1")]
    V1,
    /// Schema-based API: node-output objects, extension entrypoint.
    #[serde(alias = "V3")]
    V3,
}

impl HostApi {
    /// Parse a host API name (`v1` / `v3`, case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" => Some(Self::V1),
            "v3" => Some(Self::V3),
            _ => None,
        }
    }

    /// Parse a host API name, reporting where the bad value came from.
    pub fn parse(s: &str, source: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            PaletteError::UserError(format!(
                "unknown host API '{}' in {}; expected 'v1' or 'v3'",
                s, source
            ))
        })
    }

    /// Resolve the host API once at startup.
    ///
    /// Priority: CLI flag > `PROMPTPALETTE_HOST_API` > config value > V1.
    pub fn resolve(cli: Option<HostApi>, config: Option<HostApi>) -> Result<Self> {
        if let Some(api) = cli {
            return Ok(api);
        }

        if let Ok(raw) = std::env::var(HOST_API_ENV)
            && !raw.trim().is_empty()
        {
            return Self::parse(&raw, HOST_API_ENV);
        }

        Ok(config.unwrap_or_default())
    }

    /// The output wrapping strategy for this API.
    pub fn output_wrapping(self) -> OutputWrapping {
        match self {
            HostApi::V1 => OutputWrapping::Tuple,
            HostApi::V3 => OutputWrapping::NodeOutput,
        }
    }
}

impl std::fmt::Display for HostApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostApi::V1 => write!(f, "v1"),
            HostApi::V3 => write!(f, "v3"),
        }
    }
}

/// How a node result is wrapped for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputWrapping {
    /// `["<result>"]`
    Tuple,
    /// `{"result": ["<result>"]}`
    NodeOutput,
}

impl OutputWrapping {
    /// Wrap a single string result.
    pub fn wrap(self, result: &str) -> Value {
        match self {
            OutputWrapping::Tuple => json!([result]),
            OutputWrapping::NodeOutput => json!({ "result": [result] }),
        }
    }
}

/// Nodes this plugin provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Canvas widget node with the full option set.
    Palette,
    /// Vue widget node taking a single composite value.
    PaletteVue,
}

impl NodeKind {
    pub const ALL: [NodeKind; 2] = [NodeKind::Palette, NodeKind::PaletteVue];

    /// Stable node identifier used for registration.
    pub fn id(self) -> &'static str {
        match self {
            NodeKind::Palette => "PromptPalette_F",
            NodeKind::PaletteVue => "PromptPalette_F_Vue",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            NodeKind::Palette => "PromptPalette-F",
            NodeKind::PaletteVue => "PromptPalette-F (Vue)",
        }
    }

    pub fn category(self) -> &'static str {
        "utils"
    }

    /// Whether the node can be registered under the given API.
    ///
    /// Custom widget inputs are V1-only, so the Vue node is not offered on V3.
    pub fn supports(self, api: HostApi) -> bool {
        match self {
            NodeKind::Palette => true,
            NodeKind::PaletteVue => api == HostApi::V1,
        }
    }

    /// Nodes available under the given API.
    pub fn available(api: HostApi) -> Vec<NodeKind> {
        Self::ALL.into_iter().filter(|n| n.supports(api)).collect()
    }
}
