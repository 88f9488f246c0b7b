use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/vivace/config.toml` or `~/.config/vivace/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `VIVACE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub gateway: GatewaySettings,
    pub resolver: ResolverSettings,
    pub audio: AudioSettings,
    pub controls: ControlsSettings,
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gateway: GatewaySettings::default(),
            resolver: ResolverSettings::default(),
            audio: AudioSettings::default(),
            controls: ControlsSettings::default(),
            playback: PlaybackSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewaySettings {
    /// Base URI the ledger content and its GraphQL index are served from.
    pub base: String,
    /// Account service resolving owner addresses to profiles.
    pub identity_endpoint: String,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base: "https://arweave.net".to_string(),
            identity_endpoint: "https://ans-stats.decent.land/profile".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// `Content-Type` tag values accepted as playable entries.
    pub content_types: Vec<String>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            content_types: crate::ledger::AUDIO_CONTENT_TYPES
                .iter()
                .map(|ct| ct.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Initial volume on the 0-100 input scale.
    pub volume: u8,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { volume: 100 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Progress step before any arrow-key adjustment (seconds).
    pub fine_step: f64,
    /// Progress step once arrow-key stepping kicks in (seconds).
    pub coarse_step: f64,
    /// Volume change per key press on the 0-100 scale.
    pub volume_step: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            fine_step: 0.01,
            coarse_step: 5.0,
            volume_step: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether the end of a track advances to the next one in the list.
    /// Off by default: playback stops and the next toggle restarts.
    pub auto_advance: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            auto_advance: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top "vivace" header box.
    pub header_text: String,
    /// Whether to render the artwork URI line under the track credits.
    pub show_artwork_uri: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ vivace! straight from the ledger ~ ".to_string(),
            show_artwork_uri: true,
        }
    }
}
