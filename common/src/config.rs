use std::time::Duration;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::theme::Theme;

// page configuration
//
// every tunable constant of the navigation subsystem lives here, so the webapp
// and the tests agree on the same numbers.  all keys are optional in the toml
// document and fall back to the defaults below
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub default_theme: Theme,

    // height of the fixed navigation bar, subtracted from scroll targets
    pub nav_height: f64,

    // back-to-top appears once the home section is scrolled within this many
    // pixels of its bottom edge
    pub back_to_top_buffer: f64,

    // how long the back-to-top "launch" animation flag stays up
    pub launch_duration_ms: u32,

    // time given to the mobile sidebar exit animation before scrolling
    pub menu_close_delay_ms: u32,

    // quiet period after the last scroll event before scrolling counts as settled
    pub settle_ms: u32,

    pub observer: ObserverConfig,
    pub typewriter: TypewriterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            default_theme: Theme::Dark,
            nav_height: 80.0,
            back_to_top_buffer: 100.0,
            launch_duration_ms: 900,
            menu_close_delay_ms: 300,
            settle_ms: 150,
            observer: ObserverConfig::default(),
            typewriter: TypewriterConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn launch_duration(&self) -> Duration {
        Duration::from_millis(self.launch_duration_ms.into())
    }

    pub fn menu_close_delay(&self) -> Duration {
        Duration::from_millis(self.menu_close_delay_ms.into())
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms.into())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.nav_height.is_finite() && self.nav_height > 0.0) {
            bail!("nav_height must be a positive number, got {}", self.nav_height);
        }

        if !(self.back_to_top_buffer.is_finite() && self.back_to_top_buffer >= 0.0) {
            bail!(
                "back_to_top_buffer must be non-negative, got {}",
                self.back_to_top_buffer
            );
        }

        if self.launch_duration_ms == 0 {
            bail!("launch_duration_ms must be non-zero");
        }

        self.observer.validate()?;
        self.typewriter.validate()
    }
}

// visibility predicate of the geometric observer
//
// margins are fractions of the viewport height trimmed from the top (fixed nav)
// and bottom (sections barely scrolled into view) before intersecting
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub threshold: f64,
    pub top_margin: f64,
    pub bottom_margin: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        ObserverConfig {
            threshold: 0.2,
            top_margin: 0.10,
            bottom_margin: 0.70,
        }
    }
}

impl ObserverConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            bail!("observer.threshold must be in (0, 1], got {}", self.threshold);
        }

        for (name, margin) in [("top_margin", self.top_margin), ("bottom_margin", self.bottom_margin)] {
            if !(0.0..1.0).contains(&margin) {
                bail!("observer.{name} must be in [0, 1), got {margin}");
            }
        }

        if self.top_margin + self.bottom_margin >= 1.0 {
            bail!("observer margins leave no visible band");
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        TypewriterConfig {
            type_ms: 60,
            delete_ms: 30,
            hold_ms: 2000,
        }
    }
}

impl TypewriterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.type_ms == 0 || self.delete_ms == 0 {
            bail!("typewriter speeds must be non-zero");
        }

        Ok(())
    }
}

// the config table is a subtable of the root node so the same document can carry
// other tables later without confusing serde
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc)
        .map_err(|err| anyhow::Error::msg(format!("failed to parse site config: {err}")))?;

    data.config.validate()?;

    debug!("successfully parsed site config");
    Ok(data.config)
}
