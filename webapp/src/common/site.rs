use anyhow::Context;

use folio_common::{Profile, SiteConfig, parse_config, parse_profile};

const SITE_TOML: &str = include_str!("../../assets/site.toml");
const PROFILE_TOML: &str = include_str!("../../assets/profile.toml");

// configuration plus content, both embedded at build time
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    pub config: SiteConfig,
    pub profile: Profile,
}

impl Site {
    pub fn load() -> anyhow::Result<Self> {
        let config = parse_config(SITE_TOML).context("site.toml")?;
        let profile = parse_profile(PROFILE_TOML).context("profile.toml")?;

        Ok(Site { config, profile })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_assets_load() {
        let site = Site::load().unwrap();
        assert_eq!(site.config, SiteConfig::default());
        assert_eq!(site.profile.roles.len(), 4);
        assert_eq!(site.profile.projects.len(), 5);
        assert!(site.profile.skills.iter().all(|s| s.accent.iter().all(|c| c.starts_with('#'))));
    }
}
