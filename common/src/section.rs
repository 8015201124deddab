use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

// the fixed set of page sections, in document order
//
// the string form doubles as the dom id of the section's anchor element, so any
// change here must be mirrored in the webapp markup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Project,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Project,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Project => "project",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Project => "Project",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// nav links carry "#about"-style hrefs, so a single leading '#' is accepted
impl FromStr for SectionId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);

        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == id)
            .ok_or_else(|| anyhow::Error::msg(format!("unknown section identifier: {s:?}")))
    }
}

// vertical position of a section in document coordinates (pixels)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(top: f64, height: f64) -> Self {
        SectionGeometry {
            top,
            height: height.max(0.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

// latest layout measurement for every section
//
// a section whose anchor element could not be found is simply unregistered; it can
// never be observed and navigation to it is a no-op
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionRegistry {
    slots: [Option<SectionGeometry>; 5],
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, section: SectionId, geometry: Option<SectionGeometry>) {
        self.slots[section.index()] = geometry;
    }

    pub fn get(&self, section: SectionId) -> Option<SectionGeometry> {
        self.slots[section.index()]
    }

    pub fn is_registered(&self, section: SectionId) -> bool {
        self.get(section).is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    // registered sections in document order
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, SectionGeometry)> + '_ {
        SectionId::ALL
            .into_iter()
            .filter_map(|section| self.get(section).map(|geometry| (section, geometry)))
    }

    pub fn clear(&mut self) {
        self.slots = [None; 5];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_anchor_forms() {
        assert_eq!("skills".parse::<SectionId>().unwrap(), SectionId::Skills);
        assert_eq!("#contact".parse::<SectionId>().unwrap(), SectionId::Contact);
    }

    #[test]
    fn rejects_unknown_identifiers() {
        assert!("doesnotexist".parse::<SectionId>().is_err());
        assert!("".parse::<SectionId>().is_err());
        assert!("##home".parse::<SectionId>().is_err());
        assert!("Home".parse::<SectionId>().is_err());
    }

    #[test]
    fn display_matches_dom_id() {
        for section in SectionId::ALL {
            assert_eq!(section.to_string(), section.as_str());
            assert_eq!(section.href(), format!("#{}", section.as_str()));
        }
    }

    #[test]
    fn registry_tracks_membership() {
        let mut registry = SectionRegistry::new();
        assert!(!registry.is_complete());

        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            registry.update(section, Some(SectionGeometry::new(i as f64 * 100.0, 100.0)));
        }
        assert!(registry.is_complete());

        registry.update(SectionId::About, None);
        assert!(!registry.is_registered(SectionId::About));
        assert!(!registry.is_complete());

        let order: Vec<_> = registry.iter().map(|(section, _)| section).collect();
        assert_eq!(
            order,
            vec![SectionId::Home, SectionId::Skills, SectionId::Project, SectionId::Contact]
        );
    }

    #[test]
    fn negative_heights_are_clamped() {
        let geometry = SectionGeometry::new(40.0, -10.0);
        assert_eq!(geometry.height, 0.0);
        assert_eq!(geometry.bottom(), 40.0);
    }
}
