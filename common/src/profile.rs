use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// everything the page says about its owner
//
// this is plain content; nothing in the navigation core depends on it
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub badge: String,
    pub greeting: String,
    pub roles: Vec<String>,
    pub intro: String,
    pub avatar: String,
    pub logo: String,
    pub cv: String,

    pub about: About,

    #[serde(default)]
    pub headings: Headings,

    #[serde(default)]
    pub education: Vec<Education>,

    #[serde(default)]
    pub skills: Vec<Skill>,

    #[serde(default)]
    pub internships: Vec<Internship>,

    #[serde(default)]
    pub projects: Vec<Project>,

    pub contact: Contact,

    #[serde(default)]
    pub socials: Vec<Social>,

    pub footer: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct About {
    pub title: String,
    pub image: String,
    pub image_alt: String,
    pub paragraphs: Vec<String>,
}

// section headings and captions; the defaults are the page's original copy
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Headings {
    pub education: String,
    pub education_tags: String,
    pub skills: String,
    pub skills_blurb: String,
    pub internships: String,
    pub internship_tags: String,
    pub projects: String,
    pub projects_blurb: String,
}

impl Default for Headings {
    fn default() -> Self {
        Headings {
            education: "Riwayat Pendidikan".into(),
            education_tags: "Keahlian yang dikuasai:".into(),
            skills: "Keahlian".into(),
            skills_blurb: "Teknologi yang saya gunakan untuk membangun solusi, logika, dan pengalaman digital yang bermakna.".into(),
            internships: "Pengalaman Magang".into(),
            internship_tags: "Kontribusi & Teknologi:".into(),
            projects: "Daftar Projek".into(),
            projects_blurb: "Portofolio pengembangan game dan sistem informasi terintegrasi.".into(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Education {
    pub school: String,
    pub program: String,
    pub period: String,
    pub status: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

// accent is a pair of css colors used for the hover gradient
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub accent: [String; 2],
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Internship {
    pub company: String,
    pub role: String,
    pub period: String,
    pub duration: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub logo: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Contact {
    pub title: String,
    pub blurb: String,
    pub role: String,
    pub focus: String,
    pub email: String,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    #[default]
    Linkedin,
    Instagram,
    Whatsapp,
    Github,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Social {
    pub kind: SocialKind,
    pub url: String,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_profile(doc: &str) -> Result<Profile> {
    let profile: Profile = toml::from_str(doc)
        .map_err(|err| anyhow::Error::msg(format!("failed to parse profile: {err}")))?;

    if profile.name.trim().is_empty() {
        bail!("profile name must not be empty");
    }

    debug!(
        { skills = profile.skills.len(), projects = profile.projects.len() },
        "successfully parsed profile"
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
        name = "Ada"
        badge = "Tech Enthusiast"
        greeting = "Hello, I Am"
        roles = ["Engineer"]
        intro = "hi"
        avatar = "/img/me.png"
        logo = "/img/logo.png"
        cv = "/cv.pdf"
        footer = "made by hand"

        [about]
        title = "About"
        image = "/img/campus.jpg"
        image_alt = "campus"
        paragraphs = ["one", "two"]

        [contact]
        title = "Let's Connect"
        blurb = "say hi"
        role = "Student"
        focus = "Web"
        email = "ada@example.com"

        [[skills]]
        name = "Rust"
        icon = "rust.svg"
        accent = ["#f97316", "#ef4444"]

        [[socials]]
        kind = "github"
        url = "https://github.com/ada"
    "##;

    #[test]
    fn parses_minimal_profile() {
        let profile = parse_profile(MINIMAL).unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.about.paragraphs.len(), 2);
        assert_eq!(profile.skills[0].accent[1], "#ef4444");
        assert_eq!(profile.socials[0].kind, SocialKind::Github);
        assert!(profile.projects.is_empty());
        assert!(profile.education.is_empty());
        assert_eq!(profile.headings, Headings::default());
    }

    #[test]
    fn headings_can_be_overridden_individually() {
        let doc = format!("{MINIMAL}\n[headings]\nprojects = \"Work\"\n");
        let profile = parse_profile(&doc).unwrap();
        assert_eq!(profile.headings.projects, "Work");
        assert_eq!(profile.headings.skills, Headings::default().skills);
    }

    #[test]
    fn rejects_blank_name() {
        let doc = MINIMAL.replacen("name = \"Ada\"", "name = \"  \"", 1);
        assert!(parse_profile(&doc).is_err());
    }

    #[test]
    fn rejects_unknown_social_kind() {
        let doc = MINIMAL.replace("kind = \"github\"", "kind = \"myspace\"");
        assert!(parse_profile(&doc).is_err());
    }
}
