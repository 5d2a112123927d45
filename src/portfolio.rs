pub const FALLBACK_COVER: &str = "/covers/fallback.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Work,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Work,
        Section::Skills,
        Section::Contact,
    ];

    /// Element id of the section on the page.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Work => "work",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Work => "Work",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Image path under the site root, or a CSS `linear-gradient(...)`
    pub cover: &'static str,
    pub figma_file: Option<&'static str>,
    pub figma_proto: Option<&'static str>,
    pub tags: &'static [&'static str],
}

impl ProjectEntry {
    pub fn cover_is_gradient(&self) -> bool {
        self.cover.starts_with("linear-gradient")
    }

    pub fn cover_src(&self) -> &'static str {
        if self.cover.is_empty() {
            FALLBACK_COVER
        } else {
            self.cover
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub gradient: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub organization: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub age: u8,
    pub location: &'static str,
    pub email: &'static str,
    pub photo: &'static str,
    pub cv_path: &'static str,
    pub bio: &'static [&'static str],
    pub experience: &'static [Experience],
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub static PROFILE: Profile = Profile {
    name: "Gyltene Jusufi",
    headline: "UI/UX Designer & Developer",
    tagline: "Crafting beautiful, intuitive digital experiences that blend aesthetic excellence with functional design.",
    age: 20,
    location: "Prishtine",
    email: "gyltenejusufi123@gmail.com",
    photo: "/profile.svg",
    cv_path: "/GylteneJusufi-CV.pdf",
    bio: &[
        "I am a passionate software developer specializing in web and mobile application development. I have hands-on experience in both frontend and backend development, using technologies such as Java, Spring Boot, HTML/CSS, Vue.js, and Python.",
        "Beyond programming, I possess advanced skills in UI/UX design and am highly proficient in using Figma to create functional and aesthetically appealing prototypes.",
        "I enjoy combining technical expertise with creativity to build solutions that deliver exceptional user experiences. I am a collaborative, motivated individual who is always eager to learn new technologies and contribute to innovative and impactful projects.",
    ],
    experience: &[Experience {
        role: "Call Agent",
        organization: "Cacttus Education",
    }],
};

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "UI Design",
        icon: "🎨",
        gradient: "from-rose-400 to-pink-500",
    },
    Skill {
        name: "UX Research",
        icon: "👁",
        gradient: "from-emerald-400 to-teal-500",
    },
    Skill {
        name: "Prototyping",
        icon: "🧩",
        gradient: "from-blue-400 to-cyan-500",
    },
    Skill {
        name: "Design Systems",
        icon: "◈",
        gradient: "from-violet-400 to-purple-500",
    },
    Skill {
        name: "Front-end Dev",
        icon: "</>",
        gradient: "from-orange-400 to-red-500",
    },
    Skill {
        name: "User Testing",
        icon: "✨",
        gradient: "from-amber-400 to-yellow-500",
    },
];

// Replace the figma keys with real files; image covers go in public/covers/
pub static PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Banking App Redesign",
        description: "Complete UX overhaul of a digital banking platform, increasing user satisfaction by 47% and reducing task time by 35%.",
        category: "Mobile App",
        cover: "linear-gradient(135deg, #06b6d4 0%, #3b82f6 100%)",
        figma_file: Some("https://www.figma.com/file/XXXXXXXX/Banking-UI?type=design&node-id=0-1"),
        figma_proto: Some("https://www.figma.com/proto/XXXXXXXX/Banking-UI?node-id=0-1&scaling=scale-down-width"),
        tags: &["UI/UX", "Mobile", "Fintech"],
    },
    ProjectEntry {
        title: "E-Commerce Platform",
        description: "Designed an intuitive shopping experience with personalized recommendations, +28% conversion rate.",
        category: "Web Design",
        cover: "linear-gradient(135deg, #f43f5e 0%, #ec4899 100%)",
        figma_file: Some("https://www.figma.com/file/YYYYYYYY/Ecom?type=design&node-id=0-1"),
        figma_proto: Some("https://www.figma.com/proto/YYYYYYYY/Ecom?node-id=0-1&scaling=scale-down-width"),
        tags: &["UI/UX", "Web", "E-commerce"],
    },
    ProjectEntry {
        title: "Health & Wellness Dashboard",
        description: "Comprehensive health tracking with data viz and personalized insights.",
        category: "Dashboard",
        cover: "linear-gradient(135deg, #10b981 0%, #14b8a6 100%)",
        figma_file: Some("https://www.figma.com/file/ZZZZZZZZ/Health?type=design&node-id=0-1"),
        figma_proto: Some("https://www.figma.com/proto/ZZZZZZZZ/Health?node-id=0-1&scaling=scale-down-width"),
        tags: &["UI/UX", "Data Viz", "Healthcare"],
    },
    ProjectEntry {
        title: "Design System",
        description: "Scalable DS with 200+ components for faster and consistent product development.",
        category: "System",
        cover: "linear-gradient(135deg, #8b5cf6 0%, #6366f1 100%)",
        figma_file: Some("https://www.figma.com/file/AAAAAAAA/DS?type=design&node-id=0-1"),
        figma_proto: Some("https://www.figma.com/proto/AAAAAAAA/DS?node-id=0-1&scaling=scale-down-width"),
        tags: &["Design System", "Components", "Documentation"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::validate;

    #[test]
    fn test_section_ids() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["about", "work", "skills", "contact"]);
        for section in Section::ALL {
            assert_eq!(section.label().to_lowercase(), section.id());
        }
    }

    #[test]
    fn test_projects_have_valid_prototypes() {
        assert_eq!(PROJECTS.len(), 4);
        for project in PROJECTS {
            let proto = project.figma_proto.expect("every project ships a prototype");
            assert!(proto.starts_with("https://www.figma.com/proto/"));
            assert!(validate(proto).is_ok());
            assert!(project.figma_file.is_some_and(|f| validate(f).is_ok()));
            assert!(!project.tags.is_empty());
        }
    }

    #[test]
    fn test_cover_fallback() {
        let mut project = PROJECTS[0].clone();
        assert!(project.cover_is_gradient());

        project.cover = "/covers/banking.jpg";
        assert!(!project.cover_is_gradient());
        assert_eq!(project.cover_src(), "/covers/banking.jpg");

        project.cover = "";
        assert_eq!(project.cover_src(), FALLBACK_COVER);
    }

    #[test]
    fn test_view_prototype_hands_over_exact_url() {
        use crate::state::DisplayState;

        let banking = PROJECTS
            .iter()
            .find(|p| p.title == "Banking App Redesign")
            .expect("banking project should exist");
        let url = banking.figma_proto.unwrap();

        let mut state = DisplayState::default();
        state.open_prototype(url);
        assert!(state.overlay_open());
        assert_eq!(state.active_prototype(), url);
        assert!(url.starts_with("https://www.figma.com/proto/XXXXXXXX/Banking-UI?"));
    }

    #[test]
    fn test_profile_mailto() {
        assert_eq!(PROFILE.mailto(), "mailto:gyltenejusufi123@gmail.com");
        assert_eq!(SKILLS.len(), 6);
    }

    #[test]
    fn test_referenced_assets_exist() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let image_covers = PROJECTS
            .iter()
            .filter(|p| !p.cover_is_gradient())
            .map(|p| p.cover_src());
        let paths = [PROFILE.photo, PROFILE.cv_path, FALLBACK_COVER, "/favicon.svg"]
            .into_iter()
            .chain(image_covers);

        for path in paths {
            let file = public.join(path.trim_start_matches('/'));
            assert!(file.is_file(), "missing asset {}", file.display());
        }
    }
}
