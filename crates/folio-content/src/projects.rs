#![forbid(unsafe_code)]

//! Project showcase entries.
//!
//! Titles and descriptions live in the translation table under
//! `projects.<slug>.*`; this module only holds the locale-independent data.

use std::fmt;

/// Filterable project category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Web,
    Mobile,
    Other,
}

impl ProjectCategory {
    pub const ALL: [Self; 3] = [Self::Web, Self::Mobile, Self::Other];

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Web => "projects.filter.web",
            Self::Mobile => "projects.filter.mobile",
            Self::Other => "projects.filter.other",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    /// Stem of the project's translation keys.
    pub slug: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
    pub category: ProjectCategory,
    pub live_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
    /// Shipped to real users, as opposed to a practice piece.
    pub real: bool,
}

impl Project {
    #[must_use]
    pub fn title_key(&self) -> String {
        format!("projects.{}.title", self.slug)
    }

    #[must_use]
    pub fn description_key(&self) -> String {
        format!("projects.{}.description", self.slug)
    }

    #[must_use]
    pub fn details_key(&self) -> String {
        format!("projects.{}.details", self.slug)
    }
}

static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        slug: "ecommerce",
        image_url: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600&q=80",
        tags: &["React", "Node.js", "MongoDB", "Stripe"],
        category: ProjectCategory::Web,
        live_url: Some("https://example.com/ecommerce"),
        source_url: Some("https://github.com/username/ecommerce"),
        real: false,
    },
    Project {
        id: 2,
        slug: "taskapp",
        image_url: "https://images.unsplash.com/photo-1540350394557-8d14678e7f91?w=600&q=80",
        tags: &["React Native", "Firebase", "Mobile"],
        category: ProjectCategory::Mobile,
        live_url: Some("https://example.com/taskapp"),
        source_url: Some("https://github.com/username/taskapp"),
        real: false,
    },
    Project {
        id: 3,
        slug: "weather",
        image_url: "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b?w=600&q=80",
        tags: &["React", "Tailwind CSS", "API Integration"],
        category: ProjectCategory::Web,
        live_url: Some("https://example.com/weather"),
        source_url: Some("https://github.com/username/weather"),
        real: false,
    },
    Project {
        id: 4,
        slug: "portfolio",
        image_url: "https://images.unsplash.com/photo-1517180102446-f3ece451e9d8?w=600&q=80",
        tags: &["React", "Tailwind CSS", "Framer Motion", "i18n"],
        category: ProjectCategory::Web,
        live_url: Some("https://example.com/portfolio"),
        source_url: Some("https://github.com/username/portfolio"),
        real: true,
    },
    Project {
        id: 5,
        slug: "datavis",
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&q=80",
        tags: &["React", "D3.js", "Data Visualization"],
        category: ProjectCategory::Other,
        live_url: Some("https://example.com/datavis"),
        source_url: Some("https://github.com/username/datavis"),
        real: false,
    },
    Project {
        id: 6,
        slug: "fitness",
        image_url: "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?w=600&q=80",
        tags: &["Flutter", "Firebase", "Mobile"],
        category: ProjectCategory::Mobile,
        live_url: Some("https://example.com/fitness"),
        source_url: Some("https://github.com/username/fitness"),
        real: false,
    },
];

/// All projects in display order.
#[must_use]
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// Look a project up by id.
#[must_use]
pub fn project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
