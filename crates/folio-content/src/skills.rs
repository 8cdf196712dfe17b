#![forbid(unsafe_code)]

//! Skill list and proficiency bands.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Languages,
}

impl SkillCategory {
    /// Tab order.
    pub const ALL: [Self; 4] = [Self::Frontend, Self::Backend, Self::Tools, Self::Languages];

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Tools => "tools",
            Self::Languages => "languages",
        }
    }

    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Frontend => "skills.category.frontend",
            Self::Backend => "skills.category.backend",
            Self::Tools => "skills.category.tools",
            Self::Languages => "skills.category.languages",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Proficiency band derived from a 0–100 level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        match level {
            0..50 => Self::Beginner,
            50..70 => Self::Intermediate,
            70..90 => Self::Advanced,
            _ => Self::Expert,
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Beginner => "skills.level.beginner",
            Self::Intermediate => "skills.level.intermediate",
            Self::Advanced => "skills.level.advanced",
            Self::Expert => "skills.level.expert",
        }
    }

    /// Class for the level bar fill.
    #[must_use]
    pub const fn color_class(self) -> &'static str {
        match self {
            Self::Beginner => "bg-amber-500",
            Self::Intermediate => "bg-blue-500",
            Self::Advanced => "bg-indigo-500",
            Self::Expert => "bg-emerald-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0–100.
    pub level: u8,
    /// Never empty.
    pub categories: &'static [SkillCategory],
}

impl Skill {
    #[must_use]
    pub const fn band(&self) -> SkillLevel {
        SkillLevel::from_level(self.level)
    }

    #[must_use]
    pub fn in_category(&self, category: SkillCategory) -> bool {
        self.categories.contains(&category)
    }
}

const fn skill(name: &'static str, level: u8, categories: &'static [SkillCategory]) -> Skill {
    Skill {
        name,
        level,
        categories,
    }
}

use SkillCategory::{Backend, Frontend, Languages, Tools};

static SKILLS: [Skill; 15] = [
    skill("React", 90, &[Frontend]),
    skill("TypeScript", 85, &[Frontend, Languages]),
    skill("HTML/CSS", 95, &[Frontend]),
    skill("Tailwind CSS", 90, &[Frontend]),
    skill("Next.js", 80, &[Frontend]),
    skill("Node.js", 75, &[Backend]),
    skill("Express", 70, &[Backend]),
    skill("MongoDB", 65, &[Backend]),
    skill("PostgreSQL", 60, &[Backend]),
    skill("Git", 85, &[Tools]),
    skill("Docker", 60, &[Tools]),
    skill("CI/CD", 70, &[Tools]),
    skill("AWS", 55, &[Tools]),
    skill("English", 90, &[Languages]),
    skill("Portuguese", 100, &[Languages]),
];

#[must_use]
pub fn skills() -> &'static [Skill] {
    &SKILLS
}

/// Skills tagged with `category`, in list order.
pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.in_category(category))
}
