pub mod projects;
pub mod sections;
pub mod skills;

pub use projects::{Project, ProjectLink, ProjectLinkType};
pub use sections::{NavItem, Section};
pub use skills::{RadarChart, SkillGroup, SkillLevel};
