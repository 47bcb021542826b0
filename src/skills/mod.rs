pub mod types;
pub mod registry;

pub use types::{validate_key, Skill, SkillFields};
pub use registry::SkillRegistry;
