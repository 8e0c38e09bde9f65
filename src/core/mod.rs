//! Core skill types and logic

pub mod awesome;
pub mod category;
pub mod skill;

pub use category::{CategoryGroups, CategoryRule, TAXONOMY, category_of, classify, group_by_category};
pub use skill::{InstallTemplate, Score, Skill};
