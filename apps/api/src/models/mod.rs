pub mod job;
pub mod profile;
pub mod resource;

pub use job::{Job, JobRow};
pub use profile::{ProfileRow, ProfileSkill, ProfileSkillRow, UserProfile};
pub use resource::{CostType, LearningResource, LearningResourceRow};
