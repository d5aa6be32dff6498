mod achievement;
mod carbon_stats;
mod saved_trip;
pub mod trip_history_ops;

pub use achievement::{
    evaluate_achievements, AchievementDefinition, AchievementRequirement, AchievementStatus,
    ACHIEVEMENTS,
};
pub use carbon_stats::CarbonStats;
pub use saved_trip::SavedTrip;
