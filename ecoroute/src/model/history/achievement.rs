use super::CarbonStats;
use serde::Serialize;

/// condition a traveler must meet to unlock an achievement
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum AchievementRequirement {
    /// total kilograms of CO2 saved
    CarbonKg { kg: f64 },
    /// total saved trips
    TotalTrips { count: usize },
    /// saved trips using one transport mode
    ModeTrips { mode: &'static str, count: usize },
    /// consecutive days with at least one saved trip
    StreakDays { days: u32 },
}

impl AchievementRequirement {
    pub fn is_met(&self, stats: &CarbonStats, longest_streak: u32) -> bool {
        match self {
            AchievementRequirement::CarbonKg { kg } => stats.carbon_kg() >= *kg,
            AchievementRequirement::TotalTrips { count } => stats.total_trips >= *count,
            AchievementRequirement::ModeTrips { mode, count } => stats.mode_trips(mode) >= *count,
            AchievementRequirement::StreakDays { days } => longest_streak >= *days,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AchievementDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirement: AchievementRequirement,
}

pub const ACHIEVEMENTS: [AchievementDefinition; 12] = [
    AchievementDefinition {
        id: "carbon_1kg",
        name: "Carbon Cutter",
        description: "Save 1kg of carbon emissions",
        icon: "leaf",
        requirement: AchievementRequirement::CarbonKg { kg: 1.0 },
    },
    AchievementDefinition {
        id: "carbon_10kg",
        name: "Climate Guardian",
        description: "Save 10kg of carbon emissions",
        icon: "tree",
        requirement: AchievementRequirement::CarbonKg { kg: 10.0 },
    },
    AchievementDefinition {
        id: "carbon_100kg",
        name: "Earth Defender",
        description: "Save 100kg of carbon emissions",
        icon: "globe",
        requirement: AchievementRequirement::CarbonKg { kg: 100.0 },
    },
    AchievementDefinition {
        id: "routes_5",
        name: "Eco Commuter",
        description: "Take 5 eco-friendly routes",
        icon: "route",
        requirement: AchievementRequirement::TotalTrips { count: 5 },
    },
    AchievementDefinition {
        id: "routes_20",
        name: "Green Navigator",
        description: "Take 20 eco-friendly routes",
        icon: "compass",
        requirement: AchievementRequirement::TotalTrips { count: 20 },
    },
    AchievementDefinition {
        id: "routes_50",
        name: "Sustainable Explorer",
        description: "Take 50 eco-friendly routes",
        icon: "map-marked",
        requirement: AchievementRequirement::TotalTrips { count: 50 },
    },
    AchievementDefinition {
        id: "walking_5",
        name: "Walker",
        description: "Walk for 5 journeys",
        icon: "walking",
        requirement: AchievementRequirement::ModeTrips {
            mode: "walking",
            count: 5,
        },
    },
    AchievementDefinition {
        id: "biking_5",
        name: "Cyclist",
        description: "Cycle for 5 journeys",
        icon: "bicycle",
        requirement: AchievementRequirement::ModeTrips {
            mode: "biking",
            count: 5,
        },
    },
    AchievementDefinition {
        id: "bus_5",
        name: "Bus Patron",
        description: "Take the bus for 5 journeys",
        icon: "bus",
        requirement: AchievementRequirement::ModeTrips {
            mode: "bus",
            count: 5,
        },
    },
    AchievementDefinition {
        id: "train_5",
        name: "Train Traveler",
        description: "Take the train for 5 journeys",
        icon: "train",
        requirement: AchievementRequirement::ModeTrips {
            mode: "train",
            count: 5,
        },
    },
    AchievementDefinition {
        id: "streak_7",
        name: "Weekly Warrior",
        description: "Use eco-friendly transport for 7 days in a row",
        icon: "calendar-check",
        requirement: AchievementRequirement::StreakDays { days: 7 },
    },
    AchievementDefinition {
        id: "streak_30",
        name: "Eco Enthusiast",
        description: "Use eco-friendly transport for 30 days in a row",
        icon: "calendar-alt",
        requirement: AchievementRequirement::StreakDays { days: 30 },
    },
];

/// an achievement and whether the traveler has unlocked it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AchievementStatus {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
}

/// evaluates every achievement. unlocked achievements come first, and each
/// group is sorted by name.
pub fn evaluate_achievements(stats: &CarbonStats, longest_streak: u32) -> Vec<AchievementStatus> {
    let mut result: Vec<AchievementStatus> = ACHIEVEMENTS
        .iter()
        .map(|a| AchievementStatus {
            id: a.id,
            name: a.name,
            description: a.description,
            icon: a.icon,
            unlocked: a.requirement.is_met(stats, longest_streak),
        })
        .collect();
    result.sort_by(|a, b| (!a.unlocked, a.name).cmp(&(!b.unlocked, b.name)));
    result
}

#[cfg(test)]
mod tests {
    use super::{evaluate_achievements, ACHIEVEMENTS};
    use crate::model::history::{trip_history_ops, CarbonStats, SavedTrip};
    use chrono::Utc;

    #[test]
    fn test_no_trips_unlocks_nothing() {
        let stats = CarbonStats::from_trips(&[], &Utc::now());
        let result = evaluate_achievements(&stats, 0);
        assert_eq!(result.len(), ACHIEVEMENTS.len());
        assert!(result.iter().all(|a| !a.unlocked));
        assert_eq!(result[0].name, "Bus Patron");
    }

    #[test]
    fn test_unlocked_sorted_first() {
        let trips: Vec<SavedTrip> = (1..=7)
            .map(|day| {
                let date = format!("2024-03-{day:02}T08:00:00Z");
                SavedTrip::test_trip("walking", 2000.0, &date)
            })
            .collect();
        let stats = CarbonStats::from_trips(&trips, &Utc::now());
        let streak = trip_history_ops::longest_streak(&trips);
        let result = evaluate_achievements(&stats, streak);
        let unlocked: Vec<&str> = result
            .iter()
            .take_while(|a| a.unlocked)
            .map(|a| a.id)
            .collect();
        // 14 kg over 7 consecutive walking days
        assert_eq!(
            unlocked,
            vec!["carbon_1kg", "carbon_10kg", "routes_5", "walking_5", "streak_7"]
        );
        assert_eq!(result.iter().filter(|a| a.unlocked).count(), 5);
    }
}
