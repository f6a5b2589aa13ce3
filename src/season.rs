//! Seasons and solar terms.
//!
//! The 52-week year is cut into 24 solar terms; events can restrict
//! themselves to a season, a named term, or the spring/autumn transition
//! periods. Terms pace the year's atmosphere, they do not track real dates.

use crate::config::GameConfig;
use crate::state::GameState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn tag(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    /// Spring and autumn count as transition seasons.
    pub fn is_transition(self) -> bool {
        matches!(self, Season::Spring | Season::Autumn)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SolarTerm {
    pub name: &'static str,
    pub season: Season,
}

pub const SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm { name: "立春", season: Season::Spring },
    SolarTerm { name: "雨水", season: Season::Spring },
    SolarTerm { name: "惊蛰", season: Season::Spring },
    SolarTerm { name: "春分", season: Season::Spring },
    SolarTerm { name: "清明", season: Season::Spring },
    SolarTerm { name: "谷雨", season: Season::Spring },
    SolarTerm { name: "立夏", season: Season::Summer },
    SolarTerm { name: "小满", season: Season::Summer },
    SolarTerm { name: "芒种", season: Season::Summer },
    SolarTerm { name: "夏至", season: Season::Summer },
    SolarTerm { name: "小暑", season: Season::Summer },
    SolarTerm { name: "大暑", season: Season::Summer },
    SolarTerm { name: "立秋", season: Season::Autumn },
    SolarTerm { name: "处暑", season: Season::Autumn },
    SolarTerm { name: "白露", season: Season::Autumn },
    SolarTerm { name: "秋分", season: Season::Autumn },
    SolarTerm { name: "寒露", season: Season::Autumn },
    SolarTerm { name: "霜降", season: Season::Autumn },
    SolarTerm { name: "立冬", season: Season::Winter },
    SolarTerm { name: "小雪", season: Season::Winter },
    SolarTerm { name: "大雪", season: Season::Winter },
    SolarTerm { name: "冬至", season: Season::Winter },
    SolarTerm { name: "小寒", season: Season::Winter },
    SolarTerm { name: "大寒", season: Season::Winter },
];

/// 1-based current week, clamped to `[1, total_weeks]`.
pub fn current_week(state: &GameState, config: &GameConfig) -> u32 {
    let total = config.time.total_weeks.max(1);
    let week = (total as i64 + 1 - state.time_left as i64).clamp(1, total as i64);
    week as u32
}

pub fn solar_term_for_week(week: u32, total_weeks: u32) -> SolarTerm {
    let total = total_weeks.max(1) as f64;
    let weeks_per_term = total / SOLAR_TERMS.len() as f64;
    let index = ((week.max(1) - 1) as f64 / weeks_per_term) as usize;
    SOLAR_TERMS[index.min(SOLAR_TERMS.len() - 1)]
}

pub fn solar_term_for_state(state: &GameState, config: &GameConfig) -> SolarTerm {
    solar_term_for_week(current_week(state, config), config.time.total_weeks)
}
