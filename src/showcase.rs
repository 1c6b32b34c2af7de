use std::fmt;
use std::time::Duration;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rand::Rng;

// ---------------------------------------------------------------------------
// Personal info form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Major {
    #[default]
    ComputerScience,
    InformationTechnology,
    CyberSecurity,
    DataScience,
}

impl Major {
    pub const ALL: [Major; 4] = [
        Major::ComputerScience,
        Major::InformationTechnology,
        Major::CyberSecurity,
        Major::DataScience,
    ];
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Major::ComputerScience => "Computer Science",
            Major::InformationTechnology => "Information Technology",
            Major::CyberSecurity => "CyberSecurity",
            Major::DataScience => "Data Science",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Campus {
    #[default]
    Mmc,
    Bbc,
    Ec,
}

impl Campus {
    pub const ALL: [Campus; 3] = [Campus::Mmc, Campus::Bbc, Campus::Ec];
}

impl fmt::Display for Campus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Campus::Mmc => "MMC",
            Campus::Bbc => "BBC",
            Campus::Ec => "EC",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub major: Major,
    pub campus: Campus,
    pub start_date: NaiveDate,
}

impl PersonalInfo {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            major: Major::default(),
            campus: Campus::default(),
            start_date: today,
        }
    }

    /// Whole calendar years between the start date and `today`.
    pub fn years_at(&self, today: NaiveDate) -> i32 {
        today.year() - self.start_date.year()
    }

    /// Greeting shown once both names are filled in.
    pub fn greeting(&self, today: NaiveDate) -> Option<String> {
        let first = self.first_name.trim();
        if first.is_empty() || self.last_name.trim().is_empty() {
            return None;
        }
        Some(format!(
            "Hi, {first}! You have been at FIU, {}, for {} years studying {}.",
            self.campus,
            self.years_at(today),
            self.major
        ))
    }
}

// ---------------------------------------------------------------------------
// Fixed and random demo data
// ---------------------------------------------------------------------------

/// `[latitude, longitude]` of the ten FIU sites on the campus map.
pub const CAMPUS_LOCATIONS: [[f64; 2]; 10] = [
    [25.759005, -80.373825],
    [25.770459, -80.368130],
    [25.910728, -80.138982],
    [25.992332, -80.339832],
    [25.763418, -80.190564],
    [25.790110, -80.131561],
    [24.950351, -80.452974],
    [38.895549, -77.011910],
    [25.772754, -80.134411],
    [25.781113, -80.132460],
];

pub const CHART_COLUMNS: [&str; 4] = ["A", "B", "C", "D"];
pub const CHART_ROWS: usize = 20;

/// 20 rows x 4 columns of uniform samples in `[0, 1)`, stored column-major.
pub fn random_chart<R: Rng>(rng: &mut R) -> [Vec<f64>; 4] {
    std::array::from_fn(|_| (0..CHART_ROWS).map(|_| rng.random::<f64>()).collect())
}

// ---------------------------------------------------------------------------
// Range sliders
// ---------------------------------------------------------------------------

/// Appointment window in minutes since midnight; `start <= end` always.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: u32,
    end: u32,
}

impl TimeRange {
    pub const STEP_MINUTES: u32 = 15;
    pub const LAST_MINUTE: u32 = 23 * 60 + 45;

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Move the lower bound, pushing the upper bound along if needed.
    pub fn set_start(&mut self, minutes: u32) {
        self.start = Self::snap(minutes);
        self.end = self.end.max(self.start);
    }

    /// Move the upper bound, pulling the lower bound along if needed.
    pub fn set_end(&mut self, minutes: u32) {
        self.end = Self::snap(minutes);
        self.start = self.start.min(self.end);
    }

    fn snap(minutes: u32) -> u32 {
        let clamped = minutes.min(Self::LAST_MINUTE);
        clamped - clamped % Self::STEP_MINUTES
    }

    pub fn format(minutes: u32) -> String {
        NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
            .map(|t| format!("{:02}:{:02}", t.hour(), t.minute()))
            .unwrap_or_else(|| "--:--".to_string())
    }

    pub fn message(&self) -> String {
        format!(
            "You are scheduled for: {} to {}",
            Self::format(self.start),
            Self::format(self.end)
        )
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self {
            start: 11 * 60 + 30,
            end: 12 * 60 + 45,
        }
    }
}

/// Float range within `[0, 100]` with `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange {
    low: f64,
    high: f64,
}

impl FloatRange {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn set_low(&mut self, v: f64) {
        self.low = v.clamp(Self::MIN, Self::MAX);
        self.high = self.high.max(self.low);
    }

    pub fn set_high(&mut self, v: f64) {
        self.high = v.clamp(Self::MIN, Self::MAX);
        self.low = self.low.min(self.high);
    }

    pub fn message(&self) -> String {
        format!("Values: ({:.1}, {:.1})", self.low, self.high)
    }
}

impl Default for FloatRange {
    fn default() -> Self {
        Self { low: 25.0, high: 75.0 }
    }
}

// ---------------------------------------------------------------------------
// Message boxes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Severity::Success, Severity::Warning, Severity::Error, Severity::Info];

    pub fn sample_text(self) -> &'static str {
        match self {
            Severity::Success => "This is a success box.",
            Severity::Warning => "This is a warning box.",
            Severity::Error => "This is an error box.",
            Severity::Info => "This is an info box.",
        }
    }
}

// ---------------------------------------------------------------------------
// Simulated progress
// ---------------------------------------------------------------------------

/// 100 steps of 100 ms each, driven by elapsed time instead of sleeping.
pub struct ProgressDemo;

impl ProgressDemo {
    pub const STEPS: usize = 100;
    pub const STEP: Duration = Duration::from_millis(100);

    /// 1-based iteration reached after `elapsed`, capped at [`Self::STEPS`].
    pub fn iteration(elapsed: Duration) -> usize {
        let done = (elapsed.as_millis() / Self::STEP.as_millis()) as usize + 1;
        done.min(Self::STEPS)
    }

    pub fn fraction(elapsed: Duration) -> f32 {
        Self::iteration(elapsed) as f32 / Self::STEPS as f32
    }

    pub fn is_done(elapsed: Duration) -> bool {
        elapsed >= Self::STEP * Self::STEPS as u32
    }
}

// ---------------------------------------------------------------------------
// Balloons
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balloon {
    /// Horizontal position as a fraction of the screen width.
    pub x: f32,
    /// Screen heights travelled per second.
    pub speed: f32,
    pub radius: f32,
    pub hue: f32,
}

pub struct BalloonLaunch;

impl BalloonLaunch {
    pub const COUNT: usize = 40;
    pub const DURATION: Duration = Duration::from_secs(4);

    pub fn balloons<R: Rng>(rng: &mut R) -> Vec<Balloon> {
        (0..Self::COUNT)
            .map(|_| Balloon {
                x: rng.random_range(0.02..0.98),
                speed: rng.random_range(0.3..0.6),
                radius: rng.random_range(10.0..22.0),
                hue: rng.random_range(0.0..360.0),
            })
            .collect()
    }

    /// Height above the bottom edge, as a fraction of the screen height.
    pub fn rise(balloon: &Balloon, elapsed: Duration) -> f32 {
        balloon.speed * elapsed.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_greeting_needs_both_names() {
        let today = date(2026, 10, 16);
        let mut info = PersonalInfo::new(today);
        info.first_name = "Ana".into();
        assert_eq!(info.greeting(today), None);

        info.last_name = "Reyes".into();
        info.campus = Campus::Bbc;
        info.major = Major::DataScience;
        info.start_date = date(2022, 8, 22);
        assert_eq!(
            info.greeting(today).unwrap(),
            "Hi, Ana! You have been at FIU, BBC, for 4 years studying Data Science."
        );
    }

    #[test]
    fn test_years_counts_calendar_years() {
        let mut info = PersonalInfo::new(date(2026, 1, 1));
        info.start_date = date(2025, 12, 31);
        assert_eq!(info.years_at(date(2026, 1, 1)), 1);
    }

    #[test]
    fn test_random_chart_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let chart = random_chart(&mut rng);
        assert!(chart.iter().all(|col| col.len() == CHART_ROWS));
        assert!(chart.iter().flatten().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_time_range_defaults_and_clamps() {
        let mut range = TimeRange::default();
        assert_eq!(range.message(), "You are scheduled for: 11:30 to 12:45");

        range.set_start(14 * 60 + 7);
        assert_eq!((range.start(), range.end()), (14 * 60, 14 * 60));

        range.set_end(9 * 60);
        assert_eq!((range.start(), range.end()), (9 * 60, 9 * 60));

        range.set_end(30 * 60);
        assert_eq!(TimeRange::format(range.end()), "23:45");
    }

    #[test]
    fn test_float_range_keeps_order() {
        let mut range = FloatRange::default();
        assert_eq!(range.message(), "Values: (25.0, 75.0)");
        range.set_low(90.0);
        assert_eq!((range.low(), range.high()), (90.0, 90.0));
        range.set_high(-5.0);
        assert_eq!((range.low(), range.high()), (0.0, 0.0));
    }

    #[test]
    fn test_progress_steps() {
        assert_eq!(ProgressDemo::iteration(Duration::ZERO), 1);
        assert_eq!(ProgressDemo::iteration(Duration::from_millis(250)), 3);
        assert_eq!(ProgressDemo::iteration(Duration::from_secs(60)), 100);
        assert!(!ProgressDemo::is_done(Duration::from_millis(9_900)));
        assert!(ProgressDemo::is_done(Duration::from_secs(10)));
        assert_eq!(ProgressDemo::fraction(Duration::from_secs(10)), 1.0);
    }

    #[test]
    fn test_balloons_rise_over_time() {
        let mut rng = StdRng::seed_from_u64(1);
        let balloons = BalloonLaunch::balloons(&mut rng);
        assert_eq!(balloons.len(), BalloonLaunch::COUNT);
        let b = &balloons[0];
        assert!(BalloonLaunch::rise(b, Duration::from_secs(2)) > BalloonLaunch::rise(b, Duration::from_secs(1)));
    }
}
