use std::fmt;

use serde::{Deserialize, Serialize};

/// Seniority ladder shared by jobs and profiles. Declaration order is the ladder order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    Fresher,
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Fresher,
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Absolute number of rungs between two levels (always 0..=3).
    pub fn distance(self, other: ExperienceLevel) -> usize {
        self.index().abs_diff(other.index())
    }

    /// Lenient parse from stored text: case-insensitive, tolerates "Mid-level", "entry", etc.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        match normalized.as_str() {
            "fresher" | "entry" | "entrylevel" | "graduate" => Some(ExperienceLevel::Fresher),
            "junior" | "jr" => Some(ExperienceLevel::Junior),
            "mid" | "midlevel" | "intermediate" => Some(ExperienceLevel::Mid),
            "senior" | "sr" | "lead" => Some(ExperienceLevel::Senior),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Fresher => "Fresher",
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::Mid => "Mid",
            ExperienceLevel::Senior => "Senior",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    Internship,
    #[serde(rename = "Part-time")]
    PartTime,
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    Freelance,
}

impl JobType {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "internship" | "intern" => Some(JobType::Internship),
            "parttime" => Some(JobType::PartTime),
            "fulltime" => Some(JobType::FullTime),
            "freelance" | "contract" => Some(JobType::Freelance),
            _ => None,
        }
    }
}

/// Education levels that carry a description keyword bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    Bachelor,
    Master,
    PhD,
    Diploma,
}

impl EducationLevel {
    /// Matches on containment so "Bachelor's degree" or "MSc / Master" still resolve.
    pub fn parse(raw: &str) -> Option<Self> {
        let lower = raw.trim().to_lowercase();
        if lower.is_empty() {
            return None;
        }
        if lower.contains("phd") || lower.contains("doctor") {
            Some(EducationLevel::PhD)
        } else if lower.contains("master") {
            Some(EducationLevel::Master)
        } else if lower.contains("bachelor") {
            Some(EducationLevel::Bachelor)
        } else if lower.contains("diploma") {
            Some(EducationLevel::Diploma)
        } else {
            None
        }
    }

    /// Keywords searched for (lowercase substring) in the job description.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            EducationLevel::Bachelor => &["bachelor", "undergraduate", "bsc", "ba", "btech"],
            EducationLevel::Master => &["master", "postgraduate", "msc", "ma", "mtech"],
            EducationLevel::PhD => &["phd", "doctorate"],
            EducationLevel::Diploma => &["diploma", "certificate"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl MatchQuality {
    /// Bands evaluated top-down: >=80, >=65, >=50, else Poor.
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 80 => MatchQuality::Excellent,
            p if p >= 65 => MatchQuality::Good,
            p if p >= 50 => MatchQuality::Fair,
            _ => MatchQuality::Poor,
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric_and_bounded() {
        for a in ExperienceLevel::ALL {
            for b in ExperienceLevel::ALL {
                assert_eq!(a.distance(b), b.distance(a));
                assert!(a.distance(b) <= 3);
            }
        }
        assert_eq!(ExperienceLevel::Fresher.distance(ExperienceLevel::Senior), 3);
    }

    #[test]
    fn test_experience_level_parse_is_lenient() {
        assert_eq!(ExperienceLevel::parse("Mid-level"), Some(ExperienceLevel::Mid));
        assert_eq!(ExperienceLevel::parse(" SENIOR "), Some(ExperienceLevel::Senior));
        assert_eq!(ExperienceLevel::parse("fresher"), Some(ExperienceLevel::Fresher));
        assert_eq!(ExperienceLevel::parse("wizard"), None);
    }

    #[test]
    fn test_job_type_parse_and_serde_names() {
        assert_eq!(JobType::parse("Part-time"), Some(JobType::PartTime));
        assert_eq!(JobType::parse("full_time"), Some(JobType::FullTime));
        assert_eq!(
            serde_json::to_string(&JobType::PartTime).unwrap(),
            "\"Part-time\""
        );
    }

    #[test]
    fn test_education_level_parse() {
        assert_eq!(EducationLevel::parse("Bachelor's"), Some(EducationLevel::Bachelor));
        assert_eq!(EducationLevel::parse("PhD"), Some(EducationLevel::PhD));
        assert_eq!(EducationLevel::parse(""), None);
        assert_eq!(EducationLevel::parse("High School"), None);
    }

    #[test]
    fn test_quality_band_edges() {
        assert_eq!(MatchQuality::from_percentage(79), MatchQuality::Good);
        assert_eq!(MatchQuality::from_percentage(80), MatchQuality::Excellent);
        assert_eq!(MatchQuality::from_percentage(49), MatchQuality::Poor);
        assert_eq!(MatchQuality::from_percentage(50), MatchQuality::Fair);
        assert_eq!(MatchQuality::from_percentage(64), MatchQuality::Fair);
        assert_eq!(MatchQuality::from_percentage(65), MatchQuality::Good);
        assert_eq!(MatchQuality::from_percentage(100), MatchQuality::Excellent);
        assert_eq!(MatchQuality::from_percentage(0), MatchQuality::Poor);
    }
}
