use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// Which side of the catalogue a campaign belongs to: protocol-native
/// ("web3") or exchange-native ("cex"). Doubles as the `type` column value
/// the aggregate query groups by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CampaignKind {
    Web3,
    Cex,
}

/// Publication status of a campaign.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Ended,
}

/// Editorial risk rating for participating in a campaign.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
}

/// How involved the qualification steps are.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    VeryEasy,
    Easy,
    Medium,
    Hard,
}

/// Where the record was sourced from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Official,
    CexAnnouncement,
}

/// One curated airdrop campaign: what the promotion is, how to qualify, and
/// the provenance/rating metadata shown alongside it.
///
/// Records live in the embedded catalogue data files. `start_time` is not
/// part of the data; it is stamped with the load instant, and the campaign
/// deadline is derived from it via [`CampaignRecord::end_time`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub title: String,
    pub description: String,
    pub reward_amount: f64,
    pub image_url: String,
    pub project_url: String,
    pub twitter_url: String,
    pub requirements: Vec<String>,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: CampaignKind,
    pub status: CampaignStatus,
    pub ai_score: f64,
    pub risk_level: RiskLevel,
    pub estimated_value: f64,
    pub difficulty: Difficulty,
    pub time_required: String,
    pub participation_cost: String,
    pub tags: Vec<String>,
    pub source: String,
    pub source_type: SourceType,
    pub verified: bool,
    /// Campaign window length; `end_time` is `start_time` plus this many days.
    pub duration_days: i64,
    pub total_participants: u64,
    pub max_participants: u64,
    pub push_count: u64,
    #[serde(skip, default = "Utc::now")]
    pub start_time: DateTime<Utc>,
}

impl CampaignRecord {
    /// The campaign deadline, `duration_days` after `start_time`.
    pub fn end_time(&self) -> DateTime<Utc> {
        self.start_time + Duration::days(self.duration_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_enums_render_wire_values() {
        assert_eq!(CampaignKind::Web3.to_string(), "web3");
        assert_eq!(CampaignKind::Cex.to_string(), "cex");
        assert_eq!(CampaignStatus::Active.to_string(), "active");
        assert_eq!(RiskLevel::None.to_string(), "none");
        assert_eq!(Difficulty::VeryEasy.to_string(), "very_easy");
        assert_eq!(SourceType::CexAnnouncement.to_string(), "cex_announcement");
    }

    #[test]
    fn end_time_is_start_plus_duration() {
        let record: CampaignRecord = serde_json::from_value(serde_json::json!({
            "title": "X",
            "description": "d",
            "reward_amount": 100,
            "image_url": "https://example.com/x.png",
            "project_url": "https://example.com",
            "twitter_url": "https://twitter.com/x",
            "requirements": ["a"],
            "category": "Layer2",
            "type": "web3",
            "status": "active",
            "ai_score": 8.0,
            "risk_level": "low",
            "estimated_value": 100,
            "difficulty": "easy",
            "time_required": "1h",
            "participation_cost": "gas",
            "tags": ["t"],
            "source": "Twitter @x",
            "source_type": "official",
            "verified": true,
            "duration_days": 30,
            "total_participants": 0,
            "max_participants": 1000,
            "push_count": 0
        }))
        .unwrap();

        assert_eq!(record.end_time() - record.start_time, Duration::days(30));
        assert!(record.end_time() > record.start_time);
    }
}
