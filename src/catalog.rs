use tracing::debug;

use crate::error::{Result, SeederError};
use crate::model::CampaignRecord;

const WEB3_PARTITION: &str = include_str!("../data/web3.json");
const CEX_PARTITION: &str = include_str!("../data/cex.json");

/// The curated campaign catalogue, split into its two partitions.
///
/// Content is fixed at compile time (the embedded JSON data files); only the
/// `start_time` stamped onto each record varies between loads.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub web3: Vec<CampaignRecord>,
    pub cex: Vec<CampaignRecord>,
}

impl Catalog {
    /// Load and validate the built-in catalogue.
    ///
    /// Fails if either embedded partition does not parse or a record carries
    /// a non-positive campaign duration; both are data defects and abort the
    /// whole generation.
    pub fn builtin() -> Result<Catalog> {
        let web3 = load_partition("web3", WEB3_PARTITION)?;
        let cex = load_partition("cex", CEX_PARTITION)?;
        debug!(web3 = web3.len(), cex = cex.len(), "loaded catalogue");
        Ok(Catalog { web3, cex })
    }

    /// All records in output order: the web3 partition, then the cex one.
    pub fn records(&self) -> impl Iterator<Item = &CampaignRecord> {
        self.web3.iter().chain(self.cex.iter())
    }

    pub fn len(&self) -> usize {
        self.web3.len() + self.cex.len()
    }

    pub fn is_empty(&self) -> bool {
        self.web3.is_empty() && self.cex.is_empty()
    }
}

fn load_partition(partition: &'static str, raw: &str) -> Result<Vec<CampaignRecord>> {
    let records: Vec<CampaignRecord> =
        serde_json::from_str(raw).map_err(|source| SeederError::CatalogParse {
            partition,
            source,
        })?;

    for record in &records {
        if record.duration_days < 1 {
            return Err(SeederError::InvalidRecord {
                title: record.title.clone(),
                reason: format!("duration_days must be >= 1, got {}", record.duration_days),
            });
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CampaignKind;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), catalog.web3.len() + catalog.cex.len());
        assert!(catalog.web3.iter().all(|r| r.kind == CampaignKind::Web3));
        assert!(catalog.cex.iter().all(|r| r.kind == CampaignKind::Cex));
    }

    #[test]
    fn builtin_records_have_valid_windows() {
        let catalog = Catalog::builtin().unwrap();
        for record in catalog.records() {
            assert!(record.end_time() > record.start_time, "{}", record.title);
            assert!(!record.requirements.is_empty(), "{}", record.title);
            assert!(!record.tags.is_empty(), "{}", record.title);
            assert!((0.0..=10.0).contains(&record.ai_score), "{}", record.title);
        }
    }

    #[test]
    fn records_iterates_web3_then_cex() {
        let catalog = Catalog::builtin().unwrap();
        let kinds: Vec<_> = catalog.records().map(|r| r.kind).collect();
        let split = catalog.web3.len();
        assert!(kinds[..split].iter().all(|k| *k == CampaignKind::Web3));
        assert!(kinds[split..].iter().all(|k| *k == CampaignKind::Cex));
    }

    #[test]
    fn negative_duration_is_rejected() {
        let raw = r#"[{
            "title": "Broken", "description": "d", "reward_amount": 1,
            "image_url": "u", "project_url": "u", "twitter_url": "u",
            "requirements": ["a"], "category": "Layer2", "type": "web3",
            "status": "active", "ai_score": 5.0, "risk_level": "low",
            "estimated_value": 1, "difficulty": "easy", "time_required": "1h",
            "participation_cost": "gas", "tags": ["t"], "source": "s",
            "source_type": "official", "verified": true, "duration_days": 0,
            "total_participants": 0, "max_participants": 1, "push_count": 0
        }]"#;
        let err = load_partition("web3", raw).unwrap_err();
        assert!(matches!(err, SeederError::InvalidRecord { .. }));
    }
}
