use chrono::{DateTime, Utc};
use itertools::Itertools;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{Result, SeederError};
use crate::model::CampaignRecord;

const TABLE: &str = "public.airdrops";

/// Render the full seed script for a catalogue.
///
/// The script truncates the target table, re-inserts every record in
/// partition-then-index order with a dense 1-based `sort_order`, and closes
/// with a verification query, per-partition statistics, and a summary
/// comment block.
///
/// Campaign deadlines are emitted as `NOW() + INTERVAL 'N days'` offsets,
/// with `N` recomputed against `generated_at`, so the absolute deadline
/// depends on when the script is executed. Two renders with the same
/// `generated_at` are byte-identical.
pub fn render_seed_script(catalog: &Catalog, generated_at: DateTime<Utc>) -> Result<String> {
    let mut script = String::new();

    script.push_str(&format!(
        "-- ==========================================\n\
         -- Curated airdrop campaign seed data\n\
         -- Partitions: web3 ({}) + cex ({})\n\
         -- Generated at: {}\n\
         -- ==========================================\n\n\
         -- Clear out prior rows\n\
         TRUNCATE TABLE {TABLE} CASCADE;\n\n",
        catalog.web3.len(),
        catalog.cex.len(),
        generated_at.format("%Y-%m-%d %H:%M:%S"),
    ));

    for (idx, record) in catalog.records().enumerate() {
        let sort_order = idx + 1;
        script.push_str(&format!("-- {sort_order}. {}\n", record.title));
        script.push_str(&insert_statement(record, sort_order, generated_at)?);
        script.push('\n');
    }

    script.push_str(&format!(
        "-- Verify the inserted rows\n\
         SELECT\n  \
           id,\n  \
           title,\n  \
           type,\n  \
           ai_score,\n  \
           reward_amount,\n  \
           source\n\
         FROM {TABLE}\n\
         ORDER BY sort_order;\n\n\
         -- Per-partition statistics\n\
         SELECT\n  \
           type,\n  \
           COUNT(*) AS count,\n  \
           AVG(ai_score) AS avg_score,\n  \
           SUM(reward_amount) AS total_value\n\
         FROM {TABLE}\n\
         GROUP BY type;\n\n"
    ));

    script.push_str(&format!(
        "-- ==========================================\n\
         -- web3 campaigns: {}\n\
         -- cex campaigns: {}\n\
         -- total: {}\n\
         -- ==========================================\n",
        catalog.web3.len(),
        catalog.cex.len(),
        catalog.len(),
    ));

    debug!(records = catalog.len(), "rendered seed script");
    Ok(script)
}

fn insert_statement(
    record: &CampaignRecord,
    sort_order: usize,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    // Whole-day offset between the campaign deadline and the generation
    // instant; the generated script anchors it at its own execution time.
    let remaining_days = record
        .end_time()
        .signed_duration_since(generated_at)
        .num_days();

    let values = [
        quote_literal(&record.title),
        quote_literal(&record.description),
        record.reward_amount.to_string(),
        quote_literal(&record.image_url),
        quote_literal(&record.project_url),
        quote_literal(&record.twitter_url),
        jsonb_literal("requirements", &record.title, &record.requirements)?,
        quote_literal(&record.category),
        quote_literal(&record.kind.to_string()),
        quote_literal(&record.status.to_string()),
        record.ai_score.to_string(),
        quote_literal(&record.risk_level.to_string()),
        record.estimated_value.to_string(),
        quote_literal(&record.difficulty.to_string()),
        quote_literal(&record.time_required),
        quote_literal(&record.participation_cost),
        jsonb_literal("tags", &record.title, &record.tags)?,
        quote_literal(&record.source),
        quote_literal(&record.source_type.to_string()),
        record.verified.to_string(),
        sort_order.to_string(),
        "NOW()".to_string(),
        format!("NOW() + INTERVAL '{remaining_days} days'"),
        record.total_participants.to_string(),
        record.max_participants.to_string(),
        record.push_count.to_string(),
    ];

    Ok(format!(
        "INSERT INTO {TABLE} (\n  \
           title, description, reward_amount, image_url, project_url, twitter_url,\n  \
           requirements, category, type, status, ai_score, risk_level,\n  \
           estimated_value, difficulty, time_required, participation_cost,\n  \
           tags, source, source_type, verified,\n  \
           sort_order, start_time, end_time,\n  \
           total_participants, max_participants, push_count\n\
         ) VALUES (\n  {}\n);\n",
        values.iter().join(",\n  "),
    ))
}

/// Single-quote a text value, doubling embedded quotes. Newlines pass
/// through literally; standard SQL string literals allow them.
fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Encode an ordered string list as a quoted `jsonb` literal. serde_json
/// leaves non-ASCII characters unescaped, so catalogue text survives
/// verbatim.
fn jsonb_literal(field: &'static str, title: &str, values: &[String]) -> Result<String> {
    let json = serde_json::to_string(values).map_err(|source| SeederError::JsonEncode {
        field,
        title: title.to_owned(),
        source,
    })?;
    Ok(format!("{}::jsonb", quote_literal(&json)))
}
