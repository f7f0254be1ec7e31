//! One-shot review score summary run against MongoDB at startup.
//!
//! The result is only logged. Nothing in the serving path reads it and the
//! server does not wait for it.

mod error;

use crate::config::Config;
use mongodb::bson::{self, doc, Document};
use mongodb::{Client, Database};
use serde::Deserialize;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

pub use self::error::{Error, Result};

const REVIEWS_COLLECTION: &str = "reviews";
const SEGMENTATION: &str = "W2";

/// The connection is closed this long after the task starts, whether or not
/// the aggregation has finished.
pub const CLOSE_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewSummary {
    #[serde(rename = "averageScore")]
    pub average_score: Option<f64>,
    pub count: i64,
}

pub fn review_summary_pipeline() -> Vec<Document> {
    vec![
        doc! { "$match": { "segmentation": SEGMENTATION } },
        doc! {
            "$group": {
                "_id": null,
                "averageScore": { "$avg": "$total_score" },
                "count": { "$sum": 1 },
            }
        },
    ]
}

pub fn spawn_review_summary(config: &'static Config) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = run_review_summary(config).await {
            error!("{:<12} - unable to start review summary: {e}", "DIAGNOSTIC");
        }
    })
}

async fn run_review_summary(config: &Config) -> Result<()> {
    info!(
        "{:<12} - connecting to {}:{}",
        "DIAGNOSTIC", config.MONGO_HOST, config.MONGO_PORT
    );
    let client = Client::with_uri_str(config.mongo_uri()).await?;
    let db = client.database(&config.MONGO_DATABASE);

    let (summary, _) = tokio::join!(
        tokio::time::timeout(CLOSE_DELAY, summarize_reviews(&db)),
        tokio::time::sleep(CLOSE_DELAY),
    );

    match summary.unwrap_or(Err(Error::Timeout(CLOSE_DELAY))) {
        Ok(Some(summary)) => info!("{:<12} - {summary:?}", "DIAGNOSTIC"),
        Ok(None) => info!(
            "{:<12} - no reviews with segmentation {SEGMENTATION}",
            "DIAGNOSTIC"
        ),
        Err(e) => error!("{:<12} - review summary failed: {e}", "DIAGNOSTIC"),
    }

    client.shutdown().await;
    info!("{:<12} - Mongo connection has been closed.", "DIAGNOSTIC");
    Ok(())
}

/// First aggregation result, if any document matched.
pub async fn summarize_reviews(db: &Database) -> Result<Option<ReviewSummary>> {
    let mut cursor = db
        .collection::<Document>(REVIEWS_COLLECTION)
        .aggregate(review_summary_pipeline())
        .await?;

    if !cursor.advance().await? {
        return Ok(None);
    }

    let summary = bson::from_document(cursor.deserialize_current()?)?;
    Ok(Some(summary))
}
