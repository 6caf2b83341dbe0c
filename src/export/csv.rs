use crate::core::post::Post;
use crate::export::error::ExportError;
use chrono::SecondsFormat;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// One post flattened to text. Engagement and list columns hold their JSON
/// form rather than being split into separate columns.
#[derive(Debug, Serialize)]
pub struct CsvRow {
    pub timestamp: String,
    pub platform: String,
    pub content: String,
    pub user: String,
    pub engagement: String,
    pub links: String,
    pub hashtags: String,
}

impl CsvRow {
    pub fn from_post(post: &Post) -> Result<Self, ExportError> {
        Ok(Self {
            timestamp: post.timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            platform: post.platform.clone(),
            content: post.content.clone(),
            user: post.user.clone(),
            engagement: serde_json::to_string(&post.engagement)?,
            links: serde_json::to_string(&post.links)?,
            hashtags: serde_json::to_string(&post.hashtags)?,
        })
    }
}

pub fn write_csv<W: Write>(writer: W, posts: &[Post]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if posts.is_empty() {
        // serialize() emits the header with the first row only
        csv_writer.write_record([
            "timestamp",
            "platform",
            "content",
            "user",
            "engagement",
            "links",
            "hashtags",
        ])?;
    }
    for post in posts {
        csv_writer.serialize(CsvRow::from_post(post)?)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_csv(path: &Path, posts: &[Post]) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), posts)?;
    info!(path = %path.display(), rows = posts.len(), "posts exported");
    Ok(())
}
