use crate::core::post::{Engagement, Post};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use std::io::BufReader;
use tracing::{debug, warn};

const REQUIRED_COLUMNS: [&str; 5] = ["timestamp", "platform", "content", "user", "engagement"];

pub struct IngestStats {
    pub parsed: u64,
    pub skipped: u64,
}

/// Reads posts back from the tabular export format. Rows whose timestamp or
/// engagement cannot be parsed are skipped; missing or unreadable list
/// columns become empty lists. Python-literal cells (`{'likes': 1}`) and
/// naive ISO timestamps, as written by older exports, are accepted too.
pub fn ingest_csv<R: std::io::Read>(reader: R) -> anyhow::Result<(Vec<Post>, IngestStats)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(reader));
    let mut posts = vec![];
    let mut stats = IngestStats {
        parsed: 0,
        skipped: 0,
    };

    let headers = csv_reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);
    let required = REQUIRED_COLUMNS.map(|name| column(name));
    let links_column = column("links");
    let hashtags_column = column("hashtags");

    for (line, maybe_record) in csv_reader.records().enumerate() {
        let record = match maybe_record {
            Ok(record) => record,
            Err(err) => {
                warn!(line, %err, "skipping unreadable row");
                stats.skipped += 1;
                continue;
            }
        };
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i));
        let [timestamp, platform, content, user, engagement] = match required.map(cell) {
            [Some(t), Some(p), Some(c), Some(u), Some(e)] => [t, p, c, u, e],
            _ => {
                warn!(line, "skipping row with missing columns");
                stats.skipped += 1;
                continue;
            }
        };
        let timestamp = match parse_timestamp(timestamp) {
            Some(ts) => ts,
            None => {
                warn!(line, timestamp, "skipping row with invalid timestamp");
                stats.skipped += 1;
                continue;
            }
        };
        let engagement = match parse_literal::<Engagement>(engagement) {
            Ok(res) => res,
            Err(_) => {
                warn!(line, engagement, "skipping row with invalid engagement");
                stats.skipped += 1;
                continue;
            }
        };
        posts.push(Post {
            timestamp,
            platform: platform.to_string(),
            content: content.to_string(),
            user: user.to_string(),
            engagement,
            links: parse_list(line, "links", cell(links_column).unwrap_or("")),
            hashtags: parse_list(line, "hashtags", cell(hashtags_column).unwrap_or("")),
        });
        stats.parsed += 1;
    }

    anyhow::Ok((posts, stats))
}

fn parse_list(line: usize, column: &str, raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return vec![];
    }
    parse_literal(raw).unwrap_or_else(|err| {
        debug!(line, column, %err, "treating malformed list as empty");
        vec![]
    })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    // naive timestamps are taken as UTC
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ts| ts.and_utc())
}

/// JSON first, then the single-quoted Python literal form.
fn parse_literal<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(raw).or_else(|err| {
        if raw.contains('\'') {
            serde_json::from_str(&raw.replace('\'', "\""))
        } else {
            Err(err)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "timestamp,platform,content,user,engagement,links,hashtags\n";

    #[test]
    fn test_parses_rows() {
        let data = format!(
            "{HEADER}{}\n",
            r##"2024-03-01T10:00:00Z,twitter,hello world,user_1,"{""likes"":5,""shares"":1}","[""http://a.com""]","[""#a"",""#b""]""##
        );

        let (posts, stats) = ingest_csv(data.as_bytes()).unwrap();
        assert_eq!(1, stats.parsed);
        assert_eq!(0, stats.skipped);
        let post = &posts[0];
        assert_eq!("user_1", post.user);
        assert_eq!("hello world", post.content);
        assert_eq!(Engagement { likes: 5, shares: 1 }, post.engagement);
        assert_eq!(vec!["http://a.com".to_string()], post.links);
        assert_eq!(vec!["#a".to_string(), "#b".to_string()], post.hashtags);
    }

    #[test]
    fn test_missing_hashtags_become_empty() {
        let data = format!(
            "{HEADER}{}\n{}\n",
            r#"2024-03-01T10:00:00Z,twitter,a,user_1,"{""likes"":0,""shares"":0}",[],"#,
            r#"2024-03-01T10:00:00Z,twitter,b,user_2,"{""likes"":0,""shares"":0}",[],not-a-list"#
        );

        let (posts, stats) = ingest_csv(data.as_bytes()).unwrap();
        assert_eq!(2, stats.parsed);
        assert!(posts.iter().all(|p| p.hashtags.is_empty()));
    }

    #[test]
    fn test_skips_invalid_rows() {
        let data = format!(
            "{HEADER}{}\n{}\n{}\n",
            r#"yesterday,twitter,a,user_1,"{""likes"":0,""shares"":0}",[],[]"#,
            r#"2024-03-01T10:00:00Z,twitter,b,user_2,lots,[],[]"#,
            // no engagement column at all
            r#"2024-03-01T10:00:00Z,twitter,c,user_3"#
        );

        let (posts, stats) = ingest_csv(data.as_bytes()).unwrap();
        assert!(posts.is_empty());
        assert_eq!(0, stats.parsed);
        assert_eq!(3, stats.skipped);
    }

    #[test]
    fn test_short_row_without_hashtags() {
        let data = format!(
            "{HEADER}{}\n",
            r#"2024-03-01T10:00:00Z,twitter,a,user_1,"{""likes"":2,""shares"":1}",[]"#
        );

        let (posts, stats) = ingest_csv(data.as_bytes()).unwrap();
        assert_eq!(1, stats.parsed);
        assert_eq!(0, stats.skipped);
        assert!(posts[0].hashtags.is_empty());
        assert_eq!(Engagement { likes: 2, shares: 1 }, posts[0].engagement);
    }

    #[test]
    fn test_file_without_list_columns() {
        let data = concat!(
            "timestamp,platform,content,user,engagement\n",
            r#"2024-03-01T10:00:00Z,twitter,a,user_1,"{""likes"":0,""shares"":0}""#,
            "\n",
            r#"2024-03-01T11:00:00Z,twitter,b,user_2,"{""likes"":1,""shares"":0}""#,
            "\n",
        );

        let (posts, stats) = ingest_csv(data.as_bytes()).unwrap();
        assert_eq!(2, stats.parsed);
        assert!(posts.iter().all(|p| p.links.is_empty() && p.hashtags.is_empty()));
    }

    #[test]
    fn test_python_literal_rows() {
        let data = format!(
            "{HEADER}{}\n",
            r#"2024-03-01T10:00:00.123456,twitter,a,user_1,"{'likes': 10, 'shares': 2}",['http://example1.com'],"['#election2024', '#sample']""#
        );

        let (posts, stats) = ingest_csv(data.as_bytes()).unwrap();
        assert_eq!(1, stats.parsed);
        let post = &posts[0];
        assert_eq!(Engagement { likes: 10, shares: 2 }, post.engagement);
        assert_eq!(vec!["http://example1.com".to_string()], post.links);
        assert_eq!(
            vec!["#election2024".to_string(), "#sample".to_string()],
            post.hashtags
        );
        assert_eq!("2024-03-01T10:00:00.123456+00:00", post.timestamp.to_rfc3339());
    }
}
