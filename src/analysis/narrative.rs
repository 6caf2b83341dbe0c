use crate::core::post::Post;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::info;

const TOP_WORDS: usize = 20;
const TOP_HASHTAGS: usize = 10;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

#[derive(Debug, Serialize)]
pub struct NarrativeAnalysis {
    pub common_words: Vec<(String, usize)>,
    pub common_hashtags: Vec<(String, usize)>,
}

pub fn identify_narratives(posts: &[Post]) -> NarrativeAnalysis {
    let all_content = posts
        .iter()
        .map(|p| p.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let words = WORD.find_iter(&all_content).map(|m| m.as_str());
    let hashtags = posts.iter().flat_map(|p| p.hashtags.iter().map(String::as_str));

    let result = NarrativeAnalysis {
        common_words: most_common(words, TOP_WORDS),
        common_hashtags: most_common(hashtags, TOP_HASHTAGS),
    };
    info!(
        words = result.common_words.len(),
        hashtags = result.common_hashtags.len(),
        "narratives identified"
    );
    result
}

/// The `k` most frequent items by descending count. Equal counts keep the
/// order in which items were first seen.
pub fn most_common<'a>(items: impl Iterator<Item = &'a str>, k: usize) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = vec![];
    for item in items {
        match index.get(item) {
            Some(i) => counts[*i].1 += 1,
            None => {
                index.insert(item, counts.len());
                counts.push((item.to_string(), 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(k);
    counts
}
