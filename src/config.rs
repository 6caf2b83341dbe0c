use crate::analysis::community::CommunityDetection;
use crate::analysis::greedy_modularity::GreedyModularity;
use crate::analysis::label_propagation::LabelPropagation;
use crate::export::plot::LayoutConfig;
use crate::ingest::synthetic::SyntheticConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "misinfo-tracker")]
#[command(about = "Hashtag co-occurrence, narrative and engagement analysis of social media posts", long_about = None)]
#[command(version)]
pub struct Args {
    /// Keyword the synthetic posts mention
    #[arg(long, default_value = "election2024")]
    pub keyword: String,

    /// Platform label attached to synthetic posts
    #[arg(long, default_value = "twitter")]
    pub platform: String,

    /// Number of synthetic posts to generate
    #[arg(long, default_value_t = 100)]
    pub count: usize,

    /// Analyse posts from a previous CSV export instead of generating them
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long, default_value = "network_visualization.png")]
    pub plot_output: PathBuf,

    #[arg(long, default_value = "misinfo_analysis.csv")]
    pub csv_output: PathBuf,

    /// Community detection algorithm
    #[arg(long, value_enum, default_value = "greedy")]
    pub communities: CommunityAlgorithm,

    /// Seed for the initial spring layout positions
    #[arg(long, default_value_t = 42)]
    pub layout_seed: u64,

    #[arg(long, default_value_t = 50)]
    pub layout_iterations: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CommunityAlgorithm {
    Greedy,
    LabelPropagation,
}

impl CommunityAlgorithm {
    pub fn detector(self) -> Box<dyn CommunityDetection> {
        match self {
            CommunityAlgorithm::Greedy => Box::new(GreedyModularity),
            CommunityAlgorithm::LabelPropagation => Box::new(LabelPropagation::default()),
        }
    }
}

impl Args {
    pub fn synthetic(&self) -> SyntheticConfig {
        SyntheticConfig {
            keyword: self.keyword.clone(),
            platform: self.platform.clone(),
            count: self.count,
        }
    }

    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig {
            iterations: self.layout_iterations,
            seed: self.layout_seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["misinfo-tracker"]);

        assert_eq!("election2024", args.keyword);
        assert_eq!("twitter", args.platform);
        assert_eq!(100, args.count);
        assert_eq!(None, args.input);
        assert_eq!(PathBuf::from("network_visualization.png"), args.plot_output);
        assert_eq!(PathBuf::from("misinfo_analysis.csv"), args.csv_output);
        assert_eq!(CommunityAlgorithm::Greedy, args.communities);
        assert_eq!(50, args.layout().iterations);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "misinfo-tracker",
            "--keyword",
            "vaccines",
            "--count",
            "5",
            "--communities",
            "label-propagation",
            "--input",
            "posts.csv",
        ]);

        assert_eq!("vaccines", args.synthetic().keyword);
        assert_eq!(5, args.synthetic().count);
        assert_eq!(CommunityAlgorithm::LabelPropagation, args.communities);
        assert_eq!(Some(PathBuf::from("posts.csv")), args.input);
    }
}
