use crate::models::PassageSnifferConfig;

pub const DEFAULT_PASSAGE_SNIFFER_CONFIG: PassageSnifferConfig = PassageSnifferConfig {
    window_radius: 8,
    similarity_cutoff: 0.40,
    split_on_all_whitespace: false,
    parallel: true,
    max_comparisons: Some(50_000_000),
};
