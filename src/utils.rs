pub mod build_neighborhoods;
pub mod collect_indexed;
pub mod find_match_candidates;
pub mod resolve_overlaps;
pub mod retain_shared_vocabulary;

pub use build_neighborhoods::{build_neighborhood, build_neighborhoods, window_bounds};
pub use collect_indexed::collect_indexed;
pub use find_match_candidates::{
    best_counterpart, count_comparisons, find_match_candidates, meets_cutoff,
};
pub use resolve_overlaps::resolve_overlaps;
pub use retain_shared_vocabulary::{retain_shared_vocabulary, shared_vocabulary};
