pub mod formatter;

pub use formatter::{
    format_catalog, format_match_detail, format_recommendation_table, format_score, format_summary,
    format_sufficiency_report, score_bar, should_use_colors,
};
