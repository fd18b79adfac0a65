// Keyword tracking: popularity counts for searched terms and résumé keywords.

pub mod handlers;
pub mod tracker;
