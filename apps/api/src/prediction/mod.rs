// Résumé role prediction.
// Implements: role taxonomy, weighted role classifier, keyword aggregation, PDF text
// extraction and the /api/predict endpoint. Classification is pure and synchronous.

pub mod classifier;
pub mod extract;
pub mod handlers;
pub mod keywords;
pub mod service;
pub mod taxonomy;
