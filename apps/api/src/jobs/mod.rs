// Job listings: storage, search filters, the search endpoint and the JSONL importer.

pub mod handlers;
pub mod loader;
pub mod models;
pub mod search;
pub mod store;
