/// Translation from widget requests to typed queries
mod query_translator;

pub use query_translator::QueryTranslator;
