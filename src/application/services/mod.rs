mod extraction_service;
mod persistence_notifier;

pub use extraction_service::{ExtractTextError, ExtractionOutcome, ExtractionService};
pub use persistence_notifier::{NotifyMode, NotifyOutcome, PersistenceNotifier};
