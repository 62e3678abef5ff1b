pub mod deletion;
pub mod listing;

pub use deletion::{DeleteOutcome, DeleteOutcomeStatus, DeletionService};
pub use listing::ListingService;
