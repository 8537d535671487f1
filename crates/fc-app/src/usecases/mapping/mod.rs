mod capture_mapping;
mod clear_domain_mapping;

pub use capture_mapping::{CaptureMapping, CaptureOutcome};
pub use clear_domain_mapping::ClearDomainMapping;
