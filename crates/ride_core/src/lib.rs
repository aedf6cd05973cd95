pub mod agents;
pub mod pricing;
pub mod registry;
pub mod ride;
pub mod scenario;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;
