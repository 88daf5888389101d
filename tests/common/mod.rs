// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{RuleRepo, SAMPLE_RULES};
#[allow(unused_imports)]
pub use helpers::{
    call_tool, create_test_handlers, create_test_services, response_text, test_config,
    tool_call_request,
};
