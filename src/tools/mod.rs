//! Tool implementations
//!
//! Each tool implements the `Tool` trait from `crate::tool` and delegates to
//! the guru agents.

mod analyze_market;
mod respond_to_peer;

pub use analyze_market::AnalyzeMarketTool;
pub use respond_to_peer::RespondToPeerTool;

use crate::tool::ToolRegistry;

/// Create a registry with all guru tools
pub fn create_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(AnalyzeMarketTool::new());
    registry.register(RespondToPeerTool::new());

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contains_guru_tools() {
        let registry = create_registry();
        let mut names = registry.names();
        names.sort();
        assert_eq!(names, vec!["analyze_market", "respond_to_peer"]);
    }
}
