//! Per-tool caps on the number of committed shapes.

use serde::{Deserialize, Serialize};

use crate::Tool;

/// Default cap for every tool.
pub const DEFAULT_LIMIT: u32 = 10;

/// Maximum committed shape count per tool.
///
/// A limit of zero disables the tool entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub circle: u32,
    pub rectangle: u32,
    pub polygon: u32,
    pub linestring: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self::uniform(DEFAULT_LIMIT)
    }
}

impl Limits {
    /// Same cap for every tool.
    pub fn uniform(limit: u32) -> Self {
        Self {
            circle: limit,
            rectangle: limit,
            polygon: limit,
            linestring: limit,
        }
    }

    pub fn get(&self, tool: Tool) -> u32 {
        match tool {
            Tool::Circle => self.circle,
            Tool::Rectangle => self.rectangle,
            Tool::Polygon => self.polygon,
            Tool::Linestring => self.linestring,
        }
    }

    pub fn set(&mut self, tool: Tool, limit: u32) {
        match tool {
            Tool::Circle => self.circle = limit,
            Tool::Rectangle => self.rectangle = limit,
            Tool::Polygon => self.polygon = limit,
            Tool::Linestring => self.linestring = limit,
        }
    }

    #[must_use]
    pub fn with(mut self, tool: Tool, limit: u32) -> Self {
        self.set(tool, limit);
        self
    }

    /// Returns true if `count` existing shapes leave no room for another.
    pub fn is_reached(&self, tool: Tool, count: usize) -> bool {
        count >= self.get(tool) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        for tool in Tool::ALL {
            assert_eq!(limits.get(tool), 10);
        }
    }

    #[test]
    fn test_with_overrides_single_tool() {
        let limits = Limits::default().with(Tool::Polygon, 1);
        assert_eq!(limits.get(Tool::Polygon), 1);
        assert_eq!(limits.get(Tool::Circle), 10);
        assert!(limits.is_reached(Tool::Polygon, 1));
        assert!(!limits.is_reached(Tool::Polygon, 0));
    }

    #[test]
    fn test_zero_limit_is_always_reached() {
        let limits = Limits::uniform(0);
        assert!(limits.is_reached(Tool::Linestring, 0));
    }
}
