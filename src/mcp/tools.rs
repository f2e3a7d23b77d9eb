//! Tool definitions for the earthquake tool server.

use super::protocol::Tool;
use crate::config::defaults::{
    DEFAULT_HOURS, DEFAULT_LIMIT, DEFAULT_MIN_MAGNITUDE, DEFAULT_RADIUS_KM,
};
use serde_json::json;

pub const RECENT_TOOL: &str = "recent";
pub const AROUND_TOOL: &str = "around";

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: RECENT_TOOL.to_string(),
            description: "Get recent earthquakes, optionally filtered by minimum magnitude \
                and lookback window."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "min_magnitude": {
                        "type": "number",
                        "description": "Minimum magnitude",
                        "default": DEFAULT_MIN_MAGNITUDE
                    },
                    "hours": {
                        "type": "integer",
                        "description": "Lookback window in hours",
                        "default": DEFAULT_HOURS
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of earthquakes",
                        "default": DEFAULT_LIMIT
                    }
                },
                "required": []
            }),
        },
        Tool {
            name: AROUND_TOOL.to_string(),
            description: "Get earthquakes around a coordinate within a search radius."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "lat": {
                        "type": "number",
                        "description": "Latitude in degrees"
                    },
                    "lon": {
                        "type": "number",
                        "description": "Longitude in degrees"
                    },
                    "radius_km": {
                        "type": "number",
                        "description": "Search radius in kilometres",
                        "default": DEFAULT_RADIUS_KM
                    },
                    "min_magnitude": {
                        "type": "number",
                        "description": "Minimum magnitude",
                        "default": DEFAULT_MIN_MAGNITUDE
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of earthquakes",
                        "default": DEFAULT_LIMIT
                    }
                },
                "required": ["lat", "lon"]
            }),
        },
    ]
}
