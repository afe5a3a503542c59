//! Library entry point for the Dinner and Wine planner.
//!
//! Two leaf behaviours live here and are shared by the MCP server and the CLI:
//! the static cuisine list (served as the `config://cuisines` resource) and
//! the prompt composer behind the `dinner-and-wine-planner` tool.
//
// Public modules
pub mod cuisines;
pub mod error;
pub mod planner;
pub mod resource;

// Re-export primary types for ergonomic use.
pub use cuisines::{cuisines, cuisines_json, CUISINES, CUISINES_URI};
pub use error::{DinnerError, Result};
pub use planner::{
    plan_dinner, plan_dinner_random, render_prompt, CuisineSource, DinnerPlan, PlanRequest,
    DEFAULT_SIDES_COUNT,
};
pub use resource::{list_resources, read_resource, ResourceDescriptor, ResourceDocument};

/// Name the server advertises during MCP initialisation.
pub const SERVER_NAME: &str = "Dinner and Wine";

/// Version the server advertises during MCP initialisation.
pub const SERVER_VERSION: &str = "0.1.0";
