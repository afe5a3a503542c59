//! MCP server for the Dinner and Wine planner.
//!
//! Exposes the `config://cuisines` resource and the `dinner-and-wine-planner`
//! tool over `rmcp`'s stdio transport.

pub mod logging;
pub mod server;

pub use logging::init_logging;
pub use server::{run_stdio_server, DinnerWineServer, PlannerInput, PLANNER_TOOL_NAME};
