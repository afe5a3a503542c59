use anyhow::Context;
use dinner_wine::{
    list_resources, plan_dinner_random, read_resource, DinnerError, PlanRequest,
    DEFAULT_SIDES_COUNT, SERVER_NAME, SERVER_VERSION,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars,
    service::RequestContext,
    tool_handler,
    transport::stdio,
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};
use serde::Deserialize;

/// Registered name of the planner tool.
pub const PLANNER_TOOL_NAME: &str = "dinner-and-wine-planner";

fn default_sides_count() -> i64 {
    DEFAULT_SIDES_COUNT
}

/// Input for the dinner-and-wine planner.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlannerInput {
    #[schemars(description = "Main dish the dinner is built around")]
    pub main_dish: String,
    #[serde(default = "default_sides_count")]
    #[schemars(description = "Number of side dishes to suggest (default: 2)")]
    pub sides_count: i64,
    #[schemars(description = "Cuisine to plan for; one is picked at random when omitted")]
    pub cuisine: Option<String>,
}

impl From<PlannerInput> for PlanRequest {
    fn from(input: PlannerInput) -> Self {
        PlanRequest {
            main_dish: input.main_dish,
            sides_count: input.sides_count,
            cuisine: input.cuisine,
        }
    }
}

/// MCP server exposing the cuisine list and the planner tool.
#[derive(Debug, Clone)]
pub struct DinnerWineServer {
    pub tool_router: ToolRouter<Self>,
}

impl Default for DinnerWineServer {
    fn default() -> Self {
        Self::new()
    }
}

#[rmcp::tool_router]
impl DinnerWineServer {
    /// Construct a new server instance.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Compose the dinner-and-wine prompt.
    #[rmcp::tool(
        name = "dinner-and-wine-planner",
        description = "Plan a dinner around a main dish with side suggestions and a wine pairing"
    )]
    fn dinner_and_wine_planner(&self, Parameters(input): Parameters<PlannerInput>) -> String {
        let plan = plan_dinner_random(&input.into());
        tracing::debug!(
            cuisine = %plan.cuisine,
            source = ?plan.cuisine_source,
            "planner tool called"
        );
        plan.prompt
    }
}

impl DinnerWineServer {
    /// Resource listing in MCP form.
    pub fn resource_listing() -> Vec<Resource> {
        list_resources()
            .into_iter()
            .map(|desc| {
                let mut raw = RawResource::new(desc.uri, desc.name);
                raw.description = Some(desc.description.to_string());
                raw.mime_type = Some(desc.mime_type.to_string());
                raw.no_annotation()
            })
            .collect()
    }

    /// Read a resource and wrap it as MCP text contents.
    pub fn resource_contents(uri: &str) -> Result<ReadResourceResult, McpError> {
        let doc = read_resource(uri).map_err(to_mcp_error)?;
        tracing::debug!(uri = %doc.uri, bytes = doc.text.len(), "resource read");

        let mut contents = ResourceContents::text(doc.text, doc.uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(doc.mime_type);
        }
        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}

fn to_mcp_error(err: DinnerError) -> McpError {
    match err {
        DinnerError::UnknownResource(uri) => McpError::resource_not_found(
            format!("resource '{uri}' not found"),
            Some(serde_json::json!({ "uri": uri })),
        ),
        other => McpError::internal_error(other.to_string(), None),
    }
}

#[tool_handler]
impl ServerHandler for DinnerWineServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: SERVER_VERSION.into(),
                ..Default::default()
            },
            instructions: Some(
                "Dinner and Wine: read config://cuisines for the cuisine list, call dinner-and-wine-planner to get a dinner planning prompt.".into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(Self::resource_listing()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        Self::resource_contents(&request.uri)
    }
}

/// Serve over stdin/stdout until the client disconnects.
pub async fn run_stdio_server() -> anyhow::Result<()> {
    tracing::info!(name = SERVER_NAME, version = SERVER_VERSION, "starting MCP stdio server");
    let service = DinnerWineServer::new()
        .serve(stdio())
        .await
        .context("starting MCP service on stdio")?;
    let reason = service.waiting().await.context("MCP service task failed")?;
    tracing::info!(?reason, "MCP stdio server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinner_wine::CUISINES;

    fn input(main_dish: &str, sides_count: i64, cuisine: Option<&str>) -> PlannerInput {
        PlannerInput {
            main_dish: main_dish.to_string(),
            sides_count,
            cuisine: cuisine.map(str::to_string),
        }
    }

    #[test]
    fn tool_formats_requested_cuisine() {
        let server = DinnerWineServer::new();
        let text =
            server.dinner_and_wine_planner(Parameters(input("roast chicken", 3, Some("French"))));
        assert_eq!(
            text,
            "Plan some French dinner featuring roast chicken: suggest 3 sides plus a wine pairing, then explain why that pairing works."
        );
    }

    #[test]
    fn tool_picks_listed_cuisine_when_empty() {
        let server = DinnerWineServer::new();
        let text = server.dinner_and_wine_planner(Parameters(input("tofu stir-fry", 2, Some(""))));
        assert!(CUISINES
            .iter()
            .any(|c| text.starts_with(&format!("Plan some {c} dinner featuring tofu stir-fry"))));
    }

    #[test]
    fn input_defaults_sides_count() {
        let parsed: PlannerInput =
            serde_json::from_value(serde_json::json!({ "mainDish": "paella" })).expect("parse");
        assert_eq!(parsed.sides_count, 2);
        assert!(parsed.cuisine.is_none());
    }

    #[test]
    fn input_requires_main_dish() {
        let parsed = serde_json::from_value::<PlannerInput>(serde_json::json!({ "sidesCount": 4 }));
        assert!(parsed.is_err());
    }

    #[test]
    fn router_registers_planner_tool() {
        let server = DinnerWineServer::new();
        let tools = server.tool_router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, PLANNER_TOOL_NAME);

        let schema = serde_json::Value::Object((*tools[0].input_schema).clone());
        let props = &schema["properties"];
        assert!(props.get("mainDish").is_some());
        assert!(props.get("sidesCount").is_some());
        assert!(props.get("cuisine").is_some());
        let required = schema["required"].as_array().cloned().unwrap_or_default();
        assert!(required.contains(&serde_json::json!("mainDish")));
        assert!(!required.contains(&serde_json::json!("cuisine")));
    }

    #[test]
    fn info_advertises_tools_and_resources() {
        let info = DinnerWineServer::new().get_info();
        assert_eq!(info.server_info.name, "Dinner and Wine");
        assert_eq!(info.server_info.version, "0.1.0");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
    }
}
