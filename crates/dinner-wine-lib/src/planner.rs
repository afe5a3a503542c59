//! Prompt composer behind the `dinner-and-wine-planner` tool.
//!
//! A request names a main dish, optionally a side count and a cuisine. When no
//! cuisine is supplied (or the supplied one is empty) a cuisine is drawn
//! uniformly from [`CUISINES`]. The random source is a generic parameter so
//! callers can pass a seeded generator; [`plan_dinner_random`] uses the
//! thread-local one.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cuisines::CUISINES;

/// Side count used when the request omits one.
pub const DEFAULT_SIDES_COUNT: i64 = 2;

fn default_sides_count() -> i64 {
    DEFAULT_SIDES_COUNT
}

/// Planner input, camelCase on the wire.
///
/// # Fields
/// - `main_dish`: dish the dinner is built around, used verbatim
/// - `sides_count`: number of sides to ask for; not bounds-checked
/// - `cuisine`: cuisine to use verbatim; empty or absent means "pick one"
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub main_dish: String,
    #[serde(default = "default_sides_count")]
    pub sides_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
}

impl PlanRequest {
    /// Request with the default side count and no cuisine.
    pub fn new(main_dish: impl Into<String>) -> Self {
        Self {
            main_dish: main_dish.into(),
            sides_count: DEFAULT_SIDES_COUNT,
            cuisine: None,
        }
    }

    pub fn with_sides_count(mut self, sides_count: i64) -> Self {
        self.sides_count = sides_count;
        self
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }
}

/// Where the cuisine in a plan came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CuisineSource {
    Requested,
    Random,
}

/// Composed plan: the chosen cuisine and the prompt text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DinnerPlan {
    pub cuisine: String,
    pub cuisine_source: CuisineSource,
    pub prompt: String,
}

/// Resolve the cuisine for a request.
///
/// Non-empty requested values are returned as-is, including values that are
/// not in [`CUISINES`].
pub fn choose_cuisine<R: Rng + ?Sized>(
    requested: Option<&str>,
    rng: &mut R,
) -> (String, CuisineSource) {
    match requested {
        Some(c) if !c.is_empty() => (c.to_string(), CuisineSource::Requested),
        _ => {
            let idx = rng.gen_range(0..CUISINES.len());
            (CUISINES[idx].to_string(), CuisineSource::Random)
        }
    }
}

/// Format the prompt template.
pub fn render_prompt(cuisine: &str, main_dish: &str, sides_count: i64) -> String {
    format!(
        "Plan some {cuisine} dinner featuring {main_dish}: suggest {sides_count} sides plus a wine pairing, then explain why that pairing works."
    )
}

/// Compose a plan, drawing any random cuisine from `rng`.
pub fn plan_dinner<R: Rng + ?Sized>(request: &PlanRequest, rng: &mut R) -> DinnerPlan {
    let (cuisine, cuisine_source) = choose_cuisine(request.cuisine.as_deref(), rng);
    let prompt = render_prompt(&cuisine, &request.main_dish, request.sides_count);
    tracing::trace!(%cuisine, ?cuisine_source, sides = request.sides_count, "composed dinner prompt");
    DinnerPlan {
        cuisine,
        cuisine_source,
        prompt,
    }
}

/// Compose a plan using the thread-local generator.
pub fn plan_dinner_random(request: &PlanRequest) -> DinnerPlan {
    plan_dinner(request, &mut rand::thread_rng())
}
