//! CLI for the Dinner and Wine planner.
//!
//! Subcommands:
//!  - `plan`     : compose a dinner-and-wine prompt locally.
//!  - `cuisines` : print the built-in cuisine list.
//!  - `mcp`      : run the MCP stdio server.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dinner_wine::{
    cuisines, plan_dinner, read_resource, DinnerPlan, PlanRequest, CUISINES_URI,
    DEFAULT_SIDES_COUNT,
};
use dinner_wine_mcp::{init_logging, logging::DEFAULT_LOG_LEVEL, run_stdio_server};
use rand::{rngs::StdRng, SeedableRng};

/// CLI entrypoint.
#[derive(Parser)]
#[command(
    name = "dinner-wine",
    about = "Dinner and Wine: prompt composer and MCP server",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a dinner-and-wine prompt.
    Plan(PlanArgs),

    /// Print the cuisine list.
    Cuisines(CuisinesArgs),

    /// Run the MCP stdio server.
    Mcp(McpArgs),
}

/// Arguments for the `plan` subcommand.
#[derive(Args, Debug)]
struct PlanArgs {
    /// Main dish the dinner is built around.
    #[arg(short, long)]
    main_dish: String,

    /// Number of side dishes to suggest.
    #[arg(short, long, default_value_t = DEFAULT_SIDES_COUNT, allow_negative_numbers = true)]
    sides: i64,

    /// Cuisine to use; picked at random when omitted or empty.
    #[arg(short, long)]
    cuisine: Option<String>,

    /// Seed for the random cuisine pick, for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Output the plan as JSON.
    #[arg(long)]
    json: bool,
}

/// Arguments for the `cuisines` subcommand.
#[derive(Args, Debug)]
struct CuisinesArgs {
    /// Output the resource JSON instead of one name per line.
    #[arg(long)]
    json: bool,
}

/// Arguments for the `mcp` subcommand.
#[derive(Args, Debug)]
struct McpArgs {
    /// Log filter used when RUST_LOG is unset. Logs go to stderr.
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan(args) => run_plan(args),
        Commands::Cuisines(args) => run_cuisines(args),
        Commands::Mcp(args) => run_mcp(args),
    }
}

fn compose(args: &PlanArgs) -> DinnerPlan {
    let request = PlanRequest {
        main_dish: args.main_dish.clone(),
        sides_count: args.sides,
        cuisine: args.cuisine.clone(),
    };
    match args.seed {
        Some(seed) => plan_dinner(&request, &mut StdRng::seed_from_u64(seed)),
        None => plan_dinner(&request, &mut rand::thread_rng()),
    }
}

/// Run the `plan` subcommand.
fn run_plan(args: PlanArgs) -> Result<()> {
    let plan = compose(&args);
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&plan).context("serializing plan")?
        );
    } else {
        println!("{}", plan.prompt);
    }
    Ok(())
}

/// Run the `cuisines` subcommand.
fn run_cuisines(args: CuisinesArgs) -> Result<()> {
    if args.json {
        let doc = read_resource(CUISINES_URI).context("reading cuisine resource")?;
        println!("{}", doc.text);
    } else {
        for name in cuisines() {
            println!("{name}");
        }
    }
    Ok(())
}

/// Run the `mcp` subcommand.
fn run_mcp(args: McpArgs) -> Result<()> {
    init_logging(&args.log_level)?;
    let runtime = tokio::runtime::Runtime::new().context("building tokio runtime")?;
    runtime.block_on(run_stdio_server())
}
