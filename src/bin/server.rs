use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

use h_search::constants::{DEFAULT_SERVER_ADDR, SERVER_TOP_K};
use h_search::output::SearchResponse;
use h_search::{logging, rank, Dataset, Record};

#[derive(Parser, Debug)]
#[command(name = "h-server", version, about = "Serve shortcut lookups over HTTP")]
struct Cli {
    #[arg(long, value_name = "ADDR", default_value = DEFAULT_SERVER_ADDR)]
    addr: String,

    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "H_DATA",
        help = "Dataset file to serve (default: built-in cheat sheet)"
    )]
    data: Option<PathBuf>,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[derive(Serialize)]
struct RecordsResponse<'a> {
    records: &'a [Record],
}

type AppState = Arc<Dataset>;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let dataset = Dataset::load_or_builtin(cli.data.as_deref())
        .context("could not load the shortcut dataset")?;
    let state = Arc::new(dataset);

    let app = Router::new()
        .route("/api/search", get(search_api))
        .route("/api/records", get(records_api))
        .with_state(state);

    let listener = TcpListener::bind(&cli.addr)
        .await
        .with_context(|| format!("could not bind {}", cli.addr))?;
    info!(addr = %cli.addr, "server running");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn search_api(
    State(dataset): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Response {
    let outcome = rank(&params.q, &dataset);
    Json(SearchResponse::new(&params.q, &outcome, Some(SERVER_TOP_K))).into_response()
}

async fn records_api(State(dataset): State<AppState>) -> Response {
    Json(RecordsResponse {
        records: &dataset.records,
    })
    .into_response()
}
