//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, info, warn};

use crate::domain::Station;
use crate::network::{DEFAULT_SEARCH_LIMIT, NetworkError};
use crate::planner::{GraphError, Planner};

use super::dto::*;
use super::state::AppState;

/// Upper bound on station search results per request.
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations/search", get(search_stations))
        .route("/api/stations/:id", get(get_station))
        .route("/api/lines", get(list_lines))
        .route("/api/routes", get(plan_routes))
        .route("/api/network/reload", post(reload_network))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);
    let language = LanguageQuery { lang: req.lang }.language();
    let network = state.network.snapshot().await;

    let stations = network
        .search_stations(&req.q, language, limit)
        .into_iter()
        .map(|s| StationResult::from_station(s, language))
        .collect();

    Json(StationSearchResponse { stations })
}

/// Full record for one station.
async fn get_station(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Station>, AppError> {
    let network = state.network.snapshot().await;

    network
        .station(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| unknown_station(&id))
}

fn unknown_station(id: &str) -> AppError {
    AppError::NotFound {
        message: format!("Unknown station: {id}"),
    }
}

/// Every line with its stations in track order.
async fn list_lines(
    State(state): State<AppState>,
    Query(req): Query<LanguageQuery>,
) -> Json<LinesResponse> {
    let language = req.language();
    let network = state.network.snapshot().await;

    let lines = network
        .lines
        .iter()
        .map(|line| LineResult::from_line(line, &network, language))
        .collect();

    Json(LinesResponse { lines })
}

/// Plan the primary route and an optional alternate.
async fn plan_routes(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RoutesResponse>, AppError> {
    let from = req.from.trim();
    let to = req.to.trim();

    if from == to {
        return Err(AppError::BadRequest {
            message: "Origin and destination must be different stations".to_string(),
        });
    }

    let network = state.network.snapshot().await;
    let origin = network.station(from).ok_or_else(|| unknown_station(from))?;
    let destination = network.station(to).ok_or_else(|| unknown_station(to))?;

    let language = req.language();
    let routes = Planner::new(&state.config).plan(&network, from, to)?;

    Ok(Json(RoutesResponse {
        from: StopResult::resolve(&origin.id, &network, language),
        to: StopResult::resolve(&destination.id, &network, language),
        routes: routes
            .iter()
            .map(|r| RouteResult::from_route(r, &network, language))
            .collect(),
    }))
}

/// Reload network data from its source file.
async fn reload_network(State(state): State<AppState>) -> Result<Json<ReloadResponse>, AppError> {
    let stations = state.network.reload().await?;
    info!(stations, "network data reloaded");

    Ok(Json(ReloadResponse { stations }))
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl From<GraphError> for AppError {
    fn from(e: GraphError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::NoSource => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(%status, error = %self, "request failed");
        } else {
            warn!(%status, error = %self, "request rejected");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Line;
    use crate::network::{Network, NetworkStore};
    use crate::planner::PlannerConfig;

    fn network() -> Network {
        let stations = vec![
            Station::new("o", "Origin", &["Red", "Green"]),
            Station::new("p", "Park", &["Red"]),
            Station::new("x", "Cross", &["Red", "Blue"]),
            Station::new("s", "Square", &["Blue"]),
            Station::new("d", "Docks", &["Blue"]),
            Station::new("t", "Tower", &["Blue"]),
            Station::new("y", "Yard", &["Blue", "Green"]),
            Station::new("u", "Upton", &["Green"]),
            Station::new("w", "Wells", &["Green"]),
            Station::new("z", "Zoo", &[]),
        ];
        let lines = vec![
            Line::new("Red", "#e53935", &["o", "p", "x"]),
            Line::new("Blue", "#1e88e5", &["x", "s", "d", "t", "y"]),
            Line::new("Green", "#43a047", &["o", "u", "w", "y"]),
        ];
        Network::new(stations, lines)
    }

    fn state() -> AppState {
        AppState::new(
            NetworkStore::from_network(network()),
            PlannerConfig::default(),
        )
    }

    fn route_query(from: &str, to: &str) -> Query<RouteRequest> {
        Query(RouteRequest {
            from: from.to_string(),
            to: to.to_string(),
            lang: None,
        })
    }

    #[tokio::test]
    async fn plans_primary_and_alternate() {
        let Json(response) = plan_routes(State(state()), route_query("o", "d"))
            .await
            .unwrap();

        assert_eq!(response.from.name, "Origin");
        assert_eq!(response.to.name, "Docks");
        assert_eq!(response.routes.len(), 2);
        assert_eq!(response.routes[0].transfer_stations[0].id, "x");
        assert_eq!(response.routes[1].transfer_stations[0].id, "y");
        assert!(response.routes[0].total_time <= response.routes[1].total_time);
    }

    #[tokio::test]
    async fn unreachable_destination_has_no_routes() {
        let Json(response) = plan_routes(State(state()), route_query("o", "z"))
            .await
            .unwrap();

        assert!(response.routes.is_empty());
    }

    #[tokio::test]
    async fn same_station_is_rejected() {
        let result = plan_routes(State(state()), route_query("x", " x ")).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn unknown_station_is_not_found() {
        let result = plan_routes(State(state()), route_query("o", "atlantis")).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn strict_config_rejects_bad_data() {
        let mut data = network();
        data.lines.push(Line::new("Pink", "#f0f", &["o", "ghost"]));
        let state = AppState::new(
            NetworkStore::from_network(data),
            PlannerConfig::default().strict(),
        );

        let result = plan_routes(State(state), route_query("o", "d")).await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn search_respects_limit() {
        let req = StationSearchRequest {
            q: "o".to_string(),
            lang: None,
            limit: Some(2),
        };
        let Json(response) = search_stations(State(state()), Query(req)).await;

        // Five names contain an "o"; only the first two come back
        let ids: Vec<&str> = response.stations.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["o", "x"]);
    }

    #[tokio::test]
    async fn station_lookup() {
        let Json(station) = get_station(State(state()), Path("y".to_string()))
            .await
            .unwrap();
        assert_eq!(station.name, "Yard");
        assert!(station.is_interchange);

        let missing = get_station(State(state()), Path("nope".to_string())).await;
        assert!(matches!(missing, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn lines_are_listed_in_data_order() {
        let Json(response) = list_lines(State(state()), Query(LanguageQuery::default())).await;

        let ids: Vec<&str> = response.lines.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["Red", "Blue", "Green"]);
        assert_eq!(response.lines[1].stations.len(), 5);
    }

    #[tokio::test]
    async fn reload_without_source_is_rejected() {
        let result = reload_network(State(state())).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn reload_picks_up_new_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("network.json");
        std::fs::write(&path, serde_json::to_string(&network()).unwrap()).unwrap();

        let state = AppState::new(NetworkStore::load(&path).unwrap(), PlannerConfig::default());

        let mut smaller = network();
        smaller.stations.truncate(3);
        smaller.lines.truncate(1);
        std::fs::write(&path, serde_json::to_string(&smaller).unwrap()).unwrap();

        let Json(response) = reload_network(State(state.clone())).await.unwrap();
        assert_eq!(response.stations, 3);
        assert_eq!(state.network.snapshot().await.stations.len(), 3);
    }

    #[test]
    fn error_status_codes() {
        let status = |e: AppError| e.into_response().status();

        assert_eq!(
            status(AppError::BadRequest {
                message: "bad".to_string()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(AppError::NotFound {
                message: "gone".to_string()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(AppError::from(NetworkError::NoSource)),
            StatusCode::BAD_REQUEST
        );
    }
}
