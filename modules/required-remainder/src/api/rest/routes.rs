use axum::Router;
use axum::routing::post;
use remainder_errors::Problem;
use utoipa::OpenApi;

use crate::api::rest::{dto, handlers};

pub const BASE_PATH: &str = "/api/required-remainder";
pub const SOLVE_PATH: &str = "/api/required-remainder/solve";

/// `OpenAPI` document for the module's REST operations.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::solve_batch),
    components(schemas(dto::SolveItemReq, Problem)),
    tags((name = "Required Remainder", description = "Largest k <= n with k mod x = y"))
)]
pub struct ApiDoc;

/// Mount the module's REST operations on `router`.
#[must_use]
pub fn register_routes(router: Router) -> Router {
    tracing::debug!(path = SOLVE_PATH, "Registering required remainder routes");
    router.route(SOLVE_PATH, post(handlers::solve_batch))
}
