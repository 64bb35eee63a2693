use super::handlers::{
    calculate_nutrition::{__path_calculate_nutrition, calculate_nutrition},
    get_nutrition_standard::{__path_get_nutrition_standard, get_nutrition_standard},
    resolve_ingredient::{__path_resolve_ingredient, resolve_ingredient},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(calculate_nutrition, resolve_ingredient, get_nutrition_standard))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/nutrition/calculate", state.args.server.root_path),
            post(calculate_nutrition),
        )
        .route(
            &format!("{}/nutrition/foods/resolve", state.args.server.root_path),
            get(resolve_ingredient),
        )
        .route(
            &format!("{}/nutrition/standards", state.args.server.root_path),
            get(get_nutrition_standard),
        )
}
