use super::handlers::{
    enrich_ingredients::{__path_enrich_ingredients, enrich_ingredients},
    generate_recipes::{__path_generate_recipes, generate_recipes},
    update_favorite::{__path_update_favorite, update_favorite},
    update_like::{__path_update_like, update_like},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipes, enrich_ingredients, update_like, update_favorite))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/generate", state.args.server.root_path),
            post(generate_recipes),
        )
        .route(
            &format!("{}/recipes/nutrition", state.args.server.root_path),
            post(enrich_ingredients),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/like", state.args.server.root_path),
            post(update_like),
        )
        .route(
            &format!(
                "{}/recipes/{{recipe_id}}/favorite",
                state.args.server.root_path
            ),
            post(update_favorite),
        )
}
