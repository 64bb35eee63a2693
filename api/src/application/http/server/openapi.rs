use crate::application::http::{
    health::router::HealthApiDoc, nutrition::router::NutritionApiDoc,
    recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kojilab API"
    ),
    nest(
        (path = "/nutrition", api = NutritionApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
