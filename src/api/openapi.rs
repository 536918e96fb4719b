//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{FieldError, User, UserInput, UserView};

/// OpenAPI documentation for the user records API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Records API",
        version = "0.1.0",
        description = "CRUD for user records with validation and derived age",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            UserView,
            UserInput,
            FieldError,
            user_handler::DeleteUserResponse,
        )
    ),
    tags(
        (name = "Users", description = "User record operations")
    )
)]
pub struct ApiDoc;
