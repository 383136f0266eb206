//! API route configuration.
//!
//! Everything except registration and login requires a session cookie,
//! checked by [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_dog_handler, create_owner_handler, delete_dog_handler, delete_me_handler,
    delete_owner_handler, get_dog_handler, get_me_handler, get_owner_handler, list_dogs_handler,
    list_owners_handler, login_handler, logout_handler, register_handler, update_dog_handler,
    update_me_handler, update_owner_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes reachable without a session.
///
/// # Endpoints
///
/// - `POST /sitters/register` - Create a sitter account and log in
/// - `POST /sitters/login`    - Authenticate and start a session
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/sitters/register", post(register_handler))
        .route("/sitters/login", post(login_handler))
}

/// Routes requiring an authenticated session.
///
/// # Endpoints
///
/// - `POST   /sitters/logout`     - End the session
/// - `GET    /sitters/me`         - Own account
/// - `PATCH  /sitters/me`         - Update own account
/// - `DELETE /sitters/me`         - Delete own account with all data
/// - `GET    /owners`             - List owners
/// - `POST   /owners`             - Create an owner
/// - `GET    /owners/{id}`        - Retrieve an owner
/// - `PATCH  /owners/{id}`        - Update an owner
/// - `DELETE /owners/{id}`        - Delete an owner with their dogs
/// - `GET    /owners/{id}/dogs`   - List an owner's dogs
/// - `POST   /owners/{id}/dogs`   - Create a dog under an owner
/// - `GET    /dogs/{id}`          - Retrieve a dog
/// - `PATCH  /dogs/{id}`          - Update a dog
/// - `DELETE /dogs/{id}`          - Delete a dog
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/sitters/logout", post(logout_handler))
        .route(
            "/sitters/me",
            get(get_me_handler)
                .patch(update_me_handler)
                .delete(delete_me_handler),
        )
        .route(
            "/owners",
            get(list_owners_handler).post(create_owner_handler),
        )
        .route(
            "/owners/{id}",
            get(get_owner_handler)
                .patch(update_owner_handler)
                .delete(delete_owner_handler),
        )
        .route(
            "/owners/{id}/dogs",
            get(list_dogs_handler).post(create_dog_handler),
        )
        .route(
            "/dogs/{id}",
            get(get_dog_handler)
                .patch(update_dog_handler)
                .delete(delete_dog_handler),
        )
}
