// src/web/routes.rs
use crate::{
    state::AppState,
    web::{category_handlers, customer_handlers, game_handlers, health_handlers, rental_handlers},
};
use axum::{
    routing::{delete, get, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_router(app_state: AppState) -> Router {
    let category_routes = Router::new().route(
        "/",
        get(category_handlers::list_categories).post(category_handlers::create_category),
    );

    let game_routes = Router::new().route(
        "/",
        get(game_handlers::list_games).post(game_handlers::create_game),
    );

    let customer_routes = Router::new()
        .route(
            "/",
            get(customer_handlers::list_customers).post(customer_handlers::create_customer),
        )
        .route(
            "/{id}",
            get(customer_handlers::get_customer).put(customer_handlers::update_customer),
        );

    let rental_routes = Router::new()
        .route(
            "/",
            get(rental_handlers::list_rentals).post(rental_handlers::create_rental),
        )
        .route("/{id}/return", put(rental_handlers::return_rental))
        .route("/{id}", delete(rental_handlers::delete_rental));

    Router::new()
        .route("/health", get(health_handlers::health))
        .nest("/categories", category_routes)
        .nest("/games", game_routes)
        .nest("/customers", customer_routes)
        .nest("/rentals", rental_routes)
        .with_state(app_state)
}

/// Router com as camadas de middleware (trace de pedidos + CORS).
pub fn create_app(app_state: AppState) -> Router {
    create_router(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}
