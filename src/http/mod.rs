pub mod handlers;
pub mod routes;
pub mod views;

pub use routes::create_http_routes;
