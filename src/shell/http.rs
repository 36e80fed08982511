use axum::{
    Extension, Router,
    http::{HeaderName, Method, header},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::events::use_cases::create_event::inbound::http as create_event_http;
use crate::modules::events::use_cases::get_event_registrations::inbound::http as get_event_registrations_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_events_http;
use crate::modules::events::use_cases::register_for_event::inbound::http as register_for_event_http;
use crate::modules::todos::use_cases::create_todo::inbound::http as create_todo_http;
use crate::modules::todos::use_cases::delete_todo::inbound::http as delete_todo_http;
use crate::modules::todos::use_cases::list_todos::inbound::http as list_todos_http;
use crate::modules::todos::use_cases::update_todo::inbound::http as update_todo_http;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub const TODO_SERVICE_PATH: &str = "/todo.v1.TodoService/";
pub const EVENT_SERVICE_PATH: &str = "/event.v1.EventService/";

fn connect_protocol_version() -> HeaderName {
    HeaderName::from_static("connect-protocol-version")
}

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/todo.v1.TodoService/CreateTodo", post(create_todo_http::handle))
        .route("/todo.v1.TodoService/ListTodos", post(list_todos_http::handle))
        .route("/todo.v1.TodoService/UpdateTodo", post(update_todo_http::handle))
        .route("/todo.v1.TodoService/DeleteTodo", post(delete_todo_http::handle))
        .route("/event.v1.EventService/CreateEvent", post(create_event_http::handle))
        .route("/event.v1.EventService/ListEvents", post(list_events_http::handle))
        .route(
            "/event.v1.EventService/RegisterForEvent",
            post(register_for_event_http::handle),
        )
        .route(
            "/event.v1.EventService/GetEventRegistrations",
            post(get_event_registrations_http::handle),
        )
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .route("/health", get(health))
        .layer(Extension(schema))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            connect_protocol_version(),
        ])
        .expose_headers([header::CONTENT_TYPE, connect_protocol_version()])
        .allow_credentials(true)
}
