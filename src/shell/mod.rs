// Composition root and transport wiring.
//
// Responsibilities
// - Read config from the environment.
// - Build the stores and hand them to the transports through AppState.
// - Expose the Connect routes, the GraphQL endpoint and the health check.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
