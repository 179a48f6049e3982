mod response;
mod routes;

pub use response::GENERIC_ERROR_MESSAGE;
pub use routes::{moderation_routes, AppState};
