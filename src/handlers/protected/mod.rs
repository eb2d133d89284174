// Protected handlers (JWT authentication required)
//
// Every handler in this tier runs behind jwt_auth_middleware and
// receives the caller as an AuthUser request extension. Task handlers
// resolve records through the ownership-scoped selectors before any
// mutation; the user list additionally requires the admin flag.
pub mod tasks;
pub mod users;
