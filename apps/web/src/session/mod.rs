// Review sessions: the step controller, the session registry and the HTTP
// handlers that drive them.

pub mod controller;
pub mod handlers;
pub mod store;
