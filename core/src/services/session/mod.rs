//! Session facade: the only entry point the HTTP layer uses for sessions.

mod service;

#[cfg(test)]
mod tests;

pub use service::SessionService;
