//! Login audit service module.

mod service;

pub use service::{LoginAuditService, LoginAuditServiceConfig};
