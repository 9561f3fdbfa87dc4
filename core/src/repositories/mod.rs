pub mod audit;
pub mod token;
pub mod user;

pub use audit::LoginAuditRepository;
pub use token::RefreshTokenRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use audit::MockLoginAuditRepository;
#[cfg(test)]
pub use token::MockRefreshTokenRepository;
#[cfg(test)]
pub use user::MockUserRepository;
