pub mod login_attempt_repo;
pub mod role_repo;
pub mod session_repo;
pub mod user_repo;

pub use login_attempt_repo::LoginAttemptRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
