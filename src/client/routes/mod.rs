pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;

pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
