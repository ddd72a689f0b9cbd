pub mod admin;
pub mod housing;
pub mod student;

pub use admin::AdminDashboard;
pub use housing::HousingDashboard;
pub use student::StudentDashboard;
