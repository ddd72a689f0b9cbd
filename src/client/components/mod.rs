pub mod application_form;
pub mod applications_table;
pub mod housing_table;
pub mod navbar;
pub mod page;
pub mod stat_card;
pub mod status;
pub mod status_badge;

pub use application_form::{ApplicationFormCard, SubmitNotice};
pub use applications_table::ApplicationsTable;
pub use housing_table::HousingTable;
pub use navbar::Navbar;
pub use page::Page;
pub use stat_card::StatCardView;
pub use status::{ErrorPanel, Loading};
pub use status_badge::Badge;
