//! Test utilities for the housing portal.
//!
//! Tests describe the housing API they expect with [`TestBuilder`], run the code under test
//! against [`TestSetup::url`] and finish with [`TestSetup::assert_mocks`].

pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{TEST_STUDENT_ID, TEST_TOKEN},
        fixtures::factory,
        TestBuilder, TestError, TestSetup,
    };
}
