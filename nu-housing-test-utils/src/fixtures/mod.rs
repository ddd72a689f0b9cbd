//! Fixtures for the housing API.
//!
//! - `factory` - JSON bodies shaped like the housing API's responses
//! - `mockito` - mock endpoints registered on a [`TestSetup`](crate::TestSetup) server

pub mod factory;
pub mod mockito;

use crate::TestSetup;

/// Endpoint fixtures bound to one [`TestSetup`].
pub struct HousingFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> HousingFixtures<'a> {
    pub fn new(setup: &'a mut TestSetup) -> Self {
        Self { setup }
    }
}
