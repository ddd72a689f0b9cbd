use mockito::{Mock, Server, ServerGuard};

use crate::fixtures::HousingFixtures;

/// A mock housing API and the endpoints registered on it.
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock housing API.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Endpoint fixtures registered on this setup's server.
    pub fn housing(&mut self) -> HousingFixtures<'_> {
        HousingFixtures::new(self)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
