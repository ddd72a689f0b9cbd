//! Tests for the application repository against a mock housing API.
//!
//! Each test registers the endpoints it expects to be called and asserts them afterwards, so
//! an operation that must not reach the network registers its endpoint with zero expected
//! requests.

mod admin_stats;
mod list_all;
mod list_mine;
mod review;
mod submit;

use nu_housing::{error::ApiError, repository::ApplicationRepository};
use nu_housing_test_utils::prelude::*;
use serde_json::json;

use crate::util::{anonymous_client, http_client};
