//! Tests for the dashboard projections against a mock housing API.

mod staff_queue;

use nu_housing::{
    model::{application::ApplicationStatus, user::Role},
    projection::StaffQueue,
    repository::{ApplicationRepository, StatusFilter},
};
use nu_housing_test_utils::prelude::*;

use crate::util::http_client;
