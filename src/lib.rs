//! Client library of the NU housing portal.
//!
//! Students submit housing applications, housing staff approve or reject them and
//! administrators look at aggregate counts. Everything durable lives behind the housing API;
//! this crate resolves the locally stored session, talks to the API and shapes its records
//! into dashboard rows.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod projection;
pub mod remote;
pub mod repository;
pub mod session;
pub mod workflow;

#[cfg(test)]
mod test_support;
