//! Typed model of the Bokoblin marathon API.
//!
//! Entities are decoded from the loosely-typed JSON the API returns; a
//! [`Marathon`] can then refresh its segments or attendance through any
//! [`Transport`].

pub mod client;
pub mod config;
pub mod logging;
pub mod model;
#[cfg(test)]
mod test_utils;

pub use client::{ClientError, FakeTransport, HttpTransport, Transport, BOKO_API_URL};
pub use model::{
    Attendance, Attendee, Charity, Entity, Filename, Game, Marathon, ModelError, Runner, Scalar,
    Segment,
};
