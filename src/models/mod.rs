//! Data models for the Freshdesk API.
//!
//! Wire-format records returned by the API (tickets, conversations,
//! replies, companies, contacts, groups, agents) and the input structs
//! sent when creating or updating them.

mod common;
mod company;
mod conversation;
mod group;
mod ticket;
mod user;

pub use common::*;
pub use company::*;
pub use conversation::*;
pub use group::*;
pub use ticket::*;
pub use user::*;
