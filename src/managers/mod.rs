//! Per-resource managers.
//!
//! Managers are cheap views over an [`ApiClient`](crate::client::ApiClient),
//! obtained through `client.tickets()`, `client.companies()` and so on.
//! Each one turns typed inputs into requests against the client's endpoint
//! table and decodes the responses.

mod agents;
mod companies;
mod groups;
mod tickets;
mod users;

pub use agents::AgentManager;
pub use companies::CompanyManager;
pub use groups::GroupManager;
pub use tickets::TicketManager;
pub use users::UserManager;
