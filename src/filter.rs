//! In-memory narrowing of ticket pages.
//!
//! Every filter *drops* the tickets that match and keeps the rest, in their
//! original order. Filters chain, so calling several is the same as keeping
//! only the tickets that survive all of them:
//!
//! ```ignore
//! let mut page = client.tickets().all().await?;
//! page.filter_tags(&["spam-suspect"]).filter_types(&["Feature Request"]);
//! ```
//!
//! Note that `filter_tags` excludes: a ticket carrying any of the listed
//! tags is removed.

use crate::models::Ticket;
use crate::pagination::Results;

impl Results<Ticket> {
    /// Removes every ticket that carries any of `tags`.
    pub fn filter_tags<S: AsRef<str>>(&mut self, tags: &[S]) -> &mut Self {
        self.results
            .retain(|ticket| !tags.iter().any(|tag| ticket.has_tag(tag.as_ref())));
        self
    }

    /// Removes every ticket whose type equals one of `types` exactly.
    /// A ticket without a type counts as type `""`.
    pub fn filter_types<S: AsRef<str>>(&mut self, types: &[S]) -> &mut Self {
        self.results.retain(|ticket| {
            let ticket_type = ticket.ticket_type.as_deref().unwrap_or_default();
            !types.iter().any(|t| t.as_ref() == ticket_type)
        });
        self
    }

    /// Removes every ticket assigned to one of the group `ids`.
    /// An unassigned ticket counts as group `0`.
    pub fn filter_groups_id(&mut self, ids: &[i64]) -> &mut Self {
        self.results
            .retain(|ticket| !ids.contains(&ticket.group_id.unwrap_or_default()));
        self
    }

    /// Removes every ticket assigned to a group with one of `names`.
    ///
    /// Names are resolved through a fresh fetch of all groups. If that
    /// lookup fails the failure is logged and no ticket is removed.
    pub async fn filter_groups<S: AsRef<str>>(&mut self, names: &[S]) -> &mut Self {
        let groups = match self.client().groups().all().await {
            Ok(groups) => groups,
            Err(e) => {
                tracing::warn!(error = %e, "Group lookup failed, skipping group filter");
                Vec::new()
            }
        };

        let ids: Vec<i64> = groups
            .iter()
            .filter(|group| names.iter().any(|name| name.as_ref() == group.name))
            .map(|group| group.id)
            .collect();

        self.filter_groups_id(&ids)
    }
}
