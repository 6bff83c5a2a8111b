use serde::Serialize;
use std::fmt;

/// One-shot users listing, printable as text or JSON.
#[derive(Debug, Serialize)]
pub struct UsersListViewModel {
    pub users: Vec<UserRow>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub range: Option<(usize, usize)>,
    pub applied: FilterSummary,
    pub share: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub join_date: String,
}

#[derive(Debug, Serialize)]
pub struct FilterSummary {
    pub search: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

impl FilterSummary {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.role.is_none() && self.status.is_none()
    }
}

impl fmt::Display for UsersListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.users.is_empty() {
            writeln!(f, "No users found.")?;
            if !self.applied.is_empty() {
                writeln!(f, "Filters applied:")?;
                if let Some(ref search) = self.applied.search {
                    writeln!(f, "  Search: {}", search)?;
                }
                if let Some(ref role) = self.applied.role {
                    writeln!(f, "  Role: {}", role)?;
                }
                if let Some(ref status) = self.applied.status {
                    writeln!(f, "  Status: {}", status)?;
                }
            }
            return Ok(());
        }

        writeln!(
            f,
            "{:<20} {:<26} {:<8} {:<10} {}",
            "NAME", "EMAIL", "ROLE", "STATUS", "JOINED"
        )?;
        for row in &self.users {
            writeln!(
                f,
                "{:<20} {:<26} {:<8} {:<10} {}",
                row.name, row.email, row.role, row.status, row.join_date
            )?;
        }

        if let Some((start, end)) = self.range {
            writeln!(f)?;
            writeln!(
                f,
                "Showing {} to {} of {} users (page {} of {})",
                start, end, self.total, self.page, self.total_pages
            )?;
        }

        Ok(())
    }
}
