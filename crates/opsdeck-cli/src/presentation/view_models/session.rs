use chrono::Local;
use opsdeck_runtime::Session;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct SessionViewModel {
    pub name: String,
    pub email: String,
    pub signed_in_at: String,
}

impl From<&Session> for SessionViewModel {
    fn from(session: &Session) -> Self {
        Self {
            name: session.name.clone(),
            email: session.email.clone(),
            signed_in_at: session
                .created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
        }
    }
}

impl fmt::Display for SessionViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Signed in as {} <{}> since {}",
            self.name, self.email, self.signed_in_at
        )
    }
}
