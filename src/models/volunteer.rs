use serde::Serialize;

/// One enrolled volunteer. Owned by the roster; the logging session only
/// ever borrows it after a lookup by id.
#[derive(Debug, Clone, Serialize)]
pub struct Volunteer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl Volunteer {
    pub fn new(id: i32, first_name: &str, last_name: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
