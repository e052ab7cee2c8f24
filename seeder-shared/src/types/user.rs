use serde::Deserialize;

/// A row of `users.csv`.
///
/// `id` is the CSV-local source key; the backend assigns its own identifier
/// at registration. Seeded users all receive the same default password.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub role: String,
}
