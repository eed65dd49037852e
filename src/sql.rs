//! Parameterized SQL built from the static resource table. Identifiers come
//! only from `RESOURCES`; values are always bound.

use crate::resource::Resource;

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Row columns plus the owner summary joined from `users`, exposed to
/// clients under the `user` key.
fn record_columns() -> &'static str {
    "a.id, a.title, a.content, a.updated_at, a.created_at, \
     json_build_object('id', u.id, 'name', u.name, 'email', u.email) AS \"user\""
}

/// INSERT one row. Binds: user_id, title, content. Returns the new id.
pub fn insert(resource: &Resource) -> String {
    format!(
        "INSERT INTO {} (user_id, title, content) VALUES ($1, $2, $3) RETURNING id",
        quoted(resource.table)
    )
}

/// SELECT one row scoped to the owner. Binds: user_id, id.
pub fn select_one(resource: &Resource) -> String {
    format!(
        "SELECT {} FROM {} a LEFT JOIN users u ON a.user_id = u.id \
         WHERE a.user_id = $1 AND a.id = $2",
        record_columns(),
        quoted(resource.table)
    )
}

/// SELECT all of the owner's rows, newest id first. Binds: user_id.
pub fn select_all(resource: &Resource) -> String {
    format!(
        "SELECT {} FROM {} a LEFT JOIN users u ON a.user_id = u.id \
         WHERE a.user_id = $1 ORDER BY a.id DESC",
        record_columns(),
        quoted(resource.table)
    )
}

/// UPDATE title/content and bump updated_at, scoped to the owner.
/// Binds: user_id, id, title, content.
pub fn update(resource: &Resource) -> String {
    format!(
        "UPDATE {} SET title = $3, content = $4, updated_at = now() \
         WHERE user_id = $1 AND id = $2",
        quoted(resource.table)
    )
}

/// DELETE one row scoped to the owner. Binds: user_id, id.
pub fn delete(resource: &Resource) -> String {
    format!(
        "DELETE FROM {} WHERE user_id = $1 AND id = $2",
        quoted(resource.table)
    )
}
