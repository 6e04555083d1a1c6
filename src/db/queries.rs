use chrono::Utc;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, Connection};
use serde_json::Value;

use super::StoredDocument;
use crate::errors::AppError;

// ── Collections ──

pub fn collection_exists(conn: &Connection, name: &str) -> Result<bool, AppError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM collections WHERE name = ?1",
        params![name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

// ── Documents ──

pub fn insert_document(
    conn: &Connection,
    id: &str,
    collection: &str,
    data: &Value,
) -> Result<(), AppError> {
    let data_json = serde_json::to_string(data)?;
    let created_at = Utc::now().naive_utc().format("%Y-%m-%d %H:%M:%S").to_string();

    conn.execute(
        "INSERT INTO documents (id, collection, data, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![id, collection, data_json, created_at],
    )?;
    Ok(())
}

/// Documents in `collection` whose top-level fields equal every filter value.
pub fn find_documents(
    conn: &Connection,
    collection: &str,
    filters: &[(String, Value)],
) -> Result<Vec<StoredDocument>, AppError> {
    let mut sql = String::from("SELECT id, data FROM documents WHERE collection = ?1");
    let mut bind: Vec<SqlValue> = vec![SqlValue::Text(collection.to_string())];

    for (field, value) in filters {
        bind.push(SqlValue::Text(json_path(field)));
        let path_idx = bind.len();
        match to_sql_value(value) {
            Some(v) => {
                bind.push(v);
                sql.push_str(&format!(
                    " AND json_extract(data, ?{path_idx}) = ?{}",
                    path_idx + 1
                ));
            }
            None => {
                sql.push_str(&format!(" AND json_extract(data, ?{path_idx}) IS NULL"));
            }
        }
    }
    sql.push_str(" ORDER BY created_at ASC, rowid ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(bind.iter()), |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut documents = vec![];
    for row in rows {
        let (id, data_json) = row?;
        documents.push(StoredDocument {
            id,
            data: serde_json::from_str(&data_json)?,
        });
    }
    Ok(documents)
}

fn json_path(field: &str) -> String {
    format!("$.\"{}\"", field.replace('"', ""))
}

/// SQLite value that `json_extract` yields for the same JSON scalar; `None`
/// for JSON null.
fn to_sql_value(value: &Value) -> Option<SqlValue> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(SqlValue::Integer(i64::from(*b))),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(SqlValue::Integer(i)),
            None => n.as_f64().map(SqlValue::Real),
        },
        Value::String(s) => Some(SqlValue::Text(s.clone())),
        other => Some(SqlValue::Text(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use serde_json::json;

    fn setup_db() -> Connection {
        db::init_db(":memory:").unwrap()
    }

    #[test]
    fn test_seeded_collections_exist() {
        let conn = setup_db();
        assert!(collection_exists(&conn, "ConsultationBookings").unwrap());
        assert!(collection_exists(&conn, "ContactSubmissions").unwrap());
        assert!(!collection_exists(&conn, "Invoices").unwrap());
    }

    #[test]
    fn test_find_by_string_field() {
        let conn = setup_db();
        insert_document(
            &conn,
            "a",
            "ConsultationBookings",
            &json!({"preferredDate": "2024-02-15", "preferredTime": "09:00"}),
        )
        .unwrap();
        insert_document(
            &conn,
            "b",
            "ConsultationBookings",
            &json!({"preferredDate": "2024-02-16", "preferredTime": "10:00"}),
        )
        .unwrap();

        let docs = find_documents(
            &conn,
            "ConsultationBookings",
            &[("preferredDate".to_string(), json!("2024-02-15"))],
        )
        .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "a");
        assert_eq!(docs[0].data["preferredTime"], "09:00");
    }

    #[test]
    fn test_find_is_scoped_to_collection() {
        let conn = setup_db();
        insert_document(&conn, "a", "ContactSubmissions", &json!({"email": "x@y.com"})).unwrap();

        let docs = find_documents(
            &conn,
            "ConsultationBookings",
            &[("email".to_string(), json!("x@y.com"))],
        )
        .unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_find_by_bool_and_null() {
        let conn = setup_db();
        insert_document(
            &conn,
            "a",
            "ConsultationBookings",
            &json!({"newPatient": true, "preferredDate": null}),
        )
        .unwrap();
        insert_document(
            &conn,
            "b",
            "ConsultationBookings",
            &json!({"newPatient": false, "preferredDate": "2024-02-15"}),
        )
        .unwrap();

        let new_patients = find_documents(
            &conn,
            "ConsultationBookings",
            &[("newPatient".to_string(), json!(true))],
        )
        .unwrap();
        assert_eq!(new_patients.len(), 1);
        assert_eq!(new_patients[0].id, "a");

        let undated = find_documents(
            &conn,
            "ConsultationBookings",
            &[("preferredDate".to_string(), Value::Null)],
        )
        .unwrap();
        assert_eq!(undated.len(), 1);
        assert_eq!(undated[0].id, "a");
    }

    #[test]
    fn test_unknown_collection_rejected_by_schema() {
        let conn = setup_db();
        assert!(insert_document(&conn, "a", "Invoices", &json!({})).is_err());
    }
}
