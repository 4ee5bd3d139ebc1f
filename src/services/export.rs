//! CSV report export

use serde::Serialize;
use serde_json::Value;

use crate::{error::AppResult, models::Collection, services::store::StoreSnapshot};

/// A rendered report ready to be downloaded
#[derive(Debug, Clone, PartialEq)]
pub struct CsvReport {
    pub filename: String,
    pub body: String,
}

fn columns(collection: Collection) -> &'static [&'static str] {
    match collection {
        Collection::Assets => &[
            "id",
            "type",
            "brand",
            "model",
            "serial",
            "purchase_date",
            "cost",
            "warranty_status",
            "status",
            "assignee",
            "department",
            "location",
        ],
        Collection::Maintenance => &[
            "id", "asset_id", "activity", "date", "cost", "technician", "notes",
        ],
        Collection::Licenses => &[
            "id",
            "name",
            "vendor",
            "license_key",
            "purchase_date",
            "expiry_date",
            "cost",
            "assigned_to",
            "department",
            "status",
        ],
        Collection::Departments => &[
            "id",
            "code",
            "name",
            "location",
            "head_of_department",
            "contact_email",
            "contact_phone",
        ],
    }
}

/// Export one collection as `{collection}-report.csv`
pub fn export(collection: Collection, snapshot: &StoreSnapshot) -> AppResult<CsvReport> {
    let headers = columns(collection);
    let body = match collection {
        Collection::Assets => to_csv(headers, &snapshot.assets)?,
        Collection::Maintenance => to_csv(headers, &snapshot.maintenance)?,
        Collection::Licenses => to_csv(headers, &snapshot.licenses)?,
        Collection::Departments => to_csv(headers, &snapshot.departments)?,
    };
    tracing::info!("Exported {} report ({} rows)", collection, snapshot.len(collection));

    Ok(CsvReport {
        filename: format!("{}-report.csv", collection.slug()),
        body,
    })
}

/// Header row plus one line per record, each line newline-terminated
pub fn to_csv<T: Serialize>(headers: &[&str], rows: &[T]) -> AppResult<String> {
    let mut out = String::new();
    push_line(&mut out, headers.iter().map(|h| h.to_string()));

    for row in rows {
        let value = serde_json::to_value(row)?;
        push_line(
            &mut out,
            headers.iter().map(|h| cell(value.get(*h).unwrap_or(&Value::Null))),
        );
    }
    Ok(out)
}

fn push_line(out: &mut String, cells: impl Iterator<Item = String>) {
    let line: Vec<String> = cells.map(|c| escape(&c)).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Quote a field when it contains a delimiter, quote, or line break
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Department;

    #[test]
    fn test_empty_collection_has_only_header() {
        let report = export(Collection::Assets, &StoreSnapshot::default()).unwrap();
        assert_eq!(report.filename, "assets-report.csv");
        assert_eq!(
            report.body,
            "id,type,brand,model,serial,purchase_date,cost,warranty_status,status,assignee,department,location\n"
        );
        assert_eq!(report.body.lines().count(), 1);
    }

    #[test]
    fn test_embedded_commas_and_quotes_are_escaped() {
        let mut snapshot = StoreSnapshot::default();
        snapshot.departments.push(Department {
            id: 3,
            name: "Finance, Legal".to_string(),
            code: "FIN".to_string(),
            location: Some("Building \"A\"".to_string()),
            head_of_department: None,
            contact_email: Some("finance@company.com".to_string()),
            contact_phone: None,
        });

        let report = export(Collection::Departments, &snapshot).unwrap();
        let lines: Vec<&str> = report.body.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "3,FIN,\"Finance, Legal\",\"Building \"\"A\"\"\",,finance@company.com,"
        );
    }
}
