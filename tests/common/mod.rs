#![allow(dead_code)]

use std::io::Write;

use serde_json::{json, Value};
use tempfile::NamedTempFile;

use inventory::models::Instance;
use inventory::services::parse_instances;

const MANAGERS: [(i64, &str, &str, &str); 3] = [
    (1, "jdoe", "John", "Doe"),
    (2, "asmith", "Alice", "Smith"),
    (3, "bwayne", "Bruce", "Wayne"),
];

const ROLES: [(i64, &str, &str); 4] = [
    (1, "Web Server", "web-server"),
    (2, "Database Server", "database-server"),
    (3, "Compute Server", "compute-server"),
    (4, "File Server", "file-server"),
];

/// Record `id` (1-based) with manager and role cycling through fixed lists.
/// Every third record is a GPU server; odd ids run Linux, even ids Windows.
pub fn instance_json(id: i64) -> Value {
    let (mid, username, first, last) = MANAGERS[((id - 1) % 3) as usize];
    let (rid, role, slug) = ROLES[((id - 1) % 4) as usize];
    let (os_type, os) = if id % 2 == 1 {
        (
            json!({"value": 1, "label": "Linux"}),
            json!({"id": 10, "name": "ubuntu", "type": 1, "display": "Ubuntu 22.04"}),
        )
    } else {
        (
            json!({"value": 2, "label": "Windows"}),
            json!({"id": 20, "name": "windows-server", "type": 2, "display": "Windows Server 2022"}),
        )
    };
    json!({
        "uid": format!("uid-{:04}", id),
        "id": id,
        "name": format!("192.168.1.{}", id),
        "manager": {
            "id": mid,
            "username": username,
            "first_name": first,
            "last_name": last,
            "email": format!("{}@example.com", username),
        },
        "type": os_type,
        "os": os,
        "is_gpu_server": id % 3 == 0,
        "instance_role": {"id": rid, "name": role, "slug": slug},
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-06-01T12:30:00+02:00",
    })
}

pub fn sample_json(count: i64) -> Value {
    Value::Array((1..=count).map(instance_json).collect())
}

pub fn sample_instances(count: i64) -> Vec<Instance> {
    parse_instances(&sample_json(count).to_string()).expect("sample data parses")
}

pub fn write_data_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

pub fn sample_data_file(count: i64) -> NamedTempFile {
    write_data_file(&sample_json(count).to_string())
}
