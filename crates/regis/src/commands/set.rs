use chrono::Utc;
use regis_status::StatusStore;
use serde_json::Value;

/// Read-modify-write one top-level key of the status document
///
/// The read and the write are two independent atomic operations; a writer in
/// another process can still win the race between them (last write wins).
pub fn run(file: &str, key: &str, value: &str) -> anyhow::Result<()> {
    let store = StatusStore::new(file);
    let mut doc = store.read();

    let parsed: Value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    doc.insert(key.to_string(), parsed);
    doc.insert(
        "updated_at".to_string(),
        Value::String(Utc::now().to_rfc3339()),
    );

    store.write(&doc)?;
    println!("{} = {}", key, doc[key]);
    Ok(())
}
