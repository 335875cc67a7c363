use regis_status::StatusStore;

pub fn run(file: &str) -> anyhow::Result<()> {
    let store = StatusStore::new(file);
    let doc = store.read();
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
