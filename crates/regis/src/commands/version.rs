pub fn run() -> anyhow::Result<()> {
    println!("regis {}", env!("CARGO_PKG_VERSION"));
    println!("Session memory and status snapshots for AI assistants");
    Ok(())
}
