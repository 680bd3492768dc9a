use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("battwatch version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
