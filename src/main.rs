use rustyddl::{DdlRenderer, MysqlRenderer, RenderConfig, TableDescriptor, VERSION};
use std::io::Read;
use tracing::info;
use tracing_subscriber::EnvFilter;

// usage: rustyddl [table.json] [config.json]
// テーブル記述を省略した場合は標準入力から読む
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    info!("RustyDDL version: {}", VERSION);

    let mut args = std::env::args().skip(1);
    let descriptor_json = match args.next() {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let config = match args.next() {
        Some(path) => RenderConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => RenderConfig::default(),
    };

    let descriptor: TableDescriptor = serde_json::from_str(&descriptor_json)?;
    let table = descriptor.into_table()?;
    info!(table = %table.name, columns = table.columns.len(), "table descriptor loaded");

    let renderer = MysqlRenderer::with_config(config);
    println!("{}", table.create_ddl_with(&renderer as &dyn DdlRenderer)?);
    Ok(())
}
