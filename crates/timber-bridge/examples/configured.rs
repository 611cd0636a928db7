//! Picks a dispatcher before installing the bridges, then logs through
//! both facades with a mapped context entry set.

use std::sync::Arc;
use timber::{StdoutDispatcher, TimberConfig};
use timber_bridge::{ContextAdapterBinder, FacadeBinder, MappedContext};

const CONFIG: &str = r#"
min_level = "info"
show_location = false
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Without this the bridge uses timber's default dispatcher
    let config = TimberConfig::from_toml_str(CONFIG)?;
    timber::init(Arc::new(StdoutDispatcher::from_config(config)))?;
    timber_bridge::install_all()?;

    println!(
        "bound to {} / {}",
        FacadeBinder::singleton().logger_factory_class_name(),
        ContextAdapterBinder::singleton().context_adapter_class_name()
    );

    let context = ContextAdapterBinder::singleton().context_adapter();
    context.put("request", "r-42");

    log::debug!(target: "ABC", "filtered out by min_level");
    log::info!(target: "ABC", user = "alice"; "Hello, world!");
    tracing::warn!(target: "ABC", attempt = 3, "Goodbye, world!");

    context.clear();
    log::logger().flush();
    Ok(())
}
