//! Traverse command
use std::path::Path;

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{traverse, Strategy};

/// Execute the traverse command
pub fn execute(format: OutputFormat, graph_path: &Path, start: &str, strategy: Strategy) -> Result<()> {
    let graph = super::load_graph(graph_path)?;
    let order = traverse(&graph, &start.to_string(), strategy)?;

    match format {
        OutputFormat::Human => println!("{}", order.join(" -> ")),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "strategy": strategy.to_string(),
                "order": order,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
