//! Path command
use std::path::Path;

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{path_between, Strategy};

/// Execute the path command
pub fn execute(
    format: OutputFormat,
    graph_path: &Path,
    from: &str,
    to: &str,
    strategy: Strategy,
) -> Result<()> {
    let graph = super::load_graph(graph_path)?;
    let found = path_between(&graph, &from.to_string(), &to.to_string(), strategy)?;

    match format {
        OutputFormat::Human => match &found {
            Some(path) => {
                println!("{}", path);
                println!("length: {}", path.length);
            }
            None => println!("no path from {} to {}", from, to),
        },
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "strategy": strategy.to_string(),
                "found": found.is_some(),
                "path": found.as_ref().map(|p| p.vertices.clone()).unwrap_or_default(),
                "length": found.as_ref().map(|p| p.length),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
