use crate::error::Result;
use crate::preset::{presets, PRESETS};

/// Render the `presets` listing.
pub fn render(json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&presets())?);
    }

    let mut out = format!("{:<12} EXPRESSION", "NAME");
    for (name, expression) in PRESETS {
        out.push_str(&format!("\n{:<12} {}", name, expression));
    }
    Ok(out)
}

/// Execute the `presets` command: list every @preset and its expansion.
pub fn execute(json: bool) -> Result<()> {
    println!("{}", render(json)?);
    Ok(())
}
