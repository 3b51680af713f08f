//! Assertions over `--format json` output and item lists.

use anyhow::{Context, Result};
use itemreg_types::Item;
use serde_json::Value;

/// Assert that a JSON array of items has the expected length.
pub fn assert_item_count(json: &Value, expected: usize) -> Result<()> {
    let items = json.as_array().context("Expected a JSON array of items")?;

    if items.len() != expected {
        anyhow::bail!("Expected {} items, got {}", expected, items.len());
    }

    Ok(())
}

/// Assert the `codigo` values of a JSON item array, in order.
pub fn assert_codes(json: &Value, expected: &[&str]) -> Result<()> {
    let items = json.as_array().context("Expected a JSON array of items")?;

    let codes: Vec<&str> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item["codigo"]
                .as_str()
                .with_context(|| format!("Item {} missing codigo", i))
        })
        .collect::<Result<_>>()?;

    if codes != expected {
        anyhow::bail!("Expected codes {:?}, got {:?}", expected, codes);
    }

    Ok(())
}

/// Codes of a borrowed item view, for comparing engine output
pub fn codes<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<&'a str> {
    items.into_iter().map(|item| item.code.as_str()).collect()
}
