use std::collections::HashMap;

use crate::error::DocumentError;
use crate::geometry::limits;
use crate::model::Region;

/// Extract `(id, d)` pairs from every `path` element of the document and
/// resolve display names through the caller's table. Elements missing a
/// usable id or path data are logged and skipped, never fatal.
pub(crate) fn parse_regions_impl(
    bytes: &[u8],
    names: &HashMap<u32, String>,
) -> Result<Vec<Region>, DocumentError> {
    if bytes.len() > limits::MAX_DOCUMENT_BYTES {
        return Err(DocumentError::TooLarge(limits::MAX_DOCUMENT_BYTES));
    }
    let text = std::str::from_utf8(bytes).map_err(|_| DocumentError::NotUtf8)?;
    let doc = roxmltree::Document::parse(text)?;

    let mut regions = Vec::new();
    for node in doc.descendants() {
        if node.tag_name().name() != "path" {
            continue;
        }
        let id_attr = node.attribute("id");
        let d_attr = node.attribute("d").filter(|d| !d.is_empty());
        let id = id_attr.and_then(|s| s.trim().parse::<u32>().ok());
        match (id, d_attr) {
            (Some(id), Some(d)) => {
                let name = names
                    .get(&id)
                    .cloned()
                    .unwrap_or_else(|| format!("Unknown region {}", id));
                regions.push(Region {
                    id,
                    name,
                    path_data: d.to_string(),
                });
            }
            _ => {
                log::warn!(
                    "skipping path element with id={:?} and {} bytes of path data",
                    id_attr,
                    node.attribute("d").map_or(0, str::len)
                );
            }
        }
    }
    Ok(regions)
}
