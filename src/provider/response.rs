//! Response body lowering: XML/RSS and JSON bodies into uniform raw records.
//!
//! Both formats reduce to the same [`RawRecord`] shape (field name → value)
//! so a provider's mapping function never cares which wire format the source
//! uses. A missing listings path yields an empty record list, not an error;
//! only a malformed body is a parse failure.

use quick_xml::events::Event;
use serde_json::Value;

use super::{ProviderError, ResponseFormat};

/// One raw listing record as parsed from a provider response.
pub type RawRecord = serde_json::Map<String, Value>;

/// Extracts listing records from a JSON body.
///
/// `path` is dot-separated; the empty path addresses the document root. The
/// value at the path may be an array of records or a single record object.
pub(crate) fn json_listings(
    body: &str,
    path: &str,
    url: &str,
) -> Result<Vec<RawRecord>, ProviderError> {
    let root: Value = serde_json::from_str(body)
        .map_err(|error| ProviderError::parse(url, ResponseFormat::Json, &error.to_string()))?;

    let Some(node) = walk_json_path(&root, path) else {
        return Ok(Vec::new());
    };

    match node {
        Value::Array(items) => Ok(items
            .iter()
            .filter_map(|item| item.as_object().cloned())
            .collect()),
        Value::Object(record) => Ok(vec![record.clone()]),
        _ => Ok(Vec::new()),
    }
}

fn walk_json_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(root);
    }
    let mut node = root;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    Some(node)
}

/// Extracts listing records from an XML body.
///
/// Listing elements are matched anywhere in the document by the local name of
/// the final `path` segment (namespace prefixes ignored), so `item` matches
/// both RSS 2.0 `<item>` and RDF `<item rdf:about=...>`. Each listing's child
/// elements become record fields: name → concatenated text content, with
/// CDATA sections included and the first value winning on duplicate names.
pub(crate) fn xml_listings(
    body: &str,
    path: &str,
    url: &str,
) -> Result<Vec<RawRecord>, ProviderError> {
    let Some(target) = path.rsplit('.').next().filter(|segment| !segment.is_empty()) else {
        return Ok(Vec::new());
    };

    let xml_error =
        |error: &dyn std::fmt::Display| ProviderError::parse(url, ResponseFormat::Xml, &error.to_string());

    let mut reader = quick_xml::Reader::from_str(body);
    let mut records = Vec::new();
    let mut record: Option<RawRecord> = None;
    let mut field: Option<String> = None;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Err(error) => return Err(xml_error(&error)),
            Ok(Event::Eof) => break,
            Ok(Event::Start(start)) => {
                let name = local_name(start.name());
                if record.is_none() {
                    if name == target {
                        record = Some(RawRecord::new());
                    }
                } else if field.is_none() {
                    field = Some(name);
                    text.clear();
                }
                // deeper markup inside a field contributes only its text
            }
            Ok(Event::Text(content)) if field.is_some() => {
                text.push_str(&content.decode().map_err(|e| xml_error(&e))?);
            }
            Ok(Event::CData(content)) if field.is_some() => {
                text.push_str(&String::from_utf8_lossy(&content.into_inner()));
            }
            Ok(Event::GeneralRef(reference)) if field.is_some() => {
                text.push_str(&resolve_entity(&String::from_utf8_lossy(&reference)));
            }
            Ok(Event::End(end)) => {
                let name = local_name(end.name());
                if let Some(current) = &field {
                    if *current == name {
                        if let Some(fields) = record.as_mut() {
                            fields
                                .entry(current.clone())
                                .or_insert_with(|| Value::String(text.trim().to_string()));
                        }
                        field = None;
                    }
                } else if name == target {
                    if let Some(finished) = record.take() {
                        records.push(finished);
                    }
                }
            }
            Ok(_) => {}
        }
    }

    Ok(records)
}

fn local_name(name: quick_xml::name::QName<'_>) -> String {
    String::from_utf8_lossy(name.local_name().as_ref()).into_owned()
}

/// Resolves the predefined XML entities and numeric character references;
/// anything else passes through verbatim.
fn resolve_entity(name: &str) -> String {
    match name {
        "amp" => "&".to_string(),
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "apos" => "'".to_string(),
        "quot" => "\"".to_string(),
        _ => resolve_char_reference(name).unwrap_or_else(|| format!("&{name};")),
    }
}

fn resolve_char_reference(name: &str) -> Option<String> {
    let digits = name.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse().ok()?
    };
    Some(char::from_u32(code)?.to_string())
}

/// Reads a record field as text, stringifying numbers and booleans.
///
/// Missing or structured fields yield `None`; provider mapping functions
/// default those to empty values rather than failing.
#[must_use]
pub fn record_text(record: &RawRecord, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        Value::Bool(value) => Some(value.to_string()),
        _ => None,
    }
}
