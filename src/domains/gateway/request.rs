//! Field classification: path substitution, query entry, or body member.
//!
//! Classification is a first-matching-rule pass over the supplied fields,
//! applied in a fixed precedence order so the outcome is auditable:
//!
//! 1. declared path parameter -> substituted into the template, never
//!    duplicated into the body or query even if also declared there;
//! 2. declared body field -> staged into the JSON body;
//! 3. declared query parameter -> appended to the query string;
//! 4. anything else -> silently dropped (permissive by design, not an error).
//!
//! After classification, a field literally named `requestBodyData` whose
//! value is a mapping is merged into the body, overriding same-named staged
//! keys. The override is the contract; each shadowed key logs a warning.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::endpoint::EndpointSpec;

/// Free-form body pass-through field. Entries of a mapping supplied under
/// this name bypass the declared field list and are merged into the body
/// last, shadowing same-named staged keys.
pub const RAW_BODY_FIELD: &str = "requestBodyData";

/// The outcome of classifying one parameter set against an endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedRequest {
    /// Path with placeholders substituted.
    pub path: String,
    /// Query-string entries, in classification order.
    pub query: Vec<(String, String)>,
    /// JSON body members, or `None` when nothing was staged.
    pub body: Option<Map<String, Value>>,
}

/// Classify every supplied field against the endpoint declaration.
///
/// Fields absent from `params` are simply not supplied; an explicit null is
/// a real value and is forwarded like any other. Placeholders with no
/// matching supplied field are left in the path untouched - required-ness is
/// the validator's concern, and the upstream's response flows back as-is.
pub fn stage(spec: &EndpointSpec, params: &Map<String, Value>) -> StagedRequest {
    let mut path = spec.path_template.clone();
    let mut query = Vec::new();
    let mut body = Map::new();

    for (name, value) in params {
        if name == RAW_BODY_FIELD {
            continue;
        }
        if spec.path_param(name).is_some() {
            path = path.replace(&format!("{{{name}}}"), &scalar_text(value));
        } else if spec.expects_in_body(name) {
            body.insert(name.clone(), value.clone());
        } else if spec.query_param(name).is_some() {
            query.push((name.clone(), scalar_text(value)));
        } else {
            debug!(field = %name, "dropping undeclared field");
        }
    }

    if let Some(Value::Object(raw)) = params.get(RAW_BODY_FIELD) {
        for (key, value) in raw {
            if body.insert(key.clone(), value.clone()).is_some() {
                warn!(key = %key, "requestBodyData shadows a staged body field");
            }
        }
    }

    StagedRequest {
        path,
        query,
        body: if body.is_empty() { None } else { Some(body) },
    }
}

/// String coercion for path and query values. Strings travel as-is, every
/// other value as its JSON rendering.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
