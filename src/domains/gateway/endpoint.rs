//! Static endpoint descriptions.
//!
//! An [`EndpointSpec`] describes one upstream HTTP operation: its method,
//! its path template with `{name}` placeholders, the field names expected in
//! the JSON body, and the declared path/query parameters. Specs are built
//! once at startup from the endpoint catalog and never mutated.

use std::fmt;

use crate::domains::schema::SchemaNode;

/// Where a declared parameter travels: URL path segment or query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Substituted into a `{name}` placeholder in the path template.
    Path,
    /// Appended to the query string.
    Query,
}

/// Declaration that a named field is supplied via the URL rather than the
/// JSON body.
#[derive(Debug, Clone)]
pub struct ParameterDescriptor {
    /// Field name as it appears in the caller's parameter object.
    pub name: String,
    /// Path segment or query string.
    pub location: ParamLocation,
    /// Whether the upstream requires the parameter. Enforced by the field's
    /// schema at validation time, recorded here for the catalog.
    pub required: bool,
    /// Shape of the parameter value.
    pub schema: SchemaNode,
}

impl ParameterDescriptor {
    /// Declare a path parameter. Path parameters are always required.
    pub fn path(name: impl Into<String>, schema: SchemaNode) -> Self {
        Self {
            name: name.into(),
            location: ParamLocation::Path,
            required: true,
            schema,
        }
    }

    /// Declare an optional query parameter.
    pub fn query(name: impl Into<String>, schema: SchemaNode) -> Self {
        Self {
            name: name.into(),
            location: ParamLocation::Query,
            required: false,
            schema,
        }
    }

    /// Mark the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// HTTP method of an upstream operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Canonical method token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether a request with this method may carry a JSON body.
    ///
    /// GET and DELETE never carry a body; fields staged for the body of
    /// such a request are dropped at build time.
    pub fn allows_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Static description of one upstream HTTP operation.
#[derive(Debug, Clone)]
pub struct EndpointSpec {
    /// Path template with `{name}` placeholders, e.g. `/order/{orderId}`.
    pub path_template: String,
    /// HTTP method, fixed per endpoint.
    pub method: HttpMethod,
    /// Ordered field names expected in the JSON body.
    pub body_fields: Vec<String>,
    /// Declared path and query parameters.
    pub params: Vec<ParameterDescriptor>,
}

impl EndpointSpec {
    /// Create a spec for the given method and path template.
    pub fn new(method: HttpMethod, path_template: impl Into<String>) -> Self {
        Self {
            path_template: path_template.into(),
            method,
            body_fields: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Declare the field names expected in the JSON body.
    pub fn body_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body_fields = names.into_iter().map(Into::into).collect();
        self
    }

    /// Add a path or query parameter declaration.
    pub fn param(mut self, descriptor: ParameterDescriptor) -> Self {
        self.params.push(descriptor);
        self
    }

    /// Find a declared path parameter by name.
    pub fn path_param(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.params
            .iter()
            .find(|p| p.location == ParamLocation::Path && p.name == name)
    }

    /// Find a declared query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.params
            .iter()
            .find(|p| p.location == ParamLocation::Query && p.name == name)
    }

    /// Whether the named field is declared as a body member.
    pub fn expects_in_body(&self, name: &str) -> bool {
        self.body_fields.iter().any(|f| f == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_body_matrix() {
        assert!(!HttpMethod::Get.allows_body());
        assert!(!HttpMethod::Delete.allows_body());
        assert!(HttpMethod::Post.allows_body());
        assert!(HttpMethod::Put.allows_body());
        assert!(HttpMethod::Patch.allows_body());
    }

    #[test]
    fn test_param_lookup_by_location() {
        let spec = EndpointSpec::new(HttpMethod::Get, "/order/{orderId}")
            .param(ParameterDescriptor::path("orderId", SchemaNode::string()))
            .param(ParameterDescriptor::query("expand", SchemaNode::string()));

        assert!(spec.path_param("orderId").is_some());
        assert!(spec.query_param("orderId").is_none());
        assert!(spec.query_param("expand").is_some());
        assert!(spec.path_param("expand").is_none());
    }

    #[test]
    fn test_body_field_membership() {
        let spec = EndpointSpec::new(HttpMethod::Post, "/user").body_fields(["email", "password"]);
        assert!(spec.expects_in_body("email"));
        assert!(!spec.expects_in_body("displayName"));
    }
}
