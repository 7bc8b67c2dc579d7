//! HTTP method and response status classification
//!
//! Maps path item keys to HTTP methods and response status codes to the
//! response classes of the `api` vocabulary.

use openapi_rdf_common::vocab::api;
use std::fmt;

/// HTTP methods a path item can hold, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Trace,
    ];

    /// Path item key (lower case)
    pub fn key(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }

    /// Method name as sent on the wire
    pub fn as_upper(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Parse a path item key
    ///
    /// # Examples
    /// ```
    /// use openapi_rdf_parser::HttpMethod;
    ///
    /// assert_eq!(HttpMethod::from_key("get"), Some(HttpMethod::Get));
    /// assert_eq!(HttpMethod::from_key("parameters"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<HttpMethod> {
        HttpMethod::ALL.iter().copied().find(|m| m.key() == key)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_upper())
    }
}

/// Response status classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Informational,
    Success,
    Redirect,
    ClientError,
    ServerError,
    Default,
}

impl StatusClass {
    /// Classify a response key such as `200`, `4XX` or `default`
    ///
    /// # Examples
    /// ```
    /// use openapi_rdf_parser::StatusClass;
    ///
    /// assert_eq!(StatusClass::classify("201"), Some(StatusClass::Success));
    /// assert_eq!(StatusClass::classify("4XX"), Some(StatusClass::ClientError));
    /// assert_eq!(StatusClass::classify("default"), Some(StatusClass::Default));
    /// assert_eq!(StatusClass::classify("teapot"), None);
    /// ```
    pub fn classify(status: &str) -> Option<StatusClass> {
        if status == "default" {
            return Some(StatusClass::Default);
        }

        let mut chars = status.chars();
        let class = match chars.next()? {
            '1' => StatusClass::Informational,
            '2' => StatusClass::Success,
            '3' => StatusClass::Redirect,
            '4' => StatusClass::ClientError,
            '5' => StatusClass::ServerError,
            _ => return None,
        };

        // Remaining characters: two digits, or the `XX` range wildcard
        let rest: Vec<char> = chars.collect();
        let valid = rest.len() == 2
            && (rest.iter().all(|c| c.is_ascii_digit())
                || rest.iter().all(|c| c.eq_ignore_ascii_case(&'x')));

        valid.then_some(class)
    }

    /// Vocabulary class for this status class
    pub fn class_iri(&self) -> &'static str {
        match self {
            StatusClass::Informational => api::INFORMATIONAL_RESPONSE,
            StatusClass::Success => api::SUCCESS_RESPONSE,
            StatusClass::Redirect => api::REDIRECT_RESPONSE,
            StatusClass::ClientError => api::CLIENT_ERROR_RESPONSE,
            StatusClass::ServerError => api::SERVER_ERROR_RESPONSE,
            StatusClass::Default => api::DEFAULT_RESPONSE,
        }
    }
}
