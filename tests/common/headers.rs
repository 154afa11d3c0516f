use cors_gate::Headers;
use cors_gate::constants::header;

pub const CORS_HEADERS: [&str; 3] = [
    header::ACCESS_CONTROL_ALLOW_ORIGIN,
    header::ACCESS_CONTROL_ALLOW_METHODS,
    header::ACCESS_CONTROL_ALLOW_HEADERS,
];

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers.get(name)
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

pub fn has_any_cors_header(headers: &Headers) -> bool {
    CORS_HEADERS.iter().any(|name| has_header(headers, name))
}
