//! Route templates for span fields and metric labels.

use uuid::Uuid;

/// Collapse a request path into its route template.
///
/// UUID segments become `{id}` and cart session segments become `{sessionId}`, which
/// keeps metric label cardinality bounded.
pub(super) fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    if segments.iter().all(|segment| segment.is_empty()) {
        return "/".to_owned();
    }

    let mut template = String::new();
    let mut previous = "";

    for segment in segments {
        template.push('/');

        if previous == "cart" && segment != "add" {
            template.push_str("{sessionId}");
        } else if Uuid::parse_str(segment).is_ok() {
            template.push_str("{id}");
        } else {
            template.push_str(segment);
        }

        previous = segment;
    }

    template
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_stays_root() {
        assert_eq!(route_template("/"), "/", "root path");
        assert_eq!(route_template(""), "/", "empty path");
    }

    #[test]
    fn uuids_are_collapsed() {
        let id = Uuid::now_v7();

        assert_eq!(
            route_template(&format!("/api/products/{id}")),
            "/api/products/{id}",
            "product id"
        );
    }

    #[test]
    fn cart_sessions_are_collapsed() {
        let id = Uuid::now_v7();

        assert_eq!(
            route_template(&format!("/api/cart/session_123/item/{id}")),
            "/api/cart/{sessionId}/item/{id}",
            "session and product ids"
        );
        assert_eq!(route_template("/api/cart/add"), "/api/cart/add", "add route");
    }
}
