use std::collections::BTreeMap;

use scraper::{Html, Selector};

/// External script sources in document order.
///
/// Inline scripts and empty `src` attributes are skipped.
pub fn extract_scripts(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("script[src]").expect("static selector");

    document
        .select(&selector)
        .filter_map(|el| el.value().attr("src"))
        .filter(|src| !src.is_empty())
        .map(|src| src.to_string())
        .collect()
}

/// Meta tag `name` → `content` mapping.
///
/// Tags without a `name` attribute are skipped; on duplicate names the last
/// occurrence wins. A missing `content` attribute maps to an empty string.
pub fn extract_meta(html: &str) -> BTreeMap<String, String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("meta[name]").expect("static selector");

    let mut meta = BTreeMap::new();
    for el in document.select(&selector) {
        let Some(name) = el.value().attr("name") else {
            continue;
        };
        let content = el.value().attr("content").unwrap_or("");
        meta.insert(name.to_string(), content.to_string());
    }
    meta
}

/// One input field inside a form, paired with the form's action.
#[derive(Debug, Clone)]
pub struct FormField {
    pub form_action: String,
    pub input_name: String,
    pub input_type: String,
}

/// Every named input field across all forms, in document order.
///
/// The input type is lower-cased for matching; the name keeps its original
/// case. Inputs without a `name` or `type` attribute are skipped.
pub fn extract_form_fields(html: &str) -> Vec<FormField> {
    let document = Html::parse_document(html);
    let form_selector = Selector::parse("form").expect("static selector");
    let input_selector = Selector::parse("input").expect("static selector");

    let mut fields = Vec::new();
    for form in document.select(&form_selector) {
        let action = form.value().attr("action").unwrap_or("");
        for input in form.select(&input_selector) {
            let Some(name) = input.value().attr("name") else {
                continue;
            };
            let Some(input_type) = input.value().attr("type") else {
                continue;
            };
            fields.push(FormField {
                form_action: action.to_string(),
                input_name: name.to_string(),
                input_type: input_type.to_lowercase(),
            });
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_in_document_order() {
        let html = r#"<html><head>
            <script src="https://a.example/one.js"></script>
            <script>var inline = 1;</script>
            <script src="https://b.example/two.js"></script>
        </head></html>"#;
        let scripts = extract_scripts(html);
        assert_eq!(scripts, vec![
            "https://a.example/one.js".to_string(),
            "https://b.example/two.js".to_string(),
        ]);
    }

    #[test]
    fn test_empty_src_skipped() {
        let html = r#"<script src=""></script><script src="https://c.example/x.js"></script>"#;
        let scripts = extract_scripts(html);
        assert_eq!(scripts, vec!["https://c.example/x.js".to_string()]);
    }

    #[test]
    fn test_meta_skips_unnamed_and_last_wins() {
        let html = r#"<html><head>
            <meta charset="utf-8">
            <meta name="description" content="first">
            <meta name="author" content="alice">
            <meta name="description" content="second">
        </head></html>"#;
        let meta = extract_meta(html);
        assert_eq!(meta.len(), 2);
        assert_eq!(meta.get("description").map(String::as_str), Some("second"));
        assert_eq!(meta.get("author").map(String::as_str), Some("alice"));
    }

    #[test]
    fn test_meta_missing_content_maps_to_empty() {
        let html = r#"<meta name="robots">"#;
        let meta = extract_meta(html);
        assert_eq!(meta.get("robots").map(String::as_str), Some(""));
    }

    #[test]
    fn test_form_fields_capture_action_and_lowercase_type() {
        let html = r#"<form action="/signup">
            <input type="EMAIL" name="contact_email">
            <input type="submit" value="go">
        </form>"#;
        let fields = extract_form_fields(html);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].form_action, "/signup");
        assert_eq!(fields[0].input_name, "contact_email");
        assert_eq!(fields[0].input_type, "email");
    }

    #[test]
    fn test_inputs_outside_forms_ignored() {
        let html = r#"<input type="text" name="username"><form></form>"#;
        assert!(extract_form_fields(html).is_empty());
    }
}
