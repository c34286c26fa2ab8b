/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::ws::methods::Method;
use serde_json::Value;

// Flattens a parameter tree into the bracketed form-field names the web
// service expects (`parent[child]`, arrays keyed by index). The `method`
// field always comes first; a root value that is not a map contributes
// nothing beyond it.
pub(crate) fn form_fields(method: Method, params: &Value) -> Vec<(String, String)> {
    let mut fields = vec![("method".to_string(), method.to_string())];
    flatten(params, None, &mut fields);
    fields
}

pub(crate) fn into_form(method: Method, params: &Value) -> reqwest::multipart::Form {
    let mut form = reqwest::multipart::Form::new();
    for (name, value) in form_fields(method, params) {
        form = form.text(name, value);
    }
    form
}

fn flatten(value: &Value, path: Option<&str>, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let name = match path {
                    Some(parent) => format!("{parent}[{key}]"),
                    None => key.clone(),
                };
                flatten(child, Some(&name), out);
            }
        }
        Value::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                let name = match path {
                    Some(parent) => format!("{parent}[{idx}]"),
                    None => idx.to_string(),
                };
                flatten(child, Some(&name), out);
            }
        }
        leaf => {
            if let Some(name) = path {
                out.push((name.to_string(), leaf_text(leaf)));
            }
        }
    }
}

// Scalar coercion: null becomes the empty string, never the text "null".
fn leaf_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn method_field_always_comes_first() {
        let fields = form_fields(Method::SessionGetStatus, &json!({"page": 3}));
        assert_eq!(
            fields[0],
            ("method".to_string(), "pwg.session.getStatus".to_string())
        );
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn nesting_flattens_to_one_bracketed_field() {
        let fields = form_fields(Method::GetVersion, &json!({"a": {"b": {"c": 1}}}));
        assert_eq!(fields[1], ("a[b][c]".to_string(), "1".to_string()));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn arrays_flatten_by_index() {
        let fields = form_fields(Method::TagsGetImages, &json!({"tag_id": [1, 2]}));
        assert_eq!(fields[1], ("tag_id[0]".to_string(), "1".to_string()));
        assert_eq!(fields[2], ("tag_id[1]".to_string(), "2".to_string()));
    }

    #[test]
    fn null_leaves_encode_as_empty_string() {
        let fields = form_fields(Method::SessionLogin, &json!({"password": null}));
        assert_eq!(fields[1], ("password".to_string(), String::new()));
    }

    #[test]
    fn top_level_scalars_are_named_directly() {
        let fields = form_fields(
            Method::CategoriesGetImages,
            &json!({"recursive": false, "per_page": 50}),
        );
        assert!(fields.contains(&("recursive".to_string(), "false".to_string())));
        assert!(fields.contains(&("per_page".to_string(), "50".to_string())));
    }

    #[test]
    fn non_map_root_contributes_only_the_method() {
        let fields = form_fields(Method::SessionLogout, &Value::Null);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].0, "method");
    }
}
