use crate::shared::api_utils::{api_url, bearer_header};
use contracts::domain::a001_employee::{EmployeeRecord, ErrorBody, StoreStatus};
use contracts::domain::a002_reference_data::ReferenceKind;
use contracts::domain::common::{Choice, ReferenceItem};
use gloo_net::http::{Request, RequestBuilder};
use web_sys::{File, FormData};

const EMPLOYEES_PATH: &str = "employees";

fn with_headers(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match bearer_header() {
        Some(auth) => builder.header("Authorization", &auth),
        None => builder,
    }
}

/// Fetch one reference-data list
pub async fn fetch_reference(kind: ReferenceKind) -> Result<Vec<Choice>, String> {
    let url = api_url(kind.path());
    let response = with_headers(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let items: Vec<ReferenceItem> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(items.into_iter().map(Choice::from).collect())
}

fn build_form(record: &EmployeeRecord, photo: Option<&File>) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("{e:?}"))?;
    for (key, value) in record.form_fields() {
        form.append_with_str(&key, &value)
            .map_err(|e| format!("{e:?}"))?;
    }
    if let Some(file) = photo {
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
    }
    Ok(form)
}

/// Messages for a rejected create request
fn rejection_messages(status: u16, body: Option<ErrorBody>) -> Vec<String> {
    let messages = body.map(ErrorBody::into_messages).unwrap_or_default();
    if messages.is_empty() {
        vec![format!("HTTP {}", status)]
    } else {
        messages
    }
}

/// Send the validated record as a multipart body.
///
/// The photo is attached only when the record still carries image metadata.
pub async fn store_employee(
    record: &EmployeeRecord,
    photo: Option<File>,
) -> Result<StoreStatus, Vec<String>> {
    let photo = photo.filter(|_| record.image.is_some());
    let form = build_form(record, photo.as_ref()).map_err(|e| vec![e])?;

    let url = api_url(EMPLOYEES_PATH);
    log::debug!(
        "POST {} ({} insurances, photo: {})",
        url,
        record.insurances.len(),
        photo.is_some()
    );

    let response = with_headers(Request::post(&url))
        .body(form)
        .map_err(|e| vec![format!("Failed to build request: {}", e)])?
        .send()
        .await
        .map_err(|e| vec![format!("Request failed: {}", e)])?;

    let status = response.status();
    if response.ok() {
        return response
            .json::<StoreStatus>()
            .await
            .map_err(|e| vec![format!("Failed to parse response: {}", e)]);
    }

    let body = response.json::<ErrorBody>().await.ok();
    let messages = rejection_messages(status, body);
    log::warn!("employee store rejected: HTTP {} ({} errors)", status, messages.len());
    Err(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_employee::response::ErrorList;
    use std::collections::BTreeMap;

    #[test]
    fn test_rejection_uses_field_errors() {
        let mut by_field = BTreeMap::new();
        by_field.insert(
            "name".to_string(),
            vec!["The name has already been taken.".to_string()],
        );
        let body = ErrorBody {
            message: Some("The given data was invalid.".to_string()),
            errors: Some(ErrorList::ByField(by_field)),
        };
        assert_eq!(
            rejection_messages(422, Some(body)),
            vec!["The name has already been taken."]
        );
    }

    #[test]
    fn test_rejection_from_flat_list_body() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"errors": ["Photo too large", "Wages out of range"]}"#)
                .unwrap();
        assert_eq!(
            rejection_messages(422, Some(body)),
            vec!["Photo too large", "Wages out of range"]
        );
    }

    #[test]
    fn test_rejection_falls_back_to_status() {
        assert_eq!(rejection_messages(500, None), vec!["HTTP 500"]);
        assert_eq!(
            rejection_messages(400, Some(ErrorBody::default())),
            vec!["HTTP 400"]
        );
        let body = ErrorBody {
            message: Some("Forbidden".to_string()),
            errors: None,
        };
        assert_eq!(rejection_messages(403, Some(body)), vec!["Forbidden"]);
    }
}
