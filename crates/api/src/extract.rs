//! Validating extractors.
//!
//! Each route declares its pre-conditions as the types it extracts: path
//! parameters via [`ValidPath`], query strings via [`ValidQuery`], bodies via
//! [`ValidatedJson`]. Axum runs extractors in argument order, so the first
//! failing one short-circuits with a 400 carrying field-level messages and
//! the handler never runs.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use showcase_core::media::validate_media_type;
use showcase_core::types::DbId;
use validator::Validate;

use crate::error::{AppError, FieldError};

/// JSON body that has been deserialized and validated.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::Validation(vec![FieldError::new("body", rejection.body_text())])
            })?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Path parameters that have been parsed and validated.
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::Validation(vec![FieldError::new("path", rejection.body_text())])
            })?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Query string that has been parsed and validated.
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::Validation(vec![FieldError::new("query", rejection.body_text())])
            })?;
        value.validate()?;
        Ok(Self(value))
    }
}

// ---------------------------------------------------------------------------
// Parameter shapes
// ---------------------------------------------------------------------------

/// `/{id}`
#[derive(Debug, Deserialize, Validate)]
pub struct IdParam {
    #[validate(range(min = 1, message = "ID must be a positive integer"))]
    pub id: DbId,
}

/// `/{id}/media/{media_id}`
#[derive(Debug, Deserialize, Validate)]
pub struct MediaPath {
    #[validate(range(min = 1, message = "Event ID must be a positive integer"))]
    pub id: DbId,
    #[validate(range(min = 1, message = "Media ID must be a positive integer"))]
    pub media_id: DbId,
}

/// `/type/{type}`
#[derive(Debug, Deserialize, Validate)]
pub struct MediaTypeParam {
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_media_type"))]
    pub media_type: String,
}

/// `/section/{section}`
#[derive(Debug, Deserialize, Validate)]
pub struct SectionParam {
    #[validate(length(min = 1, max = 100, message = "Section must be 1-100 characters"))]
    pub section: String,
}

/// `/business-line/{business_line}`
#[derive(Debug, Deserialize, Validate)]
pub struct BusinessLineParam {
    #[validate(length(min = 1, max = 100, message = "Business line must be 1-100 characters"))]
    pub business_line: String,
}

/// `/upload/{directory}`
#[derive(Debug, Deserialize, Validate)]
pub struct DirectoryParam {
    #[validate(length(min = 1, message = "Directory is required"))]
    pub directory: String,
}

/// `?term=...`, trimmed before validation so a blank term is rejected.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchParams {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Search term is required"))]
    pub term: String,
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_must_be_positive() {
        assert!(IdParam { id: 1 }.validate().is_ok());
        assert!(IdParam { id: 0 }.validate().is_err());
        assert!(IdParam { id: -4 }.validate().is_err());
    }

    #[test]
    fn media_type_param_accepts_only_known_kinds() {
        let ok = MediaTypeParam {
            media_type: "video".into(),
        };
        assert!(ok.validate().is_ok());
        let bad = MediaTypeParam {
            media_type: "audio".into(),
        };
        let fields = crate::error::field_errors(&bad.validate().unwrap_err());
        assert_eq!(fields[0].field, "type");
        assert_eq!(
            fields[0].message,
            "Invalid media type. Must be 'image' or 'video'"
        );
    }

    #[test]
    fn empty_search_term_is_rejected() {
        let params = SearchParams {
            term: String::new(),
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn search_term_is_trimmed_before_validation() {
        let blank: SearchParams = serde_json::from_value(serde_json::json!({"term": "   "})).unwrap();
        assert!(blank.validate().is_err());

        let padded: SearchParams =
            serde_json::from_value(serde_json::json!({"term": " hall "})).unwrap();
        assert_eq!(padded.term, "hall");
        assert!(padded.validate().is_ok());
    }
}
