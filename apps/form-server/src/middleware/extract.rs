//! Form body extractor accepting either urlencoded or JSON bodies.

use std::future::Future;
use std::pin::Pin;

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use serde::de::DeserializeOwned;

use super::error::AppError;

/// A posted form, decoded from `application/json` or
/// `application/x-www-form-urlencoded` depending on the request's content type.
///
/// Undecodable bodies fail with [`AppError::Payload`], which answers 500 like
/// any other rejected submission.
#[derive(Debug)]
pub struct Submission<T>(pub T);

impl<T> Submission<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

fn is_json(req: &HttpRequest) -> bool {
    let content_type = req.content_type();
    content_type.eq_ignore_ascii_case("application/json") || content_type.ends_with("+json")
}

impl<T> FromRequest for Submission<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if is_json(req) {
            let fut = web::Json::<T>::from_request(req, payload);
            Box::pin(async move {
                fut.await
                    .map(|body| Submission(body.into_inner()))
                    .map_err(|e| AppError::Payload(e.to_string()))
            })
        } else {
            let fut = web::Form::<T>::from_request(req, payload);
            Box::pin(async move {
                fut.await
                    .map(|body| Submission(body.into_inner()))
                    .map_err(|e| AppError::Payload(e.to_string()))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use magdalene_shared::dto::{FieldInput, QuoteForm};

    use super::*;

    #[actix_rt::test]
    async fn test_decodes_urlencoded_body() {
        let (req, mut payload) = TestRequest::post()
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload("name=A&quantity=2")
            .to_http_parts();

        let form = Submission::<QuoteForm>::from_request(&req, &mut payload)
            .await
            .unwrap()
            .into_inner();

        assert_eq!(form.name, Some(FieldInput::Text("A".into())));
        assert_eq!(form.quantity, Some(FieldInput::Text("2".into())));
    }

    #[actix_rt::test]
    async fn test_decodes_json_body() {
        let (req, mut payload) = TestRequest::post()
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"name":"A","quantity":2}"#)
            .to_http_parts();

        let form = Submission::<QuoteForm>::from_request(&req, &mut payload)
            .await
            .unwrap()
            .into_inner();

        assert_eq!(form.quantity, Some(FieldInput::Number(2.0)));
    }

    #[actix_rt::test]
    async fn test_malformed_json_is_a_payload_error() {
        let (req, mut payload) = TestRequest::post()
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_http_parts();

        let result = Submission::<QuoteForm>::from_request(&req, &mut payload).await;
        assert!(matches!(result, Err(AppError::Payload(_))));
    }
}
