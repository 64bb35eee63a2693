use axum::{extract::FromRequestParts, http::request::Parts};
use serde::Deserialize;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Storefront context appended by the Shopify app proxy to every request.
///
/// The proxy `signature` parameter is not checked, so any caller can claim any
/// shop or customer. Blank values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProxyContext {
    #[serde(default)]
    pub shop: Option<String>,
    #[serde(default)]
    pub logged_in_customer_id: Option<String>,
}

impl ProxyContext {
    pub fn from_query(query: &str) -> Self {
        let context: ProxyContext = serde_urlencoded::from_str(query).unwrap_or_default();

        Self {
            shop: non_blank(context.shop),
            logged_in_customer_id: non_blank(context.logged_in_customer_id),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl<S> FromRequestParts<S> for ProxyContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ProxyContext::from_query(parts.uri.query().unwrap_or("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_proxy_parameters() {
        let context = ProxyContext::from_query(
            "shop=koji-lab.myshopify.com&logged_in_customer_id=7301&path_prefix=%2Fapps%2Fkoji&signature=abc",
        );

        assert_eq!(context.shop.as_deref(), Some("koji-lab.myshopify.com"));
        assert_eq!(context.logged_in_customer_id.as_deref(), Some("7301"));
    }

    #[test]
    fn test_unsigned_or_missigned_query_is_read_as_sent() {
        let unsigned = ProxyContext::from_query("shop=other.myshopify.com&logged_in_customer_id=1");
        let missigned = ProxyContext::from_query(
            "shop=other.myshopify.com&logged_in_customer_id=1&signature=not-a-valid-hmac",
        );

        assert_eq!(unsigned, missigned);
        assert_eq!(missigned.logged_in_customer_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_blank_customer_is_anonymous() {
        let context = ProxyContext::from_query("shop=koji-lab.myshopify.com&logged_in_customer_id=");
        assert_eq!(context.logged_in_customer_id, None);
    }

    #[test]
    fn test_missing_query_is_empty() {
        assert_eq!(ProxyContext::from_query(""), ProxyContext::default());
    }
}
