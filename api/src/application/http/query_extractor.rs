use axum::{extract::FromRequestParts, http::request::Parts};
use sibra_core::domain::property::value_objects::PropertySearch;
use std::convert::Infallible;

/// Decodes the listing search query string.
///
/// Pairs are kept in order so repeated keys such as `ids` accumulate. Malformed values never
/// reject the request, they only leave their predicate out.
#[derive(Debug, Clone)]
pub struct PropertySearchQuery(pub PropertySearch);

impl<S> FromRequestParts<S> for PropertySearchQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(PropertySearchQuery(PropertySearch::from_pairs(pairs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> PropertySearch {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        let PropertySearchQuery(search) = PropertySearchQuery::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        search
    }

    #[tokio::test]
    async fn test_decodes_filters_and_page() {
        let search =
            extract("/api/propiedades?contract=venta&minPrice=500000&city=Monterrey&page=2&perPage=10")
                .await;

        assert_eq!(search.filter.contract.as_deref(), Some("venta"));
        assert_eq!(search.filter.min_price, Some(500000.0));
        assert_eq!(search.filter.city.as_deref(), Some("Monterrey"));
        assert_eq!(search.page.page, 2);
        assert_eq!(search.page.per_page, 10);
    }

    #[tokio::test]
    async fn test_malformed_values_are_skipped() {
        let search = extract("/api/propiedades?minPrice=abc&beds=tres&featured=quizas&q=").await;

        assert_eq!(search.filter.min_price, None);
        assert_eq!(search.filter.beds, None);
        assert_eq!(search.filter.featured, None);
        assert_eq!(search.filter.text, None);
    }

    #[tokio::test]
    async fn test_percent_encoded_text() {
        let search = extract("/api/propiedades?q=casa%20con%20alberca&nbHood=Del+Valle").await;

        assert_eq!(search.filter.text.as_deref(), Some("casa con alberca"));
        assert_eq!(search.filter.nb_hood.as_deref(), Some("Del Valle"));
    }
}
