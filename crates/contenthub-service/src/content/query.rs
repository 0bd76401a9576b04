//! Filter and pagination query builder.
//!
//! Turns listing query parameters into a [`DocumentQuery`] plus skip/limit
//! for one entity. Exact filters compare the stored English-canonical value,
//! so results do not depend on the request locale.

use std::collections::HashMap;

use contenthub_core::error::AppError;
use contenthub_core::result::AppResult;
use contenthub_core::types::{DocumentQuery, PageRequest};
use contenthub_entity::{EntityDescriptor, FilterParam};

use crate::context::RequestContext;

/// Raw listing query parameters.
pub type ListParams = HashMap<String, String>;

/// Page size used when a client paginates an entity that has no default.
pub const FALLBACK_LIMIT: u64 = 20;

/// A listing query ready for the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    /// Predicates beyond the entity's default query.
    pub query: DocumentQuery,
    /// Whether category documents are included in an instance listing.
    pub include_categories: bool,
    /// Requested page, when the listing is paginated.
    pub page: Option<PageRequest>,
}

impl BuiltQuery {
    /// Documents to skip.
    pub fn skip(&self) -> u64 {
        self.page.map(|p| p.skip()).unwrap_or(0)
    }

    /// Maximum number of documents to return.
    pub fn limit(&self) -> Option<u64> {
        self.page.map(|p| p.limit)
    }
}

fn non_empty<'a>(params: &'a ListParams, name: &str) -> Option<&'a str> {
    params
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn parse_bool(params: &ListParams, name: &str) -> AppResult<Option<bool>> {
    match non_empty(params, name) {
        None => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(v) if v.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(_) => Err(AppError::validation(format!("{name} must be true or false"))),
    }
}

fn parse_positive(params: &ListParams, name: &str) -> AppResult<Option<u64>> {
    non_empty(params, name)
        .map(|v| match v.parse::<u64>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(AppError::validation(format!(
                "{name} must be a positive integer"
            ))),
        })
        .transpose()
}

/// Build the listing query for `descriptor`.
///
/// - Public callers only ever see `isActive = true`; admins see everything
///   unless they pass `active`.
/// - Exact filters become equality predicates, search filters become
///   normalized substring predicates; blank values are ignored.
/// - Entities with a default limit are always paginated; others only when
///   `page` or `limit` is given.
pub fn build_query(
    params: &ListParams,
    descriptor: &EntityDescriptor,
    ctx: &RequestContext,
) -> AppResult<BuiltQuery> {
    let mut query = DocumentQuery::all();

    let active = parse_bool(params, "active")?;
    if !ctx.is_admin() {
        query = query.eq("isActive", true);
    } else if let Some(active) = active {
        query = query.eq("isActive", active);
    }

    let include_categories = match descriptor.discriminator.and_then(|d| d.include_param) {
        Some(param) => parse_bool(params, param)?.unwrap_or(false),
        None => false,
    };

    for filter in descriptor.filters {
        let Some(value) = non_empty(params, filter.param()) else {
            continue;
        };
        query = match filter {
            FilterParam::Exact { field, .. } => query.eq(*field, value),
            FilterParam::Search { fields, .. } => query.search(fields, value),
        };
    }

    let page = parse_positive(params, "page")?;
    let limit = parse_positive(params, "limit")?;
    let page = if descriptor.always_paginated() || page.is_some() || limit.is_some() {
        let default_limit = descriptor.default_limit.unwrap_or(FALLBACK_LIMIT);
        Some(PageRequest::new(
            page.unwrap_or(1),
            limit.unwrap_or(default_limit),
        ))
    } else {
        None
    };

    Ok(BuiltQuery {
        query,
        include_categories,
        page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contenthub_core::types::Locale;
    use contenthub_entity::catalog;

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn public() -> RequestContext {
        RequestContext::public(Locale::En)
    }

    fn admin() -> RequestContext {
        RequestContext::admin(Locale::En, "admin")
    }

    #[test]
    fn test_event_defaults() {
        let events = catalog::by_path("events").unwrap();
        let built = build_query(&params(&[]), events, &public()).unwrap();
        assert_eq!(built.page, Some(PageRequest::new(1, 20)));
        assert_eq!(built.skip(), 0);
        assert_eq!(built.query, DocumentQuery::all().eq("isActive", true));
        assert!(!built.include_categories);
    }

    #[test]
    fn test_gallery_page_two() {
        let gallery = catalog::by_path("gallery").unwrap();
        let built = build_query(&params(&[("page", "2")]), gallery, &public()).unwrap();
        assert_eq!(built.limit(), Some(12));
        assert_eq!(built.skip(), 12);
    }

    #[test]
    fn test_unpaginated_unless_requested() {
        let stories = catalog::by_path("stories").unwrap();
        let built = build_query(&params(&[]), stories, &public()).unwrap();
        assert!(built.page.is_none());
        assert_eq!(built.limit(), None);

        let built = build_query(&params(&[("limit", "10"), ("page", "3")]), stories, &public())
            .unwrap();
        assert_eq!(built.skip(), 20);
    }

    #[test]
    fn test_exact_filters_use_english_values() {
        let events = catalog::by_path("events").unwrap();
        let built = build_query(
            &params(&[("type", "Wedding"), ("theme", ""), ("size", "Large")]),
            events,
            &admin(),
        )
        .unwrap();
        assert_eq!(
            built.query,
            DocumentQuery::all().eq("typeEn", "Wedding").eq("sizeEn", "Large")
        );
    }

    #[test]
    fn test_place_search_is_normalized() {
        let events = catalog::by_path("events").unwrap();
        let built = build_query(&params(&[("place", "DAMA  Rose")]), events, &admin()).unwrap();
        assert_eq!(
            built.query,
            DocumentQuery::all().search(&["placeEn", "placeAr"], "damarose")
        );
    }

    #[test]
    fn test_active_param() {
        let stories = catalog::by_path("stories").unwrap();
        let hidden = params(&[("active", "false")]);
        assert_eq!(
            build_query(&hidden, stories, &admin()).unwrap().query,
            DocumentQuery::all().eq("isActive", false)
        );
        assert_eq!(
            build_query(&hidden, stories, &public()).unwrap().query,
            DocumentQuery::all().eq("isActive", true)
        );
        assert!(build_query(&params(&[("active", "maybe")]), stories, &admin()).is_err());
    }

    #[test]
    fn test_include_event_types() {
        let events = catalog::by_path("events").unwrap();
        let built = build_query(&params(&[("includeEventTypes", "true")]), events, &admin())
            .unwrap();
        assert!(built.include_categories);

        let stories = catalog::by_path("stories").unwrap();
        let built = build_query(&params(&[("includeEventTypes", "true")]), stories, &admin())
            .unwrap();
        assert!(!built.include_categories);
    }

    #[test]
    fn test_invalid_page() {
        let events = catalog::by_path("events").unwrap();
        let err = build_query(&params(&[("page", "0")]), events, &public()).unwrap_err();
        assert_eq!(err.message, "page must be a positive integer");
        assert!(build_query(&params(&[("limit", "ten")]), events, &public()).is_err());
    }
}
