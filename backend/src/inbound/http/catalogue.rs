//! Filtered catalogue endpoint.
//!
//! ```text
//! GET     /api/catalogue?search=char&types=fire,flying&sort=asc
//! OPTIONS /api/catalogue
//! ```
//!
//! `types` may repeat and each value may hold comma separated tags.

use actix_web::{HttpRequest, HttpResponse, get, options, web};

use crate::domain::{FilterCriteria, ProxyError, SortOrder, TypeSelection};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cors::{preflight_response, with_cors};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::CatalogueResponseSchema;
use crate::inbound::http::state::HttpState;

const INVALID_CRITERIA: &str = "Invalid filter criteria";

/// Parse the catalogue query string into engine criteria.
///
/// Unknown keys are ignored. The last `search` and `sort` win.
///
/// # Errors
///
/// Returns a bad-request [`ProxyError`] when `sort` is not a known directive.
///
/// # Examples
/// ```
/// use pokedex::domain::SortOrder;
/// use pokedex::inbound::http::catalogue::criteria_from_query;
///
/// let criteria = criteria_from_query("types=fire&types=water,grass&sort=DESC").unwrap();
/// assert_eq!(criteria.selected_types, ["fire", "water", "grass"]);
/// assert_eq!(criteria.sort_order, SortOrder::Descending);
/// ```
pub fn criteria_from_query(query: &str) -> Result<FilterCriteria, ProxyError> {
    let mut search = String::new();
    let mut types = Vec::new();
    let mut sort = SortOrder::default();

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "search" => search = value.into_owned(),
            "types" => types.push(value.into_owned()),
            "sort" => {
                sort = value.parse::<SortOrder>().map_err(|err| {
                    ProxyError::bad_request(INVALID_CRITERIA, err.to_string())
                })?;
            }
            _ => {}
        }
    }

    Ok(FilterCriteria::default()
        .with_types(TypeSelection::Many(types).into_types())
        .with_search_term(search)
        .with_sort_order(sort))
}

/// Search the catalogue by name, type and ordering.
#[utoipa::path(
    get,
    path = "/api/catalogue",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive name substring"),
        ("types" = Option<String>, Query, description = "Type tags; repeat or comma separate"),
        ("sort" = Option<String>, Query, description = "asc, desc or none")
    ),
    responses(
        (status = 200, description = "Filtered listing", body = CatalogueResponseSchema),
        (status = 400, description = "Invalid sort directive", body = ErrorBody),
        (status = 500, description = "Upstream unreachable or failing", body = ErrorBody)
    ),
    tags = ["catalogue"],
    operation_id = "searchCatalogue"
)]
#[get("/catalogue")]
pub async fn search_catalogue(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    let criteria = criteria_from_query(request.query_string())?;
    let listing = state.catalogue.search(&criteria).await?;
    Ok(with_cors(&mut HttpResponse::Ok()).json(listing))
}

/// CORS preflight for the catalogue.
#[utoipa::path(
    options,
    path = "/api/catalogue",
    responses((status = 200, description = "Empty preflight reply with CORS headers")),
    tags = ["catalogue"],
    operation_id = "preflightCatalogue"
)]
#[options("/catalogue")]
pub async fn catalogue_preflight() -> HttpResponse {
    preflight_response()
}
