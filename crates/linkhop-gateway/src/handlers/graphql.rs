use crate::state::AppState;
use async_graphql::http::{parse_query_string, GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::debug;
use url::form_urlencoded;

pub const GRAPHQL_PATH: &str = "/graphql";

/// Executes a GraphQL request sent as a POST body.
pub async fn graphql_handler(
    State(state): State<AppState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state.schema().execute(request.into_inner()).await.into()
}

/// Serves GraphiQL, or executes the request when the query string carries
/// a `query` parameter.
pub async fn graphql_explorer_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    let has_query_param =
        |q: &String| form_urlencoded::parse(q.as_bytes()).any(|(key, _)| key == "query");
    let Some(query) = query.filter(has_query_param) else {
        return Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response();
    };

    match parse_query_string(&query) {
        Ok(request) => GraphQLResponse::from(state.schema().execute(request).await).into_response(),
        Err(e) => {
            debug!(error = %e, "malformed GraphQL GET request");
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
