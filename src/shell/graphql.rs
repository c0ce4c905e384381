use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::scheduling::use_cases::create_event::inbound::graphql::CreateEventMutation;
use crate::modules::scheduling::use_cases::decide_date::inbound::graphql::DecideDateMutation;
use crate::modules::scheduling::use_cases::delete_event::inbound::graphql::DeleteEventMutation;
use crate::modules::scheduling::use_cases::list_recent_events::inbound::graphql::RecentEventsQuery;
use crate::modules::scheduling::use_cases::submit_availability::inbound::graphql::SubmitAvailabilityMutation;
use crate::modules::scheduling::use_cases::view_event::inbound::graphql::EventQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(EventQuery, RecentEventsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CreateEventMutation,
    SubmitAvailabilityMutation,
    DecideDateMutation,
    DeleteEventMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
