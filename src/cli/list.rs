//! The `list` command.

use crate::api::{ApiClient, ListQuery, PaginatedList};
use crate::config::ApiConfig;
use crate::error::DashResult;
use crate::models::{CourseRegistration, Project, Resource, ResourceKind, Score, Task};
use crate::pagination::PaginationState;
use crate::traits::{CredentialsProvider, HttpClient};

use super::args::ListArgs;
use super::output::format_listing;

/// Fetch the requested page and render it as text.
pub async fn render_list<C, P>(
    client: &ApiClient<C, P>,
    config: &ApiConfig,
    args: &ListArgs,
) -> DashResult<String>
where
    C: HttpClient,
    P: CredentialsProvider,
{
    match args.resource {
        ResourceKind::Projects => render_page::<Project, C, P>(client, config, args).await,
        ResourceKind::Tasks => render_page::<Task, C, P>(client, config, args).await,
        ResourceKind::Scores => render_page::<Score, C, P>(client, config, args).await,
        ResourceKind::Registrations => {
            render_page::<CourseRegistration, C, P>(client, config, args).await
        }
    }
}

async fn render_page<R, C, P>(
    client: &ApiClient<C, P>,
    config: &ApiConfig,
    args: &ListArgs,
) -> DashResult<String>
where
    R: Resource,
    C: HttpClient,
    P: CredentialsProvider,
{
    let page_size = args
        .page_size
        .unwrap_or_else(|| i64::try_from(config.default_page_size).unwrap_or(i64::MAX));

    let query = ListQuery::for_resource::<R>()
        .with_filters(args.filters.clone())
        .with_params(config.page_params.clone());
    let mut list = PaginatedList::<R>::new(query, PaginationState::new(args.page, page_size));

    let view = list.refresh(client).await?;
    Ok(format_listing(
        R::NAME,
        list.items().iter().map(Resource::summary),
        &view,
    ))
}
