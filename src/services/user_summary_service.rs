//! Paginated user listing annotated with per-user post counts.

use std::sync::Arc;

use log::debug;

use crate::errors::ApiError;
use crate::models::{PageRequest, PaginationMetadata, UserPage, UserSummary};
use crate::repositories::{PostStore, UserStore};

pub struct UserSummaryService {
    users: Arc<dyn UserStore>,
    posts: Arc<dyn PostStore>,
}

impl UserSummaryService {
    pub fn new(users: Arc<dyn UserStore>, posts: Arc<dyn PostStore>) -> Self {
        Self { users, posts }
    }

    /// Fetch one page of users with their post counts and pagination metadata.
    ///
    /// The page window and the total count are fetched concurrently. The post
    /// counts need the page's user ids, so they are queried afterwards. Any
    /// store failure fails the whole call.
    pub async fn get_page(&self, request: PageRequest) -> Result<UserPage, ApiError> {
        debug!("Fetching users page={} limit={}", request.page, request.limit);

        let (users, total_docs) = futures::try_join!(
            self.users.find_page(request.skip(), request.limit),
            self.users.count_all(),
        )?;

        let user_ids: Vec<_> = users.iter().map(|u| u.id).collect();
        let post_counts = self.posts.count_grouped_by_owner(&user_ids).await?;

        let summaries = users
            .into_iter()
            .map(|user| {
                let post_count = post_counts.get(&user.id).copied().unwrap_or(0);
                UserSummary::new(user, post_count)
            })
            .collect();

        Ok(UserPage {
            users: summaries,
            pagination: PaginationMetadata::new(total_docs, request),
        })
    }
}
