//! Item request service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{item::ItemRepository, item_request::ItemRequestRepository},
    error::AppError,
    model::request::{CreateItemRequestParams, ItemRequest},
    service::user::UserService,
    util::{pagination::Page, time::now, validation::require_non_blank},
};

pub struct ItemRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a request for an item nobody lists yet
    ///
    /// # Returns
    /// - `Ok(ItemRequest)` - The request, with no items yet
    /// - `Err(AppError::Validation)` - Description missing or blank
    /// - `Err(AppError::NotFound)` - Requestor missing
    pub async fn create(&self, params: CreateItemRequestParams) -> Result<ItemRequest, AppError> {
        let description = require_non_blank(params.description, "description")?;

        UserService::new(self.db).get(params.requestor_id).await?;

        let request = ItemRequestRepository::new(self.db)
            .create(params.requestor_id, description, now())
            .await?;

        tracing::info!(
            "User {} posted item request {}",
            request.requestor_id,
            request.id
        );

        Ok(ItemRequest::from_entity(request, Vec::new()))
    }

    /// Gets the caller's own requests, newest first, with the items answering them
    pub async fn get_own(&self, requestor_id: i32) -> Result<Vec<ItemRequest>, AppError> {
        UserService::new(self.db).get(requestor_id).await?;

        let requests = ItemRequestRepository::new(self.db)
            .get_by_requestor(requestor_id)
            .await?;

        self.with_items(requests).await
    }

    /// Gets a page of other users' requests, newest first, with the items answering them
    pub async fn get_others(&self, caller_id: i32, page: Page) -> Result<Vec<ItemRequest>, AppError> {
        UserService::new(self.db).get(caller_id).await?;

        let requests = ItemRequestRepository::new(self.db)
            .get_others_paginated(caller_id, page.page, page.per_page)
            .await?;

        self.with_items(requests).await
    }

    /// Gets any request by id with the items answering it
    pub async fn get(&self, caller_id: i32, request_id: i32) -> Result<ItemRequest, AppError> {
        UserService::new(self.db).get(caller_id).await?;

        let request = ItemRequestRepository::new(self.db)
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Item request with id {} not found", request_id))
            })?;

        let mut requests = self.with_items(vec![request]).await?;

        requests.pop().ok_or_else(|| {
            AppError::InternalError(format!("Item request {} lost while loading", request_id))
        })
    }

    async fn with_items(
        &self,
        requests: Vec<entity::item_request::Model>,
    ) -> Result<Vec<ItemRequest>, AppError> {
        let request_ids: Vec<i32> = requests.iter().map(|r| r.id).collect();

        let mut items = ItemRepository::new(self.db)
            .get_by_request_ids(&request_ids)
            .await?;

        Ok(requests
            .into_iter()
            .map(|request| {
                let request_items = items.remove(&request.id).unwrap_or_default();
                ItemRequest::from_entity(request, request_items)
            })
            .collect())
    }
}
