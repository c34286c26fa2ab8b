/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::ws::api::ApiClient;
use crate::ws::categories::*;
use crate::ws::errors::PiwigoError;
use crate::ws::images::*;
use crate::ws::methods::Method;
use crate::ws::properties::{MultiValueMode, SingleValueMode};
use crate::ws::session::{LoginParams, SessionStatus};
use crate::ws::sort::order_token;
use crate::ws::tags::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Client for interacting with the Piwigo web service.
///
/// Cloning is cheap and clones share the underlying transport, so one
/// login serves every clone.
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
}

impl Client {
    /// Creates a new Client for the gallery at `host`.
    ///
    /// `host` is the gallery address without the web-service path, e.g.
    /// `https://gallery.example.com` or `https://example.com/piwigo`.
    pub fn new(host: &str) -> Result<Self, PiwigoError> {
        Ok(Self {
            api_client: Arc::new(ApiClient::new(host)?),
        })
    }

    /// Creates a Client for a different gallery address reusing this
    /// one's transport.
    pub fn with_host(&self, host: &str) -> Result<Self, PiwigoError> {
        Ok(Self {
            api_client: Arc::new(self.api_client.with_host(host)?),
        })
    }

    /// Address of the gallery this client talks to.
    pub fn host(&self) -> &str {
        self.api_client.host()
    }

    /// Opens a session via `pwg.session.login`.
    ///
    /// The session cookie the server answers with is retained by the
    /// client and sent on every later call, so this needs to be done
    /// once before any operation that requires permissions.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), PiwigoError> {
        self.api_client
            .send::<bool, _>(Method::SessionLogin, &LoginParams { username, password })
            .await?;
        Ok(())
    }

    /// Closes the session via `pwg.session.logout`.
    pub async fn logout(&self) -> Result<(), PiwigoError> {
        self.api_client
            .send::<bool, _>(Method::SessionLogout, &())
            .await?;
        Ok(())
    }

    /// Retrieves information about the current session via
    /// `pwg.session.getStatus`. Works for anonymous sessions too.
    pub async fn session_status(&self) -> Result<SessionStatus, PiwigoError> {
        self.api_client
            .send::<SessionStatus, _>(Method::SessionGetStatus, &())
            .await?
            .ok_or(PiwigoError::ResponseMissing())
    }

    /// Retrieves the server version via `pwg.getVersion`.
    pub async fn version(&self) -> Result<String, PiwigoError> {
        self.api_client
            .send::<String, _>(Method::GetVersion, &())
            .await?
            .ok_or(PiwigoError::ResponseMissing())
    }

    /// Lists the method names the server exposes via
    /// `reflection.getMethodList`.
    pub async fn available_methods(&self) -> Result<Vec<String>, PiwigoError> {
        let resp = self
            .api_client
            .send::<MethodsResponse, _>(Method::ReflectionGetMethodList, &())
            .await?
            .ok_or(PiwigoError::ResponseMissing())?;
        Ok(resp.methods)
    }

    /// Lists tags via `pwg.tags.getList`.
    pub async fn tags(&self, sort_by_counter: bool) -> Result<Vec<Tag>, PiwigoError> {
        let resp = self
            .api_client
            .send::<TagsResponse, _>(Method::TagsGetList, &TagsParams { sort_by_counter })
            .await?
            .ok_or(PiwigoError::ResponseMissing())?;
        Ok(resp.tags)
    }

    /// Creates a tag via `pwg.tags.add`. Requires an admin session.
    pub async fn add_tag(&self, name: &str) -> Result<AddedTag, PiwigoError> {
        self.api_client
            .send::<AddedTag, _>(Method::TagsAdd, &AddTagParams { name })
            .await?
            .ok_or(PiwigoError::ResponseMissing())
    }

    /// Lists images carrying the given tags via `pwg.tags.getImages`.
    ///
    /// With `match_all_tags` an image has to carry every tag in
    /// `tag_ids` instead of any of them. `untagged_only` flips the query
    /// to images with no tags at all.
    pub async fn tag_images(
        &self,
        tag_ids: &[u64],
        match_all_tags: bool,
        untagged_only: bool,
        props: &ListingProps,
    ) -> Result<ImageList, PiwigoError> {
        let params = TagImagesParams {
            tag_id: tag_ids.to_vec(),
            tag_mode_and: match_all_tags,
            untagged_only,
            per_page: props.per_page,
            page: props.page,
            order: order_token(props.order.as_deref()),
        };
        self.api_client
            .send::<ImageList, _>(Method::TagsGetImages, &params)
            .await?
            .ok_or(PiwigoError::ResponseMissing())
    }

    /// Lists albums via `pwg.categories.getList`.
    ///
    /// With `parent` given, lists the sub-albums of that album, else the
    /// root albums.
    pub async fn categories(
        &self,
        parent: Option<u64>,
        props: &CategoryListProps,
    ) -> Result<Vec<Category>, PiwigoError> {
        let params = CategoriesParams {
            cat_id: parent,
            props: props.clone(),
        };
        let resp = self
            .api_client
            .send::<CategoriesResponse, _>(Method::CategoriesGetList, &params)
            .await?
            .ok_or(PiwigoError::ResponseMissing())?;
        Ok(resp.categories)
    }

    /// Lists the images of an album via `pwg.categories.getImages`.
    ///
    /// With `category` absent, lists across all albums the session may
    /// see. `recursive` includes images of sub-albums.
    pub async fn category_images(
        &self,
        category: Option<u64>,
        recursive: bool,
        props: &ListingProps,
    ) -> Result<ImageList, PiwigoError> {
        let params = CategoryImagesParams {
            cat_id: category,
            recursive,
            per_page: props.per_page,
            page: props.page,
            order: order_token(props.order.as_deref()),
        };
        self.api_client
            .send::<ImageList, _>(Method::CategoriesGetImages, &params)
            .await?
            .ok_or(PiwigoError::ResponseMissing())
    }

    /// Lists the current user's favorites via
    /// `pwg.users.favorites.getList`.
    pub async fn favorite_images(&self, props: &ListingProps) -> Result<ImageList, PiwigoError> {
        let params = FavoritesParams {
            per_page: props.per_page,
            page: props.page,
            order: order_token(props.order.as_deref()),
        };
        self.api_client
            .send::<ImageList, _>(Method::UsersFavoritesGetList, &params)
            .await?
            .ok_or(PiwigoError::ResponseMissing())
    }

    /// Adds an image to the current user's favorites via
    /// `pwg.users.favorites.add`.
    pub async fn add_favorite(&self, image_id: u64) -> Result<(), PiwigoError> {
        self.api_client
            .send::<bool, _>(Method::UsersFavoritesAdd, &ImageIdParams { image_id })
            .await?;
        Ok(())
    }

    /// Removes an image from the current user's favorites via
    /// `pwg.users.favorites.remove`.
    pub async fn remove_favorite(&self, image_id: u64) -> Result<(), PiwigoError> {
        self.api_client
            .send::<bool, _>(Method::UsersFavoritesRemove, &ImageIdParams { image_id })
            .await?;
        Ok(())
    }

    /// Retrieves full details for one image via `pwg.images.getInfo`.
    pub async fn image_info(&self, image_id: u64) -> Result<ImageInfo, PiwigoError> {
        self.api_client
            .send::<ImageInfo, _>(Method::ImagesGetInfo, &ImageIdParams { image_id })
            .await?
            .ok_or(PiwigoError::ResponseMissing())
    }

    /// Updates image metadata via `pwg.images.setInfo`.
    ///
    /// `single_value_mode` decides what happens to fields that hold one
    /// value (name, author, ...) when the image already has one;
    /// `multiple_value_mode` does the same for the multi-valued fields
    /// (tags, albums).
    pub async fn set_image_info(
        &self,
        image_id: u64,
        props: &ImageInfoProps,
        single_value_mode: SingleValueMode,
        multiple_value_mode: MultiValueMode,
    ) -> Result<(), PiwigoError> {
        let params = SetImageInfoParams {
            image_id,
            props,
            single_value_mode,
            multiple_value_mode,
        };
        self.api_client
            .send::<serde_json::Value, _>(Method::ImagesSetInfo, &params)
            .await?;
        Ok(())
    }

    /// Rates an image via `pwg.images.rate`. `rate` is expected to be
    /// within the server's configured range, 0 to 5 out of the box.
    pub async fn set_image_rating(
        &self,
        image_id: u64,
        rate: u8,
    ) -> Result<RatingResult, PiwigoError> {
        self.api_client
            .send::<RatingResult, _>(Method::ImagesRate, &RateParams { image_id, rate })
            .await?
            .ok_or(PiwigoError::ResponseMissing())
    }

    /// Searches images by words via `pwg.images.search`.
    pub async fn search_images(
        &self,
        query: &str,
        props: &ListingProps,
    ) -> Result<ImageList, PiwigoError> {
        let params = SearchParams {
            query,
            per_page: props.per_page,
            page: props.page,
            order: order_token(props.order.as_deref()),
        };
        self.api_client
            .send::<ImageList, _>(Method::ImagesSearch, &params)
            .await?
            .ok_or(PiwigoError::ResponseMissing())
    }

    /// Issues any [`Method`] with caller supplied parameters and decodes
    /// the `result` payload into `T`.
    ///
    /// This is the escape hatch for the methods without a typed wrapper,
    /// and for response shapes the wrappers do not surface (e.g. the
    /// nested form of `pwg.categories.getList` with `tree_output`).
    ///
    /// # Example
    /// ```no_run
    /// # use piwigo::ws::{Client, Method, PiwigoError};
    /// # async fn pwg_token(client: &Client) -> Result<String, PiwigoError> {
    /// let status: serde_json::Value = client
    ///     .send(Method::SessionGetStatus, &())
    ///     .await?
    ///     .ok_or(PiwigoError::ResponseMissing())?;
    /// Ok(status["pwg_token"].as_str().unwrap_or_default().to_string())
    /// # }
    /// ```
    pub async fn send<T, P>(&self, method: Method, params: &P) -> Result<Option<T>, PiwigoError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.api_client.send(method, params).await
    }
}

// Reflection query response
#[derive(serde::Deserialize, Debug)]
struct MethodsResponse {
    methods: Vec<String>,
}
