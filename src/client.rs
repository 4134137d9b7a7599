//! Client facade
//!
//! [`BggClient`] is the caller's entry point: one method per endpoint, each
//! returning a [`RequestBuilder`] whose record type is fixed by the
//! endpoint. Nothing touches the network until the builder is called.
//!
//! ```no_run
//! # async fn demo() -> bgg_client::Result<()> {
//! use bgg_client::{BggClient, ClientConfig};
//! use bgg_client::request::UserOptions;
//! use bgg_client::types::Inclusion;
//!
//! let client = BggClient::new(ClientConfig::default())?;
//! let options = UserOptions {
//!     buddies: Some(Inclusion::Include),
//!     ..Default::default()
//! };
//! let response = client.user("alice", options)?.paginate()?.call().await?;
//! if let Some(user) = response.data() {
//!     println!("{} has {} buddies", user.name, user.buddies.as_ref().map_or(0, |b| b.buddies.len()));
//! }
//! # Ok(())
//! # }
//! ```

use crate::config::ClientConfig;
use crate::engine::{
    run_paginated, run_single, CallHandle, CallbackFailure, Engine, Runner, StatsSnapshot,
};
use crate::error::{Error, Result};
use crate::mapper::FromXml;
use crate::model::{
    Collection, Family, Forum, ForumList, GeekList, Guild, HotList, Plays, SearchResults,
    Sitemap, SitemapIndex, SitemapUrl, Thing, Things, Thread, User,
};
use crate::pagination::Paginated;
use crate::request::{
    CollectionOptions, GuildOptions, PaginationMode, PlaysOptions, Request, SearchOptions,
    ThingOptions, ThreadOptions, UserOptions,
};
use crate::response::{Response, ResponseError};
use crate::transport::{HttpTransport, Transport};
use crate::types::{FamilyType, ForumListType, HotListType, Inclusion, SitemapLocationType};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

// ============================================================================
// Request Builder
// ============================================================================

/// A request bound to an engine, ready to be submitted
pub struct RequestBuilder<T> {
    engine: Engine,
    request: Request,
    runner: Runner<T>,
}

impl<T> fmt::Debug for RequestBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

impl<T: FromXml + Send + 'static> RequestBuilder<T> {
    fn new(engine: Engine, request: Request) -> Self {
        Self {
            engine,
            request,
            runner: run_single::<T>,
        }
    }

    /// The request that will be submitted
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Submit the call; the returned handle resolves to its response
    pub fn call_async(self) -> CallHandle<T> {
        self.engine.submit(self.request, self.runner, None)
    }

    /// Submit the call and invoke `on_complete` once it resolves.
    ///
    /// A callback error or panic does not change the response; it is logged
    /// and recorded on the engine (see [`BggClient::callback_failures`]).
    pub fn call_async_with<F>(self, on_complete: F) -> CallHandle<T>
    where
        F: FnOnce(&Response<T>) -> anyhow::Result<()> + Send + 'static,
    {
        self.engine
            .submit(self.request, self.runner, Some(Box::new(on_complete)))
    }

    /// Submit the call and wait for it
    pub async fn call(self) -> Result<Response<T>> {
        self.call_async().await
    }
}

impl<T: FromXml + Paginated + Send + 'static> RequestBuilder<T> {
    /// Fetch every page
    pub fn paginate(self) -> Result<Self> {
        self.with_pagination(PaginationMode::Exhaustive)
    }

    /// Fetch at most `pages` pages, the first one included
    pub fn paginate_pages(self, pages: u32) -> Result<Self> {
        if pages == 0 {
            return Err(Error::construction("page limit must be at least 1"));
        }
        self.with_pagination(PaginationMode::Pages(pages))
    }

    fn with_pagination(mut self, mode: PaginationMode) -> Result<Self> {
        self.request.check_paginable()?;
        self.request = self.request.with_pagination(mode);
        self.runner = run_paginated::<T>;
        Ok(self)
    }
}

// ============================================================================
// Client
// ============================================================================

/// Client for the BoardGameGeek XML API
#[derive(Debug, Clone)]
pub struct BggClient {
    engine: Engine,
}

impl BggClient {
    /// Create a client talking HTTP
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::from_config(&config.http)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over any transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            engine: Engine::new(transport, config),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn config(&self) -> &ClientConfig {
        self.engine.config()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.engine.stats()
    }

    /// Completion callbacks that failed so far
    pub fn callback_failures(&self) -> Vec<CallbackFailure> {
        self.engine.callback_failures()
    }

    fn builder<T: FromXml + Send + 'static>(&self, request: Request) -> RequestBuilder<T> {
        RequestBuilder::new(self.engine.clone(), request)
    }

    // ------------------------------------------------------------------------
    // Endpoints
    // ------------------------------------------------------------------------

    /// Batch lookup of things by id
    pub fn things(&self, ids: &[u64], options: ThingOptions) -> Result<RequestBuilder<Things>> {
        Ok(self.builder(Request::things(ids, options)?))
    }

    pub fn collection(
        &self,
        username: &str,
        options: CollectionOptions,
    ) -> Result<RequestBuilder<Collection>> {
        Ok(self.builder(Request::collection(username, options)?))
    }

    pub fn user(&self, name: &str, options: UserOptions) -> Result<RequestBuilder<User>> {
        Ok(self.builder(Request::user(name, options)?))
    }

    pub fn forum(&self, id: u64, page: Option<u32>) -> Result<RequestBuilder<Forum>> {
        Ok(self.builder(Request::forum(id, page)?))
    }

    pub fn forum_list(
        &self,
        id: u64,
        list_type: ForumListType,
    ) -> Result<RequestBuilder<ForumList>> {
        Ok(self.builder(Request::forum_list(id, list_type)?))
    }

    pub fn thread(&self, id: u64, options: ThreadOptions) -> Result<RequestBuilder<Thread>> {
        Ok(self.builder(Request::thread(id, options)?))
    }

    pub fn geeklist(
        &self,
        id: u64,
        comments: Option<Inclusion>,
    ) -> Result<RequestBuilder<GeekList>> {
        Ok(self.builder(Request::geeklist(id, comments)?))
    }

    pub fn guild(&self, id: u64, options: GuildOptions) -> Result<RequestBuilder<Guild>> {
        Ok(self.builder(Request::guild(id, options)?))
    }

    pub fn hot(&self, list_type: Option<HotListType>) -> Result<RequestBuilder<HotList>> {
        Ok(self.builder(Request::hot(list_type)?))
    }

    pub fn search(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<RequestBuilder<SearchResults>> {
        Ok(self.builder(Request::search(query, options)?))
    }

    pub fn sitemap_index(&self) -> Result<RequestBuilder<SitemapIndex>> {
        Ok(self.builder(Request::sitemap_index()?))
    }

    /// One sitemap page, by its absolute location
    pub fn sitemap(&self, location: &str) -> Result<RequestBuilder<Sitemap>> {
        Ok(self.builder(Request::sitemap(location)?))
    }

    pub fn plays(&self, username: &str, options: PlaysOptions) -> Result<RequestBuilder<Plays>> {
        Ok(self.builder(Request::plays(username, options)?))
    }

    pub fn family(&self, ids: &[u64], types: &[FamilyType]) -> Result<RequestBuilder<Family>> {
        Ok(self.builder(Request::family(ids, types)?))
    }

    /// Single thing lookup, unwrapped from the batch result
    pub async fn thing(&self, id: u64, options: ThingOptions) -> Result<Response<Option<Thing>>> {
        let response = self.things(&[id], options)?.call().await?;
        Ok(response.map(|things| things.things.into_iter().find(|t| t.id == id)))
    }

    // ------------------------------------------------------------------------
    // Sitemap Diffusion
    // ------------------------------------------------------------------------

    /// Fetch the sitemap index, then every sitemap of the given types, one
    /// after another. Every requested type is present in the result, empty
    /// when the index lists no location for it.
    ///
    /// An empty `types` slice fetches every sitemap the index lists, keyed
    /// by the type derived from its location. On the live site that is
    /// several hundred requests.
    pub async fn diffuse_sitemap(
        &self,
        types: &[SitemapLocationType],
    ) -> Response<BTreeMap<SitemapLocationType, Vec<SitemapUrl>>> {
        let index_request = match Request::sitemap_index() {
            Ok(request) => request,
            Err(e) => return Response::Error(ResponseError::from(e)),
        };
        let index = match self.engine.execute::<SitemapIndex>(&index_request).await {
            Response::Success(index) => index,
            Response::Error(err) => return Response::Error(err),
        };

        let mut diffused: BTreeMap<SitemapLocationType, Vec<SitemapUrl>> =
            types.iter().map(|t| (*t, Vec::new())).collect();

        for location in index.locations_of(types) {
            debug!(location = %location.location, kind = ?location.location_type, "Fetching sitemap");
            let request = match Request::sitemap(&location.location) {
                Ok(request) => request,
                Err(e) => return Response::Error(ResponseError::from(e)),
            };
            match self.engine.execute::<Sitemap>(&request).await {
                Response::Success(sitemap) => diffused
                    .entry(location.location_type)
                    .or_default()
                    .extend(sitemap.urls),
                Response::Error(err) => return Response::Error(err),
            }
        }

        info!(
            types = types.len(),
            urls = diffused.values().map(Vec::len).sum::<usize>(),
            "Sitemap diffusion complete"
        );
        Response::Success(diffused)
    }
}
