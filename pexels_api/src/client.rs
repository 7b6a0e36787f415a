//! HTTP client for the Pexels API.

use std::sync::{PoisonError, RwLock};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Method;
use url::Url;

use crate::{
    payload::Payload,
    query::{
        CollectionMediaParams, CollectionParams, CuratedPhotosParams, PhotoSearchParams,
        PopularVideoParams, Query, VideoSearchParams,
    },
    response::{
        CollectionsResponse, MediaResponse, PhotoResponse, PhotosResponse, Response,
        ResponseCommon, VideoResponse, VideosResponse,
    },
    transport::{ReqwestTransport, Request, Transport},
    types::{
        CollectionPayload, MediaPayload, Photo, PhotoID, PhotoPayload, Video, VideoID,
        VideoPayload,
    },
    Error,
};

/// Root for photo and collection endpoints.
pub const PHOTO_BASE_URL: &str = "https://api.pexels.com/v1";
/// Root for video endpoints. Video paths carry their own `/videos` prefix.
pub const VIDEO_BASE_URL: &str = "https://api.pexels.com";

/// Logical paths starting with this prefix are served from the video root.
const VIDEO_PREFIX: &str = "/videos";

const PHOTO_ENDPOINT: &str = "/photos";
const SEARCH_PHOTOS_ENDPOINT: &str = "/search";
const CURATED_PHOTOS_ENDPOINT: &str = "/curated";
const VIDEO_ENDPOINT: &str = "/videos/videos";
const SEARCH_VIDEOS_ENDPOINT: &str = "/videos/search";
const POPULAR_VIDEOS_ENDPOINT: &str = "/videos/popular";
const COLLECTIONS_ENDPOINT: &str = "/collections";
const FEATURED_COLLECTIONS_ENDPOINT: &str = "/collections/featured";

/// Client configuration. Built through [`ClientBuilder`].
#[derive(Debug, Clone)]
struct Options {
    api_key: String,
    user_agent: Option<String>,
    photo_base_url: String,
    video_base_url: String,
}

/// Configures and validates a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    options: Options,
}

impl ClientBuilder {
    pub fn new(api_key: &str) -> Self {
        Self {
            options: Options {
                api_key: api_key.to_string(),
                user_agent: None,
                photo_base_url: PHOTO_BASE_URL.to_string(),
                video_base_url: VIDEO_BASE_URL.to_string(),
            },
        }
    }

    /// Sends a `User-Agent` header with every request.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.options.user_agent = Some(user_agent.to_string());
        self
    }

    /// Overrides the photo and collection root. Used for testing with wiremock.
    pub fn photo_base_url(mut self, url: &str) -> Self {
        self.options.photo_base_url = url.to_string();
        self
    }

    /// Overrides the video root. Used for testing with wiremock.
    pub fn video_base_url(mut self, url: &str) -> Self {
        self.options.video_base_url = url.to_string();
        self
    }

    /// Builds a client using the default reqwest transport.
    pub fn build(self) -> Result<Client, Error> {
        self.validate()?;
        let transport = ReqwestTransport::new()?;
        self.finish(transport)
    }

    /// Builds a client that sends every request through `transport`.
    pub fn build_with<T: Transport>(self, transport: T) -> Result<Client<T>, Error> {
        self.validate()?;
        self.finish(transport)
    }

    fn validate(&self) -> Result<(), Error> {
        let options = &self.options;
        if options.api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }
        header_value("authorization", &options.api_key)?;
        if let Some(user_agent) = &options.user_agent {
            header_value("user-agent", user_agent)?;
        }
        for url in [&options.photo_base_url, &options.video_base_url] {
            Url::parse(url).map_err(|source| Error::InvalidBaseUrl {
                url: url.clone(),
                source,
            })?;
        }
        Ok(())
    }

    fn finish<T: Transport>(self, transport: T) -> Result<Client<T>, Error> {
        let mut options = self.options;
        for url in [&mut options.photo_base_url, &mut options.video_base_url] {
            let trimmed = url.trim_end_matches('/').len();
            url.truncate(trimmed);
        }
        Ok(Client {
            options: RwLock::new(options),
            transport,
        })
    }
}

/// HTTP client for the Pexels API.
///
/// Every operation builds one GET request, sends it through the configured
/// [`Transport`] and decodes the body. Nothing is retried, cached or
/// throttled. A client can be shared between tasks.
pub struct Client<T = ReqwestTransport> {
    options: RwLock<Options>,
    transport: T,
}

impl Client {
    /// Creates a client for the production API with the default transport.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        ClientBuilder::new(api_key).build()
    }

    pub fn builder(api_key: &str) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }
}

impl<T: Transport> Client<T> {
    /// Replaces the `User-Agent` sent with subsequent requests.
    pub fn set_user_agent(&self, user_agent: &str) -> Result<(), Error> {
        header_value("user-agent", user_agent)?;
        let mut options = self.options.write().unwrap_or_else(PoisonError::into_inner);
        options.user_agent = Some(user_agent.to_string());
        Ok(())
    }

    /// Returns the configured `User-Agent`, if any.
    pub fn user_agent(&self) -> Option<String> {
        self.options
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user_agent
            .clone()
    }

    /// Builds the GET request for `path`, resolving it against the photo or
    /// video root. `segment`, usually a resource id, is appended as one
    /// escaped path segment before the encoded query and headers are attached.
    pub(crate) fn new_request<Q: Query>(
        &self,
        path: &str,
        segment: Option<&str>,
        query: Option<&Q>,
    ) -> Result<Request, Error> {
        let options = self.options.read().unwrap_or_else(PoisonError::into_inner);
        let base = if path.starts_with(VIDEO_PREFIX) {
            &options.video_base_url
        } else {
            &options.photo_base_url
        };
        let raw = format!("{}{}", base, path);
        let mut url = Url::parse(&raw).map_err(|source| {
            tracing::error!("Invalid URL constructed: {}", source);
            Error::InvalidUrl { url: raw, source }
        })?;
        if let Some(segment) = segment {
            push_segment(&mut url, segment)?;
        }
        let url = match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            header_value("authorization", &options.api_key)?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(user_agent) = &options.user_agent {
            headers.insert(USER_AGENT, header_value("user-agent", user_agent)?);
        }

        Ok(Request {
            method: Method::GET,
            url,
            headers,
        })
    }

    async fn get<P, Q>(
        &self,
        path: &str,
        segment: Option<&str>,
        query: Option<&Q>,
    ) -> Result<Response<P>, Error>
    where
        P: Payload,
        Q: Query,
    {
        let request = self.new_request(path, segment, query)?;
        tracing::debug!("GET {}", request.url);

        let resp = self.transport.execute(request).await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::Transport(e)
        })?;

        let common = ResponseCommon::from_transport(&resp);
        tracing::debug!(
            "{} {} (rate limit remaining: {})",
            common.status,
            path,
            common.rate_limit_remaining()
        );

        let data = P::decode(&resp.body).map_err(|e| {
            tracing::error!(
                "Failed to parse resource: {} | body: {}",
                e,
                truncate_body(&resp.body)
            );
            e
        })?;

        Ok(Response { common, data })
    }

    /// Fetches a single photo by the ID found at the end of its URL.
    ///
    /// A missing photo is not an error: check `common.status_code`.
    pub async fn get_photo(&self, photo_id: PhotoID) -> Result<PhotoResponse, Error> {
        let resp = self
            .get::<Photo, CuratedPhotosParams>(
                PHOTO_ENDPOINT,
                Some(photo_id.to_string().as_str()),
                None,
            )
            .await?;
        let mut out = PhotoResponse::default();
        resp.copy_common(&mut out.common);
        out.photo = resp.data;
        Ok(out)
    }

    /// Searches photos. Fails with [`Error::MissingQuery`] before any request
    /// is made if the query is empty.
    pub async fn search_photos(&self, params: &PhotoSearchParams) -> Result<PhotosResponse, Error> {
        if params.query.is_empty() {
            return Err(Error::MissingQuery);
        }
        let resp = self
            .get::<PhotoPayload, PhotoSearchParams>(
                SEARCH_PHOTOS_ENDPOINT,
                None,
                Some(params),
            )
            .await?;
        Ok(photos_response(resp))
    }

    /// Fetches the curated photos feed. Default params return the first page
    /// of 15.
    pub async fn get_curated_photos(
        &self,
        params: &CuratedPhotosParams,
    ) -> Result<PhotosResponse, Error> {
        let resp = self
            .get::<PhotoPayload, CuratedPhotosParams>(
                CURATED_PHOTOS_ENDPOINT,
                None,
                Some(params),
            )
            .await?;
        Ok(photos_response(resp))
    }

    /// Fetches a single video by ID.
    ///
    /// A missing video is not an error: check `common.status_code`.
    pub async fn get_video(&self, video_id: VideoID) -> Result<VideoResponse, Error> {
        let resp = self
            .get::<Video, PopularVideoParams>(
                VIDEO_ENDPOINT,
                Some(video_id.to_string().as_str()),
                None,
            )
            .await?;
        let mut out = VideoResponse::default();
        resp.copy_common(&mut out.common);
        out.video = resp.data;
        Ok(out)
    }

    /// Searches videos. Fails with [`Error::MissingQuery`] before any request
    /// is made if the query is empty.
    pub async fn search_videos(&self, params: &VideoSearchParams) -> Result<VideosResponse, Error> {
        if params.query.is_empty() {
            return Err(Error::MissingQuery);
        }
        let resp = self
            .get::<VideoPayload, VideoSearchParams>(
                SEARCH_VIDEOS_ENDPOINT,
                None,
                Some(params),
            )
            .await?;
        Ok(videos_response(resp))
    }

    /// Fetches the currently popular videos.
    pub async fn get_popular_videos(
        &self,
        params: &PopularVideoParams,
    ) -> Result<VideosResponse, Error> {
        let resp = self
            .get::<VideoPayload, PopularVideoParams>(
                POPULAR_VIDEOS_ENDPOINT,
                None,
                Some(params),
            )
            .await?;
        Ok(videos_response(resp))
    }

    /// Fetches the media of one collection, split into photos and videos.
    pub async fn get_collection(
        &self,
        params: &CollectionMediaParams,
    ) -> Result<MediaResponse, Error> {
        if params.id.is_empty() {
            return Err(Error::MissingCollectionId);
        }
        let resp = self
            .get::<MediaPayload, CollectionMediaParams>(
                COLLECTIONS_ENDPOINT,
                Some(params.id.as_str()),
                Some(params),
            )
            .await?;
        Ok(MediaResponse::from(resp))
    }

    /// Fetches the collections owned by the API key's account.
    pub async fn get_collections(
        &self,
        params: &CollectionParams,
    ) -> Result<CollectionsResponse, Error> {
        self.collections(COLLECTIONS_ENDPOINT, params).await
    }

    /// Fetches the collections featured by Pexels.
    pub async fn get_featured_collections(
        &self,
        params: &CollectionParams,
    ) -> Result<CollectionsResponse, Error> {
        self.collections(FEATURED_COLLECTIONS_ENDPOINT, params).await
    }

    async fn collections(
        &self,
        path: &str,
        params: &CollectionParams,
    ) -> Result<CollectionsResponse, Error> {
        let resp = self
            .get::<CollectionPayload, CollectionParams>(
                path,
                None,
                Some(params),
            )
            .await?;
        let mut out = CollectionsResponse::default();
        resp.copy_common(&mut out.common);
        out.payload = resp.data;
        Ok(out)
    }
}

fn photos_response(resp: Response<PhotoPayload>) -> PhotosResponse {
    let mut out = PhotosResponse::default();
    resp.copy_common(&mut out.common);
    out.payload = resp.data;
    out
}

fn videos_response(resp: Response<VideoPayload>) -> VideosResponse {
    let mut out = VideosResponse::default();
    resp.copy_common(&mut out.common);
    out.payload = resp.data;
    out
}

/// Appends `segment` as a single escaped path segment.
fn push_segment(url: &mut Url, segment: &str) -> Result<(), Error> {
    // `.` and `..` would be dropped rather than escaped.
    if segment == "." || segment == ".." {
        return Err(Error::InvalidPathSegment(segment.to_string()));
    }
    url.path_segments_mut()
        .map_err(|_| Error::InvalidPathSegment(segment.to_string()))?
        .push(segment);
    Ok(())
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader { name })
}

fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 2000;
    let body = String::from_utf8_lossy(body);
    match body.char_indices().nth(MAX) {
        None => body.into_owned(),
        Some((cut, _)) => format!("{}...[truncated]", &body[..cut]),
    }
}
