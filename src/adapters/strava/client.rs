//! Blocking Strava API client

use log::debug;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::StravaError;
use super::dto::{StravaActivity, StravaAthlete, UpdatableActivity};
use crate::adapters::http::api_client;
use crate::core::models::{Activity, Athlete, Gear};
use crate::core::ports::ActivitySource;

/// Strava v3 API root
pub const DEFAULT_API_BASE: &str = "https://www.strava.com/api/v3";

/// Environment variable overriding [`DEFAULT_API_BASE`]
pub const API_BASE_ENV: &str = "STRAVA_API_BASE";

/// Largest page size Strava accepts for activity listings
const MAX_PER_PAGE: usize = 200;

/// API root from the environment, or the public Strava API
#[must_use]
pub fn api_base_url() -> String {
    std::env::var(API_BASE_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Client for the authenticated athlete's data
#[derive(Debug, Clone)]
pub struct StravaClient {
    http: Client,
    base_url: String,
    access_token: String,
}

impl StravaClient {
    /// Create a client against the configured API root
    pub fn new(access_token: impl Into<String>) -> Result<Self, StravaError> {
        Self::with_base_url(api_base_url(), access_token)
    }

    /// Create a client against a specific API root
    pub fn with_base_url(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, StravaError> {
        Ok(Self {
            http: api_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }

    /// API root this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /athlete`, including bikes and shoes
    pub fn get_athlete(&self) -> Result<StravaAthlete, StravaError> {
        self.send(self.http.get(self.url("/athlete")))
    }

    /// `GET /athlete/activities`, paging until `limit` activities are read
    pub fn get_activities(&self, limit: usize) -> Result<Vec<Activity>, StravaError> {
        let per_page = limit.min(MAX_PER_PAGE);
        let mut activities = Vec::with_capacity(limit.min(MAX_PER_PAGE));
        let mut page = 1_usize;

        while activities.len() < limit {
            let batch: Vec<StravaActivity> = self.send(
                self.http
                    .get(self.url("/athlete/activities"))
                    .query(&[("per_page", per_page), ("page", page)]),
            )?;
            debug!("Page {page}: {} activities", batch.len());

            let last_page = batch.len() < per_page;
            activities.extend(batch.into_iter().map(Activity::from));
            if last_page {
                break;
            }
            page += 1;
        }

        activities.truncate(limit);
        Ok(activities)
    }

    /// `GET /activities/{id}`
    pub fn get_activity(&self, activity_id: u64) -> Result<Activity, StravaError> {
        let activity: StravaActivity =
            self.send(self.http.get(self.url(&format!("/activities/{activity_id}"))))?;
        Ok(activity.into())
    }

    /// `PUT /activities/{id}` with a new `gear_id`
    pub fn update_activity_gear(
        &self,
        activity_id: u64,
        gear_id: &str,
    ) -> Result<Activity, StravaError> {
        let activity: StravaActivity = self.send(
            self.http
                .put(self.url(&format!("/activities/{activity_id}")))
                .json(&UpdatableActivity { gear_id }),
        )?;
        Ok(activity.into())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, StravaError> {
        let response = request.bearer_auth(&self.access_token).send()?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url().path());

        if !status.is_success() {
            return Err(StravaError::from_response(response));
        }
        Ok(response.json()?)
    }
}

impl ActivitySource for StravaClient {
    fn athlete(&self) -> anyhow::Result<Athlete> {
        Ok(Athlete::from(&self.get_athlete()?))
    }

    fn activities(&self, limit: usize) -> anyhow::Result<Vec<Activity>> {
        Ok(self.get_activities(limit)?)
    }

    fn gear(&self) -> anyhow::Result<Vec<Gear>> {
        Ok(self.get_athlete()?.gear())
    }

    fn update_activity_gear(&self, activity_id: u64, gear_id: &str) -> anyhow::Result<Activity> {
        Ok(Self::update_activity_gear(self, activity_id, gear_id)?)
    }
}
