// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The reqwest-backed planning data source.

use crate::error::{ClientError, into_api_error};
use planview_api::{
    ApiError, AutoAssignJob, AutoAssignJobDto, AutoAssignStartRequest, CollaboratorDto,
    ListResponse, PlanningDataSource, PlanningShiftDto, ShiftInstanceQuery, SiteDto,
    collaborator_from_dto, planning_shift_from_dto, site_from_dto,
};
use planview_domain::{Collaborator, PlanningShift, Site};
use reqwest::{Client, header};

/// An HTTP [`PlanningDataSource`] talking to the planning backend.
#[derive(Debug, Clone)]
pub struct PlanningApiClient {
    client: Client,
    base_url: String,
}

impl PlanningApiClient {
    /// Builds a client against a base URL such as `https://api.example.com`.
    ///
    /// A trailing slash on the base URL is stripped; endpoint paths carry
    /// their own leading slash.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { code, body });
        }

        Ok(response.json::<T>().await?)
    }

    async fn post<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { code, body });
        }

        Ok(response.json::<T>().await?)
    }
}

impl PlanningDataSource for PlanningApiClient {
    async fn fetch_sites(&self) -> Result<Vec<Site>, ApiError> {
        let response: ListResponse<SiteDto> = self
            .get("/api/v1/sites", &[])
            .await
            .map_err(into_api_error)?;
        Ok(response.into_items().iter().map(site_from_dto).collect())
    }

    async fn fetch_collaborators(&self) -> Result<Vec<Collaborator>, ApiError> {
        let response: ListResponse<CollaboratorDto> = self
            .get("/api/v1/collaborators", &[])
            .await
            .map_err(into_api_error)?;
        Ok(response
            .into_items()
            .iter()
            .map(collaborator_from_dto)
            .collect())
    }

    async fn fetch_shifts(
        &self,
        query: &ShiftInstanceQuery,
    ) -> Result<Vec<PlanningShift>, ApiError> {
        let response: ListResponse<PlanningShiftDto> = self
            .get("/api/v1/planning/shift-instances", &query.query_pairs())
            .await
            .map_err(into_api_error)?;
        response
            .into_items()
            .iter()
            .map(planning_shift_from_dto)
            .collect()
    }

    async fn start_auto_assign(&self, shift_ids: &[i64]) -> Result<AutoAssignJob, ApiError> {
        let request = AutoAssignStartRequest {
            shift_ids: shift_ids.to_vec(),
        };
        let dto: AutoAssignJobDto = self
            .post("/api/v1/planning/auto-assign", &request)
            .await
            .map_err(into_api_error)?;
        AutoAssignJob::from_dto(&dto)
    }

    async fn auto_assign_status(&self, job_id: &str) -> Result<AutoAssignJob, ApiError> {
        let endpoint = format!("/api/v1/planning/auto-assign/status/{job_id}");
        let dto: AutoAssignJobDto = self.get(&endpoint, &[]).await.map_err(into_api_error)?;
        AutoAssignJob::from_dto(&dto)
    }
}
