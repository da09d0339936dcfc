// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Beacon queries and BOF execution

use csrest_api::{
    AsyncCommandResponse, Beacon, EmptyRequest, InlineExecutePack, InlineExecutePacked,
    InlineExecuteString,
};
use tokio_util::sync::CancellationToken;

use crate::client::Client;
use crate::error::Result;
use crate::transport::Request;

/// `/api/v1/beacons/{bid}{suffix}` with the beacon id percent-encoded
pub(crate) fn beacon_path(bid: &str, suffix: &str) -> String {
    format!("/api/v1/beacons/{}{}", urlencoding::encode(bid), suffix)
}

impl Client {
    pub async fn list_beacons(&self, cancel: &CancellationToken) -> Result<Vec<Beacon>> {
        let beacons = self
            .execute(Request::get("/api/v1/beacons"), cancel)
            .await?;
        Ok(beacons.unwrap_or_default())
    }

    pub async fn get_beacon(&self, bid: &str, cancel: &CancellationToken) -> Result<Beacon> {
        self.execute_required(Request::get(beacon_path(bid, "")), cancel)
            .await
    }

    /// Run a BOF with plain string arguments.
    pub async fn execute_bof_string(
        &self,
        bid: &str,
        req: &InlineExecuteString,
        cancel: &CancellationToken,
    ) -> Result<AsyncCommandResponse> {
        let request = Request::post(beacon_path(bid, "/execute/bof/string")).json(req);
        self.execute_required(request, cancel).await
    }

    /// Run a BOF with an already packed argument buffer.
    pub async fn execute_bof_packed(
        &self,
        bid: &str,
        req: &InlineExecutePacked,
        cancel: &CancellationToken,
    ) -> Result<AsyncCommandResponse> {
        let request = Request::post(beacon_path(bid, "/execute/bof/packed")).json(req);
        self.execute_required(request, cancel).await
    }

    /// Run a BOF with typed arguments packed server-side.
    pub async fn execute_bof_pack(
        &self,
        bid: &str,
        req: &InlineExecutePack,
        cancel: &CancellationToken,
    ) -> Result<AsyncCommandResponse> {
        let request = Request::post(beacon_path(bid, "/execute/bof/pack")).json(req);
        self.execute_required(request, cancel).await
    }

    pub async fn get_uid(
        &self,
        bid: &str,
        cancel: &CancellationToken,
    ) -> Result<AsyncCommandResponse> {
        let request = Request::post(beacon_path(bid, "/execute/getUid")).json(&EmptyRequest {});
        self.execute_required(request, cancel).await
    }

    /// Attempt to elevate the beacon to SYSTEM.
    pub async fn get_system(
        &self,
        bid: &str,
        cancel: &CancellationToken,
    ) -> Result<AsyncCommandResponse> {
        let request =
            Request::post(beacon_path(bid, "/execute/getSystem")).json(&EmptyRequest {});
        self.execute_required(request, cancel).await
    }
}
