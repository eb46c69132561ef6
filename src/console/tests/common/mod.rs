//! Test doubles for the admin API and the operator notifier

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use useradmin_client::{AdminApi, ClientError, ClientResult};
use useradmin_core::{AdminFlag, CustomData, Notice, Notifier, Target, TargetType};

/// One call received by the fake
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Flag(AdminFlag, String, bool),
    CustomData(String, CustomData),
    Access(String, TargetType, Vec<String>),
}

/// How the fake answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Ok,
    ServerError,
    Invalid,
    Unreachable,
}

/// Records calls and answers with a configurable reply
pub struct FakeAdminApi {
    pub calls: Mutex<Vec<ApiCall>>,
    reply: Mutex<Reply>,
    delay: Option<Duration>,
}

impl FakeAdminApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Mutex::new(Reply::Ok),
            delay: None,
        })
    }

    /// Fake whose calls take `delay` to complete
    pub fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Mutex::new(Reply::Ok),
            delay: Some(delay),
        })
    }

    pub fn reply_with(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, call: ApiCall) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let reply = *self.reply.lock().unwrap();
        match reply {
            Reply::Ok => Ok(()),
            Reply::ServerError => Err(ClientError::UnexpectedStatus {
                status: 500,
                body: "internal".to_string(),
            }),
            Reply::Invalid => Err(ClientError::Validation {
                status: 400,
                errors: json!({"website": "invalid"}),
            }),
            Reply::Unreachable => Err(ClientError::RequestFailed("connection refused".to_string())),
        }
    }
}

#[async_trait]
impl AdminApi for FakeAdminApi {
    async fn set_flag(&self, flag: AdminFlag, target: &Target, state: bool) -> ClientResult<()> {
        self.answer(ApiCall::Flag(flag, target.to_string(), state)).await
    }

    async fn replace_custom_data(&self, target: &Target, data: &CustomData) -> ClientResult<()> {
        self.answer(ApiCall::CustomData(target.to_string(), data.clone())).await
    }

    async fn set_access(
        &self,
        target: &Target,
        target_type: TargetType,
        scope: &[String],
    ) -> ClientResult<()> {
        self.answer(ApiCall::Access(target.to_string(), target_type, scope.to_vec()))
            .await
    }
}

/// Collects every notice for later assertions
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

pub fn target() -> Target {
    Target::new("64f0c2a1").unwrap()
}
