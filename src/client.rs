// src/client.rs

use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};

pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// 登録・ログインに使うユーザーデータ
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub email: String,
    pub password: String,
    pub username: String,
    pub first_name: String,
    pub surname: String,
}

/// 1プローブ分のレスポンス（ステータス + パース済みJSONボディ）
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status_code: u16,
    pub body: Value,
}

impl ProbeResponse {
    /// ログイン成功時のみ `token` フィールドを取り出す
    pub fn token(&self) -> Option<String> {
        if self.status_code != 200 {
            return None;
        }
        self.body
            .get("token")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// AuthSystem API に対する HTTP クライアント。
/// 各メソッドは対象エンドポイントへ1リクエストを発行し、
/// ステータスコードとJSONボディを返す。
#[derive(Debug, Clone)]
pub struct AuthApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        AuthApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// POST /register — multipart フォーム + プロフィール画像
    pub async fn register(
        &self,
        user: &UserPayload,
        profile_image: Part,
    ) -> AppResult<ProbeResponse> {
        let form = Form::new()
            .text("email", user.email.clone())
            .text("password", user.password.clone())
            .text("username", user.username.clone())
            .text("firstName", user.first_name.clone())
            .text("surname", user.surname.clone())
            .part("profileImage", profile_image);

        let res = self
            .http
            .post(format!("{}/register", self.base_url))
            .multipart(form)
            .send()
            .await?;
        self.capture("/register", res).await
    }

    /// GET /verify?token=…
    pub async fn verify_email(&self, token: &str) -> AppResult<ProbeResponse> {
        let res = self
            .http
            .get(format!("{}/verify", self.base_url))
            .query(&[("token", token)])
            .send()
            .await?;
        self.capture("/verify", res).await
    }

    /// POST /login — JSON ボディ
    pub async fn login(&self, user: &UserPayload) -> AppResult<ProbeResponse> {
        let res = self
            .http
            .post(format!("{}/login", self.base_url))
            .json(user)
            .send()
            .await?;
        self.capture("/login", res).await
    }

    /// POST /text-verify — 確認コードの送信を要求
    pub async fn text_verify(&self, email: &str) -> AppResult<ProbeResponse> {
        let res = self
            .http
            .post(format!("{}/text-verify", self.base_url))
            .json(&json!({ "email": email }))
            .send()
            .await?;
        self.capture("/text-verify", res).await
    }

    /// POST /verify-text — 受信したコードの検証
    pub async fn verify_text(&self, email: &str, code: &str) -> AppResult<ProbeResponse> {
        let res = self
            .http
            .post(format!("{}/verify-text", self.base_url))
            .json(&json!({ "email": email, "code": code }))
            .send()
            .await?;
        self.capture("/verify-text", res).await
    }

    /// PUT /update-profile — multipart 画像 + x-auth-token ヘッダ
    pub async fn update_profile(
        &self,
        token: &str,
        profile_image: Part,
    ) -> AppResult<ProbeResponse> {
        let form = Form::new().part("profileImage", profile_image);
        let res = self
            .http
            .put(format!("{}/update-profile", self.base_url))
            .header(AUTH_TOKEN_HEADER, token)
            .multipart(form)
            .send()
            .await?;
        self.capture("/update-profile", res).await
    }

    /// DELETE /delete-account — x-auth-token ヘッダ
    pub async fn delete_account(&self, token: &str) -> AppResult<ProbeResponse> {
        let res = self
            .http
            .delete(format!("{}/delete-account", self.base_url))
            .header(AUTH_TOKEN_HEADER, token)
            .send()
            .await?;
        self.capture("/delete-account", res).await
    }

    /// ステータスコードとJSONボディを取り出す。
    /// ボディがJSONでない場合は致命的エラー（リトライしない）。
    async fn capture(&self, endpoint: &str, res: Response) -> AppResult<ProbeResponse> {
        let status_code = res.status().as_u16();
        let text = res.text().await?;
        let body =
            serde_json::from_str(&text).map_err(|source| AppError::InvalidResponseBody {
                endpoint: endpoint.to_string(),
                source,
            })?;

        Ok(ProbeResponse { status_code, body })
    }
}
