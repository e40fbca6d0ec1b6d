//! Login and registration forms

use regex::Regex;
use std::sync::OnceLock;

use super::{PageContext, PageError, PageResult};
use crate::api::ApiResponse;
use crate::journal::AuthPayload;
use crate::router::Route;

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";

/// `local@domain` with no whitespace and exactly one `@`
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+$";

fn email_regex() -> PageResult<&'static Regex> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    if let Some(re) = PATTERN.get() {
        return Ok(re);
    }
    let re = Regex::new(EMAIL_PATTERN)
        .map_err(|e| PageError::Validation(format!("Invalid email pattern: {}", e)))?;
    Ok(PATTERN.get_or_init(|| re))
}

/// Same shape check as an HTML `type=email` input
pub fn looks_like_email(value: &str) -> PageResult<bool> {
    Ok(email_regex()?.is_match(value.trim()))
}

fn require(value: &str, field: &str) -> PageResult<()> {
    if value.trim().is_empty() {
        return Err(PageError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn require_email(email: &str) -> PageResult<()> {
    require(email, "Email")?;
    if !looks_like_email(email)? {
        return Err(PageError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }
    Ok(())
}

/// Persist a successful auth response and go to the journal list
///
/// Returns the message to display on failure.
fn complete(
    ctx: &PageContext,
    response: ApiResponse<AuthPayload>,
    default_message: &str,
) -> PageResult<Option<String>> {
    match response {
        ApiResponse::Success(auth) => {
            ctx.session.write(&auth.token, &auth.user)?;
            ctx.navigator.push(Route::Journals);
            Ok(None)
        }
        failure => Ok(failure.message_or(default_message)),
    }
}

/// Sign-in form
#[derive(Debug, Default, Clone)]
pub struct LoginPage {
    pub email: String,
    pub password: String,
    pending: bool,
    error: Option<String>,
}

impl LoginPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn validate(&self) -> PageResult<()> {
        require_email(&self.email)?;
        require(&self.password, "Password")
    }

    /// Submit the form; returns `true` once signed in and redirected
    ///
    /// On failure the fields are kept and [`error`](Self::error) holds the
    /// message to show.
    pub async fn submit(&mut self, ctx: &PageContext) -> PageResult<bool> {
        if self.pending {
            return Ok(false);
        }
        self.error = None;
        if let Err(e) = self.validate() {
            self.error = Some(e.to_string());
            return Ok(false);
        }

        self.pending = true;
        let result = ctx.api.login(self.email.trim(), &self.password).await;
        self.pending = false;

        let response = result.map_err(|e| {
            self.error = Some(LOGIN_FAILED.to_string());
            e
        })?;

        self.error = complete(ctx, response, LOGIN_FAILED)?;
        if self.error.is_none() {
            tracing::info!(email = %self.email.trim(), "Logged in");
        }
        Ok(self.error.is_none())
    }
}

/// Account creation form
#[derive(Debug, Default, Clone)]
pub struct RegisterPage {
    pub name: String,
    pub email: String,
    pub password: String,
    pending: bool,
    error: Option<String>,
}

impl RegisterPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn validate(&self) -> PageResult<()> {
        require(&self.name, "Name")?;
        require_email(&self.email)?;
        require(&self.password, "Password")
    }

    /// Submit the form; returns `true` once registered and redirected
    pub async fn submit(&mut self, ctx: &PageContext) -> PageResult<bool> {
        if self.pending {
            return Ok(false);
        }
        self.error = None;
        if let Err(e) = self.validate() {
            self.error = Some(e.to_string());
            return Ok(false);
        }

        self.pending = true;
        let result = ctx
            .api
            .register(self.name.trim(), self.email.trim(), &self.password)
            .await;
        self.pending = false;

        let response = result.map_err(|e| {
            self.error = Some(REGISTRATION_FAILED.to_string());
            e
        })?;

        self.error = complete(ctx, response, REGISTRATION_FAILED)?;
        if self.error.is_none() {
            tracing::info!(email = %self.email.trim(), "Registered");
        }
        Ok(self.error.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{auth, FakeApi};

    fn filled_login() -> LoginPage {
        LoginPage {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_login_success_persists_session() {
        let h = FakeApi::new()
            .with_auth(ApiResponse::Success(auth("tok-9", "Ada")))
            .harness();
        let mut page = filled_login();

        assert!(page.submit(&h.ctx).await.unwrap());

        assert_eq!(h.ctx.session.token().as_deref(), Some("tok-9"));
        assert_eq!(h.ctx.session.read().map(|u| u.name), Some("Ada".to_string()));
        assert_eq!(h.history.current(), Route::Journals);
        assert!(page.error().is_none());
    }

    #[tokio::test]
    async fn test_login_failure_writes_nothing() {
        let h = FakeApi::new()
            .with_auth(ApiResponse::Failure {
                message: Some("Invalid credentials".to_string()),
            })
            .harness();
        let mut page = filled_login();

        assert!(!page.submit(&h.ctx).await.unwrap());

        assert_eq!(page.error(), Some("Invalid credentials"));
        assert_eq!(page.email, "ada@example.com");
        assert!(h.ctx.session.token().is_none());
        assert!(h.ctx.session.read().is_none());
        assert_eq!(h.history.navigations(), 0);
    }

    #[tokio::test]
    async fn test_login_failure_default_message() {
        let h = FakeApi::new()
            .with_auth(ApiResponse::Failure { message: None })
            .harness();
        let mut page = filled_login();

        page.submit(&h.ctx).await.unwrap();
        assert_eq!(page.error(), Some(LOGIN_FAILED));
    }

    #[tokio::test]
    async fn test_invalid_form_never_calls_api() {
        let h = FakeApi::new().harness();
        let mut page = LoginPage {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };

        assert!(!page.submit(&h.ctx).await.unwrap());
        assert_eq!(page.error(), Some("Please enter a valid email address"));

        page.email = "ada@example.com".to_string();
        page.password = "  ".to_string();
        assert!(!page.submit(&h.ctx).await.unwrap());
        assert_eq!(page.error(), Some("Password is required"));

        assert!(h.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_shows_default_message() {
        let h = FakeApi::new().offline().harness();
        let mut page = filled_login();

        let err = page.submit(&h.ctx).await.unwrap_err();
        assert!(matches!(err, PageError::Api(_)));
        assert_eq!(page.error(), Some(LOGIN_FAILED));
        assert!(!page.is_pending());
    }

    #[tokio::test]
    async fn test_register_success_and_failure() {
        let h = FakeApi::new()
            .with_auth(ApiResponse::Success(auth("tok-r", "Grace")))
            .harness();
        let mut page = RegisterPage {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            password: "pw".to_string(),
            ..Default::default()
        };
        assert!(page.submit(&h.ctx).await.unwrap());
        assert_eq!(h.history.current(), Route::Journals);

        let h = FakeApi::new()
            .with_auth(ApiResponse::Failure { message: None })
            .harness();
        assert!(!page.submit(&h.ctx).await.unwrap());
        assert_eq!(page.error(), Some(REGISTRATION_FAILED));
        assert!(h.ctx.session.token().is_none());
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("ada@example.com").unwrap());
        assert!(looks_like_email("  ada@example.com ").unwrap());
        assert!(!looks_like_email("ada").unwrap());
        assert!(!looks_like_email("@example.com").unwrap());
        assert!(!looks_like_email("ada@").unwrap());
        assert!(!looks_like_email("a b@example.com").unwrap());
        assert!(!looks_like_email("ada@ex@ample.com").unwrap());
    }

    #[test]
    fn test_register_requires_name() {
        let page = RegisterPage {
            email: "grace@example.com".to_string(),
            password: "pw".to_string(),
            ..Default::default()
        };
        assert!(matches!(page.validate(), Err(PageError::Validation(m)) if m == "Name is required"));
    }
}
