use crate::error::{AppError, Result};
use crate::sheets::client::AUTH_SCOPE;
use dialoguer::Input;
use hyper_util::client::legacy::connect::HttpConnector;
use std::fs;
use std::future::Future;
use std::io::ErrorKind;
use std::path::Path;
use std::pin::Pin;
use tracing::{debug, info, instrument, warn};
use yup_oauth2::authenticator_delegate::InstalledFlowDelegate;
use yup_oauth2::{
    ApplicationSecret, InstalledFlowAuthenticator, InstalledFlowReturnMethod,
    authenticator::Authenticator, hyper_rustls::HttpsConnector,
};

pub(crate) const GOOGLE_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

pub(super) type AuthType = Authenticator<HttpsConnector<HttpConnector>>;

/// Create and verify authenticator by fetching a token
#[instrument(name = "Authenticating to Google", skip_all)]
pub(super) async fn create_and_verify_authenticator(
    client_secret_path: &Path,
    token_cache_path: &Path,
) -> Result<AuthType> {
    let secret = read_client_secret(client_secret_path).await?;
    let auth = from_installed_flow(secret, token_cache_path).await?;

    // Runs the interactive flow when nothing usable is cached
    let _token = auth
        .token(&[AUTH_SCOPE])
        .await
        .map_err(|e| AppError::Auth(format!("Failed to get token: {}", e)))?;

    Ok(auth)
}

pub(super) async fn read_client_secret(path: &Path) -> Result<ApplicationSecret> {
    yup_oauth2::read_application_secret(path)
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::Config(format!(
                "Unable to read client secret file {}: {}",
                path.display(),
                e
            )),
            _ => AppError::Config(format!(
                "Unable to parse client secret file {}: {}",
                path.display(),
                e
            )),
        })
}

async fn from_installed_flow(
    secret: ApplicationSecret,
    token_cache_path: &Path,
) -> Result<AuthType> {
    let delegate = CodePromptDelegate::new(&secret);

    if !token_cache_path.exists() {
        info!(path = %token_cache_path.display(), "No cached token, token will be saved after authorization");
    } else if cached_tokens_readable(token_cache_path) {
        debug!(path = %token_cache_path.display(), "Using cached token");
    } else {
        warn!(path = %token_cache_path.display(), "Discarding unreadable token cache");
        fs::remove_file(token_cache_path)
            .map_err(|e| AppError::Auth(format!("Failed to delete tokens file: {}", e)))?;
    }

    // yup-oauth2 owns the token file and creates it with 0600 permissions
    let auth = InstalledFlowAuthenticator::builder(secret, InstalledFlowReturnMethod::Interactive)
        .flow_delegate(Box::new(delegate))
        .persist_tokens_to_disk(token_cache_path)
        .build()
        .await
        .map_err(|e| AppError::Auth(format!("Failed to build authenticator: {}", e)))?;

    Ok(auth)
}

/// yup-oauth2 stores its cache as a JSON array of `{ scopes, token }` entries.
fn cached_tokens_readable(path: &Path) -> bool {
    type CachedEntries = Vec<serde_json::Map<String, serde_json::Value>>;

    fs::read(path)
        .ok()
        .and_then(|data| serde_json::from_slice::<CachedEntries>(&data).ok())
        .is_some()
}

/// Prints the consent URL and reads the authorization code from stdin.
struct CodePromptDelegate {
    redirect_uri: String,
}

impl CodePromptDelegate {
    fn new(secret: &ApplicationSecret) -> Self {
        let redirect_uri = secret
            .redirect_uris
            .first()
            .cloned()
            .unwrap_or_else(|| GOOGLE_REDIRECT_URI.to_string());

        Self { redirect_uri }
    }
}

impl InstalledFlowDelegate for CodePromptDelegate {
    fn redirect_uri(&self) -> Option<&str> {
        Some(self.redirect_uri.as_str())
    }

    fn present_user_url<'a>(
        &'a self,
        url: &'a str,
        need_code: bool,
    ) -> Pin<Box<dyn Future<Output = std::result::Result<String, String>> + Send + 'a>> {
        Box::pin(async move {
            println!(
                "Go to the following link in your browser then type the authorization code:\n{}",
                url
            );

            if !need_code {
                return Ok(String::new());
            }

            tokio::task::spawn_blocking(|| {
                Input::<String>::new()
                    .with_prompt("Authorization code")
                    .interact_text()
                    .map(|code| code.trim().to_string())
                    .map_err(|e| format!("Unable to read authorization code: {}", e))
            })
            .await
            .map_err(|e| format!("Authorization prompt failed: {}", e))?
        })
    }
}
