use crate::domain::RegistrationPayload;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

pub struct RegistrationApi;

impl RegistrationApi {
    pub fn register(backend_url: &str, payload: &RegistrationPayload) -> Result<String, String> {
        match serde_json::to_string(payload) {
            Ok(body) => {
                let url = format!("{}auth/register", backend_url);
                match Client::new()
                    .post(&url)
                    .header(CONTENT_TYPE, "application/json")
                    .body(body)
                    .send()
                {
                    Ok(response) => Ok(format!("HTTP {}", response.status())),
                    Err(e) => Err(e.to_string()),
                }
            }
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }
}
