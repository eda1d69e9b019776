use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use crate::error::{Result, UserDirError};
use crate::store::UserStore;
use crate::types::User;

pub struct UsersClient {
    http: Client,
    endpoint: Url,
}

impl UsersClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>> {
        debug!(url = %self.endpoint, "fetching users");

        let response = self
            .http
            .get(self.endpoint.clone())
            .header("Accept", "application/json")
            .send()
            .await?;

        check_status(response.status())?;

        let body = response.text().await?;
        let users = parse_users(&body)?;
        debug!(count = users.len(), "fetched users");
        Ok(users)
    }

    /// Fill `store` from the API, recording any failure in its error slot.
    pub async fn load_into(&self, store: &mut UserStore) -> Result<()> {
        store.set_loading(true);
        store.clear_error();

        let result = self.fetch_users().await;
        store.set_loading(false);

        match result {
            Ok(users) => {
                store.set_users(users);
                Ok(())
            }
            Err(e) => {
                store.set_error(Some(fetch_error_message(&e)));
                Err(e)
            }
        }
    }
}

fn check_status(status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(UserDirError::ApiError {
            status: status.as_u16(),
        })
    }
}

/// Message shown to the user when loading fails.
pub fn fetch_error_message(err: &UserDirError) -> String {
    let msg = err.to_string();
    if msg.trim().is_empty() {
        UserDirError::FetchFailed.to_string()
    } else {
        msg
    }
}

/// Parse an API response body.
pub fn parse_users(body: &str) -> Result<Vec<User>> {
    serde_json::from_str(body).map_err(|e| {
        debug!(error = %e, "user list did not parse");
        UserDirError::Parse(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        },
        { "id": "u-2", "name": "Ervin Howell" }
    ]"#;

    #[test]
    fn test_parse_full_and_sparse_records() {
        let users = parse_users(SAMPLE).unwrap();
        assert_eq!(users.len(), 2);

        let leanne = &users[0];
        assert_eq!(leanne.id, UserId::Number(1));
        assert_eq!(leanne.address.geo.lat, "-37.3159");
        assert_eq!(leanne.company.catch_phrase, "Multi-layered client-server neural-net");

        let ervin = &users[1];
        assert_eq!(ervin.id, UserId::Text("u-2".to_string()));
        assert_eq!(ervin.email, "");
        assert_eq!(ervin.address.street, "");
        assert_eq!(ervin.company.name, "");
    }

    #[test]
    fn test_missing_geo_is_blank() {
        let users =
            parse_users(r#"[{ "id": 3, "address": { "street": "Victor Plains" } }]"#).unwrap();
        let geo = &users[0].address.geo;
        assert_eq!(geo.lat, "");
        assert_eq!(geo.lng, "");
    }

    #[test]
    fn test_parse_garbage_keeps_decoder_message() {
        let err = parse_users("<html>").unwrap_err();
        assert!(matches!(err, UserDirError::Parse(_)));

        let msg = fetch_error_message(&err);
        assert!(msg.starts_with("Invalid user list: "));
        assert!(msg.contains("line 1"));
        assert_ne!(msg, "Failed to fetch users");
    }

    #[test]
    fn test_status_mapping() {
        assert!(check_status(StatusCode::OK).is_ok());
        let err = check_status(StatusCode::NOT_FOUND).unwrap_err();
        assert_eq!(err.to_string(), "HTTP error: 404");
        assert_eq!(fetch_error_message(&err), "HTTP error: 404");
    }

    #[test]
    fn test_serialized_user_keeps_api_field_names() {
        let users = parse_users(SAMPLE).unwrap();
        let json = serde_json::to_value(&users[0]).unwrap();
        assert_eq!(json["company"]["catchPhrase"], "Multi-layered client-server neural-net");
        assert_eq!(json["id"], 1);
    }

    /// Serve `body` with `status` to a single request on a local port.
    fn serve_once(status: &'static str, body: &'static str) -> Url {
        use std::io::{BufRead, BufReader, Write};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }
            let mut stream = reader.into_inner();
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
        });
        Url::parse(&format!("http://{addr}/users")).unwrap()
    }

    #[tokio::test]
    async fn test_load_into_fills_store() {
        let client = UsersClient::new(serve_once("200 OK", SAMPLE));
        let mut store = UserStore::new();

        client.load_into(&mut store).await.unwrap();
        assert!(!store.is_loading());
        assert!(store.error().is_none());
        assert_eq!(store.users().len(), 2);
        assert_eq!(store.users()[0].name, "Leanne Graham");
    }

    #[tokio::test]
    async fn test_fetch_users_reports_status() {
        let client = UsersClient::new(serve_once("503 Service Unavailable", "[]"));
        let err = client.fetch_users().await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP error: 503");
    }

    #[tokio::test]
    async fn test_load_into_records_error() {
        // Nothing listens on the discard port.
        let client = UsersClient::new(Url::parse("http://127.0.0.1:9/users").unwrap());
        let mut store = UserStore::new();

        assert!(client.load_into(&mut store).await.is_err());
        assert!(!store.is_loading());
        assert!(store.error().is_some());
        assert!(store.users().is_empty());
    }
}
