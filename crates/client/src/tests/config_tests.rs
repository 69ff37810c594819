// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ClientConfig, ClientError, Credentials, DEFAULT_TIMEOUT};

#[test]
fn test_token_credentials() {
    assert_eq!(
        Credentials::parse("glsa_abc").unwrap(),
        Credentials::Token(String::from("glsa_abc"))
    );
}

#[test]
fn test_basic_credentials_split_on_first_colon() {
    assert_eq!(
        Credentials::parse("admin:pa:ss").unwrap(),
        Credentials::Basic {
            user: String::from("admin"),
            password: String::from("pa:ss"),
        }
    );
}

#[test]
fn test_empty_credentials_are_rejected() {
    assert!(matches!(
        Credentials::parse(""),
        Err(ClientError::InvalidCredentials(_))
    ));
    assert!(matches!(
        Credentials::parse(":secret"),
        Err(ClientError::InvalidCredentials(_))
    ));
}

#[test]
fn test_credentials_debug_hides_secrets() {
    let token: String = format!("{:?}", Credentials::parse("glsa_abc").unwrap());
    let basic: String = format!("{:?}", Credentials::parse("admin:hunter2").unwrap());
    assert!(!token.contains("glsa_abc"));
    assert!(!basic.contains("hunter2"));
    assert!(basic.contains("admin"));
}

#[test]
fn test_config_rejects_non_http_urls() {
    for url in ["ftp://grafana.local", "not a url", "mailto:ops@example.com"] {
        assert!(
            matches!(
                ClientConfig::new(url, None, None, DEFAULT_TIMEOUT),
                Err(ClientError::InvalidUrl(_))
            ),
            "{url}"
        );
    }
}

#[test]
fn test_endpoint_keeps_sub_path() {
    let config: ClientConfig =
        ClientConfig::new("https://example.com/grafana/", Some("t"), Some(2), DEFAULT_TIMEOUT)
            .unwrap();
    assert_eq!(
        config.endpoint("api/reports").unwrap().as_str(),
        "https://example.com/grafana/api/reports"
    );

    let config: ClientConfig =
        ClientConfig::new("http://localhost:3000", None, None, DEFAULT_TIMEOUT).unwrap();
    assert_eq!(
        config.endpoint("/api/reports/4").unwrap().as_str(),
        "http://localhost:3000/api/reports/4"
    );
}
