use serde::Deserialize;
use serde_json::{Map, Value};

/// State value reported by Envoy once it accepts traffic.
pub const LIVE_STATE: &str = "LIVE";

/// Subset of the Envoy `/server_info` payload used by the readiness probe.
#[derive(Debug, PartialEq, Eq)]
pub struct ServerInfo {
    pub state: String,
    pub version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawServerInfo {
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    version: Option<Value>,
}

impl ServerInfo {
    /// Decodes a `/server_info` body.
    ///
    /// The body must be a JSON object. `state` must be a string when present;
    /// absent or `null` reads as the empty state. Every other field, `version`
    /// included, is optional and never fails the decode.
    pub fn decode(body: &[u8]) -> Result<Self, String> {
        // Decoding through a map first keeps JSON arrays from binding by position.
        let object: Map<String, Value> =
            serde_json::from_slice(body).map_err(|err| err.to_string())?;
        let raw: RawServerInfo =
            serde_json::from_value(Value::Object(object)).map_err(|err| err.to_string())?;

        let state = raw.state.unwrap_or_default();
        let version = match raw.version {
            Some(Value::String(version)) => Some(version),
            _ => None,
        };

        Ok(Self { state, version })
    }

    pub fn is_live(&self) -> bool {
        self.state == LIVE_STATE
    }
}

#[cfg(test)]
mod tests {
    use super::ServerInfo;

    #[test]
    fn decodes_state_and_ignores_unknown_fields() {
        let info = ServerInfo::decode(
            br#"{"version":"abc/1.13.1","state":"LIVE","hot_restart_version":"11.104","command_line_options":{"concurrency":2}}"#,
        )
        .expect("server info must decode");
        assert!(info.is_live());
        assert_eq!(info.version.as_deref(), Some("abc/1.13.1"));
    }

    #[test]
    fn missing_or_null_state_decodes_as_not_live() {
        let bodies: [&[u8]; 2] = [b"{}", br#"{"state":null}"#];
        for body in bodies {
            let info = ServerInfo::decode(body).expect("object must decode");
            assert_eq!(info.state, "");
            assert!(!info.is_live());
        }
    }

    #[test]
    fn state_comparison_is_case_sensitive() {
        let info = ServerInfo::decode(br#"{"state":"live"}"#).expect("must decode");
        assert!(!info.is_live());
    }

    #[test]
    fn non_string_state_is_rejected() {
        assert!(ServerInfo::decode(br#"{"state":1}"#).is_err());
        assert!(ServerInfo::decode(br#"{"state":["LIVE"]}"#).is_err());
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        let bodies: [&[u8]; 5] = [
            br#""LIVE""#,
            br#"["LIVE"]"#,
            b"[]",
            b"null",
            b"upstream connect error",
        ];
        for body in bodies {
            assert!(ServerInfo::decode(body).is_err(), "{:?}", String::from_utf8_lossy(body));
        }
    }

    #[test]
    fn wrongly_typed_version_is_ignored() {
        let info = ServerInfo::decode(br#"{"state":"LIVE","version":1}"#).expect("must decode");
        assert!(info.is_live());
        assert_eq!(info.version, None);
    }
}
