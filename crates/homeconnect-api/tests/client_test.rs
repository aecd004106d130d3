#![allow(clippy::unwrap_used)]
// REST client tests using wiremock.

use std::sync::Arc;

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use homeconnect_api::{
    Client, CommandKey, Error, Language, SettingKey, StaticToken, StatusKey, TransportConfig,
};

const HA_ID: &str = "BOSCH-WAT28400-68A40E251128";

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let tokens = Arc::new(StaticToken::new(SecretString::from("t0k3n")));
    let client = Client::new(
        Url::parse(&server.uri()).unwrap(),
        tokens,
        &TransportConfig::default(),
    )
    .unwrap();
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_get_home_appliances() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/homeappliances"))
        .and(header("authorization", "Bearer t0k3n"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "homeappliances": [
                    {
                        "haId": HA_ID,
                        "name": "Washer",
                        "type": "Washer",
                        "brand": "Bosch",
                        "vib": "WAT28400",
                        "enumber": "WAT28400/05",
                        "connected": true
                    },
                    { "haId": "SIEMENS-HCS02DWH1-6F2FC400C1EA", "connected": false }
                ]
            }
        })))
        .mount(&server)
        .await;

    let appliances = client.get_home_appliances().await.unwrap().homeappliances;
    assert_eq!(appliances.len(), 2);
    assert_eq!(appliances[0].ha_id, HA_ID);
    assert_eq!(appliances[0].brand.as_deref(), Some("Bosch"));
    assert!(!appliances[1].connected);
    assert!(appliances[1].name.is_none());
}

#[tokio::test]
async fn test_get_status_value_with_language() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/api/homeappliances/{HA_ID}/status/BSH.Common.Status.DoorState"
        )))
        .and(header("accept-language", "en-GB"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "key": "BSH.Common.Status.DoorState",
                "value": "BSH.Common.EnumType.DoorState.Closed",
                "displayvalue": "Closed"
            }
        })))
        .mount(&server)
        .await;

    let status = client
        .get_status_value(HA_ID, StatusKey::BshCommonDoorState, Some(Language::EnGb))
        .await
        .unwrap();
    assert_eq!(status.key, StatusKey::BshCommonDoorState);
    assert_eq!(status.display_value.as_deref(), Some("Closed"));
}

#[tokio::test]
async fn test_set_setting_sends_data_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(format!(
            "/api/homeappliances/{HA_ID}/settings/BSH.Common.Setting.PowerState"
        )))
        .and(body_json(json!({
            "data": {
                "key": "BSH.Common.Setting.PowerState",
                "value": "BSH.Common.EnumType.PowerState.Standby"
            }
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .set_setting(
            HA_ID,
            SettingKey::BshCommonPowerState,
            &json!("BSH.Common.EnumType.PowerState.Standby"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_put_command() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(format!(
            "/api/homeappliances/{HA_ID}/commands/BSH.Common.Command.PauseProgram"
        )))
        .and(body_json(json!({
            "data": { "key": "BSH.Common.Command.PauseProgram", "value": true }
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .put_command(HA_ID, CommandKey::BshCommonPauseProgram, &json!(true))
        .await
        .unwrap();
}

// ── Error-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_no_program_active_maps_by_key() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/homeappliances/{HA_ID}/programs/active")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "key": "SDK.Error.NoProgramActive",
                "description": "There is no program active"
            }
        })))
        .mount(&server)
        .await;

    let err = client.get_active_program(HA_ID, None).await.unwrap_err();
    assert!(matches!(err, Error::NoProgramActive(_)));
    assert_eq!(
        err.to_string(),
        "No program active: There is no program active (SDK.Error.NoProgramActive)"
    );
}

#[tokio::test]
async fn test_stop_program_wrong_operation_state() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/api/homeappliances/{HA_ID}/programs/active")))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": { "key": "SDK.Error.WrongOperationState" }
        })))
        .mount(&server)
        .await;

    let err = client.stop_program(HA_ID).await.unwrap_err();
    assert!(matches!(err, Error::WrongOperationState(_)));
}

#[tokio::test]
async fn test_unexpected_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/homeappliances/{HA_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client.get_specific_appliance(HA_ID).await.unwrap_err();
    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "<html>maintenance</html>"),
        other => panic!("expected Deserialization, got {other:?}"),
    }
}
