//! Integration tests using wiremock to simulate the Business API.

use serde_json::json;
use std::time::Duration;
use tiktok_business_api::catalog::ad::{AdCreateInput, AdFormat, Creative};
use tiktok_business_api::catalog::adgroup::{AdgroupCreateInput, BidType, PlacementType};
use tiktok_business_api::catalog::advertiser::AdvertiserInfoInput;
use tiktok_business_api::catalog::business_center::BusinessCenterGetInput;
use tiktok_business_api::catalog::campaign::{BudgetMode, CampaignGetInput, CampaignStatusUpdateInput};
use tiktok_business_api::catalog::pixel::{PixelCategory, PixelCreateInput, PixelListInput};
use tiktok_business_api::catalog::report::{DataLevel, ReportTaskCreateInput, ReportType};
use tiktok_business_api::catalog::Status;
use tiktok_business_api::{Client, ErrorKind, RequestOptions};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Client {
    Client::builder()
        .access_token("test-token")
        .base_url(server.uri())
        .unwrap()
        .retry_delay(Duration::from_millis(10))
        .build()
        .unwrap()
}

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "code": 0,
        "message": "OK",
        "request_id": "2024011512000001",
        "data": data,
    }))
}

#[tokio::test]
async fn test_create_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pixel/create/"))
        .and(header("Access-Token", "test-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "advertiser_id": "42",
            "pixel_name": "Checkout",
            "pixel_category": "ONLINE_STORE",
        })))
        .respond_with(ok(json!({
            "pixel_id": "p-1",
            "pixel_code": "C0DE",
            "pixel_name": "Checkout",
            "pixel_category": "ONLINE_STORE",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let input = PixelCreateInput::new("42", "Checkout").category(PixelCategory::OnlineStore);
    let response = client(&server).pixel().create(&input).await.unwrap();

    let created = response.data.as_ref().unwrap();
    assert_eq!(created.pixel_id, "p-1");
    assert_eq!(created.pixel_code, "C0DE");
    assert_eq!(created.pixel_category, Some(PixelCategory::OnlineStore));
    assert_eq!(response.request_id.as_deref(), Some("2024011512000001"));
    assert_eq!(response.message.as_deref(), Some("OK"));
    assert_eq!(response.attempts, 1);
    assert!(!response.was_retried());
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/campaign/status/update/"))
        .and(header("User-Agent", "my-integration/2.0"))
        .respond_with(ok(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .access_token("test-token")
        .base_url(server.uri())
        .unwrap()
        .user_agent("my-integration/2.0")
        .build()
        .unwrap();

    let input = CampaignStatusUpdateInput {
        advertiser_id: "42".to_string(),
        campaign_ids: vec!["c-1".to_string()],
        status: Status::Disable,
    };
    client.campaign().status_update(&input).await.unwrap();
}

#[tokio::test]
async fn test_get_sends_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pixel/list/"))
        .and(query_param("advertiser_id", "42"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "50"))
        .respond_with(ok(json!({
            "list": [{
                "pixel_id": "p-1",
                "pixel_name": "Checkout",
                "pixel_code": "C0DE",
                "pixel_category": "ONLINE_STORE",
                "status": "ENABLE",
                "create_time": 1700000000,
                "update_time": 1700000001,
            }],
            "page_info": { "page": 2, "page_size": 50, "total_number": 51, "total_page": 2 },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let input = PixelListInput::new("42").page(2, 50);
    let response = client(&server).pixel().list(&input).await.unwrap();

    assert_eq!(response.list.len(), 1);
    assert_eq!(response.list[0].status, Status::Enable);
    assert_eq!(response.page_info.as_ref().and_then(|p| p.total_number), Some(51));
}

#[tokio::test]
async fn test_array_query_parameters_are_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/advertiser/info/"))
        .and(query_param("advertiser_ids", r#"["1","2"]"#))
        .respond_with(ok(json!({ "list": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .advertiser()
        .info(&AdvertiserInfoInput::new(["1", "2"]))
        .await
        .unwrap();
    assert!(response.list.is_empty());
}

#[tokio::test]
async fn test_unauthorized_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/campaign/get/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 40100,
            "message": "Access token is invalid",
            "request_id": "r-401",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .campaign()
        .get(&CampaignGetInput::new("42"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.code(), Some(40100));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
    assert_eq!(err.request_id(), Some("r-401"));
    assert_eq!(err.message(), "Access token is invalid");
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_server_error_is_retried_up_to_budget() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/campaign/get/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let err = client(&server)
        .campaign()
        .get(&CampaignGetInput::new("42"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.code(), Some(500));
    assert_eq!(err.message(), "HTTP 500: Internal Server Error");
}

#[tokio::test]
async fn test_body_error_code_recovers_on_retry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/report/task/create/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 50002,
            "message": "Internal service error, please retry",
            "request_id": "r-busy",
        })))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/report/task/create/"))
        .respond_with(ok(json!({ "task_id": "t-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let input = ReportTaskCreateInput::new(
        "42",
        ReportType::Basic,
        DataLevel::AuctionCampaign,
        "2024-01-01",
        "2024-01-31",
    )
    .dimensions(["campaign_id", "stat_time_day"])
    .metrics(["spend", "impressions"]);

    let response = client(&server).report().task_create(&input).await.unwrap();
    assert_eq!(response.data.as_ref().map(|t| t.task_id.as_str()), Some("t-1"));
    assert_eq!(response.attempts, 3);
    assert!(response.was_retried());
}

#[tokio::test]
async fn test_rate_limit_hint_is_attached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pixel/list/"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "30")
                .set_body_json(json!({ "code": 40100, "message": "Too many requests" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .pixel()
        .list(&PixelListInput::new("42"))
        .await
        .unwrap_err();

    let info = err.rate_limit_info().unwrap();
    assert_eq!(info.retry_after, Some(Duration::from_secs(30)));
    assert!(info.is_rate_limited());
}

#[tokio::test]
async fn test_set_access_token_affects_later_calls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pixel/list/"))
        .and(header("Access-Token", "refreshed-token"))
        .respond_with(ok(json!({ "list": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.set_access_token("refreshed-token");
    assert_eq!(client.access_token(), "refreshed-token");

    client.pixel().list(&PixelListInput::new("42")).await.unwrap();
}

#[tokio::test]
async fn test_per_call_overrides() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pixel/list/"))
        .and(header("Access-Token", "other-advertiser-token"))
        .and(header("X-Debug-Trace", "1"))
        .respond_with(ok(json!({ "list": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let options = RequestOptions::new()
        .access_token("other-advertiser-token")
        .header("X-Debug-Trace", "1")
        .unwrap();

    client
        .pixel()
        .list_with(&PixelListInput::new("42"), options)
        .await
        .unwrap();
    assert_eq!(client.access_token(), "test-token");
}

#[tokio::test]
async fn test_call_by_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/app/list/"))
        .and(query_param("advertiser_id", "42"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "10"))
        .respond_with(ok(json!({ "list": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .call("app.list", json!({ "advertiser_id": "42" }), RequestOptions::new())
        .await
        .unwrap();
    assert_eq!(response.data, json!({ "list": [] }));
}

#[tokio::test]
async fn test_call_returns_data_as_sent() {
    let server = MockServer::start().await;

    let data = json!({
        "list": [{
            "campaign_id": "c-1",
            "campaign_name": "Launch",
            "objective_type": "TRAFFIC",
            "status": "ENABLE",
            "budget": 500,
            "create_time": 1705300000,
            "update_time": 1705300000,
            "secondary_status": "CAMPAIGN_STATUS_ENABLE",
        }],
    });
    Mock::given(method("GET"))
        .and(path("/campaign/get/"))
        .respond_with(ok(data.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .call("campaign.get", json!({ "advertiser_id": "42" }), RequestOptions::new())
        .await
        .unwrap();
    assert_eq!(response.data, data);
}

#[tokio::test]
async fn test_adgroup_create_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/adgroup/create/"))
        .and(body_json(json!({
            "advertiser_id": "42",
            "campaign_id": "c-1",
            "adgroup_name": "Lookalikes",
            "placement_type": "PLACEMENT_TYPE_TIKTOK",
            "bid_type": "BID_TYPE_BID_CAP",
            "bid_price": 1.5,
            "budget": 50.0,
            "budget_mode": "BUDGET_MODE_DAY",
            "status": "ENABLE",
        })))
        .respond_with(ok(json!({ "adgroup_id": "ag-9" })))
        .expect(1)
        .mount(&server)
        .await;

    let input = AdgroupCreateInput::new("42", "c-1", "Lookalikes", PlacementType::Tiktok, BidType::BidCap)
        .bid_price(1.5)
        .budget(50.0, BudgetMode::Day);
    let response = client(&server).adgroup().create(&input).await.unwrap();
    assert_eq!(response.data.unwrap().adgroup_id, "ag-9");
}

#[tokio::test]
async fn test_business_center_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bc/get/"))
        .and(query_param("bc_id", "bc-7"))
        .respond_with(ok(json!({
            "bc_id": "bc-7",
            "bc_name": "Acme Holdings",
            "time_zone": "Etc/GMT",
            "status": "ENABLE",
            "create_time": 1705300000,
            "update_time": 1705300000,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .business_center()
        .get(&BusinessCenterGetInput::new("bc-7"))
        .await
        .unwrap();
    assert_eq!(response.data.unwrap().bc_name, "Acme Holdings");
}

#[tokio::test]
async fn test_ad_create_rejects_bad_landing_page_before_sending() {
    let server = MockServer::start().await;

    let creative = Creative {
        ad_text: "Summer sale".to_string(),
        landing_page_url: Some("shop".to_string()),
        ..Creative::default()
    };
    let input = AdCreateInput::new("42", "ag-9", "Summer", AdFormat::SingleVideo, vec![creative]);
    let err = client(&server).ad().create(&input).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_call_unknown_operation() {
    let server = MockServer::start().await;

    let err = client(&server)
        .call("pixel.delete", json!({}), RequestOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[tokio::test]
async fn test_output_shape_mismatch_is_terminal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pixel/list/"))
        .respond_with(ok(json!({ "list": ["not a pixel"] })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .pixel()
        .list(&PixelListInput::new("42"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.request_id(), Some("2024011512000001"));
}

#[tokio::test]
async fn test_missing_data_decodes_as_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pixel/list/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 0, "message": "OK" })))
        .mount(&server)
        .await;

    let response = client(&server)
        .pixel()
        .list(&PixelListInput::new("42"))
        .await
        .unwrap();
    assert!(response.list.is_empty());
    assert!(response.page_info.is_none());
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open_api/v1.3/campaign/get/"))
        .respond_with(ok(json!({ "list": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .access_token("test-token")
        .base_url(format!("{}/open_api/v1.3", server.uri()))
        .unwrap()
        .build()
        .unwrap();

    client.campaign().get(&CampaignGetInput::new("42")).await.unwrap();
}
