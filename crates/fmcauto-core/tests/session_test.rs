#![allow(clippy::unwrap_used)]
// Integration tests for `Session` against a mocked controller.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fmcauto_core::{
    AddressObjectDraft, CollectionType, CoreError, DnsResolution, NatRuleDraft, Session,
    SessionConfig, TlsVerification,
};

const DOMAIN_UUID: &str = "e276abec-e0f2-11e3-8169-6d9ed49b625f";

// ── Helpers ─────────────────────────────────────────────────────────

fn config_path(suffix: &str) -> String {
    format!("/api/fmc_config/v1/domain/{DOMAIN_UUID}/{suffix}")
}

fn session_config(server: &MockServer) -> SessionConfig {
    SessionConfig {
        host: server.uri(),
        username: "admin".into(),
        password: SecretString::from("secret".to_owned()),
        domain: "Global".into(),
        tls: TlsVerification::DangerAcceptInvalid,
        timeout: std::time::Duration::from_secs(5),
    }
}

async fn setup() -> (MockServer, Session) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/fmc_platform/v1/auth/generatetoken"))
        .respond_with(
            ResponseTemplate::new(204)
                .insert_header("X-auth-access-token", "tok-abc")
                .insert_header(
                    "DOMAINS",
                    json!([{ "name": "Global", "uuid": DOMAIN_UUID }])
                        .to_string()
                        .as_str(),
                ),
        )
        .mount(&server)
        .await;

    let session = Session::establish(&session_config(&server)).await.unwrap();
    (server, session)
}

/// Mount the count probe and the full fetch for one collection.
async fn mount_collection(server: &MockServer, collection: &str, items: &[(&str, &str)]) {
    let items: Vec<Value> = items
        .iter()
        .map(|(name, id)| json!({ "id": id, "name": name }))
        .collect();
    let count = items.len();

    Mock::given(method("GET"))
        .and(path(config_path(&format!("object/{collection}"))))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": items.first().cloned().into_iter().collect::<Vec<_>>(),
            "paging": { "count": count }
        })))
        .mount(server)
        .await;

    if count > 1 {
        Mock::given(method("GET"))
            .and(path(config_path(&format!("object/{collection}"))))
            .and(query_param("limit", count.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": items,
                "paging": { "count": count }
            })))
            .mount(server)
            .await;
    }
}

async fn mount_policies(server: &MockServer, policies: &[(&str, &str)]) {
    let items: Vec<Value> = policies
        .iter()
        .map(|(name, id)| json!({ "id": id, "name": name, "type": "FTDNatPolicy" }))
        .collect();
    Mock::given(method("GET"))
        .and(path(config_path("policy/ftdnatpolicies")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": items })))
        .mount(server)
        .await;
}

fn rule_draft(original: &str) -> NatRuleDraft {
    serde_json::from_value(json!({
        "targetNatPolicy": "POL1",
        "originalNetwork": original,
        "translatedNetwork": "H2",
        "sourceInterface": "ZoneA",
        "destinationInterface": "ZoneB",
        "natType": "STATIC",
        "type": "FTDAutoNatRule"
    }))
    .unwrap()
}

fn object_draft(object_type: &str, value: &str) -> AddressObjectDraft {
    AddressObjectDraft {
        name: "obj1".into(),
        object_type: object_type.into(),
        value: Some(value.into()),
        description: "created by automation script".into(),
        dns_resolution: DnsResolution::Ipv4Only,
    }
}

// ── Session tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_establish_selects_domain() {
    let (_server, session) = setup().await;
    assert_eq!(session.domain().uuid, DOMAIN_UUID);
    assert!(session.cache().is_empty());
}

#[tokio::test]
async fn test_establish_bad_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/fmc_platform/v1/auth/generatetoken"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = Session::establish(&session_config(&server)).await.unwrap_err();
    assert!(err.is_auth(), "expected auth failure, got: {err:?}");
}

// ── Resolution tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_object_id_resolves_by_name() {
    let (server, mut session) = setup().await;
    mount_collection(&server, "hosts", &[("H1", "h1"), ("H2", "h2")]).await;

    let id = session.object_id(CollectionType::Hosts, "H2").await.unwrap();
    assert_eq!(id, "h2");
    assert!(session.cache().contains(CollectionType::Hosts));
}

#[tokio::test]
async fn test_collection_fetched_once_per_session() {
    let (server, mut session) = setup().await;
    mount_collection(&server, "hosts", &[("H1", "h1"), ("H2", "h2")]).await;

    session.object_id(CollectionType::Hosts, "H1").await.unwrap();
    session.object_id(CollectionType::Hosts, "H2").await.unwrap();

    let gets = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.url.path().ends_with("/object/hosts"))
        .count();
    assert_eq!(gets, 2, "one probe and one full fetch");
}

#[tokio::test]
async fn test_resolver_calls_are_independent() {
    let (server, session) = setup().await;
    mount_collection(&server, "hosts", &[("H1", "h1"), ("H2", "h2")]).await;

    let first = fmcauto_core::resolver::resolve_collection(session.client(), CollectionType::Hosts)
        .await
        .unwrap();
    let second =
        fmcauto_core::resolver::resolve_collection(session.client(), CollectionType::Hosts)
            .await
            .unwrap();
    assert_eq!(first, second);

    let full_fetches = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.url.query() == Some("limit=2"))
        .count();
    assert_eq!(full_fetches, 2);
}

#[tokio::test]
async fn test_missing_name_is_fatal_for_object_id() {
    let (server, mut session) = setup().await;
    mount_collection(&server, "hosts", &[("H1", "h1"), ("H2", "h2")]).await;

    let err = session
        .object_id(CollectionType::Hosts, "H9")
        .await
        .unwrap_err();
    assert!(
        matches!(err, CoreError::NotFound { ref name, .. } if name == "H9"),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
async fn test_empty_collection_is_an_error() {
    let (server, mut session) = setup().await;
    mount_collection(&server, "interfaceobjects", &[]).await;

    let err = session
        .object_id(CollectionType::InterfaceObjects, "ZoneA")
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::CollectionEmpty { .. }), "got: {err:?}");
}

// ── Address object tests ────────────────────────────────────────────

#[tokio::test]
async fn test_create_host_object_body() {
    let (server, session) = setup().await;
    Mock::given(method("POST"))
        .and(path(config_path("object/hosts")))
        .and(body_json(json!({
            "name": "obj1",
            "type": "hosts",
            "value": "10.0.0.5",
            "description": "created by automation script"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "new-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = session
        .create_address_object(object_draft("hosts", "10.0.0.5"))
        .await
        .unwrap();
    assert_eq!(resp.status, 201);
    assert_eq!(resp.body["id"], "new-1");
}

#[tokio::test]
async fn test_create_fqdn_object_body() {
    let (server, session) = setup().await;
    Mock::given(method("POST"))
        .and(path(config_path("object/fqdns")))
        .and(body_json(json!({
            "name": "obj1",
            "type": "fqdns",
            "value": "www.example.com",
            "dnsResolution": "IPV4_ONLY",
            "description": "created by automation script"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "new-2" })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = session
        .create_address_object(object_draft("fqdns", "www.example.com"))
        .await
        .unwrap();
    assert!(resp.is_success());
}

#[tokio::test]
async fn test_create_network_object_body() {
    let (server, session) = setup().await;
    Mock::given(method("POST"))
        .and(path(config_path("object/networks")))
        .and(body_json(json!({
            "name": "obj1",
            "type": "networks",
            "value": "10.0.0.0/24",
            "overridable": false,
            "description": "created by automation script"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "new-3" })))
        .expect(1)
        .mount(&server)
        .await;

    session
        .create_address_object(object_draft("networks", "10.0.0.0/24"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unsupported_object_type_sends_nothing() {
    let (server, session) = setup().await;
    Mock::given(method("POST"))
        .and(path(config_path("object/portobjects")))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let err = session
        .create_address_object(object_draft("portobjects", "80"))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "portobjects is not supported object type (allowed: fqdns, hosts, networks, ranges)"
    );
}

#[tokio::test]
async fn test_create_object_rejection_is_reported_not_raised() {
    let (server, session) = setup().await;
    Mock::given(method("POST"))
        .and(path(config_path("object/ranges")))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad range"))
        .mount(&server)
        .await;

    let resp = session
        .create_address_object(object_draft("ranges", "10.0.0.9-10.0.0.1"))
        .await
        .unwrap();
    assert_eq!(resp.status, 400);
    assert_eq!(resp.body, json!("bad range"));
}

// ── NAT policy tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_nat_policies_expanded_flag() {
    let (server, session) = setup().await;
    mount_policies(&server, &[("POL1", "p1")]).await;

    session.list_nat_policies(false).await.unwrap();
    session.list_nat_policies(true).await.unwrap();

    let queries: Vec<Option<String>> = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.url.path().ends_with("/policy/ftdnatpolicies"))
        .map(|r| r.url.query().map(str::to_owned))
        .collect();
    assert_eq!(queries, [None, Some("expanded=true".to_owned())]);
}

#[tokio::test]
async fn test_create_nat_policy_body() {
    let (server, session) = setup().await;
    Mock::given(method("POST"))
        .and(path(config_path("policy/ftdnatpolicies")))
        .and(body_json(json!({
            "type": "FTDNatPolicy",
            "name": "POL2",
            "description": "nat for lab"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "p2" })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = session.create_nat_policy("POL2", "nat for lab").await.unwrap();
    assert_eq!(resp.status, 201);
}

#[tokio::test]
async fn test_list_nat_rules_for_named_policy() {
    let (server, session) = setup().await;
    mount_policies(&server, &[("POL0", "p0"), ("POL1", "p1")]).await;
    Mock::given(method("GET"))
        .and(path(config_path("policy/ftdnatpolicies/p1/autonatrules")))
        .and(query_param("expanded", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "r1", "natType": "STATIC" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let rules = session.list_nat_rules("POL1", true).await.unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0]["natType"], "STATIC");
}

#[tokio::test]
async fn test_list_nat_rules_unknown_policy() {
    let (server, session) = setup().await;
    mount_policies(&server, &[("POL1", "p1")]).await;

    let err = session.list_nat_rules("NOPE", false).await.unwrap_err();
    assert!(
        matches!(err, CoreError::NotFound { ref entity_type, .. } if entity_type == "NAT policy"),
        "got: {err:?}"
    );
}

// ── Auto NAT rule tests ─────────────────────────────────────────────

#[tokio::test]
async fn test_create_nat_rule_resolves_every_reference() {
    let (server, mut session) = setup().await;
    mount_policies(&server, &[("POL1", "p1")]).await;
    mount_collection(&server, "hosts", &[("H1", "h1"), ("H2", "h2")]).await;
    mount_collection(&server, "interfaceobjects", &[("ZoneA", "zA"), ("ZoneB", "zB")]).await;

    Mock::given(method("POST"))
        .and(path(config_path("policy/ftdnatpolicies/p1/autonatrules")))
        .and(body_json(json!({
            "originalNetwork": { "type": "Host", "id": "h1" },
            "translatedNetwork": { "type": "Host", "id": "h2" },
            "sourceInterface": { "type": "SecurityZone", "id": "zA" },
            "destinationInterface": { "type": "SecurityZone", "id": "zB" },
            "natType": "STATIC",
            "type": "FTDAutoNatRule"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "r1" })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = session.create_nat_rule(rule_draft("H1")).await.unwrap();
    assert_eq!(resp.status, 201);
    assert_eq!(session.cache().len(), 2);
}

#[tokio::test]
async fn test_create_nat_rule_unknown_host_posts_nothing() {
    let (server, mut session) = setup().await;
    mount_policies(&server, &[("POL1", "p1")]).await;
    mount_collection(&server, "hosts", &[("H1", "h1"), ("H2", "h2")]).await;
    mount_collection(&server, "interfaceobjects", &[("ZoneA", "zA"), ("ZoneB", "zB")]).await;

    Mock::given(method("POST"))
        .and(path(config_path("policy/ftdnatpolicies/p1/autonatrules")))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let resp = session.create_nat_rule(rule_draft("H9")).await.unwrap();
    assert_eq!(resp.status, 404);
    assert_eq!(resp.to_string(), "404: UUID of H9 not found.");
}

#[tokio::test]
async fn test_create_nat_rule_unknown_zone_posts_nothing() {
    let (server, mut session) = setup().await;
    mount_policies(&server, &[("POL1", "p1")]).await;
    mount_collection(&server, "hosts", &[("H1", "h1"), ("H2", "h2")]).await;
    mount_collection(&server, "interfaceobjects", &[("ZoneA", "zA"), ("ZoneB", "zB")]).await;

    Mock::given(method("POST"))
        .and(path(config_path("policy/ftdnatpolicies/p1/autonatrules")))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut draft = rule_draft("H1");
    draft.destination_interface = "ZoneX".into();
    let resp = session.create_nat_rule(draft).await.unwrap();
    assert_eq!(resp.to_string(), "404: UUID of ZoneX not found.");

    let mut draft = rule_draft("H1");
    draft.source_interface = "ZoneY".into();
    let resp = session.create_nat_rule(draft).await.unwrap();
    assert_eq!(resp.to_string(), "404: UUID of ZoneY not found.");
}

#[tokio::test]
async fn test_create_nat_rule_empty_zone_collection_posts_nothing() {
    let (server, mut session) = setup().await;
    mount_policies(&server, &[("POL1", "p1")]).await;
    mount_collection(&server, "hosts", &[("H1", "h1"), ("H2", "h2")]).await;
    mount_collection(&server, "interfaceobjects", &[]).await;

    Mock::given(method("POST"))
        .and(path(config_path("policy/ftdnatpolicies/p1/autonatrules")))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let resp = session.create_nat_rule(rule_draft("H1")).await.unwrap();
    assert_eq!(resp.status, 404);
    assert_eq!(resp.to_string(), "404: UUID of ZoneA not found.");
}

#[tokio::test]
async fn test_create_nat_rule_unknown_policy_is_fatal() {
    let (server, mut session) = setup().await;
    mount_policies(&server, &[("POL0", "p0")]).await;

    let err = session.create_nat_rule(rule_draft("H1")).await.unwrap_err();
    assert!(
        matches!(err, CoreError::NotFound { ref name, .. } if name == "POL1"),
        "got: {err:?}"
    );
}

// ── Platform tests ──────────────────────────────────────────────────

#[tokio::test]
async fn test_server_version() {
    let (server, session) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/fmc_platform/v1/info/serverversion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "serverVersion": "7.4.1 (build 172)" }]
        })))
        .mount(&server)
        .await;

    let version = session.server_version().await.unwrap();
    assert_eq!(version.server_version, "7.4.1 (build 172)");
}
