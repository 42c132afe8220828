mod support;

use futures::executor::block_on;
use inventory_common::api::{ApiError, Endpoints, ListScope, Method};
use inventory_common::config::ClientConfig;
use inventory_common::model::{Category, Debtor, Product, Record, RecordId};
use serde_json::json;

use support::{BASE, client, client_with};

fn debtor(id: i64) -> Debtor {
    Debtor {
        id: id.into(),
        name: "Ann".into(),
        description: "Fabric".into(),
        ..Debtor::default()
    }
}

#[test]
fn debtor_update_uses_identifierless_route_by_default() {
    let (client, transport) = client();
    transport.status(Method::Put, "/debtors/", 200);

    block_on(client.update(&debtor(3))).expect("update");

    // The backend's route carries no id; the record travels in the body only.
    assert_eq!(transport.calls(), ["PUT /debtors/"]);
    assert_eq!(transport.last_body().map(|b| b["id"].clone()), Some(json!(3)));
}

#[test]
fn debtor_update_route_can_address_the_record() {
    let config = ClientConfig::new(BASE).with_endpoints(Endpoints::default().with_debtor_update("/debtors/{id}"));
    let (client, transport) = client_with(config);
    transport.status(Method::Put, "/debtors/3", 200);

    block_on(client.update(&debtor(3))).expect("update");
    assert_eq!(transport.calls(), ["PUT /debtors/3"]);
}

#[test]
fn categories_have_no_update_route() {
    let (client, transport) = client();
    let category = Category {
        id: 1.into(),
        name: "Shirts".into(),
        ..Category::default()
    };

    let err = block_on(client.update(&category)).unwrap_err();
    assert_eq!(
        err,
        ApiError::Unsupported {
            kind: Category::KIND,
            operation: "update"
        }
    );
    assert!(transport.calls().is_empty());
}

#[test]
fn delete_without_identifier_is_refused() {
    let (client, transport) = client();
    let err = block_on(client.delete(Debtor::KIND, &RecordId::UNSAVED)).unwrap_err();
    assert_eq!(err, ApiError::MissingId { kind: Debtor::KIND });
    assert!(transport.calls().is_empty());
}

#[test]
fn status_codes_map_to_errors() {
    let (client, transport) = client();
    transport
        .status(Method::Get, "/categories", 404)
        .status(Method::Get, "/debtors", 503);

    let not_found = block_on(client.list::<Category>(&ListScope::All)).unwrap_err();
    assert!(not_found.is_not_found());

    let unavailable = block_on(client.list::<Debtor>(&ListScope::All)).unwrap_err();
    assert!(matches!(unavailable, ApiError::Status { status: 503, .. }));
}

#[test]
fn malformed_body_is_a_decode_error() {
    let (client, transport) = client();
    transport.json(Method::Get, "/products/", json!({"not": "a list"}));

    let err = block_on(client.list::<Product>(&ListScope::All)).unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[test]
fn unscoped_list_for_unscoped_resource_falls_back() {
    let (client, transport) = client();
    transport.json(Method::Get, "/categories", json!([]));

    let categories = block_on(client.list::<Category>(&ListScope::Category(RecordId::from(1))))
        .expect("list");
    assert!(categories.is_empty());
    assert_eq!(transport.calls(), ["GET /categories"]);
}

#[test]
fn legacy_string_ids_round_trip_into_paths() {
    let (client, transport) = client();
    transport
        .json(Method::Get, "/categories", json!([{"_id": "65f0", "name": "Hats", "total": 2}]))
        .status(Method::Delete, "/categories/65f0", 200);

    let categories = block_on(client.list::<Category>(&ListScope::All)).expect("list");
    block_on(client.delete(Category::KIND, categories[0].id())).expect("delete");

    assert_eq!(transport.calls(), ["GET /categories", "DELETE /categories/65f0"]);
}

#[test]
fn records_carrying_both_id_keys_decode() {
    let (client, transport) = client();
    transport
        .json(
            Method::Get,
            "/debtors",
            json!([
                {"_id": "a7", "id": "a7", "name": "Ann", "description": "Fabric"},
                {"_id": "b2", "name": "Ben", "description": "Thread"}
            ]),
        )
        .status(Method::Delete, "/debtors/a7", 200);

    let debtors = block_on(client.list::<Debtor>(&ListScope::All)).expect("list");
    assert_eq!(debtors.len(), 2);
    assert_eq!(debtors[1].id(), &RecordId::from("b2"));

    block_on(client.delete(Debtor::KIND, debtors[0].id())).expect("delete");
    assert_eq!(transport.calls(), ["GET /debtors", "DELETE /debtors/a7"]);
}

#[test]
fn queued_replies_play_in_order_then_repeat() {
    let (client, transport) = client();
    transport
        .json(Method::Get, "/categories", json!([{"id": 1, "name": "Shirts"}]))
        .status(Method::Get, "/categories", 503);

    assert_eq!(block_on(client.list::<Category>(&ListScope::All)).map(|c| c.len()), Ok(1));
    for _ in 0..2 {
        let err = block_on(client.list::<Category>(&ListScope::All)).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 503, .. }));
    }
}
