//! Behaviour tests for the customer inquiry pipeline over HTTP.
//!
//! Each scenario builds the store double from its given steps, sends one
//! request through the real routes and middleware, and inspects the captured
//! response.

#[path = "support/inquiry_http.rs"]
mod inquiry_http;
#[path = "support/store_doubles.rs"]
mod store_doubles;

use actix_web::test::TestRequest;
use customer_inquiry::domain::CustomerRecord;
use customer_inquiry::domain::ports::CustomerRecordStoreError;
use inquiry_http::{CapturedResponse, send};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};
use store_doubles::{RecordingCustomerStore, StoreResponse, customer};

const FAULT_DETAIL: &str = "connection refused by db-primary:5432";

#[derive(Default, ScenarioState)]
struct InquiryWorld {
    records: Slot<Vec<CustomerRecord>>,
    fault: Slot<CustomerRecordStoreError>,
    store_calls: Slot<Vec<u32>>,
    response: Slot<CapturedResponse>,
}

impl InquiryWorld {
    fn store(&self) -> RecordingCustomerStore {
        match self.fault.get() {
            Some(error) => RecordingCustomerStore::new(StoreResponse::Fault(error)),
            None => RecordingCustomerStore::with_records(self.records.get().unwrap_or_default()),
        }
    }

    fn perform(&self, request: TestRequest) {
        let store = self.store();
        let recorder = store.clone();
        let captured = actix_web::rt::System::new().block_on(send(store, request));
        self.store_calls.set(recorder.calls());
        self.response.set(captured);
    }

    fn response(&self) -> CapturedResponse {
        self.response.get().expect("a request should have been sent")
    }

    fn body_field(&self, field: &str) -> Value {
        self.response()
            .body
            .get(field)
            .cloned()
            .unwrap_or_else(|| panic!("response body should contain {field}"))
    }
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"')
}

#[fixture]
fn world() -> InquiryWorld {
    InquiryWorld::default()
}

#[given("the store holds customer {number} with balance {balance}")]
fn the_store_holds_customer(world: &InquiryWorld, number: i64, balance: String) {
    let mut records = world.records.take().unwrap_or_default();
    records.push(customer(number, &balance));
    world.records.set(records);
}

#[given("the store fails with a connection error")]
fn the_store_fails_with_a_connection_error(world: &InquiryWorld) {
    world
        .fault
        .set(CustomerRecordStoreError::connection(FAULT_DETAIL));
}

#[when("the client requests customer {key} by path")]
fn the_client_requests_customer_by_path(world: &InquiryWorld, key: String) {
    world.perform(TestRequest::get().uri(&format!("/api/v1/customers/{key}")));
}

#[when("the client inquires about customer {key} by body")]
fn the_client_inquires_about_customer_by_body(world: &InquiryWorld, key: i64) {
    world.perform(
        TestRequest::post()
            .uri("/api/v1/customers/inquire")
            .set_json(json!({ "customerNumber": key })),
    );
}

#[when("the client posts a body that is not an object")]
fn the_client_posts_a_body_that_is_not_an_object(world: &InquiryWorld) {
    world.perform(
        TestRequest::post()
            .uri("/api/v1/customers/inquire")
            .set_json(json!([12345])),
    );
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &InquiryWorld, status: u16) {
    assert_eq!(world.response().status, status);
}

#[then("the customer number is {number}")]
fn the_customer_number_is(world: &InquiryWorld, number: u64) {
    assert_eq!(world.body_field("customerNumber").as_u64(), Some(number));
}

#[then("the balance is {balance}")]
fn the_balance_is(world: &InquiryWorld, balance: String) {
    assert_eq!(
        world.body_field("balance").as_str(),
        Some(unquote(&balance))
    );
}

#[then("the error code is {code}")]
fn the_error_code_is(world: &InquiryWorld, code: String) {
    assert_eq!(world.body_field("error").as_str(), Some(unquote(&code)));
}

#[then("the error message is {message}")]
fn the_error_message_is(world: &InquiryWorld, message: String) {
    assert_eq!(
        world.body_field("message").as_str(),
        Some(unquote(&message))
    );
}

#[then("the store was consulted once")]
fn the_store_was_consulted_once(world: &InquiryWorld) {
    assert_eq!(world.store_calls.get().map(|calls| calls.len()), Some(1));
}

#[then("the store was not consulted")]
fn the_store_was_not_consulted(world: &InquiryWorld) {
    assert_eq!(world.store_calls.get(), Some(Vec::new()));
}

#[then("the response carries a trace id")]
fn the_response_carries_a_trace_id(world: &InquiryWorld) {
    let trace_id = world.response().trace_id.expect("trace id header");
    assert!(uuid::Uuid::parse_str(&trace_id).is_ok(), "{trace_id}");
}

#[then("the response is not cacheable")]
fn the_response_is_not_cacheable(world: &InquiryWorld) {
    assert_eq!(world.response().cache_control.as_deref(), Some("no-store"));
}

#[then("the body does not mention the fault")]
fn the_body_does_not_mention_the_fault(world: &InquiryWorld) {
    let raw_body = world.response().raw_body;
    assert!(!raw_body.contains("db-primary"), "{raw_body}");
    assert!(!raw_body.contains("connection"), "{raw_body}");
}

#[scenario(
    path = "tests/features/customer_inquiry.feature",
    name = "An existing customer is returned"
)]
fn existing_customer_is_returned(world: InquiryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/customer_inquiry.feature",
    name = "The body surface answers like the path surface"
)]
fn body_surface_matches_path_surface(world: InquiryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/customer_inquiry.feature",
    name = "A missing customer is not found"
)]
fn missing_customer_is_not_found(world: InquiryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/customer_inquiry.feature",
    name = "Zero is rejected before the store is consulted"
)]
fn zero_is_rejected(world: InquiryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/customer_inquiry.feature",
    name = "Keys above the maximum are rejected"
)]
fn keys_above_maximum_are_rejected(world: InquiryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/customer_inquiry.feature",
    name = "A body that is not an object is rejected"
)]
fn non_object_body_is_rejected(world: InquiryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/customer_inquiry.feature",
    name = "A store fault hides its cause"
)]
fn store_fault_hides_its_cause(world: InquiryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/customer_inquiry.feature",
    name = "Negative balances keep their sign and scale"
)]
fn negative_balances_keep_sign_and_scale(world: InquiryWorld) {
    let _ = world;
}
