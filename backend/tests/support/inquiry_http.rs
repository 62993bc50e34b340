//! Drive the inquiry routes in-process and capture what a client would see.

use std::sync::Arc;

use actix_web::http::header;
use actix_web::{App, test, web};
use customer_inquiry::Trace;
use customer_inquiry::domain::ports::CustomerRecordStore;
use customer_inquiry::domain::{CustomerInquiryService, TRACE_ID_HEADER};
use customer_inquiry::inbound::http::configure_api;
use customer_inquiry::inbound::http::state::HttpState;
use serde_json::Value;

/// Status, headers of interest, and parsed body of one response.
#[derive(Debug, Clone)]
pub(crate) struct CapturedResponse {
    pub(crate) status: u16,
    pub(crate) trace_id: Option<String>,
    pub(crate) cache_control: Option<String>,
    pub(crate) raw_body: String,
    pub(crate) body: Value,
}

fn header_value(res: &actix_web::dev::ServiceResponse, name: &str) -> Option<String> {
    res.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Send `request` through the full HTTP stack backed by `store`.
pub(crate) async fn send<S>(store: S, request: test::TestRequest) -> CapturedResponse
where
    S: CustomerRecordStore + 'static,
{
    let service = CustomerInquiryService::with_default_timeout(Arc::new(store));
    let state = web::Data::new(HttpState::new(Arc::new(service)));
    let app = test::init_service(
        App::new()
            .app_data(state)
            .wrap(Trace)
            .configure(configure_api),
    )
    .await;

    let res = test::call_service(&app, request.to_request()).await;
    let status = res.status().as_u16();
    let trace_id = header_value(&res, TRACE_ID_HEADER);
    let cache_control = header_value(&res, header::CACHE_CONTROL.as_str());
    let bytes = test::read_body(res).await;
    let raw_body = String::from_utf8(bytes.to_vec()).expect("utf-8 body");
    let body = serde_json::from_str(&raw_body).expect("JSON body");

    CapturedResponse {
        status,
        trace_id,
        cache_control,
        raw_body,
        body,
    }
}
