//! Domain ports for the hexagonal boundary.

mod customer_inquiry;
mod customer_record_store;

#[cfg(test)]
pub use customer_inquiry::MockCustomerInquiry;
pub use customer_inquiry::{
    CustomerInquiry, InquiryContext, InquiryRequest, InquirySource,
};
#[cfg(test)]
pub use customer_record_store::MockCustomerRecordStore;
pub use customer_record_store::{
    CustomerRecordStore, CustomerRecordStoreError, FixtureCustomerRecordStore,
};
