//! Diesel table definitions. Keep in step with `backend/migrations/`.

diesel::table! {
    customer_master (customer_number) {
        customer_number -> Int4,
        #[max_length = 30]
        customer_name -> Varchar,
        #[max_length = 30]
        address_line -> Varchar,
        #[max_length = 20]
        city -> Varchar,
        #[max_length = 2]
        state -> Varchar,
        zip_code -> Int4,
        #[max_length = 12]
        phone -> Varchar,
        balance -> Numeric,
        credit_limit -> Numeric,
        last_order_date -> Nullable<Date>,
    }
}
