pub mod financial_controller;

pub use financial_controller::{
    create_financial, delete_financial, get_financial, list_financials, pay_financial,
    refund_payment,
};
