pub mod goods_receiving;
pub mod operator_account;
pub mod product_master;
pub mod sales;
pub mod unit;

pub use unit::UnitOfMeasurement;
