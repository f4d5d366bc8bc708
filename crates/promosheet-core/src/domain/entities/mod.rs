pub mod adjustment;
pub mod hierarchy;
pub mod lookup;
pub mod promo_row;
pub mod records;
pub mod schedule;
