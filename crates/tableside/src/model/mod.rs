//! Domain data: money, carts, orders, statuses and loyalty accounts.

pub mod cart;
pub mod loyalty;
pub mod money;
pub mod order;
pub mod status;

pub use cart::*;
pub use loyalty::*;
pub use money::*;
pub use order::*;
pub use status::*;
