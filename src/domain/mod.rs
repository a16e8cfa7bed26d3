pub mod common;
pub mod item;
pub mod transaction;
pub mod user;

pub use common::{Displayable, Identifiable, NamedEntity};
pub use item::{Item, ItemKind, ItemSummary, ItemVariant};
pub use transaction::{Transaction, TransactionAction, TransactionView};
pub use user::{HoldingRejection, User, UserId};
