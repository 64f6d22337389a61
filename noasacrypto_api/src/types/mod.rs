mod category;
pub use self::category::{Category, ParseCategoryError};

mod reason;
pub(crate) use self::reason::ErrorBody;
pub use self::reason::ReasonResult;
