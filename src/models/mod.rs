pub mod criteria;
pub mod page;
pub mod record;
pub mod summary;

pub use criteria::*;
pub use page::*;
pub use record::*;
pub use summary::*;
