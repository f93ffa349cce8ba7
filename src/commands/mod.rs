pub mod browse;
pub mod list;
pub mod search;
pub mod show;

pub use browse::*;
pub use list::*;
pub use search::*;
pub use show::*;
