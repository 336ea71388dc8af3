mod common;
mod images;
mod matches;
mod results;
mod standings;

pub use common::*;
pub use images::*;
pub use matches::*;
pub use results::*;
pub use standings::*;
