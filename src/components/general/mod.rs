pub mod features;
pub mod game_result;
pub mod language;
pub mod modal;
pub mod search_bar;
pub mod source_filter;
pub mod structured_data;
pub mod url_selection;

#[allow(unused_imports)]
pub use features::*;
#[allow(unused_imports)]
pub use game_result::*;
#[allow(unused_imports)]
pub use language::*;
#[allow(unused_imports)]
pub use modal::*;
#[allow(unused_imports)]
pub use search_bar::*;
#[allow(unused_imports)]
pub use source_filter::*;
#[allow(unused_imports)]
pub use structured_data::*;
#[allow(unused_imports)]
pub use url_selection::*;
