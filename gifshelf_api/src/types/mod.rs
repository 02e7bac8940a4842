mod category;
pub use self::category::Category;

mod gif;
pub use self::gif::{GifDetail, GifImages, GifResponse, GifResult, PreviewImage};

mod search;
pub use self::search::{Pagination, SearchResponse};
