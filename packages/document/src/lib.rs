pub mod assets;
pub mod factory;
pub mod host;
pub mod id;
pub mod layer;
pub mod page;
pub mod store;

pub use assets::{AssetError, SharedColor, SharedStyleEntry};
pub use factory::{ConstructError, LayerFactory, StandardFactory};
pub use host::{HostContext, NullHost};
pub use id::{get_session_seed, IdGenerator};
pub use layer::{LayerContainer, NativeLayer};
pub use page::Page;
pub use store::{DocumentStore, SYMBOLS_PAGE_NAME};
