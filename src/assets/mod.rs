pub mod catalog;
pub mod io;
pub mod loader;

pub use catalog::{ModelCatalog, ModelDefinition};
pub use io::{AssetReader, AssetReaderVariant, FileAssetReader};
pub use loader::{AssetLoader, LoadProgress, LoadedAsset, ProgressFn};

#[cfg(feature = "http")]
pub use io::HttpAssetReader;
