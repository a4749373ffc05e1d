mod assets;

pub use assets::AssetEncoder;
pub use assets::Overlay;
pub use assets::encode_bytes;
